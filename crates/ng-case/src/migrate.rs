//! Case file version handling.

use crate::CaseError;
use crate::schema::CaseFile;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut case: CaseFile) -> Result<CaseFile, CaseError> {
    if case.version > LATEST_VERSION {
        return Err(CaseError::Version {
            found: case.version,
            supported: LATEST_VERSION,
        });
    }
    // Version 0 files are structurally identical to version 1.
    if case.version == 0 {
        case.version = 1;
    }
    Ok(case)
}
