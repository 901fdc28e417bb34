//! ng-case: case file format, unit-aware input and case execution.

pub mod migrate;
pub mod run;
pub mod schema;
pub mod units;
pub mod validate;

pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use run::{
    CaseReport, PointReport, SweepPointReport, SweepReport, build_composition, build_conditions,
    build_engine, build_sweep, check_species, run_case,
};
pub use schema::*;
pub use units::{Quantity, QuantityInput, UnitError, parse_quantity};
pub use validate::{ValidationError, validate_case};

pub type CaseResult<T> = Result<T, CaseError>;

#[derive(thiserror::Error, Debug)]
pub enum CaseError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported case file version {found} (latest supported is {supported})")]
    Version { found: u32, supported: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unit error: {0}")]
    Unit(#[from] UnitError),

    #[error(transparent)]
    Eos(#[from] ng_eos::EosError),
}

pub fn load_yaml(path: &std::path::Path) -> CaseResult<CaseFile> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn from_yaml_str(content: &str) -> CaseResult<CaseFile> {
    let case: CaseFile = serde_yaml::from_str(content)?;
    let case = migrate_to_latest(case)?;
    validate_case(&case)?;
    Ok(case)
}

pub fn save_yaml(path: &std::path::Path, case: &CaseFile) -> CaseResult<()> {
    validate_case(case)?;
    let content = serde_yaml::to_string(case)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> CaseResult<CaseFile> {
    let content = std::fs::read_to_string(path)?;
    let case: CaseFile = serde_json::from_str(&content)?;
    let case = migrate_to_latest(case)?;
    validate_case(&case)?;
    Ok(case)
}

pub fn save_json(path: &std::path::Path, case: &CaseFile) -> CaseResult<()> {
    validate_case(case)?;
    let content = serde_json::to_string_pretty(case)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` as JSON, anything else as YAML.
pub fn load(path: &std::path::Path) -> CaseResult<CaseFile> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_yaml(path),
    }
}
