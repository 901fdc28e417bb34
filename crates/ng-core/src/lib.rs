//! ng-core: shared foundation for the natural-gas property workspace.
//!
//! Contains:
//! - units (uom SI types, constructors, and the gas constant)
//! - numeric (finiteness and positivity checks)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
