//! bf-core: stable foundation for bioflow.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - props (physical property constants for the AD-HTC plant model)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod props;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{BfError, BfResult};
pub use numeric::*;
pub use units::*;
