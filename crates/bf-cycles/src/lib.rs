//! bf-cycles: thermodynamic cycle solvers for the AD-HTC plant.
//!
//! Two independent, stateless solvers:
//! - [`brayton`]: gas-turbine (Brayton) cycle with isentropic-efficiency
//!   corrections on the compressor and turbine.
//! - [`steam`]: linearized HTC steam (Rankine-like) cycle.
//!
//! Both return a 4-point [`state::CycleStates`] set plus a metrics record.
//! All values are full precision; rounding is a presentation concern.

pub mod brayton;
pub mod state;
pub mod steam;

pub use brayton::{BraytonInput, GasCycleMetrics};
pub use state::{CycleStates, StatePoint};
pub use steam::{SteamCycleMetrics, SteamInput};
