//! bf-biomass: biomass conversion estimators for the AD-HTC plant.
//!
//! Two stateless mass/energy balance estimators, linear in feed rate:
//! - [`digestion`]: anaerobic digestion of moisture-rich biomass to biogas.
//! - [`carbonization`]: hydrothermal carbonization of moisture-lean biomass
//!   to hydrochar.
//!
//! These are simple balance derivations, not cycle analyses, so there are
//! no state points. Inputs are not range-validated here (caller concern);
//! outputs are full precision.

pub mod carbonization;
pub mod digestion;

pub use carbonization::{CarbonizationInput, HtcBalance};
pub use digestion::{BiogasYield, DigestionInput};
