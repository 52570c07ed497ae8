//! Physical property constants for the AD-HTC plant model.
//!
//! Read-only for the process lifetime; every solver and estimator draws
//! from this table so that intra-cycle deltas stay internally consistent.

/// Specific heat of air at constant pressure [kJ/(kg·K)].
pub const CP_AIR_KJ_PER_KG_K: f64 = 1.005;

/// Ratio of specific heats for air.
pub const GAMMA_AIR: f64 = 1.4;

/// Gas constant for air [kJ/(kg·K)].
pub const R_AIR_KJ_PER_KG_K: f64 = 0.287;

/// Specific heat of superheated steam, linearized [kJ/(kg·K)].
pub const CP_STEAM_KJ_PER_KG_K: f64 = 2.01;

/// Latent heat of vaporization of water [kJ/kg].
pub const HFG_WATER_KJ_PER_KG: f64 = 2257.0;

/// Specific heat of liquid water [kJ/(kg·K)].
pub const CP_WATER_KJ_PER_KG_K: f64 = 4.186;

/// Lower heating value of biogas [MJ/m³].
pub const BIOGAS_LHV_MJ_PER_M3: f64 = 22.0;

/// Higher heating value of hydrochar [MJ/kg].
pub const HYDROCHAR_HHV_MJ_PER_KG: f64 = 25.0;

/// 0 °C in kelvin; entropy datum for the liquid-water reference.
pub const T_REF_K: f64 = 273.15;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn air_constants_consistent() {
        // cv = cp - R, gamma = cp / cv within the table's own precision
        let cv = CP_AIR_KJ_PER_KG_K - R_AIR_KJ_PER_KG_K;
        let gamma = CP_AIR_KJ_PER_KG_K / cv;
        assert!((gamma - GAMMA_AIR).abs() < 0.01);
    }
}
