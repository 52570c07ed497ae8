//! Scenario file schema.
//!
//! A scenario describes one operating point of the whole plant: the two
//! biomass tanks and the gas-turbine settings. Defaults mirror the
//! reference operating point (tank A moisture-lean to HTC, tank B
//! moisture-rich to AD).

use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    /// Moisture-lean biomass routed to the HTC reactor
    #[serde(default)]
    pub tank_a: HtcFeedDef,
    /// Moisture-rich biomass routed to the digester
    #[serde(default)]
    pub tank_b: AdFeedDef,
    #[serde(default)]
    pub gas_turbine: GasTurbineDef,
    #[serde(default)]
    pub htc_steam: HtcSteamDef,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: LATEST_VERSION,
            name: name.into(),
            tank_a: HtcFeedDef::default(),
            tank_b: AdFeedDef::default(),
            gas_turbine: GasTurbineDef::default(),
            htc_steam: HtcSteamDef::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HtcFeedDef {
    pub feed_rate_kg_per_h: f64,
    pub moisture_pct: f64,
    pub reactor_temperature_c: f64,
}

impl Default for HtcFeedDef {
    fn default() -> Self {
        Self {
            feed_rate_kg_per_h: 500.0,
            moisture_pct: 20.0,
            reactor_temperature_c: 200.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdFeedDef {
    pub feed_rate_kg_per_h: f64,
    pub moisture_pct: f64,
    pub vs_fraction: f64,
}

impl Default for AdFeedDef {
    fn default() -> Self {
        Self {
            feed_rate_kg_per_h: 800.0,
            moisture_pct: 70.0,
            vs_fraction: 0.80,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GasTurbineDef {
    pub ambient_temperature_c: f64,
    pub pressure_ratio: f64,
    pub turbine_inlet_temperature_c: f64,
    /// Isentropic efficiency, fraction in (0, 1]
    pub compressor_efficiency: f64,
    /// Isentropic efficiency, fraction in (0, 1]
    pub turbine_efficiency: f64,
}

impl Default for GasTurbineDef {
    fn default() -> Self {
        Self {
            ambient_temperature_c: 25.0,
            pressure_ratio: 10.0,
            turbine_inlet_temperature_c: 1200.0,
            compressor_efficiency: 0.85,
            turbine_efficiency: 0.90,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HtcSteamDef {
    pub reactor_pressure_bar: f64,
}

impl Default for HtcSteamDef {
    fn default() -> Self {
        Self {
            reactor_pressure_bar: 20.0,
        }
    }
}
