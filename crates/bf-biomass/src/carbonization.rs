//! Hydrothermal carbonization mass/energy balance estimator.
//!
//! ```text
//! dry_mass       = feed · (1 - moisture/100)
//! hydrochar      = dry_mass · 0.60
//! process_water  = feed - hydrochar
//! char_energy    = hydrochar · HHV_hydrochar          [MJ/h]
//! heating_duty   = feed · cp_w · (T_reactor - 25)/1000 [MJ/h]
//! ```
//!
//! The heating duty treats the whole feed stream as water heated from
//! 25 °C to the reactor temperature.

use bf_core::props::{CP_WATER_KJ_PER_KG_K, HYDROCHAR_HHV_MJ_PER_KG};
use bf_core::units::{Temperature, celsius_of, degc};
use serde::{Deserialize, Serialize};

/// Typical HTC reactor temperature [°C].
pub const DEFAULT_REACTOR_T_C: f64 = 200.0;

/// Hydrochar fraction of the dry mass.
const HYDROCHAR_FRACTION: f64 = 0.60;

/// Feed inlet temperature for the heating duty [°C].
const FEED_T_C: f64 = 25.0;

/// Feed conditions of the HTC reactor.
#[derive(Clone, Debug)]
pub struct CarbonizationInput {
    /// Wet biomass feed rate [kg/h]
    pub feed_rate_kg_per_h: f64,
    /// Moisture content of the feed [%], 0–100
    pub moisture_pct: f64,
    /// Reactor temperature
    pub reactor_temperature: Temperature,
}

impl CarbonizationInput {
    /// Feed with the typical reactor temperature.
    pub fn new(feed_rate_kg_per_h: f64, moisture_pct: f64) -> Self {
        Self {
            feed_rate_kg_per_h,
            moisture_pct,
            reactor_temperature: degc(DEFAULT_REACTOR_T_C),
        }
    }

    pub fn with_reactor_celsius(mut self, reactor_t_c: f64) -> Self {
        self.reactor_temperature = degc(reactor_t_c);
        self
    }
}

/// Balance record of the HTC reactor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtcBalance {
    /// Dry mass in the feed [kg/h]
    pub dry_mass_kg_per_h: f64,
    /// Hydrochar production [kg/h]
    pub hydrochar_kg_per_h: f64,
    /// Process water leaving the reactor [kg/h]
    pub process_water_kg_per_h: f64,
    /// Energy content of the hydrochar [MJ/h]
    pub hydrochar_energy_mj_per_h: f64,
    /// Heating duty to bring the feed to reactor temperature [MJ/h]
    pub energy_required_mj_per_h: f64,
}

/// Estimate the HTC mass/energy balance for one feed condition.
pub fn estimate(input: &CarbonizationInput) -> HtcBalance {
    let t_reactor_c = celsius_of(input.reactor_temperature);

    let dry_mass = input.feed_rate_kg_per_h * (1.0 - input.moisture_pct / 100.0);
    let hydrochar = dry_mass * HYDROCHAR_FRACTION;
    let process_water = input.feed_rate_kg_per_h - hydrochar;
    let char_energy = hydrochar * HYDROCHAR_HHV_MJ_PER_KG;
    let heating_duty =
        input.feed_rate_kg_per_h * CP_WATER_KJ_PER_KG_K * (t_reactor_c - FEED_T_C) / 1000.0;

    HtcBalance {
        dry_mass_kg_per_h: dry_mass,
        hydrochar_kg_per_h: hydrochar,
        process_water_kg_per_h: process_water,
        hydrochar_energy_mj_per_h: char_energy,
        energy_required_mj_per_h: heating_duty,
    }
}
