//! Anaerobic digestion biogas yield estimator.
//!
//! Linear chain from feed rate through dry mass and volatile solids to
//! biogas volume, methane volume, and biogas energy:
//!
//! ```text
//! dry_mass  = feed · (1 - moisture/100)
//! vs        = dry_mass · vs_fraction
//! biogas    = vs · 0.40            [m³/h]
//! methane   = biogas · 0.60        [m³/h]
//! energy    = biogas · LHV_biogas  [MJ/h]
//! ```

use bf_core::props::BIOGAS_LHV_MJ_PER_M3;
use serde::{Deserialize, Serialize};

/// Typical volatile-solids fraction of dry biomass.
pub const DEFAULT_VS_FRACTION: f64 = 0.80;

/// Biogas yield per kg of volatile solids [m³/kg].
const BIOGAS_YIELD_M3_PER_KG_VS: f64 = 0.40;

/// Methane fraction of biogas by volume.
const METHANE_FRACTION: f64 = 0.60;

/// Feed conditions of the digester.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DigestionInput {
    /// Wet biomass feed rate [kg/h]
    pub feed_rate_kg_per_h: f64,
    /// Moisture content of the feed [%], 0–100
    pub moisture_pct: f64,
    /// Volatile-solids fraction of the dry mass, 0–1
    pub vs_fraction: f64,
}

impl DigestionInput {
    /// Feed with the typical volatile-solids fraction.
    pub fn new(feed_rate_kg_per_h: f64, moisture_pct: f64) -> Self {
        Self {
            feed_rate_kg_per_h,
            moisture_pct,
            vs_fraction: DEFAULT_VS_FRACTION,
        }
    }
}

/// Yield record of the digester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiogasYield {
    /// Dry mass in the feed [kg/h]
    pub dry_mass_kg_per_h: f64,
    /// Volatile solids available for conversion [kg/h]
    pub volatile_solids_kg_per_h: f64,
    /// Biogas production [m³/h]
    pub biogas_m3_per_h: f64,
    /// Methane fraction of the biogas [m³/h]
    pub methane_m3_per_h: f64,
    /// Energy content of the biogas [MJ/h]
    pub biogas_energy_mj_per_h: f64,
}

/// Estimate the biogas yield for one feed condition.
pub fn estimate(input: &DigestionInput) -> BiogasYield {
    let dry_mass = input.feed_rate_kg_per_h * (1.0 - input.moisture_pct / 100.0);
    let volatile_solids = dry_mass * input.vs_fraction;
    let biogas = volatile_solids * BIOGAS_YIELD_M3_PER_KG_VS;
    let methane = biogas * METHANE_FRACTION;
    let energy = biogas * BIOGAS_LHV_MJ_PER_M3;

    BiogasYield {
        dry_mass_kg_per_h: dry_mass,
        volatile_solids_kg_per_h: volatile_solids,
        biogas_m3_per_h: biogas,
        methane_m3_per_h: methane,
        biogas_energy_mj_per_h: energy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_feed() {
        let y = estimate(&DigestionInput::new(800.0, 70.0));

        assert!((y.dry_mass_kg_per_h - 240.0).abs() < 1e-9);
        assert!((y.volatile_solids_kg_per_h - 192.0).abs() < 1e-9);
        assert!((y.biogas_m3_per_h - 76.8).abs() < 1e-9);
        assert!((y.methane_m3_per_h - 46.08).abs() < 1e-9);
        assert!((y.biogas_energy_mj_per_h - 1689.6).abs() < 1e-9);
    }

    #[test]
    fn moisture_closes_the_mass_balance() {
        let input = DigestionInput::new(800.0, 70.0);
        let y = estimate(&input);
        let water = input.feed_rate_kg_per_h * input.moisture_pct / 100.0;
        assert!((y.dry_mass_kg_per_h + water - input.feed_rate_kg_per_h).abs() < 1e-9);
    }

    #[test]
    fn fully_wet_feed_yields_nothing() {
        let y = estimate(&DigestionInput::new(500.0, 100.0));
        assert_eq!(y.dry_mass_kg_per_h, 0.0);
        assert_eq!(y.biogas_energy_mj_per_h, 0.0);
    }

    #[test]
    fn default_vs_fraction_applied() {
        let input = DigestionInput::new(100.0, 0.0);
        assert_eq!(input.vs_fraction, DEFAULT_VS_FRACTION);
        let y = estimate(&input);
        assert!((y.volatile_solids_kg_per_h - 80.0).abs() < 1e-9);
    }
}
