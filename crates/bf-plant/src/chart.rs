//! Chart series data for the two cycle diagrams.
//!
//! This crate stops at data: each series is a closed 1-2-3-4-1 loop of
//! (x, y) points plus labels, ready for whatever rasterizer or plotting
//! front end consumes it.

use bf_cycles::CycleStates;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Closed cycle path: five (x, y) points, last == first
    pub points: Vec<(f64, f64)>,
    pub labels: Vec<String>,
}

/// h–s (enthalpy vs entropy) series for the HTC steam cycle.
pub fn hs_series(states: &CycleStates) -> ChartSeries {
    ChartSeries {
        title: "h – s Diagram · HTC Steam Cycle".to_string(),
        x_label: "Entropy s [kJ/(kg·K)]".to_string(),
        y_label: "Enthalpy h [kJ/kg]".to_string(),
        points: states
            .closed()
            .map(|p| (p.s_kj_per_kg_k, p.h_kj_per_kg))
            .collect(),
        labels: states.closed().map(|p| p.label.clone()).collect(),
    }
}

/// T–Ḣ (temperature vs enthalpy rate) series for the gas turbine cycle,
/// with Ḣ = ṁ_air · h.
pub fn t_hdot_series(states: &CycleStates, air_mass_flow_kg_per_h: f64) -> ChartSeries {
    ChartSeries {
        title: "T – Ḣ Diagram · Gas Turbine Cycle".to_string(),
        x_label: "Enthalpy Rate Ḣ [kW]".to_string(),
        y_label: "Temperature T [°C]".to_string(),
        points: states
            .closed()
            .map(|p| (p.h_kj_per_kg * air_mass_flow_kg_per_h, p.t_c))
            .collect(),
        labels: states.closed().map(|p| p.label.clone()).collect(),
    }
}
