//! HTC steam (Rankine-like) cycle solver.
//!
//! Linearized analysis, deliberately not steam-table-exact. Liquid water
//! is treated as incompressible with constant cp, vaporization uses a
//! constant latent heat, and superheat uses a constant steam cp:
//!
//! ```text
//! h1 = cp_w·T1
//! h2 = h1 + 0.001·(P_high - P_low)·100          (pump, small)
//! h3 = cp_w·100 + h_fg + cp_s·(T3 - 100)        (heat, boil, superheat)
//! h4 = h3 - η_st·(h3 - h4s),  h4s = h1 + x·h_fg (x = 0.88 exhaust quality)
//! ```
//!
//! The h/s datum is liquid water at 0 °C, so h1 and s1 are nonzero (unlike
//! the gas cycle, whose datum is its own state 1). The entropy rise at the
//! turbine exhaust is a fixed +0.15 kJ/(kg·K) irreversibility allowance,
//! and the reported temperatures at states 2 and 4 are the original
//! model's placeholders (T1+2, T1+20), kept for output compatibility
//! rather than re-derived from h.

use bf_core::props::{CP_STEAM_KJ_PER_KG_K, CP_WATER_KJ_PER_KG_K, HFG_WATER_KJ_PER_KG, T_REF_K};
use bf_core::units::{Pressure, Temperature, bar, bar_of, celsius_of, degc};
use serde::{Deserialize, Serialize};

use crate::state::{CycleStates, StatePoint};

/// Condenser temperature [°C].
const CONDENSER_T_C: f64 = 45.0;

/// Condenser pressure [bar].
const CONDENSER_P_BAR: f64 = 0.1;

/// Superheat above the HTC reactor temperature [K].
const SUPERHEAT_DELTA_K: f64 = 50.0;

/// Steam turbine isentropic efficiency.
const ETA_TURBINE: f64 = 0.85;

/// Assumed quality of the isentropic turbine exhaust.
const EXHAUST_QUALITY: f64 = 0.88;

/// Fixed entropy rise at the turbine exhaust [kJ/(kg·K)].
const EXHAUST_ENTROPY_RISE: f64 = 0.15;

/// Operating point of the HTC steam cycle.
#[derive(Clone, Debug)]
pub struct SteamInput {
    /// HTC reactor temperature
    pub reactor_temperature: Temperature,
    /// HTC reactor pressure (boiler side of the cycle)
    pub reactor_pressure: Pressure,
}

impl SteamInput {
    /// Convenience constructor from °C / bar.
    pub fn from_celsius_bar(reactor_t_c: f64, reactor_p_bar: f64) -> Self {
        Self {
            reactor_temperature: degc(reactor_t_c),
            reactor_pressure: bar(reactor_p_bar),
        }
    }
}

/// Performance record of the steam cycle, per kg of working fluid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteamCycleMetrics {
    /// Pump work [kJ/kg]
    pub w_pump_kj_per_kg: f64,
    /// Turbine work [kJ/kg]
    pub w_turb_kj_per_kg: f64,
    /// Net work [kJ/kg]
    pub w_net_kj_per_kg: f64,
    /// Boiler heat input [kJ/kg]
    pub q_in_kj_per_kg: f64,
    /// Thermal efficiency [%]; 0 when q_in <= 0
    pub eta_pct: f64,
}

/// Solve the HTC steam cycle for one operating point.
///
/// Returns the 4-point state set and the metrics record, full precision.
pub fn solve(input: &SteamInput) -> (CycleStates, SteamCycleMetrics) {
    let cp_w = CP_WATER_KJ_PER_KG_K;

    let t1 = CONDENSER_T_C;
    let t3 = celsius_of(input.reactor_temperature) + SUPERHEAT_DELTA_K;
    let p_low = CONDENSER_P_BAR;
    let p_high = bar_of(input.reactor_pressure);

    // Approximate enthalpies
    let h1 = cp_w * t1;
    let h2 = h1 + 0.001 * (p_high - p_low) * 100.0;
    let h3 = cp_w * 100.0 + HFG_WATER_KJ_PER_KG + CP_STEAM_KJ_PER_KG_K * (t3 - 100.0);

    let h4s = h1 + EXHAUST_QUALITY * HFG_WATER_KJ_PER_KG;
    let h4 = h3 - ETA_TURBINE * (h3 - h4s);

    // Approximate entropies; the pump is treated as isentropic
    let s1 = cp_w * ((t1 + T_REF_K) / T_REF_K).ln();
    let s2 = s1;
    let s3 = s1 + (h3 - h2) / (t3 + T_REF_K);
    let s4 = s3 + EXHAUST_ENTROPY_RISE;

    let states = CycleStates {
        points: [
            steam_point("1 – Pump Inlet", t1, h1, s1),
            steam_point("2 – Pump Outlet", t1 + 2.0, h2, s2),
            steam_point("3 – Boiler Outlet", t3, h3, s3),
            steam_point("4 – Turb Outlet", t1 + 20.0, h4, s4),
        ],
    };

    let w_pump = h2 - h1;
    let w_turb = h3 - h4;
    let q_in = h3 - h2;
    let w_net = w_turb - w_pump;
    let eta = if q_in > 0.0 { w_net / q_in * 100.0 } else { 0.0 };

    let metrics = SteamCycleMetrics {
        w_pump_kj_per_kg: w_pump,
        w_turb_kj_per_kg: w_turb,
        w_net_kj_per_kg: w_net,
        q_in_kj_per_kg: q_in,
        eta_pct: eta,
    };

    (states, metrics)
}

fn steam_point(label: &str, t_c: f64, h: f64, s: f64) -> StatePoint {
    StatePoint {
        label: label.to_string(),
        t_c,
        h_kj_per_kg: h,
        s_kj_per_kg_k: s,
    }
}
