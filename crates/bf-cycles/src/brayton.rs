//! Brayton (gas turbine) cycle solver.
//!
//! Ideal-gas air-standard analysis with isentropic-efficiency corrections.
//!
//! ## Model
//!
//! Compression (1→2) and expansion (3→4) use the isentropic temperature
//! relation corrected by the device efficiency:
//!
//! ```text
//! T2s = T1 · rp^((γ-1)/γ)        T2 = T1 + (T2s - T1) / η_c
//! T4s = T3 / rp^((γ-1)/γ)        T4 = T3 - η_t · (T3 - T4s)
//! ```
//!
//! Specific work and heat per kg of air:
//!
//! ```text
//! w_comp = cp·(T2-T1)    w_turb = cp·(T3-T4)    w_net = w_turb - w_comp
//! q_in   = cp·(T3-T2)    q_out  = cp·(T4-T1)
//! ```
//!
//! Entropy uses the ideal-gas relation `Δs = cp·ln(Tb/Ta) - R·ln(pb/pa)`
//! with the pressure ratio rp across the compressor leg, 1/rp across the
//! turbine leg, and 1 across the constant-pressure legs, so the 1-2-3-4-1
//! loop closes on the s axis. State 1 is the h = s = 0 datum.
//!
//! Inputs are not range-validated here; the solver is total over finite
//! inputs and only guards the two divisions (thermal efficiency, back-work
//! ratio). Range checks belong to the scenario layer.

use bf_core::props::{CP_AIR_KJ_PER_KG_K, GAMMA_AIR, R_AIR_KJ_PER_KG_K};
use bf_core::units::{Temperature, degc, kelvin_of};
use serde::{Deserialize, Serialize};

use crate::state::{CycleStates, StatePoint};

/// Operating point of the gas-turbine cycle.
#[derive(Clone, Debug)]
pub struct BraytonInput {
    /// Ambient / compressor inlet temperature
    pub inlet_temperature: Temperature,
    /// Compressor pressure ratio (dimensionless, physically > 1)
    pub pressure_ratio: f64,
    /// Turbine inlet temperature
    pub turbine_inlet_temperature: Temperature,
    /// Isentropic efficiency of the compressor, fraction in (0, 1]
    pub compressor_efficiency: f64,
    /// Isentropic efficiency of the turbine, fraction in (0, 1]
    pub turbine_efficiency: f64,
}

impl BraytonInput {
    /// Convenience constructor from °C temperatures.
    pub fn from_celsius(
        inlet_t_c: f64,
        pressure_ratio: f64,
        turbine_inlet_t_c: f64,
        compressor_efficiency: f64,
        turbine_efficiency: f64,
    ) -> Self {
        Self {
            inlet_temperature: degc(inlet_t_c),
            pressure_ratio,
            turbine_inlet_temperature: degc(turbine_inlet_t_c),
            compressor_efficiency,
            turbine_efficiency,
        }
    }
}

/// Performance record of the gas-turbine cycle, per kg of air.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasCycleMetrics {
    /// Compressor work [kJ/kg]
    pub w_comp_kj_per_kg: f64,
    /// Turbine work [kJ/kg]
    pub w_turb_kj_per_kg: f64,
    /// Net work [kJ/kg]
    pub w_net_kj_per_kg: f64,
    /// Heat added in the combustor [kJ/kg]
    pub q_in_kj_per_kg: f64,
    /// Heat rejected to ambient [kJ/kg]
    pub q_out_kj_per_kg: f64,
    /// Thermal efficiency [%]; 0 when q_in <= 0
    pub eta_th_pct: f64,
    /// Back-work ratio [%]; 0 when w_turb <= 0
    pub back_work_ratio_pct: f64,
}

/// Solve the Brayton cycle for one operating point.
///
/// Returns the 4-point state set (temperatures reported in °C, h and s
/// referenced to state 1 = 0) and the metrics record, full precision.
pub fn solve(input: &BraytonInput) -> (CycleStates, GasCycleMetrics) {
    let cp = CP_AIR_KJ_PER_KG_K;
    let r = R_AIR_KJ_PER_KG_K;
    let rp = input.pressure_ratio;

    let t1 = kelvin_of(input.inlet_temperature);
    let t3 = kelvin_of(input.turbine_inlet_temperature);

    // Isentropic compression
    let t2s = t1 * rp.powf((GAMMA_AIR - 1.0) / GAMMA_AIR);
    let t2 = t1 + (t2s - t1) / input.compressor_efficiency;

    // Isentropic expansion
    let t4s = t3 / rp.powf((GAMMA_AIR - 1.0) / GAMMA_AIR);
    let t4 = t3 - (t3 - t4s) * input.turbine_efficiency;

    // Work & heat (per kg of air)
    let w_comp = cp * (t2 - t1);
    let w_turb = cp * (t3 - t4);
    let w_net = w_turb - w_comp;
    let q_in = cp * (t3 - t2);
    let q_out = cp * (t4 - t1);
    let eta_th = if q_in > 0.0 { w_net / q_in * 100.0 } else { 0.0 };
    let bwr = if w_turb > 0.0 {
        w_comp / w_turb * 100.0
    } else {
        0.0
    };

    // Entropy (relative to state 1 = 0)
    let s1 = 0.0;
    let s2 = cp * (t2 / t1).ln() - r * rp.ln();
    let s3 = s2 + cp * (t3 / t2).ln();
    let s4 = s3 + cp * (t4 / t3).ln() + r * rp.ln();

    // Enthalpy (relative to state 1 = 0)
    let h1 = 0.0;
    let h2 = cp * (t2 - t1);
    let h3 = cp * (t3 - t1);
    let h4 = cp * (t4 - t1);

    let states = CycleStates {
        points: [
            gas_point("1 – Comp Inlet", t1, h1, s1),
            gas_point("2 – Comp Outlet", t2, h2, s2),
            gas_point("3 – Turb Inlet", t3, h3, s3),
            gas_point("4 – Turb Outlet", t4, h4, s4),
        ],
    };

    let metrics = GasCycleMetrics {
        w_comp_kj_per_kg: w_comp,
        w_turb_kj_per_kg: w_turb,
        w_net_kj_per_kg: w_net,
        q_in_kj_per_kg: q_in,
        q_out_kj_per_kg: q_out,
        eta_th_pct: eta_th,
        back_work_ratio_pct: bwr,
    };

    (states, metrics)
}

fn gas_point(label: &str, t_k: f64, h: f64, s: f64) -> StatePoint {
    StatePoint {
        label: label.to_string(),
        t_c: t_k - 273.15,
        h_kj_per_kg: h,
        s_kj_per_kg_k: s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> BraytonInput {
        BraytonInput::from_celsius(25.0, 10.0, 1200.0, 0.85, 0.90)
    }

    #[test]
    fn baseline_operating_point() {
        let (states, m) = solve(&baseline());

        assert!((m.w_comp_kj_per_kg - 328.0882).abs() < 1e-3);
        assert!((m.w_turb_kj_per_kg - 642.3177).abs() < 1e-3);
        assert!((m.w_net_kj_per_kg - 314.2295).abs() < 1e-3);
        assert!((m.q_in_kj_per_kg - 852.7868).abs() < 1e-3);
        assert!((m.q_out_kj_per_kg - 538.5573).abs() < 1e-3);
        assert!((m.eta_th_pct - 36.8474).abs() < 1e-3);
        assert!((m.back_work_ratio_pct - 51.0788).abs() < 1e-3);

        assert!(m.w_net_kj_per_kg > 0.0);
        assert!(m.eta_th_pct > 0.0 && m.eta_th_pct < 60.0);

        // Compressor outlet ~351.5 °C, turbine outlet ~560.9 °C
        assert!((states.points[1].t_c - 351.4559).abs() < 1e-3);
        assert!((states.points[3].t_c - 560.8779).abs() < 1e-3);
    }

    #[test]
    fn state_one_is_the_datum() {
        let (states, _) = solve(&baseline());
        assert_eq!(states.points[0].h_kj_per_kg, 0.0);
        assert_eq!(states.points[0].s_kj_per_kg_k, 0.0);
        assert!((states.points[0].t_c - 25.0).abs() < 1e-9);
    }

    #[test]
    fn ideal_cycle_matches_isentropic_temperatures() {
        let input = BraytonInput::from_celsius(25.0, 10.0, 1200.0, 1.0, 1.0);
        let (states, m) = solve(&input);

        let k = (GAMMA_AIR - 1.0) / GAMMA_AIR;
        let t2s_c = 298.15 * 10f64.powf(k) - 273.15;
        let t4s_c = 1473.15 / 10f64.powf(k) - 273.15;
        assert!((states.points[1].t_c - t2s_c).abs() < 1e-9);
        assert!((states.points[3].t_c - t4s_c).abs() < 1e-9);

        // Air-standard ideal efficiency: 1 - rp^(-(γ-1)/γ)
        let eta_ideal = (1.0 - 10f64.powf(-k)) * 100.0;
        assert!((m.eta_th_pct - eta_ideal).abs() < 1e-9);
    }

    #[test]
    fn first_law_closure() {
        let (_, m) = solve(&baseline());
        let closure = m.q_in_kj_per_kg - m.q_out_kj_per_kg - m.w_net_kj_per_kg;
        assert!(closure.abs() < 1e-9);
    }

    #[test]
    fn degenerate_cycle_reports_zero_not_nan() {
        // rp = 1 and T3 = T1 collapses the cycle: q_in = 0, w_turb = 0
        let input = BraytonInput::from_celsius(25.0, 1.0, 25.0, 1.0, 1.0);
        let (_, m) = solve(&input);
        assert_eq!(m.eta_th_pct, 0.0);
        assert_eq!(m.back_work_ratio_pct, 0.0);
        assert!(m.eta_th_pct.is_finite());
    }

    #[test]
    fn sub_unity_pressure_ratio_zeroes_back_work_ratio() {
        // rp < 1 makes the "expansion" heat the gas: w_turb < 0
        let input = BraytonInput::from_celsius(25.0, 0.5, 1200.0, 0.85, 0.90);
        let (_, m) = solve(&input);
        assert!(m.w_turb_kj_per_kg <= 0.0);
        assert_eq!(m.back_work_ratio_pct, 0.0);
    }

    #[test]
    fn net_consuming_point_reports_negative_efficiency() {
        // Low efficiencies at high rp push the compressor outlet close to
        // the turbine inlet: q_in stays positive while w_net goes negative,
        // so eta_th comes out negative rather than clamped.
        let input = BraytonInput::from_celsius(50.0, 30.0, 1000.0, 0.6, 0.6);
        let (_, m) = solve(&input);
        assert!(m.q_in_kj_per_kg > 0.0);
        assert!(m.w_net_kj_per_kg < 0.0);
        assert!(m.eta_th_pct < 0.0);
        assert!(m.eta_th_pct.is_finite());
        assert!(m.back_work_ratio_pct > 100.0);
    }

    #[test]
    fn entropy_closes_the_loop() {
        // The R·ln(rp) terms of the compressor and turbine legs cancel, so
        // s4 = cp·ln(T4/T1) and the constant-pressure 4→1 leg
        // Δs = cp·ln(T1/T4) returns exactly to the datum.
        let (states, _) = solve(&baseline());
        let s4 = states.points[3].s_kj_per_kg_k;
        let t1 = states.points[0].t_c + 273.15;
        let t4 = states.points[3].t_c + 273.15;
        let back_leg = CP_AIR_KJ_PER_KG_K * (t1 / t4).ln();
        assert!((s4 + back_leg).abs() < 1e-9);
    }

    #[test]
    fn repeat_invocation_is_bit_identical() {
        let (s_a, m_a) = solve(&baseline());
        let (s_b, m_b) = solve(&baseline());
        assert_eq!(s_a, s_b);
        assert_eq!(m_a, m_b);
    }
}
