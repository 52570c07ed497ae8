//! Cycle state-point records.

use serde::{Deserialize, Serialize};

/// One thermodynamic state of a cycle.
///
/// Enthalpy and entropy are relative to that cycle's own datum; only
/// intra-cycle deltas carry physical meaning. Comparing absolute h or s
/// across two different cycles is meaningless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatePoint {
    /// Ordinal + description, e.g. "1 – Comp Inlet"
    pub label: String,
    /// Temperature [°C]
    pub t_c: f64,
    /// Specific enthalpy [kJ/kg], relative to the cycle datum
    pub h_kj_per_kg: f64,
    /// Specific entropy [kJ/(kg·K)], relative to the cycle datum
    pub s_kj_per_kg_k: f64,
}

/// The ordered 4-point state set of one cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleStates {
    pub points: [StatePoint; 4],
}

impl CycleStates {
    /// Iterate the cycle as a closed loop: points 1-2-3-4 then point 1
    /// again. Chart consumers use this to draw the 1-2-3-4-1 path.
    pub fn closed(&self) -> impl Iterator<Item = &StatePoint> {
        self.points.iter().chain(std::iter::once(&self.points[0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(label: &str, t: f64) -> StatePoint {
        StatePoint {
            label: label.to_string(),
            t_c: t,
            h_kj_per_kg: 0.0,
            s_kj_per_kg_k: 0.0,
        }
    }

    #[test]
    fn closed_loop_has_five_points_and_wraps() {
        let states = CycleStates {
            points: [point("1", 25.0), point("2", 350.0), point("3", 1200.0), point("4", 560.0)],
        };
        let loop_points: Vec<&StatePoint> = states.closed().collect();
        assert_eq!(loop_points.len(), 5);
        assert_eq!(loop_points[4], loop_points[0]);
    }
}
