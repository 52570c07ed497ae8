//! Report assembly: the presentation boundary.
//!
//! The solvers and the analysis carry full precision; this module applies
//! all rounding while building the tabular report (metrics to 2 decimals,
//! state-table h to 1 and s to 4, matching the precision the original
//! dashboard emitted).

use bf_core::numeric::round_to;
use bf_cycles::CycleStates;
use serde::{Deserialize, Serialize};

use crate::analysis::PlantAnalysis;
use crate::chart::{ChartSeries, hs_series, t_hdot_series};
use crate::schema::Scenario;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub name: String,
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRow {
    pub label: String,
    pub t_c: f64,
    pub h_kj_per_kg: f64,
    pub s_kj_per_kg_k: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateTable {
    pub title: String,
    pub rows: Vec<StateRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceRow {
    pub component: String,
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantReport {
    pub scenario_name: String,
    pub summary: Vec<MetricCard>,
    pub gas_states: StateTable,
    pub steam_states: StateTable,
    pub energy_balance: Vec<BalanceRow>,
    pub process_summary: Vec<BalanceRow>,
    pub charts: Vec<ChartSeries>,
}

/// Assemble the full report for one analyzed scenario.
pub fn build_report(scenario: &Scenario, analysis: &PlantAnalysis) -> PlantReport {
    let g = &analysis.gas_metrics;
    let s = &analysis.steam_metrics;
    let ad = &analysis.biogas;
    let htc = &analysis.htc;

    let summary = vec![
        card("Net Power", analysis.total_power_kw, "kW"),
        card("GT Efficiency", g.eta_th_pct, "%"),
        card("HTC Efficiency", s.eta_pct, "%"),
        card("Biogas Yield", ad.biogas_m3_per_h, "m³/h"),
        card("GT Net Work", g.w_net_kj_per_kg, "kJ/kg"),
        card("Hydrochar", htc.hydrochar_kg_per_h, "kg/h"),
        card("Air Mass Flow", analysis.air_mass_flow_kg_per_h, "kg/h"),
        card("Back Work Ratio", g.back_work_ratio_pct, "%"),
    ];

    let energy_balance = vec![
        row("Compressor Work", g.w_comp_kj_per_kg, "kJ/kg"),
        row("Turbine Work", g.w_turb_kj_per_kg, "kJ/kg"),
        row("GT Net Work", g.w_net_kj_per_kg, "kJ/kg"),
        row("GT Heat Input (Q_in)", g.q_in_kj_per_kg, "kJ/kg"),
        row("GT Heat Rejected (Q_out)", g.q_out_kj_per_kg, "kJ/kg"),
        row("HTC Steam Pump Work", s.w_pump_kj_per_kg, "kJ/kg"),
        row("HTC Steam Turbine Work", s.w_turb_kj_per_kg, "kJ/kg"),
        row("HTC Net Work", s.w_net_kj_per_kg, "kJ/kg"),
        row("Biogas Energy Output", ad.biogas_energy_mj_per_h, "MJ/h"),
        row("Hydrochar Energy", htc.hydrochar_energy_mj_per_h, "MJ/h"),
        row("HTC Energy Required", htc.energy_required_mj_per_h, "MJ/h"),
    ];

    let process_summary = vec![
        row("AD Dry Mass", ad.dry_mass_kg_per_h, "kg/h"),
        row("AD Volatile Solids", ad.volatile_solids_kg_per_h, "kg/h"),
        row("Methane Production", ad.methane_m3_per_h, "m³/h"),
        row("HTC Dry Mass", htc.dry_mass_kg_per_h, "kg/h"),
        row("HTC Process Water", htc.process_water_kg_per_h, "kg/h"),
        row("GT Power", analysis.gas_power_kw, "kW"),
        row("HTC Steam Power", analysis.steam_power_kw, "kW"),
    ];

    PlantReport {
        scenario_name: scenario.name.clone(),
        summary,
        gas_states: state_table("Gas Turbine Cycle — State Points", &analysis.gas_states),
        steam_states: state_table("HTC Steam Cycle — State Points", &analysis.steam_states),
        energy_balance,
        process_summary,
        charts: vec![
            hs_series(&analysis.steam_states),
            t_hdot_series(&analysis.gas_states, analysis.air_mass_flow_kg_per_h),
        ],
    }
}

fn card(name: &str, value: f64, unit: &str) -> MetricCard {
    MetricCard {
        name: name.to_string(),
        value: round_to(value, 2),
        unit: unit.to_string(),
    }
}

fn row(component: &str, value: f64, unit: &str) -> BalanceRow {
    BalanceRow {
        component: component.to_string(),
        value: round_to(value, 2),
        unit: unit.to_string(),
    }
}

fn state_table(title: &str, states: &CycleStates) -> StateTable {
    StateTable {
        title: title.to_string(),
        rows: states
            .points
            .iter()
            .map(|p| StateRow {
                label: p.label.clone(),
                t_c: round_to(p.t_c, 2),
                h_kj_per_kg: round_to(p.h_kj_per_kg, 1),
                s_kj_per_kg_k: round_to(p.s_kj_per_kg_k, 4),
            })
            .collect(),
    }
}
