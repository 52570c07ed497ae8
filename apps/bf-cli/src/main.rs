use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use bf_biomass::{CarbonizationInput, DigestionInput};
use bf_core::numeric::round_to;
use bf_cycles::{BraytonInput, CycleStates, SteamInput};
use bf_plant::{
    ANALYSIS_VERSION, PlantReport, PlantResult, ReportManifest, ReportStore, analyze,
    build_report, compute_report_id, load_yaml,
};

#[derive(Parser)]
#[command(name = "bf-cli")]
#[command(about = "bioflow CLI - AD-HTC fuel-enhanced gas cycle analysis tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and parameter ranges
    Validate {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// Analyze a plant scenario and print the report
    Analyze {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Skip the report cache and force a re-analysis
        #[arg(long)]
        no_cache: bool,
        /// Emit the report as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// List cached reports for a scenario
    Reports {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// Solve the gas-turbine (Brayton) cycle for one operating point
    Gas {
        /// Ambient / compressor inlet temperature [°C]
        #[arg(long, default_value_t = 25.0)]
        ambient: f64,
        /// Compressor pressure ratio
        #[arg(long, default_value_t = 10.0)]
        pressure_ratio: f64,
        /// Turbine inlet temperature [°C]
        #[arg(long, default_value_t = 1200.0)]
        turbine_inlet: f64,
        /// Compressor isentropic efficiency (0, 1]
        #[arg(long, default_value_t = 0.85)]
        compressor_eff: f64,
        /// Turbine isentropic efficiency (0, 1]
        #[arg(long, default_value_t = 0.90)]
        turbine_eff: f64,
    },
    /// Solve the HTC steam cycle for one operating point
    Steam {
        /// HTC reactor temperature [°C]
        #[arg(long, default_value_t = 200.0)]
        reactor_temp: f64,
        /// HTC reactor pressure [bar]
        #[arg(long, default_value_t = 20.0)]
        reactor_pressure: f64,
    },
    /// Estimate anaerobic-digestion biogas yield
    Ad {
        /// Wet biomass feed rate [kg/h]
        #[arg(long, default_value_t = 800.0)]
        feed: f64,
        /// Feed moisture content [%]
        #[arg(long, default_value_t = 70.0)]
        moisture: f64,
        /// Volatile-solids fraction of the dry mass
        #[arg(long, default_value_t = 0.80)]
        vs_fraction: f64,
    },
    /// Estimate the HTC mass/energy balance
    Htc {
        /// Wet biomass feed rate [kg/h]
        #[arg(long, default_value_t = 500.0)]
        feed: f64,
        /// Feed moisture content [%]
        #[arg(long, default_value_t = 20.0)]
        moisture: f64,
        /// Reactor temperature [°C]
        #[arg(long, default_value_t = 200.0)]
        reactor_temp: f64,
    },
}

fn main() -> PlantResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Analyze {
            scenario_path,
            no_cache,
            json,
        } => cmd_analyze(&scenario_path, no_cache, json),
        Commands::Reports { scenario_path } => cmd_reports(&scenario_path),
        Commands::Gas {
            ambient,
            pressure_ratio,
            turbine_inlet,
            compressor_eff,
            turbine_eff,
        } => {
            let (states, m) = bf_cycles::brayton::solve(&BraytonInput::from_celsius(
                ambient,
                pressure_ratio,
                turbine_inlet,
                compressor_eff,
                turbine_eff,
            ));
            print_states("Gas Turbine Cycle — State Points", &states);
            print_metric("Compressor Work", m.w_comp_kj_per_kg, "kJ/kg");
            print_metric("Turbine Work", m.w_turb_kj_per_kg, "kJ/kg");
            print_metric("Net Work", m.w_net_kj_per_kg, "kJ/kg");
            print_metric("Heat Input", m.q_in_kj_per_kg, "kJ/kg");
            print_metric("Heat Rejected", m.q_out_kj_per_kg, "kJ/kg");
            print_metric("Thermal Efficiency", m.eta_th_pct, "%");
            print_metric("Back Work Ratio", m.back_work_ratio_pct, "%");
            Ok(())
        }
        Commands::Steam {
            reactor_temp,
            reactor_pressure,
        } => {
            let (states, m) = bf_cycles::steam::solve(&SteamInput::from_celsius_bar(
                reactor_temp,
                reactor_pressure,
            ));
            print_states("HTC Steam Cycle — State Points", &states);
            print_metric("Pump Work", m.w_pump_kj_per_kg, "kJ/kg");
            print_metric("Turbine Work", m.w_turb_kj_per_kg, "kJ/kg");
            print_metric("Net Work", m.w_net_kj_per_kg, "kJ/kg");
            print_metric("Heat Input", m.q_in_kj_per_kg, "kJ/kg");
            print_metric("Thermal Efficiency", m.eta_pct, "%");
            Ok(())
        }
        Commands::Ad {
            feed,
            moisture,
            vs_fraction,
        } => {
            let y = bf_biomass::digestion::estimate(&DigestionInput {
                feed_rate_kg_per_h: feed,
                moisture_pct: moisture,
                vs_fraction,
            });
            print_metric("Dry Mass", y.dry_mass_kg_per_h, "kg/h");
            print_metric("Volatile Solids", y.volatile_solids_kg_per_h, "kg/h");
            print_metric("Biogas", y.biogas_m3_per_h, "m³/h");
            print_metric("Methane", y.methane_m3_per_h, "m³/h");
            print_metric("Biogas Energy", y.biogas_energy_mj_per_h, "MJ/h");
            Ok(())
        }
        Commands::Htc {
            feed,
            moisture,
            reactor_temp,
        } => {
            let b = bf_biomass::carbonization::estimate(
                &CarbonizationInput::new(feed, moisture).with_reactor_celsius(reactor_temp),
            );
            print_metric("Dry Mass", b.dry_mass_kg_per_h, "kg/h");
            print_metric("Hydrochar", b.hydrochar_kg_per_h, "kg/h");
            print_metric("Process Water", b.process_water_kg_per_h, "kg/h");
            print_metric("Hydrochar Energy", b.hydrochar_energy_mj_per_h, "MJ/h");
            print_metric("Energy Required", b.energy_required_mj_per_h, "MJ/h");
            Ok(())
        }
    }
}

fn cmd_validate(scenario_path: &Path) -> PlantResult<()> {
    let scenario = load_yaml(scenario_path)?;
    println!("Scenario '{}' is valid.", scenario.name);
    Ok(())
}

fn cmd_analyze(scenario_path: &Path, no_cache: bool, json: bool) -> PlantResult<()> {
    let scenario = load_yaml(scenario_path)?;
    let store = ReportStore::for_scenario(scenario_path)?;
    let report_id = compute_report_id(&scenario, ANALYSIS_VERSION);

    let report = if !no_cache && store.has_report(&report_id) {
        tracing::info!(%report_id, "reusing cached report");
        store.load_report(&report_id)?
    } else {
        let analysis = analyze(&scenario);
        let report = build_report(&scenario, &analysis);
        let manifest = ReportManifest::new(report_id.clone(), &scenario, ANALYSIS_VERSION);
        store.save_report(&manifest, &report)?;
        report
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn cmd_reports(scenario_path: &Path) -> PlantResult<()> {
    let store = ReportStore::for_scenario(scenario_path)?;
    let reports = store.list_reports()?;
    if reports.is_empty() {
        println!("No cached reports.");
        return Ok(());
    }
    for manifest in reports {
        println!(
            "{}  {}  ({}, {})",
            short_id(&manifest.report_id),
            manifest.scenario_name,
            manifest.analysis_version,
            manifest.timestamp
        );
    }
    Ok(())
}

/// First 12 characters of a report id. Ids written by this tool are 64 hex
/// chars, but manifests come back from disk, so short or non-ASCII ids must
/// not panic the listing.
fn short_id(report_id: &str) -> &str {
    report_id.get(..12).unwrap_or(report_id)
}

fn print_report(report: &PlantReport) {
    println!("=== {} ===", report.scenario_name);
    println!();
    for card in &report.summary {
        println!("{:<24} {:>12.2} {}", card.name, card.value, card.unit);
    }

    for table in [&report.gas_states, &report.steam_states] {
        println!();
        println!("{}", table.title);
        println!(
            "{:<20} {:>10} {:>12} {:>12}",
            "State", "T [°C]", "h [kJ/kg]", "s [kJ/kg·K]"
        );
        for row in &table.rows {
            println!(
                "{:<20} {:>10.2} {:>12.1} {:>12.4}",
                row.label, row.t_c, row.h_kj_per_kg, row.s_kj_per_kg_k
            );
        }
    }

    println!();
    println!("Energy Balance");
    for row in &report.energy_balance {
        println!("{:<28} {:>12.2} {}", row.component, row.value, row.unit);
    }

    println!();
    println!("Process Summary");
    for row in &report.process_summary {
        println!("{:<28} {:>12.2} {}", row.component, row.value, row.unit);
    }
}

fn print_states(title: &str, states: &CycleStates) {
    println!("{title}");
    println!(
        "{:<20} {:>10} {:>12} {:>12}",
        "State", "T [°C]", "h [kJ/kg]", "s [kJ/kg·K]"
    );
    for p in &states.points {
        println!(
            "{:<20} {:>10.2} {:>12.1} {:>12.4}",
            p.label,
            round_to(p.t_c, 2),
            round_to(p.h_kj_per_kg, 1),
            round_to(p.s_kj_per_kg_k, 4)
        );
    }
    println!();
}

fn print_metric(name: &str, value: f64, unit: &str) {
    println!("{:<28} {:>12.2} {}", name, round_to(value, 2), unit);
}
