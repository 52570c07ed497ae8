//! bf-plant: scenario files, plant-level analysis, and reports.
//!
//! The calculation cores in `bf-cycles` and `bf-biomass` are independent;
//! this crate is the orchestration layer that ties them together for one
//! plant scenario: input validation, cross-component reconciliation (air
//! mass flow from biogas energy), chart series data, report assembly, and
//! report caching. Rendering and delivery stay out of scope; everything
//! here is data.

pub mod analysis;
pub mod chart;
pub mod report;
pub mod schema;
pub mod store;
pub mod validate;

pub use analysis::{ANALYSIS_VERSION, PlantAnalysis, analyze};
pub use chart::{ChartSeries, hs_series, t_hdot_series};
pub use report::{BalanceRow, MetricCard, PlantReport, StateRow, StateTable, build_report};
pub use schema::*;
pub use store::{ReportManifest, ReportStore, compute_report_id};
pub use validate::{ValidationError, validate_scenario};

pub type PlantResult<T> = Result<T, PlantError>;

#[derive(thiserror::Error, Debug)]
pub enum PlantError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Report not found: {report_id}")]
    ReportNotFound { report_id: String },

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> PlantResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    let scenario: Scenario = serde_yaml::from_str(&content)?;
    validate_scenario(&scenario)?;
    Ok(scenario)
}

pub fn save_yaml(path: &std::path::Path, scenario: &Scenario) -> PlantResult<()> {
    validate_scenario(scenario)?;
    let content = serde_yaml::to_string(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}
