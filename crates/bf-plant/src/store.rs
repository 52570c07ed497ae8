//! Report storage API.
//!
//! Reports are cached per scenario in a `.bioflow/reports/<report_id>/`
//! directory next to the scenario file. The report id is a content hash of
//! the scenario plus the analysis version, so an unchanged scenario reuses
//! its cached report.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::report::PlantReport;
use crate::schema::Scenario;
use crate::{PlantError, PlantResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportManifest {
    pub report_id: String,
    pub scenario_name: String,
    pub timestamp: String,
    pub analysis_version: String,
}

impl ReportManifest {
    pub fn new(report_id: String, scenario: &Scenario, analysis_version: &str) -> Self {
        Self {
            report_id,
            scenario_name: scenario.name.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            analysis_version: analysis_version.to_string(),
        }
    }
}

/// Content-based report id.
pub fn compute_report_id(scenario: &Scenario, analysis_version: &str) -> String {
    let mut hasher = Sha256::new();

    let scenario_json = serde_json::to_string(scenario).unwrap_or_default();
    hasher.update(scenario_json.as_bytes());
    hasher.update(analysis_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}

#[derive(Clone)]
pub struct ReportStore {
    root_dir: PathBuf,
}

impl ReportStore {
    pub fn new(root_dir: PathBuf) -> PlantResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    pub fn for_scenario(scenario_path: &Path) -> PlantResult<Self> {
        let scenario_dir = scenario_path
            .parent()
            .ok_or_else(|| PlantError::InvalidPath {
                message: "scenario path has no parent directory".to_string(),
            })?;
        let reports_dir = scenario_dir.join(".bioflow").join("reports");
        Self::new(reports_dir)
    }

    fn report_dir(&self, report_id: &str) -> PathBuf {
        self.root_dir.join(report_id)
    }

    pub fn has_report(&self, report_id: &str) -> bool {
        self.report_dir(report_id).join("manifest.json").exists()
    }

    pub fn save_report(&self, manifest: &ReportManifest, report: &PlantReport) -> PlantResult<()> {
        let report_dir = self.report_dir(&manifest.report_id);
        fs::create_dir_all(&report_dir)?;

        let manifest_json = serde_json::to_string_pretty(manifest)?;
        fs::write(report_dir.join("manifest.json"), manifest_json)?;

        let report_json = serde_json::to_string_pretty(report)?;
        fs::write(report_dir.join("report.json"), report_json)?;

        Ok(())
    }

    pub fn load_manifest(&self, report_id: &str) -> PlantResult<ReportManifest> {
        let manifest_path = self.report_dir(report_id).join("manifest.json");

        if !manifest_path.exists() {
            return Err(PlantError::ReportNotFound {
                report_id: report_id.to_string(),
            });
        }

        let content = fs::read_to_string(manifest_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn load_report(&self, report_id: &str) -> PlantResult<PlantReport> {
        let report_path = self.report_dir(report_id).join("report.json");

        if !report_path.exists() {
            return Err(PlantError::ReportNotFound {
                report_id: report_id.to_string(),
            });
        }

        let content = fs::read_to_string(report_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn list_reports(&self) -> PlantResult<Vec<ReportManifest>> {
        let mut reports = Vec::new();

        if !self.root_dir.exists() {
            return Ok(reports);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if entry.path().is_dir() {
                let report_id = entry.file_name().to_string_lossy().to_string();
                if let Ok(manifest) = self.load_manifest(&report_id) {
                    reports.push(manifest);
                }
            }
        }

        Ok(reports)
    }

    pub fn delete_report(&self, report_id: &str) -> PlantResult<()> {
        let report_dir = self.report_dir(report_id);
        if report_dir.exists() {
            fs::remove_dir_all(report_dir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_id_is_stable_and_content_sensitive() {
        let a = Scenario::new("plant-a");
        assert_eq!(compute_report_id(&a, "v1"), compute_report_id(&a, "v1"));

        let mut b = a.clone();
        b.gas_turbine.pressure_ratio = 12.0;
        assert_ne!(compute_report_id(&a, "v1"), compute_report_id(&b, "v1"));
        assert_ne!(compute_report_id(&a, "v1"), compute_report_id(&a, "v2"));
    }
}
