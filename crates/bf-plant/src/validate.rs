//! Scenario validation logic.
//!
//! The calculation cores are total over finite inputs and do not validate
//! ranges; all range checking happens here, before a scenario reaches
//! them.

use crate::schema::{LATEST_VERSION, Scenario};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    check_feed(
        "tank_a.feed_rate_kg_per_h",
        scenario.tank_a.feed_rate_kg_per_h,
    )?;
    check_moisture("tank_a.moisture_pct", scenario.tank_a.moisture_pct)?;
    check_feed(
        "tank_b.feed_rate_kg_per_h",
        scenario.tank_b.feed_rate_kg_per_h,
    )?;
    check_moisture("tank_b.moisture_pct", scenario.tank_b.moisture_pct)?;

    let vs = scenario.tank_b.vs_fraction;
    if !(vs > 0.0 && vs <= 1.0) {
        return Err(ValidationError::InvalidValue {
            field: "tank_b.vs_fraction",
            value: vs,
            reason: "must be in (0, 1]",
        });
    }

    let gt = &scenario.gas_turbine;
    if !(gt.pressure_ratio > 1.0) {
        return Err(ValidationError::InvalidValue {
            field: "gas_turbine.pressure_ratio",
            value: gt.pressure_ratio,
            reason: "must be greater than 1",
        });
    }
    check_efficiency(
        "gas_turbine.compressor_efficiency",
        gt.compressor_efficiency,
    )?;
    check_efficiency("gas_turbine.turbine_efficiency", gt.turbine_efficiency)?;

    // The steam cycle's condenser sits at 0.1 bar
    let p = scenario.htc_steam.reactor_pressure_bar;
    if !(p > 0.1) {
        return Err(ValidationError::InvalidValue {
            field: "htc_steam.reactor_pressure_bar",
            value: p,
            reason: "must exceed the 0.1 bar condenser pressure",
        });
    }

    Ok(())
}

fn check_feed(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !(value.is_finite() && value >= 0.0) {
        return Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "must be finite and non-negative",
        });
    }
    Ok(())
}

fn check_moisture(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "must be in [0, 100]",
        });
    }
    Ok(())
}

fn check_efficiency(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !(value > 0.0 && value <= 1.0) {
        return Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "must be in (0, 1]",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scenario_is_valid() {
        assert!(validate_scenario(&Scenario::new("test")).is_ok());
    }

    #[test]
    fn rejects_future_version() {
        let mut s = Scenario::new("test");
        s.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_scenario(&s),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn rejects_negative_feed() {
        let mut s = Scenario::new("test");
        s.tank_a.feed_rate_kg_per_h = -1.0;
        assert!(validate_scenario(&s).is_err());
    }

    #[test]
    fn rejects_out_of_range_moisture() {
        let mut s = Scenario::new("test");
        s.tank_b.moisture_pct = 120.0;
        assert!(validate_scenario(&s).is_err());
    }

    #[test]
    fn rejects_sub_unity_pressure_ratio() {
        let mut s = Scenario::new("test");
        s.gas_turbine.pressure_ratio = 1.0;
        assert!(validate_scenario(&s).is_err());
    }

    #[test]
    fn rejects_efficiency_above_one() {
        let mut s = Scenario::new("test");
        s.gas_turbine.turbine_efficiency = 1.5;
        let err = validate_scenario(&s).unwrap_err();
        assert!(format!("{err}").contains("turbine_efficiency"));
    }
}
