//! User settings for ProserPlan
//!
//! Display and planning preferences that are not part of a snapshot.

use serde::{Deserialize, Serialize};

use super::paths::ProserPaths;
use crate::error::PlanError;
use crate::models::{Money, Month, PayoffStrategy};
use crate::services::paycheck::DEFAULT_RECONCILE_TOLERANCE;
use crate::services::payoff::{PaymentBasis, SimulationOptions, DEFAULT_MAX_MONTHS};

/// User settings for ProserPlan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Strategy used by `debts` when none is given
    #[serde(default)]
    pub default_strategy: PayoffStrategy,

    /// Extra monthly payment used by `debts` when none is given
    #[serde(default = "Money::zero")]
    pub default_extra_payment: Money,

    /// Month cap before a payoff simulation is reported as diverged
    #[serde(default = "default_max_payoff_months")]
    pub max_payoff_months: u32,

    /// Largest paycheck discrepancy still shown as consistent
    #[serde(default = "default_reconcile_tolerance")]
    pub reconcile_tolerance: Money,

    #[serde(default)]
    pub payment_basis: PaymentBasis,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_max_payoff_months() -> u32 {
    DEFAULT_MAX_MONTHS
}

fn default_reconcile_tolerance() -> Money {
    DEFAULT_RECONCILE_TOLERANCE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_strategy: PayoffStrategy::default(),
            default_extra_payment: Money::zero(),
            max_payoff_months: default_max_payoff_months(),
            reconcile_tolerance: default_reconcile_tolerance(),
            payment_basis: PaymentBasis::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &ProserPaths) -> Result<Self, PlanError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PlanError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| PlanError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ProserPaths) -> Result<(), PlanError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PlanError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PlanError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        if self.default_extra_payment.is_negative() {
            return Err(PlanError::Config(
                "default_extra_payment must not be negative".into(),
            ));
        }
        if self.reconcile_tolerance.is_negative() {
            return Err(PlanError::Config(
                "reconcile_tolerance must not be negative".into(),
            ));
        }
        if self.max_payoff_months == 0 {
            return Err(PlanError::Config(
                "max_payoff_months must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Simulation options built from these settings
    pub fn simulation_options(&self, start_month: Month) -> SimulationOptions {
        SimulationOptions {
            start_month,
            max_months: self.max_payoff_months,
            payment_basis: self.payment_basis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.default_strategy, PayoffStrategy::Avalanche);
        assert_eq!(settings.max_payoff_months, 1200);
        assert_eq!(settings.reconcile_tolerance.cents(), 1);
        assert_eq!(settings.payment_basis, PaymentBasis::Minimum);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ProserPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, Settings::default());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ProserPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            default_strategy: PayoffStrategy::Snowball,
            default_extra_payment: Money::from_cents(15_000),
            payment_basis: PaymentBasis::Actual,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ProserPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"currency_symbol": "€", "default_strategy": "Snowball"}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.default_strategy, PayoffStrategy::Snowball);
        assert_eq!(loaded.max_payoff_months, 1200);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ProserPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"max_payoff_months": 0}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, PlanError::Config(_)));
    }

    #[test]
    fn test_simulation_options() {
        let settings = Settings {
            max_payoff_months: 360,
            ..Settings::default()
        };
        let start = Month::new(2025, 3).unwrap();
        let options = settings.simulation_options(start);
        assert_eq!(options.start_month, start);
        assert_eq!(options.max_months, 360);
    }
}
