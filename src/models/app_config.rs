//! Application snapshot
//!
//! The whole of the user's dashboard data in one value: the shape the
//! dashboard persists and hands to the planning core. Loading goes through
//! [`AppConfig::validate`] so a bad record is reported by entity and field.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

use super::account::{Account, AccountType};
use super::category::BudgetCategory;
use super::debt::Debt;
use super::paycheck::{IncomeFrequency, PayFrequency, PaycheckInfo};
use super::period::Month;
use crate::error::{PlanResult, ValidationError};

/// Snapshot of all dashboard data for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub user_id: String,
    /// The month being viewed/edited
    pub active_month: Month,
    pub budget: Vec<BudgetCategory>,
    pub paycheck_info: PaycheckInfo,
    pub debts: Vec<Debt>,
    pub accounts: Vec<Account>,
}

impl AppConfig {
    /// Validate every record and check ids are unique within each list
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_unique("Account", self.accounts.iter().map(|a| a.id.as_str()))?;
        check_unique("BudgetCategory", self.budget.iter().map(|c| c.id.as_str()))?;
        check_unique("Debt", self.debts.iter().map(|d| d.id.as_str()))?;

        for account in &self.accounts {
            account.validate()?;
        }
        for category in &self.budget {
            category.validate()?;
        }
        for debt in &self.debts {
            debt.validate()?;
        }
        self.paycheck_info.validate()
    }

    /// Parse and validate a JSON snapshot
    pub fn from_json(json: &str) -> PlanResult<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Parse and validate a YAML snapshot
    pub fn from_yaml(yaml: &str) -> PlanResult<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        Self::from_value(serde_json::to_value(value)?)
    }

    /// Enum-valued fields are checked on the raw value first so a bad
    /// spelling comes back as a [`ValidationError`] naming the field rather
    /// than a bare parse error.
    fn from_value(value: Value) -> PlanResult<Self> {
        check_enum_fields(&value)?;
        let config: Self = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> PlanResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml(&self) -> PlanResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

fn check_enum_fields(value: &Value) -> Result<(), ValidationError> {
    let account_types = AccountType::ALL.map(|t| t.as_str());
    for account in value["accounts"].as_array().into_iter().flatten() {
        let id = account["id"].as_str().unwrap_or_default();
        check_variant("Account", id, "type", &account["type"], &account_types)?;
    }

    let paycheck = &value["paycheckInfo"];
    check_variant(
        "PaycheckInfo",
        "",
        "frequency",
        &paycheck["frequency"],
        &PayFrequency::ALL.map(|f| f.as_str()),
    )?;

    let income_frequencies = IncomeFrequency::ALL.map(|f| f.as_str());
    for source in paycheck["otherIncomeSources"].as_array().into_iter().flatten() {
        let name = source["name"].as_str().unwrap_or_default();
        check_variant(
            "OtherIncome",
            name,
            "frequency",
            &source["frequency"],
            &income_frequencies,
        )?;
    }
    Ok(())
}

/// Missing fields are left for serde to report
fn check_variant(
    entity: &'static str,
    id: &str,
    field: &'static str,
    value: &Value,
    expected: &[&str],
) -> Result<(), ValidationError> {
    match value {
        Value::Null => Ok(()),
        Value::String(s) if expected.contains(&s.as_str()) => Ok(()),
        other => {
            let shown = other.as_str().map(str::to_string).unwrap_or_else(|| other.to_string());
            let mut err = ValidationError::unknown_variant(entity, field, &shown, expected);
            err.id = id.to_string();
            Err(err)
        }
    }
}

fn check_unique<'a>(
    entity: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ValidationError::new(entity, id, "id", "is not unique"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanError;
    use crate::fixtures;
    use crate::models::Money;

    #[test]
    fn test_default_snapshot_is_valid() {
        assert!(fixtures::default_snapshot().validate().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let config = fixtures::default_snapshot();
        let json = config.to_json().unwrap();
        assert!(json.contains("\"activeMonth\": \"2025-01\""));
        assert!(json.contains("\"paycheckInfo\""));
        assert!(json.contains("\"isSinkingFund\": true"));

        let back = AppConfig::from_json(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = fixtures::default_snapshot();
        let yaml = config.to_yaml().unwrap();
        let back = AppConfig::from_yaml(&yaml).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut config = fixtures::default_snapshot();
        let dup = config.accounts[0].clone();
        config.accounts.push(dup);
        let err = config.validate().unwrap_err();
        assert_eq!(err.entity, "Account");
        assert_eq!(err.field, "id");
    }

    #[test]
    fn test_from_json_reports_invalid_record() {
        let mut config = fixtures::default_snapshot();
        config.debts[1].current_balance = Money::from_cents(-100);
        let json = serde_json::to_string(&config).unwrap();

        let err = AppConfig::from_json(&json).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.field(), Some("currentBalance"));
    }

    #[test]
    fn test_from_json_rejects_malformed_frequency() {
        let json = fixtures::default_snapshot()
            .to_json()
            .unwrap()
            .replace("\"bi-weekly\"", "\"fortnightly\"");
        let err = AppConfig::from_json(&json).unwrap_err();
        match err {
            PlanError::Validation(e) => {
                assert_eq!(e.entity, "PaycheckInfo");
                assert_eq!(e.field, "frequency");
                assert!(e.message.contains("fortnightly"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_json_rejects_malformed_account_type() {
        let json = fixtures::default_snapshot()
            .to_json()
            .unwrap()
            .replace("\"investment\"", "\"crypto\"");
        let err = AppConfig::from_json(&json).unwrap_err();
        match err {
            PlanError::Validation(e) => {
                assert_eq!(e.id, "acc-4");
                assert_eq!(e.field, "type");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_json_syntax_error() {
        let err = AppConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, PlanError::Json(_)));
    }
}
