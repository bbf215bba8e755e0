//! Dashboard summary
//!
//! One screen with the headline figure of each planning area.

use crate::config::Settings;
use crate::error::{PlanError, PlanResult};
use crate::models::{AppConfig, Money, Month};
use crate::services::{monthly_income, net_worth, reconcile, simulate, BudgetOverview};

/// Outcome of the default payoff plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebtOutlook {
    NoDebt,
    DebtFree { month: Month, months: u32, interest: Money },
    Diverged { months: u32 },
}

#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub user_id: String,
    pub active_month: Month,
    pub net_worth: Money,
    pub budget: BudgetOverview,
    pub monthly_income: Money,
    pub paycheck_consistent: bool,
    pub debt_outlook: DebtOutlook,
    pub currency_symbol: String,
}

impl DashboardReport {
    /// Build the dashboard; a diverging payoff plan is shown, not returned
    /// as an error
    pub fn generate(config: &AppConfig, settings: &Settings) -> PlanResult<Self> {
        let options = settings.simulation_options(config.active_month);
        let debt_outlook = match simulate(
            &config.debts,
            settings.default_strategy,
            settings.default_extra_payment,
            &options,
        ) {
            Ok(scenario) => match scenario.debt_free_month() {
                Some(month) => DebtOutlook::DebtFree {
                    month,
                    months: scenario.months_to_payoff,
                    interest: scenario.total_interest_paid,
                },
                None => DebtOutlook::NoDebt,
            },
            Err(PlanError::SimulationDiverged { months, .. }) => DebtOutlook::Diverged { months },
            Err(e) => return Err(e),
        };

        Ok(Self {
            user_id: config.user_id.clone(),
            active_month: config.active_month,
            net_worth: net_worth(&config.accounts)?,
            budget: BudgetOverview::from_categories(&config.budget)?,
            monthly_income: monthly_income(&config.paycheck_info)?.total(),
            paycheck_consistent: reconcile(&config.paycheck_info)?
                .is_consistent(settings.reconcile_tolerance),
            debt_outlook,
            currency_symbol: settings.currency_symbol.clone(),
        })
    }

    fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("ProserPlan Dashboard - {}\n", self.active_month));
        output.push_str(&"=".repeat(50));
        output.push('\n');

        output.push_str(&format!(
            "Current Net Worth:   {:>15}\n",
            self.money(self.net_worth)
        ));
        output.push_str(&format!(
            "Monthly Income:      {:>15}\n",
            self.money(self.monthly_income)
        ));
        output.push_str(&format!(
            "Budget Remaining:    {:>15}\n",
            self.money(self.budget.total_remaining)
        ));
        output.push_str(&format!(
            "Sinking Funds:       {:>15}\n",
            self.money(self.budget.sinking_fund_balance)
        ));

        let debt_line = match &self.debt_outlook {
            DebtOutlook::NoDebt => "no debt".to_string(),
            DebtOutlook::DebtFree { month, months, .. } => {
                format!("{} ({} months)", month, months)
            }
            DebtOutlook::Diverged { months } => format!("not within {} months", months),
        };
        output.push_str(&format!("Debt-Free By:        {:>15}\n", debt_line));

        if !self.budget.overspent.is_empty() {
            output.push_str(&format!(
                "\nOverspent: {}\n",
                self.budget.overspent.join(", ")
            ));
        }
        if !self.paycheck_consistent {
            output.push_str("\nPaycheck net pay does not match its deductions.\n");
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::models::Debt;

    #[test]
    fn test_dashboard_from_defaults() {
        let report = DashboardReport::generate(&fixtures::default_snapshot(), &Settings::default()).unwrap();

        assert_eq!(report.net_worth.cents(), 2_664_945);
        assert!(report.paycheck_consistent);
        assert!(matches!(report.debt_outlook, DebtOutlook::DebtFree { .. }));

        let text = report.format_terminal();
        assert!(text.contains("ProserPlan Dashboard - 2025-01"));
        assert!(text.contains("$26,649.45"));
    }

    #[test]
    fn test_dashboard_without_debt() {
        let mut snapshot = fixtures::default_snapshot();
        snapshot.debts.clear();
        let report = DashboardReport::generate(&snapshot, &Settings::default()).unwrap();
        assert_eq!(report.debt_outlook, DebtOutlook::NoDebt);
        assert!(report.format_terminal().contains("no debt"));
    }

    #[test]
    fn test_dashboard_shows_divergence() {
        let mut snapshot = fixtures::default_snapshot();
        snapshot.debts = vec![Debt::new(
            "Payday Loan",
            Money::from_cents(1_000_000),
            0.5,
            Money::from_cents(10_000),
            1,
        )];
        let settings = Settings {
            max_payoff_months: 60,
            ..Settings::default()
        };

        let report = DashboardReport::generate(&snapshot, &settings).unwrap();
        assert_eq!(report.debt_outlook, DebtOutlook::Diverged { months: 60 });
        assert!(report.format_terminal().contains("not within 60 months"));
    }
}
