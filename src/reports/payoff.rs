//! Debt Payoff Report
//!
//! Summary, per-debt payoff months and a checkpoint schedule for one
//! simulated strategy, optionally alongside a Snowball/Avalanche comparison.

use std::collections::HashSet;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Debt, Money, Month, PayoffScenario};
use crate::services::StrategyComparison;

#[derive(Tabled)]
struct DebtRow {
    #[tabled(rename = "#")]
    priority: u32,
    #[tabled(rename = "Debt")]
    name: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Minimum")]
    payment: String,
    #[tabled(rename = "Paid Off")]
    paid_off: String,
}

#[derive(Tabled)]
struct ScheduleRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Remaining")]
    balance: String,
    #[tabled(rename = "Paid Off")]
    paid_off: String,
}

#[derive(Tabled)]
struct StrategyRow {
    #[tabled(rename = "Strategy")]
    strategy: String,
    #[tabled(rename = "Months")]
    months: u32,
    #[tabled(rename = "Interest")]
    interest: String,
    #[tabled(rename = "Debt-Free")]
    debt_free: String,
}

/// Debt Payoff Report
#[derive(Debug, Clone)]
pub struct PayoffReport {
    pub debts: Vec<Debt>,
    pub scenario: PayoffScenario,
    pub extra_monthly_budget: Money,
    pub comparison: Option<StrategyComparison>,
    pub currency_symbol: String,
}

impl PayoffReport {
    pub fn new(
        debts: &[Debt],
        scenario: PayoffScenario,
        extra_monthly_budget: Money,
        currency_symbol: &str,
    ) -> Self {
        Self {
            debts: debts.to_vec(),
            scenario,
            extra_monthly_budget,
            comparison: None,
            currency_symbol: currency_symbol.to_string(),
        }
    }

    pub fn with_comparison(mut self, comparison: StrategyComparison) -> Self {
        self.comparison = Some(comparison);
        self
    }

    fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    fn debt_free_label(scenario: &PayoffScenario) -> String {
        scenario
            .debt_free_month()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "now".to_string())
    }

    /// Month numbers shown in the schedule: every twelfth month, each
    /// month a debt is paid off, and the final month
    pub fn checkpoint_months(&self) -> Vec<u32> {
        let payoff_months: HashSet<u32> = self
            .scenario
            .debt_payoffs
            .iter()
            .map(|p| p.month_number)
            .collect();
        let last = self.scenario.months_to_payoff;

        (1..=last)
            .filter(|n| n % 12 == 0 || *n == last || payoff_months.contains(n))
            .collect()
    }

    fn debt_table(&self) -> String {
        let rows = self.debts.iter().map(|debt| DebtRow {
            priority: debt.priority,
            name: debt.name.clone(),
            balance: self.money(debt.current_balance),
            rate: format!("{:.2}%", debt.interest_rate * 100.0),
            payment: self.money(debt.minimum_payment),
            paid_off: self
                .scenario
                .payoff_month_of(&debt.id)
                .and_then(|n| self.scenario.projected_balances.get(n as usize - 1))
                .map(|p| p.month.to_string())
                .unwrap_or_else(|| "-".to_string()),
        });

        Table::new(rows).with(Style::psql()).to_string()
    }

    fn schedule_table(&self) -> String {
        let rows = self.checkpoint_months().into_iter().filter_map(|n| {
            let projected = self.scenario.projected_balances.get(n as usize - 1)?;
            let paid_off: Vec<&str> = self
                .scenario
                .debt_payoffs
                .iter()
                .filter(|p| p.month_number == n)
                .map(|p| p.name.as_str())
                .collect();

            Some(ScheduleRow {
                month: projected.month.to_string(),
                balance: self.money(projected.balance),
                paid_off: paid_off.join(", "),
            })
        });

        Table::new(rows).with(Style::psql()).to_string()
    }

    fn comparison_table(&self, comparison: &StrategyComparison) -> String {
        let rows = [&comparison.snowball, &comparison.avalanche].map(|scenario| StrategyRow {
            strategy: scenario.method.to_string(),
            months: scenario.months_to_payoff,
            interest: self.money(scenario.total_interest_paid),
            debt_free: Self::debt_free_label(scenario),
        });

        Table::new(rows).with(Style::psql()).to_string()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Debt Payoff Plan - {}\n", self.scenario.method));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.scenario.months_to_payoff == 0 {
            output.push_str("No outstanding debts.\n");
            return output;
        }

        output.push_str(&format!(
            "Extra Monthly Payment: {:>15}\n",
            self.money(self.extra_monthly_budget)
        ));
        output.push_str(&format!(
            "Months to Payoff:      {:>15}\n",
            self.scenario.months_to_payoff
        ));
        output.push_str(&format!(
            "Debt-Free By:          {:>15}\n",
            Self::debt_free_label(&self.scenario)
        ));
        output.push_str(&format!(
            "Total Interest Paid:   {:>15}\n",
            self.money(self.scenario.total_interest_paid)
        ));

        output.push('\n');
        output.push_str(&self.debt_table());
        output.push_str("\n\nSchedule\n");
        output.push_str(&self.schedule_table());
        output.push('\n');

        if let Some(comparison) = &self.comparison {
            output.push_str("\nStrategy Comparison\n");
            output.push_str(&self.comparison_table(comparison));
            output.push('\n');

            let saved = comparison.interest_saved();
            let months = comparison.months_saved();
            output.push_str(&format!(
                "Avalanche saves {} in interest and {} month{} over Snowball.\n",
                self.money(saved),
                months,
                if months == 1 { "" } else { "s" }
            ));
        }

        output
    }
}

/// Message for a simulation that hit its month cap
pub fn format_divergence(months: u32, last: Option<(Month, Money)>, currency_symbol: &str) -> String {
    let mut output = format!("Debts are not paid off within {} months.\n", months);
    if let Some((month, balance)) = last {
        output.push_str(&format!(
            "Projected balance in {}: {}\n",
            month,
            balance.format_with_symbol(currency_symbol)
        ));
    }
    output.push_str("Payments do not keep up with interest; raise the extra payment.\n");
    output
}
