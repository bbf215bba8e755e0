//! Paycheck Report
//!
//! Deduction breakdown, net pay check and monthly income.

use crate::error::PlanResult;
use crate::models::{Money, PaycheckInfo};
use crate::services::{monthly_income, reconcile, MonthlyIncome, Reconciliation};

/// Paycheck Report
#[derive(Debug, Clone)]
pub struct PaycheckReport {
    pub info: PaycheckInfo,
    pub reconciliation: Reconciliation,
    pub monthly: MonthlyIncome,
    pub tolerance: Money,
    pub currency_symbol: String,
}

impl PaycheckReport {
    pub fn generate(
        info: &PaycheckInfo,
        tolerance: Money,
        currency_symbol: &str,
    ) -> PlanResult<Self> {
        Ok(Self {
            info: info.clone(),
            reconciliation: reconcile(info)?,
            monthly: monthly_income(info)?,
            tolerance,
            currency_symbol: currency_symbol.to_string(),
        })
    }

    pub fn is_consistent(&self) -> bool {
        self.reconciliation.is_consistent(self.tolerance)
    }

    fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    fn line(&self, label: &str, amount: Money) -> String {
        format!("{:<26} {:>15}\n", label, self.money(amount))
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Paycheck ({})\n", self.info.frequency.as_str()));
        output.push_str(&"=".repeat(50));
        output.push('\n');

        output.push_str(&self.line("Gross Salary:", self.info.gross_salary));
        output.push_str(&self.line("Pre-Tax Deductions:", -self.info.pre_tax_deductions));
        output.push_str(&self.line("Taxes & Deductions:", -self.info.taxes_and_deductions));
        output.push_str(&self.line("Retirement:", -self.info.retirement_contribution));
        output.push_str(&"-".repeat(42));
        output.push('\n');
        output.push_str(&self.line("Expected Net Pay:", self.reconciliation.expected_net_pay));
        output.push_str(&self.line("Entered Net Pay:", self.info.net_pay));

        if self.is_consistent() {
            output.push_str("Net pay matches the deductions.\n");
        } else {
            output.push_str(&format!(
                "Net pay differs from the deductions by {}\n",
                self.money(self.reconciliation.discrepancy)
            ));
        }

        output.push_str("\nMonthly Income\n");
        output.push_str(&"-".repeat(42));
        output.push('\n');
        output.push_str(&self.line("Net Pay:", self.monthly.net_pay));
        output.push_str(&self.line("Other Income:", self.monthly.other_income));
        output.push_str(&self.line("Total:", self.monthly.total()));
        if self.monthly.irregular_income.is_positive() {
            output.push_str(&format!(
                "Irregular income not counted: {}\n",
                self.money(self.monthly.irregular_income)
            ));
        }

        if !self.info.other_income_sources.is_empty() {
            output.push_str("\nOther Income Sources\n");
            for source in &self.info.other_income_sources {
                output.push_str(&format!(
                    "  {:<24} {:>15}  {}\n",
                    source.name,
                    self.money(source.amount),
                    source.frequency.as_str()
                ));
            }
        }

        output
    }
}
