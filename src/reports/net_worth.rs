//! Net Worth Report
//!
//! Account balances grouped by type with asset, liability and net worth
//! totals.

use crate::error::PlanResult;
use crate::models::{Account, Money};
use crate::services::NetWorthSummary;

/// Net Worth Report
#[derive(Debug, Clone)]
pub struct NetWorthReport {
    pub summary: NetWorthSummary,
    pub currency_symbol: String,
}

impl NetWorthReport {
    /// Generate a net worth report
    pub fn generate(accounts: &[Account], currency_symbol: &str) -> PlanResult<Self> {
        Ok(Self {
            summary: NetWorthSummary::from_accounts(accounts)?,
            currency_symbol: currency_symbol.to_string(),
        })
    }

    fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Net Worth Report\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        output.push_str(&format!(
            "Total Assets:      {:>15}\n",
            self.money(self.summary.total_assets)
        ));
        output.push_str(&format!(
            "Total Liabilities: {:>15}\n",
            self.money(self.summary.total_liabilities)
        ));
        output.push_str(&"-".repeat(35));
        output.push('\n');
        output.push_str(&format!(
            "Net Worth:         {:>15}\n",
            self.money(self.summary.net_worth)
        ));

        if self.summary.groups.is_empty() {
            output.push_str("\nNo accounts found.\n");
            return output;
        }

        output.push('\n');
        output.push_str(&format!("{:<32} {:>15}\n", "Account", "Balance"));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for group in &self.summary.groups {
            output.push_str(&format!(
                "\n{}\n",
                group.account_type.to_string().to_uppercase()
            ));

            for account in &group.accounts {
                let liability_indicator = if account.is_liability { "L" } else { " " };
                output.push_str(&format!(
                    "{} {:<30} {:>15}\n",
                    liability_indicator,
                    account.name,
                    self.money(account.balance)
                ));
            }

            output.push_str(&format!(
                "  {:<30} {:>15}\n",
                "Subtotal:",
                self.money(group.total)
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str("L = Liability (subtracted from net worth)\n");

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_generate_from_defaults() {
        let report = NetWorthReport::generate(&fixtures::default_accounts(), "$").unwrap();
        assert_eq!(report.summary.net_worth.cents(), 2_664_945);
        assert_eq!(report.summary.account_count(), 4);
    }

    #[test]
    fn test_format_terminal() {
        let report = NetWorthReport::generate(&fixtures::default_accounts(), "$").unwrap();
        let text = report.format_terminal();

        assert!(text.contains("Net Worth Report"));
        assert!(text.contains("$26,649.45"));
        assert!(text.contains("$850.55"));
        assert!(text.contains("CREDIT CARD"));
        assert!(text.contains("L Visa Rewards Card"));
    }

    #[test]
    fn test_empty_accounts() {
        let report = NetWorthReport::generate(&[], "€").unwrap();
        let text = report.format_terminal();
        assert!(text.contains("€0.00"));
        assert!(text.contains("No accounts found."));
    }
}
