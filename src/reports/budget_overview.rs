//! Budget Overview Report
//!
//! Per-category budgeted, rollover, spent and remaining figures for the
//! active month, optionally with the rollover each category carries into the
//! next month.

use crate::error::PlanResult;
use crate::models::{BudgetCategory, Money, Month};
use crate::services::{advance_period, remaining, BudgetOverview};

/// A single category row
#[derive(Debug, Clone)]
pub struct CategoryReportRow {
    pub category_name: String,
    pub is_sinking_fund: bool,
    pub budgeted: Money,
    pub rollover: Money,
    pub spent: Money,
    pub remaining: Money,
    /// Rollover after advancing to the next month
    pub next_rollover: Money,
}

impl CategoryReportRow {
    fn from_category(category: &BudgetCategory) -> PlanResult<Self> {
        Ok(Self {
            category_name: category.name.clone(),
            is_sinking_fund: category.is_sinking_fund,
            budgeted: category.budgeted,
            rollover: category.rollover,
            spent: category.actual_spent,
            remaining: remaining(category)?,
            next_rollover: advance_period(category)?.rollover,
        })
    }

    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Budget Overview Report
#[derive(Debug, Clone)]
pub struct BudgetOverviewReport {
    pub month: Month,
    pub rows: Vec<CategoryReportRow>,
    pub overview: BudgetOverview,
    /// Show the next-month rollover column
    pub show_next: bool,
    pub currency_symbol: String,
}

impl BudgetOverviewReport {
    pub fn generate(
        categories: &[BudgetCategory],
        month: Month,
        show_next: bool,
        currency_symbol: &str,
    ) -> PlanResult<Self> {
        Ok(Self {
            month,
            rows: categories
                .iter()
                .map(CategoryReportRow::from_category)
                .collect::<PlanResult<_>>()?,
            overview: BudgetOverview::from_categories(categories)?,
            show_next,
            currency_symbol: currency_symbol.to_string(),
        })
    }

    fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        let width = if self.show_next { 96 } else { 82 };

        output.push_str(&format!("Budget Overview - {}\n", self.month));
        output.push_str(&"=".repeat(width));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No budget categories found.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<28} {:>12} {:>12} {:>12} {:>14}",
            "Category", "Budgeted", "Rollover", "Spent", "Remaining"
        ));
        if self.show_next {
            output.push_str(&format!(" {:>13}", format!("→ {}", self.month.next())));
        }
        output.push('\n');
        output.push_str(&"-".repeat(width));
        output.push('\n');

        for row in &self.rows {
            let marker = if row.is_sinking_fund { "S" } else { " " };
            let remaining_display = if row.is_overspent() {
                format!("{} *", self.money(row.remaining))
            } else {
                self.money(row.remaining)
            };

            output.push_str(&format!(
                "{} {:<26} {:>12} {:>12} {:>12} {:>14}",
                marker,
                row.category_name,
                self.money(row.budgeted),
                self.money(row.rollover),
                self.money(row.spent),
                remaining_display
            ));
            if self.show_next {
                output.push_str(&format!(" {:>13}", self.money(row.next_rollover)));
            }
            output.push('\n');
        }

        output.push_str(&"-".repeat(width));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>12} {:>12} {:>12} {:>14}\n",
            "TOTAL",
            self.money(self.overview.total_budgeted),
            self.money(self.overview.total_rollover),
            self.money(self.overview.total_spent),
            self.money(self.overview.total_remaining)
        ));
        output.push_str(&format!(
            "Sinking funds hold: {}\n",
            self.money(self.overview.sinking_fund_balance)
        ));
        if self.overview.is_over_budget() {
            output.push_str("Over budget for the month.\n");
        }

        output.push_str("\nS = Sinking fund, * = Overspent\n");

        output
    }
}
