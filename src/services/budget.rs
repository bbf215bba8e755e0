//! Budget tracker
//!
//! Per-category remaining balance and month-to-month rollover.
//!
//! Rollover policy: a sinking fund carries its remaining balance forward
//! unchanged, overspend included. A regular category carries forward only a
//! positive remainder; overspending does not eat into next month.

use crate::error::{PlanResult, ValidationError};
use crate::models::{BudgetCategory, Money};

/// What is left in a category: `budgeted + rollover - actual_spent`
pub fn remaining(category: &BudgetCategory) -> PlanResult<Money> {
    let out_of_range = |field: &'static str| {
        ValidationError::out_of_range("BudgetCategory", category.id.as_str(), field)
    };
    let funded = category
        .budgeted
        .checked_add(category.rollover)
        .ok_or_else(|| out_of_range("rollover"))?;
    Ok(funded
        .checked_sub(category.actual_spent)
        .ok_or_else(|| out_of_range("actualSpent"))?)
}

fn checked_sum(
    categories: &[BudgetCategory],
    field: &'static str,
    amount: impl Fn(&BudgetCategory) -> PlanResult<Money>,
) -> PlanResult<Money> {
    categories.iter().try_fold(Money::zero(), |total, category| {
        total.checked_add(amount(category)?).ok_or_else(|| {
            ValidationError::out_of_range("BudgetCategory", category.id.as_str(), field).into()
        })
    })
}

/// Next month's version of a category
///
/// Spending resets to zero and `rollover` becomes this month's remainder,
/// floored at zero unless the category is a sinking fund.
pub fn advance_period(category: &BudgetCategory) -> PlanResult<BudgetCategory> {
    let left = remaining(category)?;
    let rollover = if category.is_sinking_fund {
        left
    } else {
        left.max(Money::zero())
    };

    Ok(BudgetCategory {
        actual_spent: Money::zero(),
        rollover,
        ..category.clone()
    })
}

/// Advance every category to the next month
pub fn advance_all(categories: &[BudgetCategory]) -> PlanResult<Vec<BudgetCategory>> {
    categories.iter().map(advance_period).collect()
}

/// Sum of `remaining` across categories
///
/// Negative means the month as a whole is over budget.
pub fn total_budget_variance(categories: &[BudgetCategory]) -> PlanResult<Money> {
    checked_sum(categories, "actualSpent", remaining)
}

/// Month-level budget totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetOverview {
    pub total_budgeted: Money,
    pub total_spent: Money,
    pub total_rollover: Money,
    /// Same as [`total_budget_variance`]
    pub total_remaining: Money,
    /// Remaining balance held in sinking funds
    pub sinking_fund_balance: Money,
    /// Names of categories with a negative remainder
    pub overspent: Vec<String>,
}

impl BudgetOverview {
    pub fn from_categories(categories: &[BudgetCategory]) -> PlanResult<Self> {
        let sinking_funds: Vec<BudgetCategory> = categories
            .iter()
            .filter(|c| c.is_sinking_fund)
            .cloned()
            .collect();

        let mut overspent = Vec::new();
        for category in categories {
            if remaining(category)?.is_negative() {
                overspent.push(category.name.clone());
            }
        }

        Ok(Self {
            total_budgeted: checked_sum(categories, "budgeted", |c| Ok(c.budgeted))?,
            total_spent: checked_sum(categories, "actualSpent", |c| Ok(c.actual_spent))?,
            total_rollover: checked_sum(categories, "rollover", |c| Ok(c.rollover))?,
            total_remaining: total_budget_variance(categories)?,
            sinking_fund_balance: total_budget_variance(&sinking_funds)?,
            overspent,
        })
    }

    pub fn is_over_budget(&self) -> bool {
        self.total_remaining.is_negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn groceries(spent: i64) -> BudgetCategory {
        let mut category = BudgetCategory::new("Groceries", Money::from_cents(40_000));
        category.actual_spent = Money::from_cents(spent);
        category
    }

    #[test]
    fn test_remaining() {
        let mut category = groceries(12_500);
        category.rollover = Money::from_cents(2_000);
        assert_eq!(remaining(&category).unwrap().cents(), 40_000 + 2_000 - 12_500);
    }

    #[test]
    fn test_regular_overspend_does_not_carry_forward() {
        let category = groceries(45_000);
        assert_eq!(remaining(&category).unwrap().cents(), -5_000);

        let next = advance_period(&category).unwrap();
        assert_eq!(next.rollover, Money::zero());
        assert_eq!(next.actual_spent, Money::zero());
        assert_eq!(next.budgeted, category.budgeted);
        assert_eq!(next.id, category.id);
    }

    #[test]
    fn test_regular_surplus_carries_forward() {
        let next = advance_period(&groceries(30_000)).unwrap();
        assert_eq!(next.rollover.cents(), 10_000);
    }

    #[test]
    fn test_sinking_fund_carries_full_balance() {
        // 250 budgeted + 750 rolled over - 250 spent = 750 remaining
        let mut fund = fixtures::default_budget_categories().remove(3);
        fund.actual_spent = Money::from_cents(25_000);
        assert_eq!(remaining(&fund).unwrap().cents(), 75_000);

        let next = advance_period(&fund).unwrap();
        assert_eq!(next.rollover.cents(), 75_000);
        assert!(next.actual_spent.is_zero());
    }

    #[test]
    fn test_sinking_fund_carries_overspend() {
        let mut fund = BudgetCategory::sinking_fund(
            "Vacation",
            Money::from_cents(10_000),
            Money::zero(),
        );
        fund.actual_spent = Money::from_cents(30_000);

        let next = advance_period(&fund).unwrap();
        assert_eq!(next.rollover.cents(), -20_000);
        assert_eq!(remaining(&next).unwrap().cents(), -10_000);
    }

    #[test]
    fn test_advance_does_not_mutate_input() {
        let category = groceries(1_000);
        let before = category.clone();
        let _ = advance_period(&category).unwrap();
        assert_eq!(category, before);
    }

    #[test]
    fn test_total_variance() {
        let mut categories = fixtures::default_budget_categories();
        // 1500 + 400 + 150 + (250 + 750) with nothing spent
        assert_eq!(total_budget_variance(&categories).unwrap().cents(), 305_000);

        categories[0].actual_spent = Money::from_cents(400_000);
        assert_eq!(total_budget_variance(&categories).unwrap().cents(), 55_000);
        assert_eq!(total_budget_variance(&[]).unwrap(), Money::zero());
    }

    #[test]
    fn test_advance_all() {
        let mut categories = fixtures::default_budget_categories();
        categories[1].actual_spent = Money::from_cents(50_000);
        let next = advance_all(&categories).unwrap();
        assert_eq!(next.len(), 4);
        assert!(next[1].rollover.is_zero());
        assert_eq!(next[3].rollover.cents(), 100_000);
    }

    #[test]
    fn test_out_of_range_amounts_are_rejected() {
        let mut category = groceries(0);
        category.rollover = Money::from_cents(i64::MAX);
        let err = remaining(&category).unwrap_err();
        assert_eq!(err.field(), Some("rollover"));
        assert!(advance_period(&category).is_err());

        let mut category = groceries(i64::MAX);
        category.budgeted = Money::from_cents(-2);
        assert_eq!(remaining(&category).unwrap_err().field(), Some("actualSpent"));

        let mut rich = groceries(0);
        rich.budgeted = Money::from_cents(i64::MAX);
        let categories = vec![rich, groceries(0)];
        assert!(total_budget_variance(&categories).unwrap_err().is_validation());
        assert!(BudgetOverview::from_categories(&categories).is_err());
    }

    #[test]
    fn test_overview() {
        let mut categories = fixtures::default_budget_categories();
        categories[1].actual_spent = Money::from_cents(45_000);
        categories[3].actual_spent = Money::from_cents(10_000);

        let overview = BudgetOverview::from_categories(&categories).unwrap();
        assert_eq!(overview.total_budgeted.cents(), 230_000);
        assert_eq!(overview.total_spent.cents(), 55_000);
        assert_eq!(overview.total_rollover.cents(), 75_000);
        assert_eq!(overview.total_remaining.cents(), 250_000);
        assert_eq!(overview.sinking_fund_balance.cents(), 90_000);
        assert_eq!(overview.overspent, vec!["Groceries".to_string()]);
        assert!(!overview.is_over_budget());
    }
}
