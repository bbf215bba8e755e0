//! Paycheck analyzer
//!
//! Cross-checks the entered take-home pay against the deduction breakdown
//! and normalises income to a monthly figure.

use crate::error::{PlanResult, ValidationError};
use crate::models::{Money, PaycheckInfo};

fn out_of_range(field: &'static str) -> ValidationError {
    ValidationError::out_of_range("PaycheckInfo", "", field)
}

/// Discrepancies up to this amount are treated as rounding noise
pub const DEFAULT_RECONCILE_TOLERANCE: Money = Money::from_cents(1);

/// Result of checking `net_pay` against the deduction breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciliation {
    /// Gross minus every deduction
    pub expected_net_pay: Money,
    /// Entered net pay minus expected; positive means more than expected
    pub discrepancy: Money,
}

impl Reconciliation {
    /// True when the discrepancy is within `tolerance`
    pub fn is_consistent(&self, tolerance: Money) -> bool {
        self.discrepancy.cents().unsigned_abs() <= tolerance.cents().unsigned_abs()
    }
}

/// Compare entered net pay with gross pay less deductions
///
/// A mismatch is not an error; callers decide how to surface it. Only
/// amounts whose difference does not fit in i64 cents are rejected.
pub fn reconcile(info: &PaycheckInfo) -> PlanResult<Reconciliation> {
    let deductions = [
        (info.pre_tax_deductions, "preTaxDeductions"),
        (info.taxes_and_deductions, "taxesAndDeductions"),
        (info.retirement_contribution, "retirementContribution"),
    ];
    let mut expected_net_pay = info.gross_salary;
    for (amount, field) in deductions {
        expected_net_pay = expected_net_pay
            .checked_sub(amount)
            .ok_or_else(|| out_of_range(field))?;
    }

    let discrepancy = info
        .net_pay
        .checked_sub(expected_net_pay)
        .ok_or_else(|| out_of_range("netPay"))?;

    Ok(Reconciliation {
        expected_net_pay,
        discrepancy,
    })
}

/// Income averaged over a calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyIncome {
    /// Net pay times paychecks per month
    pub net_pay: Money,
    /// Gross pay times paychecks per month
    pub gross_pay: Money,
    /// Scheduled secondary income averaged per month
    pub other_income: Money,
    /// Sum of irregular payouts, excluded from the monthly total
    pub irregular_income: Money,
}

impl MonthlyIncome {
    /// Dependable monthly income: net pay plus scheduled other income
    ///
    /// Saturates; both parts are already range-checked.
    pub fn total(&self) -> Money {
        self.net_pay.saturating_add(self.other_income)
    }
}

/// Normalise paycheck and secondary income to a monthly average
pub fn monthly_income(info: &PaycheckInfo) -> PlanResult<MonthlyIncome> {
    let per_month = info.frequency.paychecks_per_month();

    let mut other_income = Money::zero();
    let mut irregular_income = Money::zero();
    for source in &info.other_income_sources {
        let (total, amount) = match source.frequency.monthly_factor() {
            Some(factor) => (&mut other_income, source.amount.checked_scale(factor)),
            None => (&mut irregular_income, Some(source.amount)),
        };
        *total = amount
            .and_then(|amount| total.checked_add(amount))
            .ok_or_else(|| out_of_range("otherIncomeSources"))?;
    }

    let net_pay = info
        .net_pay
        .checked_scale(per_month)
        .ok_or_else(|| out_of_range("netPay"))?;
    let gross_pay = info
        .gross_salary
        .checked_scale(per_month)
        .ok_or_else(|| out_of_range("grossSalary"))?;

    Ok(MonthlyIncome {
        net_pay,
        gross_pay,
        other_income,
        irregular_income,
    })
}
