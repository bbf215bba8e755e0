//! Debt payoff simulator
//!
//! Projects month-by-month debt balances under the Snowball (smallest
//! balance first) or Avalanche (highest rate first) strategy.
//!
//! Each simulated month:
//! 1. interest accrues on every open debt at `rate / 12`, rounded to the cent;
//! 2. every open debt receives its scheduled payment, capped at its balance;
//! 3. the rest of the monthly budget (extra money, minimums freed by debts
//!    already paid off, and any cap leftovers) goes to open debts in
//!    strategy order until it runs out.
//!
//! The monthly budget is fixed at the start: the scheduled payments of every
//! open debt plus the extra amount. Debts are ranked once, on their starting
//! balance or rate; paid-off debts drop out and the rest keep their rank.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

use crate::error::{PlanError, PlanResult, ValidationError};
use crate::models::{
    Debt, DebtId, DebtPayoff, Money, Month, PayoffScenario, PayoffStrategy, ProjectedBalance,
};

/// Month cap after which a simulation is reported as diverged
pub const DEFAULT_MAX_MONTHS: u32 = 1200;

/// Which per-debt payment the simulator schedules each month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentBasis {
    /// The lender's minimum payment
    #[default]
    Minimum,
    /// What the user currently pays
    Actual,
}

impl PaymentBasis {
    fn scheduled(&self, debt: &Debt) -> Money {
        match self {
            Self::Minimum => debt.minimum_payment,
            Self::Actual => debt.actual_payment,
        }
    }
}

/// Tuning for a simulation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationOptions {
    /// Label of the first simulated month
    pub start_month: Month,
    pub max_months: u32,
    pub payment_basis: PaymentBasis,
}

impl SimulationOptions {
    pub fn starting(start_month: Month) -> Self {
        Self {
            start_month,
            ..Self::default()
        }
    }
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            start_month: Month::current(),
            max_months: DEFAULT_MAX_MONTHS,
            payment_basis: PaymentBasis::default(),
        }
    }
}

/// Cooperative cancellation flag shared between a caller and a running
/// simulation
///
/// Clones share the same flag. The simulator checks it once per month.
#[derive(Debug, Clone, Default)]
pub struct AbortSignal(Arc<AtomicBool>);

impl AbortSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn abort(&self) {
        self.0.store(true, AtomicOrdering::SeqCst);
    }

    pub fn is_aborted(&self) -> bool {
        self.0.load(AtomicOrdering::SeqCst)
    }
}

/// Working copy of one open debt
#[derive(Debug, Clone)]
struct DebtState {
    id: DebtId,
    name: String,
    balance: Money,
    monthly_rate: f64,
    annual_rate: f64,
    payment: Money,
    priority: u32,
}

impl DebtState {
    fn pay(&mut self, available: Money) -> Money {
        let paid = available.min(self.balance);
        self.balance -= paid;
        paid
    }
}

fn strategy_order(strategy: PayoffStrategy, a: &DebtState, b: &DebtState) -> Ordering {
    let primary = match strategy {
        PayoffStrategy::Snowball => a.balance.cmp(&b.balance),
        PayoffStrategy::Avalanche => b.annual_rate.total_cmp(&a.annual_rate),
    };
    primary.then(a.priority.cmp(&b.priority))
}

/// Simulate paying off `debts` with `extra_monthly_budget` on top of the
/// scheduled payments
///
/// Returns [`PlanError::SimulationDiverged`] with the partial projection if
/// the debts are not cleared within `options.max_months`.
pub fn simulate(
    debts: &[Debt],
    strategy: PayoffStrategy,
    extra_monthly_budget: Money,
    options: &SimulationOptions,
) -> PlanResult<PayoffScenario> {
    run(debts, strategy, extra_monthly_budget, options, None)
}

/// [`simulate`], checking `abort` before every simulated month
///
/// An aborted run returns [`PlanError::Cancelled`] and no partial scenario.
pub fn simulate_with_abort(
    debts: &[Debt],
    strategy: PayoffStrategy,
    extra_monthly_budget: Money,
    options: &SimulationOptions,
    abort: &AbortSignal,
) -> PlanResult<PayoffScenario> {
    run(debts, strategy, extra_monthly_budget, options, Some(abort))
}

fn run(
    debts: &[Debt],
    strategy: PayoffStrategy,
    extra: Money,
    options: &SimulationOptions,
    abort: Option<&AbortSignal>,
) -> PlanResult<PayoffScenario> {
    for debt in debts {
        debt.validate()?;
    }
    if extra.is_negative() {
        return Err(ValidationError::negative("SimulationParams", "", "extraMonthlyBudget").into());
    }

    let mut open: Vec<DebtState> = debts
        .iter()
        .filter(|d| d.current_balance.is_positive())
        .map(|d| DebtState {
            id: d.id.clone(),
            name: d.name.clone(),
            balance: d.current_balance,
            monthly_rate: d.interest_rate / 12.0,
            annual_rate: d.interest_rate,
            payment: options.payment_basis.scheduled(d),
            priority: d.priority,
        })
        .collect();

    if open.is_empty() {
        return Ok(PayoffScenario::empty(strategy));
    }

    let monthly_budget = open
        .iter()
        .fold(extra, |acc, d| acc.saturating_add(d.payment));
    open.sort_by(|a, b| strategy_order(strategy, a, b));

    tracing::debug!(
        strategy = %strategy,
        debts = open.len(),
        monthly_budget = %monthly_budget,
        "starting payoff simulation"
    );

    let mut total_interest = Money::zero();
    let mut projected_balances = Vec::new();
    let mut debt_payoffs = Vec::new();

    for month_number in 1..=options.max_months {
        if abort.is_some_and(AbortSignal::is_aborted) {
            tracing::debug!(month = month_number, "payoff simulation cancelled");
            return Err(PlanError::Cancelled);
        }

        let month = options.start_month.plus_months(month_number - 1);

        for debt in open.iter_mut() {
            let interest = debt.balance.scale(debt.monthly_rate);
            debt.balance = debt.balance.saturating_add(interest);
            total_interest = total_interest.saturating_add(interest);
        }

        let mut pool = monthly_budget;
        for debt in open.iter_mut() {
            let scheduled = debt.payment;
            pool -= debt.pay(scheduled);
        }
        debug_assert!(!pool.is_negative(), "scheduled payments exceed the monthly budget");
        for debt in open.iter_mut() {
            if !pool.is_positive() {
                break;
            }
            pool -= debt.pay(pool);
        }

        if open.iter().any(|d| d.balance.is_zero()) {
            for debt in open.iter().filter(|d| d.balance.is_zero()) {
                tracing::debug!(debt = %debt.name, month = %month, "debt paid off");
                debt_payoffs.push(DebtPayoff {
                    debt_id: debt.id.clone(),
                    name: debt.name.clone(),
                    month_number,
                    month,
                });
            }
            open.retain(|d| d.balance.is_positive());
        }

        let balance = open
            .iter()
            .fold(Money::zero(), |acc, d| acc.saturating_add(d.balance));
        projected_balances.push(ProjectedBalance { month, balance });

        if open.is_empty() {
            return Ok(PayoffScenario {
                method: strategy,
                total_interest_paid: total_interest,
                months_to_payoff: month_number,
                projected_balances,
                debt_payoffs,
            });
        }
    }

    tracing::warn!(
        strategy = %strategy,
        months = options.max_months,
        "payoff simulation did not converge"
    );
    Err(PlanError::SimulationDiverged {
        months: options.max_months,
        projected_balances,
    })
}

/// Snowball and Avalanche run on the same inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyComparison {
    pub snowball: PayoffScenario,
    pub avalanche: PayoffScenario,
}

impl StrategyComparison {
    /// Interest Avalanche saves over Snowball
    pub fn interest_saved(&self) -> Money {
        self.snowball.total_interest_paid - self.avalanche.total_interest_paid
    }

    /// Months Avalanche saves over Snowball (negative if it takes longer)
    pub fn months_saved(&self) -> i64 {
        i64::from(self.snowball.months_to_payoff) - i64::from(self.avalanche.months_to_payoff)
    }
}

/// Run both strategies with the same extra budget
pub fn compare_strategies(
    debts: &[Debt],
    extra_monthly_budget: Money,
    options: &SimulationOptions,
) -> PlanResult<StrategyComparison> {
    Ok(StrategyComparison {
        snowball: simulate(debts, PayoffStrategy::Snowball, extra_monthly_budget, options)?,
        avalanche: simulate(debts, PayoffStrategy::Avalanche, extra_monthly_budget, options)?,
    })
}
