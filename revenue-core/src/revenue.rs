//! MRR/TCV calculation.
//!
//! `regular_price` is always a monthly list price. The billing cycle
//! decides how many months are billed at once, never the per-month rate:
//! MRR is the discounted monthly price across all subscribers, TCV the
//! same rate over the full contract term.

use serde::{Deserialize, Serialize};

use crate::cycle::BillingCycle;
use crate::error::RevenueError;

/// Normalized revenue figures for one sale, rounded to the cent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueResult {
    pub mrr: f64,
    pub tcv: f64,
}

/// Half-up rounding to 2 decimal places.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn check_finite(value: f64, field: &str) -> Result<(), RevenueError> {
    if !value.is_finite() {
        return Err(RevenueError::InvalidArgument(format!(
            "{} must be a finite number, got {}",
            field, value
        )));
    }
    Ok(())
}

fn check_price(value: f64, field: &str) -> Result<(), RevenueError> {
    check_finite(value, field)?;
    if value < 0.0 {
        return Err(RevenueError::InvalidArgument(format!(
            "{} must be non-negative, got {}",
            field, value
        )));
    }
    Ok(())
}

fn check_discount(discount_pct: f64) -> Result<(), RevenueError> {
    check_finite(discount_pct, "discount_pct")?;
    if !(0.0..=100.0).contains(&discount_pct) {
        return Err(RevenueError::InvalidArgument(format!(
            "discount_pct must be within 0..=100, got {}",
            discount_pct
        )));
    }
    Ok(())
}

fn check_subscribers(subscribers_count: u32) -> Result<(), RevenueError> {
    if subscribers_count == 0 {
        return Err(RevenueError::InvalidArgument(
            "subscribers_count must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Compute MRR and TCV for a sale.
///
/// `billing_cycle` accepts both short codes and full names, case
/// insensitively; unrecognized input is treated as annual. Rounding is
/// applied once per field, on the unrounded monthly figure, so TCV tracks
/// the contract length exactly rather than compounding cent rounding.
///
/// Out-of-range input is the caller's error and is rejected rather than
/// clamped or coerced.
pub fn calculate_mrr(
    regular_price: f64,
    discount_pct: f64,
    billing_cycle: &str,
    subscribers_count: u32,
) -> Result<RevenueResult, RevenueError> {
    check_price(regular_price, "regular_price")?;
    check_discount(discount_pct)?;
    check_subscribers(subscribers_count)?;

    let contract_months = BillingCycle::from_string(billing_cycle).months();
    let discounted_monthly = regular_price * (1.0 - discount_pct / 100.0);
    let monthly_total = discounted_monthly * f64::from(subscribers_count);

    Ok(RevenueResult {
        mrr: round2(monthly_total),
        tcv: round2(monthly_total * f64::from(contract_months)),
    })
}

/// Compute the signed MRR/TCV delta of moving between two plans.
///
/// Both sides use the same discount, cycle, and subscriber count. Fields
/// are negative for downgrades; upgrading a plan onto itself is exactly
/// zero.
pub fn calculate_upgrade_diff(
    from_plan_price: f64,
    to_plan_price: f64,
    discount_pct: f64,
    billing_cycle: &str,
    subscribers_count: u32,
) -> Result<RevenueResult, RevenueError> {
    check_price(from_plan_price, "from_plan_price")?;
    check_price(to_plan_price, "to_plan_price")?;

    let from = calculate_mrr(from_plan_price, discount_pct, billing_cycle, subscribers_count)?;
    let to = calculate_mrr(to_plan_price, discount_pct, billing_cycle, subscribers_count)?;

    Ok(RevenueResult {
        mrr: to.mrr - from.mrr,
        tcv: to.tcv - from.tcv,
    })
}
