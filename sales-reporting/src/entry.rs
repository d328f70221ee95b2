//! Sale and upgrade recording.
//!
//! Recording computes the derived revenue fields through `revenue-core`
//! and assigns fresh ids. Invalid pricing input surfaces as
//! `RevenueError` rather than being clamped here.

use revenue_core::{calculate_mrr, calculate_upgrade_diff, BillingCycle, RevenueError};
use uuid::Uuid;

use crate::models::{HostingPlan, PlanUpgrade, RecordSale, RecordUpgrade, SaleEntry};

/// Record a sale of `plan`, deriving its MRR and TCV.
#[tracing::instrument(skip(input, plan), fields(plan = %plan.name, agent = %input.agent_id))]
pub fn record_sale(input: RecordSale, plan: &HostingPlan) -> Result<SaleEntry, RevenueError> {
    let result = calculate_mrr(
        plan.regular_price,
        input.discount_pct,
        &input.billing_cycle,
        input.subscribers_count,
    )?;

    tracing::debug!(mrr = result.mrr, tcv = result.tcv, "sale recorded");

    Ok(SaleEntry {
        entry_id: Uuid::new_v4(),
        agent_id: input.agent_id,
        plan_id: plan.plan_id,
        date: input.date,
        billing_cycle: BillingCycle::from_string(&input.billing_cycle),
        discount_pct: input.discount_pct,
        subscribers_count: input.subscribers_count,
        mrr: result.mrr,
        tcv: result.tcv,
        order_link: input.order_link,
    })
}

/// Record a subscriber moving between two plans, deriving the signed
/// MRR/TCV deltas. Downgrades produce negative diffs.
#[tracing::instrument(
    skip(input, from_plan, to_plan),
    fields(from = %from_plan.name, to = %to_plan.name, agent = %input.agent_id)
)]
pub fn record_upgrade(
    input: RecordUpgrade,
    from_plan: &HostingPlan,
    to_plan: &HostingPlan,
) -> Result<PlanUpgrade, RevenueError> {
    let diff = calculate_upgrade_diff(
        from_plan.regular_price,
        to_plan.regular_price,
        input.discount_pct,
        &input.billing_cycle,
        input.subscribers_count,
    )?;

    tracing::debug!(mrr_diff = diff.mrr, tcv_diff = diff.tcv, "plan upgrade recorded");

    Ok(PlanUpgrade {
        upgrade_id: Uuid::new_v4(),
        agent_id: input.agent_id,
        from_plan_id: from_plan.plan_id,
        to_plan_id: to_plan.plan_id,
        date: input.date,
        mrr_diff: diff.mrr,
        tcv_diff: diff.tcv,
        notes: input.notes,
        order_link: input.order_link,
    })
}
