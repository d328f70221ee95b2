//! Sale entry and plan upgrade models.

use chrono::NaiveDate;
use revenue_core::BillingCycle;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded sale. `mrr` and `tcv` are derived at recording time and are
/// never accepted from the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleEntry {
    pub entry_id: Uuid,
    pub agent_id: Uuid,
    pub plan_id: Uuid,
    pub date: NaiveDate,
    pub billing_cycle: BillingCycle,
    pub discount_pct: f64,
    pub subscribers_count: u32,
    pub mrr: f64,
    pub tcv: f64,
    pub order_link: Option<String>,
}

/// A recorded plan upgrade. The diffs are signed; a downgrade is negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanUpgrade {
    pub upgrade_id: Uuid,
    pub agent_id: Uuid,
    pub from_plan_id: Uuid,
    pub to_plan_id: Uuid,
    pub date: NaiveDate,
    pub mrr_diff: f64,
    pub tcv_diff: f64,
    pub notes: Option<String>,
    pub order_link: Option<String>,
}

/// Input for recording a sale.
///
/// The billing cycle arrives as the raw selector string; normalization
/// happens inside the calculator.
#[derive(Debug, Clone)]
pub struct RecordSale {
    pub agent_id: Uuid,
    pub date: NaiveDate,
    pub billing_cycle: String,
    pub discount_pct: f64,
    pub subscribers_count: u32,
    pub order_link: Option<String>,
}

/// Input for recording a plan upgrade.
#[derive(Debug, Clone)]
pub struct RecordUpgrade {
    pub agent_id: Uuid,
    pub date: NaiveDate,
    pub billing_cycle: String,
    pub discount_pct: f64,
    pub subscribers_count: u32,
    pub notes: Option<String>,
    pub order_link: Option<String>,
}
