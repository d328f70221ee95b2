//! Test helper module for sales-reporting integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use revenue_core::BillingCycle;
use sales_reporting::models::{HostingPlan, SaleEntry, TeamMember};
use uuid::Uuid;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn plan(name: &str, plan_type: &str, regular_price: f64) -> HostingPlan {
    HostingPlan {
        plan_id: Uuid::new_v4(),
        name: name.to_string(),
        plan_type: plan_type.to_string(),
        regular_price,
        setup_fee: 0.0,
    }
}

pub fn member(name: &str, email: &str) -> TeamMember {
    TeamMember {
        member_id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
    }
}

/// Bare sale entry with the given pre-computed revenue figures, for
/// aggregation tests that do not care how the figures were derived.
pub fn entry(agent_id: Uuid, date: NaiveDate, mrr: f64, tcv: f64) -> SaleEntry {
    SaleEntry {
        entry_id: Uuid::new_v4(),
        agent_id,
        plan_id: Uuid::new_v4(),
        date,
        billing_cycle: BillingCycle::Monthly,
        discount_pct: 0.0,
        subscribers_count: 1,
        mrr,
        tcv,
        order_link: None,
    }
}
