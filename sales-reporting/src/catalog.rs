//! Per-category billing cycle and discount catalogs.
//!
//! Plan types are free strings on `HostingPlan`, so matching is a
//! case-insensitive substring check with a live default arm for anything
//! outside the three known categories.

use revenue_core::BillingCycle;

/// Billing cycles offered for a plan category.
///
/// Shared hosting sells on long commitments; VPS and dedicated servers
/// bill at most annually, which is also the default for unknown types.
pub fn available_cycles(plan_type: &str) -> Vec<BillingCycle> {
    let lower = plan_type.to_lowercase();

    if lower.contains("shared") {
        vec![
            BillingCycle::Monthly,
            BillingCycle::Annual,
            BillingCycle::Biennial,
            BillingCycle::Triennial,
        ]
    } else {
        vec![
            BillingCycle::Monthly,
            BillingCycle::Quarterly,
            BillingCycle::SemiAnnual,
            BillingCycle::Annual,
        ]
    }
}

/// Standard discount percentages offered for a plan category.
pub fn standard_discounts(plan_type: &str) -> Vec<u8> {
    let lower = plan_type.to_lowercase();

    if lower.contains("shared") {
        vec![0, 70, 75, 80, 85]
    } else if lower.contains("vps") || lower.contains("dedicated") {
        vec![0, 5, 10, 20, 25, 30, 35]
    } else {
        vec![0, 5, 10, 15, 20, 25, 30]
    }
}

/// Marketing name for a plan category. Unknown types pass through
/// verbatim.
pub fn category_display_name(plan_type: &str) -> String {
    match plan_type.to_lowercase().as_str() {
        "shared" => "Shared Hosting".to_string(),
        "vps" => "Cloud SSD VPS".to_string(),
        "dedicated" => "Dedicated CPU Servers".to_string(),
        _ => plan_type.to_string(),
    }
}
