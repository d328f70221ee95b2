//! Hosting plan model.

use revenue_core::BillingCycle;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hosting plan offered to resellers.
///
/// `plan_type` is a free-form category string (`"shared"`, `"vps"`,
/// `"dedicated"` in practice); see `catalog` for the cycle and discount
/// sets each category carries. `regular_price` is the monthly list price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostingPlan {
    pub plan_id: Uuid,
    pub name: String,
    pub plan_type: String,
    pub regular_price: f64,
    pub setup_fee: f64,
}

/// Promotional discount for one plan and billing cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDiscount {
    pub discount_id: Uuid,
    pub plan_id: Uuid,
    pub billing_cycle: BillingCycle,
    pub discount_pct: f64,
}

/// A plan joined with its discounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanWithDiscounts {
    pub plan: HostingPlan,
    pub discounts: Vec<PlanDiscount>,
}

impl PlanWithDiscounts {
    /// Promotional discount for the given cycle, if one is configured.
    pub fn discount_for(&self, cycle: BillingCycle) -> Option<f64> {
        self.discounts
            .iter()
            .find(|d| d.billing_cycle == cycle)
            .map(|d| d.discount_pct)
    }
}

/// Join plans with their discounts by plan id.
pub fn combine_plan_discounts(
    plans: Vec<HostingPlan>,
    discounts: &[PlanDiscount],
) -> Vec<PlanWithDiscounts> {
    plans
        .into_iter()
        .map(|plan| {
            let discounts = discounts
                .iter()
                .filter(|d| d.plan_id == plan.plan_id)
                .cloned()
                .collect();
            PlanWithDiscounts { plan, discounts }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(name: &str, regular_price: f64) -> HostingPlan {
        HostingPlan {
            plan_id: Uuid::new_v4(),
            name: name.to_string(),
            plan_type: "shared".to_string(),
            regular_price,
            setup_fee: 0.0,
        }
    }

    fn discount(plan_id: Uuid, cycle: BillingCycle, pct: f64) -> PlanDiscount {
        PlanDiscount {
            discount_id: Uuid::new_v4(),
            plan_id,
            billing_cycle: cycle,
            discount_pct: pct,
        }
    }

    #[test]
    fn test_combine_joins_discounts_by_plan_id() {
        let basic = plan("Basic", 9.99);
        let pro = plan("Pro", 19.99);
        let discounts = vec![
            discount(basic.plan_id, BillingCycle::Annual, 75.0),
            discount(basic.plan_id, BillingCycle::Triennial, 85.0),
            discount(pro.plan_id, BillingCycle::Annual, 70.0),
        ];

        let joined = combine_plan_discounts(vec![basic, pro], &discounts);

        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].discounts.len(), 2);
        assert_eq!(joined[1].discounts.len(), 1);
    }

    #[test]
    fn test_discount_for_cycle() {
        let basic = plan("Basic", 9.99);
        let discounts = vec![discount(basic.plan_id, BillingCycle::Annual, 75.0)];
        let joined = combine_plan_discounts(vec![basic], &discounts);

        assert_eq!(joined[0].discount_for(BillingCycle::Annual), Some(75.0));
        assert_eq!(joined[0].discount_for(BillingCycle::Monthly), None);
    }

    #[test]
    fn test_plan_without_discounts_joins_empty() {
        let joined = combine_plan_discounts(vec![plan("Basic", 9.99)], &[]);
        assert!(joined[0].discounts.is_empty());
    }
}
