//! Billing cycle model.

use serde::{Deserialize, Serialize};

/// Billing cycle for a hosting plan sale.
///
/// The surrounding system feeds cycles as loosely-typed strings with two
/// vocabularies (entry-form short codes and full names). `from_string` is
/// the single normalization boundary; everything past it dispatches on the
/// closed enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BillingCycle {
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
    Biennial,
    Triennial,
}

impl BillingCycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Quarterly => "quarterly",
            BillingCycle::SemiAnnual => "semi-annual",
            BillingCycle::Annual => "annual",
            BillingCycle::Biennial => "biennial",
            BillingCycle::Triennial => "triennial",
        }
    }

    /// Short code used by the sales entry form. The two multi-year cycles
    /// never had short codes and keep their full names.
    pub fn code(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "M",
            BillingCycle::Quarterly => "Q",
            BillingCycle::SemiAnnual => "S-A",
            BillingCycle::Annual => "A",
            BillingCycle::Biennial => "biennial",
            BillingCycle::Triennial => "triennial",
        }
    }

    /// Case-insensitive; accepts both short codes and full names.
    /// Unrecognized input falls back to annual so the calculator stays
    /// total over arbitrary form input.
    pub fn from_string(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "m" | "monthly" => BillingCycle::Monthly,
            "q" | "quarterly" => BillingCycle::Quarterly,
            "s-a" | "semi-annual" => BillingCycle::SemiAnnual,
            "biennial" => BillingCycle::Biennial,
            "triennial" => BillingCycle::Triennial,
            _ => BillingCycle::Annual,
        }
    }

    /// Contract length in months.
    pub fn months(&self) -> u32 {
        match self {
            BillingCycle::Monthly => 1,
            BillingCycle::Quarterly => 3,
            BillingCycle::SemiAnnual => 6,
            BillingCycle::Annual => 12,
            BillingCycle::Biennial => 24,
            BillingCycle::Triennial => 36,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Quarterly => "Quarterly",
            BillingCycle::SemiAnnual => "Semi-Annual",
            BillingCycle::Annual => "Annual",
            BillingCycle::Biennial => "Biennial",
            BillingCycle::Triennial => "Triennial",
        }
    }
}
