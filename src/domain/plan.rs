use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::domain::{error::StoreError, text::capitalize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlanTier {
    Basic,
    Premium,
    Brutal,
}

impl PlanTier {
    pub fn title(&self) -> String {
        capitalize(&self.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub tier: PlanTier,
    pub price: String,
    pub local_price: String,
}

impl Plan {
    pub fn purchase_heading(&self) -> String {
        format!("Complete Your {} Panel Purchase", self.tier.title())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanBook {
    plans: Vec<Plan>,
}

impl PlanBook {
    pub fn new(plans: Vec<Plan>) -> Self {
        Self { plans }
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    pub fn get(&self, tier: PlanTier) -> Result<&Plan, StoreError> {
        self.plans
            .iter()
            .find(|plan| plan.tier == tier)
            .ok_or_else(|| StoreError::UnknownPlan(tier.to_string()))
    }
}

/// A place buyers can send money to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentChannel {
    pub name: String,
    pub account_label: String,
    pub account_id: String,
    pub holder: String,
}

pub const AFTER_PAYMENT_STEPS: [&str; 3] = [
    "Payment screenshot",
    "Payment method & ID",
    "Your Discord or YouTube name",
];
