//! Contract model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::client::DeliverableCounts;

/// Payment status of the base contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Unpaid => "unpaid",
        }
    }
}

/// Service contract between the agency and a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub plan_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub services: Vec<String>,
    /// Monthly quota per deliverable type.
    pub monthly_deliverables: DeliverableCounts,
    pub payment_status: PaymentStatus,
    /// Running total of approved add-on requests.
    #[serde(default)]
    pub total_add_on_charges: Decimal,
}

/// Renewal option offered on the payments view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenewalPlan {
    pub name: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saving: Option<String>,
    #[serde(default)]
    pub highlighted: bool,
}
