//! Add-on request model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use validator::Validate;

use super::ids::{ClientId, RequestId};
use super::service::Service;

/// Approval status of an add-on request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }

    /// Approved and Rejected are never left once entered.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ApprovalStatus::Pending)
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A service and how many units of it are requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CartItem {
    pub service: Service,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,
}

impl CartItem {
    pub fn new(service: Service, quantity: u32) -> Self {
        Self { service, quantity }
    }

    pub fn line_total(&self) -> Result<Decimal, AppError> {
        self.service
            .rate
            .checked_mul(Decimal::from(self.quantity))
            .ok_or_else(|| {
                AppError::InvalidRequest(anyhow::anyhow!(
                    "Line total for service '{}' is out of range",
                    self.service.id
                ))
            })
    }
}

/// Sum of `rate * quantity` over all items.
pub fn items_total(items: &[CartItem]) -> Result<Decimal, AppError> {
    items.iter().try_fold(Decimal::ZERO, |total, item| {
        total.checked_add(item.line_total()?).ok_or_else(|| {
            AppError::InvalidRequest(anyhow::anyhow!("Items total is out of range"))
        })
    })
}

/// Confirm every item against `catalog` and return the catalog-priced total.
///
/// Items must name a catalog service and carry that entry unchanged.
pub fn price_items(items: &[CartItem], catalog: &[Service]) -> Result<Decimal, AppError> {
    for item in items {
        let listed = catalog
            .iter()
            .find(|s| s.id == item.service.id)
            .ok_or_else(|| {
                AppError::NotFound(anyhow::anyhow!("Service '{}' not found", item.service.id))
            })?;
        if listed != &item.service {
            return Err(AppError::InvalidRequest(anyhow::anyhow!(
                "Service '{}' does not match the catalog entry",
                item.service.id
            )));
        }
    }
    items_total(items)
}

/// A client's request to buy services beyond the base contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnRequest {
    pub id: RequestId,
    pub client_id: ClientId,
    pub client_name: String,
    pub client_company: String,
    pub requested_items: Vec<CartItem>,
    pub total_amount: Decimal,
    pub status: ApprovalStatus,
    pub request_date: DateTime<Utc>,
}

/// Input for submitting an add-on request.
#[derive(Debug, Clone, Validate)]
pub struct SubmitAddOnRequest {
    #[validate(length(min = 1, message = "At least one item is required"), nested)]
    pub items: Vec<CartItem>,
    pub total_amount: Decimal,
}

impl SubmitAddOnRequest {
    /// Validate the items against `catalog` and confirm the caller's total.
    pub fn check(&self, catalog: &[Service]) -> Result<(), AppError> {
        self.validate()?;

        let expected = price_items(&self.items, catalog)?;
        if expected != self.total_amount {
            return Err(AppError::InvalidRequest(anyhow::anyhow!(
                "Total amount {} does not match item total {}",
                self.total_amount,
                expected
            )));
        }

        Ok(())
    }
}
