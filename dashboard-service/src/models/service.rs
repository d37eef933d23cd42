//! Add-on service catalog entry.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::ServiceId;

/// A purchasable add-on, priced per `unit` (e.g. "Day", "Creative").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub description: String,
    pub rate: Decimal,
    pub unit: String,
}
