//! State transitions over the dashboard store.
//!
//! Every transition validates completely before its first write, so a failed
//! call leaves the store exactly as it was.

use chrono::Utc;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use service_core::error::AppError;
use tracing::{info, instrument, warn};

use crate::models::{
    AddOnRequest, ApprovalStatus, CartItem, ClientId, DeliverableChange, DeliverableType,
    RequestId, SubmitAddOnRequest,
};
use crate::services::metrics::{
    record_add_on_charge, record_add_on_request, record_deliverable_adjustment, record_error,
    record_request_decision, TRANSITION_DURATION,
};
use crate::services::store::DashboardStore;

fn client_not_found(client_id: &ClientId) -> AppError {
    AppError::NotFound(anyhow::anyhow!("Client '{}' not found", client_id))
}

fn reject(operation: &'static str, err: AppError) -> AppError {
    record_error(err.kind(), operation);
    warn!(operation, error = %err, "Transition rejected");
    err
}

impl DashboardStore {
    /// Record a new Pending add-on request for `client_id`.
    ///
    /// Every item must carry an unchanged catalog service, and `total_amount`
    /// must equal the sum of catalog `rate * quantity` over `items`.
    #[instrument(skip(self, items), fields(client_id = %client_id, items = items.len(), total = %total_amount))]
    pub fn submit_add_on_request(
        &mut self,
        client_id: &ClientId,
        items: Vec<CartItem>,
        total_amount: Decimal,
    ) -> Result<AddOnRequest, AppError> {
        const OPERATION: &str = "submit_add_on_request";
        let timer = TRANSITION_DURATION
            .with_label_values(&[OPERATION])
            .start_timer();

        let input = SubmitAddOnRequest {
            items,
            total_amount,
        };
        input
            .check(&self.services)
            .map_err(|e| {
                record_add_on_request("rejected");
                reject(OPERATION, e)
            })?;

        let client = self
            .clients
            .get(client_id)
            .ok_or_else(|| {
                record_add_on_request("rejected");
                reject(OPERATION, client_not_found(client_id))
            })?;

        let request = AddOnRequest {
            id: RequestId::generate(),
            client_id: client.id.clone(),
            client_name: client.profile.name.clone(),
            client_company: client.profile.company.clone(),
            requested_items: input.items,
            total_amount: input.total_amount,
            status: ApprovalStatus::Pending,
            request_date: Utc::now(),
        };

        self.requests
            .insert(request.clone())
            .map_err(|e| reject(OPERATION, e))?;

        timer.observe_duration();
        record_add_on_request("submitted");
        info!(request_id = %request.id, "Add-on request submitted");

        Ok(request)
    }

    /// Approve or reject a Pending request. Approval adds the request total to
    /// the owning client's add-on charges.
    #[instrument(skip(self), fields(request_id = %request_id, status = %status))]
    pub fn update_request_status(
        &mut self,
        request_id: &RequestId,
        status: ApprovalStatus,
    ) -> Result<AddOnRequest, AppError> {
        const OPERATION: &str = "update_request_status";
        let timer = TRANSITION_DURATION
            .with_label_values(&[OPERATION])
            .start_timer();

        if status == ApprovalStatus::Pending {
            return Err(reject(
                OPERATION,
                AppError::InvalidRequest(anyhow::anyhow!(
                    "Requests can only be moved to approved or rejected"
                )),
            ));
        }

        let request = self.requests.get_mut(request_id).ok_or_else(|| {
            reject(
                OPERATION,
                AppError::NotFound(anyhow::anyhow!("Request '{}' not found", request_id)),
            )
        })?;

        if request.status.is_terminal() {
            return Err(reject(
                OPERATION,
                AppError::InvalidRequest(anyhow::anyhow!(
                    "Request '{}' is already {}; only pending requests can be decided",
                    request_id,
                    request.status
                )),
            ));
        }

        let client = self.clients.get_mut(&request.client_id).ok_or_else(|| {
            reject(
                OPERATION,
                AppError::InternalError(anyhow::anyhow!(
                    "Request '{}' belongs to missing client '{}'",
                    request_id,
                    request.client_id
                )),
            )
        })?;

        let amount = request.total_amount;
        let total_charges = match status {
            ApprovalStatus::Approved => client
                .contract
                .total_add_on_charges
                .checked_add(amount)
                .ok_or_else(|| {
                    reject(
                        OPERATION,
                        AppError::InvalidRequest(anyhow::anyhow!(
                            "Approving request '{}' would overflow the add-on charges of client '{}'",
                            request_id,
                            client.id
                        )),
                    )
                })?,
            _ => client.contract.total_add_on_charges,
        };

        request.status = status;
        client.contract.total_add_on_charges = total_charges;
        let client_id = client.id.clone();
        let updated = request.clone();

        timer.observe_duration();
        record_request_decision(status.as_str());
        if status == ApprovalStatus::Approved {
            record_add_on_charge(amount.to_f64().unwrap_or_default());
        }
        info!(
            client_id = %client_id,
            total_add_on_charges = %total_charges,
            "Add-on request decided"
        );

        Ok(updated)
    }

    /// Move a completed-deliverable counter one step, clamped to
    /// `[0, monthly quota]`. Returns the new count.
    #[instrument(skip(self), fields(client_id = %client_id, deliverable = %deliverable))]
    pub fn adjust_deliverable_count(
        &mut self,
        client_id: &ClientId,
        deliverable: DeliverableType,
        change: DeliverableChange,
    ) -> Result<u32, AppError> {
        const OPERATION: &str = "adjust_deliverable_count";
        let timer = TRANSITION_DURATION
            .with_label_values(&[OPERATION])
            .start_timer();

        let client = match self.clients.get_mut(client_id) {
            Some(client) => client,
            None => return Err(reject(OPERATION, client_not_found(client_id))),
        };

        let current = client.deliverables_completed.get(deliverable);
        let quota = client.contract.monthly_deliverables.get(deliverable);
        let next = change.apply(current, quota);
        client.deliverables_completed.set(deliverable, next);

        timer.observe_duration();
        record_deliverable_adjustment(deliverable.as_str(), change.as_str(), next == current);
        info!(from = current, to = next, quota, "Deliverable count adjusted");

        Ok(next)
    }
}
