//! Read-side views over the dashboard store.

use rust_decimal::Decimal;
use serde::Serialize;
use service_core::error::AppError;

use crate::models::{
    AddOnRequest, ApprovalStatus, ClientId, ClientRecord, DeliverableType, RenewalPlan,
    RequestId, Service, ServiceId, Task, TaskStatus, UserRole,
};
use crate::services::directory::Session;
use crate::services::store::DashboardStore;

/// Completed count against quota for one deliverable type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeliverableProgress {
    pub deliverable: DeliverableType,
    pub completed: u32,
    pub quota: u32,
}

/// Tasks sharing a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskGroup<'a> {
    pub status: TaskStatus,
    pub tasks: Vec<&'a Task>,
}

/// A client record together with its request history.
#[derive(Debug, Clone, Serialize)]
pub struct ClientView<'a> {
    #[serde(flatten)]
    pub record: &'a ClientRecord,
    pub add_on_requests: Vec<&'a AddOnRequest>,
}

/// Whole-store view handed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct StoreSnapshot<'a> {
    pub clients: Vec<ClientView<'a>>,
    pub requests: Vec<&'a AddOnRequest>,
    pub services: &'a [Service],
    pub renewal_plans: &'a [RenewalPlan],
}

impl DashboardStore {
    /// All clients, in seed order.
    pub fn clients(&self) -> impl Iterator<Item = &ClientRecord> {
        self.clients.iter()
    }

    pub fn client(&self, client_id: &ClientId) -> Result<&ClientRecord, AppError> {
        self.clients
            .get(client_id)
            .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Client '{}' not found", client_id)))
    }

    /// All requests, oldest first.
    pub fn requests(&self) -> impl Iterator<Item = &AddOnRequest> {
        self.requests.iter()
    }

    pub fn request(&self, request_id: &RequestId) -> Result<&AddOnRequest, AppError> {
        self.requests.get(request_id).ok_or_else(|| {
            AppError::NotFound(anyhow::anyhow!("Request '{}' not found", request_id))
        })
    }

    /// A client's request history, oldest first.
    pub fn client_requests(&self, client_id: &ClientId) -> Result<Vec<&AddOnRequest>, AppError> {
        self.client(client_id)?;
        Ok(self.requests.for_client(client_id).collect())
    }

    /// Requests awaiting a decision, oldest first.
    pub fn pending_requests(&self) -> Vec<&AddOnRequest> {
        self.requests
            .iter()
            .filter(|r| r.status == ApprovalStatus::Pending)
            .collect()
    }

    /// Decided requests, most recent submission first.
    pub fn processed_requests(&self) -> Vec<&AddOnRequest> {
        self.requests
            .iter()
            .rev()
            .filter(|r| r.status.is_terminal())
            .collect()
    }

    /// Sum of the client's approved request totals.
    pub fn approved_charges(&self, client_id: &ClientId) -> Result<Decimal, AppError> {
        Ok(self
            .client_requests(client_id)?
            .into_iter()
            .filter(|r| r.status == ApprovalStatus::Approved)
            .map(|r| r.total_amount)
            .sum())
    }

    /// Tasks grouped as In Progress, Pending, Completed; empty groups omitted.
    pub fn tasks_by_status(&self, client_id: &ClientId) -> Result<Vec<TaskGroup<'_>>, AppError> {
        let client = self.client(client_id)?;
        Ok(TaskStatus::DISPLAY_ORDER
            .iter()
            .map(|&status| TaskGroup {
                status,
                tasks: client.tasks.iter().filter(|t| t.status == status).collect(),
            })
            .filter(|group| !group.tasks.is_empty())
            .collect())
    }

    pub fn deliverable_progress(
        &self,
        client_id: &ClientId,
    ) -> Result<Vec<DeliverableProgress>, AppError> {
        let client = self.client(client_id)?;
        Ok(DeliverableType::ALL
            .iter()
            .map(|&deliverable| DeliverableProgress {
                deliverable,
                completed: client.deliverables_completed.get(deliverable),
                quota: client.contract.monthly_deliverables.get(deliverable),
            })
            .collect())
    }

    /// Add-on services offered to clients.
    pub fn catalog(&self) -> &[Service] {
        &self.services
    }

    pub fn service(&self, service_id: &ServiceId) -> Result<&Service, AppError> {
        self.services
            .iter()
            .find(|s| &s.id == service_id)
            .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Service '{}' not found", service_id)))
    }

    pub fn renewal_plans(&self) -> &[RenewalPlan] {
        &self.renewal_plans
    }

    /// The record a signed-in client may view.
    pub fn client_for_session(&self, session: &Session) -> Result<&ClientRecord, AppError> {
        if session.role() != UserRole::Client {
            return Err(AppError::InvalidRequest(anyhow::anyhow!(
                "Only client sessions are bound to a client record"
            )));
        }
        let client_id = session.client_id().ok_or_else(|| {
            AppError::NotFound(anyhow::anyhow!(
                "Client data not found for user '{}'",
                session.user().id
            ))
        })?;
        self.client(client_id).map_err(|_| {
            AppError::NotFound(anyhow::anyhow!(
                "Client data not found for user '{}'",
                session.user().id
            ))
        })
    }

    pub fn snapshot(&self) -> StoreSnapshot<'_> {
        StoreSnapshot {
            clients: self
                .clients
                .iter()
                .map(|record| ClientView {
                    record,
                    add_on_requests: self.requests.for_client(&record.id).collect(),
                })
                .collect(),
            requests: self.requests.iter().collect(),
            services: &self.services,
            renewal_plans: &self.renewal_plans,
        }
    }
}
