//! In-memory stores for dashboard-service.
//!
//! `DashboardStore` is the single owner of all dashboard state. Add-on requests
//! are held exactly once, in submission order, with a per-client index; the
//! "client history" and the "global approvals list" are two views over the
//! same records and cannot diverge.

use std::collections::HashMap;

use crate::models::{AddOnRequest, ClientId, ClientRecord, RenewalPlan, RequestId, Service};
use service_core::error::AppError;

/// Client records keyed by id, iterated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ClientStore {
    records: Vec<ClientRecord>,
    index: HashMap<ClientId, usize>,
}

impl ClientStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a client. Counters above their quota are refused.
    pub fn insert(&mut self, record: ClientRecord) -> Result<(), AppError> {
        if self.index.contains_key(&record.id) {
            return Err(AppError::InvalidRequest(anyhow::anyhow!(
                "Client '{}' already exists",
                record.id
            )));
        }

        let quota = &record.contract.monthly_deliverables;
        for deliverable in crate::models::DeliverableType::ALL {
            let completed = record.deliverables_completed.get(deliverable);
            if completed > quota.get(deliverable) {
                return Err(AppError::InvalidRequest(anyhow::anyhow!(
                    "Client '{}' has {} {} completed, above its quota of {}",
                    record.id,
                    completed,
                    deliverable,
                    quota.get(deliverable)
                )));
            }
        }

        self.index.insert(record.id.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    pub fn get(&self, id: &ClientId) -> Option<&ClientRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    pub(crate) fn get_mut(&mut self, id: &ClientId) -> Option<&mut ClientRecord> {
        match self.index.get(id) {
            Some(&i) => self.records.get_mut(i),
            None => None,
        }
    }

    pub fn contains(&self, id: &ClientId) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClientRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Add-on requests in submission order. Append-only; only `status` changes.
#[derive(Debug, Clone, Default)]
pub struct RequestStore {
    requests: Vec<AddOnRequest>,
    index: HashMap<RequestId, usize>,
    by_client: HashMap<ClientId, Vec<usize>>,
}

impl RequestStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, request: AddOnRequest) -> Result<(), AppError> {
        if self.index.contains_key(&request.id) {
            return Err(AppError::InvalidRequest(anyhow::anyhow!(
                "Request '{}' already exists",
                request.id
            )));
        }

        let position = self.requests.len();
        self.index.insert(request.id.clone(), position);
        self.by_client
            .entry(request.client_id.clone())
            .or_default()
            .push(position);
        self.requests.push(request);
        Ok(())
    }

    pub fn get(&self, id: &RequestId) -> Option<&AddOnRequest> {
        self.index.get(id).map(|&i| &self.requests[i])
    }

    pub(crate) fn get_mut(&mut self, id: &RequestId) -> Option<&mut AddOnRequest> {
        match self.index.get(id) {
            Some(&i) => self.requests.get_mut(i),
            None => None,
        }
    }

    /// All requests, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &AddOnRequest> {
        self.requests.iter()
    }

    /// One client's requests, oldest first.
    pub fn for_client<'a>(
        &'a self,
        client_id: &ClientId,
    ) -> impl Iterator<Item = &'a AddOnRequest> + 'a {
        self.by_client
            .get(client_id)
            .into_iter()
            .flatten()
            .map(move |&i| &self.requests[i])
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

/// Aggregate root passed by reference to every transition.
#[derive(Debug, Clone, Default)]
pub struct DashboardStore {
    pub(crate) clients: ClientStore,
    pub(crate) requests: RequestStore,
    pub(crate) services: Vec<Service>,
    pub(crate) renewal_plans: Vec<RenewalPlan>,
}

impl DashboardStore {
    /// Store over a service catalog. Catalog ids must be unique and rates
    /// non-negative.
    pub fn new(services: Vec<Service>, renewal_plans: Vec<RenewalPlan>) -> Result<Self, AppError> {
        for (position, service) in services.iter().enumerate() {
            if service.rate.is_sign_negative() {
                return Err(AppError::InvalidRequest(anyhow::anyhow!(
                    "Service '{}' has negative rate {}",
                    service.id,
                    service.rate
                )));
            }
            if services[..position].iter().any(|s| s.id == service.id) {
                return Err(AppError::InvalidRequest(anyhow::anyhow!(
                    "Service '{}' is listed twice",
                    service.id
                )));
            }
        }

        Ok(Self {
            clients: ClientStore::new(),
            requests: RequestStore::new(),
            services,
            renewal_plans,
        })
    }

    /// Add a seeded client.
    pub fn insert_client(&mut self, record: ClientRecord) -> Result<(), AppError> {
        self.clients.insert(record)
    }

    /// Add a seeded request. Its owner must already exist and its items must
    /// match the catalog and its total; seeded charge totals are not adjusted.
    pub fn insert_request(&mut self, request: AddOnRequest) -> Result<(), AppError> {
        if !self.clients.contains(&request.client_id) {
            return Err(AppError::NotFound(anyhow::anyhow!(
                "Request '{}' references unknown client '{}'",
                request.id,
                request.client_id
            )));
        }

        let expected = crate::models::price_items(&request.requested_items, &self.services)?;
        if expected != request.total_amount {
            return Err(AppError::InvalidRequest(anyhow::anyhow!(
                "Request '{}' total {} does not match item total {}",
                request.id,
                request.total_amount,
                expected
            )));
        }

        self.requests.insert(request)
    }

    pub fn client_store(&self) -> &ClientStore {
        &self.clients
    }

    pub fn request_store(&self) -> &RequestStore {
        &self.requests
    }
}
