//! Domain models for dashboard-service.

mod client;
mod contract;
mod ids;
mod request;
mod service;
mod user;

pub use client::{
    ClientProfile, ClientRecord, DeliverableChange, DeliverableCounts, DeliverableType, Invoice,
    InvoiceStatus, Kpi, ProjectStatus, SupportTicket, Task, TaskStatus, TaskType, TicketStatus,
};
pub use contract::{Contract, PaymentStatus, RenewalPlan};
pub use ids::{ClientId, RequestId, ServiceId};
pub use request::{items_total, price_items, AddOnRequest, ApprovalStatus, CartItem, SubmitAddOnRequest};
pub use service::Service;
pub use user::{User, UserRole};
