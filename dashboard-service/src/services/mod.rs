//! Services module for dashboard-service.

pub mod cart;
pub mod directory;
pub mod metrics;
pub mod queries;
pub mod seed;
pub mod store;
pub mod transitions;

pub use cart::Cart;
pub use directory::{Session, UserDirectory};
pub use metrics::{
    get_metrics, init_metrics, record_add_on_charge, record_add_on_request,
    record_deliverable_adjustment, record_error, record_request_decision,
};
pub use queries::{ClientView, DeliverableProgress, StoreSnapshot, TaskGroup};
pub use seed::Seed;
pub use store::{ClientStore, DashboardStore, RequestStore};
