//! Dashboard Service - client, add-on request and deliverable state for the
//! agency dashboard.

pub mod config;
pub mod models;
pub mod services;
pub mod startup;
