//! Services Layer
//!
//! This module contains pure business logic extracted from HTTP handlers.

pub mod loan_service;
pub mod user_service;

// Re-export for convenience
pub use loan_service::LoanApplication;
pub use user_service::UserLookup;
