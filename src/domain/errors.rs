//! Domain error types
//!
//! Business-level failures. `DomainError` also wraps store failures, so it
//! converts from SeaORM's `DbErr`.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Resource not found
    NotFound,
    /// Validation error with message
    Validation(String),
    /// A loan status string outside active/returned/overdue
    UnknownLoanStatus(String),
    /// Database/persistence error
    Database(String),
    /// Generic internal error
    Internal(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound => write!(f, "Resource not found"),
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::UnknownLoanStatus(status) => {
                write!(f, "Unknown loan status: '{}'", status)
            }
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}

/// Failures of the checkout/check-in lifecycle.
///
/// The book-state variants are hard failures that must reach the caller.
/// An unknown borrower is not represented here: checkout reports it as
/// `Ok(false)`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoanError {
    BookNotFound,
    /// Checkout of a book that is still out on loan
    BookNotReturned,
    /// Check-in of a book that is not out on loan
    BookUnavailable,
    LoanNotFound,
    Store(DomainError),
}

impl fmt::Display for LoanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoanError::BookNotFound => write!(f, "Book not found"),
            LoanError::BookNotReturned => write!(f, "Book has not yet returned"),
            LoanError::BookUnavailable => write!(f, "Book is currently unavailable"),
            LoanError::LoanNotFound => write!(f, "Loan not found"),
            LoanError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for LoanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoanError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DomainError> for LoanError {
    fn from(e: DomainError) -> Self {
        LoanError::Store(e)
    }
}
