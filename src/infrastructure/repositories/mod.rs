//! Repository implementations using SeaORM

pub mod book_repository;
pub mod loan_repository;
pub mod student_repository;
pub mod teacher_repository;

pub use book_repository::SeaOrmBookRepository;
pub use loan_repository::SeaOrmLoanRepository;
pub use student_repository::SeaOrmStudentRepository;
pub use teacher_repository::SeaOrmTeacherRepository;

use sea_orm::{DbErr, SqlErr};

use crate::domain::DomainError;

/// Unique-constraint hits are caller mistakes (duplicate ISBN, email);
/// everything else stays a database error.
fn map_unique_violation(e: DbErr, message: &str) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::Validation(message.to_string()),
        _ => DomainError::from(e),
    }
}
