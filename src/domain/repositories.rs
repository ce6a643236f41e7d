//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use chrono::NaiveDateTime;

use super::DomainError;
use super::entities::{
    Book, Loan, LoanStatus, NewBook, NewLoan, NewStudent, NewTeacher, Person, Student, Teacher,
};

/// Repository trait for Book entity
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find all books
    async fn find_all(&self) -> Result<Vec<Book>, DomainError>;

    /// Find a single book by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DomainError>;

    /// Create a new, available book
    async fn create(&self, book: NewBook) -> Result<Book, DomainError>;

    /// Set the availability flag; returns whether a row was updated
    async fn update_availability(&self, id: i32, available: bool) -> Result<bool, DomainError>;

    /// Delete a book by ID
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Resolves an id to a borrower.
#[async_trait]
pub trait PersonLookup: Send + Sync {
    async fn find_person(&self, id: i32) -> Result<Option<Person>, DomainError>;
}

/// Repository trait for Student entity
#[async_trait]
pub trait StudentRepository: PersonLookup {
    async fn find_all(&self) -> Result<Vec<Student>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DomainError>;

    async fn create(&self, student: NewStudent) -> Result<Student, DomainError>;

    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Repository trait for Teacher entity
#[async_trait]
pub trait TeacherRepository: PersonLookup {
    async fn find_all(&self) -> Result<Vec<Teacher>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Teacher>, DomainError>;

    async fn create(&self, teacher: NewTeacher) -> Result<Teacher, DomainError>;

    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Repository trait for Loan entity
#[async_trait]
pub trait LoanRepository: Send + Sync {
    /// Persist a new loan; returns whether the insert succeeded
    async fn save(&self, loan: NewLoan) -> Result<bool, DomainError>;

    /// Find all loans, oldest first
    async fn find_all(&self) -> Result<Vec<Loan>, DomainError>;

    /// Find a loan by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Loan>, DomainError>;

    /// Find loans still in the active state
    async fn find_active(&self) -> Result<Vec<Loan>, DomainError>;

    async fn set_return_date(&self, id: i32, date: NaiveDateTime) -> Result<bool, DomainError>;

    async fn update_status(&self, id: i32, status: LoanStatus) -> Result<bool, DomainError>;

    /// Delete a loan by ID
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}
