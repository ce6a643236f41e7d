//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{BookRepository, LoanRepository, StudentRepository, TeacherRepository};
use crate::infrastructure::{
    SeaOrmBookRepository, SeaOrmLoanRepository, SeaOrmStudentRepository, SeaOrmTeacherRepository,
};
use crate::services::{LoanApplication, UserLookup};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    /// Book repository
    pub book_repo: Arc<dyn BookRepository>,
    /// Student repository
    pub student_repo: Arc<dyn StudentRepository>,
    /// Teacher repository
    pub teacher_repo: Arc<dyn TeacherRepository>,
    /// Loan repository
    pub loan_repo: Arc<dyn LoanRepository>,
    /// Checkout / check-in rules over the repositories above
    pub loans: LoanApplication,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let book_repo = Arc::new(SeaOrmBookRepository::new(db.clone()));
        let student_repo = Arc::new(SeaOrmStudentRepository::new(db.clone()));
        let teacher_repo = Arc::new(SeaOrmTeacherRepository::new(db.clone()));
        let loan_repo = Arc::new(SeaOrmLoanRepository::new(db.clone()));

        let users = UserLookup::new(student_repo.clone(), teacher_repo.clone());
        let loans = LoanApplication::new(book_repo.clone(), Arc::new(users), loan_repo.clone());

        Self {
            db,
            book_repo,
            student_repo,
            teacher_repo,
            loan_repo,
            loans,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
