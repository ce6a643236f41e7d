//! Loan Service - checkout and check-in rules without HTTP layer
//!
//! A book's `available` flag doubles as the loan lock: checkout requires it
//! set and clears it, check-in requires it cleared and sets it. The flag is
//! read and written in separate store calls, so two checkouts racing on the
//! same book can both succeed.

use chrono::NaiveDateTime;
use std::sync::Arc;

use crate::domain::{
    BookRepository, LoanError, LoanRepository, LoanStatus, NewLoan, PersonLookup,
};

#[derive(Clone)]
pub struct LoanApplication {
    books: Arc<dyn BookRepository>,
    users: Arc<dyn PersonLookup>,
    loans: Arc<dyn LoanRepository>,
}

impl LoanApplication {
    pub fn new(
        books: Arc<dyn BookRepository>,
        users: Arc<dyn PersonLookup>,
        loans: Arc<dyn LoanRepository>,
    ) -> Self {
        Self {
            books,
            users,
            loans,
        }
    }

    /// Lend a book to a student or teacher.
    ///
    /// Returns `Ok(false)` when `user_id` matches nobody; nothing is written
    /// in that case. The book is marked unavailable before the loan is
    /// saved and is not restored if the save fails.
    pub async fn checkout(
        &self,
        book_id: i32,
        user_id: i32,
        loan_date: NaiveDateTime,
        due_date: NaiveDateTime,
    ) -> Result<bool, LoanError> {
        let book = self
            .books
            .find_by_id(book_id)
            .await?
            .ok_or(LoanError::BookNotFound)?;

        if !book.available {
            return Err(LoanError::BookNotReturned);
        }

        let Some(person) = self.users.find_person(user_id).await? else {
            tracing::warn!(book_id, user_id, "Checkout refused: unknown borrower");
            return Ok(false);
        };

        let loan = NewLoan::new(book_id, user_id, loan_date, due_date);

        self.books.update_availability(book_id, false).await?;
        let saved = self.loans.save(loan).await?;

        tracing::info!(
            book_id,
            user_id,
            role = person.role().as_str(),
            saved,
            "Book checked out"
        );

        Ok(saved)
    }

    /// Take a book back and close its loan as returned or overdue.
    ///
    /// The due date comes from the loan identified by `loan_id`. A return on
    /// the due date itself counts as on time.
    pub async fn checkin(
        &self,
        book_id: i32,
        loan_id: i32,
        return_date: NaiveDateTime,
    ) -> Result<bool, LoanError> {
        let book = self
            .books
            .find_by_id(book_id)
            .await?
            .ok_or(LoanError::BookNotFound)?;

        if book.available {
            return Err(LoanError::BookUnavailable);
        }

        self.books.update_availability(book_id, true).await?;
        self.loans.set_return_date(loan_id, return_date).await?;

        let loan = self
            .loans
            .find_by_id(loan_id)
            .await?
            .ok_or(LoanError::LoanNotFound)?;

        let status = LoanStatus::on_return(return_date, loan.due_date);
        let updated = self.loans.update_status(loan_id, status).await?;

        tracing::info!(book_id, loan_id, status = %status, updated, "Book checked in");

        Ok(updated)
    }
}
