//! Domain entities: books, people and loans

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::DomainError;
use super::value_objects::{Email, Isbn};
use crate::utils::dates;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub isbn: String,
    /// False while the book is out on loan
    pub available: bool,
}

/// Input for cataloguing a new book. New books are always available.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: Isbn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub grade_level: String,
    pub course: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Teacher {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub department: String,
}

/// A borrower. The role is carried by the variant, so it cannot change
/// after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Person {
    Student(Student),
    Teacher(Teacher),
}

impl Person {
    pub fn id(&self) -> i32 {
        match self {
            Person::Student(s) => s.id,
            Person::Teacher(t) => t.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Person::Student(s) => &s.name,
            Person::Teacher(t) => &t.name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Person::Student(s) => &s.email,
            Person::Teacher(t) => &t.email,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Person::Student(_) => Role::Student,
            Person::Teacher(_) => Role::Teacher,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub email: Email,
    pub grade_level: String,
    pub course: String,
}

#[derive(Debug, Clone)]
pub struct NewTeacher {
    pub name: String,
    pub email: Email,
    pub department: String,
}

/// Loan lifecycle: `Active` moves to `Returned` or `Overdue` on check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Active,
    Returned,
    Overdue,
}

impl LoanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Active => "active",
            LoanStatus::Returned => "returned",
            LoanStatus::Overdue => "overdue",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, LoanStatus::Active)
    }

    /// Status a loan closes with when the book comes back on `returned_at`.
    /// Returning on the due date itself is on time.
    pub fn on_return(returned_at: NaiveDateTime, due: NaiveDateTime) -> Self {
        if returned_at > due {
            LoanStatus::Overdue
        } else {
            LoanStatus::Returned
        }
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoanStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(LoanStatus::Active),
            "returned" => Ok(LoanStatus::Returned),
            "overdue" => Ok(LoanStatus::Overdue),
            other => Err(DomainError::UnknownLoanStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Loan {
    pub id: i32,
    pub book_id: i32,
    pub user_id: i32,
    #[serde(serialize_with = "dates::storage::serialize")]
    pub loan_date: NaiveDateTime,
    #[serde(serialize_with = "dates::storage::serialize")]
    pub due_date: NaiveDateTime,
    #[serde(serialize_with = "dates::storage::serialize_option")]
    pub return_date: Option<NaiveDateTime>,
    pub status: LoanStatus,
}

/// A loan that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLoan {
    pub book_id: i32,
    pub user_id: i32,
    pub loan_date: NaiveDateTime,
    pub due_date: NaiveDateTime,
    pub status: LoanStatus,
}

impl NewLoan {
    /// Every loan starts active and without a return date.
    pub fn new(
        book_id: i32,
        user_id: i32,
        loan_date: NaiveDateTime,
        due_date: NaiveDateTime,
    ) -> Self {
        Self {
            book_id,
            user_id,
            loan_date,
            due_date,
            status: LoanStatus::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::dates::parse_datetime;

    #[test]
    fn test_status_round_trips_through_str() {
        for status in [LoanStatus::Active, LoanStatus::Returned, LoanStatus::Overdue] {
            assert_eq!(status.as_str().parse::<LoanStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status_is_typed_error() {
        assert_eq!(
            "lost".parse::<LoanStatus>(),
            Err(DomainError::UnknownLoanStatus("lost".to_string()))
        );
        assert!("ACTIVE".parse::<LoanStatus>().is_err());
    }

    #[test]
    fn test_on_return_boundary() {
        let due = parse_datetime("2024-01-08").unwrap();
        assert_eq!(LoanStatus::on_return(due, due), LoanStatus::Returned);
        assert_eq!(
            LoanStatus::on_return(parse_datetime("2024-01-07").unwrap(), due),
            LoanStatus::Returned
        );
        assert_eq!(
            LoanStatus::on_return(parse_datetime("2024-01-08 00:00:01").unwrap(), due),
            LoanStatus::Overdue
        );
    }

    #[test]
    fn test_person_serializes_with_role() {
        let person = Person::Teacher(Teacher {
            id: 3,
            name: "Marta".into(),
            email: "marta@school.edu".into(),
            department: "History".into(),
        });
        let value = serde_json::to_value(&person).unwrap();
        assert_eq!(value["role"], "teacher");
        assert_eq!(value["department"], "History");
        assert_eq!(person.role(), Role::Teacher);
    }

    #[test]
    fn test_new_loan_is_active() {
        let loan = NewLoan::new(
            1,
            5,
            parse_datetime("2024-01-01").unwrap(),
            parse_datetime("2024-01-08").unwrap(),
        );
        assert_eq!(loan.status, LoanStatus::Active);
        assert!(!loan.status.is_terminal());
    }
}
