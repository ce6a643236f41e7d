//! SeaORM implementation of LoanRepository

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::domain::{DomainError, Loan, LoanRepository, LoanStatus, NewLoan};
use crate::models::book_loan::{self, ActiveModel, Column, Entity as LoanEntity};
use crate::utils::dates::format_datetime;

/// SeaORM-based implementation of LoanRepository
pub struct SeaOrmLoanRepository {
    db: DatabaseConnection,
}

impl SeaOrmLoanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_loans(rows: Vec<book_loan::Model>) -> Result<Vec<Loan>, DomainError> {
    rows.into_iter().map(Loan::try_from).collect()
}

#[async_trait]
impl LoanRepository for SeaOrmLoanRepository {
    async fn save(&self, loan: NewLoan) -> Result<bool, DomainError> {
        let row = ActiveModel {
            book_id: Set(loan.book_id),
            user_id: Set(loan.user_id),
            loan_date: Set(format_datetime(&loan.loan_date)),
            due_date: Set(format_datetime(&loan.due_date)),
            return_date: Set(None),
            status: Set(loan.status.as_str().to_owned()),
            ..Default::default()
        };

        let result = LoanEntity::insert(row).exec(&self.db).await?;
        tracing::debug!("Saved loan {}", result.last_insert_id);
        Ok(true)
    }

    async fn find_all(&self) -> Result<Vec<Loan>, DomainError> {
        let rows = LoanEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;
        to_loans(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Loan>, DomainError> {
        LoanEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Loan::try_from)
            .transpose()
    }

    async fn find_active(&self) -> Result<Vec<Loan>, DomainError> {
        let rows = LoanEntity::find()
            .filter(Column::Status.eq(LoanStatus::Active.as_str()))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;
        to_loans(rows)
    }

    async fn set_return_date(&self, id: i32, date: NaiveDateTime) -> Result<bool, DomainError> {
        let result = LoanEntity::update_many()
            .col_expr(Column::ReturnDate, Expr::value(format_datetime(&date)))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn update_status(&self, id: i32, status: LoanStatus) -> Result<bool, DomainError> {
        let result = LoanEntity::update_many()
            .col_expr(Column::Status, Expr::value(status.as_str()))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = LoanEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }
}
