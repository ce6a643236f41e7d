//! SeaORM implementation of StudentRepository
//!
//! A student is a `users` row with role `student` plus a `students` row
//! sharing its id.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use super::map_unique_violation;
use crate::domain::{DomainError, NewStudent, Person, PersonLookup, Role, Student, StudentRepository};
use crate::models::student::{self, Entity as StudentEntity};
use crate::models::user::{self, Entity as UserEntity};

/// SeaORM-based implementation of StudentRepository
pub struct SeaOrmStudentRepository {
    db: DatabaseConnection,
}

impl SeaOrmStudentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_student(row: student::Model, user: user::Model) -> Student {
    Student {
        id: user.id,
        name: user.name,
        email: user.email,
        grade_level: row.grade_level,
        course: row.course,
    }
}

#[async_trait]
impl PersonLookup for SeaOrmStudentRepository {
    async fn find_person(&self, id: i32) -> Result<Option<Person>, DomainError> {
        Ok(StudentRepository::find_by_id(self, id)
            .await?
            .map(Person::Student))
    }
}

#[async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>, DomainError> {
        let rows = StudentEntity::find()
            .find_also_related(UserEntity)
            .order_by_asc(student::Column::UserId)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(row, user)| user.map(|u| to_student(row, u)))
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DomainError> {
        let row = StudentEntity::find_by_id(id)
            .find_also_related(UserEntity)
            .one(&self.db)
            .await?;

        Ok(row.and_then(|(row, user)| user.map(|u| to_student(row, u))))
    }

    async fn create(&self, student: NewStudent) -> Result<Student, DomainError> {
        let txn = self.db.begin().await?;

        let user_row = user::ActiveModel {
            name: Set(student.name.clone()),
            email: Set(student.email.as_str().to_owned()),
            role: Set(Role::Student.as_str().to_owned()),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };
        let user_id = UserEntity::insert(user_row)
            .exec(&txn)
            .await
            .map_err(|e| map_unique_violation(e, "Email already registered"))?
            .last_insert_id;

        let student_row = student::ActiveModel {
            user_id: Set(user_id),
            grade_level: Set(student.grade_level.clone()),
            course: Set(student.course.clone()),
        };
        StudentEntity::insert(student_row)
            .exec_without_returning(&txn)
            .await?;

        txn.commit().await?;

        Ok(Student {
            id: user_id,
            name: student.name,
            email: student.email.as_str().to_owned(),
            grade_level: student.grade_level,
            course: student.course,
        })
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;

        let removed = StudentEntity::delete_by_id(id).exec(&txn).await?;
        if removed.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        UserEntity::delete_many()
            .filter(user::Column::Id.eq(id))
            .filter(user::Column::Role.eq(Role::Student.as_str()))
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(())
    }
}
