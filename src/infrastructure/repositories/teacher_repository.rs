//! SeaORM implementation of TeacherRepository

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use super::map_unique_violation;
use crate::domain::{DomainError, NewTeacher, Person, PersonLookup, Role, Teacher, TeacherRepository};
use crate::models::teacher::{self, Entity as TeacherEntity};
use crate::models::user::{self, Entity as UserEntity};

/// SeaORM-based implementation of TeacherRepository
pub struct SeaOrmTeacherRepository {
    db: DatabaseConnection,
}

impl SeaOrmTeacherRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_teacher(row: teacher::Model, user: user::Model) -> Teacher {
    Teacher {
        id: user.id,
        name: user.name,
        email: user.email,
        department: row.department,
    }
}

#[async_trait]
impl PersonLookup for SeaOrmTeacherRepository {
    async fn find_person(&self, id: i32) -> Result<Option<Person>, DomainError> {
        Ok(TeacherRepository::find_by_id(self, id)
            .await?
            .map(Person::Teacher))
    }
}

#[async_trait]
impl TeacherRepository for SeaOrmTeacherRepository {
    async fn find_all(&self) -> Result<Vec<Teacher>, DomainError> {
        let rows = TeacherEntity::find()
            .find_also_related(UserEntity)
            .order_by_asc(teacher::Column::UserId)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(row, user)| user.map(|u| to_teacher(row, u)))
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Teacher>, DomainError> {
        let row = TeacherEntity::find_by_id(id)
            .find_also_related(UserEntity)
            .one(&self.db)
            .await?;

        Ok(row.and_then(|(row, user)| user.map(|u| to_teacher(row, u))))
    }

    async fn create(&self, teacher: NewTeacher) -> Result<Teacher, DomainError> {
        let txn = self.db.begin().await?;

        let user_row = user::ActiveModel {
            name: Set(teacher.name.clone()),
            email: Set(teacher.email.as_str().to_owned()),
            role: Set(Role::Teacher.as_str().to_owned()),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };
        let user_id = UserEntity::insert(user_row)
            .exec(&txn)
            .await
            .map_err(|e| map_unique_violation(e, "Email already registered"))?
            .last_insert_id;

        let teacher_row = teacher::ActiveModel {
            user_id: Set(user_id),
            department: Set(teacher.department.clone()),
        };
        TeacherEntity::insert(teacher_row)
            .exec_without_returning(&txn)
            .await?;

        txn.commit().await?;

        Ok(Teacher {
            id: user_id,
            name: teacher.name,
            email: teacher.email.as_str().to_owned(),
            department: teacher.department,
        })
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;

        let removed = TeacherEntity::delete_by_id(id).exec(&txn).await?;
        if removed.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        UserEntity::delete_many()
            .filter(user::Column::Id.eq(id))
            .filter(user::Column::Role.eq(Role::Teacher.as_str()))
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(())
    }
}
