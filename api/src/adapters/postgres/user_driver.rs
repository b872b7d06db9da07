//! PostgreSQL driver for the users table

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};

use crate::adapters::gateway::drivers::{UserDriver, UserRecord};
use crate::entity::prelude::Users;
use crate::entity::users;

pub struct PostgresUserDriver {
    db: DatabaseConnection,
}

impl PostgresUserDriver {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserDriver for PostgresUserDriver {
    async fn create_user(&self, record: UserRecord) -> Result<users::Model, DbErr> {
        let now = Utc::now().fixed_offset();

        users::ActiveModel {
            name: Set(record.name),
            email: Set(record.email),
            age: Set(record.age),
            sex: Set(record.sex),
            gender: Set(record.gender),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&self.db)
        .await
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<users::Model>, DbErr> {
        Users::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
    }

    async fn update_user(&self, id: i32, record: UserRecord) -> Result<users::Model, DbErr> {
        users::ActiveModel {
            id: Set(id),
            name: Set(record.name),
            email: Set(record.email),
            age: Set(record.age),
            sex: Set(record.sex),
            gender: Set(record.gender),
            updated_at: Set(Some(Utc::now().fixed_offset())),
            ..Default::default()
        }
        .update(&self.db)
        .await
    }
}
