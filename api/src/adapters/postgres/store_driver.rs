//! PostgreSQL driver for stores and their favorite links

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

use crate::adapters::gateway::drivers::StoreDriver;
use crate::entity::prelude::{FavoriteStores, Stores};
use crate::entity::{favorite_stores, stores};

pub struct PostgresStoreDriver {
    db: DatabaseConnection,
}

impl PostgresStoreDriver {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct FavoriteCount {
    store_id: String,
}

#[async_trait]
impl StoreDriver for PostgresStoreDriver {
    async fn find_all_stores(&self) -> Result<Vec<stores::Model>, DbErr> {
        Stores::find()
            .order_by_asc(stores::Column::Name)
            .all(&self.db)
            .await
    }

    async fn find_favorite_stores(&self, user_id: i32) -> Result<Vec<stores::Model>, DbErr> {
        Stores::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                stores::Relation::FavoriteStores.def(),
            )
            .filter(favorite_stores::Column::UserId.eq(user_id))
            .order_by_desc(favorite_stores::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    async fn save_favorite_store(
        &self,
        user_id: i32,
        store: stores::Model,
    ) -> Result<bool, DbErr> {
        let now = Utc::now().fixed_offset();
        let txn = self.db.begin().await?;

        // A known store keeps its first recorded data
        Stores::insert(stores::ActiveModel {
            id: Set(store.id.clone()),
            name: Set(store.name),
            regular_opening_hours: Set(store.regular_opening_hours),
            price_level: Set(store.price_level),
            latitude: Set(store.latitude),
            longitude: Set(store.longitude),
            created_at: Set(Some(now)),
        })
        .on_conflict(OnConflict::column(stores::Column::Id).do_nothing().to_owned())
        .exec_without_returning(&txn)
        .await?;

        let linked = FavoriteStores::insert(favorite_stores::ActiveModel {
            user_id: Set(user_id),
            store_id: Set(store.id),
            created_at: Set(Some(now)),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                favorite_stores::Column::UserId,
                favorite_stores::Column::StoreId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;

        txn.commit().await?;
        Ok(linked == 1)
    }

    async fn find_top_favorite_stores(&self, limit: u64) -> Result<Vec<stores::Model>, DbErr> {
        let ranked = FavoriteStores::find()
            .select_only()
            .column(favorite_stores::Column::StoreId)
            .group_by(favorite_stores::Column::StoreId)
            .order_by_desc(favorite_stores::Column::Id.count())
            .order_by_asc(favorite_stores::Column::StoreId)
            .limit(limit)
            .into_model::<FavoriteCount>()
            .all(&self.db)
            .await?;

        if ranked.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = ranked.into_iter().map(|r| r.store_id).collect();
        let mut by_id: HashMap<String, stores::Model> = Stores::find()
            .filter(stores::Column::Id.is_in(ids.clone()))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|m| (m.id.clone(), m))
            .collect();

        Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
    }
}
