//! Schema bootstrap
//!
//! Creates the tables described by the SeaORM entities when they are
//! missing, plus the unique index that makes a favorite link idempotent.

use sea_orm::sea_query::{Index, IndexCreateStatement, TableCreateStatement};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, DbErr, Schema};

use crate::entity::favorite_stores;
use crate::entity::prelude::{FavoriteStores, Stores, Users};

/// One favorite per (user, store)
const FAVORITE_LINK_INDEX: &str = "favorite_stores_user_id_store_id_key";

/// Parents first so foreign keys resolve
fn tables(backend: DbBackend) -> Vec<TableCreateStatement> {
    let schema = Schema::new(backend);
    vec![
        schema.create_table_from_entity(Users).if_not_exists().to_owned(),
        schema.create_table_from_entity(Stores).if_not_exists().to_owned(),
        schema
            .create_table_from_entity(FavoriteStores)
            .if_not_exists()
            .to_owned(),
    ]
}

fn favorite_link_index() -> IndexCreateStatement {
    Index::create()
        .name(FAVORITE_LINK_INDEX)
        .table(FavoriteStores)
        .col(favorite_stores::Column::UserId)
        .col(favorite_stores::Column::StoreId)
        .unique()
        .if_not_exists()
        .to_owned()
}

pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    for table in tables(backend) {
        db.execute(backend.build(&table)).await?;
    }
    db.execute(backend.build(&favorite_link_index())).await?;
    tracing::debug!("Database schema ensured");
    Ok(())
}
