//! Store port traits

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::entities::{FavoriteOutcome, Store, UserId};
use crate::error::DomainError;

/// Store use cases
#[async_trait]
pub trait StoreInputPort: Send + Sync {
    async fn get_stores(&self) -> Result<(), DomainError>;

    async fn get_near_stores(&self) -> Result<(), DomainError>;

    async fn get_favorite_stores(&self, user_id: UserId) -> Result<(), DomainError>;

    async fn save_favorite_store(&self, store: &Store, user_id: UserId)
        -> Result<(), DomainError>;

    async fn get_top_favorite_stores(&self) -> Result<(), DomainError>;
}

/// Store persistence combined with the maps provider
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Store>, DomainError>;

    async fn get_near_stores(&self) -> Result<Vec<Store>, DomainError>;

    async fn get_favorite_stores(&self, user_id: UserId) -> Result<Vec<Store>, DomainError>;

    async fn save_favorite_store(
        &self,
        store: &Store,
        user_id: UserId,
    ) -> Result<FavoriteOutcome, DomainError>;

    /// Stores ranked by how many users saved them
    async fn get_top_favorite_stores(&self) -> Result<Vec<Store>, DomainError>;
}

/// Result presentation for store use cases
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StoreOutputPort: Send + Sync {
    async fn output_all_stores(&self, stores: Vec<Store>) -> Result<(), DomainError>;

    async fn output_save_favorite_result(&self) -> Result<(), DomainError>;

    async fn output_already_favorited(&self) -> Result<(), DomainError>;
}
