//! Store interactor

use async_trait::async_trait;

use crate::domain::entities::{FavoriteOutcome, Store, UserId};
use crate::domain::ports::{StoreInputPort, StoreOutputPort, StoreRepository};
use crate::error::DomainError;

pub struct StoreInteractor {
    repository: Box<dyn StoreRepository>,
    output: Box<dyn StoreOutputPort>,
}

impl StoreInteractor {
    pub fn new(repository: Box<dyn StoreRepository>, output: Box<dyn StoreOutputPort>) -> Self {
        Self { repository, output }
    }
}

pub fn new_store_input_port(
    repository: Box<dyn StoreRepository>,
    output: Box<dyn StoreOutputPort>,
) -> Box<dyn StoreInputPort> {
    Box::new(StoreInteractor::new(repository, output))
}

#[async_trait]
impl StoreInputPort for StoreInteractor {
    async fn get_stores(&self) -> Result<(), DomainError> {
        let stores = self.repository.get_all().await?;
        self.output.output_all_stores(stores).await
    }

    async fn get_near_stores(&self) -> Result<(), DomainError> {
        let stores = self.repository.get_near_stores().await?;
        self.output.output_all_stores(stores).await
    }

    async fn get_favorite_stores(&self, user_id: UserId) -> Result<(), DomainError> {
        let stores = self.repository.get_favorite_stores(user_id).await?;
        self.output.output_all_stores(stores).await
    }

    async fn save_favorite_store(&self, store: &Store, user_id: UserId) -> Result<(), DomainError> {
        match self.repository.save_favorite_store(store, user_id).await? {
            FavoriteOutcome::Saved => self.output.output_save_favorite_result().await,
            FavoriteOutcome::AlreadyFavorited => self.output.output_already_favorited().await,
        }
    }

    async fn get_top_favorite_stores(&self) -> Result<(), DomainError> {
        let stores = self.repository.get_top_favorite_stores().await?;
        self.output.output_all_stores(stores).await
    }
}
