use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Address, AddressPatch};

#[async_trait]
pub trait AddressesRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Address>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Address>, DomainError>;

    async fn create(&self, address: Address) -> Result<Address, DomainError>;

    async fn update(&self, id: Uuid, patch: AddressPatch) -> Result<Address, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
