pub mod error;
pub mod fixture;
pub mod memory;

use async_trait::async_trait;

use crate::model::Comic;

pub use memory::InMemoryCatalog;

/// Ordered store of comics backing every view.
///
/// Operations are total: missing ids degrade to a no-op or `None`, never an
/// error. Implementations must keep the sequence order stable across updates.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list(&self) -> Vec<Comic>;

    /// Prepends the comic. Ids are not checked for duplicates.
    async fn create(&self, comic: Comic);

    /// Replaces the first comic sharing the id, in place. Returns `false` when
    /// nothing matched.
    async fn update(&self, comic: Comic) -> bool;

    /// Removes every comic with the id and returns how many were removed.
    async fn delete(&self, id: &str) -> usize;

    async fn find(&self, id: &str) -> Option<Comic>;
}
