use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::model::Comic;

use super::CatalogRepository;

pub struct InMemoryCatalog {
    comics: RwLock<Vec<Comic>>,
}

impl InMemoryCatalog {
    pub fn new(seed: Vec<Comic>) -> Self {
        Self {
            comics: RwLock::new(seed),
        }
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn list(&self) -> Vec<Comic> {
        self.comics.read().await.clone()
    }

    #[tracing::instrument(name = "create comic", skip_all, fields(comic_id = %comic.id))]
    async fn create(&self, comic: Comic) {
        self.comics.write().await.insert(0, comic);
    }

    #[tracing::instrument(name = "update comic", skip_all, fields(comic_id = %comic.id))]
    async fn update(&self, comic: Comic) -> bool {
        let mut comics = self.comics.write().await;

        match comics.iter_mut().find(|c| c.id == comic.id) {
            Some(slot) => {
                *slot = comic;
                true
            }
            None => {
                tracing::debug!("No comic to update");
                false
            }
        }
    }

    #[tracing::instrument(name = "delete comic", skip(self))]
    async fn delete(&self, id: &str) -> usize {
        let mut comics = self.comics.write().await;
        let before = comics.len();
        comics.retain(|c| c.id != id);

        before - comics.len()
    }

    async fn find(&self, id: &str) -> Option<Comic> {
        self.comics.read().await.iter().find(|c| c.id == id).cloned()
    }
}
