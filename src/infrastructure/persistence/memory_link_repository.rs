//! Process-local link repository.
//!
//! Selected with `STORAGE_BACKEND=memory`. Contents are lost on restart.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Link repository holding all mappings in a sorted map.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: RwLock<BTreeMap<String, String>>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a mapping verbatim, bypassing every check.
    ///
    /// Intended for seeding fixtures, including deliberately corrupt ones.
    pub async fn seed(&self, name: impl Into<String>, url: impl Into<String>) {
        self.links.write().await.insert(name.into(), url.into());
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.write().await;

        match links.entry(new_link.name) {
            Entry::Occupied(entry) => {
                tracing::warn!(name = %entry.key(), "Unique constraint violation");
                Err(AppError::conflict("Name already exists"))
            }
            Entry::Vacant(entry) => {
                let link = Link::new(entry.key().clone(), new_link.url.clone());
                entry.insert(new_link.url);
                Ok(link)
            }
        }
    }

    async fn delete_by_name(&self, name: &str) -> Result<u64, AppError> {
        Ok(self.links.write().await.remove(name).map_or(0, |_| 1))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Link>, AppError> {
        Ok(self
            .links
            .read()
            .await
            .get(name)
            .map(|url| Link::new(name, url.clone())))
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        Ok(self
            .links
            .read()
            .await
            .iter()
            .map(|(name, url)| Link::new(name.clone(), url.clone()))
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
