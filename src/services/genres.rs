use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{models::GenreTable, services::providers::MovieProvider};

/// Owns the genre id → name table and refreshes it from the provider
#[derive(Clone)]
pub struct GenreResolver {
    provider: Arc<dyn MovieProvider>,
    table: Arc<RwLock<GenreTable>>,
}

impl GenreResolver {
    /// Creates a resolver with an empty table
    pub fn new(provider: Arc<dyn MovieProvider>) -> Self {
        Self {
            provider,
            table: Arc::new(RwLock::new(GenreTable::default())),
        }
    }

    /// Re-fetches the genre list and replaces the table wholesale.
    ///
    /// Returns the table the caller should use. When the fetch fails the
    /// current table is kept and returned unchanged; the failure is only
    /// logged.
    pub async fn refresh(&self) -> GenreTable {
        match self.provider.fetch_genres().await {
            Ok(genres) => {
                let table = GenreTable::from_genres(genres);
                *self.table.write().await = table.clone();

                tracing::debug!(
                    genres = table.len(),
                    provider = self.provider.name(),
                    "Genre table refreshed"
                );

                table
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch genres from TMDb");
                self.table().await
            }
        }
    }

    /// Snapshot of the current table
    pub async fn table(&self) -> GenreTable {
        self.table.read().await.clone()
    }
}
