/// Movie metadata provider abstraction
///
/// Handlers and services only talk to upstream through this trait, so the
/// TMDb client can be swapped for a fake in tests.
use crate::{
    error::AppResult,
    models::{MovieFilters, TmdbGenre, TmdbMovie},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for movie metadata providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    /// Fetch the full movie genre list
    async fn fetch_genres(&self) -> AppResult<Vec<TmdbGenre>>;

    /// Fetch the first page of currently popular movies
    async fn popular_movies(&self) -> AppResult<Vec<TmdbMovie>>;

    /// Free-text search, narrowed by `filters`
    ///
    /// Upstream may ignore some filters on this endpoint (TMDb ignores
    /// `vote_average.gte` for text searches).
    async fn search_movies(&self, query: &str, filters: &MovieFilters)
        -> AppResult<Vec<TmdbMovie>>;

    /// Filter-only discovery listing
    async fn discover_movies(&self, filters: &MovieFilters) -> AppResult<Vec<TmdbMovie>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
