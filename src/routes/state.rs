use std::sync::Arc;

use crate::{
    config::Config,
    error::AppResult,
    services::{GenreResolver, MovieProvider, TmdbProvider},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn MovieProvider>,
    pub genres: GenreResolver,
    /// Image CDN base; poster size segments are appended per feed
    pub image_base: String,
}

impl AppState {
    /// Creates state around any provider
    pub fn new(provider: Arc<dyn MovieProvider>, image_base: impl Into<String>) -> Self {
        let image_base = image_base.into().trim_end_matches('/').to_string();
        Self {
            genres: GenreResolver::new(provider.clone()),
            provider,
            image_base,
        }
    }

    /// Creates state backed by the TMDb provider
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let provider = TmdbProvider::from_config(config)?;
        Ok(Self::new(Arc::new(provider), config.tmdb_image_url.clone()))
    }
}
