/// TMDb (The Movie Database) v3 provider
///
/// Every request carries the API key and language as query parameters.
/// Only the first page of any listing is requested.
use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{MovieFilters, TmdbGenre, TmdbGenreList, TmdbMovie, TmdbMovieList},
    services::providers::MovieProvider,
};

const FIRST_PAGE: &str = "1";

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    language: String,
}

impl TmdbProvider {
    pub fn new(
        api_key: String,
        api_url: String,
        language: String,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            language,
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            config.tmdb_api_key.clone(),
            config.tmdb_api_url.clone(),
            config.tmdb_language.clone(),
            Duration::from_secs(config.tmdb_timeout_secs),
        )
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    /// Query parameters sent with every request
    fn base_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("api_key", self.api_key.clone()),
            ("language", self.language.clone()),
        ]
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> AppResult<T> {
        tracing::debug!(endpoint = %path, provider = self.name(), "TMDb request");

        let response = self
            .http_client
            .get(self.endpoint(path))
            .query(params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!(endpoint = %path, status = %status, "TMDb returned non-success status");
            return Err(AppError::UpstreamStatus(status));
        }

        Ok(response.json().await?)
    }

    async fn get_movies(
        &self,
        path: &str,
        params: Vec<(&'static str, String)>,
    ) -> AppResult<Vec<TmdbMovie>> {
        let list: TmdbMovieList = self.get_json(path, &params).await?;
        Ok(list.results)
    }
}

#[async_trait::async_trait]
impl MovieProvider for TmdbProvider {
    async fn fetch_genres(&self) -> AppResult<Vec<TmdbGenre>> {
        let list: TmdbGenreList = self
            .get_json("genre/movie/list", &self.base_params())
            .await?;
        Ok(list.genres)
    }

    async fn popular_movies(&self) -> AppResult<Vec<TmdbMovie>> {
        let mut params = self.base_params();
        params.push(("page", FIRST_PAGE.to_string()));
        self.get_movies("movie/popular", params).await
    }

    async fn search_movies(
        &self,
        query: &str,
        filters: &MovieFilters,
    ) -> AppResult<Vec<TmdbMovie>> {
        let mut params = self.base_params();
        params.push(("query", query.to_string()));
        params.extend(filters.query_pairs());
        self.get_movies("search/movie", params).await
    }

    async fn discover_movies(&self, filters: &MovieFilters) -> AppResult<Vec<TmdbMovie>> {
        let mut params = self.base_params();
        params.extend(filters.query_pairs());
        self.get_movies("discover/movie", params).await
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
