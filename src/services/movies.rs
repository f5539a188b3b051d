use crate::{
    error::AppResult,
    models::{MovieFilters, MovieSearchResult, MovieSummary, TmdbMovie},
    services::{genres::GenreResolver, providers::MovieProvider},
};

/// Raw `/search_movies` query parameters; every field is optional text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams {
    pub query: Option<String>,
    pub genre: Option<String>,
    pub year: Option<String>,
    pub rating: Option<String>,
}

/// Builds params from raw query pairs. The first occurrence of a key wins;
/// unknown keys are ignored.
impl FromIterator<(String, String)> for SearchParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = SearchParams::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "query" => &mut params.query,
                "genre" => &mut params.genre,
                "year" => &mut params.year,
                "rating" => &mut params.rating,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

/// Search parameters after normalization
///
/// Blank or unparseable values become `None`; they never cause an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub query: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub min_rating: Option<f64>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<SearchParams> for SearchFilters {
    fn from(params: SearchParams) -> Self {
        let year = non_blank(params.year).and_then(|y| y.trim().parse::<i32>().ok());
        let min_rating = non_blank(params.rating)
            .and_then(|r| r.trim().parse::<f64>().ok())
            .filter(|r| r.is_finite());

        Self {
            query: non_blank(params.query),
            genre: non_blank(params.genre),
            year,
            min_rating,
        }
    }
}

impl SearchFilters {
    /// Client-side rating check.
    ///
    /// Only applied to text searches: for discovery the threshold already
    /// travels upstream as `vote_average.gte`. A missing rating counts as 0.
    fn keeps(&self, movie: &TmdbMovie) -> bool {
        if self.query.is_none() {
            return true;
        }
        match self.min_rating {
            Some(min) => movie.vote_average.unwrap_or(0.0) >= min,
            None => true,
        }
    }
}

/// First page of popular movies in the summary shape
pub async fn top_movies(
    provider: &dyn MovieProvider,
    image_base: &str,
) -> AppResult<Vec<MovieSummary>> {
    let movies: Vec<MovieSummary> = provider
        .popular_movies()
        .await?
        .into_iter()
        .map(|movie| MovieSummary::from_tmdb(movie, image_base))
        .collect();

    tracing::info!(
        results = movies.len(),
        provider = provider.name(),
        "Popular movies fetched"
    );

    Ok(movies)
}

/// Searches (with a query) or discovers (without one) movies.
///
/// The genre table is refreshed first and the refreshed snapshot is used for
/// both the genre filter and the name resolution of the results.
pub async fn search_movies(
    provider: &dyn MovieProvider,
    genres: &GenreResolver,
    image_base: &str,
    params: SearchParams,
) -> AppResult<Vec<MovieSearchResult>> {
    let filters = SearchFilters::from(params);
    let table = genres.refresh().await;

    let genre_id = filters.genre.as_deref().and_then(|text| table.find_id(text));
    if filters.genre.is_some() && genre_id.is_none() {
        tracing::debug!(genre = ?filters.genre, "Genre filter matched nothing, ignoring");
    }

    let upstream_filters = MovieFilters {
        year: filters.year,
        genre_id,
        min_rating: filters.min_rating,
    };

    let movies = match filters.query.as_deref() {
        Some(query) => provider.search_movies(query, &upstream_filters).await?,
        None => provider.discover_movies(&upstream_filters).await?,
    };

    let results: Vec<MovieSearchResult> = movies
        .into_iter()
        .filter(|movie| filters.keeps(movie))
        .map(|movie| MovieSearchResult::from_tmdb(movie, &table, image_base))
        .collect();

    tracing::info!(
        query = ?filters.query,
        genre_id = ?genre_id,
        results = results.len(),
        provider = provider.name(),
        "Movie search completed"
    );

    Ok(results)
}
