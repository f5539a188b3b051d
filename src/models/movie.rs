use serde::Serialize;

use super::{GenreTable, TmdbMovie};

/// Poster returned by the search feed when TMDb has none
pub const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/300x450";

/// Synopsis returned when TMDb omits the overview
pub const DEFAULT_SYNOPSIS: &str = "No synopsis available";

const POPULAR_POSTER_SIZE: &str = "original";
const SEARCH_POSTER_SIZE: &str = "w500";

/// Movie returned by `/top_movies`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    pub genre_ids: Vec<u32>,
    pub rating: Option<f64>,
    pub poster: String,
    pub synopsis: String,
}

impl MovieSummary {
    /// Popular-feed mapping. The poster always uses the original size, even
    /// when TMDb sends no poster path.
    pub fn from_tmdb(movie: TmdbMovie, image_base: &str) -> Self {
        let poster = format!(
            "{}/{}{}",
            image_base,
            POPULAR_POSTER_SIZE,
            movie.poster_path.as_deref().unwrap_or_default()
        );

        Self {
            id: movie.id,
            title: movie.title,
            genre_ids: movie.genre_ids,
            rating: movie.vote_average,
            poster,
            synopsis: movie
                .overview
                .unwrap_or_else(|| DEFAULT_SYNOPSIS.to_string()),
        }
    }
}

/// Movie returned by `/search_movies`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MovieSearchResult {
    pub id: u64,
    pub title: String,
    pub genres: Vec<String>,
    pub rating: Option<f64>,
    pub poster: String,
    pub synopsis: String,
}

impl MovieSearchResult {
    /// Search/discover-feed mapping with genre names resolved through `genres`
    pub fn from_tmdb(movie: TmdbMovie, genres: &GenreTable, image_base: &str) -> Self {
        let poster = match movie.poster_path.as_deref() {
            Some(path) if !path.is_empty() => {
                format!("{}/{}{}", image_base, SEARCH_POSTER_SIZE, path)
            }
            _ => PLACEHOLDER_POSTER.to_string(),
        };

        Self {
            id: movie.id,
            title: movie.title,
            genres: movie
                .genre_ids
                .iter()
                .map(|&id| genres.name_for(id).to_string())
                .collect(),
            rating: movie.vote_average,
            poster,
            synopsis: movie
                .overview
                .unwrap_or_else(|| DEFAULT_SYNOPSIS.to_string()),
        }
    }
}
