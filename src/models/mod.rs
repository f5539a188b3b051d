use serde::Deserialize;

pub mod genre;
pub mod movie;

pub use genre::GenreTable;
pub use movie::{MovieSearchResult, MovieSummary};

// ============================================================================
// TMDb API Types
// ============================================================================

/// Entry of `GET /genre/movie/list`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TmdbGenre {
    pub id: u32,
    pub name: String,
}

/// Raw response of `GET /genre/movie/list`
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenreList {
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
}

/// Movie record shared by the popular, search and discover feeds
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TmdbMovie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

/// Paged movie listing; only the first page is ever requested
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieList {
    #[serde(default)]
    pub results: Vec<TmdbMovie>,
}

/// Filters forwarded to TMDb as query parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieFilters {
    /// `primary_release_year`
    pub year: Option<i32>,
    /// `with_genres`
    pub genre_id: Option<u32>,
    /// `vote_average.gte`
    pub min_rating: Option<f64>,
}

impl MovieFilters {
    /// Query-string pairs for the filters that are set
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(year) = self.year {
            pairs.push(("primary_release_year", year.to_string()));
        }
        if let Some(genre_id) = self.genre_id {
            pairs.push(("with_genres", genre_id.to_string()));
        }
        if let Some(rating) = self.min_rating {
            pairs.push(("vote_average.gte", rating.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tmdb_movie_tolerates_missing_optional_fields() {
        let movie: TmdbMovie = serde_json::from_str(r#"{"id": 550, "title": "Fight Club"}"#).unwrap();
        assert_eq!(movie.id, 550);
        assert!(movie.genre_ids.is_empty());
        assert_eq!(movie.vote_average, None);
        assert_eq!(movie.poster_path, None);
        assert_eq!(movie.overview, None);
    }

    #[test]
    fn test_tmdb_movie_null_poster_path() {
        let movie: TmdbMovie = serde_json::from_str(
            r#"{"id": 1, "title": "X", "genre_ids": [28], "vote_average": 6.5, "poster_path": null, "overview": "o"}"#,
        )
        .unwrap();
        assert_eq!(movie.poster_path, None);
        assert_eq!(movie.vote_average, Some(6.5));
        assert_eq!(movie.genre_ids, vec![28]);
    }

    #[test]
    fn test_movie_list_without_results_is_empty() {
        let list: TmdbMovieList = serde_json::from_str(r#"{"page": 1}"#).unwrap();
        assert!(list.results.is_empty());
    }

    #[test]
    fn test_filters_only_emit_present_values() {
        assert!(MovieFilters::default().query_pairs().is_empty());

        let filters = MovieFilters {
            year: Some(1999),
            genre_id: None,
            min_rating: Some(7.0),
        };
        assert_eq!(
            filters.query_pairs(),
            vec![
                ("primary_release_year", "1999".to_string()),
                ("vote_average.gte", "7".to_string()),
            ]
        );
    }
}
