use axum::{
    extract::{Query, State},
    Extension, Json,
};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{MovieSearchResult, MovieSummary},
    routes::AppState,
    services::movies::{self, SearchParams},
};

/// Handler for the popular movies listing
pub async fn top_movies(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<Vec<MovieSummary>>> {
    tracing::info!(request_id = %request_id, "Fetching top movies");

    let movies = movies::top_movies(state.provider.as_ref(), &state.image_base).await?;
    Ok(Json(movies))
}

/// Handler for movie search and discovery
pub async fn search_movies(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Vec<MovieSearchResult>>> {
    // raw pairs so repeated keys never reject the request
    let params: SearchParams = pairs.into_iter().collect();

    tracing::info!(
        request_id = %request_id,
        query = ?params.query,
        genre = ?params.genre,
        year = ?params.year,
        rating = ?params.rating,
        "Processing movie search"
    );

    let movies = movies::search_movies(
        state.provider.as_ref(),
        &state.genres,
        &state.image_base,
        params,
    )
    .await?;

    Ok(Json(movies))
}
