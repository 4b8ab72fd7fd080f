use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{MovieColumns, MovieOut, NamePatch, NamedOut, NewMovie, NewNamed},
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/movies/", get(list_movies).post(create_movie))
        .route("/movies/{id}", get(get_movie).put(update_movie).delete(delete_movie))
        .route("/directors/", get(list_directors).post(create_director))
        .route(
            "/directors/{id}",
            get(get_director).put(update_director).delete(delete_director),
        )
        .route("/genres/", get(list_genres).post(create_genre))
        .route("/genres/{id}", get(get_genre).put(update_genre).delete(delete_genre))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct MovieFilter {
    director_id: Option<i32>,
    genre_id: Option<i32>,
}

async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<MovieFilter>,
) -> AppResult<Json<Vec<MovieOut>>> {
    let movies = state.store.list_movies(filter.director_id, filter.genre_id).await?;
    Ok(Json(movies.into_iter().map(MovieOut::from).collect()))
}

async fn create_movie(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewMovie>, JsonRejection>,
) -> AppResult<(StatusCode, &'static str)> {
    let Json(new) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;
    state.store.create_movie(new).await?;
    Ok((StatusCode::CREATED, "Movie Created"))
}

async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<MovieOut>> {
    let movie = state.store.get_movie(id).await?.ok_or(AppError::NotFound("Movie"))?;
    Ok(Json(movie.into()))
}

async fn update_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    payload: Result<Json<MovieColumns>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(columns) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;
    let rows_affected = state.store.column_update_movie(id, columns).await?;
    if rows_affected != 1 {
        return Err(AppError::NotUpdated);
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    if !state.store.delete_movie(id).await? {
        return Err(AppError::NotFound("Movie"));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn list_directors(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<NamedOut>>> {
    let directors = state.store.list_directors().await?;
    Ok(Json(directors.into_iter().map(NamedOut::from).collect()))
}

async fn create_director(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewNamed>, JsonRejection>,
) -> AppResult<(StatusCode, &'static str)> {
    let Json(new) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;
    state.store.create_director(new).await?;
    Ok((StatusCode::CREATED, "Director Created"))
}

async fn get_director(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<NamedOut>> {
    let director = state.store.get_director(id).await?.ok_or(AppError::NotFound("Director"))?;
    Ok(Json(director.into()))
}

async fn update_director(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    payload: Result<Json<NamePatch>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(patch) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;
    if !state.store.merge_update_director(id, patch).await? {
        return Err(AppError::NotFound("Director"));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_director(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    if !state.store.delete_director(id).await? {
        return Err(AppError::NotFound("Director"));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn list_genres(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<NamedOut>>> {
    let genres = state.store.list_genres().await?;
    Ok(Json(genres.into_iter().map(NamedOut::from).collect()))
}

async fn create_genre(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewNamed>, JsonRejection>,
) -> AppResult<(StatusCode, &'static str)> {
    let Json(new) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;
    state.store.create_genre(new).await?;
    Ok((StatusCode::CREATED, "Genre Created"))
}

async fn get_genre(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<NamedOut>> {
    let genre = state.store.get_genre(id).await?.ok_or(AppError::NotFound("Genre"))?;
    Ok(Json(genre.into()))
}

async fn update_genre(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    payload: Result<Json<NamePatch>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(patch) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;
    if !state.store.merge_update_genre(id, patch).await? {
        return Err(AppError::NotFound("Genre"));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_genre(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    if !state.store.delete_genre(id).await? {
        return Err(AppError::NotFound("Genre"));
    }
    Ok(StatusCode::NO_CONTENT)
}
