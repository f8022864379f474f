use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::NaiveDate;
use sqlx::sqlite::SqlitePool;

use crate::db;
use crate::error::ApiError;
use crate::models::{Confirmation, DeletePlayer, Player, PlayerInput, UpdatePlayer};

// GET /list - List all players
pub async fn list_players(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let players = db::list_players(&pool).await?;

    Ok(Json(players))
}

// GET /list/:start/:end - List players signed within the date range
pub async fn list_players_by_date(
    State(pool): State<SqlitePool>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<Player>>, ApiError> {
    // Parsed by hand rather than in the extractor so a bad date surfaces as
    // a 500 like any other filter failure, not as a path rejection.
    let start: NaiveDate = start.parse()?;
    let end: NaiveDate = end.parse()?;

    let players = db::list_players_by_signing_date(&pool, start, end).await?;

    Ok(Json(players))
}

// POST /add - Create a player, id assigned by the database
pub async fn add_player(
    State(pool): State<SqlitePool>,
    payload: Result<Json<PlayerInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let Json(input) = payload?;

    let created = db::create_player(&pool, &input).await?;
    tracing::info!(id = created.id, "player created");

    Ok((StatusCode::CREATED, Json(created)))
}

// PUT /update - Apply the listed fields to an existing player
pub async fn update_player(
    State(pool): State<SqlitePool>,
    payload: Result<Json<UpdatePlayer>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let Json(UpdatePlayer { id, fields }) = payload?;

    let player = db::update_player(&pool, id, &fields)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(player))
}

// DELETE /delete - Remove a player permanently
pub async fn delete_player(
    State(pool): State<SqlitePool>,
    payload: Result<Json<DeletePlayer>, JsonRejection>,
) -> Result<Json<Confirmation>, ApiError> {
    let Json(DeletePlayer { id }) = payload?;

    if !db::delete_player(&pool, id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!(id, "player deleted");

    Ok(Json(Confirmation {
        message: "Player deleted".to_string(),
    }))
}
