use chrono::NaiveDate;
use sqlx::sqlite::SqlitePool;

use crate::models::{Player, PlayerInput};

/// Create the players table if it does not exist yet. Safe to run on every
/// startup.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS players (
               id INTEGER PRIMARY KEY AUTOINCREMENT,
               first_name TEXT,
               last_name TEXT,
               team TEXT,
               position TEXT,
               shirt_number INTEGER,
               signing_date TEXT,
               goals INTEGER,
               nationality TEXT
           )"#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn list_players(pool: &SqlitePool) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(r#"SELECT * FROM players ORDER BY id"#)
        .fetch_all(pool)
        .await
}

/// Players whose signing date falls within `[start, end]`, inclusive on both
/// ends. Players without a signing date never match.
pub async fn list_players_by_signing_date(
    pool: &SqlitePool,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT * FROM players
           WHERE signing_date >= ? AND signing_date <= ?
           ORDER BY id"#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
}

/// Insert a new player and return the stored row, including the id the
/// database assigned.
pub async fn create_player(pool: &SqlitePool, input: &PlayerInput) -> Result<Player, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"INSERT INTO players
               (first_name, last_name, team, position, shirt_number, signing_date, goals, nationality)
           VALUES (?, ?, ?, ?, ?, ?, ?, ?)
           RETURNING *"#,
    )
    .bind(input.first_name.as_deref())
    .bind(input.last_name.as_deref())
    .bind(input.team.as_deref())
    .bind(input.position.as_deref())
    .bind(input.shirt_number)
    .bind(input.signing_date)
    .bind(input.goals)
    .bind(input.nationality.as_deref())
    .fetch_one(pool)
    .await
}

/// Apply the fields present in `fields` to the player with the given id,
/// leaving absent fields untouched. Returns `None` when no such player
/// exists.
pub async fn update_player(
    pool: &SqlitePool,
    id: i64,
    fields: &PlayerInput,
) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"UPDATE players SET
               first_name = COALESCE(?, first_name),
               last_name = COALESCE(?, last_name),
               team = COALESCE(?, team),
               position = COALESCE(?, position),
               shirt_number = COALESCE(?, shirt_number),
               signing_date = COALESCE(?, signing_date),
               goals = COALESCE(?, goals),
               nationality = COALESCE(?, nationality)
           WHERE id = ?
           RETURNING *"#,
    )
    .bind(fields.first_name.as_deref())
    .bind(fields.last_name.as_deref())
    .bind(fields.team.as_deref())
    .bind(fields.position.as_deref())
    .bind(fields.shirt_number)
    .bind(fields.signing_date)
    .bind(fields.goals)
    .bind(fields.nationality.as_deref())
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Remove the player with the given id. Returns whether a row was deleted.
pub async fn delete_player(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM players WHERE id = ?"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
