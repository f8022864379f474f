use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stored player record. `id` is assigned by the database on insert and
/// never changes afterwards; every other field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub team: Option<String>,
    pub position: Option<String>,
    pub shirt_number: Option<i64>,
    pub signing_date: Option<NaiveDate>,
    pub goals: Option<i64>,
    pub nationality: Option<String>,
}

/// Fields accepted on create and update. All optional; on update, absent
/// fields are left untouched. There is no `id` here, so an update can never
/// rewrite one.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub team: Option<String>,
    pub position: Option<String>,
    pub shirt_number: Option<i64>,
    pub signing_date: Option<NaiveDate>,
    pub goals: Option<i64>,
    pub nationality: Option<String>,
}

/// Body of PUT /update: the target id plus the fields to change.
#[derive(Debug, Deserialize)]
pub struct UpdatePlayer {
    pub id: i64,
    #[serde(flatten)]
    pub fields: PlayerInput,
}

/// Body of DELETE /delete.
#[derive(Debug, Deserialize)]
pub struct DeletePlayer {
    pub id: i64,
}

/// Plain confirmation payload for operations with nothing else to return.
#[derive(Debug, Serialize)]
pub struct Confirmation {
    pub message: String,
}
