use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClientRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub company: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub client_id: Uuid,
    pub job_type: String,
    pub description: String,
    pub source_language: Option<String>,
    pub target_language: Option<String>,
    pub word_count: Option<i64>,
    pub rate_per_word: Option<f64>,
    pub duration_hours: Option<f64>,
    pub rate_per_hour: Option<f64>,
    pub deadline: Option<NaiveDate>,
    pub notes: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
