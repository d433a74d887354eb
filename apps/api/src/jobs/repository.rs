//! Job Repository — persists confirmed job candidates as client and job rows.
//!
//! `AppState` holds an `Arc<dyn JobRepository>`. Production uses
//! `PgJobRepository`; tests use the in-memory store below.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{ClientRow, JobRow};
use crate::parsing::parsed_job::ParsedJob;

pub const IMPORTED_JOB_STATUS: &str = "pending";

#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Finds the user's client by email (case-insensitive) or, without an
    /// email, by exact name. Fills in newly known email/company; inserts when
    /// no client matches.
    async fn upsert_client(&self, user_id: Uuid, job: &ParsedJob) -> Result<ClientRow, AppError>;

    /// Inserts a job row in `pending` status.
    async fn create_job(
        &self,
        user_id: Uuid,
        client_id: Uuid,
        job: &ParsedJob,
    ) -> Result<JobRow, AppError>;
}

pub struct PgJobRepository {
    pool: PgPool,
}

impl PgJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PgJobRepository {
    async fn upsert_client(&self, user_id: Uuid, job: &ParsedJob) -> Result<ClientRow, AppError> {
        let existing: Option<ClientRow> = if job.client_email.is_empty() {
            sqlx::query_as(
                "SELECT * FROM clients WHERE user_id = $1 AND name = $2 ORDER BY created_at LIMIT 1",
            )
            .bind(user_id)
            .bind(&job.client_name)
            .fetch_optional(&self.pool)
            .await?
        } else {
            sqlx::query_as(
                "SELECT * FROM clients WHERE user_id = $1 AND lower(email) = lower($2) ORDER BY created_at LIMIT 1",
            )
            .bind(user_id)
            .bind(&job.client_email)
            .fetch_optional(&self.pool)
            .await?
        };

        let client: ClientRow = match existing {
            Some(client) => {
                sqlx::query_as(
                    r#"
                    UPDATE clients
                    SET email = CASE WHEN $2 <> '' THEN $2 ELSE email END,
                        company = CASE WHEN $3 <> '' THEN $3 ELSE company END,
                        updated_at = now()
                    WHERE id = $1
                    RETURNING *
                    "#,
                )
                .bind(client.id)
                .bind(&job.client_email)
                .bind(&job.client_company)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as(
                    r#"
                    INSERT INTO clients (id, user_id, name, email, company)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING *
                    "#,
                )
                .bind(Uuid::new_v4())
                .bind(user_id)
                .bind(&job.client_name)
                .bind(&job.client_email)
                .bind(&job.client_company)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(client)
    }

    async fn create_job(
        &self,
        user_id: Uuid,
        client_id: Uuid,
        job: &ParsedJob,
    ) -> Result<JobRow, AppError> {
        let row: JobRow = sqlx::query_as(
            r#"
            INSERT INTO jobs
                (id, user_id, client_id, job_type, description, source_language,
                 target_language, word_count, rate_per_word, duration_hours,
                 rate_per_hour, deadline, notes, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(client_id)
        .bind(job.job_type.as_str())
        .bind(&job.description)
        .bind(&job.source_language)
        .bind(&job.target_language)
        .bind(word_count_column(job)?)
        .bind(job.rate_per_word)
        .bind(job.duration_hours)
        .bind(job.rate_per_hour)
        .bind(deadline_column(job))
        .bind(&job.notes)
        .bind(IMPORTED_JOB_STATUS)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}

fn word_count_column(job: &ParsedJob) -> Result<Option<i64>, AppError> {
    job.word_count
        .map(i64::try_from)
        .transpose()
        .map_err(|_| AppError::Validation("word_count is too large".to_string()))
}

fn deadline_column(job: &ParsedJob) -> Option<NaiveDate> {
    job.deadline
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}

#[cfg(test)]
pub(crate) mod memory {
    use std::sync::Mutex;

    use chrono::Utc;

    use super::*;

    /// Same matching rules as `PgJobRepository`, kept in vectors.
    #[derive(Default)]
    pub struct InMemoryJobRepository {
        pub clients: Mutex<Vec<ClientRow>>,
        pub jobs: Mutex<Vec<JobRow>>,
    }

    #[async_trait]
    impl JobRepository for InMemoryJobRepository {
        async fn upsert_client(
            &self,
            user_id: Uuid,
            job: &ParsedJob,
        ) -> Result<ClientRow, AppError> {
            let mut clients = self.clients.lock().unwrap();
            let found = clients.iter_mut().find(|c| {
                c.user_id == user_id
                    && if job.client_email.is_empty() {
                        c.name == job.client_name
                    } else {
                        c.email.eq_ignore_ascii_case(&job.client_email)
                    }
            });

            if let Some(client) = found {
                if !job.client_email.is_empty() {
                    client.email = job.client_email.clone();
                }
                if !job.client_company.is_empty() {
                    client.company = job.client_company.clone();
                }
                client.updated_at = Utc::now();
                return Ok(client.clone());
            }

            let now = Utc::now();
            let client = ClientRow {
                id: Uuid::new_v4(),
                user_id,
                name: job.client_name.clone(),
                email: job.client_email.clone(),
                company: job.client_company.clone(),
                created_at: now,
                updated_at: now,
            };
            clients.push(client.clone());
            Ok(client)
        }

        async fn create_job(
            &self,
            user_id: Uuid,
            client_id: Uuid,
            job: &ParsedJob,
        ) -> Result<JobRow, AppError> {
            let row = JobRow {
                id: Uuid::new_v4(),
                user_id,
                client_id,
                job_type: job.job_type.as_str().to_string(),
                description: job.description.clone(),
                source_language: job.source_language.clone(),
                target_language: job.target_language.clone(),
                word_count: word_count_column(job)?,
                rate_per_word: job.rate_per_word,
                duration_hours: job.duration_hours,
                rate_per_hour: job.rate_per_hour,
                deadline: deadline_column(job),
                notes: job.notes.clone(),
                status: IMPORTED_JOB_STATUS.to_string(),
                created_at: Utc::now(),
            };
            self.jobs.lock().unwrap().push(row.clone());
            Ok(row)
        }
    }
}
