//! Repositories for visitor submissions: demo requests, contact messages,
//! and job applications.
//!
//! All three are append-only logs. The repos expose create, list, find, and
//! delete — no update exists, so records cannot be edited after creation.

use nexora_core::types::DbId;

use crate::models::submission::{
    ContactMessage, CreateContactMessage, CreateDemoRequest, CreateJobApplication, DemoRequest,
    JobApplication,
};
use crate::DbPool;

/// Column list for `demo_requests` queries.
const DEMO_COLUMNS: &str = "id, name, email, company, phone, message, created_at";

/// Column list for `contact_messages` queries.
const CONTACT_COLUMNS: &str = "id, name, email, phone, subject, message, created_at";

/// Column list for `job_applications` queries.
const JOB_COLUMNS: &str = "id, name, email, phone, position, cv_reference, message, created_at";

/// Provides data access for demo requests.
pub struct DemoRequestRepo;

impl DemoRequestRepo {
    /// List all demo requests, newest first.
    pub async fn list(pool: &DbPool) -> Result<Vec<DemoRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {DEMO_COLUMNS} FROM demo_requests ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, DemoRequest>(&query).fetch_all(pool).await
    }

    /// Find a demo request by id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<DemoRequest>, sqlx::Error> {
        let query = format!("SELECT {DEMO_COLUMNS} FROM demo_requests WHERE id = ?");
        sqlx::query_as::<_, DemoRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Record a new demo request.
    pub async fn create(pool: &DbPool, dto: &CreateDemoRequest) -> Result<DemoRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO demo_requests (name, email, company, phone, message) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING {DEMO_COLUMNS}"
        );
        sqlx::query_as::<_, DemoRequest>(&query)
            .bind(&dto.name)
            .bind(&dto.email)
            .bind(&dto.company)
            .bind(&dto.phone)
            .bind(&dto.message)
            .fetch_one(pool)
            .await
    }

    /// Delete a demo request by id. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM demo_requests WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Provides data access for contact messages.
pub struct ContactMessageRepo;

impl ContactMessageRepo {
    /// List all contact messages, newest first.
    pub async fn list(pool: &DbPool) -> Result<Vec<ContactMessage>, sqlx::Error> {
        let query = format!(
            "SELECT {CONTACT_COLUMNS} FROM contact_messages ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a contact message by id.
    pub async fn find_by_id(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<ContactMessage>, sqlx::Error> {
        let query = format!("SELECT {CONTACT_COLUMNS} FROM contact_messages WHERE id = ?");
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Record a new contact message.
    pub async fn create(
        pool: &DbPool,
        dto: &CreateContactMessage,
    ) -> Result<ContactMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_messages (name, email, phone, subject, message) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING {CONTACT_COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(&dto.name)
            .bind(&dto.email)
            .bind(&dto.phone)
            .bind(&dto.subject)
            .bind(&dto.message)
            .fetch_one(pool)
            .await
    }

    /// Delete a contact message by id. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Provides data access for job applications.
pub struct JobApplicationRepo;

impl JobApplicationRepo {
    /// List all job applications, newest first.
    pub async fn list(pool: &DbPool) -> Result<Vec<JobApplication>, sqlx::Error> {
        let query = format!(
            "SELECT {JOB_COLUMNS} FROM job_applications ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, JobApplication>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a job application by id.
    pub async fn find_by_id(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<JobApplication>, sqlx::Error> {
        let query = format!("SELECT {JOB_COLUMNS} FROM job_applications WHERE id = ?");
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Record a new job application.
    pub async fn create(
        pool: &DbPool,
        dto: &CreateJobApplication,
    ) -> Result<JobApplication, sqlx::Error> {
        let query = format!(
            "INSERT INTO job_applications (name, email, phone, position, cv_reference, message) \
             VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING {JOB_COLUMNS}"
        );
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(&dto.name)
            .bind(&dto.email)
            .bind(&dto.phone)
            .bind(&dto.position)
            .bind(&dto.cv_reference)
            .bind(&dto.message)
            .fetch_one(pool)
            .await
    }

    /// Delete a job application by id. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM job_applications WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
