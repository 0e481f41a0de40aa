//! Visitor submission models: demo requests, contact messages, and job
//! applications.
//!
//! Submissions are append-only logs. There are deliberately no `Update*`
//! DTOs here — records are created by public visitors, read and deleted by
//! admins, and never edited in place.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use nexora_core::types::{DbId, Timestamp};

/// A row from the `demo_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DemoRequest {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a demo request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDemoRequest {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

/// A row from the `contact_messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: Timestamp,
}

/// DTO for creating a contact message.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

/// A row from the `job_applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobApplication {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub cv_reference: Option<String>,
    pub message: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a job application.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateJobApplication {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub cv_reference: Option<String>,
    pub message: Option<String>,
}
