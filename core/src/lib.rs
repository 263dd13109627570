//! Core library for the `taskpulse` progress reporter.
//!
//! Resolves an Asana credential, fetches workspaces, projects, and tasks
//! over the paginated REST API, and turns the task counts into
//! per-project and aggregate completion figures. Rendering lives in the
//! CLI crate.

pub mod auth;
pub mod client;
pub mod models;
pub mod progress;
pub mod report;

pub use auth::AuthError;
pub use auth::Credential;
pub use auth::CredentialSource;
pub use auth::resolve_credential;
pub use client::ApiError;
pub use client::ApiResult;
pub use client::AsanaClient;
pub use progress::ProgressSummary;
pub use progress::ProjectProgress;
pub use progress::StatusCategory;
pub use report::Report;
pub use report::collect_report;
