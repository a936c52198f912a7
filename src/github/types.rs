// GitHub API types
// Shapes for the subset of the gists API this tool reads

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;

/// A gist as returned by `GET /users/{user}/gists`.
#[derive(Debug, Clone, Deserialize)]
pub struct Gist {
    pub id: String,
    /// GitHub returns `null` for gists saved without a description.
    pub description: Option<String>,
    pub git_pull_url: String,
    pub git_push_url: String,
    pub html_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Keyed by filename. BTreeMap keeps listings in a stable order.
    pub files: BTreeMap<String, GistFile>,
}

/// A single file within a gist.
#[derive(Debug, Clone, Deserialize)]
pub struct GistFile {
    pub filename: String,
    pub raw_url: String,
}
