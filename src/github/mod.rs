// GitHub API module
// Public interface for gist retrieval

mod client;
mod retry;
mod types;

pub use client::GithubClient;
pub use types::{Gist, GistFile};
