//! # Upstream Fetch Boundary
//!
//! The upstream resource is abstracted behind the [`UserSource`] trait:
//!
//! - [`HttpSource`]: production source over a blocking HTTP client
//! - [`StaticSource`]: in-memory source for testing (no network needed)
//!
//! Both calls are idempotent reads with a single attempt per user action.
//! Transport errors, timeouts and non-success statuses all collapse into
//! `UtabError::Fetch`; the one exception is a 404 on a single-user fetch,
//! which surfaces as the distinct `UtabError::NotFound`.

use crate::error::{Result, UtabError};
use crate::model::User;
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Abstract interface for the upstream read-only user resource.
pub trait UserSource {
    /// Fetch the full user list
    fn fetch_users(&self) -> Result<Vec<User>>;

    /// Fetch a single user by id. The id is passed through verbatim; an
    /// unknown or non-numeric id surfaces as `NotFound`.
    fn fetch_user(&self, id: &str) -> Result<User>;
}

/// Production source backed by a blocking HTTP client.
pub struct HttpSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| UtabError::Fetch(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn get(&self, path: &str) -> Result<reqwest::blocking::Response> {
        let url = format!("{}/{}", self.base_url, path);
        self.client
            .get(&url)
            .send()
            .map_err(|e| UtabError::Fetch(e.to_string()))
    }
}

impl UserSource for HttpSource {
    fn fetch_users(&self) -> Result<Vec<User>> {
        let response = self.get("users")?;
        if !response.status().is_success() {
            return Err(UtabError::Fetch(format!("status {}", response.status())));
        }
        let raw: Vec<serde_json::Value> = response
            .json()
            .map_err(|e| UtabError::Fetch(e.to_string()))?;
        raw.into_iter().map(User::from_value).collect()
    }

    fn fetch_user(&self, id: &str) -> Result<User> {
        let response = self.get(&format!("users/{}", id))?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(UtabError::NotFound(id.to_string()));
        }
        if !response.status().is_success() {
            return Err(UtabError::Fetch(format!("status {}", response.status())));
        }
        let raw: serde_json::Value = response
            .json()
            .map_err(|e| UtabError::Fetch(e.to_string()))?;
        User::from_value(raw)
    }
}

/// In-memory source serving a fixed list, for testing.
#[derive(Debug, Default)]
pub struct StaticSource {
    users: Vec<User>,
    list_fetches: std::cell::Cell<usize>,
}

impl StaticSource {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users,
            list_fetches: std::cell::Cell::new(0),
        }
    }

    /// How many times the full list was fetched
    pub fn list_fetches(&self) -> usize {
        self.list_fetches.get()
    }
}

impl UserSource for StaticSource {
    fn fetch_users(&self) -> Result<Vec<User>> {
        self.list_fetches.set(self.list_fetches.get() + 1);
        Ok(self.users.clone())
    }

    fn fetch_user(&self, id: &str) -> Result<User> {
        self.users
            .iter()
            .find(|u| u.id.to_string() == id)
            .cloned()
            .ok_or_else(|| UtabError::NotFound(id.to_string()))
    }
}
