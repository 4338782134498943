//! Backend API access.
//!
//! [`NotesApi`] is the seam between the controller and the network: the
//! binary uses [`HttpApi`] (reqwest), tests plug in scripted fakes.

use std::future::Future;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Action, ClientError};
use crate::models::{MessageResponse, Note, NoteDraft, Stats};

// ============================================================================
// Query Parameters
// ============================================================================

/// Query string for `GET /notes`. Absent fields are left out entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl NoteQuery {
    /// Build the query from raw filter inputs. Empty search text is dropped,
    /// as is a category that is empty or equals the "all" sentinel.
    pub fn from_filter(search: &str, category: &str, all_categories: &str) -> Self {
        Self {
            search: (!search.is_empty()).then(|| search.to_string()),
            category: (!category.is_empty() && category != all_categories)
                .then(|| category.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.category.is_none()
    }

    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            pairs.push(("search", search.as_str()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.as_str()));
        }
        pairs
    }

    /// Append the query to `url`, leaving it without a `?` when empty.
    pub fn apply_to(&self, url: &mut Url) {
        if self.is_empty() {
            return;
        }
        let mut query = url.query_pairs_mut();
        for (key, value) in self.pairs() {
            query.append_pair(key, value);
        }
    }
}

// ============================================================================
// API Trait
// ============================================================================

pub trait NotesApi: Send + Sync {
    fn list_notes(
        &self,
        query: &NoteQuery,
    ) -> impl Future<Output = Result<Vec<Note>, ClientError>> + Send;

    fn list_categories(&self) -> impl Future<Output = Result<Vec<String>, ClientError>> + Send;

    fn create_note(
        &self,
        draft: &NoteDraft,
    ) -> impl Future<Output = Result<MessageResponse, ClientError>> + Send;

    fn update_note(
        &self,
        id: i64,
        draft: &NoteDraft,
    ) -> impl Future<Output = Result<MessageResponse, ClientError>> + Send;

    fn delete_note(&self, id: i64)
        -> impl Future<Output = Result<MessageResponse, ClientError>> + Send;

    fn stats(&self) -> impl Future<Output = Result<Stats, ClientError>> + Send;
}

// ============================================================================
// HTTP Implementation
// ============================================================================

#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: Url,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::Config(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Url {
        // Base URL always ends in '/', and paths are fixed relative segments.
        self.base_url
            .join(path)
            .unwrap_or_else(|_| self.base_url.clone())
    }

    fn notes_url(&self, query: &NoteQuery) -> Url {
        let mut url = self.endpoint("notes");
        query.apply_to(&mut url);
        url
    }
}

/// Turn a response into `T`, treating any non-2xx status as failure
/// regardless of body.
async fn read_json<T: DeserializeOwned>(
    action: Action,
    result: Result<Response, reqwest::Error>,
) -> Result<T, ClientError> {
    let response = result.map_err(|source| ClientError::Transport { action, source })?;

    let status = response.status();
    if !status.is_success() {
        debug!(?action, status = status.as_u16(), "backend returned error status");
        return Err(ClientError::Status {
            action,
            status: status.as_u16(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|source| ClientError::Decode { action, source })
}

impl NotesApi for HttpApi {
    async fn list_notes(&self, query: &NoteQuery) -> Result<Vec<Note>, ClientError> {
        let action = if query.is_empty() {
            Action::LoadNotes
        } else {
            Action::Search
        };
        let url = self.notes_url(query);
        debug!(%url, "GET notes");
        read_json(action, self.client.get(url).send().await).await
    }

    async fn list_categories(&self) -> Result<Vec<String>, ClientError> {
        let url = self.endpoint("notes/categories");
        read_json(Action::LoadCategories, self.client.get(url).send().await).await
    }

    async fn create_note(&self, draft: &NoteDraft) -> Result<MessageResponse, ClientError> {
        let url = self.endpoint("notes");
        read_json(
            Action::CreateNote,
            self.client.post(url).json(draft).send().await,
        )
        .await
    }

    async fn update_note(&self, id: i64, draft: &NoteDraft) -> Result<MessageResponse, ClientError> {
        let url = self.endpoint(&format!("notes/{}", id));
        read_json(
            Action::UpdateNote,
            self.client.put(url).json(draft).send().await,
        )
        .await
    }

    async fn delete_note(&self, id: i64) -> Result<MessageResponse, ClientError> {
        let url = self.endpoint(&format!("notes/{}", id));
        read_json(Action::DeleteNote, self.client.delete(url).send().await).await
    }

    async fn stats(&self) -> Result<Stats, ClientError> {
        let url = self.endpoint("stats");
        read_json(Action::LoadStats, self.client.get(url).send().await).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> HttpApi {
        HttpApi::new(&ClientConfig::default()).unwrap()
    }

    #[test]
    fn test_all_categories_sentinel_omits_category() {
        let query = NoteQuery::from_filter("", "Todos", "Todos");
        assert!(query.is_empty());
        assert_eq!(api().notes_url(&query).as_str(), "http://127.0.0.1:5000/notes");
    }

    #[test]
    fn test_other_category_included_verbatim() {
        let query = NoteQuery::from_filter("", "Work & Life", "Todos");
        assert_eq!(query.category.as_deref(), Some("Work & Life"));
        assert_eq!(query.pairs(), vec![("category", "Work & Life")]);
        assert_eq!(
            api().notes_url(&query).as_str(),
            "http://127.0.0.1:5000/notes?category=Work+%26+Life"
        );
    }

    #[test]
    fn test_search_and_category_together() {
        let query = NoteQuery::from_filter("milk", "Shopping", "Todos");
        assert_eq!(
            query.pairs(),
            vec![("search", "milk"), ("category", "Shopping")]
        );
    }

    #[test]
    fn test_empty_category_omitted() {
        let query = NoteQuery::from_filter("milk", "", "Todos");
        assert_eq!(query.category, None);
        assert_eq!(query.search.as_deref(), Some("milk"));
    }

    #[test]
    fn test_custom_sentinel() {
        let query = NoteQuery::from_filter("", "All", "All");
        assert!(query.is_empty());
        let query = NoteQuery::from_filter("", "Todos", "All");
        assert_eq!(query.category.as_deref(), Some("Todos"));
    }

    #[test]
    fn test_endpoints() {
        let api = api();
        assert_eq!(
            api.endpoint("notes/categories").as_str(),
            "http://127.0.0.1:5000/notes/categories"
        );
        assert_eq!(api.endpoint("notes/42").as_str(), "http://127.0.0.1:5000/notes/42");
        assert_eq!(api.endpoint("stats").as_str(), "http://127.0.0.1:5000/stats");
    }
}
