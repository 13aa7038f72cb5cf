//! In-memory `BookmarkApi` and scripted `Prompter` shared by the view and app tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use bookmark_manager::services::api_client::BookmarkApi;
use bookmark_manager::types::bookmark::{Bookmark, BookmarkPatch, NewBookmark};
use bookmark_manager::types::errors::ApiError;
use bookmark_manager::ui::prompter::Prompter;

/// One request as seen by the fake server.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(Option<String>),
    Create(NewBookmark),
    Update(String, BookmarkPatch),
    Delete(String),
}

/// Fake server: keeps a collection, records every call, and can be told to
/// fail the next write.
#[derive(Default)]
pub struct FakeApi {
    store: Mutex<Vec<Bookmark>>,
    calls: Mutex<Vec<Call>>,
    next_id: Mutex<u32>,
    fail_writes: Mutex<Option<ApiError>>,
    fail_lists: Mutex<bool>,
}

impl FakeApi {
    pub fn with_bookmarks(bookmarks: Vec<Bookmark>) -> Self {
        let api = Self::default();
        *api.next_id.lock().unwrap() = bookmarks.len() as u32;
        *api.store.lock().unwrap() = bookmarks;
        api
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn fail_writes_with(&self, err: ApiError) {
        *self.fail_writes.lock().unwrap() = Some(err);
    }

    pub fn fail_lists(&self, fail: bool) {
        *self.fail_lists.lock().unwrap() = fail;
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn write_failure(&self) -> Option<ApiError> {
        self.fail_writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookmarkApi for FakeApi {
    async fn list(&self, tag: Option<&str>) -> Result<Vec<Bookmark>, ApiError> {
        self.record(Call::List(tag.map(str::to_string)));
        if *self.fail_lists.lock().unwrap() {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        let store = self.store.lock().unwrap();
        Ok(store
            .iter()
            .filter(|b| tag.map_or(true, |t| b.tags.iter().any(|bt| bt == t)))
            .cloned()
            .collect())
    }

    async fn create(&self, bookmark: &NewBookmark) -> Result<Bookmark, ApiError> {
        self.record(Call::Create(bookmark.clone()));
        if let Some(err) = self.write_failure() {
            return Err(err);
        }
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let created = Bookmark {
            id: next_id.to_string(),
            url: bookmark.url.clone(),
            title: bookmark.title.clone(),
            description: bookmark.description.clone(),
            tags: bookmark.tags.clone(),
        };
        self.store.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, patch: &BookmarkPatch) -> Result<Bookmark, ApiError> {
        self.record(Call::Update(id.to_string(), patch.clone()));
        if let Some(err) = self.write_failure() {
            return Err(err);
        }
        let mut store = self.store.lock().unwrap();
        let bookmark = store
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| ApiError::Status {
                status: 404,
                message: "not found".to_string(),
            })?;
        if let Some(title) = &patch.title {
            bookmark.title = title.clone();
        }
        Ok(bookmark.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.record(Call::Delete(id.to_string()));
        if let Some(err) = self.write_failure() {
            return Err(err);
        }
        self.store.lock().unwrap().retain(|b| b.id != id);
        Ok(())
    }
}

/// Prompter that answers from queues and records alerts.
#[derive(Default)]
pub struct ScriptedPrompter {
    pub alerts: Vec<String>,
    pub confirms: VecDeque<bool>,
    pub answers: VecDeque<Option<String>>,
    /// Defaults offered by each `prompt` call, in order.
    pub offered_defaults: Vec<String>,
}

impl ScriptedPrompter {
    pub fn confirming(answer: bool) -> Self {
        Self {
            confirms: VecDeque::from([answer]),
            ..Self::default()
        }
    }

    pub fn answering<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(|a| a.map(Into::into)).collect(),
            ..Self::default()
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, _message: &str) -> bool {
        self.confirms.pop_front().unwrap_or(false)
    }

    fn prompt(&mut self, _message: &str, default: &str) -> Option<String> {
        self.offered_defaults.push(default.to_string());
        self.answers.pop_front().flatten()
    }
}

pub fn bookmark(id: &str, url: &str, title: &str, tags: &[&str]) -> Bookmark {
    Bookmark {
        id: id.to_string(),
        url: url.to_string(),
        title: title.to_string(),
        description: String::new(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn sample_bookmarks() -> Vec<Bookmark> {
    vec![
        bookmark("1", "https://go.dev", "The Go Programming Language", &["go", "lang"]),
        Bookmark {
            description: "Reference for web developers".to_string(),
            ..bookmark("2", "https://developer.mozilla.org", "MDN Web Docs", &["web", "reference"])
        },
        bookmark("3", "https://www.rust-lang.org", "Rust", &["rust", "lang"]),
    ]
}
