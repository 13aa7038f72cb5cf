//! Bookmark view state for the bookmark client.
//!
//! Holds the fetched list, search text, active tag filter and creation form,
//! and keeps them in step with the remote collection. Every write is
//! followed by a full refetch; the local list is never edited in place.

use async_trait::async_trait;

use crate::services::api_client::BookmarkApi;
use crate::types::bookmark::{matches_search, Bookmark, BookmarkForm, BookmarkPatch};
use crate::types::errors::ApiError;
use crate::ui::prompter::Prompter;

pub const REQUIRED_FIELDS_MESSAGE: &str = "URL and title required";
pub const DELETE_CONFIRMATION: &str = "Delete bookmark?";
pub const EDIT_TITLE_PROMPT: &str = "New title";

/// Result of submitting the creation form.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// URL or title was empty; nothing was sent.
    Invalid,
    /// The server refused or the request failed; the form is untouched.
    Failed(ApiError),
    Created(Bookmark),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// Cancelled or empty title; nothing was sent.
    Skipped,
    Failed(ApiError),
    Updated(Bookmark),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// Confirmation declined; nothing was sent.
    Cancelled,
    Failed(ApiError),
    Deleted,
}

/// Trait defining the list, filter and edit operations of a bookmark view.
///
/// Futures are not `Send`: the prompter is a borrowed, thread-bound dialog.
#[async_trait(?Send)]
pub trait BookmarkViewTrait {
    async fn refresh(&mut self) -> Result<(), ApiError>;
    fn visible(&self) -> Vec<&Bookmark>;
    fn set_search(&mut self, text: &str);
    async fn set_active_tag(&mut self, tag: &str) -> Result<(), ApiError>;
    async fn clear_active_tag(&mut self) -> Result<(), ApiError>;
    async fn submit_form(&mut self, prompter: &mut dyn Prompter) -> SubmitOutcome;
    async fn edit_title(&mut self, id: &str, prompter: &mut dyn Prompter) -> EditOutcome;
    async fn delete(&mut self, id: &str, prompter: &mut dyn Prompter) -> DeleteOutcome;
}

/// Client-side cache of the bookmark collection plus the page's UI state.
pub struct BookmarkView<A: BookmarkApi> {
    api: A,
    bookmarks: Vec<Bookmark>,
    search: String,
    active_tag: Option<String>,
    form: BookmarkForm,
}

impl<A: BookmarkApi> BookmarkView<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            bookmarks: Vec::new(),
            search: String::new(),
            active_tag: None,
            form: BookmarkForm::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// The last fetched list, unfiltered by search.
    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn active_tag(&self) -> Option<&str> {
        self.active_tag.as_deref()
    }

    pub fn form(&self) -> &BookmarkForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BookmarkForm {
        &mut self.form
    }

    pub fn find(&self, id: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    async fn refresh_after_write(&mut self) {
        if let Err(err) = self.refresh().await {
            tracing::warn!(error = %err, "refetch after write failed");
        }
    }
}

#[async_trait(?Send)]
impl<A: BookmarkApi> BookmarkViewTrait for BookmarkView<A> {
    /// Fetches the collection, filtered by the active tag, and replaces the
    /// local list. On error the previous list stays in place.
    async fn refresh(&mut self) -> Result<(), ApiError> {
        let bookmarks = self.api.list(self.active_tag.as_deref()).await?;
        tracing::debug!(count = bookmarks.len(), tag = ?self.active_tag, "bookmarks fetched");
        self.bookmarks = bookmarks;
        Ok(())
    }

    /// Bookmarks whose title or URL contains the search text, ignoring case.
    fn visible(&self) -> Vec<&Bookmark> {
        self.bookmarks
            .iter()
            .filter(|b| matches_search(b, &self.search))
            .collect()
    }

    /// Local only; never triggers a fetch.
    fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
    }

    /// Filters the list by `tag` and refetches.
    async fn set_active_tag(&mut self, tag: &str) -> Result<(), ApiError> {
        if tag.is_empty() {
            return self.clear_active_tag().await;
        }
        self.active_tag = Some(tag.to_string());
        self.refresh().await
    }

    /// Drops the tag filter, refetching only if one was set.
    async fn clear_active_tag(&mut self) -> Result<(), ApiError> {
        if self.active_tag.take().is_none() {
            return Ok(());
        }
        self.refresh().await
    }

    /// Sends the creation form.
    ///
    /// Empty URL or title alerts and returns without a request. A failed
    /// request alerts the server's message and keeps the form as typed.
    async fn submit_form(&mut self, prompter: &mut dyn Prompter) -> SubmitOutcome {
        if !self.form.is_submittable() {
            prompter.alert(REQUIRED_FIELDS_MESSAGE);
            return SubmitOutcome::Invalid;
        }

        let new_bookmark = self.form.to_new_bookmark();
        match self.api.create(&new_bookmark).await {
            Ok(created) => {
                tracing::info!(id = %created.id, url = %created.url, "bookmark created");
                self.form.clear();
                self.refresh_after_write().await;
                SubmitOutcome::Created(created)
            }
            Err(err) => {
                tracing::warn!(error = %err, "create failed");
                prompter.alert(&err.user_message());
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Prompts for a replacement title and sends it as a partial update.
    ///
    /// The current title is shown in the question but not offered as a
    /// default, so an empty answer always skips the request.
    async fn edit_title(&mut self, id: &str, prompter: &mut dyn Prompter) -> EditOutcome {
        let question = match self.find(id) {
            Some(current) => format!("{} (was \"{}\")", EDIT_TITLE_PROMPT, current.title),
            None => EDIT_TITLE_PROMPT.to_string(),
        };
        let title = match prompter.prompt(&question, "") {
            Some(answer) if !answer.trim().is_empty() => answer.trim().to_string(),
            _ => return EditOutcome::Skipped,
        };

        let outcome = match self.api.update(id, &BookmarkPatch::title(title)).await {
            Ok(updated) => {
                tracing::info!(id = %updated.id, "bookmark updated");
                EditOutcome::Updated(updated)
            }
            Err(err) => {
                tracing::warn!(%id, error = %err, "update failed");
                EditOutcome::Failed(err)
            }
        };
        self.refresh_after_write().await;
        outcome
    }

    /// Asks for confirmation, then removes the bookmark.
    async fn delete(&mut self, id: &str, prompter: &mut dyn Prompter) -> DeleteOutcome {
        if !prompter.confirm(DELETE_CONFIRMATION) {
            return DeleteOutcome::Cancelled;
        }

        let outcome = match self.api.delete(id).await {
            Ok(()) => {
                tracing::info!(%id, "bookmark deleted");
                DeleteOutcome::Deleted
            }
            Err(err) => {
                tracing::warn!(%id, error = %err, "delete failed");
                DeleteOutcome::Failed(err)
            }
        };
        self.refresh_after_write().await;
        outcome
    }
}
