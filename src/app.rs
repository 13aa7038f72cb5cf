//! App core for the bookmark client.
//!
//! Owns the settings engine, the effective settings and the bookmark view,
//! and executes parsed terminal commands against them.

use std::io::Write;

use crate::managers::bookmark_view::{
    BookmarkView, BookmarkViewTrait, DeleteOutcome, EditOutcome, SubmitOutcome,
};
use crate::services::api_client::{BookmarkApi, HttpBookmarkApi};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::bookmark::BookmarkForm;
use crate::types::errors::{ApiError, SettingsError};
use crate::types::settings::ClientSettings;
use crate::ui::commands::{Command, ConfigAction, HELP};
use crate::ui::prompter::Prompter;
use crate::ui::render::render_list;

/// Whether the REPL should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Central application struct.
pub struct App<A: BookmarkApi = HttpBookmarkApi> {
    pub settings_engine: SettingsEngine,
    /// Loaded settings with environment overrides, as used by this run.
    pub settings: ClientSettings,
    pub view: BookmarkView<A>,
}

impl App<HttpBookmarkApi> {
    /// Loads settings (with environment overrides) and builds the HTTP client.
    pub fn new(config_path: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings_engine = SettingsEngine::new(config_path);
        settings_engine.load()?;
        let api = HttpBookmarkApi::new(&settings_engine.effective_settings())?;
        Ok(Self::with_api(settings_engine, api))
    }
}

impl<A: BookmarkApi> App<A> {
    pub fn with_api(settings_engine: SettingsEngine, api: A) -> Self {
        Self {
            settings: settings_engine.effective_settings(),
            settings_engine,
            view: BookmarkView::new(api),
        }
    }

    /// Initial fetch. A failure leaves the list empty and is reported.
    pub async fn startup(&mut self, out: &mut dyn Write) {
        tracing::info!(api_url = %self.settings.api_url, "starting bookmark client");
        match self.view.refresh().await {
            Ok(()) => self.print_list(out),
            Err(err) => {
                tracing::warn!(error = %err, "initial fetch failed");
                report_fetch_failure(&err, out);
            }
        }
    }

    pub async fn execute(
        &mut self,
        command: Command,
        prompter: &mut dyn Prompter,
        out: &mut dyn Write,
    ) -> Flow {
        match command {
            Command::List => self.print_list(out),
            Command::Refresh => self.refresh_and_print(out).await,
            Command::Search(text) => {
                self.view.set_search(&text);
                self.print_list(out);
            }
            Command::Tag(tag) => {
                if let Err(err) = self.view.set_active_tag(&tag).await {
                    tracing::warn!(error = %err, "filtered fetch failed");
                    report_fetch_failure(&err, out);
                }
                self.print_list(out);
            }
            Command::ClearTag => {
                if let Err(err) = self.view.clear_active_tag().await {
                    tracing::warn!(error = %err, "unfiltered fetch failed");
                    report_fetch_failure(&err, out);
                }
                self.print_list(out);
            }
            Command::Add => {
                if fill_form(self.view.form_mut(), prompter) {
                    if let SubmitOutcome::Created(bm) = self.view.submit_form(prompter).await {
                        let _ = writeln!(out, "Added [{}] {}", bm.id, bm.title);
                        self.print_list(out);
                    }
                }
            }
            Command::Edit(id) => {
                if let EditOutcome::Updated(_) = self.view.edit_title(&id, prompter).await {
                    self.print_list(out);
                }
            }
            Command::Delete(id) => {
                if self.view.delete(&id, prompter).await == DeleteOutcome::Deleted {
                    self.print_list(out);
                }
            }
            Command::Config(action) => {
                if let Err(err) = self.configure(action, out) {
                    let _ = writeln!(out, "{}", err);
                }
            }
            Command::Help => {
                let _ = writeln!(out, "{}", HELP);
            }
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    async fn refresh_and_print(&mut self, out: &mut dyn Write) {
        if let Err(err) = self.view.refresh().await {
            tracing::warn!(error = %err, "refresh failed");
            report_fetch_failure(&err, out);
        }
        self.print_list(out);
    }

    /// Shows or changes the persisted settings. Changes are saved at once
    /// but the HTTP client keeps the settings it was started with.
    fn configure(
        &mut self,
        action: ConfigAction,
        out: &mut dyn Write,
    ) -> Result<(), SettingsError> {
        match action {
            ConfigAction::Show => {
                let json = serde_json::to_string_pretty(self.settings_engine.get_settings())
                    .map_err(|e| SettingsError::SerializationError(e.to_string()))?;
                let _ = writeln!(out, "# {}", self.settings_engine.get_config_path());
                let _ = writeln!(out, "{}", json);
            }
            ConfigAction::Set { key, value } => {
                // Bare words like `http://host` are taken as strings.
                let value = serde_json::from_str::<serde_json::Value>(&value)
                    .unwrap_or(serde_json::Value::String(value));
                self.settings_engine.set_value(&key, value)?;
                tracing::info!(%key, path = %self.settings_engine.get_config_path(), "setting saved");
                let _ = writeln!(out, "Saved {} (applies on next start)", key);
            }
            ConfigAction::Reset => {
                self.settings_engine.reset()?;
                tracing::info!(path = %self.settings_engine.get_config_path(), "settings reset");
                let _ = writeln!(out, "Settings reset to defaults (applies on next start)");
            }
        }
        Ok(())
    }

    fn print_list(&self, out: &mut dyn Write) {
        let visible = self.view.visible();
        let _ = write!(
            out,
            "{}",
            render_list(&visible, self.view.active_tag(), self.view.search())
        );
    }
}

fn report_fetch_failure(err: &ApiError, out: &mut dyn Write) {
    let _ = writeln!(out, "Could not load bookmarks: {}", err);
}

/// Prompts for each form field, offering the current value as default.
/// Returns `false` if the user cancelled part way.
pub fn fill_form(form: &mut BookmarkForm, prompter: &mut dyn Prompter) -> bool {
    let fields: [(&str, &mut String); 4] = [
        ("URL", &mut form.url),
        ("Title", &mut form.title),
        ("Description", &mut form.description),
        ("Tags (comma separated)", &mut form.tags),
    ];
    for (label, value) in fields {
        match prompter.prompt(label, value) {
            Some(answer) => *value = answer,
            None => return false,
        }
    }
    true
}
