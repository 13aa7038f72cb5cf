//! Terminal UI layer.
//!
//! Stands in for the browser page: commands are typed lines, dialogs go
//! through `Prompter`, and the list is rendered as plain text.

pub mod commands;
pub mod prompter;
pub mod render;
