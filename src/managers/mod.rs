// Bookmark client state managers
// Managers hold UI state and keep it in sync with the remote collection.

pub mod bookmark_view;
