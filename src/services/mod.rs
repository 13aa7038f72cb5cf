// Bookmark client services
// Services provide the REST client, settings and logging setup.

pub mod api_client;
pub mod logging;
pub mod settings_engine;
