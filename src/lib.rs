pub mod api;
pub mod cli;
pub mod fetch;
pub mod models;
pub mod prompt;
pub mod services;
pub mod settings;
pub mod summarize;
pub mod walker;
