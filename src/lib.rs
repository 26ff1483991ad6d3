// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) parses arguments and hands off to `cli`.
//
// Module responsibilities:
// - `api`: the typed HTTP client for the SmartCurator backend (login,
//   register, quick-add, content listing).
// - `types` / `error`: wire shapes and the flat error type.
// - `config`: base URL resolution from the environment.
// - `forms`: form state and submit logic, independent of the terminal.
// - `showcase`: static hero, architecture and roadmap sections.
// - `ui` / `cli`: the interactive menu and the one-shot subcommands.
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod forms;
pub mod showcase;
pub mod types;
pub mod ui;

pub use api::{ApiClient, RequestOptions};
pub use config::Config;
pub use error::ApiError;
