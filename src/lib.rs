//! Folio - a minimal file-backed personal wiki
//!
//! Pages are plain text files on disk, one file per title, served over HTTP
//! with three operations: view, edit, save.

pub mod components;
pub mod config;
pub mod errors;
pub mod extract;
pub mod handlers;
pub mod logger;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use components::Templates;
pub use config::Config;
pub use errors::WikiError;
pub use extract::{PageTitle, TitlePattern};
pub use handlers::router;
pub use services::PageStore;
pub use types::{AppState, Page};
