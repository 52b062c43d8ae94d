use std::borrow::Cow;
use std::sync::Arc;

use crate::components::Templates;
use crate::extract::TitlePattern;
use crate::services::PageStore;

/// The basic content unit: a title and a body of text.
///
/// The body is kept as raw bytes so a load returns exactly what the
/// preceding save wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub body: Vec<u8>,
}

impl Page {
    pub fn new(title: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Body as text for rendering into templates.
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: PageStore,
    pub templates: Arc<Templates>,
    pub titles: TitlePattern,
}
