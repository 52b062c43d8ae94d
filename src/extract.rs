use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use regex::Regex;

use crate::errors::WikiError;
use crate::types::AppState;

/// Allow-list for page titles: one or more alphanumeric characters, nothing
/// else. Anything outside this never reaches the store.
const TITLE_PATTERN: &str = "^[a-zA-Z0-9]+$";

/// Compiled title allow-list, built once at startup and carried in
/// `AppState` rather than living in a global.
#[derive(Clone)]
pub struct TitlePattern {
    re: Regex,
}

impl TitlePattern {
    pub fn new() -> Result<Self, WikiError> {
        let re = Regex::new(TITLE_PATTERN)?;
        Ok(Self { re })
    }

    pub fn validate<'a>(&self, raw: &'a str) -> Result<&'a str, WikiError> {
        if self.re.is_match(raw) {
            Ok(raw)
        } else {
            log::warn!("Rejected invalid title: '{}'", raw);
            Err(WikiError::InvalidTitle)
        }
    }
}

/// Path segment validated against the title allow-list.
///
/// Handlers taking `PageTitle` only ever see titles that passed the
/// pattern; requests with anything else are answered with not-found before
/// the handler runs.
pub struct PageTitle(pub String);

#[async_trait]
impl FromRequestParts<AppState> for PageTitle {
    type Rejection = WikiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| WikiError::NotFound)?;
        state.titles.validate(&raw)?;
        Ok(PageTitle(raw))
    }
}
