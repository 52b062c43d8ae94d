use axum::{
    Form, Router,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;

use crate::errors::WikiError;
use crate::extract::PageTitle;
use crate::types::{AppState, Page};
use crate::utils::last_modified_html;

/// Build the application router.
///
/// Anything outside these routes, including titles that fail the
/// allow-list, gets a not-found response.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/view/:title", get(handle_view))
        .route("/edit/:title", get(handle_edit))
        .route("/save/:title", post(handle_save))
        .with_state(state)
}

/// The landing page is just the FrontPage article.
pub async fn handle_root() -> Redirect {
    Redirect::to("/view/FrontPage")
}

/// Render a page read-only. A missing page is "not yet created", so the
/// reader is sent to the editor for that title instead of getting an error.
pub async fn handle_view(
    State(state): State<AppState>,
    PageTitle(title): PageTitle,
) -> Result<Response, WikiError> {
    log::info!("View request for '{}'", title);
    match state.store.load(&title) {
        Ok(page) => {
            let modified = last_modified_html(&state.store.page_path(&title));
            Ok(Html(state.templates.render_view(&page, &modified)).into_response())
        }
        Err(WikiError::NotFound) => Ok(Redirect::to(&format!("/edit/{}", title)).into_response()),
        Err(e) => Err(e),
    }
}

/// Render the edit form, blank when the page does not exist yet.
pub async fn handle_edit(
    State(state): State<AppState>,
    PageTitle(title): PageTitle,
) -> Result<Html<String>, WikiError> {
    log::info!("Edit request for '{}'", title);
    let page = match state.store.load(&title) {
        Ok(page) => page,
        Err(WikiError::NotFound) => Page::new(title, ""),
        Err(e) => return Err(e),
    };
    Ok(Html(state.templates.render_edit(&page)))
}

#[derive(Deserialize)]
pub struct SaveForm {
    pub body: String,
}

/// Persist the submitted body and send the writer back to the rendered
/// page. Write failures surface as a server error with the error text.
pub async fn handle_save(
    State(state): State<AppState>,
    PageTitle(title): PageTitle,
    Form(form): Form<SaveForm>,
) -> Result<Redirect, WikiError> {
    log::info!("Save request for '{}', {} bytes", title, form.body.len());
    let target = format!("/view/{}", title);
    let page = Page::new(title, form.body.into_bytes());
    state.store.save(&page)?;
    Ok(Redirect::to(&target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::components::Templates;
    use crate::extract::TitlePattern;
    use crate::services::PageStore;

    fn test_state(dir: &TempDir) -> AppState {
        AppState {
            store: PageStore::new(dir.path().to_path_buf()),
            templates: Arc::new(Templates::load(Path::new("/nonexistent")).unwrap()),
            titles: TitlePattern::new().unwrap(),
        }
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_form(uri: &str, form: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn root_redirects_to_front_page() {
        let dir = TempDir::new().unwrap();
        let app = router(test_state(&dir));
        let response = app.oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/view/FrontPage");
    }

    #[tokio::test]
    async fn view_of_missing_page_redirects_to_edit() {
        let dir = TempDir::new().unwrap();
        let app = router(test_state(&dir));
        let response = app.oneshot(get("/view/Ghost")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/edit/Ghost");
    }

    #[tokio::test]
    async fn edit_of_missing_page_renders_blank_form() {
        let dir = TempDir::new().unwrap();
        let app = router(test_state(&dir));
        let response = app.oneshot(get("/edit/Ghost")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("action=\"/save/Ghost\""));
        assert!(html.contains("></textarea>"));
    }

    #[tokio::test]
    async fn save_then_view_round_trips() {
        let dir = TempDir::new().unwrap();
        let app = router(test_state(&dir));

        let response = app
            .clone()
            .oneshot(post_form("/save/Test1", "body=hello"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/view/Test1");

        let response = app.oneshot(get("/view/Test1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("hello"));
        assert!(html.contains("<h1>Test1</h1>"));
    }

    #[tokio::test]
    async fn save_replaces_existing_page() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);
        state.store.save(&Page::new("Draft", "old words")).unwrap();
        let app = router(state);

        let response = app
            .clone()
            .oneshot(post_form("/save/Draft", "body=new+words"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let html = body_text(app.oneshot(get("/view/Draft")).await.unwrap()).await;
        assert!(html.contains("new words"));
        assert!(!html.contains("old words"));
    }

    #[tokio::test]
    async fn view_escapes_stored_markup() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);
        state
            .store
            .save(&Page::new("Evil", "<script>alert(1)</script>"))
            .unwrap();
        let app = router(state);

        let html = body_text(app.oneshot(get("/view/Evil")).await.unwrap()).await;
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert"));
    }

    #[tokio::test]
    async fn invalid_titles_are_not_found() {
        let dir = TempDir::new().unwrap();
        let app = router(test_state(&dir));
        for uri in ["/view/Bad.Title", "/edit/a%2Fb", "/view/sp%20ace"] {
            let response = app.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri {}", uri);
        }
        let response = app
            .oneshot(post_form("/save/..", "body=x"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unmatched_paths_are_not_found() {
        let dir = TempDir::new().unwrap();
        let app = router(test_state(&dir));
        for uri in ["/nope", "/view/a/b", "/delete/Page"] {
            let response = app.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri {}", uri);
        }
    }
}
