use std::fs;
use std::sync::Arc;

use tokio::net::TcpListener;

use folio::logger::Logger;
use folio::{AppState, Config, PageStore, Templates, TitlePattern, WikiError, router};

#[tokio::main]
async fn main() -> Result<(), WikiError> {
    Logger::init()?;

    let config = Config::from_env();
    fs::create_dir_all(&config.data_dir)?;

    let templates = Templates::load(&config.template_dir)?;
    let state = AppState {
        store: PageStore::new(config.data_dir.clone()),
        templates: Arc::new(templates),
        titles: TitlePattern::new()?,
    };

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    log::info!("Wiki listening on http://{}", addr);
    axum::serve(listener, router(state)).await.map_err(WikiError::from)
}
