pub mod error;
pub mod thoughts;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, patch},
};

use thoughts_db::ThoughtStore;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Box<dyn ThoughtStore>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(thoughts::index))
        .route(
            "/thoughts",
            get(thoughts::list_thoughts).post(thoughts::create_thought),
        )
        .route("/thoughts/{id}", get(thoughts::get_thought))
        .route("/thoughts/{id}/like", patch(thoughts::like_thought))
        .with_state(state)
}
