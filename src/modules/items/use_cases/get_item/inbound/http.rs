use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(guid): Path<String>) -> Response {
    match state.get_handler.handle(&guid).await {
        Ok(item) => Json(item).into_response(),
        Err(err) => err.into_response(),
    }
}
