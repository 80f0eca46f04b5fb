use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};

use serde_json::Value;

use crate::modules::items::adapters::inbound::http::json_body;
use crate::modules::items::use_cases::update_item::dto::ItemUpdateDto;
use crate::shell::state::AppState;

// The body is only read after the item is known to exist, so an unknown guid
// answers 404 even when the payload is malformed.
pub async fn handle(
    State(state): State<AppState>,
    Path(guid): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    if let Err(err) = state.get_handler.handle(&guid).await {
        return err.into_response();
    }

    let dto: ItemUpdateDto = match json_body(body) {
        Ok(dto) => dto,
        Err(response) => return response,
    };

    match state.update_handler.handle(&guid, dto).await {
        Ok(item) => Json(item).into_response(),
        Err(err) => err.into_response(),
    }
}
