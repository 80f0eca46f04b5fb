use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use serde_json::Value;

use crate::modules::items::adapters::inbound::http::json_body;
use crate::modules::items::use_cases::create_item::dto::ItemCreateDto;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let dto: ItemCreateDto = match json_body(body) {
        Ok(dto) => dto,
        Err(response) => return response,
    };

    match state.create_handler.handle(dto).await {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(err) => err.into_response(),
    }
}
