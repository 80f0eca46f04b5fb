use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::items::use_cases::list_items::query::ListItemsQuery;
use crate::shell::state::AppState;

// `limit` stays a string so malformed values get our own error message.
#[derive(Deserialize)]
pub struct ListItemsParams {
    pub query: Option<String>,
    pub limit: Option<String>,
}

pub async fn handle(State(state): State<AppState>, Query(params): Query<ListItemsParams>) -> Response {
    let query = match ListItemsQuery::new(
        params.query.as_deref(),
        params.limit.as_deref(),
        state.default_limit,
    ) {
        Ok(query) => query,
        Err(err) => return err.into_response(),
    };

    match state.list_handler.handle(query).await {
        Ok(items) => Json(items).into_response(),
        Err(err) => err.into_response(),
    }
}
