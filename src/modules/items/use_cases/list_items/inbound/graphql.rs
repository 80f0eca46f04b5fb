use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::items::adapters::inbound::graphql::GqlItem;
use crate::modules::items::use_cases::list_items::query::ListItemsQuery;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListItemsQueryRoot;

#[Object]
impl ListItemsQueryRoot {
    /// Items ordered by index. `limit` defaults to the configured page size; 0 returns everything.
    async fn items(
        &self,
        context: &Context<'_>,
        query: Option<String>,
        limit: Option<i64>,
    ) -> GqlResult<Vec<GqlItem>> {
        let state = context.data_unchecked::<AppState>();
        let limit = limit.map(|l| l.to_string());
        let query = ListItemsQuery::new(query.as_deref(), limit.as_deref(), state.default_limit)
            .map_err(|e| e.extend())?;

        let items = state.list_handler.handle(query).await.map_err(|e| e.extend())?;
        Ok(items.into_iter().map(Into::into).collect())
    }
}
