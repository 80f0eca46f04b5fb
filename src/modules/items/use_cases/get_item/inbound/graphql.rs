use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::items::adapters::inbound::graphql::GqlItem;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct GetItemQueryRoot;

#[Object]
impl GetItemQueryRoot {
    async fn item(&self, context: &Context<'_>, guid: String) -> GqlResult<GqlItem> {
        let state = context.data_unchecked::<AppState>();
        let item = state.get_handler.handle(&guid).await.map_err(|e| e.extend())?;
        Ok(item.into())
    }
}
