use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::items::adapters::inbound::graphql::{GqlItem, ItemCreateInput};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateItemMutation;

#[Object]
impl CreateItemMutation {
    async fn create_item(&self, context: &Context<'_>, input: ItemCreateInput) -> GqlResult<GqlItem> {
        let state = context.data_unchecked::<AppState>();
        let item = state
            .create_handler
            .handle(input.into())
            .await
            .map_err(|e| e.extend())?;
        Ok(item.into())
    }
}
