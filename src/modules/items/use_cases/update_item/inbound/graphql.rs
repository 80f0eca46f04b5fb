use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::items::adapters::inbound::graphql::{GqlItem, ItemUpdateInput};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateItemMutation;

#[Object]
impl UpdateItemMutation {
    async fn update_item(
        &self,
        context: &Context<'_>,
        guid: String,
        input: ItemUpdateInput,
    ) -> GqlResult<GqlItem> {
        let state = context.data_unchecked::<AppState>();
        let item = state
            .update_handler
            .handle(&guid, input.into())
            .await
            .map_err(|e| e.extend())?;
        Ok(item.into())
    }
}
