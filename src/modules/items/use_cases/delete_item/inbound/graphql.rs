use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteItemMutation;

#[Object]
impl DeleteItemMutation {
    async fn delete_item(&self, context: &Context<'_>, guid: String) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state.delete_handler.handle(&guid).await.map_err(|e| e.extend())?;
        Ok(true)
    }
}
