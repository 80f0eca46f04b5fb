use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::items::use_cases::create_item::inbound::graphql::CreateItemMutation;
use crate::modules::items::use_cases::delete_item::inbound::graphql::DeleteItemMutation;
use crate::modules::items::use_cases::get_item::inbound::graphql::GetItemQueryRoot;
use crate::modules::items::use_cases::list_items::inbound::graphql::ListItemsQueryRoot;
use crate::modules::items::use_cases::update_item::inbound::graphql::UpdateItemMutation;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListItemsQueryRoot, GetItemQueryRoot);

#[derive(MergedObject, Default)]
pub struct MutationRoot(CreateItemMutation, UpdateItemMutation, DeleteItemMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
