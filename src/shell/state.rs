use crate::modules::items::adapters::outbound::items_in_memory::InMemoryItemsStore;
use crate::modules::items::use_cases::create_item::handler::CreateItemHandler;
use crate::modules::items::use_cases::delete_item::handler::DeleteItemHandler;
use crate::modules::items::use_cases::get_item::handler::GetItemHandler;
use crate::modules::items::use_cases::list_items::handler::ListItemsHandler;
use crate::modules::items::use_cases::update_item::handler::UpdateItemHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_handler: Arc<ListItemsHandler<InMemoryItemsStore>>,
    pub get_handler: Arc<GetItemHandler<InMemoryItemsStore>>,
    pub create_handler: Arc<CreateItemHandler<InMemoryItemsStore>>,
    pub update_handler: Arc<UpdateItemHandler<InMemoryItemsStore>>,
    pub delete_handler: Arc<DeleteItemHandler<InMemoryItemsStore>>,
    pub default_limit: usize,
}

impl AppState {
    /// Wires every use case onto the one store instance.
    pub fn new(store: Arc<InMemoryItemsStore>, default_limit: usize) -> Self {
        Self {
            list_handler: Arc::new(ListItemsHandler::new(store.clone())),
            get_handler: Arc::new(GetItemHandler::new(store.clone())),
            create_handler: Arc::new(CreateItemHandler::new(store.clone())),
            update_handler: Arc::new(UpdateItemHandler::new(store.clone())),
            delete_handler: Arc::new(DeleteItemHandler::new(store)),
            default_limit,
        }
    }
}
