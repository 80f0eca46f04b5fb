pub mod shared {
    pub mod config;
    pub mod core {
        pub mod patch;
        pub mod validation;
    }
}

pub mod modules {
    pub mod items {
        pub mod core {
            pub mod attributes_dto;
            pub mod errors;
            pub mod item;
            pub mod ports;
            pub mod validators;
        }
        pub mod use_cases {
            pub mod create_item {
                pub mod dto;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_item {
                pub mod dto;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_item {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_item {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_items {
                pub mod handler;
                pub mod query;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
            pub mod outbound {
                pub mod items_in_memory;
            }
        }
    }
}

pub mod shell;
