pub mod modules {
    pub mod calendar {
        pub mod core {
            pub mod event;
            pub mod filter;
            pub mod ports;
        }
        pub mod application {
            pub mod event_service;
        }
        pub mod use_cases {
            pub mod add_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod remove_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod event_store_in_memory;
            }
        }
    }
}

pub mod shell;
