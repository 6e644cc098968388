pub mod shared {
    pub mod http {
        pub mod json_error;
    }
    pub mod infrastructure {
        pub mod bank_locks;
        pub mod json_file;
    }
}

pub mod modules {
    pub mod occurrences {
        pub mod core {
            pub mod command_catalog;
            pub mod document;
            pub mod password;
        }
        pub mod use_cases {
            pub mod application_error;
            pub mod add_occurrence {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_occurrence {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_occurrences {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_commands {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_errors;
            }
            pub mod outbound {
                pub mod occurrence_store;
                pub mod occurrence_store_in_memory;
                pub mod occurrence_store_json_file;
                pub mod settings_store;
                pub mod settings_store_in_memory;
                pub mod settings_store_json_file;
            }
        }
    }
}

pub mod shell;
