// Composition root for the occurrence service.
//
// - Read config from the environment.
// - Instantiate the JSON file stores.
// - Wire them into the use case handlers and the HTTP router.

pub mod config;
pub mod cors;
pub mod http;
pub mod state;
