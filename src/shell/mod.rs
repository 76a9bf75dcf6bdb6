// Composition root.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the repository adapters.
// - Wire adapters into use case handlers and expose them over HTTP and GraphQL.

pub mod config;
pub mod error;
pub mod graphql;
pub mod http;
pub mod state;
