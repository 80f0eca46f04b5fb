// Composition root for the items service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory store and wire it into the use case handlers.
// - Expose the handlers over REST and GraphQL.

pub mod graphql;
pub mod http;
pub mod state;
