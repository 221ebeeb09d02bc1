// Composition root for the calendar service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in memory event store and wire it into the event service.
// - Expose the service over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
