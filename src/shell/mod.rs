// Composition root.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate concrete store implementations.
// - Wire stores into command and query handlers.
// - Expose the HTTP router and its inbound handlers.

pub mod http;
pub mod inbound;
pub mod state;
