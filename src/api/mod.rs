/// API error types and handling
pub mod errors;
/// HTTP handlers running the crew
pub mod handlers;
/// Routes configuration and setup
pub mod routes;
/// HTTP server implementation
pub mod server;
