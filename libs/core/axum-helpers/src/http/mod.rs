//! HTTP middleware (CORS, security headers) and shared response bodies.

pub mod cors;
pub mod message;
pub mod security;

pub use cors::cors_layer_from_env;
pub use message::MessageResponse;
pub use security::security_headers;
