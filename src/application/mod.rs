//! Application layer services implementing business logic.
//!
//! Services consume the store trait and a code generator and provide a clean
//! API for HTTP handlers and the admin CLI.
//!
//! - [`services::shorten_service::ShortenService`] - Short code creation and resolution

pub mod services;
