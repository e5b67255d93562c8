pub mod api_response;
pub mod grid;
pub mod logger;
pub mod serde_helpers;
