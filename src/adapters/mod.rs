// Adapters layer: concrete implementations of the domain ports (backend
// HTTP client, location sources).

pub mod api_client;
pub mod location;
