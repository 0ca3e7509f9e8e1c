mod dto;
mod loader;

pub use dto::{ApiKey, AppConfig, UpstreamConfig};
pub use loader::{DEFAULT_CICERO_BASE_URL, DEFAULT_CONGRESS_BASE_URL, load_config};
