pub mod client;
pub mod dto;
pub mod handler;

pub use client::{CongressClient, MISSING_STATE_MESSAGE};
pub use dto::FetchCongressQuery;
pub use handler::handle_fetch_congress;
