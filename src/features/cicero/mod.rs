pub mod client;
pub mod dto;
pub mod helpers;

pub use client::CiceroClient;
pub use dto::{District, Location, Official};
pub use helpers::{IdentityKey, dedupe_officials, identity_key};
