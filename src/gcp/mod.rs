pub mod api;
pub mod claims;
pub mod client;
pub mod oauth;
