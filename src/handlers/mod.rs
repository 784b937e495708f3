pub mod extractors;
pub mod health;
pub mod hooks;

pub use extractors::{DeployhqBody, JsonPayload};
