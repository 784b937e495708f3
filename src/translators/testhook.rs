//! Echo endpoint used to check that a sender can reach the relay.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct Echo {
    pub received: bool,
    pub body: Value,
}

pub fn echo(body: Value) -> Echo {
    Echo {
        received: true,
        body,
    }
}
