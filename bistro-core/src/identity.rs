use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A restaurant customer. Identity only; ordering actions live with the order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }
}
