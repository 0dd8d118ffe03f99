use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Acknowledgement body returned after a performance save.
#[derive(Serialize, Debug)]
pub struct SaveAck {
    pub status: &'static str,
    pub message: &'static str,
}
