use crate::error::ProtocolError;
use serde::{Serialize, de::DeserializeOwned};

/// A message that travels as one JSON text frame over the signaling channel.
pub trait Frame: Serialize + DeserializeOwned + Send + Sync + 'static {
    fn to_json(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }

    fn from_json(text: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(text)?)
    }
}
