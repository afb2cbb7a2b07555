use crate::error::ProtocolError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Negotiation blob produced by a peer connection.
///
/// The relay never looks inside; it is forwarded byte-for-byte as JSON. Peers
/// usually put a session description here (`{"type": "offer", "sdp": "..."}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalPayload(Value);

impl SignalPayload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn encode<T: Serialize>(value: &T) -> Result<Self, ProtocolError> {
        Ok(Self(serde_json::to_value(value)?))
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ProtocolError> {
        Ok(T::deserialize(&self.0)?)
    }

    /// `type` of a session-description payload (`offer`, `answer`, ...).
    pub fn kind(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    pub fn sdp(&self) -> Result<&str, ProtocolError> {
        self.0
            .get("sdp")
            .and_then(Value::as_str)
            .ok_or(ProtocolError::MissingField("sdp"))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for SignalPayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
