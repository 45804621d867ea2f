//! Parsed `GET /get_counts` responses.

use crate::config::COUNT_PREFIX;
use crate::error::ClientError;
use crate::mode::{Channel, ExerciseMode};
use serde::de::Error as _;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Full set of counts returned by one poll.
///
/// Kept as the raw JSON object: only the field for the channel being read is
/// validated, so a bad value elsewhere in the body does not spoil the tick.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct CountSnapshot {
    fields: Map<String, Value>,
}

impl CountSnapshot {
    /// Parse a response body. Anything other than a JSON object is a decode error.
    pub fn from_json(body: &str) -> Result<Self, ClientError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Count for `channel`. A missing or `null` field reads as 0; a field that
    /// is not a non-negative integer is a decode error.
    pub fn count(&self, channel: Channel) -> Result<u32, ClientError> {
        let name = channel.field_name();
        match self.fields.get(name) {
            None | Some(Value::Null) => Ok(0),
            Some(value) => value
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| {
                    ClientError::Decode(serde_json::Error::custom(format!(
                        "field `{}` is not a count: {}",
                        name, value
                    )))
                }),
        }
    }

    pub fn count_for(&self, mode: ExerciseMode) -> Result<u32, ClientError> {
        self.count(mode.channel())
    }
}

/// Text rendered into the counter widget.
pub fn format_count(count: u32) -> String {
    format!("{}{}", COUNT_PREFIX, count)
}
