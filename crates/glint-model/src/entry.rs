//! ---
//! glint_section: "02-data-model"
//! glint_subsection: "module"
//! glint_type: "source"
//! glint_scope: "code"
//! glint_description: "Log entry schema and structured payload values."
//! glint_version: "v0.0.0-prealpha"
//! glint_owner: "tbd"
//! ---
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, TimestampMilliSeconds};

use crate::errors::{ModelError, Result};
use crate::value::Value;

/// One structured log record as handed over by the producer.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Epoch milliseconds on the wire.
    #[serde_as(as = "TimestampMilliSeconds<i64>")]
    pub ts: DateTime<Utc>,
    pub topic: String,
    pub ns: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Stack of the logged error: message line followed by trace frames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    /// Stack of the error's cause, same shape as `stack`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl Entry {
    pub fn new(ts: DateTime<Utc>, topic: impl Into<String>, ns: impl Into<String>) -> Self {
        Self {
            ts,
            topic: topic.into(),
            ns: ns.into(),
            msg: None,
            data: None,
            stack: None,
            cause: None,
        }
    }

    /// Build an entry from epoch milliseconds.
    pub fn at_millis(millis: i64, topic: impl Into<String>, ns: impl Into<String>) -> Result<Self> {
        let ts = DateTime::from_timestamp_millis(millis).ok_or(ModelError::InvalidTimestamp(millis))?;
        Ok(Self::new(ts, topic, ns))
    }

    /// Decode one newline-delimited JSON record; `line` is 1-based and only
    /// used for error reporting.
    pub fn from_json_line(line: usize, text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|source| ModelError::Decode { line, source })
    }

    pub fn with_msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = Some(msg.into());
        self
    }

    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// The message when it is set and not empty.
    pub fn message(&self) -> Option<&str> {
        self.msg.as_deref().filter(|msg| !msg.is_empty())
    }

    /// The payload when it is set and truthy.
    pub fn payload(&self) -> Option<&Value> {
        self.data.as_ref().filter(|data| data.is_truthy())
    }

    pub fn error_stack(&self) -> Option<&str> {
        self.stack.as_deref().filter(|stack| !stack.is_empty())
    }

    pub fn cause_stack(&self) -> Option<&str> {
        self.cause.as_deref().filter(|cause| !cause.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_record() {
        let entry = Entry::from_json_line(1, r#"{"ts":123,"topic":"broadcast","ns":"test"}"#)
            .expect("decode entry");
        assert_eq!(entry.ts.timestamp_millis(), 123);
        assert_eq!(entry.topic, "broadcast");
        assert_eq!(entry.ns, "test");
        assert!(entry.msg.is_none() && entry.data.is_none());
        assert!(entry.stack.is_none() && entry.cause.is_none());
    }

    #[test]
    fn decodes_full_record() {
        let entry = Entry::from_json_line(
            1,
            r#"{"ts":0,"topic":"error","ns":"db","msg":"Oups","data":{"ms":12},
                "stack":"Error: Ouch!\n    at foo","cause":"Error: Cause"}"#,
        )
        .expect("decode entry");
        assert_eq!(entry.message(), Some("Oups"));
        assert_eq!(entry.payload(), Some(&Value::from_iter([("ms", 12)])));
        assert_eq!(entry.error_stack(), Some("Error: Ouch!\n    at foo"));
        assert_eq!(entry.cause_stack(), Some("Error: Cause"));
    }

    #[test]
    fn reports_line_number_on_decode_failure() {
        let err = Entry::from_json_line(7, "{not json").expect_err("must fail");
        assert!(matches!(err, ModelError::Decode { line: 7, .. }));
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn empty_and_falsy_fields_are_not_rendered() {
        let entry = Entry::at_millis(0, "ok", "ns")
            .expect("entry")
            .with_msg("")
            .with_data(0)
            .with_stack("");
        assert_eq!(entry.message(), None);
        assert_eq!(entry.payload(), None);
        assert_eq!(entry.error_stack(), None);
    }

    #[test]
    fn round_trips_through_json() {
        let entry = Entry::at_millis(1_000, "fetch", "http")
            .expect("entry")
            .with_msg("GET /")
            .with_data(Value::from_iter([("status", 200)]));
        let text = serde_json::to_string(&entry).expect("encode");
        assert_eq!(
            text,
            r#"{"ts":1000,"topic":"fetch","ns":"http","msg":"GET /","data":{"status":200}}"#
        );
        assert_eq!(Entry::from_json_line(1, &text).expect("decode"), entry);
    }

    #[test]
    fn rejects_out_of_range_timestamps() {
        assert!(matches!(
            Entry::at_millis(i64::MAX, "ok", "ns"),
            Err(ModelError::InvalidTimestamp(i64::MAX))
        ));
    }
}
