//! Metric batches.

use std::collections::BTreeMap;

use crate::field::FieldValue;

/// One measurement sample: a named field set, built per poll cycle and
/// discarded after the write.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricBatch {
    measurement: String,
    fields: BTreeMap<String, FieldValue>,
}

impl MetricBatch {
    /// Start an empty batch for `measurement`.
    #[must_use]
    pub fn new(measurement: impl Into<String>) -> Self {
        Self {
            measurement: measurement.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Insert one field, replacing any previous value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Measurement name.
    #[must_use]
    pub fn measurement(&self) -> &str {
        &self.measurement
    }

    /// The field set, deterministically ordered by key.
    #[must_use]
    pub fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }

    /// Whether the batch carries no fields. The line protocol has no
    /// representation for a fieldless point, so such a batch must not be
    /// written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Encode as one InfluxDB line-protocol line: no trailing newline,
    /// no timestamp (the server stamps arrival time).
    #[must_use]
    pub fn to_line_protocol(&self) -> String {
        let fields = self
            .fields
            .iter()
            .map(|(key, value)| format!("{}={}", escape_key(key), value.to_wire()))
            .collect::<Vec<_>>()
            .join(",");
        format!("{} {fields}", escape_measurement(&self.measurement))
    }
}

fn escape_measurement(s: &str) -> String {
    s.replace(',', "\\,").replace(' ', "\\ ")
}

fn escape_key(s: &str) -> String {
    s.replace(',', "\\,").replace('=', "\\=").replace(' ', "\\ ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_typed_fields_deterministically() {
        let mut batch = MetricBatch::new("lelit");
        batch.insert("mode", "BrewPriority");
        batch.insert("actual_temp", 91i32);
        batch.insert("heating_element_on", true);
        batch.insert("load", 0.25f64);

        assert_eq!(
            batch.to_line_protocol(),
            "lelit actual_temp=91i,heating_element_on=true,load=0.25,mode=\"BrewPriority\""
        );
    }

    #[test]
    fn error_batch_encodes_single_field() {
        let mut batch = MetricBatch::new("lelit");
        batch.insert("error", 1i64);
        assert_eq!(batch.to_line_protocol(), "lelit error=1i");
    }

    #[test]
    fn escapes_measurement_and_keys() {
        let mut batch = MetricBatch::new("my measurement");
        batch.insert("a key=x", 1i64);
        assert_eq!(
            batch.to_line_protocol(),
            "my\\ measurement a\\ key\\=x=1i"
        );
    }

    #[test]
    fn insert_replaces_previous_value() {
        let mut batch = MetricBatch::new("m");
        batch.insert("k", 1i64);
        batch.insert("k", 2i64);
        assert_eq!(batch.to_line_protocol(), "m k=2i");
    }

    #[test]
    fn fresh_batch_is_empty() {
        let batch = MetricBatch::new("m");
        assert!(batch.is_empty());
        assert_eq!(batch.measurement(), "m");
    }
}
