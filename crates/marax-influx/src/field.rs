//! Field values for a metric batch.

/// One InfluxDB field value.
///
/// The line protocol distinguishes floats, integers, booleans and
/// strings; `From` conversions cover the types reporters actually
/// produce.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// 64-bit float, the line protocol's default numeric type.
    Float(f64),
    /// 64-bit signed integer, suffixed `i` on the wire.
    Integer(i64),
    /// Boolean.
    Boolean(bool),
    /// UTF-8 string, quoted and escaped on the wire.
    Text(String),
}

impl FieldValue {
    /// Encode this value as it appears in a line-protocol field set.
    #[must_use]
    pub fn to_wire(&self) -> String {
        match self {
            Self::Float(v) => format!("{v}"),
            Self::Integer(v) => format!("{v}i"),
            Self::Boolean(v) => v.to_string(),
            Self::Text(v) => {
                format!("\"{}\"", v.replace('\\', "\\\\").replace('"', "\\\""))
            }
        }
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        Self::Integer(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}
