use crate::compat::{String, ToString, Vec};
use crate::error::{Error, ErrorKind, Result};
use crate::update::Update;
use crate::value::ParamValue;
use serde_json::Value;

/// Objects become mappings and arrays become sequences; any other top-level
/// value is rejected.
impl TryFrom<&Value> for Update {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| Ok((key.clone(), param_value(value)?)))
                .collect::<Result<Vec<(String, ParamValue)>>>()
                .map(Update::Mapping),
            Value::Array(items) => items
                .iter()
                .map(Update::try_from)
                .collect::<Result<Vec<Update>>>()
                .map(Update::Sequence),
            other => {
                tracing::debug!(input = %other, "rejected update input");
                Err(Error::new(ErrorKind::InvalidInput, other.to_string()))
            }
        }
    }
}

fn param_value(value: &Value) -> Result<ParamValue> {
    Ok(match value {
        Value::Null => ParamValue::Null,
        Value::Bool(b) => ParamValue::Bool(*b),
        Value::Number(n) => n.as_i64().map_or_else(
            || ParamValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            ParamValue::Int,
        ),
        Value::String(s) => ParamValue::Str(s.clone()),
        Value::Array(_) | Value::Object(_) => {
            tracing::debug!(input = %value, "rejected nested parameter value");
            return Err(Error::new(ErrorKind::InvalidInput, value.to_string()));
        }
    })
}
