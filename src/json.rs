use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub static JSON_SETTINGS: Lazy<JsonSettings> = Lazy::new(JsonSettings::default);

#[derive(Clone, Copy, Debug)]
pub struct JsonSettings {
    case_insensitive_fields: bool,
}

impl Default for JsonSettings {
    fn default() -> Self {
        Self::new(true)
    }
}

impl JsonSettings {
    pub const fn new(case_insensitive_fields: bool) -> Self {
        Self {
            case_insensitive_fields,
        }
    }

    pub fn deserialize<T>(&self, body: &str) -> serde_json::Result<T>
    where
        T: DeserializeOwned,
    {
        if self.case_insensitive_fields {
            let value = serde_json::from_str(body)?;
            serde_json::from_value(fold_keys(value))
        } else {
            serde_json::from_str(body)
        }
    }
}

fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_lowercase(), fold_keys(value)))
                .collect(),
        ),
        Value::Array(values) => Value::Array(values.into_iter().map(fold_keys).collect()),
        other => other,
    }
}
