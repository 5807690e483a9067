use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::error::RenderError;

/// The two documents the extractor writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Companies,
    Themes,
}

impl Resource {
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Companies => "active_company_cards.json",
            Self::Themes => "macro_themes.json",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Companies => "company cards",
            Self::Themes => "macro themes",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EvidenceItem {
    #[serde(default, deserialize_with = "lenient::text")]
    pub snippet: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub source_pdf: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Theme {
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub evidence_snippets: Vec<EvidenceItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Company {
    #[serde(default, deserialize_with = "lenient::text")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub ticker_raw: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub ticker: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub recommendation: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub latest_update: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ThemePayload {
    #[serde(default, deserialize_with = "lenient::records")]
    pub macro_themes: Vec<Theme>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CompanyPayload {
    #[serde(default, deserialize_with = "lenient::records")]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub note: Option<Value>,
}

impl ThemePayload {
    pub fn from_value(value: Value) -> Result<Self, RenderError> {
        lenient::payload(Resource::Themes, value)
    }
}

impl CompanyPayload {
    pub fn from_value(value: Value) -> Result<Self, RenderError> {
        lenient::payload(Resource::Companies, value)
    }
}

/// Decoders that never reject a present-but-malformed field.
mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::Resource;
    use crate::error::RenderError;

    /// Strings pass through, truthy scalars become their text, everything
    /// else is absent.
    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.and_then(coerce_text))
    }

    /// Non-arrays are empty; non-object elements become all-absent records.
    pub fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Array(items) => items.into_iter().map(record).collect(),
            _ => Vec::new(),
        })
    }

    pub fn payload<T>(resource: Resource, value: Value) -> Result<T, RenderError>
    where
        T: DeserializeOwned + Default,
    {
        match value {
            Value::Null => Err(RenderError::NullPayload { resource }),
            value => Ok(record(value)),
        }
    }

    fn record<T>(value: Value) -> T
    where
        T: DeserializeOwned + Default,
    {
        if !value.is_object() {
            return T::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }

    fn coerce_text(value: Value) -> Option<String> {
        match value {
            Value::String(text) => Some(text),
            Value::Bool(true) => Some("true".to_string()),
            Value::Number(number) => number_text(&number),
            _ => None,
        }
    }

    /// Zero is falsy. Whole floats print without a fraction (`5.0` -> `5`).
    fn number_text(number: &serde_json::Number) -> Option<String> {
        if number.is_i64() || number.is_u64() {
            return (number.as_f64() != Some(0.0)).then(|| number.to_string());
        }
        let value = number.as_f64()?;
        (value != 0.0).then(|| format!("{value}"))
    }
}
