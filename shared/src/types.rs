//! Common types used across the dashboard

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kinds of form fields, deciding how a raw UI value is coerced
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Numeric,
    Boolean,
    Categorical,
    /// Comma-delimited list of numbers, e.g. `25.3,26.1,26.8`
    NumericList,
    Date,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Numeric => "numeric",
            FieldKind::Boolean => "boolean",
            FieldKind::Categorical => "categorical",
            FieldKind::NumericList => "numeric_list",
            FieldKind::Date => "date",
        }
    }
}

/// Stored value of a single form field.
///
/// Numeric and list fields keep the raw text the user typed; parsing happens
/// only when a payload is built, so intermediate keystrokes never fail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Numeric(String),
    Boolean(bool),
    Categorical(String),
    NumericList(String),
    Date(NaiveDate),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Numeric(_) => FieldKind::Numeric,
            FieldValue::Boolean(_) => FieldKind::Boolean,
            FieldValue::Categorical(_) => FieldKind::Categorical,
            FieldValue::NumericList(_) => FieldKind::NumericList,
            FieldValue::Date(_) => FieldKind::Date,
        }
    }

    /// Raw text of a text-backed field. `None` for booleans and dates.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Numeric(s) | FieldValue::Categorical(s) | FieldValue::NumericList(s) => {
                Some(s.as_str())
            }
            FieldValue::Boolean(_) | FieldValue::Date(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Whether the value counts as filled in for required-field checks
    pub fn is_filled(&self) -> bool {
        match self {
            FieldValue::Boolean(_) | FieldValue::Date(_) => true,
            other => other.as_text().map(|s| !s.trim().is_empty()).unwrap_or(false),
        }
    }
}

/// Which forecast entry point a request is built for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ForecastMode {
    /// Graph page: each driver is sent as a one-element sequence and the
    /// service repeats it across the horizon.
    Graph,
    /// List page: each driver is replicated client-side across the horizon.
    Broadcast,
}

impl ForecastMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastMode::Graph => "graph",
            ForecastMode::Broadcast => "broadcast",
        }
    }
}

impl std::str::FromStr for ForecastMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "graph" | "single-day-graph" => Ok(ForecastMode::Graph),
            "broadcast" | "multi-day-broadcast" => Ok(ForecastMode::Broadcast),
            other => Err(format!("unknown forecast mode: {}", other)),
        }
    }
}
