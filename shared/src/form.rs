//! Form state for the prediction and forecast pages
//!
//! A form is a fixed list of [`FieldSpec`]s plus the current [`FieldValue`]
//! of each field. Updates store raw text; only booleans and dates are coerced
//! when stored. Numeric parsing is left to the payload builders.

use std::collections::HashMap;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{CategoryField, CategoryOptions, DEFAULT_HORIZON};
use crate::types::{FieldKind, FieldValue, ForecastMode};
use crate::validation::{
    default_forecast_start_date, parse_bool_token, parse_iso_date, validate_forecast_start_date,
};

/// Field names, as used by the services and the page inputs
pub mod fields {
    pub const RAINFALL_MM: &str = "Rainfall_mm";
    pub const TEMPERATURE_CELSIUS: &str = "Temperature_Celsius";
    pub const DAYS_TO_HARVEST: &str = "Days_to_Harvest";
    pub const FERTILIZER_USED: &str = "Fertilizer_Used";
    pub const IRRIGATION_USED: &str = "Irrigation_Used";
    pub const REGION: &str = "Region";
    pub const SOIL_TYPE: &str = "Soil_Type";
    pub const CROP: &str = "Crop";
    pub const WEATHER_CONDITION: &str = "Weather_Condition";

    pub const START_DATE: &str = "startDate";
    pub const HORIZON: &str = "horizon";
    pub const TEMPERATURE: &str = "temperature";
    pub const HUMIDITY: &str = "humidity";
    pub const NITROGEN: &str = "N";
    pub const PHOSPHORUS: &str = "P";
    pub const POTASSIUM: &str = "K";
    pub const RECENT_YIELD: &str = "recent_yield";
}

/// Errors raised while storing a field value
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field {field} expects true or false, got {value:?}")]
    InvalidBoolean { field: String, value: String },

    #[error("Field {field} is {actual}, not {expected}")]
    KindMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("{value:?} is not an option for {field}")]
    NotAnOption { field: String, value: String },

    #[error("{0}")]
    InvalidDate(&'static str),
}

/// Declares one form field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: FieldValue,
}

impl FieldSpec {
    pub fn numeric(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Numeric,
            required: true,
            default: FieldValue::Numeric(String::new()),
        }
    }

    pub fn boolean(name: &'static str, default: bool) -> Self {
        Self {
            name,
            kind: FieldKind::Boolean,
            required: true,
            default: FieldValue::Boolean(default),
        }
    }

    /// Categorical fields are optional so the form stays usable when the
    /// catalog could not be loaded.
    pub fn categorical(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Categorical,
            required: false,
            default: FieldValue::Categorical(String::new()),
        }
    }

    pub fn numeric_list(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::NumericList,
            required: false,
            default: FieldValue::NumericList(String::new()),
        }
    }

    pub fn date(name: &'static str, default: NaiveDate) -> Self {
        Self {
            name,
            kind: FieldKind::Date,
            required: true,
            default: FieldValue::Date(default),
        }
    }

    pub fn with_default_text(mut self, text: &str) -> Self {
        self.default = match self.default {
            FieldValue::Numeric(_) => FieldValue::Numeric(text.to_string()),
            FieldValue::Categorical(_) => FieldValue::Categorical(text.to_string()),
            FieldValue::NumericList(_) => FieldValue::NumericList(text.to_string()),
            other => other,
        };
        self
    }
}

/// Fields of the single-point prediction page
pub fn prediction_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::numeric(fields::RAINFALL_MM),
        FieldSpec::numeric(fields::TEMPERATURE_CELSIUS),
        FieldSpec::numeric(fields::DAYS_TO_HARVEST),
        FieldSpec::boolean(fields::FERTILIZER_USED, false),
        FieldSpec::boolean(fields::IRRIGATION_USED, false),
        FieldSpec::categorical(fields::REGION),
        FieldSpec::categorical(fields::SOIL_TYPE),
        FieldSpec::categorical(fields::CROP),
        FieldSpec::categorical(fields::WEATHER_CONDITION),
    ]
}

/// Fields of a forecast page. The list page also carries a start date and
/// an editable horizon.
pub fn forecast_fields(mode: ForecastMode, today: NaiveDate) -> Vec<FieldSpec> {
    let mut specs = Vec::new();
    if mode == ForecastMode::Broadcast {
        specs.push(FieldSpec::date(
            fields::START_DATE,
            default_forecast_start_date(today),
        ));
        specs.push(
            FieldSpec::numeric(fields::HORIZON).with_default_text(&DEFAULT_HORIZON.to_string()),
        );
    }
    specs.extend([
        FieldSpec::numeric(fields::TEMPERATURE),
        FieldSpec::numeric(fields::HUMIDITY),
        FieldSpec::numeric(fields::NITROGEN),
        FieldSpec::numeric(fields::PHOSPHORUS),
        FieldSpec::numeric(fields::POTASSIUM),
        FieldSpec::numeric_list(fields::RECENT_YIELD),
    ]);
    specs
}

/// Current values of a form
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    specs: Vec<FieldSpec>,
    values: HashMap<&'static str, FieldValue>,
}

impl FormState {
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        let values = specs.iter().map(|s| (s.name, s.default.clone())).collect();
        Self { specs, values }
    }

    pub fn prediction() -> Self {
        Self::new(prediction_fields())
    }

    pub fn forecast(mode: ForecastMode, today: NaiveDate) -> Self {
        Self::new(forecast_fields(mode, today))
    }

    pub fn spec(&self, name: &str) -> Option<&FieldSpec> {
        self.specs.iter().find(|s| s.name == name)
    }

    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Raw text of a text-backed field, empty if absent
    pub fn text(&self, name: &str) -> &str {
        self.value(name).and_then(FieldValue::as_text).unwrap_or("")
    }

    pub fn flag(&self, name: &str) -> bool {
        self.value(name).and_then(FieldValue::as_bool).unwrap_or(false)
    }

    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        self.value(name).and_then(FieldValue::as_date)
    }

    /// Store a raw UI value.
    ///
    /// Booleans must be a `true`/`false` token and dates an ISO date within
    /// the forecast year; both are coerced here. Everything else is stored
    /// verbatim.
    pub fn update(&mut self, name: &str, raw: &str) -> Result<(), FormError> {
        let spec = self
            .spec(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        let key = spec.name;

        let value = match spec.kind {
            FieldKind::Numeric => FieldValue::Numeric(raw.to_string()),
            FieldKind::Categorical => FieldValue::Categorical(raw.to_string()),
            FieldKind::NumericList => FieldValue::NumericList(raw.to_string()),
            FieldKind::Boolean => {
                let flag = parse_bool_token(raw).ok_or_else(|| FormError::InvalidBoolean {
                    field: key.to_string(),
                    value: raw.to_string(),
                })?;
                FieldValue::Boolean(flag)
            }
            FieldKind::Date => {
                let date = parse_iso_date(raw).map_err(FormError::InvalidDate)?;
                validate_forecast_start_date(date).map_err(FormError::InvalidDate)?;
                FieldValue::Date(date)
            }
        };

        self.values.insert(key, value);
        Ok(())
    }

    pub fn set_flag(&mut self, name: &str, flag: bool) -> Result<(), FormError> {
        let key = self.expect_kind(name, FieldKind::Boolean)?;
        self.values.insert(key, FieldValue::Boolean(flag));
        Ok(())
    }

    pub fn set_date(&mut self, name: &str, date: NaiveDate) -> Result<(), FormError> {
        let key = self.expect_kind(name, FieldKind::Date)?;
        validate_forecast_start_date(date).map_err(FormError::InvalidDate)?;
        self.values.insert(key, FieldValue::Date(date));
        Ok(())
    }

    /// Select a categorical value. Once a catalog is loaded the value must
    /// be one of its options; without one any text is accepted.
    pub fn select_category(
        &mut self,
        field: CategoryField,
        value: &str,
        catalog: Option<&CategoryOptions>,
    ) -> Result<(), FormError> {
        let key = self.expect_kind(field.as_str(), FieldKind::Categorical)?;
        if let Some(catalog) = catalog {
            if !catalog.contains(field, value) {
                return Err(FormError::NotAnOption {
                    field: key.to_string(),
                    value: value.to_string(),
                });
            }
        }
        self.values
            .insert(key, FieldValue::Categorical(value.to_string()));
        Ok(())
    }

    /// Fill each unset categorical field with the first catalog option
    pub fn apply_category_defaults(&mut self, catalog: &CategoryOptions) {
        for field in CategoryField::ALL {
            let Some(spec) = self.spec(field.as_str()) else {
                continue;
            };
            let key = spec.name;
            if !self.text(key).is_empty() {
                continue;
            }
            if let Some(first) = catalog.default_for(field) {
                self.values
                    .insert(key, FieldValue::Categorical(first.to_string()));
            }
        }
    }

    /// Restore every field to its default, dropping categorical selections
    pub fn reset(&mut self) {
        for spec in &self.specs {
            self.values.insert(spec.name, spec.default.clone());
        }
    }

    /// Required fields that are still empty, in declaration order
    pub fn missing_required(&self) -> Vec<&'static str> {
        self.specs
            .iter()
            .filter(|s| s.required)
            .filter(|s| !self.value(s.name).map(FieldValue::is_filled).unwrap_or(false))
            .map(|s| s.name)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }

    fn expect_kind(&self, name: &str, expected: FieldKind) -> Result<&'static str, FormError> {
        let spec = self
            .spec(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        if spec.kind != expected {
            return Err(FormError::KindMismatch {
                field: spec.name.to_string(),
                expected: expected.as_str(),
                actual: spec.kind.as_str(),
            });
        }
        Ok(spec.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CategoryOptions {
        CategoryOptions {
            region: vec!["North".into(), "South".into()],
            soil_type: vec!["Loam".into()],
            crop: vec!["Wheat".into()],
            weather_condition: vec!["Sunny".into()],
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_prediction_defaults() {
        let form = FormState::prediction();
        assert_eq!(form.text(fields::RAINFALL_MM), "");
        assert!(!form.flag(fields::FERTILIZER_USED));
        assert!(!form.flag(fields::IRRIGATION_USED));
        assert_eq!(form.text(fields::REGION), "");
        assert_eq!(
            form.missing_required(),
            vec![
                fields::RAINFALL_MM,
                fields::TEMPERATURE_CELSIUS,
                fields::DAYS_TO_HARVEST
            ]
        );
    }

    #[test]
    fn test_update_keeps_raw_text() {
        let mut form = FormState::prediction();
        // Partial keystrokes are stored without parsing
        form.update(fields::RAINFALL_MM, "12.").unwrap();
        form.update(fields::TEMPERATURE_CELSIUS, "-").unwrap();
        assert_eq!(form.text(fields::RAINFALL_MM), "12.");
        assert_eq!(form.text(fields::TEMPERATURE_CELSIUS), "-");
    }

    #[test]
    fn test_boolean_coerced_on_store() {
        let mut form = FormState::prediction();
        form.update(fields::FERTILIZER_USED, "true").unwrap();
        assert_eq!(
            form.value(fields::FERTILIZER_USED),
            Some(&FieldValue::Boolean(true))
        );

        let err = form.update(fields::IRRIGATION_USED, "maybe").unwrap_err();
        assert!(matches!(err, FormError::InvalidBoolean { .. }));
        assert!(!form.flag(fields::IRRIGATION_USED));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut form = FormState::prediction();
        assert_eq!(
            form.update("Sunlight_Hours", "8"),
            Err(FormError::UnknownField("Sunlight_Hours".into()))
        );
    }

    #[test]
    fn test_category_defaults_fill_only_unset() {
        let mut form = FormState::prediction();
        form.update(fields::REGION, "South").unwrap();
        form.apply_category_defaults(&catalog());

        assert_eq!(form.text(fields::REGION), "South");
        assert_eq!(form.text(fields::SOIL_TYPE), "Loam");
        assert_eq!(form.text(fields::CROP), "Wheat");
        assert_eq!(form.text(fields::WEATHER_CONDITION), "Sunny");
    }

    #[test]
    fn test_empty_catalog_keeps_empty_defaults() {
        let mut form = FormState::prediction();
        form.apply_category_defaults(&CategoryOptions::default());
        assert_eq!(form.text(fields::CROP), "");
    }

    #[test]
    fn test_select_category_checks_catalog() {
        let mut form = FormState::prediction();
        let options = catalog();

        form.select_category(CategoryField::Region, "South", Some(&options))
            .unwrap();
        assert_eq!(form.text(fields::REGION), "South");

        let err = form
            .select_category(CategoryField::Region, "Atlantis", Some(&options))
            .unwrap_err();
        assert!(matches!(err, FormError::NotAnOption { .. }));
        assert_eq!(form.text(fields::REGION), "South");

        // Free input while no catalog is available
        form.select_category(CategoryField::Crop, "Teff", None).unwrap();
        assert_eq!(form.text(fields::CROP), "Teff");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = FormState::prediction();
        form.apply_category_defaults(&catalog());
        form.update(fields::RAINFALL_MM, "900").unwrap();
        form.set_flag(fields::FERTILIZER_USED, true).unwrap();

        form.reset();

        assert_eq!(form, FormState::prediction());
        assert_eq!(form.text(fields::REGION), "");
    }

    #[test]
    fn test_set_flag_kind_mismatch() {
        let mut form = FormState::prediction();
        let err = form.set_flag(fields::RAINFALL_MM, true).unwrap_err();
        assert_eq!(
            err,
            FormError::KindMismatch {
                field: fields::RAINFALL_MM.into(),
                expected: "boolean",
                actual: "numeric",
            }
        );
    }

    #[test]
    fn test_forecast_fields_per_mode() {
        let graph = FormState::forecast(ForecastMode::Graph, today());
        assert!(graph.spec(fields::START_DATE).is_none());
        assert!(graph.spec(fields::HORIZON).is_none());
        assert!(graph.spec(fields::RECENT_YIELD).is_some());

        let list = FormState::forecast(ForecastMode::Broadcast, today());
        assert_eq!(list.text(fields::HORIZON), "7");
        assert_eq!(
            list.date(fields::START_DATE),
            NaiveDate::from_ymd_opt(2026, 6, 1)
        );
    }

    #[test]
    fn test_start_date_outside_year_rejected() {
        let mut form = FormState::forecast(ForecastMode::Broadcast, today());
        let before = form.date(fields::START_DATE);

        let err = form.update(fields::START_DATE, "2027-01-05").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please choose a date within the year 2026."
        );
        assert_eq!(form.date(fields::START_DATE), before);

        form.update(fields::START_DATE, "2026-09-10").unwrap();
        assert_eq!(
            form.date(fields::START_DATE),
            NaiveDate::from_ymd_opt(2026, 9, 10)
        );
    }

    #[test]
    fn test_recent_yield_optional() {
        let mut form = FormState::forecast(ForecastMode::Graph, today());
        for name in [
            fields::TEMPERATURE,
            fields::HUMIDITY,
            fields::NITROGEN,
            fields::PHOSPHORUS,
            fields::POTASSIUM,
        ] {
            form.update(name, "1").unwrap();
        }
        assert!(form.is_complete());
    }
}
