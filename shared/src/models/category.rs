//! Categorical option lists served by the prediction service

use serde::{Deserialize, Serialize};

/// Categorical inputs of the single-point prediction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryField {
    #[serde(rename = "Region")]
    Region,
    #[serde(rename = "Soil_Type")]
    SoilType,
    #[serde(rename = "Crop")]
    Crop,
    #[serde(rename = "Weather_Condition")]
    WeatherCondition,
}

impl CategoryField {
    pub const ALL: [CategoryField; 4] = [
        CategoryField::Region,
        CategoryField::SoilType,
        CategoryField::Crop,
        CategoryField::WeatherCondition,
    ];

    /// Wire and form field name
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryField::Region => "Region",
            CategoryField::SoilType => "Soil_Type",
            CategoryField::Crop => "Crop",
            CategoryField::WeatherCondition => "Weather_Condition",
        }
    }

    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

impl std::fmt::Display for CategoryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Allowed values per categorical field, in server order.
///
/// A key missing from the response deserializes to an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryOptions {
    #[serde(rename = "Region", default)]
    pub region: Vec<String>,
    #[serde(rename = "Soil_Type", default)]
    pub soil_type: Vec<String>,
    #[serde(rename = "Crop", default)]
    pub crop: Vec<String>,
    #[serde(rename = "Weather_Condition", default)]
    pub weather_condition: Vec<String>,
}

impl CategoryOptions {
    pub fn options(&self, field: CategoryField) -> &[String] {
        match field {
            CategoryField::Region => &self.region,
            CategoryField::SoilType => &self.soil_type,
            CategoryField::Crop => &self.crop,
            CategoryField::WeatherCondition => &self.weather_condition,
        }
    }

    /// First option of a field, used as its default selection
    pub fn default_for(&self, field: CategoryField) -> Option<&str> {
        self.options(field).first().map(String::as_str)
    }

    pub fn contains(&self, field: CategoryField, value: &str) -> bool {
        self.options(field).iter().any(|o| o == value)
    }

    pub fn is_empty(&self) -> bool {
        CategoryField::ALL.iter().all(|f| self.options(*f).is_empty())
    }
}
