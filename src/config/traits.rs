use crate::error::EvoError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), EvoError>;
    fn to_manifest(&self) -> ConfigManifest;
}

/// Field-level description of a section, for external configuration UIs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigManifest {
    pub section: String,
    pub fields: Vec<FieldManifest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldManifest {
    pub name: String,
    pub field_type: String,
    pub default: serde_json::Value,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub description: String,
}

impl FieldManifest {
    pub fn new(
        name: &str,
        field_type: &str,
        default: serde_json::Value,
        bounds: (Option<f64>, Option<f64>),
        description: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            field_type: field_type.to_string(),
            default,
            min: bounds.0,
            max: bounds.1,
            description: description.to_string(),
        }
    }
}

/// Reject NaN and values outside `[0, 1]` (or `[0, 1)` when `exclusive_max`)
pub(crate) fn check_rate(name: &str, value: f64, exclusive_max: bool) -> Result<(), EvoError> {
    let in_range = if exclusive_max {
        (0.0..1.0).contains(&value)
    } else {
        (0.0..=1.0).contains(&value)
    };
    if !in_range {
        let bound = if exclusive_max { "[0, 1)" } else { "[0, 1]" };
        return Err(EvoError::Configuration(format!(
            "{} must be within {}, got {}",
            name, bound, value
        )));
    }
    Ok(())
}
