use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumProperty, EnumString};

/// How a degree requirement counts toward a major or minor
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumProperty,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RequirementType {
    #[strum(props(label = "Required Course"))]
    Required,
    #[strum(props(label = "Elective"))]
    Elective,
    #[strum(props(label = "Core Course"))]
    Core,
    #[strum(serialize = "OPTION", props(label = "Option Group"))]
    #[serde(rename = "OPTION")]
    OptionGroup,
}

impl RequirementType {
    /// Human readable name, e.g. "Core Course"
    pub fn label(&self) -> &'static str {
        self.get_str("label").unwrap_or_default()
    }
}

#[cfg(feature = "database")]
crate::db_value::impl_text_value!(RequirementType);

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_stored_names() {
        assert_eq!(RequirementType::Required.to_string(), "REQUIRED");
        assert_eq!(RequirementType::OptionGroup.to_string(), "OPTION");
        assert_eq!(
            RequirementType::from_str("ELECTIVE").unwrap(),
            RequirementType::Elective
        );
        assert!(RequirementType::from_str("required").is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(RequirementType::Core.label(), "Core Course");
        assert_eq!(RequirementType::OptionGroup.label(), "Option Group");
    }

    #[test]
    fn test_serde_uses_stored_names() {
        let json = serde_json::to_string(&RequirementType::OptionGroup).unwrap();
        assert_eq!(json, "\"OPTION\"");

        let parsed: RequirementType = serde_json::from_str("\"CORE\"").unwrap();
        assert_eq!(parsed, RequirementType::Core);
    }
}
