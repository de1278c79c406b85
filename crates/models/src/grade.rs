use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Final grade recorded for a completed course
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
)]
pub enum Grade {
    #[strum(serialize = "A")]
    #[serde(rename = "A")]
    A,
    #[strum(serialize = "B")]
    #[serde(rename = "B")]
    B,
    #[strum(serialize = "C")]
    #[serde(rename = "C")]
    C,
    #[strum(serialize = "D")]
    #[serde(rename = "D")]
    D,
    #[strum(serialize = "F")]
    #[serde(rename = "F")]
    F,
    #[strum(serialize = "P")]
    #[serde(rename = "P")]
    Pass,
    #[strum(serialize = "NP")]
    #[serde(rename = "NP")]
    NoPass,
}

#[cfg(feature = "database")]
crate::db_value::impl_text_value!(Grade);
