use serde::{Deserialize, Serialize};
use std::{
    borrow::Borrow,
    fmt::{Display, Formatter, Result as FmtResult},
    ops::Deref,
    str::FromStr,
};
use thiserror::Error;

/// Identifies a course in the catalog, e.g. "CSC3280"
///
/// Surrounding whitespace is trimmed, everything else is kept as written so a
/// code always matches the stored row exactly. Codes compare
/// lexicographically, which doubles as a rough ordering by course level since
/// the number embeds it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseCode(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseCodeError {
    #[error("course code is empty")]
    Empty,
    #[error("course code `{0}` is longer than {max} characters", max = CourseCode::MAX_LEN)]
    TooLong(String),
}

impl CourseCode {
    /// Matches the width of the `courses.code` column
    pub const MAX_LEN: usize = 20;

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CourseCode {
    type Err = CourseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();

        if code.is_empty() {
            return Err(CourseCodeError::Empty);
        }
        if code.len() > Self::MAX_LEN {
            return Err(CourseCodeError::TooLong(code.to_owned()));
        }

        Ok(Self(code.to_owned()))
    }
}

impl TryFrom<String> for CourseCode {
    type Error = CourseCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CourseCode> for String {
    fn from(code: CourseCode) -> Self {
        code.0
    }
}

impl Deref for CourseCode {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for CourseCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for CourseCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}
