use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum TitleClass {
    Freehold,
    Leasehold,
}

impl TitleClass {
    pub const ALL: [TitleClass; 2] = [TitleClass::Freehold, TitleClass::Leasehold];

    pub fn as_str(&self) -> &'static str {
        match self {
            TitleClass::Freehold => "Freehold",
            TitleClass::Leasehold => "Leasehold",
        }
    }
}

impl fmt::Display for TitleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleClassParseError(pub String);

impl fmt::Display for TitleClassParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown title class: {}", self.0)
    }
}

impl std::error::Error for TitleClassParseError {}

/// Case-insensitive, since stored classes are free text.
impl FromStr for TitleClass {
    type Err = TitleClassParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TitleClass::ALL
            .into_iter()
            .find(|class| class.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TitleClassParseError(s.to_string()))
    }
}

impl TryFrom<String> for TitleClass {
    type Error = TitleClassParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub id: i64,
    pub title_number: String,
    pub title_class: TitleClass,
    pub content: String,
}

/// List form of a title; content is only served by the detail lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleSummary {
    pub id: i64,
    pub title_number: String,
    pub title_class: TitleClass,
}

impl From<Title> for TitleSummary {
    fn from(title: Title) -> Self {
        Self {
            id: title.id,
            title_number: title.title_number,
            title_class: title.title_class,
        }
    }
}
