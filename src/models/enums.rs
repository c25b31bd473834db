//! Enumerated property values

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of the columns of a table (`tableDirection`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableDirection {
    Ltr,
    Rtl,
    Auto,
}

impl TableDirection {
    pub const ALLOWED: [&'static str; 3] = ["ltr", "rtl", "auto"];

    pub fn as_str(&self) -> &'static str {
        match self {
            TableDirection::Ltr => "ltr",
            TableDirection::Rtl => "rtl",
            TableDirection::Auto => "auto",
        }
    }
}

impl fmt::Display for TableDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ltr" => Ok(TableDirection::Ltr),
            "rtl" => Ok(TableDirection::Rtl),
            "auto" => Ok(TableDirection::Auto),
            other => Err(format!(
                "tableDirection must be one of 'rtl', 'ltr', or 'auto', got '{}'",
                other
            )),
        }
    }
}

/// Direction of the text within cells (`textDirection`).
///
/// `Inherit` (the default) takes the table direction annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
    Auto,
    #[default]
    Inherit,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
            TextDirection::Auto => "auto",
            TextDirection::Inherit => "inherit",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ltr" => Ok(TextDirection::Ltr),
            "rtl" => Ok(TextDirection::Rtl),
            "auto" => Ok(TextDirection::Auto),
            "inherit" => Ok(TextDirection::Inherit),
            other => Err(format!(
                "textDirection must be one of 'ltr', 'rtl', 'auto', or 'inherit', got '{}'",
                other
            )),
        }
    }
}
