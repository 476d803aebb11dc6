use std::fmt;

use serde::Deserialize;

pub const SUPPORTED_LANGS: &[Lang] = &[Lang::Zh, Lang::En];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Zh,
    En,
}

impl Lang {
    pub fn parse(value: &str) -> Result<Self, LangError> {
        SUPPORTED_LANGS
            .iter()
            .copied()
            .find(|lang| lang.as_str() == value)
            .ok_or_else(|| LangError::Unsupported(value.to_string()))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Lang::Zh => "zh",
            Lang::En => "en",
        }
    }

    /// Language named by the first path segment, if it is a supported one.
    pub fn from_path(path: &str) -> Option<Self> {
        let (segment, _) = split_first_segment(path)?;
        Self::parse(segment).ok()
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Lang {
    type Err = LangError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LangError {
    Unsupported(String),
}

impl fmt::Display for LangError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LangError::Unsupported(code) => write!(f, "unsupported language code '{code}'"),
        }
    }
}

impl std::error::Error for LangError {}

/// Splits `/seg/rest` into `("seg", "rest")`. `rest` is empty for `/seg`.
pub(crate) fn split_first_segment(path: &str) -> Option<(&str, &str)> {
    let stripped = path.strip_prefix('/')?;
    Some(stripped.split_once('/').unwrap_or((stripped, "")))
}
