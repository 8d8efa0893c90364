use std::fmt;
use std::str::FromStr;

use crate::error::LanguageError;

/// Language of the generated logic file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    TypeScript,
    JavaScript,
}

impl Language {
    /// File extension, which is also the command-line tag.
    pub fn extension(&self) -> &'static str {
        match self {
            Language::TypeScript => "ts",
            Language::JavaScript => "js",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ts" => Ok(Language::TypeScript),
            "js" => Ok(Language::JavaScript),
            _ => Err(LanguageError(s.to_string())),
        }
    }
}
