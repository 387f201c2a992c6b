/* src/routes/core/src/lang.rs */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RoutesError;

/// A site language. `En` is the default language and is served without a
/// path prefix; every other language lives under `/<code>/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
  En,
  Pt,
  Es,
  Fr,
  De,
  /// Any other well-formed code. No route table ships for these; they only
  /// take the generic prefix-swap path.
  Other(String),
}

impl Language {
  pub const DEFAULT: Language = Language::En;

  /// Non-default languages in detection order.
  pub const TARGETS: [Language; 4] = [Language::Pt, Language::Es, Language::Fr, Language::De];

  /// Parse a language code. Case-insensitive, surrounding whitespace ignored.
  /// Returns `None` for empty codes or codes with characters outside
  /// `[a-z0-9-]`.
  pub fn from_code(code: &str) -> Option<Self> {
    let code = code.trim().to_ascii_lowercase();
    if code.is_empty()
      || code.starts_with('-')
      || !code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
      return None;
    }
    Some(match code.as_str() {
      "en" => Self::En,
      "pt" => Self::Pt,
      "es" => Self::Es,
      "fr" => Self::Fr,
      "de" => Self::De,
      _ => Self::Other(code),
    })
  }

  pub fn code(&self) -> &str {
    match self {
      Self::En => "en",
      Self::Pt => "pt",
      Self::Es => "es",
      Self::Fr => "fr",
      Self::De => "de",
      Self::Other(code) => code,
    }
  }

  pub fn is_default(&self) -> bool {
    matches!(self, Self::En)
  }

  /// `/<code>` for target languages, empty for the default language.
  pub fn prefix(&self) -> String {
    if self.is_default() { String::new() } else { format!("/{}", self.code()) }
  }
}

impl Default for Language {
  fn default() -> Self {
    Self::DEFAULT
  }
}

impl fmt::Display for Language {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

impl FromStr for Language {
  type Err = RoutesError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_code(s)
      .ok_or_else(|| RoutesError::invalid_language(format!("\"{s}\" is not a language code")))
  }
}

impl TryFrom<String> for Language {
  type Error = RoutesError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse()
  }
}

impl From<Language> for String {
  fn from(lang: Language) -> Self {
    lang.code().to_string()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_codes() {
    assert_eq!(Language::from_code("en"), Some(Language::En));
    assert_eq!(Language::from_code("pt"), Some(Language::Pt));
    assert_eq!(Language::from_code(" PT "), Some(Language::Pt));
    assert_eq!(Language::from_code("de"), Some(Language::De));
  }

  #[test]
  fn other_codes_are_kept() {
    assert_eq!(Language::from_code("pt-br"), Some(Language::Other("pt-br".into())));
    assert_eq!(Language::from_code("JA"), Some(Language::Other("ja".into())));
  }

  #[test]
  fn malformed_codes_rejected() {
    assert_eq!(Language::from_code(""), None);
    assert_eq!(Language::from_code("p/t"), None);
    assert_eq!(Language::from_code("-x"), None);
    assert!("e n".parse::<Language>().is_err());
  }

  #[test]
  fn prefix_only_for_targets() {
    assert_eq!(Language::En.prefix(), "");
    assert_eq!(Language::Pt.prefix(), "/pt");
    assert!(Language::En.is_default());
    assert!(!Language::Fr.is_default());
  }

  #[test]
  fn serde_as_code() {
    let langs: Vec<Language> = serde_json::from_str(r#"["en", "pt", "ja"]"#).unwrap();
    assert_eq!(langs, vec![Language::En, Language::Pt, Language::Other("ja".into())]);
    assert_eq!(serde_json::to_string(&Language::Pt).unwrap(), r#""pt""#);
    assert!(serde_json::from_str::<Language>(r#""a b""#).is_err());
  }
}
