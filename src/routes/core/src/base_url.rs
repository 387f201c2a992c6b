/* src/routes/core/src/base_url.rs */

use std::fmt;

use crate::path::normalize;

/// Deployment sub-path the whole site is served under, e.g. `/website`.
/// Stored without a trailing slash; the empty string means "served at root".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
  pub fn new(prefix: &str) -> Self {
    let normalized = normalize(prefix);
    Self(normalized.trim_end_matches('/').to_string())
  }

  pub fn empty() -> Self {
    Self(String::new())
  }

  /// Detect the base url for a page.
  ///
  /// An explicit page marker always wins, even when it is empty. Without a
  /// marker, the first candidate prefix the location starts with is used.
  pub fn detect(marker: Option<&str>, location_path: &str, candidates: &[String]) -> Self {
    if let Some(marker) = marker {
      return Self::new(marker.trim());
    }
    candidates
      .iter()
      .map(|c| Self::new(c.as_str()))
      .find(|c| !c.is_empty() && c.strip_once(location_path).is_some())
      .unwrap_or_default()
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  fn strip_once<'a>(&self, path: &'a str) -> Option<&'a str> {
    if self.0.is_empty() {
      return None;
    }
    let rest = path.strip_prefix(self.0.as_str())?;
    if rest.is_empty() {
      Some("/")
    } else if rest.starts_with('/') {
      Some(rest)
    } else {
      None
    }
  }

  /// Remove every leading occurrence of the prefix. A path that was
  /// prefixed twice by an earlier pass comes back clean.
  pub fn strip<'a>(&self, path: &'a str) -> &'a str {
    let mut current = path;
    while let Some(rest) = self.strip_once(current) {
      if rest == current {
        break;
      }
      current = rest;
    }
    current
  }

  /// Prefix a rooted path with the base url exactly once.
  pub fn attach(&self, path: &str) -> String {
    if path.starts_with('/') {
      format!("{}{path}", self.0)
    } else {
      format!("{}/{path}", self.0)
    }
  }

  /// Whether `path` is the site root: `/` when served at root, otherwise
  /// `<base>` or `<base>/`.
  pub fn is_root(&self, path: &str) -> bool {
    if self.0.is_empty() {
      return normalize(path) == "/";
    }
    self.strip_once(path).is_some_and(|rest| normalize(rest) == "/")
  }
}

impl fmt::Display for BaseUrl {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
