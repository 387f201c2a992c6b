/* src/routes/core/src/path.rs */

//! Path normalization shared by every lookup. Canonical form: one leading
//! `/`, one trailing `/`, no empty segments.

use crate::lang::Language;

/// Normalize to the canonical `/a/b/` form. Empty input becomes `/`.
pub fn normalize(path: &str) -> String {
  let mut out = String::with_capacity(path.len() + 2);
  out.push('/');
  for segment in path.split('/').filter(|s| !s.is_empty()) {
    out.push_str(segment);
    out.push('/');
  }
  out
}

/// Strip a leading `/<code>` segment. Segment-aware: `/pt/x/` -> `/x/`,
/// `/pt/` -> `/`, `/ptx/` -> `None`. Always `None` for the default language.
pub fn strip_lang_prefix<'a>(path: &'a str, lang: &Language) -> Option<&'a str> {
  if lang.is_default() {
    return None;
  }
  let rest = path.strip_prefix('/')?.strip_prefix(lang.code())?;
  if rest.is_empty() {
    Some("/")
  } else if rest.starts_with('/') {
    Some(rest)
  } else {
    None
  }
}

pub fn has_lang_prefix(path: &str, lang: &Language) -> bool {
  strip_lang_prefix(path, lang).is_some()
}

/// Split an href into its path and its `?query`/`#fragment` suffix.
pub fn split_suffix(href: &str) -> (&str, &str) {
  match href.find(['?', '#']) {
    Some(idx) => href.split_at(idx),
    None => (href, ""),
  }
}

/// Resolve a relative href (`./x`, `../x`, `x`) against the page path.
/// Rooted hrefs are returned unchanged; `..` never climbs above `/`.
pub fn resolve_relative(page_path: &str, href: &str) -> String {
  if href.starts_with('/') {
    return href.to_string();
  }

  // Directory of the current page: everything up to the last slash
  let dir = match page_path.rfind('/') {
    Some(idx) => &page_path[..=idx],
    None => "/",
  };

  let mut segments: Vec<&str> = dir.split('/').filter(|s| !s.is_empty()).collect();
  for segment in href.split('/') {
    match segment {
      "" | "." => {}
      ".." => {
        segments.pop();
      }
      other => segments.push(other),
    }
  }

  let trailing = href.is_empty()
    || href.ends_with('/')
    || href == "."
    || href == ".."
    || href.ends_with("/.")
    || href.ends_with("/..");

  let mut out = String::from("/");
  out.push_str(&segments.join("/"));
  if trailing && !segments.is_empty() {
    out.push('/');
  }
  out
}
