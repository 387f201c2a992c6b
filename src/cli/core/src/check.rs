/* src/cli/core/src/check.rs */

use pivot_routes::{Language, RouteTable, RoutesConfig, ValidUrlSet, path::has_lang_prefix};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
  pub ok: bool,
  pub message: String,
}

impl Finding {
  fn ok(message: impl Into<String>) -> Self {
    Self { ok: true, message: message.into() }
  }

  fn fail(message: impl Into<String>) -> Self {
    Self { ok: false, message: message.into() }
  }
}

/// Audit the route table against the valid url sets.
///
/// Every declared slug pair must point at pages known to exist, and every
/// localized path must live under its language prefix.
pub fn audit(config: &RoutesConfig) -> Vec<Finding> {
  let table = match RouteTable::new(&config.routes) {
    Ok(table) => table,
    Err(err) => return vec![Finding::fail(err.to_string())],
  };
  let valid = ValidUrlSet::new(&config.valid);
  let mut findings = if table.is_empty() {
    vec![Finding::ok("route table is empty, every page keeps its slug")]
  } else {
    vec![Finding::ok(format!("route table is one-to-one ({} entries)", table.len()))]
  };

  for lang in table.languages() {
    if !config.languages.contains(lang) {
      findings.push(Finding::fail(format!(
        "routes.{lang} is not listed in languages, its pages are never detected"
      )));
    }
    let mut problems = 0;
    for (canonical, localized) in table.entries(lang) {
      if !valid.contains(&Language::DEFAULT, canonical) {
        findings.push(Finding::fail(format!("{canonical} is not a known en page")));
        problems += 1;
      }
      if !valid.contains(lang, localized) {
        findings.push(Finding::fail(format!("{localized} is not a known {lang} page")));
        problems += 1;
      }
      if !has_lang_prefix(localized, lang) {
        findings.push(Finding::fail(format!("{localized} is outside the /{lang}/ prefix")));
        problems += 1;
      }
    }
    if problems == 0 {
      findings.push(Finding::ok(format!("routes.{lang}: every slug pair points at a known page")));
    }
  }

  for lang in valid.languages() {
    if !lang.is_default() && !config.languages.contains(lang) {
      findings.push(Finding::fail(format!("valid.{lang} is not listed in languages")));
    }
  }

  findings
}
