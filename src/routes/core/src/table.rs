/* src/routes/core/src/table.rs */

use std::collections::BTreeMap;

use crate::errors::RoutesError;
use crate::lang::Language;
use crate::path::normalize;

/// Canonical path -> localized path, per target language.
pub type SlugMap = BTreeMap<String, String>;

/// Explicit slug table with derived reverse maps.
///
/// Only pages whose localized slug differs from the canonical one need an
/// entry; everything else falls back to "same slug, different prefix".
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
  forward: BTreeMap<Language, SlugMap>,
  reverse: BTreeMap<Language, SlugMap>,
}

impl RouteTable {
  /// Build a table from raw mappings. Keys and values are normalized; the
  /// mapping must be injective in both directions after normalization.
  pub fn new(mappings: &BTreeMap<Language, SlugMap>) -> Result<Self, RoutesError> {
    let mut forward = BTreeMap::new();
    for (lang, slugs) in mappings {
      if lang.is_default() {
        return Err(RoutesError::invalid_config(format!(
          "routes.{lang}: the default language has no route table"
        )));
      }
      let mut normalized = SlugMap::new();
      for (canonical, localized) in slugs {
        let key = normalize(canonical);
        if normalized.insert(key.clone(), normalize(localized)).is_some() {
          return Err(RoutesError::mapping_conflict(format!(
            "routes.{lang}: canonical path {key} is listed more than once"
          )));
        }
      }
      forward.insert(lang.clone(), normalized);
    }

    let mut table = Self { forward, reverse: BTreeMap::new() };
    table.check_injective()?;
    table.rebuild_reverse();
    Ok(table)
  }

  fn check_injective(&self) -> Result<(), RoutesError> {
    for (lang, slugs) in &self.forward {
      let mut seen: BTreeMap<&str, &str> = BTreeMap::new();
      for (canonical, localized) in slugs {
        if let Some(previous) = seen.insert(localized.as_str(), canonical.as_str()) {
          return Err(RoutesError::mapping_conflict(format!(
            "routes.{lang}: {localized} is the target of both {previous} and {canonical}"
          )));
        }
      }
    }
    Ok(())
  }

  /// Derive the reverse maps from the forward maps. Deterministic, so calling
  /// it again yields the same maps.
  pub fn rebuild_reverse(&mut self) {
    self.reverse = self
      .forward
      .iter()
      .map(|(lang, slugs)| {
        let inverted = slugs.iter().map(|(c, l)| (l.clone(), c.clone())).collect();
        (lang.clone(), inverted)
      })
      .collect();
  }

  /// Localized path for a canonical path, if one is declared.
  pub fn localize(&self, lang: &Language, canonical: &str) -> Option<&str> {
    self.forward.get(lang)?.get(canonical).map(String::as_str)
  }

  /// Canonical path for a localized path, if one is declared.
  pub fn canonicalize(&self, lang: &Language, localized: &str) -> Option<&str> {
    self.reverse.get(lang)?.get(localized).map(String::as_str)
  }

  pub fn languages(&self) -> impl Iterator<Item = &Language> {
    self.forward.keys()
  }

  pub fn entries(&self, lang: &Language) -> impl Iterator<Item = (&str, &str)> {
    self.forward.get(lang).into_iter().flatten().map(|(c, l)| (c.as_str(), l.as_str()))
  }

  pub fn len(&self) -> usize {
    self.forward.values().map(BTreeMap::len).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn mappings(pairs: &[(&str, &str)]) -> BTreeMap<Language, SlugMap> {
    let slugs = pairs.iter().map(|(c, l)| (c.to_string(), l.to_string())).collect();
    BTreeMap::from([(Language::Pt, slugs)])
  }

  #[test]
  fn forward_and_reverse_lookup() {
    let table = RouteTable::new(&mappings(&[("/docs/installation/", "/pt/docs/instalacao/")]))
      .unwrap();
    assert_eq!(table.localize(&Language::Pt, "/docs/installation/"), Some("/pt/docs/instalacao/"));
    assert_eq!(table.canonicalize(&Language::Pt, "/pt/docs/instalacao/"), Some("/docs/installation/"));
    assert_eq!(table.localize(&Language::Es, "/docs/installation/"), None);
  }

  #[test]
  fn entries_are_normalized() {
    let table = RouteTable::new(&mappings(&[("docs/routing", "/pt/docs/roteamento")])).unwrap();
    assert_eq!(table.localize(&Language::Pt, "/docs/routing/"), Some("/pt/docs/roteamento/"));
  }

  #[test]
  fn duplicate_localized_rejected() {
    let err = RouteTable::new(&mappings(&[
      ("/docs/a/", "/pt/docs/x/"),
      ("/docs/b/", "/pt/docs/x/"),
    ]))
    .unwrap_err();
    assert_eq!(err.code(), "MAPPING_CONFLICT");
  }

  #[test]
  fn duplicate_canonical_after_normalization_rejected() {
    let err =
      RouteTable::new(&mappings(&[("/docs/a", "/pt/docs/x/"), ("/docs/a/", "/pt/docs/y/")]))
        .unwrap_err();
    assert_eq!(err.code(), "MAPPING_CONFLICT");
  }

  #[test]
  fn default_language_table_rejected() {
    let raw = BTreeMap::from([(Language::En, SlugMap::new())]);
    assert_eq!(RouteTable::new(&raw).unwrap_err().code(), "INVALID_CONFIG");
  }

  #[test]
  fn rebuild_reverse_is_deterministic() {
    let mut table =
      RouteTable::new(&mappings(&[("/", "/pt/"), ("/docs/", "/pt/docs/")])).unwrap();
    let before = table.reverse.clone();
    table.rebuild_reverse();
    assert_eq!(table.reverse, before);
    assert_eq!(table.len(), 2);
  }
}
