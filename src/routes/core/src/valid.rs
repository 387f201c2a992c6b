/* src/routes/core/src/valid.rs */

use std::collections::{BTreeMap, BTreeSet};

use crate::lang::Language;
use crate::path::normalize;

/// Per-language set of paths known to exist on the site. Static reference
/// data, independent of the route table.
#[derive(Debug, Clone, Default)]
pub struct ValidUrlSet {
  sets: BTreeMap<Language, BTreeSet<String>>,
}

impl ValidUrlSet {
  pub fn new(raw: &BTreeMap<Language, Vec<String>>) -> Self {
    let sets = raw
      .iter()
      .map(|(lang, paths)| (lang.clone(), paths.iter().map(|p| normalize(p)).collect()))
      .collect();
    Self { sets }
  }

  /// Membership test on an already normalized, base-stripped path.
  pub fn contains(&self, lang: &Language, path: &str) -> bool {
    self.sets.get(lang).is_some_and(|set| set.contains(path))
  }

  pub fn paths(&self, lang: &Language) -> impl Iterator<Item = &str> {
    self.sets.get(lang).into_iter().flatten().map(String::as_str)
  }

  pub fn languages(&self) -> impl Iterator<Item = &Language> {
    self.sets.keys()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn membership_per_language() {
    let raw = BTreeMap::from([
      (Language::En, vec!["/".to_string(), "/docs".to_string()]),
      (Language::Pt, vec!["/pt/".to_string()]),
    ]);
    let set = ValidUrlSet::new(&raw);
    assert!(set.contains(&Language::En, "/docs/"));
    assert!(set.contains(&Language::Pt, "/pt/"));
    assert!(!set.contains(&Language::Pt, "/docs/"));
    assert!(!set.contains(&Language::Fr, "/"));
    assert_eq!(set.paths(&Language::En).count(), 2);
  }
}
