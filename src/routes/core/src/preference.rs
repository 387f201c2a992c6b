/* src/routes/core/src/preference.rs */

use log::debug;

use crate::base_url::BaseUrl;
use crate::lang::Language;

/// Durable string storage for the visitor's language choice.
pub trait PreferenceStore {
  fn get(&self, key: &str) -> Option<String>;
  fn set(&mut self, key: &str, value: &str);
}

/// Remember `lang` as the preferred language. The default language is never
/// written, so visiting an English page keeps an earlier choice.
pub fn remember_language<S: PreferenceStore + ?Sized>(
  store: &mut S,
  key: &str,
  lang: &Language,
) -> bool {
  if lang.is_default() {
    return false;
  }
  if store.get(key).as_deref() == Some(lang.code()) {
    return false;
  }
  store.set(key, lang.code());
  true
}

/// Where a returning visitor on the homepage should be sent, if anywhere.
///
/// Only the site root redirects, only to a supported non-default preferred
/// language, and never to the page already being shown.
pub fn homepage_redirect<S: PreferenceStore + ?Sized>(
  path: &str,
  base_url: &BaseUrl,
  store: &S,
  key: &str,
  supported: &[Language],
) -> Option<String> {
  if !base_url.is_root(path) {
    return None;
  }
  let preferred = Language::from_code(&store.get(key)?)?;
  if preferred.is_default() || !supported.contains(&preferred) {
    return None;
  }
  let target = base_url.attach(&format!("/{}/", preferred.code()));
  if target == path {
    return None;
  }
  debug!("redirecting homepage to preferred language {preferred}: {target}");
  Some(target)
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  const KEY: &str = "preferred-language";

  #[derive(Default)]
  struct MemoryStore(HashMap<String, String>);

  impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
      self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
      self.0.insert(key.to_string(), value.to_string());
    }
  }

  fn store_with(lang: &str) -> MemoryStore {
    let mut store = MemoryStore::default();
    store.set(KEY, lang);
    store
  }

  fn supported() -> Vec<Language> {
    Language::TARGETS.to_vec()
  }

  #[test]
  fn remember_skips_default() {
    let mut store = MemoryStore::default();
    assert!(!remember_language(&mut store, KEY, &Language::En));
    assert_eq!(store.get(KEY), None);
    assert!(remember_language(&mut store, KEY, &Language::Pt));
    assert_eq!(store.get(KEY).as_deref(), Some("pt"));
    assert!(!remember_language(&mut store, KEY, &Language::Pt));
  }

  #[test]
  fn english_visit_keeps_choice() {
    let mut store = store_with("pt");
    remember_language(&mut store, KEY, &Language::En);
    assert_eq!(store.get(KEY).as_deref(), Some("pt"));
  }

  #[test]
  fn redirects_root_to_preferred() {
    let store = store_with("pt");
    assert_eq!(
      homepage_redirect("/", &BaseUrl::empty(), &store, KEY, &supported()),
      Some("/pt/".to_string())
    );
    let base = BaseUrl::new("/website");
    assert_eq!(
      homepage_redirect("/website", &base, &store, KEY, &supported()),
      Some("/website/pt/".to_string())
    );
  }

  #[test]
  fn no_redirect_off_homepage() {
    let store = store_with("pt");
    assert_eq!(homepage_redirect("/docs/", &BaseUrl::empty(), &store, KEY, &supported()), None);
  }

  #[test]
  fn no_redirect_without_supported_preference() {
    let base = BaseUrl::empty();
    assert_eq!(homepage_redirect("/", &base, &MemoryStore::default(), KEY, &supported()), None);
    assert_eq!(homepage_redirect("/", &base, &store_with("en"), KEY, &supported()), None);
    assert_eq!(homepage_redirect("/", &base, &store_with("ja"), KEY, &supported()), None);
    assert_eq!(homepage_redirect("/", &base, &store_with("%%"), KEY, &supported()), None);
  }

  #[test]
  fn no_redirect_loop() {
    let store = store_with("pt");
    let base = BaseUrl::new("/website");
    assert_eq!(homepage_redirect("/website/pt/", &base, &store, KEY, &supported()), None);
  }
}
