/* src/routes/wasm/src/lib.rs */

pub mod dom;
pub mod storage;
pub mod timer;

use std::rc::Rc;
use std::time::Duration;

use pivot_routes::{
  Debouncer, Language, RoutesConfig, Translator, homepage_redirect, keep_language,
  remember_language, update_all_links,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{MutationObserver, MutationObserverInit};

use dom::{BrowserPage, anchors};
use storage::LocalStorage;
use timer::WindowScheduler;

pub(crate) fn log_js_error(err: &JsValue) {
  if let Some(err) = err.dyn_ref::<js_sys::Error>() {
    log::error!("{}", String::from(err.message()));
  } else {
    log::error!("(JavaScript Error)");
  }
}

fn init_logging() {
  console_error_panic_hook::set_once();
  // Already initialized when boot runs twice on the same page
  let _ = console_log::init_with_level(log::Level::Info);
}

fn parse_language(code: &str) -> Option<Language> {
  let lang = Language::from_code(code);
  if lang.is_none() {
    log::warn!("ignoring malformed language code \"{code}\"");
  }
  lang
}

/// Page-scoped route translator handle.
#[wasm_bindgen]
pub struct LanguageRoutes {
  translator: Rc<Translator>,
  config: RoutesConfig,
}

#[wasm_bindgen]
impl LanguageRoutes {
  /// Build from a JSON config (the built-in site table when omitted) and
  /// initialize against the current page.
  #[wasm_bindgen(constructor)]
  pub fn new(config_json: Option<String>) -> Result<LanguageRoutes, JsValue> {
    let config = match config_json.as_deref() {
      Some(json) if !json.trim().is_empty() => RoutesConfig::from_json(json),
      _ => Ok(RoutesConfig::default()),
    }
    .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let mut translator = Translator::new(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    if let Some(window) = web_sys::window() {
      translator.initialize(&BrowserPage::new(window));
    }
    Ok(Self { translator: Rc::new(translator), config })
  }

  #[wasm_bindgen(getter, js_name = baseUrl)]
  pub fn base_url(&self) -> String {
    self.translator.base_url().to_string()
  }

  /// Language of `path`, or of the current page when omitted.
  #[wasm_bindgen(js_name = currentLanguage)]
  pub fn current_language(&self, path: Option<String>) -> String {
    match path {
      Some(path) => self.translator.current_language(&path).to_string(),
      None => self.translator.page_language().to_string(),
    }
  }

  /// Malformed language codes leave the url unchanged.
  #[wasm_bindgen(js_name = convertUrl)]
  pub fn convert_url(&self, url: &str, from: &str, to: &str) -> String {
    match (parse_language(from), parse_language(to)) {
      (Some(from), Some(to)) => self.translator.convert_url(url, &from, &to),
      _ => url.to_string(),
    }
  }

  #[wasm_bindgen(js_name = urlExists)]
  pub fn url_exists(&self, url: &str, lang: Option<String>) -> bool {
    match lang {
      Some(code) => parse_language(&code).is_some_and(|l| self.translator.url_exists(url, Some(&l))),
      None => self.translator.url_exists(url, None),
    }
  }

  /// Rewrite every anchor on the page to its `target` counterpart.
  #[wasm_bindgen(js_name = updateAllLinks)]
  pub fn update_all_links(&self, target: &str) -> u32 {
    let Some(target) = parse_language(target) else {
      return 0;
    };
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
      return 0;
    };
    let mut links = anchors(&document);
    count_u32(update_all_links(&self.translator, &mut links, &target))
  }

  /// Keep every internal anchor in the current page language.
  #[wasm_bindgen(js_name = keepLanguage)]
  pub fn keep_language(&self) -> u32 {
    count_u32(keep_page_language(&self.translator))
  }
}

fn count_u32(count: usize) -> u32 {
  u32::try_from(count).unwrap_or(u32::MAX)
}

fn keep_page_language(translator: &Translator) -> usize {
  match web_sys::window().and_then(|w| w.document()) {
    Some(document) => keep_language(translator, &mut anchors(&document)),
    None => 0,
  }
}

/// Re-run the language pass whenever content is inserted, at most once per
/// burst of mutations.
fn observe_links(translator: Rc<Translator>, delay: Duration) -> Result<(), JsValue> {
  let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
    log::warn!("no document body to observe, links inserted later keep their href");
    return Ok(());
  };
  let mut debouncer = Debouncer::new(WindowScheduler, delay, move || {
    keep_page_language(&translator);
  });
  let callback = Closure::<dyn FnMut()>::new(move || debouncer.call());
  let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
  let options = MutationObserverInit::new();
  options.set_child_list(true);
  options.set_subtree(true);
  observer.observe_with_options(&body, &options)?;
  // The observer lives as long as the page
  callback.forget();
  Ok(())
}

/// Wire the site's language behaviour into the current page: remember the
/// page language, keep links in it, follow inserted content, and send a
/// returning visitor on the homepage to their preferred language.
#[wasm_bindgen]
pub fn boot(config_json: Option<String>) -> Option<LanguageRoutes> {
  init_logging();
  let routes = match LanguageRoutes::new(config_json) {
    Ok(routes) => routes,
    Err(err) => {
      log::error!("language routes not loaded: {}", err.as_string().unwrap_or_default());
      return None;
    }
  };
  let translator = Rc::clone(&routes.translator);
  let config = &routes.config;

  let mut store = LocalStorage::open();
  remember_language(&mut store, &config.preference_key, &translator.page_language());

  keep_page_language(&translator);
  if let Err(err) = observe_links(Rc::clone(&translator), Duration::from_millis(config.debounce_ms))
  {
    log_js_error(&err);
  }

  if let Some(target) = homepage_redirect(
    translator.location(),
    translator.base_url(),
    &store,
    &config.preference_key,
    &config.redirect_languages,
  ) && let Some(window) = web_sys::window()
    && let Err(err) = window.location().set_href(&target)
  {
    log_js_error(&err);
  }

  Some(routes)
}
