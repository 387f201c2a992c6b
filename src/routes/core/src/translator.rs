/* src/routes/core/src/translator.rs */

use log::debug;

use crate::base_url::BaseUrl;
use crate::config::RoutesConfig;
use crate::errors::RoutesError;
use crate::lang::Language;
use crate::path::{has_lang_prefix, normalize, split_suffix, strip_lang_prefix};
use crate::table::RouteTable;
use crate::valid::ValidUrlSet;

/// What the translator needs to know about the page it runs on.
pub trait PageEnvironment {
  /// Current location path, e.g. `/website/pt/docs/`.
  fn location_path(&self) -> String;
  /// Explicit base url declared by the page, if any.
  fn base_url_marker(&self) -> Option<String>;
}

/// A page described by plain values. Used outside the browser.
#[derive(Debug, Clone, Default)]
pub struct StaticPage {
  pub path: String,
  pub marker: Option<String>,
}

impl StaticPage {
  pub fn new(path: impl Into<String>) -> Self {
    Self { path: path.into(), marker: None }
  }

  pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
    self.marker = Some(marker.into());
    self
  }
}

impl PageEnvironment for StaticPage {
  fn location_path(&self) -> String {
    self.path.clone()
  }

  fn base_url_marker(&self) -> Option<String> {
    self.marker.clone()
  }
}

/// Converts URLs between site languages.
///
/// One instance per page. Everything it holds is fixed after
/// [`Translator::initialize`]; all operations are total and side-effect free.
#[derive(Debug, Clone)]
pub struct Translator {
  languages: Vec<Language>,
  base_url_candidates: Vec<String>,
  table: RouteTable,
  valid: ValidUrlSet,
  base_url: BaseUrl,
  location: String,
}

impl Translator {
  pub fn new(config: &RoutesConfig) -> Result<Self, RoutesError> {
    config.validate()?;
    Ok(Self {
      languages: config.languages.clone(),
      base_url_candidates: config.base_url_candidates.clone(),
      table: RouteTable::new(&config.routes)?,
      valid: ValidUrlSet::new(&config.valid),
      base_url: BaseUrl::empty(),
      location: "/".to_string(),
    })
  }

  /// Detect the base url, remember the page location and rebuild the reverse
  /// slug maps. Safe to call repeatedly.
  pub fn initialize(&mut self, env: &impl PageEnvironment) {
    let location = env.location_path();
    let marker = env.base_url_marker();
    self.base_url = BaseUrl::detect(marker.as_deref(), &location, &self.base_url_candidates);
    self.location = location;
    self.table.rebuild_reverse();
    debug!(
      "routes initialized: base url \"{}\", page {} ({})",
      self.base_url,
      self.location,
      self.page_language()
    );
  }

  pub fn base_url(&self) -> &BaseUrl {
    &self.base_url
  }

  pub fn location(&self) -> &str {
    &self.location
  }

  /// Language of the page the translator was initialized for.
  pub fn page_language(&self) -> Language {
    self.current_language(&self.location)
  }

  /// Language of `path`: the first configured language whose `/<code>/`
  /// prefix it carries once the base url is stripped, else the default.
  pub fn current_language(&self, path: &str) -> Language {
    let path = self.base_url.strip(path);
    self
      .languages
      .iter()
      .find(|lang| path.starts_with(&format!("/{}/", lang.code())))
      .cloned()
      .unwrap_or_default()
  }

  /// Convert `url` from one language to another.
  ///
  /// Declared slugs win; unmapped pages keep their slug and only swap the
  /// language prefix. The base url appears exactly once in the result, and
  /// converting an already converted url again is a no-op. A `?query` or
  /// `#fragment` suffix is carried over unchanged.
  pub fn convert_url(&self, url: &str, from: &Language, to: &Language) -> String {
    if from == to {
      return url.to_string();
    }
    let (url, suffix) = split_suffix(url);
    let path = normalize(self.base_url.strip(url));
    let converted = if from.is_default() {
      self.to_target(&path, to)
    } else if to.is_default() {
      self.to_default(&path, from)
    } else {
      swap_prefix(&path, from, to)
    };
    format!("{}{suffix}", self.base_url.attach(&converted))
  }

  fn to_target(&self, path: &str, to: &Language) -> String {
    if let Some(localized) = self.table.localize(to, path) {
      return localized.to_string();
    }
    if has_lang_prefix(path, to) {
      return path.to_string();
    }
    debug!("no {to} slug for {path}, keeping slug");
    format!("/{}{path}", to.code())
  }

  fn to_default(&self, path: &str, from: &Language) -> String {
    if let Some(canonical) = self.table.canonicalize(from, path) {
      return canonical.to_string();
    }
    strip_lang_prefix(path, from).unwrap_or(path).to_string()
  }

  /// Whether `url` is a known page in `lang` (or the page language).
  pub fn url_exists(&self, url: &str, lang: Option<&Language>) -> bool {
    let path = normalize(self.base_url.strip(split_suffix(url).0));
    match lang {
      Some(lang) => self.valid.contains(lang, &path),
      None => self.valid.contains(&self.page_language(), &path),
    }
  }

  /// Convert `url` from the page language to `to`, falling back to the root
  /// of `to` when the converted page is not known to exist.
  pub fn localized_or_fallback(&self, url: &str, to: &Language) -> String {
    let converted = self.convert_url(url, &self.page_language(), to);
    if self.url_exists(&converted, Some(to)) {
      return converted;
    }
    debug!("{converted} is not a known {to} page, falling back to the {to} root");
    self.base_url.attach(&normalize(&to.prefix()))
  }
}

fn swap_prefix(path: &str, from: &Language, to: &Language) -> String {
  let stripped = strip_lang_prefix(path, from).unwrap_or(path);
  if to.is_default() || has_lang_prefix(stripped, to) {
    stripped.to_string()
  } else {
    format!("/{}{stripped}", to.code())
  }
}
