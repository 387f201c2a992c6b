/* src/routes/core/src/config.rs */

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::RoutesError;
use crate::lang::Language;
use crate::table::{RouteTable, SlugMap};

/// Static site routing data. Loaded from `routes.toml` by the CLI and from
/// JSON in the browser; `Default` is the table the site ships with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutesConfig {
  /// Non-default languages, in detection order.
  #[serde(default = "default_languages")]
  pub languages: Vec<Language>,
  /// Deployment prefixes tried when the page carries no base url marker.
  #[serde(default = "default_base_url_candidates")]
  pub base_url_candidates: Vec<String>,
  #[serde(default = "default_preference_key")]
  pub preference_key: String,
  #[serde(default = "default_debounce_ms")]
  pub debounce_ms: u64,
  /// Languages a returning visitor may be redirected to from the homepage.
  #[serde(default = "default_languages")]
  pub redirect_languages: Vec<Language>,
  #[serde(default = "default_routes")]
  pub routes: BTreeMap<Language, SlugMap>,
  #[serde(default = "default_valid")]
  pub valid: BTreeMap<Language, Vec<String>>,
}

impl Default for RoutesConfig {
  fn default() -> Self {
    Self {
      languages: default_languages(),
      base_url_candidates: default_base_url_candidates(),
      preference_key: default_preference_key(),
      debounce_ms: default_debounce_ms(),
      redirect_languages: default_languages(),
      routes: default_routes(),
      valid: default_valid(),
    }
  }
}

impl RoutesConfig {
  pub fn from_json(json: &str) -> Result<Self, RoutesError> {
    let config: Self = serde_json::from_str(json)
      .map_err(|e| RoutesError::invalid_config(format!("failed to parse routes config: {e}")))?;
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<(), RoutesError> {
    if self.languages.is_empty() {
      return Err(RoutesError::invalid_config("languages must not be empty"));
    }
    if let Some(lang) = self.languages.iter().chain(&self.redirect_languages).find(|l| l.is_default())
    {
      return Err(RoutesError::invalid_config(format!(
        "\"{lang}\" is the default language and takes no prefix"
      )));
    }
    if self.debounce_ms == 0 {
      return Err(RoutesError::invalid_config("debounce_ms must be greater than zero"));
    }
    if self.preference_key.trim().is_empty() {
      return Err(RoutesError::invalid_config("preference_key must not be empty"));
    }
    RouteTable::new(&self.routes)?;
    Ok(())
  }
}

fn default_languages() -> Vec<Language> {
  Language::TARGETS.to_vec()
}

fn default_base_url_candidates() -> Vec<String> {
  vec!["/website".to_string()]
}

fn default_preference_key() -> String {
  "preferred-language".to_string()
}

fn default_debounce_ms() -> u64 {
  100
}

/// Docs pages as (english slug, portuguese slug).
const DOC_SLUGS: &[(&str, &str)] = &[
  ("installation", "instalacao"),
  ("quickstart", "inicio-rapido"),
  ("configuration", "configuracao"),
  ("routing", "roteamento"),
  ("middleware", "middleware"),
  ("requests-responses", "requisicoes-respostas"),
  ("container", "container"),
  ("security", "seguranca"),
  ("events", "eventos"),
  ("validation", "validacao"),
  ("database", "banco-de-dados"),
  ("providers", "provedores"),
  ("testing", "testes"),
  ("deployment", "deploy"),
  ("why-helix", "why-helix"),
];

fn default_routes() -> BTreeMap<Language, SlugMap> {
  let mut pt = SlugMap::new();
  pt.insert("/".to_string(), "/pt/".to_string());
  pt.insert("/docs/".to_string(), "/pt/docs/".to_string());
  for (en, local) in DOC_SLUGS {
    pt.insert(format!("/docs/{en}/"), format!("/pt/docs/{local}/"));
  }
  BTreeMap::from([(Language::Pt, pt)])
}

fn default_valid() -> BTreeMap<Language, Vec<String>> {
  let mut en = vec!["/".to_string(), "/docs/".to_string()];
  let mut pt = vec!["/pt/".to_string(), "/pt/docs/".to_string()];
  for (slug_en, slug_pt) in DOC_SLUGS {
    en.push(format!("/docs/{slug_en}/"));
    pt.push(format!("/pt/docs/{slug_pt}/"));
  }
  BTreeMap::from([(Language::En, en), (Language::Pt, pt)])
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_table_is_valid() {
    let config = RoutesConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.routes[&Language::Pt].len(), 17);
    assert_eq!(config.valid[&Language::En].len(), 17);
    assert_eq!(config.valid[&Language::Pt].len(), 17);
    assert_eq!(config.routes[&Language::Pt]["/docs/installation/"], "/pt/docs/instalacao/");
  }

  #[test]
  fn json_defaults_fill_missing_fields() {
    let config = RoutesConfig::from_json(r#"{"debounce_ms": 250}"#).unwrap();
    assert_eq!(config.debounce_ms, 250);
    assert_eq!(config.preference_key, "preferred-language");
    assert_eq!(config.languages, Language::TARGETS.to_vec());
    assert_eq!(config.routes, default_routes());
  }

  #[test]
  fn json_custom_routes_replace_defaults() {
    let config = RoutesConfig::from_json(
      r#"{"routes": {"pt": {"/docs/installation/": "/pt/docs/instalacao/"}}}"#,
    )
    .unwrap();
    assert_eq!(config.routes[&Language::Pt].len(), 1);
  }

  #[test]
  fn json_rejects_bad_language() {
    let err = RoutesConfig::from_json(r#"{"languages": ["p t"]}"#).unwrap_err();
    assert_eq!(err.code(), "INVALID_CONFIG");
  }

  #[test]
  fn validate_rejects_default_language_target() {
    let config = RoutesConfig { languages: vec![Language::En], ..RoutesConfig::default() };
    assert_eq!(config.validate().unwrap_err().code(), "INVALID_CONFIG");
  }

  #[test]
  fn validate_rejects_zero_debounce() {
    let config = RoutesConfig { debounce_ms: 0, ..RoutesConfig::default() };
    assert!(config.validate().is_err());
  }

  #[test]
  fn validate_surfaces_mapping_conflict() {
    let mut config = RoutesConfig::default();
    config
      .routes
      .entry(Language::Pt)
      .or_default()
      .insert("/docs/setup/".to_string(), "/pt/docs/instalacao/".to_string());
    assert_eq!(config.validate().unwrap_err().code(), "MAPPING_CONFLICT");
  }
}
