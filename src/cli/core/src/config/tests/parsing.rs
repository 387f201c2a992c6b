/* src/cli/core/src/config/tests/parsing.rs */

use super::*;

#[test]
fn parse_empty_config_uses_site_defaults() {
  let config: RoutesConfig = toml::from_str("").unwrap();
  assert_eq!(config, RoutesConfig::default());
  assert!(config.validate().is_ok());
}

#[test]
fn parse_full_config() {
  let toml_str = r#"
languages = ["pt"]
base_url_candidates = ["/website", "/preview"]
preference_key = "site-lang"
debounce_ms = 50
redirect_languages = ["pt"]

[routes.pt]
"/" = "/pt/"
"/docs/installation/" = "/pt/docs/instalacao/"

[valid]
en = ["/", "/docs/installation/"]
pt = ["/pt/", "/pt/docs/instalacao/"]
"#;
  let config: RoutesConfig = toml::from_str(toml_str).unwrap();
  assert_eq!(config.languages, vec![Language::Pt]);
  assert_eq!(config.base_url_candidates, vec!["/website", "/preview"]);
  assert_eq!(config.preference_key, "site-lang");
  assert_eq!(config.debounce_ms, 50);
  assert_eq!(config.routes[&Language::Pt]["/docs/installation/"], "/pt/docs/instalacao/");
  assert_eq!(config.valid[&Language::Pt].len(), 2);
  assert!(config.validate().is_ok());
}

#[test]
fn parse_unknown_language_code_kept() {
  let toml_str = r#"
languages = ["pt", "ja"]
"#;
  let config: RoutesConfig = toml::from_str(toml_str).unwrap();
  assert_eq!(config.languages, vec![Language::Pt, Language::Other("ja".into())]);
}

#[test]
fn parse_malformed_language_fails() {
  let toml_str = r#"
languages = ["p t"]
"#;
  assert!(toml::from_str::<RoutesConfig>(toml_str).is_err());
}

#[test]
fn validation_catches_conflicting_slugs() {
  let toml_str = r#"
[routes.pt]
"/docs/a/" = "/pt/docs/x/"
"/docs/b/" = "/pt/docs/x/"
"#;
  let config: RoutesConfig = toml::from_str(toml_str).unwrap();
  let err = config.validate().unwrap_err();
  assert_eq!(err.code(), "MAPPING_CONFLICT");
}
