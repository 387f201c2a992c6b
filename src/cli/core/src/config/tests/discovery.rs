/* src/cli/core/src/config/tests/discovery.rs */

use super::*;

#[test]
fn finds_config_in_parent_dir() {
  let tmp = tempfile::tempdir().unwrap();
  std::fs::write(tmp.path().join("routes.toml"), "debounce_ms = 40\n").unwrap();
  let nested = tmp.path().join("docs/pt");
  std::fs::create_dir_all(&nested).unwrap();

  let found = find_routes_config(&nested).unwrap();
  assert_eq!(found, tmp.path().canonicalize().unwrap().join("routes.toml"));

  let (path, config) = resolve_config(None, &nested).unwrap();
  assert!(path.is_some());
  assert_eq!(config.debounce_ms, 40);
}

#[test]
fn missing_config_falls_back_to_defaults() {
  let tmp = tempfile::tempdir().unwrap();
  // A routes.toml further up (e.g. in the system temp dir) would be picked
  // up too, so only assert on the fallback when nothing was found.
  let (path, config) = resolve_config(None, tmp.path()).unwrap();
  if path.is_none() {
    assert_eq!(config, RoutesConfig::default());
  }
}

#[test]
fn explicit_path_must_exist() {
  let tmp = tempfile::tempdir().unwrap();
  let missing = tmp.path().join("nope.toml");
  assert!(resolve_config(Some(&missing), tmp.path()).is_err());
}

#[test]
fn invalid_config_reports_path() {
  let tmp = tempfile::tempdir().unwrap();
  let path = tmp.path().join("routes.toml");
  std::fs::write(&path, "debounce_ms = 0\n").unwrap();
  let err = load_routes_config(&path).unwrap_err();
  assert!(format!("{err:#}").contains("debounce_ms"));
}
