/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use pivot_routes::RoutesConfig;

pub const CONFIG_FILE: &str = "routes.toml";

/// Walk upward from `start` to find `routes.toml`, like Cargo.toml discovery
pub fn find_routes_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE} not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_routes_config(path: &Path) -> Result<RoutesConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: RoutesConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.validate().with_context(|| format!("invalid config in {}", path.display()))?;
  Ok(config)
}

/// Explicit path, else `routes.toml` found upward from `cwd`, else the
/// built-in site table. Returns the path the config came from, if any.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<(Option<PathBuf>, RoutesConfig)> {
  if let Some(path) = explicit {
    return Ok((Some(path.to_path_buf()), load_routes_config(path)?));
  }
  match find_routes_config(cwd) {
    Ok(path) => {
      let config = load_routes_config(&path)?;
      Ok((Some(path), config))
    }
    Err(err) => {
      log::debug!("{err:#}, using the built-in route table");
      Ok((None, RoutesConfig::default()))
    }
  }
}
