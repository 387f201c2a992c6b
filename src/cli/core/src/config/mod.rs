/* src/cli/core/src/config/mod.rs */

mod loader;

#[cfg(test)]
mod tests;

pub use loader::resolve_config;

#[cfg(test)]
use loader::{find_routes_config, load_routes_config};
