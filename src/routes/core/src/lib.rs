/* src/routes/core/src/lib.rs */

pub mod base_url;
pub mod config;
pub mod debounce;
pub mod errors;
pub mod lang;
pub mod links;
pub mod path;
pub mod preference;
pub mod table;
pub mod translator;
pub mod valid;

// Re-exports for ergonomic use
pub use base_url::BaseUrl;
pub use config::RoutesConfig;
pub use debounce::{Debouncer, Scheduler};
pub use errors::RoutesError;
pub use lang::Language;
pub use links::{
  HrefKind, LinkTarget, classify, keep_language, translate_href, update_all_links, update_link,
};
pub use path::normalize;
pub use preference::{PreferenceStore, homepage_redirect, remember_language};
pub use table::{RouteTable, SlugMap};
pub use translator::{PageEnvironment, StaticPage, Translator};
pub use valid::ValidUrlSet;
