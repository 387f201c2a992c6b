/* src/routes/wasm/src/storage.rs */

use pivot_routes::PreferenceStore;
use web_sys::Storage;

use crate::log_js_error;

/// `window.localStorage`. Private browsing modes may deny it; reads then
/// return nothing and writes are dropped.
pub struct LocalStorage(Option<Storage>);

impl LocalStorage {
  pub fn open() -> Self {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    if storage.is_none() {
      log::warn!("localStorage unavailable, language preference will not persist");
    }
    Self(storage)
  }
}

impl PreferenceStore for LocalStorage {
  fn get(&self, key: &str) -> Option<String> {
    self.0.as_ref()?.get_item(key).ok().flatten()
  }

  fn set(&mut self, key: &str, value: &str) {
    let Some(storage) = &self.0 else {
      return;
    };
    if let Err(err) = storage.set_item(key, value) {
      log_js_error(&err);
    }
  }
}
