/* src/routes/wasm/src/dom.rs */

use pivot_routes::{LinkTarget, PageEnvironment};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::log_js_error;

/// The live page: `window.location` plus the base url markers a layout may
/// emit, `<meta name="baseurl" content="...">` or `<html data-baseurl="...">`.
pub struct BrowserPage {
  window: Window,
}

impl BrowserPage {
  pub fn new(window: Window) -> Self {
    Self { window }
  }
}

impl PageEnvironment for BrowserPage {
  fn location_path(&self) -> String {
    self.window.location().pathname().unwrap_or_else(|_| "/".to_string())
  }

  fn base_url_marker(&self) -> Option<String> {
    let document = self.window.document()?;
    if let Ok(Some(meta)) = document.query_selector("meta[name=\"baseurl\"]")
      && let Some(content) = meta.get_attribute("content")
    {
      return Some(content);
    }
    document.document_element()?.get_attribute("data-baseurl")
  }
}

/// An anchor element whose `href` attribute may be rewritten.
pub struct AnchorLink(pub Element);

impl LinkTarget for AnchorLink {
  fn href(&self) -> Option<String> {
    self.0.get_attribute("href")
  }

  fn set_href(&mut self, href: &str) {
    if let Err(err) = self.0.set_attribute("href", href) {
      log_js_error(&err);
    }
  }
}

/// Every `a[href]` currently in the document.
pub fn anchors(document: &Document) -> Vec<AnchorLink> {
  let list = match document.query_selector_all("a[href]") {
    Ok(list) => list,
    Err(err) => {
      log_js_error(&err);
      return Vec::new();
    }
  };
  (0..list.length())
    .filter_map(|i| list.item(i))
    .filter_map(|node| node.dyn_into::<Element>().ok())
    .map(AnchorLink)
    .collect()
}
