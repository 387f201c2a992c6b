/* src/cli/core/src/localize.rs */

use std::ops::Range;
use std::sync::OnceLock;

use pivot_routes::{Language, LinkTarget, Translator, keep_language, update_all_links};
use regex::Regex;

fn anchor_href_regex() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| {
    #[allow(clippy::unwrap_used)] // pattern is a literal
    Regex::new(r#"(?i)<a\s(?:[^>]*?\s)?href\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
  })
}

/// The href value of one anchor in a static HTML document.
#[derive(Debug)]
struct HrefSlot {
  range: Range<usize>,
  href: String,
  dirty: bool,
}

impl LinkTarget for HrefSlot {
  fn href(&self) -> Option<String> {
    Some(self.href.clone())
  }

  fn set_href(&mut self, href: &str) {
    self.href = href.to_string();
    self.dirty = true;
  }
}

fn slots(html: &str) -> Vec<HrefSlot> {
  anchor_href_regex()
    .captures_iter(html)
    .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
    .map(|m| HrefSlot { range: m.range(), href: m.as_str().to_string(), dirty: false })
    .collect()
}

fn splice(html: &str, slots: &[HrefSlot]) -> String {
  let mut out = String::with_capacity(html.len());
  let mut cursor = 0;
  for slot in slots.iter().filter(|s| s.dirty) {
    out.push_str(&html[cursor..slot.range.start]);
    out.push_str(&slot.href);
    cursor = slot.range.end;
  }
  out.push_str(&html[cursor..]);
  out
}

/// Rewrite every anchor in `html` to its `target` counterpart, as the
/// browser would after a language switch. Returns the new document and how
/// many hrefs changed.
pub fn localize_html(translator: &Translator, html: &str, target: &Language) -> (String, usize) {
  let mut slots = slots(html);
  let count = update_all_links(translator, &mut slots, target);
  (splice(html, &slots), count)
}

/// Pin every internal anchor of a non-default page to the page language.
pub fn pin_html(translator: &Translator, html: &str) -> (String, usize) {
  let mut slots = slots(html);
  let count = keep_language(translator, &mut slots);
  (splice(html, &slots), count)
}
