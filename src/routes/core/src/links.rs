/* src/routes/core/src/links.rs */

//! Anchor rewriting on top of [`Translator`]. Only same-site page links are
//! touched; fragments, external URLs and asset files keep their href.

use log::debug;

use crate::lang::Language;
use crate::path::{has_lang_prefix, resolve_relative, split_suffix};
use crate::translator::Translator;

/// Anything carrying an `href`: a DOM anchor, an attribute slot in a static
/// HTML file, a test double.
pub trait LinkTarget {
  fn href(&self) -> Option<String>;
  fn set_href(&mut self, href: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HrefKind {
  Empty,
  /// Same-page reference: `#section` or `?query` only.
  Fragment,
  /// Carries a URI scheme (`https:`, `mailto:` ...) or is protocol-relative.
  External,
  /// Last path segment has a file extension (`/assets/app.css`).
  Asset,
  Internal,
}

pub fn classify(href: &str) -> HrefKind {
  let href = href.trim();
  if href.is_empty() {
    HrefKind::Empty
  } else if href.starts_with('#') || href.starts_with('?') {
    HrefKind::Fragment
  } else if href.starts_with("//") || has_scheme(href) {
    HrefKind::External
  } else if is_asset(split_suffix(href).0) {
    HrefKind::Asset
  } else {
    HrefKind::Internal
  }
}

/// RFC 3986 scheme: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"
fn has_scheme(href: &str) -> bool {
  let Some(end) = href.find([':', '/', '?', '#']) else {
    return false;
  };
  if !href[end..].starts_with(':') {
    return false;
  }
  let scheme = &href[..end];
  scheme.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
    && scheme.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn is_asset(path: &str) -> bool {
  match path.rsplit('/').next() {
    Some(last) if last != "." && last != ".." => last.contains('.'),
    _ => false,
  }
}

/// Translate one href, or `None` when it must be left alone.
pub fn translate_href(
  translator: &Translator,
  href: &str,
  from: &Language,
  to: &Language,
) -> Option<String> {
  if classify(href) != HrefKind::Internal {
    return None;
  }
  let (path, suffix) = split_suffix(href.trim());
  let rooted = resolve_relative(translator.location(), path);
  Some(format!("{}{suffix}", translator.convert_url(&rooted, from, to)))
}

/// Point `link` at its `target` language counterpart. Writes only when the
/// href actually changes; returns whether it wrote.
pub fn update_link<L: LinkTarget + ?Sized>(
  translator: &Translator,
  link: &mut L,
  target: &Language,
) -> bool {
  let current = translator.page_language();
  if current == *target {
    return false;
  }
  rewrite(translator, link, &current, target)
}

fn rewrite<L: LinkTarget + ?Sized>(
  translator: &Translator,
  link: &mut L,
  from: &Language,
  to: &Language,
) -> bool {
  let Some(href) = link.href() else {
    return false;
  };
  match translate_href(translator, &href, from, to) {
    Some(new_href) if new_href != href => {
      link.set_href(&new_href);
      true
    }
    _ => false,
  }
}

/// Apply [`update_link`] to every link; returns how many were rewritten.
pub fn update_all_links<L: LinkTarget>(
  translator: &Translator,
  links: &mut [L],
  target: &Language,
) -> usize {
  if translator.page_language() == *target {
    return 0;
  }
  let mut count = 0;
  for link in &mut *links {
    if update_link(translator, link, target) {
      count += 1;
    }
  }
  debug!("rewrote {count} of {} links for {target}", links.len());
  count
}

/// Whether the path of `href`, resolved against the page and stripped of the
/// base url, already starts with the `lang` prefix.
fn carries_prefix(translator: &Translator, href: &str, lang: &Language) -> bool {
  let rooted = resolve_relative(translator.location(), split_suffix(href.trim()).0);
  has_lang_prefix(translator.base_url().strip(&rooted), lang)
}

/// Keep visitors in the page language: on a non-default page, every internal
/// link not already carrying the language prefix is converted from the
/// default language. Returns how many links were rewritten.
pub fn keep_language<L: LinkTarget>(translator: &Translator, links: &mut [L]) -> usize {
  let lang = translator.page_language();
  if lang.is_default() {
    return 0;
  }
  let mut count = 0;
  for link in &mut *links {
    if link.href().is_some_and(|href| carries_prefix(translator, &href, &lang)) {
      continue;
    }
    if rewrite(translator, link, &Language::DEFAULT, &lang) {
      count += 1;
    }
  }
  debug!("kept {count} links in {lang}");
  count
}
