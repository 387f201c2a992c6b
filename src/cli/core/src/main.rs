/* src/cli/core/src/main.rs */

mod check;
mod config;
mod localize;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use pivot_routes::{Language, RoutesConfig, StaticPage, Translator};

#[derive(Parser)]
#[command(name = "pivot-routes", about = "PivotPHP site route table tools", version)]
struct Cli {
  /// Path to routes.toml (auto-detected if omitted, built-in table otherwise)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,
  /// Site base url, e.g. /website (inferred from the path if omitted)
  #[arg(short, long, global = true)]
  base_url: Option<String>,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Convert a url from one language to another
  Convert {
    url: String,
    /// Source language code
    #[arg(long, default_value = "en")]
    from: Language,
    /// Target language code
    #[arg(long)]
    to: Language,
  },
  /// Print the language of a path
  Lang { path: String },
  /// Check whether a url is a known page; exits non-zero when it is not
  Exists {
    url: String,
    /// Language to check against (detected from the url if omitted)
    #[arg(short, long)]
    lang: Option<Language>,
  },
  /// Audit the route table against the known pages
  Check,
  /// Rewrite the anchors of a static HTML page
  Localize {
    /// HTML file to read
    file: PathBuf,
    /// Target language; omit to pin links to the page language instead
    #[arg(long)]
    to: Option<Language>,
    /// Site path the file is served at, used to resolve relative links
    #[arg(long, default_value = "/")]
    page: String,
    /// Output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
  },
}

fn load(explicit: Option<&Path>) -> Result<RoutesConfig> {
  let cwd = std::env::current_dir().context("failed to get cwd")?;
  let (path, config) = config::resolve_config(explicit, &cwd)?;
  if let Some(path) = path {
    log::info!("using {}", path.display());
  }
  Ok(config)
}

/// Build a translator for `page`. An explicit base url overrides inference.
fn translator_for(config: &RoutesConfig, page: &str, base_url: Option<&str>) -> Result<Translator> {
  let mut translator = Translator::new(config)?;
  let env = match base_url {
    Some(base) => StaticPage::new(page).with_marker(base),
    None => StaticPage::new(page),
  };
  translator.initialize(&env);
  Ok(translator)
}

fn run_check(config: &RoutesConfig) -> Result<()> {
  ui::banner("check");
  let findings = check::audit(config);
  let failed = findings.iter().filter(|f| !f.ok).count();
  for finding in &findings {
    if finding.ok {
      ui::ok(&finding.message);
    } else {
      ui::fail(&finding.message);
    }
  }
  ui::blank();
  if failed > 0 {
    bail!("{failed} route table problem(s)");
  }
  Ok(())
}

fn run_localize(
  translator: &Translator,
  file: &Path,
  to: Option<&Language>,
  out: Option<&Path>,
) -> Result<()> {
  let html =
    std::fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
  let (rewritten, count) = match to {
    Some(to) => localize::localize_html(translator, &html, to),
    None => localize::pin_html(translator, &html),
  };
  match out {
    Some(out) => {
      std::fs::write(out, &rewritten)
        .with_context(|| format!("failed to write {}", out.display()))?;
      ui::ok(&format!("{}  {count} links rewritten", out.display()));
    }
    None => ui::value(&rewritten),
  }
  Ok(())
}

fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
  let cli = Cli::parse();
  let config = load(cli.config.as_deref())?;
  let base_url = cli.base_url.as_deref();

  match cli.command {
    Command::Convert { url, from, to } => {
      let translator = translator_for(&config, &url, base_url)?;
      ui::value(&translator.convert_url(&url, &from, &to));
    }
    Command::Lang { path } => {
      let translator = translator_for(&config, &path, base_url)?;
      ui::value(translator.current_language(&path).code());
    }
    Command::Exists { url, lang } => {
      let translator = translator_for(&config, &url, base_url)?;
      if !translator.url_exists(&url, lang.as_ref()) {
        let lang = lang.unwrap_or_else(|| translator.page_language());
        bail!("{url} is not a known {lang} page");
      }
      ui::ok(&format!("{url} exists"));
    }
    Command::Check => run_check(&config)?,
    Command::Localize { file, to, page, out } => {
      let translator = translator_for(&config, &page, base_url)?;
      if let Some(to) = &to
        && !config.languages.contains(to)
        && !to.is_default()
      {
        ui::warn(&format!("{to} is not a configured language, only prefixes will change"));
      }
      run_localize(&translator, &file, to.as_ref(), out.as_deref())?;
    }
  }
  Ok(())
}
