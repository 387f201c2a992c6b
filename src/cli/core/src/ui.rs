/* src/cli/core/src/ui.rs */

#![allow(clippy::print_stdout, clippy::print_stderr)]

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn ok(msg: &str) {
  println!("  {GREEN}\u{2713}{RESET} {msg}");
}

pub fn fail(msg: &str) {
  println!("  {RED}\u{2717}{RESET} {msg}");
}

pub fn warn(msg: &str) {
  eprintln!("  {YELLOW}warning{RESET}: {msg}");
}

/// Bare value on stdout, for piping into other tools.
pub fn value(msg: &str) {
  println!("{msg}");
}

pub fn banner(cmd: &str) {
  println!();
  println!("  {BOLD}pivot-routes{RESET} {cmd} {DIM}v{VERSION}{RESET}");
  println!();
}

pub fn blank() {
  println!();
}
