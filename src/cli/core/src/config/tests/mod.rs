/* src/cli/core/src/config/tests/mod.rs */

use super::*;
use pivot_routes::{Language, RoutesConfig};

mod discovery;
mod parsing;
