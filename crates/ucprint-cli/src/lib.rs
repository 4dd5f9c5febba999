//! ucprint CLI - print Unicode code points as UTF-8
//!
//! Each positional argument is read as a hexadecimal code point, encoded, and
//! written to standard output with no separator. A single newline follows
//! once every argument has been printed.
//!
//! # Library Usage
//!
//! ```rust
//! use ucprint_cli::{RunOptions, run};
//!
//! let mut out: Vec<u8> = Vec::new();
//! run(&["41", "e9"], &RunOptions::default(), &mut out).unwrap();
//! assert_eq!(out, "Aé\n".as_bytes());
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! ucprint 48 49 1f600      # prints "HI😀"
//! ucprint --passthrough 41 zz 42
//! UCPRINT_LOG=debug ucprint 20ac
//! ```
//!
//! # Exit status
//!
//! | code | meaning |
//! |------|---------|
//! | 0 | success |
//! | 1 | usage error: empty or malformed argument |
//! | 2 | invalid code point: surrogate, above U+10FFFF, or negative |

pub mod app;
pub mod error;
pub mod logging;
pub mod options;

pub use app::{run, run_cli};
pub use error::RunError;
pub use options::{InvalidArgumentPolicy, RunOptions};
