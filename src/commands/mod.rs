//! Command implementations
//!
//! Entry points behind the CLI subcommands.

mod simple;

pub use simple::run_simple;
