//! Point a project's render-pipeline packages at a local graphics repository.
//!
//! Rewrites `Packages/manifest.json` so that the Universal RP, Shader Graph
//! and Core RP packages resolve from `file:` paths inside a local checkout
//! instead of from the registry.

pub mod cli;
pub mod command;
pub mod error;
pub mod fs;
pub mod manifest;
pub mod ops;
pub mod packages;
pub mod paths;
pub mod text;

pub use error::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() -> Result<()> {
    let cli = cli::Cli::parse_args(std::env::args_os())?;
    command::patch::execute(cli.args)
}
