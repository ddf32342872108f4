use crate::command::patch::PatchArgs;
use crate::error::{PatchError, Result};
use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(
    name = "add-urp",
    version,
    about = "Point the render-pipeline packages of a project at a local graphics repository"
)]
pub struct Cli {
    #[command(flatten)]
    pub args: PatchArgs,
}

impl Cli {
    /// Parses command-line arguments.
    ///
    /// `--help` and `--version` print and exit. Any other parse failure is
    /// returned as `InvalidArguments` with the first line of clap's message.
    pub fn parse_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Ok(cli),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(e) => {
                let rendered = e.to_string();
                let first_line = rendered.lines().next().unwrap_or_default();
                Err(PatchError::InvalidArguments(
                    first_line.trim_start_matches("error: ").to_string(),
                ))
            }
        }
    }
}
