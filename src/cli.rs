use std::{ffi::OsString, path::PathBuf};

use clap::Parser;

/// Token that asks for the usage text instead of a run.
pub const HELP_TOKEN: &str = "/?";
/// Delete each folder once it has been zipped.
pub const DELETE_SWITCH: &str = "/d";
/// Renumber files before zipping.
pub const RENAME_SWITCH: &str = "/r";

const BIN_NAME: &str = "masszipper";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Path to start searching for folders with files
    #[arg(allow_hyphen_values = true)]
    pub path: Option<PathBuf>,

    /// Switches: /d deletes zipped folders, /r renames files to 001, 002, ...
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub switches: Vec<OsString>,
}

/// What a single invocation should do.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Usage,
    Run(Options),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub root: PathBuf,
    pub delete: bool,
    pub rename: bool,
}

impl Cli {
    // Unknown switches are ignored on purpose; only exact tokens count.
    pub fn into_invocation(self) -> Invocation {
        let Some(root) = self.path else {
            return Invocation::Usage;
        };
        if root.as_os_str() == HELP_TOKEN {
            return Invocation::Usage;
        }
        let has = |token: &str| self.switches.iter().any(|s| s == token);
        Invocation::Run(Options {
            delete: has(DELETE_SWITCH),
            rename: has(RENAME_SWITCH),
            root,
        })
    }
}

pub fn usage() -> String {
    format!(
        "{name} {version}\n\
         Usage: {name} path [/d] [/r]\n       \
         path - path to start searching for folders with files\n       \
         /d   - delete folders after they are zipped\n       \
         /r   - rename files as \"001\", \"002\", ..., \"999\" before zipping",
        name = BIN_NAME,
        version = env!("CARGO_PKG_VERSION"),
    )
}
