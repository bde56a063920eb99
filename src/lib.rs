pub mod archive;
pub mod cli;
pub mod error;
pub mod rename;
pub mod scan;

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, info};
use path_absolutize::Absolutize;

use crate::{
    archive::{Archiver, archive_path},
    cli::{Invocation, Options, usage},
    error::ZipperError,
    rename::rename_files,
    scan::{find_candidates, list_files},
};

/// Extension of the archives we write; folders holding one are skipped.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Printed instead of running when the root is not an existing folder.
pub const MISSING_PATH_MESSAGE: &str = "Specified path doesn't exist.";

/// Zips `files` out of a single folder, deleting the folder afterwards when
/// asked to.
fn process_dir(
    dir: &Path,
    files: &[PathBuf],
    options: &Options,
    archiver: &impl Archiver,
) -> Result<(), ZipperError> {
    let destination = archive_path(dir);
    archiver.create_stored_archive(&destination, files)?;
    info!("Wrote {:?} ({} files)", destination, files.len());

    if options.delete {
        fs::remove_dir_all(dir)?;
        info!("Deleted {:?}", dir);
    }
    Ok(())
}

/// Runs the whole pipeline under `options.root`, writing one progress line
/// per folder to `out`. Returns how many folders were zipped.
///
/// The first error stops the run; folders handled before it keep their
/// archives (and stay deleted if `delete` is set).
pub fn handle_zip(
    options: &Options,
    archiver: &impl Archiver,
    mut out: impl Write,
) -> Result<usize, ZipperError> {
    let root = options.root.as_path();
    if !root.is_dir() {
        return Err(ZipperError::NotFound(root.to_path_buf()));
    }

    info!("Scanning {:?} (rename: {}, delete: {})", root, options.rename, options.delete);
    let dirs = find_candidates(root)?;
    let count = dirs.len();
    info!("Found {count} folders to zip");

    for (i, dir) in dirs.iter().enumerate() {
        let files = if options.rename {
            rename_files(dir)?
        } else {
            list_files(dir)?
        };
        writeln!(out, "[{}/{}] \"{}\"", i + 1, count, dir.display())?;
        process_dir(dir, &files, options, archiver)?;
    }

    info!("=== Zipped {count} folders ===");
    Ok(count)
}

/// Carries out one command-line invocation, writing everything meant for
/// the user to `out`.
///
/// The usage text and a missing root are not errors: both print a message
/// and return `Ok`.
pub fn handle_invocation(
    invocation: Invocation,
    archiver: &impl Archiver,
    mut out: impl Write,
) -> Result<(), ZipperError> {
    let options = match invocation {
        Invocation::Usage => {
            writeln!(out, "{}", usage())?;
            return Ok(());
        }
        Invocation::Run(options) => options,
    };

    if !options.root.is_dir() {
        writeln!(out, "{MISSING_PATH_MESSAGE}")?;
        return Ok(());
    }
    debug!("Absolute root: {:?}", options.root.absolutize()?);

    handle_zip(&options, archiver, out)?;
    Ok(())
}
