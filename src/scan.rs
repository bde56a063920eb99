use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use walkdir::WalkDir;

use crate::{ARCHIVE_EXTENSION, error::ZipperError};

/// Immediate children of a directory, split by kind.
#[derive(Debug, Default)]
struct DirContents {
    files: Vec<PathBuf>,
    subdirs: usize,
}

fn read_contents(dir: &Path) -> Result<DirContents, ZipperError> {
    let mut contents = DirContents::default();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        // Follows symlinks, so a link to a folder counts as a subfolder.
        if path.is_dir() {
            contents.subdirs += 1;
        } else if path.is_file() {
            contents.files.push(path);
        } else {
            debug!("Skipping {:?}: not a regular file", path);
        }
    }
    contents.files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(contents)
}

/// Files directly inside `dir`, ordered by file name.
///
/// Renaming and zipping both walk this list, so the numbering and the
/// entry order inside the archive are stable across platforms.
pub fn list_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, ZipperError> {
    Ok(read_contents(dir.as_ref())?.files)
}

/// Extension of `path` including its dot, taken from the last `.` of the
/// file name. Dotfiles keep their whole name (`.gitignore`), and a trailing
/// dot means no extension.
pub fn file_extension(path: &Path) -> Option<OsString> {
    let name = path.file_name()?;
    match name.to_str() {
        Some(name) => {
            let dot = name.rfind('.')?;
            (dot + 1 < name.len()).then(|| OsString::from(&name[dot..]))
        }
        None => path.extension().map(|ext| {
            let mut dotted = OsString::from(".");
            dotted.push(ext);
            dotted
        }),
    }
}

pub fn has_archive_extension(path: &Path) -> bool {
    file_extension(path).is_some_and(|ext| ext == format!(".{ARCHIVE_EXTENSION}").as_str())
}

/// Whether `dir` should be zipped: no subfolders, at least one file, and no
/// archive left over from an earlier run.
pub fn is_candidate(dir: impl AsRef<Path>) -> Result<bool, ZipperError> {
    let contents = read_contents(dir.as_ref())?;
    Ok(contents.subdirs == 0
        && !contents.files.is_empty()
        && !contents.files.iter().any(|f| has_archive_extension(f)))
}

/// Collects every candidate folder below `root` (the root itself excluded).
///
/// The walk is depth-first with siblings sorted by name; this is also the
/// order in which folders are processed and reported.
pub fn find_candidates(root: impl AsRef<Path>) -> Result<Vec<PathBuf>, ZipperError> {
    let root = root.as_ref();
    let mut candidates = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        if is_candidate(entry.path())? {
            debug!("Candidate: {:?}", entry.path());
            candidates.push(entry.into_path());
        }
    }
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ext(name: &str) -> Option<OsString> {
        file_extension(Path::new(name))
    }

    #[test]
    fn extension_comes_from_the_last_dot() {
        assert_eq!(ext("dir/photo.jpg"), Some(".jpg".into()));
        assert_eq!(ext("x.tar.gz"), Some(".gz".into()));
        assert_eq!(ext(".gitignore"), Some(".gitignore".into()));
        assert_eq!(ext("README"), None);
        assert_eq!(ext("trailing."), None);
    }

    #[test]
    fn archive_check_is_case_sensitive() {
        assert!(has_archive_extension(Path::new("a/b.zip")));
        assert!(has_archive_extension(Path::new("a/.zip")));
        assert!(!has_archive_extension(Path::new("a/b.ZIP")));
        assert!(!has_archive_extension(Path::new("a/zip")));
    }
}
