use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    error::ZipperError,
    scan::{file_extension, list_files},
};

const MIN_WIDTH: usize = 3;

/// Width of the zero-padded sequence for `count` files, never below three.
pub fn sequence_width(count: usize) -> usize {
    count.to_string().len().max(MIN_WIDTH)
}

/// New file name for the `index`-th file (1-based), keeping its extension.
pub fn sequence_name(index: usize, width: usize, original: &Path) -> OsString {
    let mut name = OsString::from(format!("{index:0width$}"));
    if let Some(ext) = file_extension(original) {
        name.push(ext);
    }
    name
}

/// Renames every file in `dir` to `001.ext`, `002.ext`, ... in listing order.
///
/// A move onto an existing file aborts with [`ZipperError::RenameTarget`];
/// files renamed before that point stay renamed.
pub fn rename_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, ZipperError> {
    let dir = dir.as_ref();
    let files = list_files(dir)?;
    let width = sequence_width(files.len());

    let mut renamed = Vec::with_capacity(files.len());
    for (i, from) in files.into_iter().enumerate() {
        let to = dir.join(sequence_name(i + 1, width, &from));
        if to != from {
            if to.exists() {
                return Err(ZipperError::RenameTarget { from, to });
            }
            debug!("Rename {:?} -> {:?}", from, to);
            fs::rename(&from, &to)?;
        }
        renamed.push(to);
    }
    Ok(renamed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_has_a_floor_of_three() {
        assert_eq!(sequence_width(1), 3);
        assert_eq!(sequence_width(7), 3);
        assert_eq!(sequence_width(12), 3);
        assert_eq!(sequence_width(999), 3);
        assert_eq!(sequence_width(1000), 4);
        assert_eq!(sequence_width(1500), 4);
    }

    #[test]
    fn names_keep_the_last_extension() {
        assert_eq!(sequence_name(7, 3, Path::new("a/photo.jpg")), "007.jpg");
        assert_eq!(sequence_name(12, 4, Path::new("x.tar.gz")), "0012.gz");
        assert_eq!(sequence_name(1, 3, Path::new("README")), "001");
        assert_eq!(sequence_name(2, 3, Path::new(".gitignore")), "002.gitignore");
    }
}
