use std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use log::debug;
use tap::Tap;
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use crate::{ARCHIVE_EXTENSION, error::ZipperError};

/// Anything that can pack a list of files into a single archive.
pub trait Archiver {
    /// Writes `files` to `destination`, flat, replacing any existing file.
    fn create_stored_archive(&self, destination: &Path, files: &[PathBuf])
    -> Result<(), ZipperError>;
}

/// Zip archiver that stores entries without compression.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZipArchiver;

impl Archiver for ZipArchiver {
    fn create_stored_archive(
        &self,
        destination: &Path,
        files: &[PathBuf],
    ) -> Result<(), ZipperError> {
        // Every name is validated before the destination is created.
        let names = files
            .iter()
            .map(|path| entry_name(path))
            .collect::<Result<Vec<_>, _>>()?;

        let mut zip = ZipWriter::new(BufWriter::new(File::create(destination)?));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

        for (path, name) in files.iter().zip(names) {
            let size = fs::metadata(path)?.len();
            debug!("Storing {name} ({size} bytes)");

            zip.start_file(name, options.large_file(size >= u32::MAX as u64))?;
            io::copy(&mut File::open(path)?, &mut zip)?;
        }

        zip.finish()?;
        Ok(())
    }
}

/// Entry name inside the archive: the bare file name, which must be UTF-8.
fn entry_name(path: &Path) -> Result<&str, ZipperError> {
    path.file_name()
        .ok_or_else(|| ZipperError::NoFilename(path.to_path_buf()))?
        .to_str()
        .ok_or_else(|| ZipperError::NonUtf8Name(path.to_path_buf()))
}

/// Archive path for `dir`: the full folder path with `.zip` appended.
pub fn archive_path(dir: impl AsRef<Path>) -> PathBuf {
    PathBuf::from(
        dir.as_ref()
            .as_os_str()
            .to_owned()
            .tap_mut(|x| x.push(format!(".{ARCHIVE_EXTENSION}"))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_appended_not_replaced() {
        assert_eq!(archive_path("root/A"), PathBuf::from("root/A.zip"));
        assert_eq!(archive_path("root/v1.2"), PathBuf::from("root/v1.2.zip"));
    }
}
