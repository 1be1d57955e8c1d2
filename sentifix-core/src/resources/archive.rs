use std::fs;
use std::io::{self, Cursor};
use std::path::Path;

use tracing::trace;
use zip::ZipArchive;

use crate::error::{FixerError, FixerResult};

/// Unpacks a zip archive held in memory below `dest`, returning the number of
/// files written. An entry whose name would land outside `dest` rejects the
/// archive.
pub fn extract_archive(bytes: &[u8], dest: &Path) -> FixerResult<usize> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| FixerError::ArchiveError(format!("failed to open archive: {}", e)))?;

    // refuse the whole archive before anything is written
    for i in 0..archive.len() {
        let entry = archive
            .by_index(i)
            .map_err(|e| FixerError::ArchiveError(format!("failed to read entry {}: {}", i, e)))?;
        if entry.enclosed_name().is_none() {
            return Err(FixerError::ArchiveError(format!(
                "entry {} escapes the target directory",
                entry.name()
            )));
        }
    }

    fs::create_dir_all(dest).map_err(|e| FixerError::io(dest, e))?;

    let mut written = 0;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| FixerError::ArchiveError(format!("failed to read entry {}: {}", i, e)))?;

        let relative = entry
            .enclosed_name()
            .map(Path::to_path_buf)
            .ok_or_else(|| FixerError::ArchiveError(format!("entry {} escapes the target directory", entry.name())))?;
        let target = dest.join(&relative);

        if entry.is_dir() {
            fs::create_dir_all(&target).map_err(|e| FixerError::io(&target, e))?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| FixerError::io(parent, e))?;
        }
        let mut file = fs::File::create(&target).map_err(|e| FixerError::io(&target, e))?;
        io::copy(&mut entry, &mut file).map_err(|e| FixerError::io(&target, e))?;
        trace!(target: "fixer::resources", path = %target.display(), "extracted");
        written += 1;
    }

    Ok(written)
}
