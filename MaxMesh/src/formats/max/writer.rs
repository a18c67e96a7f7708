//! Output file writing

use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::Builder;

use crate::error::{Error, Result};

/// Write `data` to `path`, replacing any existing file.
///
/// The bytes are staged in a temporary file next to `path` and only moved
/// into place once fully flushed, so a failed write never leaves a partial
/// output file behind.
///
/// A new file gets the same mode as one made by [`std::fs::write`]; an
/// existing file keeps its mode.
///
/// # Errors
/// Returns [`Error::FileOpen`] if the destination directory is not writable.
pub fn write_bytes<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let open_err = |source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    };

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Narrowed by the umask at creation.
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let staged = builder.tempfile_in(dir).map_err(open_err)?;
    {
        let mut writer = BufWriter::new(staged.as_file());
        writer.write_all(data)?;
        writer.flush()?;
    }
    if let Ok(existing) = std::fs::metadata(path) {
        staged.as_file().set_permissions(existing.permissions())?;
    }
    staged.persist(path).map_err(|e| open_err(e.error))?;

    tracing::debug!("Wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        std::fs::write(&path, b"old contents").unwrap();

        write_bytes(&path, b"new").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_mode_matches_fs_write() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain.bin");
        let staged = dir.path().join("staged.bin");
        std::fs::write(&plain, b"mesh").unwrap();
        write_bytes(&staged, b"mesh").unwrap();

        let mode = |path: &Path| std::fs::metadata(path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&staged), mode(&plain));
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_file_keeps_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sim3d1.max");
        std::fs::write(&path, b"old").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640)).unwrap();

        write_bytes(&path, b"new").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn test_missing_directory_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.bin");

        match write_bytes(&path, b"data") {
            Err(Error::FileOpen { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(!path.exists());
    }
}
