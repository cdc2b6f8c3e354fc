use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Immediate subdirectories of `dir`, sorted by file name
///
/// Symbolic links are not followed, so a link to a directory is not listed.
pub fn list_subdirectories(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut subdirectories = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_dir() {
            subdirectories.push(entry.into_path());
        }
    }

    Ok(subdirectories)
}

/// Create a directory symbolic link at `link` pointing to `target`
///
/// Fails with `AlreadyExists` when anything, including a dangling link, is at `link`.
pub fn create_dir_link(target: &Path, link: &Path) -> io::Result<()> {
    if link.symlink_metadata().is_ok() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", link.display()),
        ));
    }

    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(target, link)
    }

    #[cfg(windows)]
    {
        std::os::windows::fs::symlink_dir(target, link)
    }

    #[cfg(not(any(unix, windows)))]
    {
        let _ = target;
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "directory links are not supported on this platform",
        ))
    }
}
