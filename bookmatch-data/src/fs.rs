//! Capability-based filesystem helpers built on `cap-std` and `camino`.

use std::io;
use std::path::Component;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open a file for reading using ambient authority.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create `path` and any missing ancestors, returning a handle to it.
///
/// An empty path resolves to the current directory.
pub fn create_dir_all(path: &Utf8Path) -> io::Result<fs_utf8::Dir> {
    let (base, relative) = split_root(path)?;
    if relative.as_str().is_empty() {
        return Ok(base);
    }
    base.create_dir_all(&relative)?;
    base.open_dir(&relative)
}

/// Split a path into an ambient root directory and the remainder below it.
///
/// Absolute paths are anchored at their root (or Windows prefix); relative
/// paths at the current directory.
fn split_root(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let mut root = Utf8PathBuf::new();
    let mut relative = Utf8PathBuf::new();
    for component in path.as_std_path().components() {
        match component {
            Component::Prefix(prefix) => {
                let text = prefix
                    .as_os_str()
                    .to_str()
                    .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
                root.push(text);
            }
            Component::RootDir => root.push(std::path::MAIN_SEPARATOR_STR),
            Component::CurDir => {}
            Component::ParentDir => relative.push(".."),
            Component::Normal(part) => {
                let text = part
                    .to_str()
                    .ok_or_else(|| io::Error::other("non-UTF-8 path component"))?;
                relative.push(text);
            }
        }
    }
    if root.as_str().is_empty() {
        root.push(".");
    }
    let dir = fs_utf8::Dir::open_ambient_dir(&root, ambient_authority())?;
    Ok((dir, relative))
}
