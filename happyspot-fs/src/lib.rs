//! Capability-based file access for happyspot caches and feed snapshots.
//!
//! Every helper resolves an ambient directory once and then operates on
//! names relative to it through `cap-std`, so callers never juggle raw
//! `std::fs` paths. Paths are `camino` UTF-8 paths throughout.
#![forbid(unsafe_code)]

use std::io;
use std::path::Component;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;

pub use cap_std::fs_utf8::Dir;

const TEMP_SUFFIX: &str = ".partial";

/// Open `path` as a directory capability.
pub fn open_dir(path: &Utf8Path) -> io::Result<Dir> {
    Dir::open_ambient_dir(path, ambient_authority())
}

/// Split `path` into a capability for its parent directory and its file name.
pub fn parent_dir_and_name(path: &Utf8Path) -> io::Result<(Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    Ok((open_dir(parent)?, name.to_owned()))
}

/// Read a whole UTF-8 file into memory.
pub fn read_utf8(path: &Utf8Path) -> io::Result<String> {
    let (dir, name) = parent_dir_and_name(path)?;
    dir.read_to_string(name)
}

/// Replace the contents of `path`, creating parent directories as needed.
///
/// The data is first written to a sibling `.partial` file which is then
/// renamed over the target, so readers never observe a half-written file.
pub fn write_utf8(path: &Utf8Path, contents: &str) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let (dir, name) = parent_dir_and_name(path)?;
    let staging = format!("{name}{TEMP_SUFFIX}");
    dir.write(&staging, contents)?;
    dir.rename(&staging, &dir, &name)
}

/// Report whether `path` names an existing regular file.
///
/// A missing file or parent directory is `Ok(false)`; other I/O failures
/// are returned.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = match parent_dir_and_name(path) {
        Ok(found) => found,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(err),
    };
    match dir.metadata(&name) {
        Ok(meta) => Ok(meta.is_file()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

/// Create every missing directory above `path`.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) else {
        return Ok(());
    };
    let (anchor, relative) = anchor_and_relative(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    anchor.create_dir_all(&relative)
}

/// Split `dir` into an ambient anchor directory and the path below it.
///
/// Absolute paths anchor at their root (or Windows prefix); relative paths
/// anchor at the current directory.
pub fn anchor_and_relative(dir: &Utf8Path) -> io::Result<(Dir, Utf8PathBuf)> {
    let mut anchor = Utf8PathBuf::new();
    let mut relative = Utf8PathBuf::new();
    for component in dir.as_std_path().components() {
        match component {
            Component::Prefix(prefix) => {
                let text = prefix
                    .as_os_str()
                    .to_str()
                    .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
                anchor.push(text);
            }
            Component::RootDir => anchor.push(std::path::MAIN_SEPARATOR_STR),
            Component::CurDir => {}
            other => {
                let text = other
                    .as_os_str()
                    .to_str()
                    .ok_or_else(|| io::Error::other("non-UTF-8 path component"))?;
                relative.push(text);
            }
        }
    }
    if anchor.as_str().is_empty() {
        anchor.push(".");
    }
    Ok((open_dir(&anchor)?, relative))
}
