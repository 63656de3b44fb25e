//! Lexical path arithmetic
//!
//! Virtual file paths contain glob syntax and never exist on disk, so all
//! joining and diffing is done on path components without touching the file
//! system.

use std::path::{Component, Path, PathBuf};

/// Collapse `.` and `..` components, like a POSIX `resolve` without a cwd.
///
/// `..` above the root is dropped; leading `..` of a relative path is kept.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                },
                Some(Component::RootDir | Component::Prefix(_)) => {},
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Join `segment` onto `base` and normalize. An absolute segment replaces `base`.
#[must_use]
pub fn resolve(base: &Path, segment: impl AsRef<Path>) -> PathBuf {
    normalize(&base.join(segment))
}

/// Relative path from `from` to `to`, `/`-separated. Empty when they are equal.
///
/// Both paths must be absolute, or both relative to the same base. When only
/// one of them is absolute there is no lexical answer and `to` is returned
/// normalized; callers resolve against the current directory first.
#[must_use]
pub fn relative(from: &Path, to: &Path) -> String {
    let from = normalize(from);
    let to = normalize(to);
    if from.has_root() != to.has_root() {
        return to.to_string_lossy().into_owned();
    }
    let from: Vec<Component<'_>> = from.components().filter(|c| *c != Component::CurDir).collect();
    let to: Vec<Component<'_>> = to.components().filter(|c| *c != Component::CurDir).collect();

    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

    let mut parts: Vec<String> = Vec::with_capacity(from.len() - common + to.len() - common);
    parts.extend(from[common..].iter().map(|_| "..".to_string()));
    parts.extend(to[common..].iter().map(|c| c.as_os_str().to_string_lossy().into_owned()));
    parts.join("/")
}

/// Parent directory of an importer, falling back to `.` for bare file names
#[must_use]
pub fn importer_dir(importer: &Path) -> &Path {
    importer.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| Path::new("."))
}
