//! Resolving font files by name.

use std::path::{Path, PathBuf};

use directories::{BaseDirs, UserDirs};
use walkdir::WalkDir;

/// Directories that commonly hold installed fonts on the current platform,
/// system wide ones first.
pub fn font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if cfg!(windows) {
        let windir = std::env::var_os("WINDIR")
            .map_or_else(|| PathBuf::from(r"C:\Windows"), PathBuf::from);
        dirs.push(windir.join("Fonts"));
    } else if cfg!(target_os = "macos") {
        dirs.push(PathBuf::from("/Library/Fonts"));
        dirs.push(PathBuf::from("/System/Library/Fonts"));
    } else {
        dirs.push(PathBuf::from("/usr/share/fonts"));
        dirs.push(PathBuf::from("/usr/local/share/fonts"));
    }

    if let Some(font_dir) = UserDirs::new().as_ref().and_then(UserDirs::font_dir) {
        dirs.push(font_dir.to_path_buf());
    }
    if !cfg!(windows) {
        if let Some(base) = BaseDirs::new() {
            dirs.push(base.home_dir().join(".fonts"));
        }
    }

    dirs.dedup();
    dirs
}

/// Find a font file by `name`.
///
/// An existing file at `name` (absolute, or relative to the working
/// directory) wins. Otherwise, a bare file name is searched for
/// case-insensitively in every directory of [`font_dirs`], recursively.
pub fn find_font_file(name: &str) -> Option<PathBuf> {
    let direct = Path::new(name);
    if direct.is_file() {
        return Some(direct.to_path_buf());
    }
    // paths with directory parts are not searched for
    if direct.components().count() != 1 {
        return None;
    }

    font_dirs().iter().find_map(|dir| search_dir(dir, name))
}

/// Recursively search `dir` for a file called `name`, ignoring ASCII case.
/// Unreadable or missing directories are skipped.
pub fn search_dir(dir: &Path, name: &str) -> Option<PathBuf> {
    WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .find(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|file_name| file_name.eq_ignore_ascii_case(name))
        })
        .map(walkdir::DirEntry::into_path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn search_is_recursive_and_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("truetype").join("msttcorefonts");
        std::fs::create_dir_all(&nested).unwrap();
        let font = nested.join("Arial.TTF");
        std::fs::write(&font, b"").unwrap();

        assert_eq!(search_dir(dir.path(), "arial.ttf"), Some(font));
        assert_eq!(search_dir(dir.path(), "arialbd.ttf"), None);
    }

    #[test]
    fn directories_are_not_matched() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("arial.ttf")).unwrap();

        assert_eq!(search_dir(dir.path(), "arial.ttf"), None);
    }

    #[test]
    fn missing_directory_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(search_dir(&dir.path().join("gone"), "arial.ttf"), None);
    }

    #[test]
    fn existing_path_is_used_directly() {
        let dir = tempfile::tempdir().unwrap();
        let font = dir.path().join("custom.otf");
        std::fs::write(&font, b"").unwrap();

        assert_eq!(find_font_file(font.to_str().unwrap()), Some(font));
    }

    #[test]
    fn missing_path_with_directories_is_not_searched() {
        let dir = tempfile::tempdir().unwrap();
        let font = dir.path().join("custom.otf");
        assert_eq!(find_font_file(font.to_str().unwrap()), None);
    }

    #[test]
    fn unknown_name_is_not_found() {
        assert_eq!(find_font_file("no-such-font-7f3a91.ttf"), None);
    }

    #[test]
    fn platform_has_font_dirs() {
        assert!(!font_dirs().is_empty());
    }
}
