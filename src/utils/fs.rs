use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Check whether a file name carries the given prefix
pub fn has_prefix(file_name: &str, prefix: &str) -> bool {
    file_name.starts_with(prefix)
}

/// Lists the regular files of `dir` whose name starts with `prefix`, sorted by name.
///
/// Non-recursive. Names that are not valid UTF-8 never match.
pub fn list_prefixed_files(dir: &Path, prefix: &str) -> io::Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if !has_prefix(&name, prefix) {
            continue;
        }
        if entry.file_type()?.is_dir() {
            debug!("Ignoring directory {name}");
            continue;
        }
        names.push(name);
    }

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_only_prefixed_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["thumbnail_b.jpg", "other_a.jpg", "thumbnail_a.webp", "resized_thumbnail_a.webp"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("thumbnail_dir.jpg")).unwrap();

        let names = list_prefixed_files(dir.path(), "thumbnail_").unwrap();
        assert_eq!(names, vec!["thumbnail_a.webp", "thumbnail_b.jpg"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_prefixed_files(&dir.path().join("nope"), "thumbnail_").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
