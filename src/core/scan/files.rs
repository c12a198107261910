//! Lesson file discovery.

use glob_match::glob_match;
use std::fs;
use std::path::Path;

use crate::defaults::{self, DOCUMENT_EXTENSION};

/// List lesson documents in `dir`, sorted by name.
///
/// Only the directory's own entries are considered (no recursion). Reserved
/// metadata files and anything matching `exclude` are left out. A missing or
/// unreadable directory yields an empty list.
pub fn find_lesson_files(dir: &Path, exclude: &[String]) -> Vec<String> {
    let mut files = Vec::new();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return files,
    };

    for entry in entries.flatten() {
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(_) => continue,
        };

        if !name.ends_with(DOCUMENT_EXTENSION) || defaults::is_reserved(&name) {
            continue;
        }

        if exclude.iter().any(|pattern| glob_match(pattern, &name)) {
            continue;
        }

        files.push(name);
    }

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "{}").unwrap();
    }

    #[test]
    fn lists_json_files_sorted() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "b-lesson.json");
        touch(temp_dir.path(), "a-lesson.json");
        touch(temp_dir.path(), "notes.md");
        touch(temp_dir.path(), "lesson.json.bak");

        let files = find_lesson_files(temp_dir.path(), &[]);
        assert_eq!(files, vec!["a-lesson.json", "b-lesson.json"]);
    }

    #[test]
    fn skips_reserved_files() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["topics.json", "course.json", "index.json", "quiz.json", "intro.json"] {
            touch(temp_dir.path(), name);
        }

        let files = find_lesson_files(temp_dir.path(), &[]);
        assert_eq!(files, vec!["intro.json"]);
    }

    #[test]
    fn applies_exclude_globs() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "draft-setup.json");
        touch(temp_dir.path(), "setup.json");

        let files = find_lesson_files(temp_dir.path(), &["draft-*.json".to_string()]);
        assert_eq!(files, vec!["setup.json"]);
    }

    #[test]
    fn missing_directory_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let files = find_lesson_files(&temp_dir.path().join("absent"), &[]);
        assert!(files.is_empty());
    }

    #[test]
    fn sorts_by_byte_order() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "b.json");
        touch(temp_dir.path(), "Z.json");
        touch(temp_dir.path(), "a.json");

        let files = find_lesson_files(temp_dir.path(), &[]);
        assert_eq!(files, vec!["Z.json", "a.json", "b.json"]);
    }
}
