//! Fixed lesson-format constants shared by the scanner.

/// Filenames that hold course metadata rather than lesson content.
pub const RESERVED_FILES: &[&str] = &["topics.json", "course.json", "index.json", "quiz.json"];

/// Extension a lesson document must carry to be considered.
pub const DOCUMENT_EXTENSION: &str = ".json";

/// Field holding the ordered lesson fragments.
pub const CONTENT_FIELD: &str = "content";

/// Fragments without this substring are never inspected.
pub const CODE_MARKER: &str = "<pre><code";

pub const BASH_BLOCK_OPEN: &str = r#"<pre><code class="language-bash">"#;
pub const BASH_BLOCK_CLOSE: &str = "</code></pre>";

/// Interactive shell prompt preceding a command line.
pub const PROMPT_MARKER: char = '❯';

pub fn is_reserved(filename: &str) -> bool {
    RESERVED_FILES.contains(&filename)
}
