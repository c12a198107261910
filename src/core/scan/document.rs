//! Lesson document loading and fragment selection.

use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use crate::defaults::{CODE_MARKER, CONTENT_FIELD};
use crate::io;

/// Why a lesson file produced no fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// File could not be opened or is not UTF-8 text.
    Unreadable { error: String },
    InvalidJson { error: String },
    /// Top-level value is not an object.
    NotAnObject,
    MissingContent,
    ContentNotArray,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Unreadable { error } => write!(f, "unreadable ({})", error),
            SkipReason::InvalidJson { error } => write!(f, "invalid JSON ({})", error),
            SkipReason::NotAnObject => write!(f, "top-level value is not an object"),
            SkipReason::MissingContent => write!(f, "no `{}` field", CONTENT_FIELD),
            SkipReason::ContentNotArray => write!(f, "`{}` is not an array", CONTENT_FIELD),
        }
    }
}

/// A parsed lesson alongside the untouched source text.
///
/// Line numbers are resolved against `raw`, never against a re-serialized form.
#[derive(Debug)]
pub struct Document {
    pub raw: String,
    pub value: Value,
}

impl Document {
    pub fn parse(raw: String) -> Result<Self, SkipReason> {
        let value = serde_json::from_str(&raw).map_err(|e| SkipReason::InvalidJson {
            error: e.to_string(),
        })?;
        Ok(Self { raw, value })
    }

    /// String fragments of `content` that embed a code block, in array order.
    pub fn code_fragments(&self) -> Result<Vec<&str>, SkipReason> {
        let object = self.value.as_object().ok_or(SkipReason::NotAnObject)?;
        let content = object
            .get(CONTENT_FIELD)
            .ok_or(SkipReason::MissingContent)?
            .as_array()
            .ok_or(SkipReason::ContentNotArray)?;

        Ok(content
            .iter()
            .filter_map(Value::as_str)
            .filter(|fragment| fragment.contains(CODE_MARKER))
            .collect())
    }
}

pub fn load_document(path: &Path) -> Result<Document, SkipReason> {
    let raw = io::read_file(path, "read lesson").map_err(|e| SkipReason::Unreadable {
        error: e.details["error"]
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| e.message.clone()),
    })?;
    Document::parse(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(raw: &str) -> Document {
        Document::parse(raw.to_string()).unwrap()
    }

    #[test]
    fn selects_string_fragments_with_code() {
        let doc = parse(
            r#"{"content": ["<p>intro</p>", 42, "<pre><code>ls</code></pre>", null, "<pre><code class=\"language-bash\">x</code></pre>"]}"#,
        );

        let fragments = doc.code_fragments().unwrap();
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0], "<pre><code>ls</code></pre>");
    }

    #[test]
    fn keeps_raw_text() {
        let raw = "{\n  \"content\": []\n}\n";
        let doc = parse(raw);
        assert_eq!(doc.raw, raw);
    }

    #[test]
    fn invalid_json_is_skipped() {
        let result = Document::parse("{\"content\": [".to_string());
        assert!(matches!(result, Err(SkipReason::InvalidJson { .. })));
    }

    #[test]
    fn shape_mismatches_are_skipped() {
        assert_eq!(parse("[]").code_fragments(), Err(SkipReason::NotAnObject));
        assert_eq!(
            parse(r#"{"title": "x"}"#).code_fragments(),
            Err(SkipReason::MissingContent)
        );
        assert_eq!(
            parse(r#"{"content": "<pre><code>"}"#).code_fragments(),
            Err(SkipReason::ContentNotArray)
        );
    }

    #[test]
    fn unreadable_file_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let dir_named_like_lesson = temp_dir.path().join("folder.json");
        fs::create_dir(&dir_named_like_lesson).unwrap();

        let result = load_document(&dir_named_like_lesson);
        assert!(matches!(result, Err(SkipReason::Unreadable { .. })));
    }

    #[test]
    fn skip_reason_serializes_with_kind_tag() {
        let value = serde_json::to_value(SkipReason::InvalidJson {
            error: "EOF".to_string(),
        })
        .unwrap();
        assert_eq!(value["kind"], "invalid_json");
        assert_eq!(value["error"], "EOF");

        let value = serde_json::to_value(SkipReason::MissingContent).unwrap();
        assert_eq!(value["kind"], "missing_content");
    }
}
