//! Command extraction from embedded bash code blocks.

use regex::Regex;
use std::sync::LazyLock;

use crate::defaults::{BASH_BLOCK_CLOSE, BASH_BLOCK_OPEN, PROMPT_MARKER};

static BASH_BLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // Non-greedy: the first closing tag after the opening tag ends the block
    Regex::new(&format!(
        "(?s){}(.*?){}",
        regex::escape(BASH_BLOCK_OPEN),
        regex::escape(BASH_BLOCK_CLOSE)
    ))
    .unwrap()
});

/// First prompted command of the first bash block in `fragment`.
///
/// Later blocks in the same fragment are ignored.
pub fn extract_command(fragment: &str) -> Option<String> {
    let body = BASH_BLOCK_PATTERN.captures(fragment)?.get(1)?.as_str();

    body.split('\n')
        .find(|line| line.trim().starts_with(PROMPT_MARKER))
        .map(strip_prompt)
}

fn strip_prompt(line: &str) -> String {
    let line = line.trim_start();
    line.strip_prefix(PROMPT_MARKER)
        .unwrap_or(line)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_prompted_command() {
        let fragment = "<pre><code class=\"language-bash\">❯ echo hi\nhi</code></pre>";
        assert_eq!(extract_command(fragment), Some("echo hi".to_string()));
    }

    #[test]
    fn skips_output_lines_before_prompt() {
        let fragment = "<p>Run:</p><pre><code class=\"language-bash\">$ not this\n   ❯   cargo build --release  \n❯ cargo test</code></pre>";
        assert_eq!(
            extract_command(fragment),
            Some("cargo build --release".to_string())
        );
    }

    #[test]
    fn block_without_prompt_yields_nothing() {
        let fragment = "<pre><code class=\"language-bash\">echo hi\nhi</code></pre>";
        assert_eq!(extract_command(fragment), None);
    }

    #[test]
    fn other_languages_are_ignored() {
        let fragment = "<pre><code class=\"language-python\">❯ python app.py</code></pre>";
        assert_eq!(extract_command(fragment), None);
    }

    #[test]
    fn only_first_block_counts() {
        let fragment = concat!(
            "<pre><code class=\"language-bash\">❯ first</code></pre>",
            "<pre><code class=\"language-bash\">❯ second</code></pre>"
        );
        assert_eq!(extract_command(fragment), Some("first".to_string()));
    }

    #[test]
    fn first_block_without_prompt_hides_later_blocks() {
        let fragment = concat!(
            "<pre><code class=\"language-bash\">output only</code></pre>",
            "<pre><code class=\"language-bash\">❯ second</code></pre>"
        );
        assert_eq!(extract_command(fragment), None);
    }

    #[test]
    fn bare_prompt_yields_empty_command() {
        let fragment = "<pre><code class=\"language-bash\">❯\n</code></pre>";
        assert_eq!(extract_command(fragment), Some(String::new()));
    }

    #[test]
    fn unclosed_block_yields_nothing() {
        let fragment = "<pre><code class=\"language-bash\">❯ ls";
        assert_eq!(extract_command(fragment), None);
    }
}
