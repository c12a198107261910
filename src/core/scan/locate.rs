//! Line-number resolution against a lesson's raw source text.

/// Resolves fragment positions within one file, walking forward so repeated
/// fragments map to successive occurrences.
///
/// When a fragment is not found past the cursor the search restarts from the
/// beginning of the file, which can yield a line earlier than a previous
/// fragment's. A fragment that is never found reports line 1 and leaves the
/// cursor where it was.
#[derive(Debug)]
pub struct LineLocator<'a> {
    raw: &'a str,
    cursor: usize,
}

impl<'a> LineLocator<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw, cursor: 0 }
    }

    /// 1-based line of the fragment's first character.
    pub fn locate(&mut self, fragment: &str) -> usize {
        let found = self.raw[self.cursor..]
            .find(fragment)
            .map(|offset| self.cursor + offset)
            .or_else(|| self.raw.find(fragment));

        match found {
            Some(pos) => {
                self.cursor = pos + fragment.len();
                line_at(self.raw, pos)
            }
            None => 1,
        }
    }
}

fn line_at(raw: &str, pos: usize) -> usize {
    1 + raw.as_bytes()[..pos].iter().filter(|&&b| b == b'\n').count()
}
