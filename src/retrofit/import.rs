use std::borrow::Cow;
use tracing::debug;

use super::patterns::{import_line, VIDEO_IMPORT};
use super::transform::Transformer;

/// Adds the video widget import right after the last existing import.
///
/// Files without any import statement are left alone.
pub struct InsertImport;

impl Transformer for InsertImport {
    fn name(&self) -> &'static str {
        "insert-import"
    }

    fn apply<'a>(&self, source: &'a str) -> Cow<'a, str> {
        if source.contains(VIDEO_IMPORT) {
            return Cow::Borrowed(source);
        }

        let Some(last) = import_line().find_iter(source).last() else {
            debug!("no import statement found, skipping video import");
            return Cow::Borrowed(source);
        };

        let at = last.end();
        let mut out = String::with_capacity(source.len() + VIDEO_IMPORT.len() + 1);
        out.push_str(&source[..at]);
        out.push_str(VIDEO_IMPORT);
        out.push('\n');
        out.push_str(&source[at..]);
        Cow::Owned(out)
    }
}
