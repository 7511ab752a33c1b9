use std::borrow::Cow;
use tracing::debug;

use super::patterns::{member_build_anchor, HELPER_METHOD, HELPER_SENTINEL};
use super::transform::Transformer;

/// Adds `_getCurrentVideoType()` just above the screen's `build` method.
pub struct InsertHelper;

impl Transformer for InsertHelper {
    fn name(&self) -> &'static str {
        "insert-helper"
    }

    fn apply<'a>(&self, source: &'a str) -> Cow<'a, str> {
        if source.contains(HELPER_SENTINEL) {
            return Cow::Borrowed(source);
        }

        let Some(anchor) = member_build_anchor().find(source) else {
            debug!("no build method at member indentation, skipping helper");
            return Cow::Borrowed(source);
        };

        let at = anchor.start();
        let mut out = String::with_capacity(source.len() + HELPER_METHOD.len());
        out.push_str(&source[..at]);
        out.push_str(HELPER_METHOD);
        out.push_str(&source[at..]);
        Cow::Owned(out)
    }
}
