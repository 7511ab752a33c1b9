use std::borrow::Cow;

use super::build_method::RewriteBuild;
use super::helper::InsertHelper;
use super::import::InsertImport;

/// A textual rewrite of one source buffer.
///
/// Implementations must be idempotent and total: applying a transformer to
/// its own output returns that output unchanged, and any input that lacks the
/// transformer's anchors comes back borrowed.
pub trait Transformer: Send + Sync {
    fn name(&self) -> &'static str;

    fn apply<'a>(&self, source: &'a str) -> Cow<'a, str>;
}

/// Ordered chain of transformers applied to each game file.
pub struct Pipeline {
    stages: Vec<Box<dyn Transformer>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Transformer>>) -> Self {
        Self { stages }
    }

    /// Import, then helper, then build rewrite.
    pub fn video_retrofit() -> Self {
        Self::new(vec![
            Box::new(InsertImport),
            Box::new(InsertHelper),
            Box::new(RewriteBuild),
        ])
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    pub fn run<'a>(&self, source: &'a str) -> Cow<'a, str> {
        let mut current = Cow::Borrowed(source);
        for stage in &self.stages {
            current = match current {
                Cow::Borrowed(text) => stage.apply(text),
                Cow::Owned(text) => {
                    let rewritten = match stage.apply(&text) {
                        Cow::Borrowed(_) => None,
                        Cow::Owned(rewritten) => Some(rewritten),
                    };
                    Cow::Owned(rewritten.unwrap_or(text))
                }
            };
        }
        current
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::video_retrofit()
    }
}
