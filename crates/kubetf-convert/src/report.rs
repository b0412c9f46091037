//! Pipeline progress events
//!
//! The pipeline reports what it is doing through a [`Reporter`] rather than
//! printing. The CLI renders events to the terminal; tests and library callers
//! can use [`NullReporter`] or capture events for assertions.

use kubetf_core::{Classification, ResourceMeta};

/// One step of pipeline progress, in document order
#[derive(Debug)]
pub enum PipelineEvent<'a> {
    /// A document entered the pipeline (index is 1-based)
    DocumentStarted {
        index: usize,
        total: usize,
        meta: Option<&'a ResourceMeta>,
    },
    /// A valid document was classified
    Classified {
        index: usize,
        classification: Classification,
        transformer: &'a str,
    },
    /// A document converted successfully
    Converted { index: usize },
    /// A document failed; the batch continues
    Failed { index: usize, reason: String },
}

/// Consumer of pipeline progress
pub trait Reporter {
    fn event(&mut self, event: PipelineEvent<'_>);
}

/// Reporter that discards all events
pub struct NullReporter;

impl Reporter for NullReporter {
    fn event(&mut self, _event: PipelineEvent<'_>) {}
}
