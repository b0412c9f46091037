//! Conversion pipeline
//!
//! Drives validate → classify → dispatch across all documents of one manifest,
//! strictly in order, isolating per-document failures. The pipeline never
//! touches output files; callers take the summary and render it in single-file
//! or per-resource mode (see [`crate::output`]).

use kubetf_core::{Classification, Classifier, ResourceMeta};
use serde_yaml::Value;

use crate::error::{ConvertError, Result};
use crate::report::{PipelineEvent, Reporter};
use crate::transformer::Transform;

/// Outcome of one document's trip through the pipeline
#[derive(Debug)]
pub struct DocumentOutcome {
    /// 1-based document index in the input stream
    pub index: usize,
    /// Extracted metadata, present when the document passed validation
    pub meta: Option<ResourceMeta>,
    /// Routing decision, present when the document passed validation
    pub classification: Option<Classification>,
    /// Generated HCL, or the per-document error
    pub result: Result<String>,
}

impl DocumentOutcome {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

/// Aggregated result of one run
#[derive(Debug)]
pub struct RunSummary {
    pub outcomes: Vec<DocumentOutcome>,
}

impl RunSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Exit-status policy: a run is a success if any document converted
    pub fn any_succeeded(&self) -> bool {
        self.outcomes.iter().any(|o| o.succeeded())
    }
}

/// One-pass, sequential conversion pipeline
pub struct Pipeline<'a> {
    classifier: Classifier,
    standard: &'a dyn Transform,
    custom: &'a dyn Transform,
    reporter: &'a mut dyn Reporter,
}

impl<'a> Pipeline<'a> {
    /// Pipeline with the default standard API group registry
    pub fn new(
        standard: &'a dyn Transform,
        custom: &'a dyn Transform,
        reporter: &'a mut dyn Reporter,
    ) -> Self {
        Self::with_classifier(Classifier::default(), standard, custom, reporter)
    }

    pub fn with_classifier(
        classifier: Classifier,
        standard: &'a dyn Transform,
        custom: &'a dyn Transform,
        reporter: &'a mut dyn Reporter,
    ) -> Self {
        Self {
            classifier,
            standard,
            custom,
            reporter,
        }
    }

    /// Process every document, in order, one at a time.
    ///
    /// Validation and conversion failures are recorded and reported per
    /// document; nothing short of the caller aborts the batch.
    pub fn run(&mut self, docs: &[Value]) -> RunSummary {
        let total = docs.len();
        let mut outcomes = Vec::with_capacity(total);

        for (i, doc) in docs.iter().enumerate() {
            let index = i + 1;
            outcomes.push(self.process_document(index, total, doc));
        }

        RunSummary { outcomes }
    }

    fn process_document(&mut self, index: usize, total: usize, doc: &Value) -> DocumentOutcome {
        let meta = ResourceMeta::from_value(doc);
        self.reporter.event(PipelineEvent::DocumentStarted {
            index,
            total,
            meta: meta.as_ref(),
        });

        let Some(meta) = meta else {
            let err = ConvertError::Validation(format!(
                "document {index} is missing apiVersion or kind"
            ));
            tracing::warn!(index, "skipping invalid document: {err}");
            self.reporter.event(PipelineEvent::Failed {
                index,
                reason: err.to_string(),
            });
            return DocumentOutcome {
                index,
                meta: None,
                classification: None,
                result: Err(err),
            };
        };

        let classification = self.classifier.classify(&meta.api_version, &meta.kind);
        let transformer = match classification {
            Classification::Standard => self.standard,
            Classification::Custom => self.custom,
        };
        self.reporter.event(PipelineEvent::Classified {
            index,
            classification,
            transformer: transformer.label(),
        });

        let result = transformer.transform(doc);
        match &result {
            Ok(_) => self.reporter.event(PipelineEvent::Converted { index }),
            Err(err) => {
                tracing::warn!(index, resource = %meta, "conversion failed: {err}");
                self.reporter.event(PipelineEvent::Failed {
                    index,
                    reason: err.to_string(),
                });
            }
        }

        DocumentOutcome {
            index,
            meta: Some(meta),
            classification: Some(classification),
            result,
        }
    }
}
