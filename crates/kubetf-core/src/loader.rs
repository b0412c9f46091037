//! Multi-document manifest loading
//!
//! Kubernetes manifests are routinely multi-document YAML streams separated by
//! `---`. The loader parses the whole stream eagerly and drops documents that
//! parse to nothing: nulls from empty sections between separators, comment-only
//! blocks, stray `{}` placeholders. Resource shape validation happens later,
//! per document, in the pipeline.

use serde::Deserialize;
use serde_yaml::Value;

use crate::error::Result;

/// Parse a multi-document YAML stream into its non-empty documents.
///
/// Fails on malformed YAML anywhere in the stream. An input that yields no
/// documents at all returns an empty vec; whether that is an error is the
/// caller's decision.
pub fn load_documents(input: &str) -> Result<Vec<Value>> {
    let mut documents = Vec::new();

    for doc in serde_yaml::Deserializer::from_str(input) {
        let value = Value::deserialize(doc)?;
        if !is_empty_document(&value) {
            documents.push(value);
        }
    }

    Ok(documents)
}

/// A document with no content: null, an empty collection or string, or a
/// bare false/zero scalar.
fn is_empty_document(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !*b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Sequence(seq) => seq.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        Value::Tagged(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_document() {
        let docs = load_documents("apiVersion: v1\nkind: Pod\n").unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].get("kind").and_then(|k| k.as_str()), Some("Pod"));
    }

    #[test]
    fn test_multi_document_stream() {
        let input = r#"
apiVersion: v1
kind: ConfigMap
metadata:
  name: first
---
apiVersion: apps/v1
kind: Deployment
metadata:
  name: second
"#;
        let docs = load_documents(input).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(
            docs[1].get("kind").and_then(|k| k.as_str()),
            Some("Deployment")
        );
    }

    #[test]
    fn test_empty_documents_are_filtered() {
        let input = "---\n---\napiVersion: v1\nkind: Pod\n---\n";
        let docs = load_documents(input).unwrap();
        assert_eq!(docs.len(), 1);
    }

    #[test]
    fn test_empty_input_yields_no_documents() {
        assert!(load_documents("").unwrap().is_empty());
        assert!(load_documents("---\n").unwrap().is_empty());
    }

    #[test]
    fn test_comment_only_input_yields_no_documents() {
        assert!(load_documents("# nothing here\n").unwrap().is_empty());
    }

    #[test]
    fn test_empty_mapping_document_is_filtered() {
        assert!(load_documents("{}\n").unwrap().is_empty());

        let docs = load_documents("--- {}\n---\napiVersion: v1\nkind: Pod\n").unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].get("kind").and_then(|k| k.as_str()), Some("Pod"));
    }

    #[test]
    fn test_contentless_scalar_documents_are_filtered() {
        for input in ["[]\n", "\"\"\n", "0\n", "false\n"] {
            assert!(
                load_documents(input).unwrap().is_empty(),
                "{input:?} should be dropped"
            );
        }
    }

    #[test]
    fn test_non_empty_scalars_reach_validation() {
        // Not droppable as empty; the pipeline rejects them per document
        assert_eq!(load_documents("true\n").unwrap().len(), 1);
        assert_eq!(load_documents("just a string\n").unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_yaml_fails() {
        let input = "apiVersion: v1\nkind: [unclosed\n";
        assert!(load_documents(input).is_err());
    }
}
