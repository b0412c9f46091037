//! Resource document metadata extraction

use serde_yaml::Value;

/// Identifying fields pulled from one parsed Kubernetes document.
///
/// `api_version` and `kind` are mandatory; `name` and `namespace` fall back to
/// `unnamed` / `default` when the manifest omits them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceMeta {
    pub api_version: String,
    pub kind: String,
    pub name: String,
    pub namespace: String,
}

impl ResourceMeta {
    /// Extract metadata from a parsed document.
    ///
    /// Returns `None` if the document is not a mapping or is missing
    /// `apiVersion` or `kind` - the caller treats that as a validation
    /// failure for this document.
    pub fn from_value(doc: &Value) -> Option<Self> {
        if !doc.is_mapping() {
            return None;
        }

        let api_version = doc.get("apiVersion")?.as_str()?.to_string();
        let kind = doc.get("kind")?.as_str()?.to_string();

        let metadata = doc.get("metadata");
        let name = metadata
            .and_then(|m| m.get("name"))
            .and_then(|n| n.as_str())
            .unwrap_or("unnamed")
            .to_string();
        let namespace = metadata
            .and_then(|m| m.get("namespace"))
            .and_then(|n| n.as_str())
            .unwrap_or("default")
            .to_string();

        Some(Self {
            api_version,
            kind,
            name,
            namespace,
        })
    }

    /// True when the resource sits in a namespace other than `default`
    pub fn has_explicit_namespace(&self) -> bool {
        self.namespace != "default"
    }
}

impl std::fmt::Display for ResourceMeta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} in {} ({})",
            self.kind, self.name, self.namespace, self.api_version
        )
    }
}
