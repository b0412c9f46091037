//! Resource classification - standard provider types vs generic manifests
//!
//! The Terraform Kubernetes provider only has typed resources for the built-in
//! API groups. Everything else (CRDs and the custom resources they define) has
//! to be expressed as a `kubernetes_manifest` block. This module decides which
//! side of that line a resource falls on, from nothing but its `apiVersion`
//! and `kind`.
//!
//! The decision is a pure function of its inputs: no state, no allocation, safe
//! to call from any number of threads.

use phf::phf_set;

/// API group/versions with typed representations in the Kubernetes provider.
///
/// `admissionregistration.k8s.io/*` is deliberately absent: k2tf produces
/// broken HCL for webhook configurations (sl1pm4t/k2tf#134), so those
/// resources are routed through the generic converter instead.
pub static STANDARD_API_GROUPS: phf::Set<&'static str> = phf_set! {
    "v1",
    "apps/v1",
    "batch/v1",
    "batch/v1beta1",
    "networking.k8s.io/v1",
    "networking.k8s.io/v1beta1",
    "rbac.authorization.k8s.io/v1",
    "rbac.authorization.k8s.io/v1beta1",
    "storage.k8s.io/v1",
    "storage.k8s.io/v1beta1",
    "policy/v1",
    "policy/v1beta1",
    "autoscaling/v1",
    "autoscaling/v2",
    "autoscaling/v2beta1",
    "autoscaling/v2beta2",
    "coordination.k8s.io/v1",
    "coordination.k8s.io/v1beta1",
    "discovery.k8s.io/v1",
    "discovery.k8s.io/v1beta1",
    "events.k8s.io/v1",
    "events.k8s.io/v1beta1",
    "extensions/v1beta1",
    "flowcontrol.apiserver.k8s.io/v1beta1",
    "flowcontrol.apiserver.k8s.io/v1beta2",
    "node.k8s.io/v1",
    "node.k8s.io/v1beta1",
    "scheduling.k8s.io/v1",
    "scheduling.k8s.io/v1beta1",
    "authentication.k8s.io/v1",
    "authentication.k8s.io/v1beta1",
    "authorization.k8s.io/v1",
    "authorization.k8s.io/v1beta1",
    "certificates.k8s.io/v1",
    "certificates.k8s.io/v1beta1",
};

/// API group prefix that marks CustomResourceDefinitions
const APIEXTENSIONS_PREFIX: &str = "apiextensions.k8s.io/";

/// How a resource should be converted to HCL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Typed provider resource, convertible with k2tf
    Standard,
    /// CRD or CRD-backed resource, needs a generic kubernetes_manifest block
    Custom,
}

impl Classification {
    /// Label used in generated file headers and progress output
    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Custom => "custom",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies resources against an immutable registry of standard API groups.
///
/// The registry is injected at construction so new Kubernetes API versions can
/// be supported without touching the decision logic. [`Classifier::default`]
/// uses [`STANDARD_API_GROUPS`].
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    registry: &'static phf::Set<&'static str>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&STANDARD_API_GROUPS)
    }
}

impl Classifier {
    /// Create a classifier over a custom registry
    pub fn new(registry: &'static phf::Set<&'static str>) -> Self {
        Self { registry }
    }

    /// Classify a resource by its apiVersion and kind.
    ///
    /// Decision order, first match wins:
    /// 1. CRDs are always custom, whatever the registry says.
    /// 2. Registry member → standard.
    /// 3. Unrecognized group (apiVersion contains `/`) → custom.
    /// 4. Core-group version other than `v1` → custom.
    /// 5. Remaining case is `v1` → standard.
    pub fn classify(&self, api_version: &str, kind: &str) -> Classification {
        if api_version.starts_with(APIEXTENSIONS_PREFIX) && kind == "CustomResourceDefinition" {
            return Classification::Custom;
        }

        if self.registry.contains(api_version) {
            return Classification::Standard;
        }

        if api_version.contains('/') {
            return Classification::Custom;
        }

        if api_version != "v1" {
            return Classification::Custom;
        }

        Classification::Standard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(api_version: &str, kind: &str) -> Classification {
        Classifier::default().classify(api_version, kind)
    }

    #[test]
    fn test_registry_members_are_standard() {
        assert_eq!(classify("v1", "ConfigMap"), Classification::Standard);
        assert_eq!(classify("apps/v1", "Deployment"), Classification::Standard);
        assert_eq!(classify("batch/v1", "Job"), Classification::Standard);
        assert_eq!(
            classify("rbac.authorization.k8s.io/v1", "ClusterRole"),
            Classification::Standard
        );
        assert_eq!(
            classify("networking.k8s.io/v1", "Ingress"),
            Classification::Standard
        );
    }

    #[test]
    fn test_crds_are_always_custom() {
        assert_eq!(
            classify("apiextensions.k8s.io/v1", "CustomResourceDefinition"),
            Classification::Custom
        );
        assert_eq!(
            classify("apiextensions.k8s.io/v1beta1", "CustomResourceDefinition"),
            Classification::Custom
        );
    }

    #[test]
    fn test_apiextensions_non_crd_kind_falls_through() {
        // Not a CRD, not in the registry, has a group: custom via the group rule
        assert_eq!(
            classify("apiextensions.k8s.io/v1", "SomethingElse"),
            Classification::Custom
        );
    }

    #[test]
    fn test_unknown_groups_are_custom() {
        assert_eq!(classify("example.com/v1", "Widget"), Classification::Custom);
        assert_eq!(
            classify("cert-manager.io/v1", "Certificate"),
            Classification::Custom
        );
        assert_eq!(
            classify("monitoring.coreos.com/v1", "ServiceMonitor"),
            Classification::Custom
        );
    }

    #[test]
    fn test_admissionregistration_excluded_from_registry() {
        assert_eq!(
            classify(
                "admissionregistration.k8s.io/v1",
                "ValidatingWebhookConfiguration"
            ),
            Classification::Custom
        );
    }

    #[test]
    fn test_bare_versions() {
        assert_eq!(classify("v1", "Pod"), Classification::Standard);
        assert_eq!(classify("v1", "AnythingAtAll"), Classification::Standard);
        assert_eq!(classify("v2", "Pod"), Classification::Custom);
        assert_eq!(classify("v1beta1", "Thing"), Classification::Custom);
    }

    #[test]
    fn test_classification_labels() {
        assert_eq!(Classification::Standard.label(), "standard");
        assert_eq!(Classification::Custom.label(), "custom");
        assert_eq!(Classification::Custom.to_string(), "custom");
    }
}
