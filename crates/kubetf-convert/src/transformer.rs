//! Transformer abstraction over the external conversion binaries
//!
//! Both k2tf and tfk8s share the same contract: one YAML document in a file,
//! HCL text on stdout, non-zero exit plus stderr on failure. They differ only
//! in the binary name and the flag used to pass the file. [`ExecTransformer`]
//! captures that shape; the [`Transform`] trait keeps the pipeline decoupled
//! from process execution so tests can substitute in-process doubles.

use std::io::Write;
use std::process::Command;

use serde_yaml::Value;
use tempfile::Builder;

use crate::error::{ConvertError, Result};

/// One-document-in, HCL-text-out converter
pub trait Transform {
    /// Convert a single parsed resource document to HCL text
    fn transform(&self, doc: &Value) -> Result<String>;

    /// Short name for logging and error messages
    fn label(&self) -> &str;
}

/// Adapter invoking an external converter binary on a temp YAML file.
///
/// The document is re-serialized to a uniquely named temp file, the binary is
/// run synchronously, and the temp file is removed on every exit path
/// (it is deleted when the `NamedTempFile` guard drops).
#[derive(Debug, Clone)]
pub struct ExecTransformer {
    binary: String,
    file_flag: &'static str,
}

impl ExecTransformer {
    /// k2tf: typed Kubernetes provider resources. Takes `-f <file>`.
    pub fn k2tf() -> Self {
        Self {
            binary: "k2tf".to_string(),
            file_flag: "-f",
        }
    }

    /// tfk8s: generic kubernetes_manifest blocks. Takes `--file <file>`.
    pub fn tfk8s() -> Self {
        Self {
            binary: "tfk8s".to_string(),
            file_flag: "--file",
        }
    }

    /// Override the binary name or path (tests, non-PATH installs)
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }
}

impl Transform for ExecTransformer {
    fn transform(&self, doc: &Value) -> Result<String> {
        let mut temp = Builder::new().suffix(".yaml").tempfile()?;
        serde_yaml::to_writer(temp.as_file_mut(), doc)?;
        temp.as_file_mut().flush()?;

        let output = Command::new(&self.binary)
            .arg(self.file_flag)
            .arg(temp.path())
            .output()
            .map_err(|err| match err.kind() {
                std::io::ErrorKind::NotFound => {
                    ConvertError::TransformerNotFound(self.binary.clone())
                }
                _ => ConvertError::Io(err),
            })?;

        if !output.status.success() {
            return Err(ConvertError::ExecutionFailed {
                transformer: self.binary.clone(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn label(&self) -> &str {
        &self.binary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doc() -> Value {
        serde_yaml::from_str("apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: cfg\n").unwrap()
    }

    #[test]
    fn test_default_invocations() {
        let k2tf = ExecTransformer::k2tf();
        assert_eq!(k2tf.label(), "k2tf");
        assert_eq!(k2tf.file_flag, "-f");

        let tfk8s = ExecTransformer::tfk8s();
        assert_eq!(tfk8s.label(), "tfk8s");
        assert_eq!(tfk8s.file_flag, "--file");
    }

    #[test]
    fn test_missing_binary_maps_to_not_found() {
        let transformer =
            ExecTransformer::k2tf().with_binary("kubetf-definitely-not-installed-bin");

        let err = transformer.transform(&sample_doc()).unwrap_err();
        assert!(matches!(err, ConvertError::TransformerNotFound(ref b)
            if b == "kubetf-definitely-not-installed-bin"));
    }

    #[test]
    #[cfg(unix)]
    fn test_non_zero_exit_maps_to_execution_failed() {
        // `false` ignores its arguments and exits 1
        let transformer = ExecTransformer::k2tf().with_binary("false");

        let err = transformer.transform(&sample_doc()).unwrap_err();
        match err {
            ConvertError::ExecutionFailed {
                transformer, code, ..
            } => {
                assert_eq!(transformer, "false");
                assert_eq!(code, Some(1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_successful_run_captures_stdout() {
        // echo prints its arguments, which is enough to prove stdout capture
        let transformer = ExecTransformer::k2tf().with_binary("echo");

        let out = transformer.transform(&sample_doc()).unwrap();
        // echo prints "-f <tempfile path>"
        assert!(out.starts_with("-f "));
        assert!(out.trim_end().ends_with(".yaml"));
    }
}
