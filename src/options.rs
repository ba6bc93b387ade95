use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, TransformError, ERR_CONFIG};
use crate::sentinel::{SENTINEL_FUNCTION, SENTINEL_MODULE};

/// How sentinel call sites are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecognitionStrategy {
    /// Resolve the callee to its declaring import. Shadowed bindings never match.
    #[default]
    Declaration,
    /// Match the callee's textual name. Shadowed identifiers are false positives.
    Name,
}

/// Options for the markup optimizer pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerOptions {
    /// Pass names to run, in order. `None` runs the default preset.
    #[serde(default)]
    pub plugins: Option<Vec<String>>,
    /// Everything else, handed to custom optimizers untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformOptions {
    /// Optimizer configuration. Absent means no optimization.
    pub svgo: Option<OptimizerOptions>,
    pub sentinel_module: String,
    pub function_name: String,
    pub props_name: String,
    pub recognition: RecognitionStrategy,
}

impl Default for TransformOptions {
    fn default() -> Self {
        TransformOptions {
            svgo: None,
            sentinel_module: SENTINEL_MODULE.to_string(),
            function_name: SENTINEL_FUNCTION.to_string(),
            props_name: "props".to_string(),
            recognition: RecognitionStrategy::Declaration,
        }
    }
}

impl TransformOptions {
    pub fn from_json(value: Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value).map_err(|e| {
            TransformError::new(ERR_CONFIG, format!("Invalid transformer options: {}", e), "")
        })
    }

    pub fn with_svgo(mut self, svgo: OptimizerOptions) -> Self {
        self.svgo = Some(svgo);
        self
    }

    pub fn with_recognition(mut self, recognition: RecognitionStrategy) -> Self {
        self.recognition = recognition;
        self
    }
}
