//! # svgToJsx compile-time transform
//!
//! Rewrites calls to the `svgToJsx("./icon.svg")` sentinel into inline
//! function components built from the referenced SVG file, and strips the
//! sentinel module's imports.
//!
//! ## Pipeline
//!
//! 1. **Recognize** (`recognizer`): parse the source with oxc, resolve each
//!    callee to its declaration, validate the single string literal argument.
//! 2. **Load** (`resolve`, `optimize`, `markup`): resolve the path, read the
//!    file, optionally optimize the text, parse it into a markup tree.
//! 3. **Compile** (`compiler`, `attributes`, `literal`): lower the tree into
//!    JSX elements with React attribute names and literal values.
//! 4. **Print** (`printer`, `transformer`): print the component and splice it
//!    over the call.
//!
//! Shadowed bindings named `svgToJsx` are never rewritten under the default
//! `declaration` recognition strategy.

#[cfg(feature = "napi")]
use napi_derive::napi;

pub mod attributes;
pub mod compiler;
pub mod error;
pub mod literal;
pub mod markup;
pub mod optimize;
pub mod options;
pub mod printer;
pub mod program;
pub mod recognizer;
pub mod resolve;
pub mod sentinel;
pub mod transformer;

#[cfg(test)]
mod compiler_tests;

pub use attributes::AttributeNameTable;
pub use compiler::{CompiledAttribute, CompiledElement, CompiledNode, FunctionComponent, TreeCompiler};
pub use error::{Result, TransformError};
pub use literal::Literal;
pub use markup::{parse_markup, MarkupChild, MarkupNode, MarkupRoot, Primitive};
pub use optimize::{BasicOptimizer, MarkupOptimizer};
pub use options::{OptimizerOptions, RecognitionStrategy, TransformOptions};
pub use program::{FileResult, ProjectProgram};
pub use transformer::{compile_svg, SvgJsxTransformer, TransformOutput};

#[cfg(feature = "napi")]
#[napi]
pub fn transform_native(
    source: String,
    file_path: String,
    options: Option<serde_json::Value>,
) -> napi::Result<serde_json::Value> {
    let options = TransformOptions::from_json(options.unwrap_or(serde_json::Value::Null))
        .map_err(|e| napi::Error::from_reason(e.message))?;
    let output = SvgJsxTransformer::new(options)
        .transform(&source, std::path::Path::new(&file_path))
        .map_err(|e| napi::Error::from_reason(e.message))?;
    serde_json::to_value(output).map_err(|e| napi::Error::from_reason(e.to_string()))
}

#[cfg(feature = "napi")]
#[napi]
pub fn compile_svg_native(svg: String, name: Option<String>) -> napi::Result<String> {
    compile_svg(&svg, name, "props").map_err(|e| napi::Error::from_reason(e.message))
}
