//! Per-file rewrite: sentinel calls become function components, sentinel
//! imports disappear.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::attributes::AttributeNameTable;
use crate::compiler::TreeCompiler;
use crate::error::{Result, TransformError};
use crate::markup::parse_markup;
use crate::optimize::{BasicOptimizer, MarkupOptimizer};
use crate::options::TransformOptions;
use crate::printer::print_component;
use crate::recognizer::{recognize, source_type_for, CallSite};
use crate::resolve::{read_svg_file, resolve_path};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformOutput {
    pub code: String,
    pub changed: bool,
    pub rewritten_calls: usize,
    pub removed_imports: usize,
}

/// A textual replacement of `source[start..end]`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Edit {
    start: u32,
    end: u32,
    replacement: String,
}

pub struct SvgJsxTransformer {
    options: TransformOptions,
    optimizer: Box<dyn MarkupOptimizer>,
    names: &'static AttributeNameTable,
}

impl SvgJsxTransformer {
    pub fn new(options: TransformOptions) -> Self {
        Self {
            options,
            optimizer: Box::new(BasicOptimizer),
            names: AttributeNameTable::standard(),
        }
    }

    /// Replace the built-in optimizer. Only consulted when `svgo` is configured.
    pub fn with_optimizer(mut self, optimizer: impl MarkupOptimizer + 'static) -> Self {
        self.optimizer = Box::new(optimizer);
        self
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// Rewrite one source file. `file` locates relative SVG paths and labels errors.
    pub fn transform(&self, source: &str, file: &Path) -> Result<TransformOutput> {
        let recognition = recognize(source, file, &self.options)?;

        if recognition.calls.is_empty() && recognition.sentinel_imports.is_empty() {
            return Ok(TransformOutput {
                code: source.to_string(),
                ..Default::default()
            });
        }

        if let Some(first) = recognition.calls.first() {
            if !source_type_for(file).is_jsx() {
                return Err(TransformError::jsx_unsupported(&self.options.function_name, file)
                    .at(source, first.span));
            }
        }

        let mut edits = Vec::new();

        for call in &recognition.calls {
            let replacement = self.compile_call(call, source, file)?;
            edits.push(Edit {
                start: call.span.start,
                end: call.span.end,
                replacement,
            });
        }

        for span in &recognition.sentinel_imports {
            edits.push(Edit {
                start: span.start,
                end: line_end(source, span.end),
                replacement: String::new(),
            });
        }

        debug!(
            file = %file.display(),
            calls = recognition.calls.len(),
            imports = recognition.sentinel_imports.len(),
            "rewrote sentinel usage"
        );

        Ok(TransformOutput {
            code: apply_edits(source, edits),
            changed: true,
            rewritten_calls: recognition.calls.len(),
            removed_imports: recognition.sentinel_imports.len(),
        })
    }

    /// Resolve, load and compile the SVG named by `call`, returning the printed component.
    fn compile_call(&self, call: &CallSite, source: &str, file: &Path) -> Result<String> {
        let svg_path = resolve_path(&call.path, file).ok_or_else(|| {
            TransformError::file_not_found(&PathBuf::from(&call.path), file).at(source, call.span)
        })?;
        trace!(target = %call.path, resolved = %svg_path.display(), "resolved svg path");

        let optimizer = self
            .options
            .svgo
            .as_ref()
            .map(|svgo| (self.optimizer.as_ref(), svgo));
        let root = read_svg_file(&svg_path, file, optimizer).map_err(|e| e.at(source, call.span))?;

        let component = TreeCompiler::new(self.names)
            .with_origin(call.span)
            .compile_component(&root, &self.options.props_name, call.binding_name.clone())
            .ok_or_else(|| TransformError::empty_document(&svg_path, file).at(source, call.span))?;

        Ok(print_component(&component))
    }
}

/// Compile SVG markup straight to component source, without a calling file.
pub fn compile_svg(content: &str, name: Option<String>, props_name: &str) -> Result<String> {
    let path = Path::new("<inline>.svg");
    let root = parse_markup(content, path)?;
    let component = TreeCompiler::new(AttributeNameTable::standard())
        .compile_component(&root, props_name, name)
        .ok_or_else(|| TransformError::empty_document(path, path))?;
    Ok(print_component(&component))
}

/// Extend `end` over trailing blanks and one line break, so removing a whole
/// statement leaves no empty line behind.
fn line_end(source: &str, end: u32) -> u32 {
    let rest = &source[end as usize..];
    let blanks = rest.len() - rest.trim_start_matches([' ', '\t']).len();
    let after = &rest[blanks..];
    let newline = if after.starts_with("\r\n") {
        2
    } else if after.starts_with('\n') {
        1
    } else {
        0
    };
    end + (blanks + newline) as u32
}

fn apply_edits(source: &str, mut edits: Vec<Edit>) -> String {
    // Apply from the end so earlier offsets stay valid.
    edits.sort_by(|a, b| b.start.cmp(&a.start));

    let mut code = source.to_string();
    for edit in edits {
        code.replace_range(edit.start as usize..edit.end as usize, &edit.replacement);
    }
    code
}
