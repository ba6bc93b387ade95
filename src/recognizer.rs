//! Call-site recognition.
//!
//! Finds `svgToJsx("...")` calls that genuinely refer to the sentinel export,
//! validates their arguments, and lists the sentinel import declarations to
//! strip from the file.

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    Argument, BindingPattern, CallExpression, Expression, IdentifierReference,
    ImportDeclarationSpecifier, Program, Statement, VariableDeclarator,
};
use oxc_ast_visit::{walk, Visit};
use oxc_parser::Parser;
use oxc_semantic::{Scoping, SemanticBuilder, SymbolId};
use oxc_span::{SourceType, Span};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{Result, TransformError, ERR_PARSE};
use crate::options::{RecognitionStrategy, TransformOptions};

/// A validated sentinel invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub span: Span,
    /// The string literal argument, as written.
    pub path: String,
    /// Name of the variable the call initializes, if any.
    pub binding_name: Option<String>,
}

/// Everything the rewrite needs to know about one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recognition {
    pub calls: Vec<CallSite>,
    /// Spans of import declarations from the sentinel module.
    pub sentinel_imports: Vec<Span>,
}

pub fn source_type_for(path: &Path) -> SourceType {
    SourceType::from_path(path).unwrap_or_else(|_| SourceType::tsx())
}

// ═══════════════════════════════════════════════════════════════════════════════
// SENTINEL IMPORTS
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Default)]
struct SentinelBindings {
    /// Local names bound to the sentinel function (`svgToJsx` or an alias).
    function_names: HashSet<String>,
    /// Local names bound to `import * as ns` of the sentinel module.
    namespace_names: HashSet<String>,
    function_symbols: HashSet<SymbolId>,
    namespace_symbols: HashSet<SymbolId>,
    import_spans: Vec<Span>,
}

fn collect_sentinel_imports(
    program: &Program,
    options: &TransformOptions,
    resolved: bool,
) -> SentinelBindings {
    let mut bindings = SentinelBindings::default();

    for stmt in &program.body {
        let Statement::ImportDeclaration(import_decl) = stmt else {
            continue;
        };
        if import_decl.source.value.as_str() != options.sentinel_module {
            continue;
        }
        bindings.import_spans.push(import_decl.span);

        let Some(specifiers) = &import_decl.specifiers else {
            continue;
        };
        for specifier in specifiers {
            match specifier {
                ImportDeclarationSpecifier::ImportSpecifier(s) => {
                    if s.imported.name().as_str() != options.function_name {
                        continue;
                    }
                    bindings.function_names.insert(s.local.name.to_string());
                    if resolved {
                        bindings.function_symbols.insert(s.local.symbol_id());
                    }
                }
                ImportDeclarationSpecifier::ImportNamespaceSpecifier(s) => {
                    bindings.namespace_names.insert(s.local.name.to_string());
                    if resolved {
                        bindings.namespace_symbols.insert(s.local.symbol_id());
                    }
                }
                ImportDeclarationSpecifier::ImportDefaultSpecifier(_) => {}
            }
        }
    }

    bindings
}

// ═══════════════════════════════════════════════════════════════════════════════
// CALL COLLECTOR
// ═══════════════════════════════════════════════════════════════════════════════

struct CallCollector<'s> {
    source: &'s str,
    file: &'s Path,
    options: &'s TransformOptions,
    scoping: Option<&'s Scoping>,
    sentinel: &'s SentinelBindings,
    /// Span of a call that directly initializes a named variable, with that name.
    declarator: Option<(Span, String)>,
    calls: Vec<CallSite>,
    error: Option<TransformError>,
}

impl<'s> CallCollector<'s> {
    fn resolves_to(&self, ident: &IdentifierReference, symbols: &HashSet<SymbolId>) -> bool {
        let Some(scoping) = self.scoping else {
            return false;
        };
        let Some(reference_id) = ident.reference_id.get() else {
            return false;
        };
        scoping
            .get_reference(reference_id)
            .symbol_id()
            .is_some_and(|symbol_id| symbols.contains(&symbol_id))
    }

    fn is_sentinel_callee(&self, callee: &Expression) -> bool {
        match (self.options.recognition, callee) {
            (RecognitionStrategy::Declaration, Expression::Identifier(ident)) => {
                self.resolves_to(ident, &self.sentinel.function_symbols)
            }
            (RecognitionStrategy::Declaration, Expression::StaticMemberExpression(member)) => {
                member.property.name.as_str() == self.options.function_name
                    && matches!(&member.object, Expression::Identifier(ns)
                        if self.resolves_to(ns, &self.sentinel.namespace_symbols))
            }
            (RecognitionStrategy::Name, Expression::Identifier(ident)) => {
                let name = ident.name.as_str();
                name == self.options.function_name || self.sentinel.function_names.contains(name)
            }
            (RecognitionStrategy::Name, Expression::StaticMemberExpression(member)) => {
                member.property.name.as_str() == self.options.function_name
                    && matches!(&member.object, Expression::Identifier(ns)
                        if self.sentinel.namespace_names.contains(ns.name.as_str()))
            }
            _ => false,
        }
    }

    fn validate(&self, call: &CallExpression) -> Result<CallSite> {
        let function_name = &self.options.function_name;

        let Some(first) = call.arguments.first() else {
            return Err(TransformError::argument_count(0, function_name, self.file)
                .at(self.source, call.span));
        };

        let Argument::StringLiteral(literal) = first else {
            return Err(TransformError::not_string_literal(function_name, self.file)
                .at(self.source, call.span));
        };

        let binding_name = match &self.declarator {
            Some((span, name)) if *span == call.span => Some(name.clone()),
            _ => None,
        };

        Ok(CallSite {
            span: call.span,
            path: literal.value.to_string(),
            binding_name,
        })
    }
}

impl<'a, 's> Visit<'a> for CallCollector<'s> {
    fn visit_variable_declarator(&mut self, decl: &VariableDeclarator<'a>) {
        if let (BindingPattern::BindingIdentifier(id), Some(Expression::CallExpression(call))) =
            (&decl.id, &decl.init)
        {
            self.declarator = Some((call.span, id.name.to_string()));
        }
        walk::walk_variable_declarator(self, decl);
    }

    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        if self.error.is_some() {
            return;
        }

        if !self.is_sentinel_callee(&call.callee) {
            walk::walk_call_expression(self, call);
            return;
        }

        match self.validate(call) {
            Ok(site) => self.calls.push(site),
            Err(e) => self.error = Some(e),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// ENTRY POINT
// ═══════════════════════════════════════════════════════════════════════════════

/// Parse `source` and collect sentinel calls and imports. Fails on the first
/// invalid sentinel call, in source order.
pub fn recognize(source: &str, file: &Path, options: &TransformOptions) -> Result<Recognition> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, source_type_for(file)).parse();

    if let Some(error) = ret.errors.first() {
        return Err(TransformError::new(
            ERR_PARSE,
            format!("Failed to parse \"{}\": {}", file.display(), error),
            file,
        ));
    }

    let program = ret.program;

    let scoping = match options.recognition {
        RecognitionStrategy::Declaration => {
            Some(SemanticBuilder::new().build(&program).semantic.into_scoping())
        }
        RecognitionStrategy::Name => None,
    };

    let sentinel = collect_sentinel_imports(&program, options, scoping.is_some());

    let mut collector = CallCollector {
        source,
        file,
        options,
        scoping: scoping.as_ref(),
        sentinel: &sentinel,
        declarator: None,
        calls: Vec::new(),
        error: None,
    };
    collector.visit_program(&program);

    if let Some(error) = collector.error {
        return Err(error);
    }

    Ok(Recognition {
        calls: collector.calls,
        sentinel_imports: sentinel.import_spans,
    })
}
