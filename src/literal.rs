//! Literal conversion and emission.

use oxc_allocator::Allocator;
use oxc_ast::ast::{Expression, Program};
use oxc_ast::AstBuilder;
use oxc_codegen::Codegen;
use oxc_span::{SourceType, SPAN};
use oxc_syntax::number::NumberBase;
use oxc_syntax::operator::UnaryOperator;

use crate::markup::Primitive;

/// A literal expression value in the generated JSX.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
}

impl Literal {
    /// Total conversion: anything that is not a string, number or boolean becomes `null`.
    pub fn from_primitive(value: &Primitive) -> Literal {
        match value {
            Primitive::String(s) => Literal::String(s.clone()),
            Primitive::Number(n) => Literal::Number(*n),
            Primitive::Boolean(b) => Literal::Boolean(*b),
            Primitive::Undefined => Literal::Null,
        }
    }
}

impl From<&Primitive> for Literal {
    fn from(value: &Primitive) -> Self {
        Literal::from_primitive(value)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// EMISSION
// ═══════════════════════════════════════════════════════════════════════════════

/// Prints literals with oxc's codegen so escaping follows JavaScript rules.
pub struct LiteralEmitter {
    allocator: Allocator,
}

impl Default for LiteralEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl LiteralEmitter {
    pub fn new() -> Self {
        Self {
            allocator: Allocator::default(),
        }
    }

    fn build_expression<'a>(ast: AstBuilder<'a>, literal: &Literal) -> Expression<'a> {
        match literal {
            Literal::String(s) => {
                let atom = ast.allocator.alloc_str(s);
                ast.expression_string_literal(SPAN, atom, None)
            }
            Literal::Number(n) if n.is_nan() => ast.expression_identifier(SPAN, "NaN"),
            Literal::Number(n) if n.is_sign_negative() && *n != 0.0 => ast.expression_unary(
                SPAN,
                UnaryOperator::UnaryNegation,
                Self::build_expression(ast, &Literal::Number(-n)),
            ),
            Literal::Number(n) if n.is_infinite() => ast.expression_identifier(SPAN, "Infinity"),
            Literal::Number(n) => {
                ast.expression_numeric_literal(SPAN, *n, None, NumberBase::Decimal)
            }
            Literal::Boolean(b) => ast.expression_boolean_literal(SPAN, *b),
            Literal::Null => ast.expression_null_literal(SPAN),
        }
    }

    /// JavaScript source text for `literal`, without a trailing semicolon.
    pub fn emit(&mut self, literal: &Literal) -> String {
        self.allocator.reset();
        let ast = AstBuilder::new(&self.allocator);
        let expression = Self::build_expression(ast, literal);

        let mut body = ast.vec();
        body.push(ast.statement_expression(SPAN, expression));

        let program = Program {
            span: SPAN,
            source_type: SourceType::default(),
            hashbang: None,
            directives: ast.vec(),
            body,
            source_text: "",
            comments: ast.vec(),
            scope_id: std::cell::Cell::new(None),
        };

        let code = Codegen::new().build(&program).code;
        strip_statement(&code).to_string()
    }
}

fn strip_statement(code: &str) -> &str {
    let code = code.trim().trim_end_matches(';').trim_end();
    match code.strip_prefix('(').and_then(|c| c.strip_suffix(')')) {
        Some(inner) => inner,
        None => code,
    }
}
