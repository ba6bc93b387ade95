//! JSX source printer for compiled trees.

use crate::compiler::{CompiledAttribute, CompiledElement, CompiledNode, FunctionComponent};
use crate::literal::LiteralEmitter;

const INDENT: &str = "  ";

pub struct JsxPrinter {
    literals: LiteralEmitter,
    out: String,
}

impl Default for JsxPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsxPrinter {
    pub fn new() -> Self {
        Self {
            literals: LiteralEmitter::new(),
            out: String::new(),
        }
    }

    /// Printed as a parenthesized function expression so it stays an
    /// expression in statement position (`svgToJsx(..);`, `svgToJsx(..).x = 1`).
    pub fn print_component(mut self, component: &FunctionComponent) -> String {
        self.out.push_str("(function ");
        if let Some(name) = &component.name {
            self.out.push_str(name);
        }
        self.out.push('(');
        self.out.push_str(&component.param);
        self.out.push_str(") {\n");
        self.out.push_str(INDENT);
        self.out.push_str("return (\n");
        self.print_element(&component.body, 2);
        self.out.push('\n');
        self.out.push_str(INDENT);
        self.out.push_str(");\n})");
        self.out
    }

    pub fn print_node(mut self, node: &CompiledNode) -> String {
        self.write_node(node, 0);
        self.out
    }

    fn write_node(&mut self, node: &CompiledNode, depth: usize) {
        match node {
            CompiledNode::Element(element) => self.print_element(element, depth),
            CompiledNode::Expression(literal) => {
                self.write_indent(depth);
                let text = self.literals.emit(literal);
                self.out.push('{');
                self.out.push_str(&text);
                self.out.push('}');
            }
        }
    }

    fn print_element(&mut self, element: &CompiledElement, depth: usize) {
        self.write_indent(depth);
        self.out.push('<');
        self.out.push_str(&element.tag);
        for attribute in &element.attributes {
            self.out.push(' ');
            self.print_attribute(attribute);
        }

        if element.is_self_closing() {
            self.out.push_str(" />");
            return;
        }

        self.out.push('>');
        for child in &element.children {
            self.out.push('\n');
            self.write_node(child, depth + 1);
        }
        self.out.push('\n');
        self.write_indent(depth);
        self.out.push_str("</");
        self.out.push_str(&element.tag);
        self.out.push('>');
    }

    fn print_attribute(&mut self, attribute: &CompiledAttribute) {
        match attribute {
            CompiledAttribute::Named { name, value } => {
                let text = self.literals.emit(value);
                self.out.push_str(name);
                self.out.push_str("={");
                self.out.push_str(&text);
                self.out.push('}');
            }
            CompiledAttribute::Spread { argument } => {
                self.out.push_str("{...");
                self.out.push_str(argument);
                self.out.push('}');
            }
        }
    }

    fn write_indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
    }
}

/// Print a compiled component as a function expression.
pub fn print_component(component: &FunctionComponent) -> String {
    JsxPrinter::new().print_component(component)
}
