//! SVG tree → JSX tree compiler.
//!
//! Lowers a parsed `MarkupNode` tree into `CompiledNode`s, the JSX element
//! structure that replaces a sentinel call.

use oxc_span::Span;

use crate::attributes::AttributeNameTable;
use crate::literal::Literal;
use crate::markup::{ElementNode, MarkupChild, MarkupNode, MarkupRoot, TextNode};

// ═══════════════════════════════════════════════════════════════════════════════
// COMPILED JSX TYPES
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq)]
pub enum CompiledAttribute {
    /// `name={literal}`
    Named { name: String, value: Literal },
    /// `{...argument}`
    Spread { argument: String },
}

impl CompiledAttribute {
    pub fn spread(argument: impl Into<String>) -> Self {
        CompiledAttribute::Spread {
            argument: argument.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompiledElement {
    pub tag: String,
    pub attributes: Vec<CompiledAttribute>,
    pub children: Vec<CompiledNode>,
    /// Source span of the call this element was generated for. Advisory only.
    pub origin: Option<Span>,
}

impl CompiledElement {
    /// Self-closing is decided purely by the absence of children.
    pub fn is_self_closing(&self) -> bool {
        self.children.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompiledNode {
    Element(CompiledElement),
    /// A literal inside an expression container, e.g. `{"Hi"}`.
    Expression(Literal),
}

/// `function [name](param) { return body; }`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionComponent {
    pub name: Option<String>,
    pub param: String,
    pub body: CompiledElement,
}

// ═══════════════════════════════════════════════════════════════════════════════
// TREE COMPILER
// ═══════════════════════════════════════════════════════════════════════════════

pub struct TreeCompiler<'t> {
    names: &'t AttributeNameTable,
    origin: Option<Span>,
}

impl<'t> TreeCompiler<'t> {
    pub fn new(names: &'t AttributeNameTable) -> Self {
        Self {
            names,
            origin: None,
        }
    }

    /// Record `origin` on every element produced from here on.
    pub fn with_origin(mut self, origin: Span) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn compile(&self, node: &MarkupNode, extra_attributes: &[CompiledAttribute]) -> CompiledNode {
        match node {
            MarkupNode::Element(element) => {
                CompiledNode::Element(self.compile_element(element, extra_attributes))
            }
            MarkupNode::Text(text) => self.compile_text(text),
        }
    }

    fn compile_element(
        &self,
        element: &ElementNode,
        extra_attributes: &[CompiledAttribute],
    ) -> CompiledElement {
        debug_assert!(!element.tag_name.is_empty());

        let mut attributes: Vec<CompiledAttribute> = element
            .properties
            .iter()
            .map(|(key, value)| CompiledAttribute::Named {
                name: self.names.normalize(key).to_string(),
                value: Literal::from_primitive(value),
            })
            .collect();
        attributes.extend_from_slice(extra_attributes);

        let children = element
            .children
            .iter()
            .filter_map(|child| match child {
                MarkupChild::Node(node) => Some(self.compile(node, &[])),
                MarkupChild::Raw(_) => None,
            })
            .collect();

        CompiledElement {
            tag: element.tag_name.clone(),
            attributes,
            children,
            origin: self.origin,
        }
    }

    fn compile_text(&self, text: &TextNode) -> CompiledNode {
        CompiledNode::Expression(Literal::from_primitive(&text.value))
    }

    /// Compile the document's root element as a component taking `props_name`
    /// and spreading it onto the root. `None` when the document has no element.
    pub fn compile_component(
        &self,
        root: &MarkupRoot,
        props_name: &str,
        name: Option<String>,
    ) -> Option<FunctionComponent> {
        let element = match root.root_element()? {
            MarkupNode::Element(element) => element,
            MarkupNode::Text(_) => return None,
        };

        let body = self.compile_element(element, &[CompiledAttribute::spread(props_name)]);
        Some(FunctionComponent {
            name,
            param: props_name.to_string(),
            body,
        })
    }
}
