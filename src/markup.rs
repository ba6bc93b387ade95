//! Markup Module for the SVG transformer
//!
//! Parses SVG source as XML with quick-xml and builds the plain `MarkupNode`
//! tree consumed by the tree compiler. Tag and attribute names are kept
//! exactly as written, and elements nest as written (no HTML tree fixups).

use lazy_static::lazy_static;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, TransformError, ERR_PARSE};

lazy_static! {
    /// Attribute values the parser hands over as numbers rather than strings.
    static ref NUMERIC_VALUE_RE: Regex =
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").unwrap();
}

// ═══════════════════════════════════════════════════════════════════════════════
// MARKUP TREE TYPES
// ═══════════════════════════════════════════════════════════════════════════════

/// A primitive attribute or text value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Primitive {
    String(String),
    Number(f64),
    Boolean(bool),
    Undefined,
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Primitive::String(value.to_string())
    }
}

impl From<f64> for Primitive {
    fn from(value: f64) -> Self {
        Primitive::Number(value)
    }
}

impl From<bool> for Primitive {
    fn from(value: bool) -> Self {
        Primitive::Boolean(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementNode {
    pub tag_name: String,
    /// Attribute name/value pairs in source order.
    pub properties: Vec<(String, Primitive)>,
    pub children: Vec<MarkupChild>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    pub value: Primitive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MarkupNode {
    Element(ElementNode),
    Text(TextNode),
}

/// A child slot: either a node or a bare string left behind by the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkupChild {
    Node(MarkupNode),
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MarkupRoot {
    pub children: Vec<MarkupChild>,
}

impl MarkupRoot {
    /// The first element at the top level of the document.
    pub fn root_element(&self) -> Option<&MarkupNode> {
        self.children.iter().find_map(|child| match child {
            MarkupChild::Node(node @ MarkupNode::Element(_)) => Some(node),
            _ => None,
        })
    }
}

impl ElementNode {
    pub fn new(tag_name: impl Into<String>) -> Self {
        ElementNode {
            tag_name: tag_name.into(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Primitive>) -> Self {
        self.properties.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: MarkupNode) -> Self {
        self.children.push(MarkupChild::Node(child));
        self
    }
}

impl MarkupNode {
    pub fn text(value: impl Into<Primitive>) -> Self {
        MarkupNode::Text(TextNode {
            value: value.into(),
        })
    }
}

impl From<ElementNode> for MarkupNode {
    fn from(element: ElementNode) -> Self {
        MarkupNode::Element(element)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// VALUE COERCION
// ═══════════════════════════════════════════════════════════════════════════════

/// Plain decimal numbers become `Number`, everything else stays a string.
///
/// Stricter than JavaScript's `!isNaN(value)`, which would also turn `"0x10"`
/// into 16, `"Infinity"` into infinity and `""` or `"  "` into 0. Those stay
/// strings here. Whitespace around a decimal is ignored (`" 10 "` is 10).
pub fn coerce_attribute_value(raw: &str) -> Primitive {
    let trimmed = raw.trim();
    if NUMERIC_VALUE_RE.is_match(trimmed) {
        if let Ok(number) = trimmed.parse::<f64>() {
            return Primitive::Number(number);
        }
    }
    Primitive::String(raw.to_string())
}

// ═══════════════════════════════════════════════════════════════════════════════
// XML PARSING
// ═══════════════════════════════════════════════════════════════════════════════

fn parse_error(path: &Path, reason: impl std::fmt::Display) -> TransformError {
    TransformError::new(
        ERR_PARSE,
        format!("Failed to parse SVG \"{}\": {}", path.display(), reason),
        path,
    )
}

/// Element with its attributes, names as written (`xlink:href` keeps its prefix).
fn start_element(start: &BytesStart<'_>, path: &Path) -> Result<ElementNode> {
    let mut element = ElementNode::new(String::from_utf8_lossy(start.name().as_ref()));

    for attr in start.attributes() {
        let attr = attr.map_err(|e| parse_error(path, e))?;
        let name = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr.unescape_value().map_err(|e| parse_error(path, e))?;
        element
            .properties
            .push((name, coerce_attribute_value(&value)));
    }

    Ok(element)
}

/// Children of the innermost open element, or the document's top level.
fn current_children<'n>(
    open: &'n mut [ElementNode],
    top_level: &'n mut Vec<MarkupChild>,
) -> &'n mut Vec<MarkupChild> {
    match open.last_mut() {
        Some(parent) => &mut parent.children,
        None => top_level,
    }
}

fn push_text(open: &mut [ElementNode], top_level: &mut Vec<MarkupChild>, text: &str) {
    // Whitespace between tags is formatting, not content.
    if text.trim().is_empty() {
        return;
    }
    current_children(open, top_level).push(MarkupChild::Node(MarkupNode::text(text)));
}

/// Parse SVG markup. `path` is only used for error reporting.
///
/// Comments, the XML declaration, doctypes and processing instructions are
/// dropped. Malformed XML (mismatched or unclosed tags, bad entities) is a
/// parse error.
pub fn parse_markup(content: &str, path: &Path) -> Result<MarkupRoot> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(false);
    reader.check_end_names(true);

    let mut top_level = Vec::new();
    let mut open: Vec<ElementNode> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => open.push(start_element(&start, path)?),
            Ok(Event::Empty(start)) => {
                let element = start_element(&start, path)?;
                current_children(&mut open, &mut top_level)
                    .push(MarkupChild::Node(element.into()));
            }
            Ok(Event::End(end)) => {
                let element = open.pop().ok_or_else(|| {
                    parse_error(
                        path,
                        format!(
                            "unexpected closing tag </{}>",
                            String::from_utf8_lossy(end.name().as_ref())
                        ),
                    )
                })?;
                current_children(&mut open, &mut top_level)
                    .push(MarkupChild::Node(element.into()));
            }
            Ok(Event::Text(text)) => {
                let text = text.unescape().map_err(|e| parse_error(path, e))?;
                push_text(&mut open, &mut top_level, &text);
            }
            Ok(Event::CData(data)) => {
                let text = String::from_utf8_lossy(&data).to_string();
                push_text(&mut open, &mut top_level, &text);
            }
            Ok(Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_)) => {}
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(parse_error(
                    path,
                    format!("{} at byte {}", e, reader.buffer_position()),
                ))
            }
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(parse_error(
            path,
            format!("unclosed element <{}>", unclosed.tag_name),
        ));
    }

    Ok(MarkupRoot {
        children: top_level,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> MarkupRoot {
        parse_markup(content, Path::new("test.svg")).unwrap()
    }

    fn root(content: &str) -> ElementNode {
        match parse(content).root_element() {
            Some(MarkupNode::Element(el)) => el.clone(),
            other => panic!("expected a root element, got {:?}", other),
        }
    }

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(coerce_attribute_value("10"), Primitive::Number(10.0));
        assert_eq!(coerce_attribute_value("-1.5"), Primitive::Number(-1.5));
        assert_eq!(coerce_attribute_value(".5"), Primitive::Number(0.5));
        assert_eq!(coerce_attribute_value("1e3"), Primitive::Number(1000.0));
        assert_eq!(coerce_attribute_value("0 0 24 24"), Primitive::from("0 0 24 24"));
        assert_eq!(coerce_attribute_value("10px"), Primitive::from("10px"));
        assert_eq!(coerce_attribute_value(""), Primitive::from(""));
        assert_eq!(coerce_attribute_value("NaN"), Primitive::from("NaN"));
        assert_eq!(coerce_attribute_value("Infinity"), Primitive::from("Infinity"));
        assert_eq!(coerce_attribute_value(" 10 "), Primitive::Number(10.0));
        assert_eq!(coerce_attribute_value("0x10"), Primitive::from("0x10"));
        assert_eq!(coerce_attribute_value("  "), Primitive::from("  "));
    }

    #[test]
    fn test_parse_self_closing_children() {
        let svg = root(r#"<svg><rect width="10" height="10"/></svg>"#);
        assert_eq!(svg.tag_name, "svg");
        assert_eq!(svg.children.len(), 1);
        match &svg.children[0] {
            MarkupChild::Node(MarkupNode::Element(rect)) => {
                assert_eq!(rect.tag_name, "rect");
                assert_eq!(
                    rect.properties,
                    vec![
                        ("width".to_string(), Primitive::Number(10.0)),
                        ("height".to_string(), Primitive::Number(10.0)),
                    ]
                );
                assert!(rect.children.is_empty());
            }
            other => panic!("unexpected child {:?}", other),
        }
    }

    #[test]
    fn test_parse_siblings_after_self_closing() {
        let svg = root(r#"<svg><path d="M0 0"/><circle r="2"/></svg>"#);
        let tags: Vec<_> = svg
            .children
            .iter()
            .map(|c| match c {
                MarkupChild::Node(MarkupNode::Element(el)) => el.tag_name.as_str(),
                _ => "?",
            })
            .collect();
        assert_eq!(tags, vec!["path", "circle"]);
    }

    #[test]
    fn test_parse_text_content() {
        let svg = root("<svg><text>Hi</text></svg>");
        match &svg.children[0] {
            MarkupChild::Node(MarkupNode::Element(text)) => {
                assert_eq!(text.tag_name, "text");
                assert_eq!(text.children, vec![MarkupChild::Node(MarkupNode::text("Hi"))]);
            }
            other => panic!("unexpected child {:?}", other),
        }
    }

    #[test]
    fn test_prolog_comments_and_whitespace_are_dropped() {
        let content = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<!-- Generator: some editor -->
<svg viewBox="0 0 24 24">
    <g>
        <path d="M1 1"/>
    </g>
</svg>
"#;
        let parsed = parse(content);
        assert_eq!(parsed.children.len(), 1);
        let svg = root(content);
        assert_eq!(
            svg.properties,
            vec![("viewBox".to_string(), Primitive::from("0 0 24 24"))]
        );
        assert_eq!(svg.children.len(), 1);
    }

    #[test]
    fn test_names_are_kept_as_written() {
        let svg = root(r#"<svg><linearGradient gradientUnits="userSpaceOnUse"/><myShape fooBar="1"/></svg>"#);
        let names: Vec<(&str, &str)> = svg
            .children
            .iter()
            .map(|c| match c {
                MarkupChild::Node(MarkupNode::Element(el)) => {
                    (el.tag_name.as_str(), el.properties[0].0.as_str())
                }
                other => panic!("unexpected child {:?}", other),
            })
            .collect();
        assert_eq!(
            names,
            vec![("linearGradient", "gradientUnits"), ("myShape", "fooBar")]
        );
    }

    #[test]
    fn test_html_tag_names_nest_as_written() {
        let svg = root(r#"<svg><g/><p>note</p><font color="red"/><circle r="1"/></svg>"#);
        let tags: Vec<_> = svg
            .children
            .iter()
            .map(|c| match c {
                MarkupChild::Node(MarkupNode::Element(el)) => el.tag_name.as_str(),
                _ => "?",
            })
            .collect();
        assert_eq!(tags, vec!["g", "p", "font", "circle"]);
    }

    #[test]
    fn test_entities_and_cdata_become_text() {
        let svg = root("<svg><text>a &amp; b</text><style><![CDATA[.a{}]]></style></svg>");
        let texts: Vec<_> = svg
            .children
            .iter()
            .map(|c| match c {
                MarkupChild::Node(MarkupNode::Element(el)) => el.children.clone(),
                other => panic!("unexpected child {:?}", other),
            })
            .collect();
        assert_eq!(
            texts,
            vec![
                vec![MarkupChild::Node(MarkupNode::text("a & b"))],
                vec![MarkupChild::Node(MarkupNode::text(".a{}"))],
            ]
        );
    }

    #[test]
    fn test_malformed_markup_is_a_parse_error() {
        let unclosed = parse_markup("<svg><g></svg>", Path::new("bad.svg")).unwrap_err();
        assert_eq!(unclosed.code, ERR_PARSE);
        assert!(unclosed.message.contains("bad.svg"));

        let open = parse_markup("<svg><g>", Path::new("open.svg")).unwrap_err();
        assert_eq!(open.code, ERR_PARSE);
        assert!(open.message.contains("unclosed element <g>"));
    }

    #[test]
    fn test_namespaced_attribute_keeps_prefix() {
        let svg = root(
            r##"<svg xmlns:xlink="http://www.w3.org/1999/xlink"><use xlink:href="#a"/></svg>"##,
        );
        assert_eq!(svg.properties[0].0, "xmlns:xlink");
        match &svg.children[0] {
            MarkupChild::Node(MarkupNode::Element(el)) => {
                assert_eq!(el.properties[0], ("xlink:href".to_string(), Primitive::from("#a")));
            }
            other => panic!("unexpected child {:?}", other),
        }
    }

    #[test]
    fn test_empty_document_has_no_root() {
        assert!(parse("").root_element().is_none());
        assert!(parse("<!-- nothing -->").root_element().is_none());
        assert!(parse("   ").root_element().is_none());
    }
}
