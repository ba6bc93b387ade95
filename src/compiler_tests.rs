//! Tree compiler and printer tests.
//!
//! Markup trees are built by hand so these tests exercise the compiler
//! independently of the XML adapter.

#[cfg(test)]
mod tests {
    use crate::attributes::AttributeNameTable;
    use crate::compiler::{CompiledAttribute, CompiledElement, CompiledNode, TreeCompiler};
    use crate::literal::Literal;
    use crate::markup::{ElementNode, MarkupChild, MarkupNode, MarkupRoot};
    use crate::printer::{print_component, JsxPrinter};
    use oxc_span::Span;

    fn compiler() -> TreeCompiler<'static> {
        TreeCompiler::new(AttributeNameTable::standard())
    }

    fn element(node: CompiledNode) -> CompiledElement {
        match node {
            CompiledNode::Element(element) => element,
            other => panic!("expected element, got {:?}", other),
        }
    }

    fn rect_svg() -> MarkupNode {
        ElementNode::new("svg")
            .with_child(
                ElementNode::new("rect")
                    .with_property("width", 10.0)
                    .with_property("height", 10.0)
                    .into(),
            )
            .into()
    }

    // ═══════════════════════════════════════════════════════════════════════════════
    // ELEMENTS
    // ═══════════════════════════════════════════════════════════════════════════════

    #[test]
    fn test_element_tag_and_attributes() {
        let svg = element(compiler().compile(&rect_svg(), &[]));
        assert_eq!(svg.tag, "svg");
        assert!(svg.attributes.is_empty());
        assert_eq!(svg.children.len(), 1);

        let rect = element(svg.children[0].clone());
        assert_eq!(rect.tag, "rect");
        assert!(rect.is_self_closing());
        assert_eq!(
            rect.attributes,
            vec![
                CompiledAttribute::Named {
                    name: "width".to_string(),
                    value: Literal::Number(10.0),
                },
                CompiledAttribute::Named {
                    name: "height".to_string(),
                    value: Literal::Number(10.0),
                },
            ]
        );
    }

    #[test]
    fn test_attribute_names_are_normalized() {
        let node: MarkupNode = ElementNode::new("path")
            .with_property("stroke-width", 2.0)
            .with_property("xlink:href", "#a")
            .with_property("class", "icon")
            .with_property("d", "M0 0")
            .into();

        let path = element(compiler().compile(&node, &[]));
        let names: Vec<&str> = path
            .attributes
            .iter()
            .map(|a| match a {
                CompiledAttribute::Named { name, .. } => name.as_str(),
                CompiledAttribute::Spread { argument } => argument.as_str(),
            })
            .collect();
        assert_eq!(names, vec!["strokeWidth", "xlinkHref", "className", "d"]);
    }

    #[test]
    fn test_extra_attributes_follow_mapped_ones() {
        let node: MarkupNode = ElementNode::new("svg").with_property("fill", "none").into();
        let svg = element(compiler().compile(&node, &[CompiledAttribute::spread("props")]));

        assert_eq!(svg.attributes.len(), 2);
        assert_eq!(svg.attributes[1], CompiledAttribute::spread("props"));
    }

    #[test]
    fn test_extra_attributes_apply_to_root_only() {
        let svg = element(compiler().compile(&rect_svg(), &[CompiledAttribute::spread("props")]));
        let rect = element(svg.children[0].clone());
        assert!(!rect.attributes.contains(&CompiledAttribute::spread("props")));
    }

    #[test]
    fn test_container_with_children_is_not_self_closing() {
        let svg = element(compiler().compile(&rect_svg(), &[]));
        assert!(!svg.is_self_closing());
    }

    #[test]
    fn test_raw_string_children_are_skipped() {
        let mut svg = ElementNode::new("svg");
        svg.children.push(MarkupChild::Raw("stray".to_string()));
        svg.children
            .push(MarkupChild::Node(ElementNode::new("g").into()));

        let compiled = element(compiler().compile(&svg.into(), &[]));
        assert_eq!(compiled.children.len(), 1);
        assert_eq!(element(compiled.children[0].clone()).tag, "g");
    }

    #[test]
    fn test_only_raw_children_yields_self_closing() {
        let mut svg = ElementNode::new("svg");
        svg.children.push(MarkupChild::Raw("stray".to_string()));

        let compiled = element(compiler().compile(&svg.into(), &[]));
        assert!(compiled.is_self_closing());
    }

    // ═══════════════════════════════════════════════════════════════════════════════
    // TEXT
    // ═══════════════════════════════════════════════════════════════════════════════

    #[test]
    fn test_text_becomes_literal_expression() {
        let node: MarkupNode = ElementNode::new("text")
            .with_child(MarkupNode::text("Hi"))
            .into();

        let text = element(compiler().compile(&node, &[]));
        assert_eq!(
            text.children,
            vec![CompiledNode::Expression(Literal::String("Hi".to_string()))]
        );
    }

    #[test]
    fn test_numeric_text_keeps_its_type() {
        let node = MarkupNode::text(42.0);
        assert_eq!(
            compiler().compile(&node, &[]),
            CompiledNode::Expression(Literal::Number(42.0))
        );
    }

    // ═══════════════════════════════════════════════════════════════════════════════
    // ORIGIN
    // ═══════════════════════════════════════════════════════════════════════════════

    #[test]
    fn test_origin_is_recorded_on_every_element() {
        let span = Span::new(4, 20);
        let svg = element(compiler().with_origin(span).compile(&rect_svg(), &[]));
        assert_eq!(svg.origin, Some(span));
        assert_eq!(element(svg.children[0].clone()).origin, Some(span));
    }

    #[test]
    fn test_no_origin_by_default() {
        let svg = element(compiler().compile(&rect_svg(), &[]));
        assert_eq!(svg.origin, None);
    }

    // ═══════════════════════════════════════════════════════════════════════════════
    // COMPONENTS
    // ═══════════════════════════════════════════════════════════════════════════════

    #[test]
    fn test_component_spreads_props_on_root() {
        let root = MarkupRoot {
            children: vec![MarkupChild::Node(rect_svg())],
        };
        let component = compiler()
            .compile_component(&root, "props", Some("Icon".to_string()))
            .unwrap();

        assert_eq!(component.name.as_deref(), Some("Icon"));
        assert_eq!(component.param, "props");
        assert_eq!(component.body.tag, "svg");
        assert_eq!(
            component.body.attributes.last(),
            Some(&CompiledAttribute::spread("props"))
        );
    }

    #[test]
    fn test_component_of_empty_root_is_none() {
        let root = MarkupRoot::default();
        assert!(compiler().compile_component(&root, "props", None).is_none());
    }

    #[test]
    fn test_component_skips_leading_text() {
        let root = MarkupRoot {
            children: vec![
                MarkupChild::Node(MarkupNode::text("stray")),
                MarkupChild::Node(rect_svg()),
            ],
        };
        let component = compiler().compile_component(&root, "props", None).unwrap();
        assert_eq!(component.body.tag, "svg");
    }

    // ═══════════════════════════════════════════════════════════════════════════════
    // PRINTING
    // ═══════════════════════════════════════════════════════════════════════════════

    #[test]
    fn test_print_rect_component() {
        let root = MarkupRoot {
            children: vec![MarkupChild::Node(rect_svg())],
        };
        let component = compiler()
            .compile_component(&root, "props", Some("Icon".to_string()))
            .unwrap();

        assert_eq!(
            print_component(&component),
            "(function Icon(props) {\n  return (\n    <svg {...props}>\n      <rect width={10} height={10} />\n    </svg>\n  );\n})"
        );
    }

    #[test]
    fn test_print_anonymous_component() {
        let root = MarkupRoot {
            children: vec![MarkupChild::Node(ElementNode::new("svg").into())],
        };
        let component = compiler().compile_component(&root, "p", None).unwrap();
        assert_eq!(
            print_component(&component),
            "(function (p) {\n  return (\n    <svg {...p} />\n  );\n})"
        );
    }

    #[test]
    fn test_print_text_child() {
        let node: MarkupNode = ElementNode::new("text")
            .with_child(MarkupNode::text("Hi"))
            .into();
        let printed = JsxPrinter::new().print_node(&compiler().compile(&node, &[]));
        assert_eq!(printed, "<text>\n  {\"Hi\"}\n</text>");
    }
}
