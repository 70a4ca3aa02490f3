//! SVG element markup

use super::SvgGroup;
use crate::renderers::TextNode;
use html_escape::{encode_double_quoted_attribute, encode_text};

/// `<text>` element for one node
pub fn text_markup(node: &TextNode) -> String {
    let mut markup = format!(r#"<text x="{}" y="{}""#, node.x, node.y);
    for (name, value) in &node.attributes {
        markup.push_str(&format!(
            r#" {}="{}""#,
            name,
            encode_double_quoted_attribute(value)
        ));
    }
    markup.push('>');
    markup.push_str(&encode_text(&node.text));
    markup.push_str("</text>");
    markup
}

/// `<g>` element with all of its text nodes
pub fn group_markup(group: &SvgGroup) -> String {
    let body: String = group.nodes.iter().map(text_markup).collect();
    format!(
        r#"<g class="{}">{}</g>"#,
        encode_double_quoted_attribute(&group.class),
        body
    )
}
