//! Layout resolution: pass two of the two-pass formatter.
//!
//! The renderer replays the token stream produced by the inspector. Raw
//! tokens are emitted verbatim; the three spacing placeholders are
//! resolved against the width table: a node whose total width fits the
//! configured line width stays inline (each placeholder becomes a single
//! space), otherwise the node expands, with start and separator
//! placeholders becoming a newline plus two spaces of indent per nesting
//! level and the end placeholder dedenting one level.
//!
//! Styling is applied here, after every width has been measured, so ANSI
//! escape sequences never influence a wrap decision.

use crate::inspect::{NodeInfo, Token};
use crate::style::paint;
use crate::InspectOptions;

fn indent(out: &mut String, levels: usize) {
    out.push('\n');
    for _ in 0..levels {
        out.push_str("  ");
    }
}

fn expanded(nodes: &[NodeInfo], node: usize, options: &InspectOptions) -> bool {
    nodes[node].total() > options.line_width
}

/// Renders a token stream to its final textual form.
pub(crate) fn render(tokens: &[Token], nodes: &[NodeInfo], options: &InspectOptions) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Open { text } | Token::Close { text } => out.push_str(text),
            Token::Key { text, category } | Token::Value { text, category } => {
                match (options.colors, category) {
                    (true, Some(category)) => out.push_str(&paint(*category, text)),
                    _ => out.push_str(text),
                }
            }
            Token::Separator => out.push(','),
            Token::Space => out.push(' '),
            Token::SpacingStart { node, depth } | Token::SpacingSep { node, depth } => {
                if expanded(nodes, *node, options) {
                    indent(&mut out, *depth);
                } else {
                    out.push(' ');
                }
            }
            Token::SpacingEnd { node, depth } => {
                if expanded(nodes, *node, options) {
                    indent(&mut out, depth.saturating_sub(1));
                } else {
                    out.push(' ');
                }
            }
            Token::More { text } => out.push_str(text),
            Token::LineBreak { indent: levels } => indent(&mut out, *levels),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::{ContainerRef, Inspector};
    use crate::Object;

    fn render_object(object: &Object, options: &InspectOptions) -> String {
        let mut inspector = Inspector::new(options);
        inspector.root(&ContainerRef::Object(object));
        render(&inspector.tokens, &inspector.nodes, options)
    }

    #[test]
    fn test_inline_when_narrow() {
        let obj = Object::new();
        obj.insert("a", 1);
        obj.insert("b", 2);
        let options = InspectOptions::new();
        assert_eq!(render_object(&obj, &options), "{ a: 1, b: 2 }");
    }

    #[test]
    fn test_expands_when_wide() {
        let obj = Object::new();
        obj.insert("a", 1);
        obj.insert("b", 2);
        let options = InspectOptions::new().with_line_width(5);
        assert_eq!(render_object(&obj, &options), "{\n  a: 1,\n  b: 2\n}");
    }

    #[test]
    fn test_colors_do_not_change_layout() {
        let obj = Object::new();
        obj.insert("a", 1);
        let plain = render_object(&obj, &InspectOptions::new());
        let colored = render_object(&obj, &InspectOptions::new().with_colors(true));
        assert_eq!(console::strip_ansi_codes(&colored), plain);
    }
}
