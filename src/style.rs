//! Color annotation for rendered tokens.
//!
//! Each token carries an optional semantic [`Category`]; when colors are
//! enabled the renderer wraps the token text in the matching ANSI style.
//! Styling happens strictly after width accounting, so escape sequences
//! never inflate the measurements the layout engine wraps on. Styles are
//! forced rather than terminal-detected here so that output for a given
//! options value is deterministic; stream detection belongs to the
//! [`Logger`](crate::Logger).

use console::Style;

/// Semantic category of a rendered token, used only for styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Category {
    Undefined,
    Null,
    /// Numbers, booleans, and bigints.
    Number,
    String,
    Function,
    /// Quoted or symbol-keyed property keys.
    Key,
    /// Placeholder markers: `[Circular]`, `[Object]`, `[Array]`, etc.
    Marker,
}

fn style_for(category: Category) -> Style {
    let style = match category {
        Category::Undefined => Style::new().dim(),
        Category::Null => Style::new().bold(),
        Category::Number => Style::new().yellow(),
        Category::String => Style::new().green(),
        Category::Function => Style::new().cyan(),
        Category::Key => Style::new().green(),
        Category::Marker => Style::new().cyan(),
    };
    style.force_styling(true)
}

/// Wraps `text` in the ANSI style for `category`.
pub(crate) fn paint(category: Category, text: &str) -> String {
    style_for(category).apply_to(text).to_string()
}
