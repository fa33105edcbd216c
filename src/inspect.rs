//! Structural traversal: pass one of the two-pass formatter.
//!
//! The inspector walks container values recursively and flattens them into
//! a token stream, keeping a per-node width record as it goes. Wrap
//! decisions depend on the total rendered width of a container's entire
//! subtree, which is only known once traversal completes, so nothing is
//! rendered here; the [`render`](crate::render) pass resolves the spacing
//! placeholders afterwards.
//!
//! Traversal is bounded on three axes:
//!
//! - **Depth**: a non-empty container at the configured nesting level is
//!   replaced by a bracketed type name (`[Object]`, `[Array]`, ...).
//!   Empty containers expand fully at any depth.
//! - **Cycles**: the top-level root is registered in the `ancestors` set
//!   and every other container in the `seen` set. Before descending into
//!   a child container the inspector consults `ancestors`, and (below the
//!   root) `seen`, emitting a `[Circular]` marker on a hit. Note that the
//!   `seen` check also flags repeated non-cyclic references once below
//!   the top level; this mirrors the reference convention.
//! - **Element caps**: typed arrays and buffers truncate with a
//!   `... N more` marker.

use crate::classify::classify;
use crate::style::Category;
use crate::{Buffer, InspectOptions, Number, Object, Symbol, TypedArray, Value};
use std::collections::HashSet;

pub(crate) type NodeId = usize;

/// A flattened rendering token. `SpacingStart`/`SpacingSep`/`SpacingEnd`
/// are placeholders resolved by the layout pass; everything else renders
/// verbatim.
#[derive(Clone, Debug)]
pub(crate) enum Token {
    Open {
        text: &'static str,
    },
    Close {
        text: &'static str,
    },
    Key {
        text: String,
        category: Option<Category>,
    },
    Value {
        text: String,
        category: Option<Category>,
    },
    Separator,
    Space,
    SpacingStart {
        node: NodeId,
        depth: usize,
    },
    SpacingSep {
        node: NodeId,
        depth: usize,
    },
    SpacingEnd {
        node: NodeId,
        depth: usize,
    },
    More {
        text: String,
    },
    LineBreak {
        indent: usize,
    },
}

impl Token {
    /// Character width this token contributes to its node. Spacing
    /// placeholders and line breaks carry no width.
    fn width(&self) -> usize {
        match self {
            Token::Open { text } | Token::Close { text } => text.chars().count(),
            Token::Key { text, .. } | Token::Value { text, .. } | Token::More { text } => {
                text.chars().count()
            }
            Token::Separator | Token::Space => 1,
            Token::SpacingStart { .. }
            | Token::SpacingSep { .. }
            | Token::SpacingEnd { .. }
            | Token::LineBreak { .. } => 0,
        }
    }
}

/// Accumulated width of a container node: its own tokens plus the totals
/// of all completed child nodes.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct NodeInfo {
    pub self_width: usize,
    pub child_width: usize,
}

impl NodeInfo {
    pub fn total(&self) -> usize {
        self.self_width + self.child_width
    }
}

/// Breakpoint table for grouping long flat numeric arrays: the largest
/// threshold not exceeding the array length picks how many elements are
/// placed per rendered line. Arrays shorter than the first threshold
/// render inline.
const GROUP_BREAKPOINTS: [(usize, usize); 9] = [
    (7, 4),
    (9, 5),
    (13, 6),
    (17, 7),
    (23, 8),
    (29, 9),
    (37, 10),
    (45, 11),
    (53, 12),
];

pub(crate) fn group_size(len: usize) -> Option<usize> {
    GROUP_BREAKPOINTS
        .iter()
        .rev()
        .find(|(threshold, _)| *threshold <= len)
        .map(|(_, size)| *size)
}

/// Borrowed view over the four container kinds.
pub(crate) enum ContainerRef<'a> {
    Object(&'a Object),
    Array(&'a crate::Array),
    TypedArray(&'a TypedArray),
    Buffer(&'a Buffer),
}

impl ContainerRef<'_> {
    fn addr(&self) -> usize {
        match self {
            ContainerRef::Object(o) => o.addr(),
            ContainerRef::Array(a) => a.addr(),
            ContainerRef::TypedArray(t) => t.addr(),
            ContainerRef::Buffer(b) => b.addr(),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            ContainerRef::Object(o) => o.is_empty(),
            ContainerRef::Array(a) => a.is_empty(),
            ContainerRef::TypedArray(t) => t.is_empty(),
            ContainerRef::Buffer(b) => b.is_empty(),
        }
    }

    /// Capitalized type name in brackets, used for depth collapse.
    fn placeholder(&self) -> String {
        match self {
            ContainerRef::Object(_) => "[Object]".to_string(),
            ContainerRef::Array(_) => "[Array]".to_string(),
            ContainerRef::TypedArray(t) => format!("[{}]", t.kind().type_name()),
            ContainerRef::Buffer(_) => "[Buffer]".to_string(),
        }
    }
}

pub(crate) fn container_of(value: &Value) -> Option<ContainerRef<'_>> {
    match value {
        Value::Object(o) => Some(ContainerRef::Object(o)),
        Value::Array(a) => Some(ContainerRef::Array(a)),
        Value::TypedArray(t) => Some(ContainerRef::TypedArray(t)),
        Value::Buffer(b) => Some(ContainerRef::Buffer(b)),
        _ => None,
    }
}

/// Pass-one traversal state. Created fresh for each top-level argument
/// and discarded once the argument's tokens have been rendered.
pub(crate) struct Inspector<'a> {
    options: &'a InspectOptions,
    pub tokens: Vec<Token>,
    pub nodes: Vec<NodeInfo>,
    ancestors: HashSet<usize>,
    seen: HashSet<usize>,
}

impl<'a> Inspector<'a> {
    pub fn new(options: &'a InspectOptions) -> Self {
        Inspector {
            options,
            tokens: Vec::new(),
            nodes: Vec::new(),
            ancestors: HashSet::new(),
            seen: HashSet::new(),
        }
    }

    /// Inspects a top-level container argument. The outermost container
    /// sits at nesting level 1.
    pub fn root(&mut self, container: &ContainerRef<'_>) {
        if 1 >= self.options.depth_limit && !container.is_empty() {
            let node = self.push_node();
            self.emit(
                node,
                Token::Value {
                    text: container.placeholder(),
                    category: Some(Category::Marker),
                },
            );
            return;
        }
        self.node(container, 1, true);
    }

    fn push_node(&mut self) -> NodeId {
        self.nodes.push(NodeInfo::default());
        self.nodes.len() - 1
    }

    fn emit(&mut self, node: NodeId, token: Token) {
        self.nodes[node].self_width += token.width();
        self.tokens.push(token);
    }

    fn linebreak(&mut self, indent: usize) {
        self.tokens.push(Token::LineBreak { indent });
    }

    fn node(&mut self, container: &ContainerRef<'_>, depth: usize, is_root: bool) -> NodeId {
        if is_root {
            self.ancestors.insert(container.addr());
        } else {
            self.seen.insert(container.addr());
        }
        let id = self.push_node();
        match container {
            ContainerRef::Object(o) => self.object_node(o, id, depth, is_root),
            ContainerRef::Array(a) => self.array_node(a, id, depth, is_root),
            ContainerRef::TypedArray(t) => self.typed_array_node(t, id, depth, is_root),
            ContainerRef::Buffer(b) => self.buffer_node(b, id),
        }
        id
    }

    /// Renders one property or element value of the node at `depth`.
    /// `is_root` is the flag of the *current* node: direct children of a
    /// top-level root are checked against `ancestors` only, everything
    /// deeper also against `seen`.
    fn child(&mut self, parent: NodeId, value: &Value, depth: usize, is_root: bool) {
        if let Some(container) = container_of(value) {
            let addr = container.addr();
            if self.ancestors.contains(&addr) || (!is_root && self.seen.contains(&addr)) {
                self.emit(
                    parent,
                    Token::Value {
                        text: "[Circular]".to_string(),
                        category: Some(Category::Marker),
                    },
                );
                return;
            }
            let child_depth = depth + 1;
            if child_depth >= self.options.depth_limit && !container.is_empty() {
                self.emit(
                    parent,
                    Token::Value {
                        text: container.placeholder(),
                        category: Some(Category::Marker),
                    },
                );
                return;
            }
            let child = self.node(&container, child_depth, false);
            self.nodes[parent].child_width += self.nodes[child].total();
        } else {
            // container_of returned None, so the classifier always
            // produces an atom here.
            if let Some(atom) = classify(value, false) {
                self.emit(
                    parent,
                    Token::Value {
                        text: atom.text,
                        category: atom.category,
                    },
                );
            }
        }
    }

    fn entry_boundary(&mut self, node: NodeId, depth: usize, first: &mut bool) {
        if *first {
            *first = false;
        } else {
            self.emit(node, Token::Separator);
            self.tokens.push(Token::SpacingSep { node, depth });
        }
    }

    fn emit_string_key(&mut self, node: NodeId, key: &str) {
        let (text, category) = if key.is_empty() {
            ("'':".to_string(), Some(Category::Key))
        } else if is_bare_key(key) {
            (format!("{}:", key), None)
        } else {
            // Quoted keys take single quotes and are not escaped.
            (format!("'{}':", key), Some(Category::Key))
        };
        self.emit(node, Token::Key { text, category });
        self.emit(node, Token::Space);
    }

    fn emit_symbol_key(&mut self, node: NodeId, key: &Symbol) {
        self.emit(
            node,
            Token::Key {
                text: format!("[{}]:", key.text()),
                category: Some(Category::Key),
            },
        );
        self.emit(node, Token::Space);
    }

    fn object_node(&mut self, object: &Object, id: NodeId, depth: usize, is_root: bool) {
        let properties = object.properties();
        if properties.is_empty() {
            self.emit(id, Token::Open { text: "{" });
            self.emit(id, Token::Close { text: "}" });
            return;
        }
        self.emit(id, Token::Open { text: "{" });
        self.tokens.push(Token::SpacingStart { node: id, depth });
        let mut first = true;
        for (key, value) in properties.string_entries() {
            self.entry_boundary(id, depth, &mut first);
            self.emit_string_key(id, key);
            self.child(id, value, depth, is_root);
        }
        for (key, value) in properties.symbol_entries() {
            self.entry_boundary(id, depth, &mut first);
            self.emit_symbol_key(id, key);
            self.child(id, value, depth, is_root);
        }
        self.tokens.push(Token::SpacingEnd { node: id, depth });
        self.emit(id, Token::Close { text: "}" });
    }

    fn array_node(&mut self, array: &crate::Array, id: NodeId, depth: usize, is_root: bool) {
        let inner = array.inner();
        if inner.elements.is_empty() && inner.extra.is_empty() {
            self.emit(id, Token::Open { text: "[" });
            self.emit(id, Token::Close { text: "]" });
            return;
        }

        let flat_numeric = inner.extra.is_empty()
            && inner
                .elements
                .iter()
                .all(|v| matches!(v, Value::Number(_)));
        if flat_numeric && group_size(inner.elements.len()).is_some() {
            let texts: Vec<String> = inner
                .elements
                .iter()
                .map(|v| match v {
                    Value::Number(n) => n.to_string(),
                    _ => unreachable!("flat numeric array holds only numbers"),
                })
                .collect();
            self.grouped(id, depth, &texts, inner.elements.len(), None);
            return;
        }

        self.emit(id, Token::Open { text: "[" });
        self.tokens.push(Token::SpacingStart { node: id, depth });
        let mut first = true;
        for value in &inner.elements {
            self.entry_boundary(id, depth, &mut first);
            self.child(id, value, depth, is_root);
        }
        for (key, value) in inner.extra.string_entries() {
            self.entry_boundary(id, depth, &mut first);
            self.emit_string_key(id, key);
            self.child(id, value, depth, is_root);
        }
        for (key, value) in inner.extra.symbol_entries() {
            self.entry_boundary(id, depth, &mut first);
            self.emit_symbol_key(id, key);
            self.child(id, value, depth, is_root);
        }
        self.tokens.push(Token::SpacingEnd { node: id, depth });
        self.emit(id, Token::Close { text: "]" });
    }

    fn typed_array_node(&mut self, array: &TypedArray, id: NodeId, depth: usize, is_root: bool) {
        let inner = array.inner();
        let len = inner.elements.len();
        self.emit(
            id,
            Token::Value {
                text: format!("{}({})", inner.kind.type_name(), len),
                category: None,
            },
        );
        self.emit(id, Token::Space);

        if len == 0 && inner.extra.is_empty() {
            self.emit(id, Token::Open { text: "[" });
            self.emit(id, Token::Close { text: "]" });
            return;
        }

        let shown = len.min(self.options.typed_array_cap);
        let omitted = len - shown;
        let more = (omitted > 0).then(|| more_text(omitted, "item"));

        if inner.extra.is_empty() && group_size(len).is_some() {
            let texts: Vec<String> = inner.elements[..shown]
                .iter()
                .map(|n| Number::Integer(*n).to_string())
                .collect();
            self.grouped(id, depth, &texts, len, more);
            return;
        }

        self.emit(id, Token::Open { text: "[" });
        self.tokens.push(Token::SpacingStart { node: id, depth });
        let mut first = true;
        for element in &inner.elements[..shown] {
            self.entry_boundary(id, depth, &mut first);
            self.emit(
                id,
                Token::Value {
                    text: Number::Integer(*element).to_string(),
                    category: Some(Category::Number),
                },
            );
        }
        if let Some(more) = more {
            self.entry_boundary(id, depth, &mut first);
            self.emit(id, Token::More { text: more });
        }
        for (key, value) in inner.extra.string_entries() {
            self.entry_boundary(id, depth, &mut first);
            self.emit_string_key(id, key);
            self.child(id, value, depth, is_root);
        }
        for (key, value) in inner.extra.symbol_entries() {
            self.entry_boundary(id, depth, &mut first);
            self.emit_symbol_key(id, key);
            self.child(id, value, depth, is_root);
        }
        self.tokens.push(Token::SpacingEnd { node: id, depth });
        self.emit(id, Token::Close { text: "]" });
    }

    /// Buffers are always rendered inline; the byte cap keeps the line
    /// bounded, so they never take part in spacing or grouping decisions.
    fn buffer_node(&mut self, buffer: &Buffer, id: NodeId) {
        let bytes = buffer.bytes();
        self.emit(
            id,
            Token::Value {
                text: format!("Buffer({})", bytes.len()),
                category: None,
            },
        );
        self.emit(id, Token::Space);

        if bytes.is_empty() {
            self.emit(id, Token::Open { text: "<" });
            self.emit(id, Token::Close { text: ">" });
            return;
        }

        self.emit(id, Token::Open { text: "<" });
        self.emit(id, Token::Space);
        let shown = bytes.len().min(self.options.buffer_cap);
        for (i, byte) in bytes[..shown].iter().enumerate() {
            if i > 0 {
                self.emit(id, Token::Separator);
                self.emit(id, Token::Space);
            }
            self.emit(
                id,
                Token::Value {
                    text: format!("{:02x}", byte),
                    category: Some(Category::Number),
                },
            );
        }
        let omitted = bytes.len() - shown;
        if omitted > 0 {
            self.emit(id, Token::Separator);
            self.emit(id, Token::Space);
            self.emit(
                id,
                Token::More {
                    text: more_text(omitted, "byte"),
                },
            );
        }
        self.emit(id, Token::Space);
        self.emit(id, Token::Close { text: ">" });
    }

    /// Grouped rendering for long flat numeric arrays: always expanded,
    /// with `per_line` elements on each rendered line. The group size is
    /// derived from the full (uncapped) array length.
    fn grouped(
        &mut self,
        id: NodeId,
        depth: usize,
        texts: &[String],
        full_len: usize,
        more: Option<String>,
    ) {
        let per_line = group_size(full_len).unwrap_or(GROUP_BREAKPOINTS[0].1);
        self.emit(id, Token::Open { text: "[" });
        self.linebreak(depth);
        for (i, text) in texts.iter().enumerate() {
            self.emit(
                id,
                Token::Value {
                    text: text.clone(),
                    category: Some(Category::Number),
                },
            );
            if i + 1 < texts.len() {
                self.emit(id, Token::Separator);
                if (i + 1) % per_line == 0 {
                    self.linebreak(depth);
                } else {
                    self.emit(id, Token::Space);
                }
            }
        }
        if let Some(more) = more {
            self.emit(id, Token::Separator);
            self.linebreak(depth);
            self.emit(id, Token::More { text: more });
        }
        self.linebreak(depth.saturating_sub(1));
        self.emit(id, Token::Close { text: "]" });
    }
}

fn more_text(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("... 1 more {}", noun)
    } else {
        format!("... {} more {}s", count, noun)
    }
}

/// Whether a string key renders without quotes: the literal primitive
/// words, or an identifier (first character not a digit, all characters
/// alphanumeric or underscore).
fn is_bare_key(key: &str) -> bool {
    if matches!(
        key,
        "undefined" | "null" | "true" | "false" | "NaN" | "Infinity"
    ) {
        return true;
    }
    let mut chars = key.chars();
    match chars.next() {
        None => return false,
        Some(first) => {
            if first.is_ascii_digit() || !(first.is_ascii_alphanumeric() || first == '_') {
                return false;
            }
        }
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
