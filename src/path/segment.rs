// ABOUTME: Path segment type and the dotted/bracketed path expression grammar
// ABOUTME: Parses expressions like `a.b[0].c` into segments and renders them back

use std::fmt;

/// One step into a nested JSON-like value: a mapping key or a sequence index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl Segment {
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key(key.into())
    }

    pub fn index(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "{}", key),
            Self::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Parse a path expression into segments.
///
/// `.`, `[` and `]` all separate segments, so `a.b[0]` and `a.b.0` address
/// the same location. Empty parts are discarded. A part becomes an index
/// if and only if the whole part parses as a base-10 integer; everything
/// else stays a string key.
pub fn parse(expr: &str) -> Vec<Segment> {
    expr.split(['.', '[', ']'])
        .filter(|part| !part.is_empty())
        .map(|part| match part.parse::<usize>() {
            Ok(index) => Segment::Index(index),
            Err(_) => Segment::Key(part.to_string()),
        })
        .collect()
}

/// Render a segment sequence in canonical form: `$.name.items[0]`.
/// The empty path renders as `$`, the tree root.
pub fn render(path: &[Segment]) -> String {
    let mut rendered = String::from("$");
    for segment in path {
        match segment {
            Segment::Key(key) => {
                rendered.push('.');
                rendered.push_str(key);
            }
            Segment::Index(index) => {
                rendered.push('[');
                rendered.push_str(&index.to_string());
                rendered.push(']');
            }
        }
    }
    rendered
}
