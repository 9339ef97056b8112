/// Separator for attribute path components.
pub(crate) const PATH_SEPARATOR: &str = ".";

/// One component of an attribute path, e.g. `profile` or `items[0]`.
///
/// The index marker is part of the segment's identity: `items[0]` and `items[1]` are distinct
/// segments sharing the identifier `items`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PathSegment<'a> {
    raw: &'a str,
    split: usize,
}

impl<'a> PathSegment<'a> {
    fn new(raw: &'a str) -> Self {
        let split = match raw.find('[') {
            Some(position) if position > 0 && is_index_marker(&raw[position..]) => position,
            _ => raw.len(),
        };
        Self { raw, split }
    }

    /// The whole segment as written.
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// The identifier part, without index markers.
    pub fn name(&self) -> &'a str {
        &self.raw[..self.split]
    }

    /// The trailing index markers (e.g. `[0][2]`), empty for plain identifiers.
    pub fn index(&self) -> &'a str {
        &self.raw[self.split..]
    }
}

/// `[0]`, `[0][12]`, ...
fn is_index_marker(marker: &str) -> bool {
    let mut rest = marker;
    while !rest.is_empty() {
        let Some(inner) = rest.strip_prefix('[') else {
            return false;
        };
        let Some(end) = inner.find(']') else {
            return false;
        };
        let digits = &inner[..end];
        if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return false;
        }
        rest = &inner[end + 1..];
    }
    true
}

/// Split a dotted attribute path into its segments.
///
/// Segments are opaque: no validation of existence or type happens here. An empty path yields a
/// single empty segment.
///
/// ```rust
/// use dynamodb_expression::common::path;
///
/// let segments: Vec<_> = path::tokenize("order.items[0].sku")
///     .into_iter()
///     .map(|segment| segment.as_str())
///     .collect();
/// assert_eq!(segments, vec!["order", "items[0]", "sku"]);
/// ```
pub fn tokenize(path: &str) -> Vec<PathSegment<'_>> {
    path.split(PATH_SEPARATOR).map(PathSegment::new).collect()
}
