use super::title::extract_province_name;
use roxmltree::{Document, Node, ParsingOptions};
use std::ops::Range;
use tracing::warn;

/// Local names of the filled shapes that can carry a province title.
pub const SHAPE_TAGS: [&str; 3] = ["path", "polygon", "polyline"];

/// A shape element labelled with a province title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvinceShape {
    pub province: String,
    pub has_style: bool,
    target: StyleTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum StyleTarget {
    /// Raw (still escaped) value range of an existing `style` attribute.
    Existing(Range<usize>),
    /// Offset just past the start tag's last attribute or its name.
    Insert(usize),
}

#[derive(Debug)]
struct Edit {
    range: Range<usize>,
    text: String,
}

/// An SVG document held as source text plus pending style edits.
///
/// Edits are spliced into the original text at the offsets the parser
/// reports, so everything the colorizer does not touch is written back
/// byte-for-byte.
pub struct SvgDocument<'input> {
    source: &'input str,
    tree: Document<'input>,
    edits: Vec<Edit>,
}

impl<'input> SvgDocument<'input> {
    pub fn parse(source: &'input str) -> Result<Self, roxmltree::Error> {
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let tree = Document::parse_with_options(source, options)?;
        Ok(Self {
            source,
            tree,
            edits: Vec::new(),
        })
    }

    /// Titled shapes in document order, starting with the root element itself.
    ///
    /// Shapes produced by expanding a DTD entity have no markup of their own
    /// in the document body and are skipped.
    pub fn province_shapes(&self) -> Vec<ProvinceShape> {
        let root = self.tree.root_element();
        let body = root.range();
        root.descendants()
            .filter(|node| node.is_element() && SHAPE_TAGS.contains(&node.tag_name().name()))
            .filter(|node| {
                let range = node.range();
                let in_body = body.start <= range.start && range.end <= body.end;
                if !in_body {
                    warn!(
                        tag = node.tag_name().name(),
                        offset = range.start,
                        "skipping shape expanded from a DTD entity"
                    );
                }
                in_body
            })
            .filter_map(|node| self.province_shape(node))
            .collect()
    }

    fn province_shape(&self, node: Node<'_, 'input>) -> Option<ProvinceShape> {
        let title = node
            .children()
            .find(|child| child.is_element() && child.tag_name().name() == "title")?;
        let text = title.text().filter(|text| !text.is_empty())?;

        let style = node
            .attributes()
            .find(|attr| attr.namespace().is_none() && attr.name() == "style");
        let target = match &style {
            Some(attr) => StyleTarget::Existing(attr.range_value()),
            None => StyleTarget::Insert(start_tag_insert_offset(self.source, node)),
        };

        Some(ProvinceShape {
            province: extract_province_name(text).to_string(),
            has_style: style.is_some_and(|attr| !attr.value().is_empty()),
            target,
        })
    }

    /// Queues `fill:<color>` for the shape, after any existing style.
    pub fn apply_fill(&mut self, shape: &ProvinceShape, color: &str) {
        let fragment = escape_attribute(&format!("fill:{color}"));
        let edit = match &shape.target {
            StyleTarget::Existing(range) if shape.has_style => Edit {
                range: range.clone(),
                text: format!("{}; {}", &self.source[range.clone()], fragment),
            },
            StyleTarget::Existing(range) => Edit {
                range: range.clone(),
                text: fragment,
            },
            StyleTarget::Insert(offset) => Edit {
                range: *offset..*offset,
                text: format!(" style=\"{fragment}\""),
            },
        };
        self.edits.push(edit);
    }

    pub fn edit_count(&self) -> usize {
        self.edits.len()
    }

    /// The rewritten document, without any leading XML declaration.
    pub fn render(&self) -> String {
        let mut edits: Vec<&Edit> = self.edits.iter().collect();
        edits.sort_by_key(|edit| edit.range.start);

        let body_start = body_start(self.source);
        let mut output = String::with_capacity(self.source.len() + self.edits.len() * 24);
        let mut cursor = body_start;
        for edit in edits {
            output.push_str(&self.source[cursor..edit.range.start]);
            output.push_str(&edit.text);
            cursor = edit.range.end;
        }
        output.push_str(&self.source[cursor..]);
        output
    }
}

fn start_tag_insert_offset(source: &str, node: Node<'_, '_>) -> usize {
    if let Some(last) = node.attributes().last() {
        return last.range().end;
    }
    let start = node.range().start + 1;
    source[start..]
        .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .map(|len| start + len)
        .unwrap_or(start)
}

/// Offset of the first byte after the XML declaration and the whitespace
/// following it, or 0 when there is no declaration.
fn body_start(source: &str) -> usize {
    let Some(rest) = source.strip_prefix("<?xml") else {
        return 0;
    };
    if !rest.starts_with(|c: char| c.is_whitespace() || c == '?') {
        return 0;
    }
    let Some(end) = source.find("?>").map(|end| end + 2) else {
        return 0;
    };
    let trailing = source[end..].len() - source[end..].trim_start().len();
    end + trailing
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
