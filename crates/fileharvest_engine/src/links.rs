use ego_tree::NodeRef;
use fileharvest_core::LinkSelector;
use scraper::node::Node;
use scraper::Html;

/// Collects raw attribute values from a parsed page, in document order.
///
/// html5ever recovers from malformed markup instead of failing, so broken
/// input yields whatever links survive recovery (often none).
#[derive(Debug, Default, Clone, Copy)]
pub struct LinkExtractor;

impl LinkExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, html: &str) -> ParsedPage {
        ParsedPage {
            document: Html::parse_document(html),
        }
    }

    /// Parse and extract in one go.
    pub fn extract(&self, html: &str, selector: &LinkSelector) -> Vec<String> {
        self.parse(html).links(selector)
    }
}

/// A page parsed once and queried per category.
pub struct ParsedPage {
    document: Html,
}

impl ParsedPage {
    /// Every matching value, walking the tree in pre-order without
    /// recursion so nesting depth is bounded only by the parser.
    pub fn links(&self, selector: &LinkSelector) -> Vec<String> {
        self.document
            .tree
            .root()
            .descendants()
            .filter_map(|node| matching_value(node, selector))
            .collect()
    }
}

fn matching_value(node: NodeRef<'_, Node>, selector: &LinkSelector) -> Option<String> {
    let Node::Element(element) = node.value() else {
        return None;
    };
    if !element.name().eq_ignore_ascii_case(&selector.tag) {
        return None;
    }
    let value = element.attr(&selector.attribute)?;
    selector.matches_value(value).then(|| value.to_string())
}
