//! Pure construction of popup content for map features.
//!
//! A popup is built as a small DOM-equivalent tree of [`HtmlNode`]s. Building
//! the tree has no side effects, so the same feature always produces the same
//! popup. The embedding UI either walks the tree or serializes it with
//! [`HtmlNode::to_html`] and hands the string to a web view.

use crate::feature::Feature;

/// Width of the thumbnail image inside a popup.
const THUMBNAIL_WIDTH: &str = "250px";

/// Tag of the popup heading element.
const HEADING_TAG: &str = "h4";

/// A node of a popup content tree.
#[derive(Debug, Clone, PartialEq)]
pub enum HtmlNode {
    /// An element with a tag, attributes and children.
    Element(HtmlElement),
    /// A text node. The text is escaped when serialized.
    Text(String),
    /// A `<br>` line break.
    LineBreak,
}

/// An element node of a popup content tree.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlElement {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<HtmlNode>,
}

impl HtmlElement {
    /// Creates an empty element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds an attribute to the element.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Adds a child node to the element.
    pub fn with_child(mut self, child: HtmlNode) -> Self {
        self.children.push(child);
        self
    }

    /// Tag of the element.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the value of the given attribute, if set.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    /// Children of the element.
    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    fn is_void(&self) -> bool {
        matches!(self.tag.as_str(), "img" | "br" | "hr")
    }
}

impl From<HtmlElement> for HtmlNode {
    fn from(value: HtmlElement) -> Self {
        Self::Element(value)
    }
}

impl HtmlNode {
    /// Creates a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Returns the element value of the node, if it is an element.
    pub fn as_element(&self) -> Option<&HtmlElement> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Returns all elements with the given tag in this subtree, in document
    /// order.
    pub fn find_all<'a>(&'a self, tag: &str) -> Vec<&'a HtmlElement> {
        let mut found = Vec::new();
        self.collect_by_tag(tag, &mut found);
        found
    }

    fn collect_by_tag<'a>(&'a self, tag: &str, found: &mut Vec<&'a HtmlElement>) {
        if let Self::Element(element) = self {
            if element.tag == tag {
                found.push(element);
            }
            for child in &element.children {
                child.collect_by_tag(tag, found);
            }
        }
    }

    /// Serializes the tree into an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(&escape(text)),
            Self::LineBreak => out.push_str("<br>"),
            Self::Element(element) => {
                out.push('<');
                out.push_str(&element.tag);
                for (name, value) in &element.attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape(value));
                    out.push('"');
                }
                out.push('>');

                if !element.is_void() {
                    for child in &element.children {
                        child.write_html(out);
                    }
                    out.push_str("</");
                    out.push_str(&element.tag);
                    out.push('>');
                }
            }
        }
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Options controlling the popup content.
///
/// The upstream site went through several revisions of the popup markup, so
/// the differences between them are kept configurable instead of hard-coded.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupOptions {
    /// Whether to add a heading with the feature name above the image.
    pub show_name_heading: bool,
    /// Base path the thumbnail file names are resolved against.
    pub thumbnail_base: String,
}

impl Default for PopupOptions {
    fn default() -> Self {
        Self {
            show_name_heading: true,
            thumbnail_base: "/output".to_string(),
        }
    }
}

/// Builds the popup content for one feature.
///
/// The popup contains a heading with the feature name (unless disabled in
/// `options`) and, for features with a thumbnail, the thumbnail image
/// followed by a line break. When the feature also carries a Commons page
/// link, the image is wrapped into a link to that page.
pub fn render_popup(feature: &Feature, options: &PopupOptions) -> HtmlNode {
    let mut root = HtmlElement::new("div");

    if options.show_name_heading {
        root = root.with_child(
            HtmlElement::new(HEADING_TAG)
                .with_child(HtmlNode::text(&feature.properties.name))
                .into(),
        );
    }

    if let Some(thumbnail) = &feature.properties.thumbnail_filename {
        let image = HtmlElement::new("img")
            .with_attribute(
                "src",
                format!("{}/{}", options.thumbnail_base.trim_end_matches('/'), thumbnail),
            )
            .with_attribute("width", THUMBNAIL_WIDTH);

        let image = match &feature.properties.commons_link {
            Some(link) => HtmlElement::new("a")
                .with_attribute("href", link)
                .with_child(image.into()),
            None => image,
        };

        root = root.with_child(image.into()).with_child(HtmlNode::LineBreak);
    }

    root.into()
}

#[cfg(test)]
mod tests {
    use placemap_types::latlon;

    use super::*;
    use crate::feature::FeatureProperties;

    fn feature(thumbnail: Option<&str>, commons: Option<&str>) -> Feature {
        Feature {
            key: "a".to_string(),
            properties: FeatureProperties {
                name: "X".to_string(),
                coordinates: latlon!(1.0, 2.0),
                thumbnail_filename: thumbnail.map(|v| v.to_string()),
                commons_link: commons.map(|v| v.to_string()),
            },
        }
    }

    #[test]
    fn popup_without_thumbnail_has_heading_and_no_image() {
        let popup = render_popup(&feature(None, None), &PopupOptions::default());

        let headings = popup.find_all("h4");
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].children(), &[HtmlNode::text("X")]);

        assert!(popup.find_all("img").is_empty());
        assert!(popup.find_all("a").is_empty());
    }

    #[test]
    fn popup_with_thumbnail_has_one_image() {
        let popup = render_popup(&feature(Some("pic.jpg"), None), &PopupOptions::default());

        let images = popup.find_all("img");
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].attribute("src"), Some("/output/pic.jpg"));
        assert_eq!(images[0].attribute("width"), Some("250px"));
        assert!(popup.find_all("a").is_empty());
    }

    #[test]
    fn image_is_wrapped_into_commons_link() {
        let popup = render_popup(
            &feature(Some("pic.jpg"), Some("https://commons.wikimedia.org/wiki/X")),
            &PopupOptions::default(),
        );

        let links = popup.find_all("a");
        assert_eq!(links.len(), 1);
        assert_eq!(
            links[0].attribute("href"),
            Some("https://commons.wikimedia.org/wiki/X")
        );

        let images = links[0]
            .children()
            .iter()
            .filter_map(|child| child.as_element())
            .filter(|element| element.tag() == "img")
            .count();
        assert_eq!(images, 1);
    }

    #[test]
    fn heading_can_be_disabled() {
        let options = PopupOptions {
            show_name_heading: false,
            ..Default::default()
        };
        let popup = render_popup(&feature(None, None), &options);
        assert!(popup.find_all("h4").is_empty());
    }

    #[test]
    fn thumbnail_base_is_configurable() {
        let options = PopupOptions {
            thumbnail_base: "/thumbs/".to_string(),
            ..Default::default()
        };
        let popup = render_popup(&feature(Some("pic.jpg"), None), &options);
        assert_eq!(
            popup.find_all("img")[0].attribute("src"),
            Some("/thumbs/pic.jpg")
        );
    }

    #[test]
    fn serializes_to_html() {
        let popup = render_popup(&feature(Some("pic.jpg"), None), &PopupOptions::default());
        assert_eq!(
            popup.to_html(),
            "<div><h4>X</h4><img src=\"/output/pic.jpg\" width=\"250px\"><br></div>"
        );
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let mut feature = feature(None, None);
        feature.properties.name = "Tom & \"Jerry\" <3".to_string();

        let popup = render_popup(&feature, &PopupOptions::default());
        assert!(popup
            .to_html()
            .contains("Tom &amp; &quot;Jerry&quot; &lt;3"));
    }
}
