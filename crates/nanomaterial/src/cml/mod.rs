//! A small, builder-style XML element tree for Chemical Markup Language documents

use std::fmt::{self, Display, Formatter, Write};

use tracing::trace;

pub const CML_NAMESPACE: &str = "http://www.xml-cml.org/schema";

/// An XML element, in the default CML namespace unless built with [`CmlElement::in_namespace`]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CmlElement {
    name: String,
    namespace: String,
    attributes: Vec<(String, String)>,
    namespace_declarations: Vec<(String, String)>,
    children: Vec<CmlNode>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum CmlNode {
    Element(CmlElement),
    Text(String),
}

impl CmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self::in_namespace(name, CML_NAMESPACE)
    }

    pub fn in_namespace(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        let name = name.into();
        trace!(element = %name, "creating CML element");
        Self {
            name,
            namespace: namespace.into(),
            attributes: Vec::new(),
            namespace_declarations: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing the value of any existing attribute with the same name
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let (name, value) = (name.into(), value.into());
        if let Some(existing) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.attributes.push((name, value));
        }
        self
    }

    pub fn add_namespace_declaration(
        &mut self,
        prefix: impl Into<String>,
        uri: impl Into<String>,
    ) -> &mut Self {
        self.namespace_declarations.push((prefix.into(), uri.into()));
        self
    }

    pub fn append_child(&mut self, child: Self) -> &mut Self {
        self.children.push(CmlNode::Element(child));
        self
    }

    pub fn append_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.children.push(CmlNode::Text(text.into()));
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.append_child(child);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.append_text(text);
        self
    }
}

// Accessors ===========================================================================================================

impl CmlElement {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn namespace_uri(&self, prefix: &str) -> Option<&str> {
        self.namespace_declarations
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, uri)| uri.as_str())
    }

    #[must_use]
    pub fn children(&self) -> &[CmlNode] {
        &self.children
    }

    /// The child elements named `name`, in document order
    pub fn child_elements<'e>(&'e self, name: &'e str) -> impl Iterator<Item = &'e Self> {
        self.children.iter().filter_map(move |child| match child {
            CmlNode::Element(element) if element.name == name => Some(element),
            _ => None,
        })
    }

    /// All of the text directly inside this element, concatenated
    #[must_use]
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                CmlNode::Text(text) => Some(text.as_str()),
                CmlNode::Element(_) => None,
            })
            .collect()
    }

    /// Renders this element and its children as compact XML, without an XML declaration
    #[must_use]
    pub fn to_xml(&self) -> String {
        self.to_string()
    }

    /// Like [`CmlElement::to_xml`], but places every child element on its own, indented line
    #[must_use]
    pub fn to_pretty_xml(&self) -> String {
        let mut buf = String::new();
        // NOTE: Writing to a `String` never fails
        let _ = self.write_xml(&mut buf, None, Some(0));
        buf
    }
}

// Display Trait Implementation ========================================================================================

impl Display for CmlElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_xml(f, None, None)
    }
}

const INDENT: &str = "  ";

impl CmlElement {
    fn write_xml(
        &self,
        w: &mut impl Write,
        parent_namespace: Option<&str>,
        depth: Option<usize>,
    ) -> fmt::Result {
        write!(w, "<{}", self.name)?;
        if parent_namespace != Some(self.namespace.as_str()) {
            write_attribute(w, "xmlns", &self.namespace)?;
        }
        for (name, value) in &self.attributes {
            write_attribute(w, name, value)?;
        }
        for (prefix, uri) in &self.namespace_declarations {
            write_attribute(w, &format!("xmlns:{prefix}"), uri)?;
        }

        if self.children.is_empty() {
            return w.write_str("/>");
        }
        w.write_char('>')?;

        // Elements holding only text are always kept on a single line
        let has_child_elements = self
            .children
            .iter()
            .any(|child| matches!(child, CmlNode::Element(_)));
        let child_depth = depth.filter(|_| has_child_elements).map(|d| d + 1);

        for child in &self.children {
            if let Some(child_depth) = child_depth {
                write!(w, "\n{}", INDENT.repeat(child_depth))?;
            }
            match child {
                CmlNode::Element(element) => element.write_xml(w, Some(&self.namespace), child_depth)?,
                CmlNode::Text(text) => write_escaped(w, text, false)?,
            }
        }

        if let (Some(depth), Some(_)) = (depth, child_depth) {
            write!(w, "\n{}", INDENT.repeat(depth))?;
        }
        write!(w, "</{}>", self.name)
    }
}

fn write_attribute(w: &mut impl Write, name: &str, value: &str) -> fmt::Result {
    write!(w, " {name}=\"")?;
    write_escaped(w, value, true)?;
    w.write_char('"')
}

// NOTE: Characters that XML 1.0 can't represent at all (even as references) are dropped, and whitespace that parsers
// would normalise away is written as character references
fn write_escaped(w: &mut impl Write, text: &str, in_attribute: bool) -> fmt::Result {
    for c in text.chars() {
        match c {
            '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}' => (),
            '&' => w.write_str("&amp;")?,
            '<' => w.write_str("&lt;")?,
            '>' => w.write_str("&gt;")?,
            '"' if in_attribute => w.write_str("&quot;")?,
            '\r' => w.write_str("&#xD;")?,
            '\t' if in_attribute => w.write_str("&#x9;")?,
            '\n' if in_attribute => w.write_str("&#xA;")?,
            c => w.write_char(c)?,
        }
    }
    Ok(())
}

// Module Tests ========================================================================================================
