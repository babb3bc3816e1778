//! The HTML node tree the converter produces, and its serialization.

/// Structural invariant violations that make a node unbuildable or a tree
/// unserializable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    #[error("a leaf node needs a tag or a value")]
    EmptyLeaf,
    #[error("parent node <{0}> has no children")]
    ChildlessParent(String),
}

/// The one tag whose leaves serialize to the self-closing form.
const SELF_CLOSING_TAG: &str = "img";

/// An owned HTML tree node: either a leaf holding text or a parent holding
/// children. Attribute order is insertion order, preserved verbatim on
/// output. The tree is single-owner and acyclic by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf {
        /// `None` renders the value as raw text with no surrounding tag.
        tag: Option<String>,
        value: Option<String>,
        attrs: Vec<(String, String)>,
    },
    Parent {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<HtmlNode>,
    },
}

impl HtmlNode {
    /// Builds a leaf, rejecting the tag-and-value-both-absent case up front.
    pub fn leaf(
        tag: Option<&str>,
        value: Option<&str>,
        attrs: Vec<(String, String)>,
    ) -> Result<Self, StructureError> {
        if tag.is_none() && value.is_none() {
            return Err(StructureError::EmptyLeaf);
        }
        Ok(HtmlNode::Leaf {
            tag: tag.map(str::to_string),
            value: value.map(str::to_string),
            attrs,
        })
    }

    /// A tagless leaf rendering `value` as raw text.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attrs: Vec::new(),
        }
    }

    /// A tagged leaf with no attributes.
    pub fn element(tag: &str, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: Some(value.into()),
            attrs: Vec::new(),
        }
    }

    /// A parent node wrapping `children` under `tag`.
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children,
        }
    }

    /// Serializes the subtree rooted at this node to an HTML string.
    ///
    /// Fails on a childless parent or a leaf with neither tag nor value;
    /// everything else renders. Children render in order, depth first.
    pub fn to_html(&self) -> Result<String, StructureError> {
        match self {
            HtmlNode::Leaf {
                tag: None,
                value: Some(value),
                ..
            } => Ok(value.clone()),
            HtmlNode::Leaf {
                tag: None,
                value: None,
                ..
            } => Err(StructureError::EmptyLeaf),
            HtmlNode::Leaf { tag: Some(tag), value, attrs } => {
                if tag == SELF_CLOSING_TAG {
                    return Ok(format!("<{tag}{} />", render_attrs(attrs)));
                }
                let value = value.as_deref().unwrap_or_default();
                Ok(format!("<{tag}{}>{value}</{tag}>", render_attrs(attrs)))
            }
            HtmlNode::Parent { tag, attrs, children } => {
                if children.is_empty() {
                    return Err(StructureError::ChildlessParent(tag.clone()));
                }
                let mut html = format!("<{tag}{}>", render_attrs(attrs));
                for child in children {
                    html.push_str(&child.to_html()?);
                }
                html.push_str(&format!("</{tag}>"));
                Ok(html)
            }
        }
    }
}

/// Renders ` name="value"` pairs in insertion order, never alphabetized.
/// Values are escaped for the double-quoted attribute position.
fn render_attrs(attrs: &[(String, String)]) -> String {
    attrs
        .iter()
        .map(|(name, value)| {
            format!(
                " {name}=\"{}\"",
                html_escape::encode_double_quoted_attribute(value)
            )
        })
        .collect()
}
