//! Proptest support
//!
//! Proptests allow you to test for *properties* of your code that must hold
//! for arbitrary data. This module helps you write a proptest by letting you
//! generate an arbitrary document.
//!
//! This can be enabled by adding the `proptest` feature to your `Cargo.toml`.
//!
//! See the [`proptest`](https://docs.rs/proptest/latest/proptest/)
//! documentation for more information.

use ahash::HashSet;
use proptest::prelude::*;

use crate::error::Error;
use crate::xmltree::{Node, XmlTree};

const ELEMENT_NAMES: &[&str] = &["plano", "fuc", "nome", "avaliacao", "componente"];
const ATTRIBUTE_NAMES: &[&str] = &["codigo", "nome", "peso", "_id", "a.b-c"];
const TEXT: &str = "[a-zA-Z0-9 <>&%\u{e0}-\u{ff}]{0,12}";

/// A tag or text tag described as plain data, to be built into an
/// [`XmlTree`].
#[derive(Debug, Clone, PartialEq)]
pub enum FixedNode {
    Tag {
        name: String,
        attributes: Vec<(String, String)>,
        children: Vec<FixedNode>,
    },
    TextTag {
        name: String,
        attributes: Vec<(String, String)>,
        text: String,
    },
}

impl FixedNode {
    /// Build this node and its descendants as a detached fragment.
    pub fn build(&self, xml: &mut XmlTree) -> Result<Node, Error> {
        let (node, attributes) = match self {
            FixedNode::Tag {
                name,
                attributes,
                children,
            } => {
                let node = xml.new_tag(name)?;
                for child in children {
                    let child = child.build(xml)?;
                    xml.add_element(node, child)?;
                }
                (node, attributes)
            }
            FixedNode::TextTag {
                name,
                attributes,
                text,
            } => (xml.new_text_tag(name, text)?, attributes),
        };
        for (name, value) in attributes {
            xml.add_attribute(node, name, value)?;
        }
        Ok(node)
    }
}

/// A document described as plain data.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedDocument {
    pub child: Option<FixedNode>,
}

impl FixedDocument {
    /// Build the document with the default declaration.
    pub fn build(&self, xml: &mut XmlTree) -> Result<Node, Error> {
        let document = xml.new_document();
        if let Some(child) = &self.child {
            let child = child.build(xml)?;
            xml.add_element(document, child)?;
        }
        Ok(document)
    }
}

fn arb_attributes() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((prop::sample::select(ATTRIBUTE_NAMES), TEXT), 0..4).prop_map(
        |attributes| {
            let mut seen = HashSet::default();
            attributes
                .into_iter()
                .filter(|(name, _)| seen.insert(*name))
                .map(|(name, value)| (name.to_string(), value))
                .collect()
        },
    )
}

/// Strategy for an arbitrary tag or text tag with descendants.
pub fn arb_fixed_node() -> impl Strategy<Value = FixedNode> {
    let leaf = prop_oneof![
        (prop::sample::select(ELEMENT_NAMES), arb_attributes(), TEXT).prop_map(
            |(name, attributes, text)| FixedNode::TextTag {
                name: name.to_string(),
                attributes,
                text,
            }
        ),
        (prop::sample::select(ELEMENT_NAMES), arb_attributes()).prop_map(|(name, attributes)| {
            FixedNode::Tag {
                name: name.to_string(),
                attributes,
                children: Vec::new(),
            }
        }),
    ];

    leaf.prop_recursive(
        6,  // levels deep
        64, // maximum size of 64 nodes
        5,  // up to 5 items per collection
        |inner| {
            (
                prop::sample::select(ELEMENT_NAMES),
                arb_attributes(),
                prop::collection::vec(inner, 0..5),
            )
                .prop_map(|(name, attributes, children)| FixedNode::Tag {
                    name: name.to_string(),
                    attributes,
                    children,
                })
        },
    )
}

/// Strategy for an arbitrary document.
pub fn arb_fixed_document() -> impl Strategy<Value = FixedDocument> {
    prop::option::of(arb_fixed_node()).prop_map(|child| FixedDocument { child })
}
