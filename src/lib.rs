#![forbid(unsafe_code)]

//! Build, query and serialize XML element trees, and translate records into
//! them.
//!
//! All nodes live in an [`XmlTree`] and are referred to with lightweight
//! [`Node`] handles. A tree is a [`Value::Document`] holding at most one
//! child, [`Value::Tag`] nodes holding ordered children, and
//! [`Value::TextTag`] leaves holding text.
//!
//! ```rust
//! let mut xml = xmltag::XmlTree::new();
//! let doc = xml.document(&[], |b| {
//!     b.tag("fuc", &[("codigo", "M4310")], |b| {
//!         b.text_tag("nome", "Programação Avançada", &[])?;
//!         Ok(())
//!     })?;
//!     Ok(())
//! })?;
//! assert_eq!(xml.xpath(doc, "fuc/nome").len(), 1);
//! # Ok::<(), xmltag::Error>(())
//! ```

mod access;
#[cfg(any(test, feature = "proptest"))]
pub mod arbitrary;
mod attributes;
mod builder;
mod bulk;
mod convert;
mod creation;
mod document;
mod error;
mod manipulation;
mod name;
mod record;
mod serialize;
mod translate;
mod visit;
mod xmltree;
mod xmlvalue;
mod xpath;

pub use attributes::Attributes;
pub use builder::ElementBuilder;
pub use convert::{Adapter, Converter, Percentage, StringAdapter, StringConverter, UpperCase};
pub use document::Declaration;
pub use error::{BoxError, Error};
pub use name::is_valid_name;
pub use record::{
    Accessor, Directive, FieldDescriptor, FieldValue, Record, RecordDescriptor, Translate,
};
pub use serialize::SerializeOptions;
pub use xmltree::{Node, XmlTree};
pub use xmlvalue::{Document, Tag, TextTag, Value, ValueType};
