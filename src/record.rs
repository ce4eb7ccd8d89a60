use std::fmt;

use crate::convert::{Adapter, Converter, StringAdapter};
use crate::error::Error;
use crate::xmltree::{Node, XmlTree};

/// A structured record that can be translated into a tag with
/// [`XmlTree::translate`].
///
/// A record describes its fields once, in a [`RecordDescriptor`]:
///
/// ```rust
/// use std::sync::OnceLock;
/// use xmltag::{Directive, FieldValue, Record, RecordDescriptor, XmlTree};
///
/// struct Componente {
///     nome: String,
///     nota: f64,
/// }
///
/// impl Record for Componente {
///     fn descriptor() -> &'static RecordDescriptor<Self> {
///         static DESCRIPTOR: OnceLock<RecordDescriptor<Componente>> = OnceLock::new();
///         DESCRIPTOR.get_or_init(|| {
///             RecordDescriptor::<Self>::new()
///                 .name("componente")
///                 .field_with("nome", &[Directive::Attribute], |c| FieldValue::from(&c.nome))
///                 .field_with("nota", &[Directive::Ignore], |c| c.nota.into())
///         })
///     }
/// }
///
/// let mut xml = XmlTree::new();
/// let componente = Componente { nome: "Quizzes".to_string(), nota: 16.0 };
/// let node = xml.translate(&componente)?;
/// assert_eq!(xml.to_string(node), r#"<componente nome="Quizzes"/>"#);
/// # Ok::<(), xmltag::Error>(())
/// ```
pub trait Record: Sized + 'static {
    /// The field table of this record type.
    fn descriptor() -> &'static RecordDescriptor<Self>;
}

/// Reads the value of a field from a record.
pub type Accessor<R> = for<'r> fn(&'r R) -> FieldValue<'r>;

/// A directive controlling how a field is translated.
#[derive(Debug, Clone, Copy)]
pub enum Directive {
    /// Use this name instead of the field identifier.
    Name(&'static str),
    /// Leave the field out.
    Ignore,
    /// Translate the field into an attribute instead of a text tag.
    Attribute,
    /// Convert the value to text with this converter.
    Convert(Converter),
}

/// Describes a single field of a record.
pub struct FieldDescriptor<R> {
    ident: &'static str,
    name: Option<&'static str>,
    ignore: bool,
    attribute: bool,
    converter: Option<Converter>,
    accessor: Accessor<R>,
}

impl<R> FieldDescriptor<R> {
    fn new(ident: &'static str, directives: &[Directive], accessor: Accessor<R>) -> Self {
        let mut field = FieldDescriptor {
            ident,
            name: None,
            ignore: false,
            attribute: false,
            converter: None,
            accessor,
        };
        for directive in directives {
            match *directive {
                Directive::Name(name) => field.name = Some(name),
                Directive::Ignore => field.ignore = true,
                Directive::Attribute => field.attribute = true,
                Directive::Convert(converter) => field.converter = Some(converter),
            }
        }
        field
    }

    /// The identifier of the field.
    pub fn ident(&self) -> &'static str {
        self.ident
    }

    /// The name the field is translated to.
    pub fn xml_name(&self) -> &'static str {
        self.name.unwrap_or(self.ident)
    }

    /// Whether the field is left out.
    pub fn is_ignored(&self) -> bool {
        self.ignore
    }

    /// Whether the field becomes an attribute.
    pub fn is_attribute(&self) -> bool {
        self.attribute
    }

    /// Read the value of this field from `record`.
    pub fn value<'r>(&self, record: &'r R) -> FieldValue<'r> {
        (self.accessor)(record)
    }

    /// The text of a scalar value, using the converter if there is one.
    pub(crate) fn text(&self, value: &FieldValue<'_>) -> Result<String, Error> {
        match self.converter {
            Some(_) if matches!(value, FieldValue::Null) => Err(Error::ConversionFailure {
                name: self.ident.to_string(),
                message: "no value to convert".to_string(),
            }),
            Some(converter) => {
                converter
                    .convert(value)
                    .map_err(|e| Error::ConversionFailure {
                        name: self.ident.to_string(),
                        message: e.to_string(),
                    })
            }
            None => Ok(value.to_string()),
        }
    }
}

impl<R> fmt::Debug for FieldDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("ident", &self.ident)
            .field("name", &self.name)
            .field("ignore", &self.ignore)
            .field("attribute", &self.attribute)
            .field("converter", &self.converter)
            .finish()
    }
}

/// The field table of a record type: its names, adapter and fields in
/// declaration order.
pub struct RecordDescriptor<R> {
    type_name: &'static str,
    name: Option<&'static str>,
    adapter: Option<Adapter>,
    fields: Vec<FieldDescriptor<R>>,
}

impl<R: Record> RecordDescriptor<R> {
    /// Create a descriptor without fields.
    ///
    /// The type name is the last segment of the Rust type path of `R`.
    pub fn new() -> Self {
        RecordDescriptor {
            type_name: intrinsic_name(std::any::type_name::<R>()),
            name: None,
            adapter: None,
            fields: Vec::new(),
        }
    }
}

impl<R: Record> Default for RecordDescriptor<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> RecordDescriptor<R> {
    /// Use `name` as the tag name instead of the type name.
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// Transform names and values of this record with adapter `A`.
    pub fn adapter<A: StringAdapter>(mut self) -> Self {
        self.adapter = Some(Adapter::of::<A>());
        self
    }

    /// Add a field without directives.
    pub fn field(self, ident: &'static str, accessor: Accessor<R>) -> Self {
        self.field_with(ident, &[], accessor)
    }

    /// Add a field with directives.
    pub fn field_with(
        mut self,
        ident: &'static str,
        directives: &[Directive],
        accessor: Accessor<R>,
    ) -> Self {
        self.fields
            .push(FieldDescriptor::new(ident, directives, accessor));
        self
    }

    /// The intrinsic name of the type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The tag name: the custom name if there is one, else the type name.
    ///
    /// Fails with [`Error::LookupFailure`] if neither is available.
    pub fn xml_name(&self) -> Result<&'static str, Error> {
        match self.name {
            Some(name) => Ok(name),
            None if !self.type_name.is_empty() => Ok(self.type_name),
            None => Err(Error::LookupFailure("record type has no name".into())),
        }
    }

    pub(crate) fn class_adapter(&self) -> Option<Adapter> {
        self.adapter
    }

    /// The fields in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor<R>] {
        &self.fields
    }
}

impl<R> fmt::Debug for RecordDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordDescriptor")
            .field("type_name", &self.type_name)
            .field("name", &self.name)
            .field("adapter", &self.adapter)
            .field("fields", &self.fields)
            .finish()
    }
}

// `alloc::vec::Vec<my::Thing<u8>>` -> `Vec`
fn intrinsic_name(type_name: &'static str) -> &'static str {
    let path = type_name.split('<').next().unwrap_or_default();
    path.rsplit("::").next().unwrap_or_default()
}

/// A record nested in a list field.
///
/// Implemented for every [`Record`].
pub trait Translate {
    /// Build a tag for this record, ignoring any class adapter.
    fn translate_nested(&self, xml: &mut XmlTree) -> Result<Node, Error>;
}

impl<R: Record> Translate for R {
    fn translate_nested(&self, xml: &mut XmlTree) -> Result<Node, Error> {
        xml.translate_plain(self)
    }
}

/// The value of a record field.
///
/// Scalars are converted to text; a list of records is translated into
/// nested tags.
pub enum FieldValue<'a> {
    Str(&'a str),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Char(char),
    /// A missing optional value. Its text is `null`.
    Null,
    Records(Vec<&'a dyn Translate>),
}

impl<'a> FieldValue<'a> {
    /// A list of records.
    pub fn records<R: Record>(records: &'a [R]) -> Self {
        FieldValue::Records(records.iter().map(|r| r as &dyn Translate).collect())
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(s) => f.write_str(s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::UInt(u) => write!(f, "{}", u),
            // whole numbers keep a fractional digit: 6.0, not 6
            FieldValue::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 => {
                write!(f, "{:.1}", x)
            }
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Char(c) => write!(f, "{}", c),
            FieldValue::Null => f.write_str("null"),
            FieldValue::Records(records) => write!(f, "[{} records]", records.len()),
        }
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(s) => f.debug_tuple("Str").field(s).finish(),
            FieldValue::Records(records) => {
                f.debug_tuple("Records").field(&records.len()).finish()
            }
            other => write!(f, "{}", other),
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Str(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Str(value)
    }
}

macro_rules! from_number {
    ($variant:ident, $target:ty, $($source:ty),*) => {
        $(
            impl From<$source> for FieldValue<'_> {
                fn from(value: $source) -> Self {
                    FieldValue::$variant(<$target>::from(value))
                }
            }
        )*
    };
}

from_number!(Int, i64, i8, i16, i32, i64);
from_number!(UInt, u64, u8, u16, u32, u64);
from_number!(Float, f64, f64);

// 0.1f32 reads as 0.1, not as its widened f64 value
impl From<f32> for FieldValue<'_> {
    fn from(value: f32) -> Self {
        let shortest = value.to_string().parse().unwrap_or(f64::from(value));
        FieldValue::Float(shortest)
    }
}

impl From<usize> for FieldValue<'_> {
    fn from(value: usize) -> Self {
        FieldValue::UInt(value as u64)
    }
}

impl From<isize> for FieldValue<'_> {
    fn from(value: isize) -> Self {
        FieldValue::Int(value as i64)
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<char> for FieldValue<'_> {
    fn from(value: char) -> Self {
        FieldValue::Char(value)
    }
}

impl<'a, R: Record> From<&'a Vec<R>> for FieldValue<'a> {
    fn from(records: &'a Vec<R>) -> Self {
        FieldValue::records(records)
    }
}

impl<'a, T: Into<FieldValue<'a>>> From<Option<T>> for FieldValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}
