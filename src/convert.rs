use std::fmt;

use crate::error::BoxError;
use crate::record::FieldValue;

/// Converts the value of a single field to its text.
///
/// Attach it to a field with
/// [`Directive::Convert`](crate::Directive::Convert). A fresh converter is
/// created with [`Default`] for every conversion.
pub trait StringConverter: Default {
    /// Convert `value` to text.
    fn to_string_text(&self, value: &FieldValue<'_>) -> Result<String, BoxError>;
}

/// Transforms the names and values of a record.
///
/// Attach it to a record type with
/// [`RecordDescriptor::adapter`](crate::RecordDescriptor::adapter). It
/// applies to the record's own tag name, field names and field values, not
/// to records nested in its list fields. A fresh adapter is created with
/// [`Default`] for every transformation.
pub trait StringAdapter: Default {
    /// Transform a name or value.
    fn transform(&self, value: &str) -> Result<String, BoxError>;
}

/// A reference to a [`StringConverter`] type.
#[derive(Clone, Copy)]
pub struct Converter {
    type_name: &'static str,
    convert: fn(&FieldValue<'_>) -> Result<String, BoxError>,
}

impl Converter {
    /// Refer to converter type `C`.
    pub fn of<C: StringConverter>() -> Self {
        Converter {
            type_name: std::any::type_name::<C>(),
            convert: convert_with::<C>,
        }
    }

    pub(crate) fn convert(&self, value: &FieldValue<'_>) -> Result<String, BoxError> {
        (self.convert)(value)
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Converter").field(&self.type_name).finish()
    }
}

fn convert_with<C: StringConverter>(value: &FieldValue<'_>) -> Result<String, BoxError> {
    C::default().to_string_text(value)
}

/// A reference to a [`StringAdapter`] type.
#[derive(Clone, Copy)]
pub struct Adapter {
    type_name: &'static str,
    transform: fn(&str) -> Result<String, BoxError>,
}

impl Adapter {
    /// Refer to adapter type `A`.
    pub fn of<A: StringAdapter>() -> Self {
        Adapter {
            type_name: std::any::type_name::<A>(),
            transform: transform_with::<A>,
        }
    }

    pub(crate) fn transform(&self, value: &str) -> Result<String, BoxError> {
        (self.transform)(value)
    }
}

impl fmt::Debug for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Adapter").field(&self.type_name).finish()
    }
}

fn transform_with<A: StringAdapter>(value: &str) -> Result<String, BoxError> {
    A::default().transform(value)
}

/// Converts a number to text followed by `%`, for instance `20%`.
///
/// Fails for anything that is not a number.
#[derive(Debug, Default)]
pub struct Percentage;

impl StringConverter for Percentage {
    fn to_string_text(&self, value: &FieldValue<'_>) -> Result<String, BoxError> {
        match value {
            FieldValue::Int(_) | FieldValue::UInt(_) | FieldValue::Float(_) => {
                Ok(format!("{}%", value))
            }
            _ => Err(format!("{} must be a number", value).into()),
        }
    }
}

/// Transforms names and values to upper case.
#[derive(Debug, Default)]
pub struct UpperCase;

impl StringAdapter for UpperCase {
    fn transform(&self, value: &str) -> Result<String, BoxError> {
        Ok(value.to_uppercase())
    }
}
