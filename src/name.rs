use crate::error::Error;

/// The fixed name of a document node.
pub(crate) const DOCUMENT_NAME: &str = "xml";

/// Check whether `name` may be used as an element or attribute name.
///
/// A name starts with an ASCII letter or `_`, continues with ASCII
/// letters, digits, `.`, `_` or `-`, and never starts with `xml` in any
/// combination of case.
///
/// ```rust
/// assert!(xmltag::is_valid_name("componente"));
/// assert!(xmltag::is_valid_name("_a.b-c"));
/// assert!(!xmltag::is_valid_name("1st"));
/// assert!(!xmltag::is_valid_name("XmLish"));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    if chars.any(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))) {
        return false;
    }
    !name
        .get(..3)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(DOCUMENT_NAME))
}

pub(crate) fn validate_name(name: &str) -> Result<(), Error> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(Error::InvalidName(name.to_string()))
    }
}
