use crate::error::Error;
use crate::name::validate_name;

/// Attributes of a node.
///
/// Behaves like a map from name to value, but keeps insertion order.
/// Renaming an attribute keeps it in its original position.
///
/// Access is linear time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == name)
    }

    /// Return `true` if an attribute with this name exists.
    pub fn contains_key(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Get the value of an attribute.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.entries[i].1.as_str())
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Iterate over the names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Insert an attribute.
    ///
    /// A new name is appended at the end. If the name already exists its
    /// value is replaced in place.
    pub(crate) fn insert(&mut self, name: &str, value: &str) -> Result<(), Error> {
        validate_name(name)?;
        self.set(name, value);
        Ok(())
    }

    /// Like [`insert`](Attributes::insert), for names known to be valid.
    pub(crate) fn set(&mut self, name: &str, value: &str) {
        match self.position(name) {
            Some(i) => self.entries[i].1 = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    /// Rename an attribute, keeping its position and value. Does nothing if
    /// `name` is absent.
    ///
    /// Another attribute already called `new_name` is dropped, so names stay
    /// unique.
    pub(crate) fn rename(&mut self, name: &str, new_name: &str) -> Result<(), Error> {
        validate_name(new_name)?;
        if name == new_name || !self.contains_key(name) {
            return Ok(());
        }
        self.entries.retain(|(key, _)| key != new_name);
        if let Some(i) = self.position(name) {
            self.entries[i].0 = new_name.to_string();
        }
        Ok(())
    }

    /// Replace the value of an existing attribute. Does nothing if `name`
    /// is absent.
    pub(crate) fn set_value(&mut self, name: &str, value: &str) {
        if let Some(i) = self.position(name) {
            self.entries[i].1 = value.to_string();
        }
    }

    /// Remove the first attribute with this name, returning its value.
    pub(crate) fn remove(&mut self, name: &str) -> Option<String> {
        let i = self.position(name)?;
        Some(self.entries.remove(i).1)
    }
}
