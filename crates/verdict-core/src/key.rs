use crate::{COMPOSITE_KEY_ESCAPE, COMPOSITE_KEY_SEPARATOR};
use derive_more::Display;
use std::borrow::Borrow;

///
/// EntityKey
///
/// External (string) representation of an entity's primary key.
///
/// Keys are compared by the equality of this representation and never by the
/// identity of the entity that produced them; an entity that was detached and
/// merged back yields the same key.
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct EntityKey(String);

impl EntityKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Build a composite key from its parts in declaration order.
    ///
    /// Parts are joined by [`COMPOSITE_KEY_SEPARATOR`]. A separator or
    /// [`COMPOSITE_KEY_ESCAPE`] inside a part is escaped, so `["1,A"]` and
    /// `["1", "A"]` render differently.
    #[must_use]
    pub fn composite<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rendered = String::new();
        for (index, part) in parts.into_iter().enumerate() {
            if index > 0 {
                rendered.push(COMPOSITE_KEY_SEPARATOR);
            }
            for ch in part.as_ref().chars() {
                if ch == COMPOSITE_KEY_SEPARATOR || ch == COMPOSITE_KEY_ESCAPE {
                    rendered.push(COMPOSITE_KEY_ESCAPE);
                }
                rendered.push(ch);
            }
        }

        Self(rendered)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split a composite key back into its unescaped parts.
    #[must_use]
    pub fn parts(&self) -> Vec<String> {
        let mut parts = Vec::new();
        let mut current = String::new();
        let mut chars = self.0.chars();

        while let Some(ch) = chars.next() {
            match ch {
                COMPOSITE_KEY_ESCAPE => current.push(chars.next().unwrap_or(ch)),
                COMPOSITE_KEY_SEPARATOR => parts.push(std::mem::take(&mut current)),
                _ => current.push(ch),
            }
        }
        parts.push(current);

        parts
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for EntityKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EntityKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for EntityKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&String> for EntityKey {
    fn from(key: &String) -> Self {
        Self(key.clone())
    }
}

impl From<i64> for EntityKey {
    fn from(key: i64) -> Self {
        Self(key.to_string())
    }
}

impl From<u64> for EntityKey {
    fn from(key: u64) -> Self {
        Self(key.to_string())
    }
}

impl PartialEq<str> for EntityKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EntityKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

///
/// TESTS
///
