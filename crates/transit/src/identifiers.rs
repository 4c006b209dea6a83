//! Type-safe identifiers for feed entities.
//!
//! Identifiers wrap `Arc<str>` so that clones are cheap; every entity in a
//! fetch cycle carries its own copy of the ids it references.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

macro_rules! impl_identifier {
    ($name:ident) => {
        #[derive(Clone, Debug)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(s: impl AsRef<str>) -> Self {
                Self(s.as_ref().into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.0.hash(state);
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }
    };
}

impl_identifier!(RouteIdentifier);
impl_identifier!(StationIdentifier);
impl_identifier!(BusIdentifier);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_equality() {
        let id1 = RouteIdentifier::new("47235");
        let id2 = RouteIdentifier::new("47235");
        let id3 = id1.clone();

        assert_eq!(id1, id2);
        assert_eq!(id1, id3);
        assert_ne!(id1, RouteIdentifier::new("47233"));
    }

    #[test]
    fn test_identifier_as_map_key() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(StationIdentifier::new("12345"), 7usize);

        assert_eq!(map.get(&StationIdentifier::new("12345")), Some(&7));
    }

    #[test]
    fn test_identifier_display() {
        let id = BusIdentifier::new("bus_1");
        assert_eq!(format!("{}", id), "bus_1");
    }
}
