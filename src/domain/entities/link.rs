//! Link entity representing a short name to URL mapping.

use serde::Serialize;

/// A stored mapping between a short name and its destination.
///
/// `name` is always in canonical lowercase form and `url` is the canonical
/// serialization produced at write time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub name: String,
    pub url: String,
}

impl Link {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Input data for inserting a new link.
///
/// Built by the management service only after the name has been normalized
/// and the URL canonicalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub name: String,
    pub url: String,
}

impl From<NewLink> for Link {
    fn from(new_link: NewLink) -> Self {
        Link::new(new_link.name, new_link.url)
    }
}
