use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix appended to the sanitised pathname to form a surface identifier.
const SURFACE_ID_SUFFIX: &str = "-dataflow";

/// A dot-delimited address in the workflow namespace, e.g. `top.sub.comp`.
///
/// The empty pathname names the top-level scope.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pathname(String);

impl Pathname {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The top-level scope.
    pub fn root() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the dot-separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.').filter(|s| !s.is_empty())
    }

    /// The last segment, or `None` for the root.
    pub fn name(&self) -> Option<&str> {
        self.segments().last()
    }

    /// The enclosing scope. The root has no parent.
    pub fn parent(&self) -> Option<Pathname> {
        if self.is_root() {
            return None;
        }
        match self.0.rfind('.') {
            Some(idx) => Some(Self(self.0[..idx].to_string())),
            None => Some(Self::root()),
        }
    }

    /// Address of a child named `name` inside this scope.
    pub fn join(&self, name: &str) -> Pathname {
        if self.is_root() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{}", self.0, name))
        }
    }

    /// Replace every character outside `[A-Za-z0-9_-]` with `-`.
    ///
    /// Applying it to an already sanitised string returns the same string.
    pub fn sanitize(raw: &str) -> String {
        raw.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '-'
                }
            })
            .collect()
    }

    /// Identifier for the surface that renders this scope.
    pub fn surface_id(&self) -> String {
        format!("{}{}", Self::sanitize(&self.0), SURFACE_ID_SUFFIX)
    }
}

impl fmt::Debug for Pathname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pathname({:?})", self.0)
    }
}

impl fmt::Display for Pathname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Pathname {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Pathname {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_id_has_no_dots() {
        for raw in ["top", "top.sub", "top.sub.comp", "a.b.c.d.e", ".leading", "trailing."] {
            let id = Pathname::new(raw).surface_id();
            assert!(!id.contains('.'), "{id} still contains a dot");
            assert!(id.ends_with("-dataflow"));
        }
        assert_eq!(Pathname::new("top.sub").surface_id(), "top-sub-dataflow");
    }

    #[test]
    fn test_sanitize_is_deterministic_and_idempotent() {
        let raw = "top.sub comp/x";
        let once = Pathname::sanitize(raw);
        assert_eq!(once, "top-sub-comp-x");
        assert_eq!(Pathname::sanitize(raw), once);
        assert_eq!(Pathname::sanitize(&once), once);
    }

    #[test]
    fn test_parent_and_join() {
        let path = Pathname::new("top.sub.comp");
        assert_eq!(path.name(), Some("comp"));
        assert_eq!(path.parent(), Some(Pathname::new("top.sub")));
        assert_eq!(Pathname::new("top").parent(), Some(Pathname::root()));
        assert_eq!(Pathname::root().parent(), None);
        assert_eq!(Pathname::root().join("top"), Pathname::new("top"));
        assert_eq!(Pathname::new("top").join("sub"), Pathname::new("top.sub"));
    }
}
