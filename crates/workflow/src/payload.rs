use serde::{Deserialize, Serialize};

/// What a drag source represents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadKind {
    /// A component type from the library. The only kind the dataflow panel accepts.
    #[default]
    ObjectType,
    /// An existing component instance.
    Component,
    /// A file from the project tree.
    File,
}

/// Value carried through drag-and-drop from a palette entry to a drop target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropPayload {
    pub kind: PayloadKind,
    /// Name shown to the user, e.g. `Paraboloid`.
    pub display_name: String,
    /// Module path of the type, e.g. `openmdao.examples.Paraboloid`.
    pub type_path: String,
}

impl DropPayload {
    pub fn new(kind: PayloadKind, display_name: impl Into<String>, type_path: impl Into<String>) -> Self {
        Self {
            kind,
            display_name: display_name.into(),
            type_path: type_path.into(),
        }
    }

    /// Payload for a component type.
    pub fn object_type(display_name: impl Into<String>, type_path: impl Into<String>) -> Self {
        Self::new(PayloadKind::ObjectType, display_name, type_path)
    }

    pub fn is_object_type(&self) -> bool {
        self.kind == PayloadKind::ObjectType
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tag() {
        assert!(DropPayload::object_type("Foo", "pkg.Foo").is_object_type());
        assert!(!DropPayload::new(PayloadKind::File, "a.py", "a.py").is_object_type());
    }

    #[test]
    fn test_payload_json_shape() {
        let payload = DropPayload::object_type("Foo", "pkg.Foo");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["kind"], "object_type");
        assert_eq!(json["type_path"], "pkg.Foo");
    }
}
