//! In-memory workflow model.
//!
//! An [`Assembly`] is a tree of components rooted at the top-level scope.
//! Container components (assemblies) hold child components and the
//! connections between them; everything else is a leaf.

use crate::{
    AddComponentError, ComponentSummary, ConnectError, Connection, Dataflow, DataflowModel,
    Pathname,
};
use serde::{Deserialize, Serialize};

/// Type path of the built-in container type.
pub const ASSEMBLY_TYPE: &str = "workflow.Assembly";

/// A type that can be instantiated from the palette.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentType {
    pub name: String,
    pub module_path: String,
    #[serde(default)]
    pub container: bool,
}

impl ComponentType {
    pub fn new(name: impl Into<String>, module_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module_path: module_path.into(),
            container: false,
        }
    }

    pub fn container(name: impl Into<String>, module_path: impl Into<String>) -> Self {
        Self {
            container: true,
            ..Self::new(name, module_path)
        }
    }
}

/// The set of component types a model can instantiate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeLibrary {
    types: Vec<ComponentType>,
}

impl Default for TypeLibrary {
    fn default() -> Self {
        Self {
            types: vec![ComponentType::container("Assembly", ASSEMBLY_TYPE)],
        }
    }
}

impl TypeLibrary {
    /// Add a type, replacing any existing entry with the same module path.
    pub fn register(&mut self, ty: ComponentType) {
        if let Some(existing) = self.types.iter_mut().find(|t| t.module_path == ty.module_path) {
            *existing = ty;
        } else {
            self.types.push(ty);
        }
    }

    pub fn with(mut self, ty: ComponentType) -> Self {
        self.register(ty);
        self
    }

    pub fn get(&self, module_path: &str) -> Option<&ComponentType> {
        self.types.iter().find(|t| t.module_path == module_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentType> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// A component instance in the tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentNode {
    pub name: String,
    pub type_path: String,
    #[serde(default)]
    pub container: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ComponentNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connections: Vec<Connection>,
}

impl ComponentNode {
    fn new(name: &str, ty: &ComponentType) -> Self {
        Self {
            name: name.to_string(),
            type_path: ty.module_path.clone(),
            container: ty.container,
            children: Vec::new(),
            connections: Vec::new(),
        }
    }

    pub fn child(&self, name: &str) -> Option<&ComponentNode> {
        self.children.iter().find(|c| c.name == name)
    }

    fn child_mut(&mut self, name: &str) -> Option<&mut ComponentNode> {
        self.children.iter_mut().find(|c| c.name == name)
    }

    /// Number of components in this subtree, not counting `self`.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }
}

/// The top-level scope of a workflow and everything below it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Assembly {
    library: TypeLibrary,
    root: ComponentNode,
}

impl Default for Assembly {
    fn default() -> Self {
        Self::new(TypeLibrary::default())
    }
}

impl Assembly {
    pub fn new(library: TypeLibrary) -> Self {
        let root = ComponentNode {
            name: String::new(),
            type_path: ASSEMBLY_TYPE.to_string(),
            container: true,
            children: Vec::new(),
            connections: Vec::new(),
        };
        Self { library, root }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Value {
        // Serializing plain structs with string keys cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    pub fn library(&self) -> &TypeLibrary {
        &self.library
    }

    pub fn root(&self) -> &ComponentNode {
        &self.root
    }

    pub fn component_count(&self) -> usize {
        self.root.descendant_count()
    }

    pub fn node(&self, pathname: &Pathname) -> Option<&ComponentNode> {
        pathname
            .segments()
            .try_fold(&self.root, |node, segment| node.child(segment))
    }

    fn node_mut(&mut self, pathname: &Pathname) -> Option<&mut ComponentNode> {
        let mut node = &mut self.root;
        for segment in pathname.segments() {
            node = node.child_mut(segment)?;
        }
        Some(node)
    }

    /// Record a connection between two children of `parent`.
    pub fn connect(
        &mut self,
        parent: &Pathname,
        source: &str,
        target: &str,
    ) -> Result<(), ConnectError> {
        let node = self
            .node_mut(parent)
            .ok_or_else(|| ConnectError::UnknownScope(parent.clone()))?;
        for name in [source, target] {
            if node.child(name).is_none() {
                return Err(ConnectError::UnknownComponent(parent.join(name)));
            }
        }
        let connection = Connection {
            source: source.to_string(),
            target: target.to_string(),
        };
        if !node.connections.contains(&connection) {
            node.connections.push(connection);
        }
        Ok(())
    }
}

/// Letter or underscore first, then letters, digits and underscores.
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl DataflowModel for Assembly {
    fn add_component(
        &mut self,
        type_path: &str,
        name: &str,
        parent: &Pathname,
    ) -> Result<Pathname, AddComponentError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AddComponentError::EmptyName);
        }
        if !is_valid_name(name) {
            return Err(AddComponentError::InvalidName(name.to_string()));
        }
        let ty = self
            .library
            .get(type_path)
            .cloned()
            .ok_or_else(|| AddComponentError::UnknownType(type_path.to_string()))?;

        let node = self
            .node_mut(parent)
            .ok_or_else(|| AddComponentError::UnknownParent(parent.clone()))?;
        if !node.container {
            return Err(AddComponentError::NotAContainer(parent.clone()));
        }
        if node.child(name).is_some() {
            return Err(AddComponentError::DuplicateName {
                name: name.to_string(),
                parent: parent.clone(),
            });
        }

        node.children.push(ComponentNode::new(name, &ty));
        let pathname = parent.join(name);
        log::info!("added {} ({}) to '{}'", pathname, type_path, parent);
        Ok(pathname)
    }

    fn dataflow(&self, pathname: &Pathname) -> Option<Dataflow> {
        let node = self.node(pathname)?;
        let components = node
            .children
            .iter()
            .map(|child| ComponentSummary {
                name: child.name.clone(),
                pathname: pathname.join(&child.name),
                type_path: child.type_path.clone(),
                container: child.container,
            })
            .collect();
        Some(Dataflow {
            pathname: pathname.clone(),
            components,
            connections: node.connections.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> TypeLibrary {
        TypeLibrary::default()
            .with(ComponentType::new("Paraboloid", "pkg.Paraboloid"))
            .with(ComponentType::new("Foo", "pkg.Foo"))
    }

    fn assembly() -> Assembly {
        let mut asm = Assembly::new(library());
        asm.add_component(ASSEMBLY_TYPE, "top", &Pathname::root())
            .unwrap();
        asm.add_component(ASSEMBLY_TYPE, "sub", &Pathname::new("top"))
            .unwrap();
        asm
    }

    #[test]
    fn test_add_component_returns_child_pathname() {
        let mut asm = assembly();
        let path = asm
            .add_component("pkg.Foo", "bar", &Pathname::new("top.sub"))
            .unwrap();
        assert_eq!(path, Pathname::new("top.sub.bar"));
        assert_eq!(asm.node(&path).unwrap().type_path, "pkg.Foo");
        assert_eq!(asm.component_count(), 3);
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let mut asm = assembly();
        asm.add_component("pkg.Foo", "bar", &Pathname::new("top"))
            .unwrap();
        let err = asm
            .add_component("pkg.Paraboloid", "bar", &Pathname::new("top"))
            .unwrap_err();
        assert_eq!(
            err,
            AddComponentError::DuplicateName {
                name: "bar".into(),
                parent: Pathname::new("top"),
            }
        );
    }

    #[test]
    fn test_invalid_targets_are_rejected() {
        let mut asm = assembly();
        asm.add_component("pkg.Foo", "leaf", &Pathname::new("top"))
            .unwrap();

        assert_eq!(
            asm.add_component("pkg.Foo", "x", &Pathname::new("nowhere")),
            Err(AddComponentError::UnknownParent(Pathname::new("nowhere")))
        );
        assert_eq!(
            asm.add_component("pkg.Foo", "x", &Pathname::new("top.leaf")),
            Err(AddComponentError::NotAContainer(Pathname::new("top.leaf")))
        );
        assert_eq!(
            asm.add_component("pkg.Missing", "x", &Pathname::new("top")),
            Err(AddComponentError::UnknownType("pkg.Missing".into()))
        );
        assert_eq!(
            asm.add_component("pkg.Foo", "  ", &Pathname::new("top")),
            Err(AddComponentError::EmptyName)
        );
        assert_eq!(
            asm.add_component("pkg.Foo", "1abc", &Pathname::new("top")),
            Err(AddComponentError::InvalidName("1abc".into()))
        );
    }

    #[test]
    fn test_dataflow_describes_children_and_connections() {
        let mut asm = assembly();
        let top = Pathname::new("top");
        asm.add_component("pkg.Foo", "a", &top).unwrap();
        asm.add_component("pkg.Paraboloid", "b", &top).unwrap();
        asm.connect(&top, "a", "b").unwrap();
        asm.connect(&top, "a", "b").unwrap();

        let flow = asm.dataflow(&top).unwrap();
        let names: Vec<_> = flow.components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["sub", "a", "b"]);
        assert!(flow.components[0].container);
        assert_eq!(flow.components[1].pathname, Pathname::new("top.a"));
        assert_eq!(flow.connections.len(), 1);

        assert_eq!(
            asm.connect(&top, "a", "ghost"),
            Err(ConnectError::UnknownComponent(Pathname::new("top.ghost")))
        );
        assert_eq!(
            asm.connect(&Pathname::new("top.ghost"), "a", "b"),
            Err(ConnectError::UnknownScope(Pathname::new("top.ghost")))
        );
        assert!(asm.dataflow(&Pathname::new("top.ghost")).is_none());
    }

    #[test]
    fn test_json_round_trip_preserves_tree() {
        let asm = assembly();
        let json = asm.to_json().to_string();
        let restored = Assembly::from_json(&json).unwrap();
        assert_eq!(restored, asm);
    }
}
