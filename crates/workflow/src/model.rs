use crate::Pathname;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a component could not be added.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AddComponentError {
    #[error("a name is required")]
    EmptyName,
    #[error("'{0}' is not a valid component name")]
    InvalidName(String),
    #[error("'{parent}' already contains a component named '{name}'")]
    DuplicateName { name: String, parent: Pathname },
    #[error("no scope named '{0}'")]
    UnknownParent(Pathname),
    #[error("'{0}' cannot contain components")]
    NotAContainer(Pathname),
    #[error("unknown component type '{0}'")]
    UnknownType(String),
}

/// Why two components could not be connected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConnectError {
    #[error("no scope named '{0}'")]
    UnknownScope(Pathname),
    #[error("no component named '{0}'")]
    UnknownComponent(Pathname),
}

/// One child of a scope, as reported to the dataflow figure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentSummary {
    pub name: String,
    pub pathname: Pathname,
    pub type_path: String,
    /// Containers are drawn as nested compartments and accept drops.
    pub container: bool,
}

/// A data connection between two children of the same scope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub source: String,
    pub target: String,
}

/// Everything needed to draw one scope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataflow {
    pub pathname: Pathname,
    pub components: Vec<ComponentSummary>,
    pub connections: Vec<Connection>,
}

/// The shared workflow definition the dataflow panel reads and mutates.
pub trait DataflowModel: 'static {
    /// Add an instance of `type_path` named `name` inside `parent`.
    ///
    /// Returns the new component's pathname.
    fn add_component(
        &mut self,
        type_path: &str,
        name: &str,
        parent: &Pathname,
    ) -> Result<Pathname, AddComponentError>;

    /// Describe the scope at `pathname`, or `None` if it does not exist.
    fn dataflow(&self, pathname: &Pathname) -> Option<Dataflow>;
}
