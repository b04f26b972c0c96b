//! Workflow data model for the dataflow workbench.
//!
//! This crate knows nothing about drawing. It provides:
//! - [`Pathname`], the dot-delimited address of a scope or component
//! - [`DropPayload`], the typed value carried by a drag from the palette
//! - [`DataflowModel`], the interface the dataflow panel mutates through
//! - [`Assembly`], an in-memory model implementing that interface

mod assembly;
mod model;
mod pathname;
mod payload;

pub use assembly::{Assembly, ComponentNode, ComponentType, TypeLibrary, ASSEMBLY_TYPE};
pub use model::{
    AddComponentError, ComponentSummary, ConnectError, Connection, Dataflow, DataflowModel,
};
pub use pathname::Pathname;
pub use payload::{DropPayload, PayloadKind};
