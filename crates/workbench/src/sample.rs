//! Built-in library and starter project used when no project file is given.

use workflow::{Assembly, ComponentType, DataflowModel, Pathname, TypeLibrary, ASSEMBLY_TYPE};

pub fn sample_library() -> TypeLibrary {
    TypeLibrary::default()
        .with(ComponentType::new(
            "Paraboloid",
            "openmdao.examples.simple.paraboloid.Paraboloid",
        ))
        .with(ComponentType::new(
            "ExecComp",
            "openmdao.lib.components.exec_comp.ExecComp",
        ))
        .with(ComponentType::new(
            "SLSQPdriver",
            "openmdao.lib.drivers.slsqpdriver.SLSQPdriver",
        ))
        .with(ComponentType::new(
            "CONMINdriver",
            "openmdao.lib.drivers.conmindriver.CONMINdriver",
        ))
        .with(ComponentType::new(
            "MetaModel",
            "openmdao.lib.components.metamodel.MetaModel",
        ))
}

/// A `top` assembly with an optimizer driving a paraboloid.
pub fn sample_project() -> Assembly {
    let mut assembly = Assembly::new(sample_library());
    let top = Pathname::new("top");
    let steps = [
        (ASSEMBLY_TYPE, "top", Pathname::root()),
        (
            "openmdao.lib.drivers.slsqpdriver.SLSQPdriver",
            "driver",
            top.clone(),
        ),
        (
            "openmdao.examples.simple.paraboloid.Paraboloid",
            "paraboloid",
            top.clone(),
        ),
        (ASSEMBLY_TYPE, "sub", top.clone()),
    ];
    for (type_path, name, parent) in steps {
        if let Err(err) = assembly.add_component(type_path, name, &parent) {
            log::error!("sample project: {}", err);
        }
    }
    if let Err(err) = assembly.connect(&top, "driver", "paraboloid") {
        log::error!("sample project: {}", err);
    }
    assembly
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_project_builds_cleanly() {
        let assembly = sample_project();
        assert_eq!(assembly.component_count(), 4);
        let dataflow = assembly.dataflow(&Pathname::new("top")).unwrap();
        assert_eq!(dataflow.components.len(), 3);
        assert_eq!(dataflow.connections.len(), 1);
        assert!(assembly.node(&Pathname::new("top.sub")).unwrap().container);
    }
}
