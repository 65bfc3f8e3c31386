pub mod deadline;
pub mod status_registry;
