//! Backward binding resolution: expression → originating value → module.
//!
//! Two pure functions over the immutable tree, plus the `Importer` context
//! that lets them hop across file boundaries. The importer is always an
//! explicit parameter; there is no ambient resolution state anywhere.

pub mod importer;
pub mod module;
pub mod value;

pub use importer::{IgnoreImporter, Importer, ModuleMap};
pub use module::resolve_to_module;
pub use value::resolve_to_value;
