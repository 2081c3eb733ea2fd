//! React call detection: the builtin-call predicate, its named wrappers,
//! and the file-level scanner.

pub mod builtin_call;
pub mod module_name;
pub mod scan;

pub use builtin_call::{
    is_react_builtin_call, is_react_children_element_call, is_react_clone_element_call,
    is_react_create_class_call, is_react_create_element_call, is_react_forward_ref_call,
};
pub use module_name::is_react_module_name;
pub use scan::{ReactCallKind, ReactCallMatch, ReactCallScanner};
