//! AST navigation: the `NodePath` handle and the structural shape matcher.

pub mod path;
pub mod shape;

pub use path::NodePath;
pub use shape::Shape;
