//! Path helpers used while resolving asset declarations.
//!
//! `posix` holds the lexical path arithmetic shared by every coordinate space (workspace,
//! project and source roots), and `containment` decides whether a resolved asset path sits
//! inside the project's source root.

mod containment;
pub mod posix;

pub use containment::ContainmentCheck;
