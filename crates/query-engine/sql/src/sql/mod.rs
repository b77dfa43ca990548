//! Document-store SQL: the AST, helpers to build it, and its rendering to a string.

pub mod ast;
pub mod convert;
pub mod helpers;
pub mod string;
