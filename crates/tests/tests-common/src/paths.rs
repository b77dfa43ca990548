//! Paths of files shared across test cases.

use std::path::PathBuf;

/// Find a path relative to the repository root.
/// This depends on this crate living in `/crates/tests/tests-common`.
pub fn get_repository_path(relative_path: &str) -> PathBuf {
    let mut d = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    d.push("../../../");
    d.push(relative_path);
    d
}

/// The directory of a sample configuration under `static/`.
pub fn get_static_configuration_dir(name: &str) -> PathBuf {
    get_repository_path("static").join(name)
}
