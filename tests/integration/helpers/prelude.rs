pub use super::arg_builder::{binary, ArgBuilder};
pub use super::project::Project;
pub use super::project_builder::{tempdir, write_config};
pub use assert_cmd::prelude::*;
pub use predicates::prelude::*;
