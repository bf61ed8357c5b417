// Items in this module (and submodules) are only used in test code,
// so we disable the unused_imports warning.

mod temp_cwd;

#[allow(unused_imports)]
pub(crate) use temp_cwd::TempCwd;

mod strategies;

#[allow(unused_imports)]
pub(crate) use strategies::{any_kind, any_payload};

mod temp_repo;

#[allow(unused_imports)]
pub(crate) use temp_repo::TempRepo;
