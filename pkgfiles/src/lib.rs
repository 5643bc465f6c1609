mod errors;
mod files_group;
mod traverse;

pub mod fixtures;
pub mod frameworks;
pub mod import;
pub mod nodes;
pub mod path;

pub use errors::Error;
pub use files_group::{FileMatch, FilesGroup};
