//! Foundation types shared by every layer: source locations, interned
//! file paths, and path normalization.

mod location;
mod path_utils;

pub use location::Location;
pub use path_utils::{FilePath, normalize_path};
