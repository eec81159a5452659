pub mod locator;

pub use locator::{derive_key, locate_sources, SourceFile};
