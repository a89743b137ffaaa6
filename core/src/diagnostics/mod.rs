pub mod source_map;

pub use source_map::{SourceMap, SourcePos};
