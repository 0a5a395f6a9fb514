// crates/split_file/src/lib.rs

//! Splits a `.split` file into the files named by its `// FILE:` markers.

pub mod config;
pub mod splitter;

pub use config::SplitConfig;
pub use splitter::{
    plan_outputs, split_file, strip_split_extension, write_output, OutputFile, PlannedWrite,
    SplitReport,
};
