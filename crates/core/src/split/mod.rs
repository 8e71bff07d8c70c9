//! Splitting a document into a main page plus one page per `## ` section.

pub mod assembler;
pub mod splitter;

pub use assembler::{
    DEFAULT_RELATED_HEADING, OutputFile, QMD_EXTENSION, SplitOptions, SplitPlan, plan_split,
    write_plan,
};
pub use splitter::{Section, SplitBody, split};
