//! Extraction into a staging directory and relocation to the destination.

pub mod engine;
pub mod relocate;

pub use engine::ExtractionEngine;
pub use engine::StagedArchive;
pub use relocate::relocate;
