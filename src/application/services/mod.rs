//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (WordStore, FileSystem)
//! but are themselves concrete structs, not traits.

mod dictionary;
mod visualizer;

pub use dictionary::DictionaryService;
pub use visualizer::{EdgeSnapshot, LayoutSnapshot, NodeSnapshot, VisualizerService};
