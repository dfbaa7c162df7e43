pub mod assembler;
pub mod progress;
pub mod render;

pub use assembler::{assemble, LookupOutcome};
pub use progress::ProgressTracker;
pub use render::{render_json, render_text};
