//! Artifact emitters

mod file_emitter;
pub mod render;

pub use file_emitter::FileGraphEmitter;
pub use render::{ArtifactRenderer, JsonRenderer, TextRenderer, renderer_for};
