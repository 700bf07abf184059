//! The canonical document model.
//!
//! Every conversion passes through [`Document`]: readers build one from
//! external bytes, writers render one into an external representation.

mod block;
mod builder;
mod document;

pub use block::{Block, Paragraph, Run};
pub use builder::{DocumentBuilder, Edit};
pub use document::Document;
