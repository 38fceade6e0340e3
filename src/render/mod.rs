//! Render subsystem for cluedex
//!
//! The core produces abstract row/cell descriptions and requests views
//! through the `RenderSurface` trait; what draws them is a collaborator.
//! Two surfaces ship with the crate: a plain-text one for the interactive
//! session and a recording one for tests.

mod recording;
mod surface;
mod table;
mod text;

pub use recording::{RecordingSurface, RenderCall};
pub use surface::{CluePanel, ClueRow, RenderSurface, SuspectDetail, SuspectRow, SuspectTable};
pub use table::{CluePanelBuilder, SuspectTableBuilder};
pub use text::TextSurface;
