//! Render surface contract
//!
//! The core never touches a rendering technology. It builds abstract
//! row/cell descriptions and hands them to a `RenderSurface`; the surface
//! owes the controller the symmetric callbacks (the controller's public
//! toggle, select, and locale methods). Localized text arrives already
//! resolved; a missing value is already a definite placeholder by the
//! time it reaches the surface.

use crate::controller::SessionError;
use crate::selection::ClueMark;

/// One row of the clue panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueRow {
    /// Stable clue key
    pub key: String,
    /// Resolved localized name
    pub name: String,
    /// The user's current mark for this clue
    pub mark: ClueMark,
    /// False when no remaining suspect exhibits this clue; rendered dimmed
    pub live: bool,
}

/// The ordered clue panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CluePanel {
    /// Rows in catalog display order
    pub rows: Vec<ClueRow>,
}

/// One row of the suspect table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspectRow {
    /// Stable suspect key
    pub key: String,
    /// Resolved localized name
    pub name: String,
    /// True when this is the single remaining suspect
    pub found: bool,
    /// Resolved names of the clues still shown on this row. Clues the
    /// user already decided are elided; a single-match row shows none.
    pub clue_cells: Vec<String>,
}

/// The suspect table for the current view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuspectTable {
    /// Rows in catalog display order
    pub rows: Vec<SuspectRow>,
}

/// One suspect's detail panel content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspectDetail {
    /// Stable suspect key
    pub key: String,
    /// Resolved localized name
    pub name: String,
    /// Resolved localized details (rich text)
    pub details: String,
}

/// The rendering collaborator the controller drives
pub trait RenderSurface {
    /// Present the catalog's version label
    fn show_version(&mut self, version: &str);

    /// Present the ordered clue panel with marks and liveness
    fn show_clue_panel(&mut self, panel: &CluePanel);

    /// Present the suspect table for the current view
    fn show_suspect_table(&mut self, table: &SuspectTable);

    /// Present one suspect's detail panel
    fn show_detail(&mut self, detail: &SuspectDetail);

    /// Clear the detail panel back to a placeholder
    fn clear_detail(&mut self, placeholder: &str);

    /// Present the "no consistent suspect" condition (informational)
    fn show_no_match(&mut self, message: &str);

    /// Present a catalog load failure
    fn show_load_failure(&mut self, error: &SessionError);
}
