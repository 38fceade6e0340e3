//! Row/cell description builders
//!
//! Builders assemble the abstract panel and table descriptions one row at
//! a time, decoupled from any rendering technology.

use crate::selection::ClueMark;

use super::surface::{ClueRow, CluePanel, SuspectRow, SuspectTable};

/// Builds the ordered clue panel
#[derive(Debug, Default)]
pub struct CluePanelBuilder {
    rows: Vec<ClueRow>,
}

impl CluePanelBuilder {
    /// Start an empty panel
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one clue row
    pub fn row(
        &mut self,
        key: impl Into<String>,
        name: impl Into<String>,
        mark: ClueMark,
        live: bool,
    ) -> &mut Self {
        self.rows.push(ClueRow {
            key: key.into(),
            name: name.into(),
            mark,
            live,
        });
        self
    }

    /// Finalize the panel
    pub fn finish(self) -> CluePanel {
        CluePanel { rows: self.rows }
    }
}

/// Builds the suspect table
#[derive(Debug, Default)]
pub struct SuspectTableBuilder {
    rows: Vec<SuspectRow>,
}

impl SuspectTableBuilder {
    /// Start an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new suspect row
    pub fn row(&mut self, key: impl Into<String>, name: impl Into<String>) -> &mut Self {
        self.rows.push(SuspectRow {
            key: key.into(),
            name: name.into(),
            found: false,
            clue_cells: Vec::new(),
        });
        self
    }

    /// Mark the current row as the single remaining suspect
    pub fn mark_found(&mut self) -> &mut Self {
        if let Some(row) = self.rows.last_mut() {
            row.found = true;
        }
        self
    }

    /// Append a clue cell to the current row
    pub fn clue_cell(&mut self, name: impl Into<String>) -> &mut Self {
        if let Some(row) = self.rows.last_mut() {
            row.clue_cells.push(name.into());
        }
        self
    }

    /// Finalize the table
    pub fn finish(self) -> SuspectTable {
        SuspectTable { rows: self.rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clue_panel_builder_preserves_order() {
        let mut builder = CluePanelBuilder::new();
        builder.row("c1", "One", ClueMark::Unknown, true);
        builder.row("c2", "Two", ClueMark::Present, false);
        let panel = builder.finish();

        assert_eq!(panel.rows.len(), 2);
        assert_eq!(panel.rows[0].key, "c1");
        assert_eq!(panel.rows[1].mark, ClueMark::Present);
        assert!(!panel.rows[1].live);
    }

    #[test]
    fn test_suspect_table_builder_cells_attach_to_current_row() {
        let mut builder = SuspectTableBuilder::new();
        builder.row("s1", "First");
        builder.clue_cell("a");
        builder.clue_cell("b");
        builder.row("s2", "Second");
        builder.mark_found();
        let table = builder.finish();

        assert_eq!(table.rows[0].clue_cells, vec!["a", "b"]);
        assert!(table.rows[0].clue_cells.len() == 2);
        assert!(!table.rows[0].found);
        assert!(table.rows[1].found);
        assert!(table.rows[1].clue_cells.is_empty());
    }

    #[test]
    fn test_cell_on_empty_table_is_ignored() {
        let mut builder = SuspectTableBuilder::new();
        builder.clue_cell("orphan");
        builder.mark_found();
        assert!(builder.finish().rows.is_empty());
    }
}
