//! Plain-text render surface
//!
//! The surface the `identify` session uses: writes each requested view to
//! stdout as simple aligned text. Mark glyphs follow the three clue
//! buttons: `?` unknown, `+` present, `-` absent. Dead clues are
//! parenthesized.

use std::io::{self, Write};

use crate::controller::SessionError;
use crate::selection::ClueMark;

use super::surface::{CluePanel, RenderSurface, SuspectDetail, SuspectTable};

/// Renders views as plain text on stdout
#[derive(Debug, Default)]
pub struct TextSurface;

impl TextSurface {
    /// Create a stdout text surface
    pub fn new() -> Self {
        Self
    }

    fn write(&self, text: &str) {
        // Rendering must never fail the session
        let mut stdout = io::stdout();
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }
}

fn mark_glyph(mark: ClueMark) -> char {
    match mark {
        ClueMark::Unknown => '?',
        ClueMark::Present => '+',
        ClueMark::Absent => '-',
    }
}

impl RenderSurface for TextSurface {
    fn show_version(&mut self, version: &str) {
        self.write(&format!("catalog version: {}\n", version));
    }

    fn show_clue_panel(&mut self, panel: &CluePanel) {
        let mut out = String::from("clues:\n");
        for (index, row) in panel.rows.iter().enumerate() {
            let name = if row.live {
                row.name.clone()
            } else {
                format!("({})", row.name)
            };
            out.push_str(&format!(
                "  {:>2}. [{}] {}\n",
                index + 1,
                mark_glyph(row.mark),
                name
            ));
        }
        self.write(&out);
    }

    fn show_suspect_table(&mut self, table: &SuspectTable) {
        let mut out = String::from("suspects:\n");
        for (index, row) in table.rows.iter().enumerate() {
            let marker = if row.found { "=> " } else { "" };
            out.push_str(&format!("  {:>2}. {}{}", index + 1, marker, row.name));
            if !row.clue_cells.is_empty() {
                out.push_str(&format!("  [{}]", row.clue_cells.join(", ")));
            }
            out.push('\n');
        }
        self.write(&out);
    }

    fn show_detail(&mut self, detail: &SuspectDetail) {
        self.write(&format!("--- {} ---\n{}\n", detail.name, detail.details));
    }

    fn clear_detail(&mut self, placeholder: &str) {
        self.write(&format!("{}\n", placeholder));
    }

    fn show_no_match(&mut self, message: &str) {
        self.write(&format!("suspects:\n  ! {}\n", message));
    }

    fn show_load_failure(&mut self, error: &SessionError) {
        self.write(&format!("catalog load failed: {}\n", error));
    }
}
