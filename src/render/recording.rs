//! Recording render surface
//!
//! Records every render request instead of drawing anything. Controller
//! scenario tests assert against the recorded calls.

use crate::controller::SessionError;

use super::surface::{CluePanel, RenderSurface, SuspectDetail, SuspectTable};

/// One recorded render request
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    /// `show_version`
    Version(String),
    /// `show_clue_panel`
    CluePanel(CluePanel),
    /// `show_suspect_table`
    SuspectTable(SuspectTable),
    /// `show_detail`
    Detail(SuspectDetail),
    /// `clear_detail`
    ClearDetail(String),
    /// `show_no_match`
    NoMatch(String),
    /// `show_load_failure`
    LoadFailure(String),
}

/// A render surface that records calls for inspection
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<RenderCall>,
}

impl RecordingSurface {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, in order
    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    /// Forget everything recorded so far
    pub fn reset(&mut self) {
        self.calls.clear();
    }

    /// The most recent suspect table, if any was rendered
    pub fn last_table(&self) -> Option<&SuspectTable> {
        self.calls.iter().rev().find_map(|c| match c {
            RenderCall::SuspectTable(table) => Some(table),
            _ => None,
        })
    }

    /// The most recent clue panel, if any was rendered
    pub fn last_panel(&self) -> Option<&CluePanel> {
        self.calls.iter().rev().find_map(|c| match c {
            RenderCall::CluePanel(panel) => Some(panel),
            _ => None,
        })
    }

    /// The most recent detail panel, if any was rendered
    pub fn last_detail(&self) -> Option<&SuspectDetail> {
        self.calls.iter().rev().find_map(|c| match c {
            RenderCall::Detail(detail) => Some(detail),
            _ => None,
        })
    }

    /// Every no-match message rendered, in order
    pub fn no_match_messages(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                RenderCall::NoMatch(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every load-failure message rendered, in order
    pub fn load_failures(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                RenderCall::LoadFailure(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// How many times a detail panel was shown
    pub fn detail_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, RenderCall::Detail(_)))
            .count()
    }
}

impl RenderSurface for RecordingSurface {
    fn show_version(&mut self, version: &str) {
        self.calls.push(RenderCall::Version(version.to_string()));
    }

    fn show_clue_panel(&mut self, panel: &CluePanel) {
        self.calls.push(RenderCall::CluePanel(panel.clone()));
    }

    fn show_suspect_table(&mut self, table: &SuspectTable) {
        self.calls.push(RenderCall::SuspectTable(table.clone()));
    }

    fn show_detail(&mut self, detail: &SuspectDetail) {
        self.calls.push(RenderCall::Detail(detail.clone()));
    }

    fn clear_detail(&mut self, placeholder: &str) {
        self.calls
            .push(RenderCall::ClearDetail(placeholder.to_string()));
    }

    fn show_no_match(&mut self, message: &str) {
        self.calls.push(RenderCall::NoMatch(message.to_string()));
    }

    fn show_load_failure(&mut self, error: &SessionError) {
        self.calls.push(RenderCall::LoadFailure(error.to_string()));
    }
}
