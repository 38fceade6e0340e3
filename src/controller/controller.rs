//! Session controller
//!
//! The single point that re-synchronizes the render surface with model
//! state. Every mutation funnels into one recomputation path: take a full
//! selection snapshot, recompute the matched set, pick the view for the
//! match count, re-render the clue panel against the new matched set.
//! Each recomputation is pure from catalog plus selection, so a failed
//! one is strictly superseded by the next; nothing is retried.
//!
//! Single logical thread: `&mut self` serializes every operation,
//! including reloads, so the latest installed catalog wins.

use uuid::Uuid;

use crate::catalog::{Catalog, Clue, Suspect};
use crate::config::SessionConfig;
use crate::fetch::CatalogSource;
use crate::locale::{resolve, LocalePreferences};
use crate::matcher::{live_clues, match_suspects};
use crate::observability::{Event, Logger};
use crate::render::{CluePanelBuilder, RenderSurface, SuspectDetail, SuspectTableBuilder};
use crate::selection::{ClueMark, SelectionState};

use super::errors::{SessionError, SessionResult};
use super::phase::ViewPhase;

/// Orchestrates one deduction session over injected collaborators
pub struct Controller<S: CatalogSource, R: RenderSurface> {
    source: S,
    surface: R,
    config: SessionConfig,
    prefs: LocalePreferences,
    session_id: Uuid,
    catalog: Option<Catalog>,
    selection: SelectionState,
    phase: ViewPhase,
}

impl<S: CatalogSource, R: RenderSurface> Controller<S, R> {
    /// Create a controller with environment-derived locale preferences
    pub fn new(source: S, surface: R, config: SessionConfig) -> Self {
        Self::with_preferences(source, surface, config, LocalePreferences::from_env())
    }

    /// Create a controller with explicit locale preferences
    pub fn with_preferences(
        source: S,
        surface: R,
        config: SessionConfig,
        mut prefs: LocalePreferences,
    ) -> Self {
        if let Some(ref tag) = config.locale_override {
            prefs.set_override(tag.clone());
        }
        Self {
            source,
            surface,
            config,
            prefs,
            session_id: Uuid::new_v4(),
            catalog: None,
            selection: SelectionState::new(),
            phase: ViewPhase::Loading,
        }
    }

    /// Fetch, parse, and install the catalog wholesale, then render the
    /// initial listing. On failure nothing is installed, the phase stays
    /// as it was, and the failure is rendered.
    pub async fn load(&mut self) -> SessionResult<()> {
        let url = self.config.catalog_url.clone();
        self.log(Event::CatalogFetchStart, &[("url", &url)]);

        let raw = match self.source.fetch(&url).await {
            Ok(raw) => raw,
            Err(e) => return Err(self.fail_load(e.into())),
        };
        self.log(
            Event::CatalogFetchComplete,
            &[("url", &url), ("bytes", &raw.len().to_string())],
        );

        let catalog = match Catalog::parse(&raw) {
            Ok(catalog) => catalog,
            Err(e) => return Err(self.fail_load(e.into())),
        };
        self.log(
            Event::CatalogParsed,
            &[
                ("clues", &catalog.clue_count().to_string()),
                ("suspects", &catalog.suspect_count().to_string()),
            ],
        );

        // Install wholesale; the selection domain follows the catalog
        self.selection.reset_to(catalog.clue_keys());
        self.log(
            Event::CatalogInstalled,
            &[
                ("version", &catalog.version()),
                ("loaded_at", &catalog.loaded_at().to_rfc3339()),
            ],
        );
        self.surface.show_version(&catalog.version());
        self.catalog = Some(catalog);

        let placeholder = self.config.detail_placeholder.clone();
        self.surface.clear_detail(&placeholder);
        self.resync();
        Ok(())
    }

    /// Reload on user demand; the latest successful load wins
    pub async fn reload(&mut self) -> SessionResult<()> {
        self.load().await
    }

    fn fail_load(&mut self, error: SessionError) -> SessionError {
        Logger::error(
            Event::CatalogFetchFailed.as_str(),
            &[
                ("session_id", &self.session_id.to_string()),
                ("reason", &error.to_string()),
            ],
        );
        self.surface.show_load_failure(&error);
        error
    }

    /// Set a clue back to unknown
    pub fn mark_unknown(&mut self, key: &str) {
        self.apply_mark(key, SelectionState::mark_unknown);
    }

    /// Mark a clue present; a second press clears it back to unknown
    pub fn mark_present(&mut self, key: &str) {
        self.apply_mark(key, SelectionState::mark_present);
    }

    /// Mark a clue absent; a second press clears it back to unknown
    pub fn mark_absent(&mut self, key: &str) {
        self.apply_mark(key, SelectionState::mark_absent);
    }

    /// Advance a clue through unknown, present, absent
    pub fn cycle_mark(&mut self, key: &str) {
        self.apply_mark(key, SelectionState::cycle);
    }

    fn apply_mark(
        &mut self,
        key: &str,
        op: fn(&mut SelectionState, &str) -> Option<ClueMark>,
    ) {
        if self.catalog.is_none() {
            // Toggling before data exists is undefined; guard and ignore
            self.warn_not_loaded("clue_toggle");
            return;
        }
        match op(&mut self.selection, key) {
            Some(mark) => {
                self.log(
                    Event::SelectionChanged,
                    &[("clue", key), ("mark", mark.as_str())],
                );
                self.resync();
            }
            None => self.warn_lookup_miss("clue", key),
        }
    }

    /// Reset every clue to unknown
    pub fn clear_marks(&mut self) {
        if self.catalog.is_none() {
            self.warn_not_loaded("clear_marks");
            return;
        }
        self.selection.clear_all();
        self.log(Event::SelectionCleared, &[]);
        self.resync();
    }

    /// Render one suspect's detail, independent of the match count
    pub fn select_suspect(&mut self, key: &str) {
        let Some(ref catalog) = self.catalog else {
            self.warn_not_loaded("select_suspect");
            return;
        };
        match catalog.suspect_by_key(key) {
            Some(suspect) => self.render_detail(&suspect),
            None => self.warn_lookup_miss("suspect", key),
        }
    }

    /// Replace or clear the single locale override, then re-render every
    /// localized surface for the current phase. The match set and the
    /// selection are untouched.
    pub fn set_locale_override(&mut self, tag: Option<String>) {
        match tag {
            Some(tag) => self.prefs.set_override(tag),
            None => self.prefs.clear_override(),
        }
        let active = self.prefs.override_tag().unwrap_or("(environment)").to_string();
        self.log(Event::LocaleChanged, &[("locale", &active)]);

        if let Some(ref catalog) = self.catalog {
            self.surface.show_version(&catalog.version());
            self.resync();
        }
    }

    /// The one recomputation path: full snapshot in, rendered views out
    fn resync(&mut self) {
        let (suspects, clues) = match self.catalog {
            Some(ref catalog) => (catalog.all_suspects(), catalog.all_clues()),
            None => return,
        };
        let snapshot = self.selection.snapshot();
        let matched = match_suspects(&suspects, &snapshot);
        let (present, absent) = snapshot.decided_counts();
        self.log(
            Event::MatchComputed,
            &[
                ("matched", &matched.len().to_string()),
                ("present", &present.to_string()),
                ("absent", &absent.to_string()),
            ],
        );

        match matched.len() {
            // An empty match is only a contradiction once a clue is
            // decided; a suspect-less catalog lists as an empty table.
            0 if present + absent > 0 => {
                self.phase = ViewPhase::NoMatch;
                // The last shown detail stays; the user will relax a clue
                let message = self.config.no_match_message.clone();
                self.surface.show_no_match(&message);
            }
            1 => {
                let found = matched[0].clone();
                self.phase = ViewPhase::SingleMatch {
                    key: found.key.clone(),
                };
                let mut builder = SuspectTableBuilder::new();
                builder.row(&found.key, self.suspect_name(&found));
                builder.mark_found();
                let table = builder.finish();
                self.surface.show_suspect_table(&table);
                self.render_detail(&found);
            }
            count => {
                self.phase = if present + absent == 0 {
                    ViewPhase::Listing
                } else {
                    ViewPhase::Filtering { count }
                };
                let placeholder = self.config.detail_placeholder.clone();
                self.surface.clear_detail(&placeholder);
                let table = self.build_suspect_table(&matched, &clues);
                self.surface.show_suspect_table(&table);
            }
        }

        // The clue panel always reflects the new matched set; on a
        // no-match every clue renders dead.
        let panel = self.build_clue_panel(&clues, &matched);
        self.surface.show_clue_panel(&panel);
    }

    /// Table rows show each suspect's clues minus the ones the user has
    /// already decided; in the all-unknown listing nothing is decided, so
    /// every clue shows.
    fn build_suspect_table(
        &self,
        matched: &[&Suspect],
        clues: &[Clue],
    ) -> crate::render::SuspectTable {
        let mut builder = SuspectTableBuilder::new();
        for suspect in matched {
            builder.row(&suspect.key, self.suspect_name(suspect));
            for clue_key in &suspect.clues {
                if self.selection.is_decided(clue_key) {
                    continue;
                }
                match clues.iter().find(|c| &c.key == clue_key) {
                    Some(clue) => {
                        let name = resolve(clue, "name", &self.prefs, &self.config.default_locale)
                            .unwrap_or("")
                            .to_string();
                        builder.clue_cell(name);
                    }
                    // Dangling reference: omit the cell
                    None => self.warn_lookup_miss("clue", clue_key),
                }
            }
        }
        builder.finish()
    }

    fn build_clue_panel(&self, clues: &[Clue], matched: &[&Suspect]) -> crate::render::CluePanel {
        let live = live_clues(matched);
        let mut builder = CluePanelBuilder::new();
        for clue in clues {
            let name = resolve(clue, "name", &self.prefs, &self.config.default_locale)
                .unwrap_or("")
                .to_string();
            let mark = self.selection.mark(&clue.key).unwrap_or_default();
            builder.row(&clue.key, name, mark, live.contains(&clue.key));
        }
        builder.finish()
    }

    fn render_detail(&mut self, suspect: &Suspect) {
        let name = self.suspect_name(suspect);
        let details = resolve(suspect, "details", &self.prefs, &self.config.default_locale)
            .unwrap_or("")
            .to_string();
        self.surface.show_detail(&SuspectDetail {
            key: suspect.key.clone(),
            name,
            details,
        });
        self.log(Event::DetailShown, &[("suspect", &suspect.key)]);
    }

    fn suspect_name(&self, suspect: &Suspect) -> String {
        resolve(suspect, "name", &self.prefs, &self.config.default_locale)
            .unwrap_or("")
            .to_string()
    }

    fn warn_not_loaded(&self, operation: &str) {
        Logger::warn(
            "OPERATION_BEFORE_LOAD",
            &[
                ("session_id", &self.session_id.to_string()),
                ("operation", operation),
            ],
        );
    }

    fn warn_lookup_miss(&self, kind: &str, key: &str) {
        Logger::warn(
            Event::LookupMiss.as_str(),
            &[
                ("session_id", &self.session_id.to_string()),
                ("kind", kind),
                ("key", key),
            ],
        );
    }

    fn log(&self, event: Event, fields: &[(&str, &str)]) {
        let session_id = self.session_id.to_string();
        let mut all: Vec<(&str, &str)> = Vec::with_capacity(fields.len() + 1);
        all.push(("session_id", &session_id));
        all.extend_from_slice(fields);
        Logger::info(event.as_str(), &all);
    }

    /// The view the controller last requested
    pub fn phase(&self) -> &ViewPhase {
        &self.phase
    }

    /// The installed catalog, if the first load has succeeded
    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// The current selection state
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The active locale preferences
    pub fn preferences(&self) -> &LocalePreferences {
        &self.prefs
    }

    /// The session configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// This session's id, stamped on every log line
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// The render surface (tests inspect recorded calls through this)
    pub fn surface(&self) -> &R {
        &self.surface
    }

    /// Mutable access to the render surface
    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }
}
