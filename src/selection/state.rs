//! Clue selection state
//!
//! A mapping from every known clue key to its tri-state mark. The domain
//! is always exactly the clue key set of the currently installed catalog:
//! it is re-initialized to all-Unknown whenever a catalog is installed,
//! and mutated only through the operations below.
//!
//! Every mutation returns the mark now in effect, or `None` when the key
//! is outside the domain (a lookup miss; callers log and ignore).

use std::collections::BTreeMap;

use super::mark::ClueMark;

/// The full set of user-asserted clue marks at a point in time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    marks: BTreeMap<String, ClueMark>,
}

impl SelectionState {
    /// An empty state with no domain (no catalog installed yet)
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-initialize the domain to the given clue keys, all Unknown.
    /// Called whenever a catalog is installed.
    pub fn reset_to<I, K>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.marks = keys
            .into_iter()
            .map(|k| (k.into(), ClueMark::Unknown))
            .collect();
    }

    /// Set the mark to Unknown unconditionally
    pub fn mark_unknown(&mut self, key: &str) -> Option<ClueMark> {
        self.set(key, |_| ClueMark::Unknown)
    }

    /// Set Present; pressing again from Present clears back to Unknown
    pub fn mark_present(&mut self, key: &str) -> Option<ClueMark> {
        self.set(key, |current| match current {
            ClueMark::Present => ClueMark::Unknown,
            _ => ClueMark::Present,
        })
    }

    /// Set Absent; pressing again from Absent clears back to Unknown
    pub fn mark_absent(&mut self, key: &str) -> Option<ClueMark> {
        self.set(key, |current| match current {
            ClueMark::Absent => ClueMark::Unknown,
            _ => ClueMark::Absent,
        })
    }

    /// Advance the three-cycle Unknown, Present, Absent, Unknown
    pub fn cycle(&mut self, key: &str) -> Option<ClueMark> {
        self.set(key, ClueMark::cycled)
    }

    /// Reset every mark to Unknown, keeping the domain
    pub fn clear_all(&mut self) {
        for mark in self.marks.values_mut() {
            *mark = ClueMark::Unknown;
        }
    }

    fn set(&mut self, key: &str, next: impl FnOnce(ClueMark) -> ClueMark) -> Option<ClueMark> {
        let mark = self.marks.get_mut(key)?;
        *mark = next(*mark);
        Some(*mark)
    }

    /// The mark for a clue key; `None` when the key is outside the domain
    pub fn mark(&self, key: &str) -> Option<ClueMark> {
        self.marks.get(key).copied()
    }

    /// True when the user has explicitly marked this clue Present or Absent
    pub fn is_decided(&self, key: &str) -> bool {
        self.mark(key).is_some_and(ClueMark::is_decided)
    }

    /// (present, absent) counts, for logging
    pub fn decided_counts(&self) -> (usize, usize) {
        let present = self
            .marks
            .values()
            .filter(|m| **m == ClueMark::Present)
            .count();
        let absent = self
            .marks
            .values()
            .filter(|m| **m == ClueMark::Absent)
            .count();
        (present, absent)
    }

    /// Iterate (clue key, mark) in stable key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, ClueMark)> {
        self.marks.iter().map(|(k, m)| (k.as_str(), *m))
    }

    /// A full copy of the current state. Matching always recomputes from a
    /// complete snapshot, never from a delta.
    pub fn snapshot(&self) -> SelectionState {
        self.clone()
    }

    /// Number of clue keys in the domain
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// True when no catalog domain has been installed
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> SelectionState {
        let mut s = SelectionState::new();
        s.reset_to(["c1", "c2", "c3"]);
        s
    }

    #[test]
    fn test_reset_initializes_all_unknown() {
        let s = state();
        assert_eq!(s.len(), 3);
        for (_, mark) in s.iter() {
            assert_eq!(mark, ClueMark::Unknown);
        }
    }

    #[test]
    fn test_mark_present_toggles_back_on_double_press() {
        let mut s = state();
        assert_eq!(s.mark_present("c1"), Some(ClueMark::Present));
        assert_eq!(s.mark_present("c1"), Some(ClueMark::Unknown));
    }

    #[test]
    fn test_mark_absent_toggles_back_on_double_press() {
        let mut s = state();
        assert_eq!(s.mark_absent("c1"), Some(ClueMark::Absent));
        assert_eq!(s.mark_absent("c1"), Some(ClueMark::Unknown));
    }

    #[test]
    fn test_mark_present_overrides_absent() {
        let mut s = state();
        s.mark_absent("c1");
        assert_eq!(s.mark_present("c1"), Some(ClueMark::Present));
    }

    #[test]
    fn test_mark_unknown_is_unconditional() {
        let mut s = state();
        s.mark_present("c1");
        assert_eq!(s.mark_unknown("c1"), Some(ClueMark::Unknown));
        assert_eq!(s.mark_unknown("c1"), Some(ClueMark::Unknown));
    }

    #[test]
    fn test_cycle_sequence() {
        let mut s = state();
        assert_eq!(s.cycle("c1"), Some(ClueMark::Present));
        assert_eq!(s.cycle("c1"), Some(ClueMark::Absent));
        assert_eq!(s.cycle("c1"), Some(ClueMark::Unknown));
    }

    #[test]
    fn test_clear_all_keeps_domain() {
        let mut s = state();
        s.mark_present("c1");
        s.mark_absent("c2");
        s.clear_all();
        assert_eq!(s.len(), 3);
        assert_eq!(s.mark("c1"), Some(ClueMark::Unknown));
        assert_eq!(s.mark("c2"), Some(ClueMark::Unknown));
    }

    #[test]
    fn test_unknown_key_is_a_miss() {
        let mut s = state();
        assert_eq!(s.mark_present("nope"), None);
        assert_eq!(s.mark("nope"), None);
        assert!(!s.is_decided("nope"));
    }

    #[test]
    fn test_reset_replaces_domain() {
        let mut s = state();
        s.mark_present("c1");
        s.reset_to(["d1", "d2"]);
        assert_eq!(s.len(), 2);
        assert_eq!(s.mark("c1"), None);
        assert_eq!(s.mark("d1"), Some(ClueMark::Unknown));
    }

    #[test]
    fn test_decided_counts() {
        let mut s = state();
        s.mark_present("c1");
        s.mark_absent("c2");
        assert_eq!(s.decided_counts(), (1, 1));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut s = state();
        let snap = s.snapshot();
        s.mark_present("c1");
        assert_eq!(snap.mark("c1"), Some(ClueMark::Unknown));
    }
}
