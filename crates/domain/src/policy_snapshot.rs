//! Immutable egress policy snapshot and the suffix matcher run against it.
//!
//! A snapshot maps an allowed DNS suffix to the workload addresses that may
//! reach whatever that suffix resolves to. Entries are kept sorted longest
//! suffix first (ties broken lexicographically) so that when several suffixes
//! match one name the most specific entry always wins.

use crate::admission::AdmissionRequest;
use crate::config::AdmissionMode;
use crate::resolution::ResolutionEvent;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Address sanity check: exactly three `.` separators.
#[inline]
pub fn is_dotted_quad(address: &str) -> bool {
    address.bytes().filter(|&b| b == b'.').count() == 3
}

/// Case-sensitive suffix match on a label boundary.
///
/// One trailing `.` on `name` is ignored, so `"example.com."` matches
/// `"example.com"` while `"notexample.com"` does not.
pub fn suffix_matches(name: &str, suffix: &str) -> bool {
    if suffix.is_empty() {
        return false;
    }
    let name = name.strip_suffix('.').unwrap_or(name);
    match name.strip_suffix(suffix) {
        Some("") => true,
        Some(head) => head.ends_with('.'),
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyEntry {
    pub suffix: Arc<str>,
    pub sources: Vec<Arc<str>>,
}

impl PolicyEntry {
    /// Authorized sources that pass the dotted-quad check, in list order.
    pub fn valid_sources(&self) -> impl Iterator<Item = &Arc<str>> {
        self.sources.iter().filter(|s| is_dotted_quad(s))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicySnapshot {
    entries: Vec<PolicyEntry>,
}

impl PolicySnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a snapshot from `(suffix, sources)` pairs.
    ///
    /// A single trailing `.` is stripped from each suffix; pairs that end up
    /// sharing a suffix have their source lists concatenated. Empty suffixes
    /// are dropped.
    pub fn from_entries<I, S, A>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<A>)>,
        S: AsRef<str>,
        A: AsRef<str>,
    {
        let mut merged: FxHashMap<Arc<str>, Vec<Arc<str>>> = FxHashMap::default();
        for (suffix, sources) in entries {
            let suffix = suffix.as_ref();
            let suffix = suffix.strip_suffix('.').unwrap_or(suffix);
            if suffix.is_empty() {
                continue;
            }
            merged
                .entry(Arc::from(suffix))
                .or_default()
                .extend(sources.iter().map(|s| Arc::from(s.as_ref())));
        }

        let mut entries: Vec<PolicyEntry> = merged
            .into_iter()
            .map(|(suffix, sources)| PolicyEntry { suffix, sources })
            .collect();
        entries.sort_by(|a, b| {
            b.suffix
                .len()
                .cmp(&a.suffix.len())
                .then_with(|| a.suffix.cmp(&b.suffix))
        });

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PolicyEntry] {
        &self.entries
    }

    pub fn get(&self, suffix: &str) -> Option<&PolicyEntry> {
        self.entries.iter().find(|e| e.suffix.as_ref() == suffix)
    }

    pub fn total_sources(&self) -> usize {
        self.entries.iter().map(|e| e.sources.len()).sum()
    }

    /// Entries whose suffix matches `name`, most specific first.
    pub fn matching_entries<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a PolicyEntry> + 'a {
        self.entries
            .iter()
            .filter(move |e| suffix_matches(name, &e.suffix))
    }

    /// Admission requests triggered by `event`.
    ///
    /// The first matching entry holding at least one dotted-quad source is
    /// used; entries whose sources are all malformed are passed over. In
    /// [`AdmissionMode::FirstSource`] only its first valid source is admitted,
    /// so at most one request comes back per event.
    pub fn admissions(&self, event: &ResolutionEvent, mode: AdmissionMode) -> Vec<AdmissionRequest> {
        if !event.is_admissible() {
            return Vec::new();
        }

        let limit = match mode {
            AdmissionMode::FirstSource => 1,
            AdmissionMode::AllSources => usize::MAX,
        };

        for entry in self.matching_entries(&event.name) {
            let requests: Vec<AdmissionRequest> = entry
                .valid_sources()
                .take(limit)
                .map(|source| AdmissionRequest::new(Arc::clone(source), Arc::clone(&event.address)))
                .collect();
            if !requests.is_empty() {
                return requests;
            }
        }

        Vec::new()
    }
}
