// Dependency structures for cdeps.
// Per-file candidate call sets and the cross-file frequency table derived from them.

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Distinct candidate call names found in one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallSet {
    names: BTreeSet<String>,
}

impl CallSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in ascending lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl FromIterator<String> for CallSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for CallSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

/// Filename -> CallSet for a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyMap {
    files: BTreeMap<String, CallSet>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file's calls. A filename seen twice keeps the later set
    /// and hands back the one it replaced.
    pub fn insert(&mut self, filename: String, calls: CallSet) -> Option<CallSet> {
        self.files.insert(filename, calls)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Entries in ascending filename order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CallSet)> {
        self.files.iter().map(|(name, calls)| (name.as_str(), calls))
    }

    /// Entries with at least one call, in ascending filename order.
    pub fn non_empty(&self) -> impl Iterator<Item = (&str, &CallSet)> {
        self.iter().filter(|(_, calls)| !calls.is_empty())
    }

    /// Count, for every name, how many files' sets contain it.
    pub fn frequencies(&self) -> CallFrequencyTable {
        self.files.values().fold(CallFrequencyTable::default(), |mut table, calls| {
            table.add_set(calls);
            table
        })
    }
}

impl FromIterator<(String, CallSet)> for DependencyMap {
    fn from_iter<I: IntoIterator<Item = (String, CallSet)>>(iter: I) -> Self {
        let mut map = DependencyMap::new();
        for (filename, calls) in iter {
            map.insert(filename, calls);
        }
        map
    }
}

/// One row of the ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCall {
    pub name: String,
    pub count: usize,
}

/// Candidate name -> number of files that call it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallFrequencyTable {
    counts: HashMap<String, usize>,
}

impl CallFrequencyTable {
    /// Count each member of `calls` once.
    pub fn add_set(&mut self, calls: &CallSet) {
        for name in calls.iter() {
            *self.counts.entry(name.to_string()).or_insert(0) += 1;
        }
    }

    pub fn count(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// The `limit` most called names: count descending, then name ascending.
    pub fn top(&self, limit: usize) -> Vec<RankedCall> {
        let mut ranked: Vec<RankedCall> = self
            .counts
            .iter()
            .map(|(name, &count)| RankedCall {
                name: name.clone(),
                count,
            })
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
        ranked.truncate(limit);
        ranked
    }
}
