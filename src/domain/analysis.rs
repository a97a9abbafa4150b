// Result of one analysis run.

use crate::domain::dependency::{CallFrequencyTable, DependencyMap};

/// The DependencyMap together with the frequency table derived from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyAnalysis {
    pub dependencies: DependencyMap,
    pub frequencies: CallFrequencyTable,
}

impl DependencyAnalysis {
    pub fn from_dependencies(dependencies: DependencyMap) -> Self {
        let frequencies = dependencies.frequencies();
        Self {
            dependencies,
            frequencies,
        }
    }

    pub fn files_scanned(&self) -> usize {
        self.dependencies.len()
    }

    pub fn files_with_calls(&self) -> usize {
        self.dependencies.non_empty().count()
    }
}
