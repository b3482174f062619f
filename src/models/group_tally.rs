use serde::Deserialize;
use std::collections::HashMap;

/// Row order of the group report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportOrder {
    /// Order in which each group was first seen
    #[default]
    FirstSeen,
    /// Highest count first, ties broken by name
    ByCount,
}

/// One row of the group report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub name: String,
    pub count: usize,
}

/// Running occurrence counts per group name
#[derive(Debug, Clone, Default)]
pub struct GroupTally {
    counts: HashMap<String, usize>,
    first_seen: Vec<String>,
}

impl GroupTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str) {
        match self.counts.get_mut(name) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(name.to_string(), 1);
                self.first_seen.push(name.to_string());
            }
        }
    }

    pub fn count(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Number of distinct groups
    pub fn len(&self) -> usize {
        self.first_seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first_seen.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn report(&self, order: ReportOrder) -> Vec<GroupCount> {
        let mut rows: Vec<GroupCount> = self
            .first_seen
            .iter()
            .map(|name| GroupCount {
                name: name.clone(),
                count: self.counts[name],
            })
            .collect();

        if order == ReportOrder::ByCount {
            rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
        }
        rows
    }
}
