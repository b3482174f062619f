//! Group tag extraction
//!
//! Comments carry group lists as `Groups : [code]<I>a, b</I>[/code]` or
//! `Group Names : [code]<I>a</I>[/code]`. The tag format is matched exactly.

use crate::models::GroupTally;
use crate::utils::logging::truncate_text;
use regex::Regex;

const GROUP_TAG_PATTERN: &str = r"(?:Groups|Group Names) : \[code\]<I>(.*?)</I>\[/code\]";

/// Counts group names found in free-text cells
pub struct GroupTallyService {
    tag: Regex,
}

impl GroupTallyService {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            tag: Regex::new(GROUP_TAG_PATTERN)?,
        })
    }

    /// Group names in one cell, in order, duplicates kept
    pub fn extract_groups(&self, text: &str) -> Vec<String> {
        self.tag
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .flat_map(|list| list.as_str().split(','))
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Tally every cell; cells without a tag add nothing
    pub fn tally_cells<I, S>(&self, cells: I) -> GroupTally
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tally = GroupTally::new();
        let mut tagged_cells = 0usize;

        for cell in cells {
            let text = cell.as_ref();
            let groups = self.extract_groups(text);
            if groups.is_empty() {
                tracing::trace!("no group tag in '{}'", truncate_text(text, 60));
            } else {
                tagged_cells += 1;
            }
            for group in &groups {
                tally.add(group);
            }
        }

        tracing::debug!(
            "{} cells carried group tags, {} distinct groups",
            tagged_cells,
            tally.len()
        );
        tally
    }
}
