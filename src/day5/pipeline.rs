use itertools::Itertools;
use std::iter::zip;
use tracing::debug;

use super::rule::{Interval, RuleTable};

/// Stage names in the order a seed passes through them.
pub const STAGES: [&str; 7] = [
    "seed-to-soil", "soil-to-fertilizer", "fertilizer-to-water", "water-to-light",
    "light-to-temperature", "temperature-to-humidity", "humidity-to-location",
];

/// The two readings of the `seeds:` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSpec {
    Discrete(Vec<u64>),
    Ranges(Vec<Interval>),
}

/// Seven rule tables applied in [`STAGES`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    tables: [RuleTable; 7],
}

impl Pipeline {
    pub fn new(tables: [RuleTable; 7]) -> Self {Pipeline {tables}}

    pub fn tables(&self) -> &[RuleTable; 7] {&self.tables}

    pub fn run(&self, seed: u64) -> u64 {
        self.tables.iter().fold(seed, |v, table| table.map_value(v))
    }

    /// Pushes a whole set of intervals through every stage at once. The result
    /// is sorted by start, with overlapping or touching intervals merged.
    pub fn run_intervals(&self, seeds: impl IntoIterator<Item = Interval>) -> Vec<Interval> {
        let mut current = normalize(seeds.into_iter().filter(|iv| !iv.is_empty()).collect());
        let mut next = Vec::with_capacity(current.len());
        for (stage, table) in zip(STAGES, &self.tables) {
            next.clear();
            for &iv in &current {
                table.map_interval_into(iv, &mut next);
            }
            debug!(stage, pieces = next.len(), "mapped intervals");
            current = normalize(std::mem::take(&mut next));
        }
        current
    }

    /// 0 for an empty seed list.
    pub fn min_over_discrete_seeds(&self, seeds: &[u64]) -> u64 {
        seeds.iter().map(|&seed| self.run(seed)).min().unwrap_or(0)
    }

    /// 0 when no range holds any seed.
    pub fn min_over_seed_ranges(&self, ranges: &[Interval]) -> u64 {
        self.run_intervals(ranges.iter().copied()).iter().map(|iv| iv.start).min().unwrap_or(0)
    }

    pub fn min_location(&self, seeds: &SeedSpec) -> u64 {
        match seeds {
            SeedSpec::Discrete(seeds) => self.min_over_discrete_seeds(seeds),
            SeedSpec::Ranges(ranges) => self.min_over_seed_ranges(ranges),
        }
    }
}

fn normalize(mut ivs: Vec<Interval>) -> Vec<Interval> {
    ivs.sort_unstable();
    ivs.into_iter().coalesce(|a, b| {
        if b.start <= a.end() {
            Ok(Interval {start: a.start, length: a.end().max(b.end()) - a.start})
        } else {Err((a, b))}
    }).collect()
}
