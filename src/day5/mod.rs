//! Seed almanac: seven chained range maps and the lowest location they reach.

mod pipeline;
mod rule;

pub use pipeline::{Pipeline, SeedSpec, STAGES};
pub use rule::{Interval, Rule, RuleTable};

use itertools::Itertools;
use std::iter::zip;
use std::str::FromStr;
use tracing::debug;

use crate::error::{parse_num, AocError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Almanac {
    pub seeds: Vec<u64>,
    pub pipeline: Pipeline,
}

impl Almanac {
    /// Part 1 reads every number as a seed, part 2 reads `(start, length)` pairs.
    /// A trailing unpaired number is dropped.
    pub fn seed_spec(&self, part: u8) -> Result<SeedSpec, AocError> {
        if part == 1 {return Ok(SeedSpec::Discrete(self.seeds.clone()))}
        self.seeds.iter().copied().tuples().map(|(start, length)|
            Interval::new(start, length).ok_or_else(||
                AocError::malformed(&format!("{} {}", start, length), "seed range end overflows u64")
            )
        ).collect::<Result<_, _>>().map(SeedSpec::Ranges)
    }
}

impl FromStr for Almanac {
    type Err = AocError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut lines = input.trim().lines().map(str::trim);
        let seeds = lines.next()
            .and_then(|line| line.strip_prefix("seeds:"))
            .ok_or(AocError::MissingSection("seeds"))?
            .split_whitespace()
            .map(parse_num)
            .collect::<Result<Vec<u64>, _>>()?;

        let mut tables: [RuleTable; 7] = Default::default();
        for (stage, table) in zip(STAGES, &mut tables) {
            let header = lines.by_ref().find(|line| !line.is_empty());
            if header.and_then(|h| h.strip_prefix(stage)).map(str::trim) != Some("map:") {
                return Err(AocError::MissingSection(stage));
            }
            let rules = lines.by_ref()
                .take_while(|line| !line.is_empty())
                .map(parse_rule)
                .collect::<Result<Vec<_>, _>>()?;
            debug!(stage, rules = rules.len(), "parsed map");
            *table = RuleTable::new(rules);
        }

        if let Some(extra) = lines.find(|line| !line.is_empty()) {
            return Err(AocError::malformed(extra, "unexpected line after the last map"));
        }
        Ok(Almanac {seeds, pipeline: Pipeline::new(tables)})
    }
}

fn parse_rule(line: &str) -> Result<Rule, AocError> {
    let [dest, src, len] = line.split_whitespace().collect::<Vec<_>>()[..] else {
        return Err(AocError::malformed(line, "expected destination, source and length"))
    };
    Rule::new(parse_num(dest)?, parse_num(src)?, parse_num(len)?)
        .ok_or_else(|| AocError::malformed(line, "range end overflows u64"))
}

pub fn day5(part: u8, input: &str) -> Result<String, AocError> {
    let almanac: Almanac = input.parse()?;
    let seeds = almanac.seed_spec(part)?;
    Ok(almanac.pipeline.min_location(&seeds).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

    #[test]
    fn sample_part1() {
        assert_eq!(day5(1, SAMPLE).unwrap(), "35");
    }

    #[test]
    fn sample_part2() {
        assert_eq!(day5(2, SAMPLE).unwrap(), "46");
    }

    #[test]
    fn sample_seed_locations() {
        let almanac: Almanac = SAMPLE.parse().unwrap();
        let locations = [79, 14, 55, 13].map(|seed| almanac.pipeline.run(seed));
        assert_eq!(locations, [82, 43, 86, 35]);
    }

    #[test]
    fn parses_every_stage() {
        let almanac: Almanac = SAMPLE.parse().unwrap();
        assert_eq!(almanac.seeds, vec![79, 14, 55, 13]);
        let sizes = almanac.pipeline.tables().iter().map(|t| t.rules().len()).collect::<Vec<_>>();
        assert_eq!(sizes, vec![2, 3, 4, 2, 3, 2, 2]);
        assert_eq!(almanac.pipeline.tables()[0].rules()[0], Rule::new(50, 98, 2).unwrap());
    }

    #[test]
    fn odd_seed_count_drops_the_last() {
        let almanac = Almanac {seeds: vec![1, 2, 3], pipeline: Pipeline::default()};
        assert_eq!(almanac.seed_spec(2).unwrap(), SeedSpec::Ranges(vec![Interval::new(1, 2).unwrap()]));
    }

    #[test]
    fn empty_seed_line_gives_zero() {
        let input = SAMPLE.replacen("seeds: 79 14 55 13", "seeds:", 1);
        assert_eq!(day5(1, &input).unwrap(), "0");
        assert_eq!(day5(2, &input).unwrap(), "0");
    }

    #[test]
    fn bad_number_is_a_parse_error() {
        let input = SAMPLE.replacen("52 50 48", "52 5x 48", 1);
        assert!(matches!(day5(1, &input), Err(AocError::ParseInt {token, ..}) if token == "5x"));
    }

    #[test]
    fn short_rule_is_malformed() {
        let input = SAMPLE.replacen("52 50 48", "52 50", 1);
        assert!(matches!(day5(1, &input), Err(AocError::Malformed {..})));
    }

    #[test]
    fn missing_stage_is_reported() {
        let input = SAMPLE.replacen("water-to-light map:", "water-to-lamp map:", 1);
        assert!(matches!(day5(1, &input), Err(AocError::MissingSection("water-to-light"))));
        let cut = &SAMPLE[.. SAMPLE.find("humidity-to-location").unwrap()];
        assert!(matches!(day5(1, cut), Err(AocError::MissingSection("humidity-to-location"))));
    }

    #[test]
    fn overflowing_seed_range_is_malformed() {
        let lone = SAMPLE.replacen("79 14 55 13", "18446744073709551615", 1);
        assert_eq!(day5(1, &lone).unwrap(), "18446744073709551615");
        let input = SAMPLE.replacen("79 14 55 13", "18446744073709551615 2", 1);
        // seed 2 lands on location 24
        assert_eq!(day5(1, &input).unwrap(), "24");
        assert!(matches!(day5(2, &input), Err(AocError::Malformed {..})));
    }
}
