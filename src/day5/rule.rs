/// Half-open range `[start, start + length)`. The end always fits in a `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    pub start: u64,
    pub length: u64,
}

impl Interval {
    pub fn new(start: u64, length: u64) -> Option<Self> {
        start.checked_add(length).map(|_| Interval {start, length})
    }

    pub fn end(&self) -> u64 {self.start + self.length}

    pub fn is_empty(&self) -> bool {self.length == 0}

    pub fn contains(&self, v: u64) -> bool {(self.start .. self.end()).contains(&v)}
}

/// One line of an almanac map: `length` values starting at `source_start`
/// move to the same number of values starting at `destination_start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    destination_start: u64,
    source_start: u64,
    length: u64,
}

impl Rule {
    /// `None` when either range would run past `u64::MAX`.
    pub fn new(destination_start: u64, source_start: u64, length: u64) -> Option<Self> {
        source_start.checked_add(length)?;
        destination_start.checked_add(length)?;
        Some(Rule {destination_start, source_start, length})
    }

    pub fn destination_start(&self) -> u64 {self.destination_start}
    pub fn source_start(&self) -> u64 {self.source_start}
    pub fn length(&self) -> u64 {self.length}
    pub fn source_end(&self) -> u64 {self.source_start + self.length}

    pub fn contains(&self, v: u64) -> bool {(self.source_start .. self.source_end()).contains(&v)}

    // caller guarantees `self.contains(v)`
    fn shift(&self, v: u64) -> u64 {self.destination_start + (v - self.source_start)}
}

/// The rules of one stage, kept in input order. When source ranges overlap
/// the rule listed first wins, for single values and intervals alike.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Self {RuleTable {rules}}

    pub fn rules(&self) -> &[Rule] {&self.rules}

    /// Values outside every rule pass through unchanged.
    pub fn map_value(&self, v: u64) -> u64 {
        self.rules.iter().find(|rule| rule.contains(v)).map_or(v, |rule| rule.shift(v))
    }

    /// Image of `iv` as disjoint intervals whose lengths sum to `iv.length`.
    ///
    /// The input is cut wherever the governing rule changes, so the work done
    /// depends on the number of rules and pieces, never on the interval length.
    pub fn map_interval(&self, iv: Interval) -> Vec<Interval> {
        let mut out = Vec::new();
        self.map_interval_into(iv, &mut out);
        out
    }

    pub(crate) fn map_interval_into(&self, iv: Interval, out: &mut Vec<Interval>) {
        let end = iv.end();
        let mut pos = iv.start;
        while pos < end {
            let hit = self.rules.iter().position(|rule| rule.contains(pos));
            // only rules listed before the hit can take over further along;
            // with no hit, the next rule start of any kind ends the gap
            let cut = self.rules[.. hit.unwrap_or(self.rules.len())].iter()
                .filter(|rule| rule.length > 0 && rule.source_start > pos)
                .map(|rule| rule.source_start)
                .fold(end, u64::min);
            match hit {
                Some(ix) => {
                    let rule = &self.rules[ix];
                    let chunk_end = cut.min(rule.source_end());
                    out.push(Interval {start: rule.shift(pos), length: chunk_end - pos});
                    pos = chunk_end;
                }
                None => {
                    out.push(Interval {start: pos, length: cut - pos});
                    pos = cut;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn table(rules: &[(u64, u64, u64)]) -> RuleTable {
        RuleTable::new(rules.iter().map(|&(d, s, l)| Rule::new(d, s, l).unwrap()).collect())
    }

    fn iv(start: u64, length: u64) -> Interval {Interval::new(start, length).unwrap()}

    #[test]
    fn single_rule_shifts_and_falls_back() {
        let t = table(&[(50, 98, 2)]);
        assert_eq!(t.map_value(98), 50);
        assert_eq!(t.map_value(99), 51);
        assert_eq!(t.map_value(79), 79);
        assert_eq!(t.map_value(100), 100);
    }

    #[test]
    fn empty_table_is_identity() {
        let t = RuleTable::default();
        assert_eq!(t.map_value(12345), 12345);
        assert_eq!(t.map_interval(iv(7, 1_000_000_000)), vec![iv(7, 1_000_000_000)]);
    }

    #[test]
    fn first_listed_rule_wins_on_overlap() {
        let t = table(&[(1000, 10, 5), (2000, 0, 100)]);
        assert_eq!(t.map_value(12), 1002);
        assert_eq!(t.map_value(9), 2009);
        assert_eq!(t.map_value(15), 2015);
        assert_eq!(
            t.map_interval(iv(5, 15)),
            vec![iv(2005, 5), iv(1000, 5), iv(2015, 5)]
        );
    }

    #[test]
    fn interval_straddling_rules_and_gaps() {
        let t = table(&[(50, 98, 2), (52, 50, 48)]);
        // 40..50 unmapped, 50..98 shifted by +2, 98..100 to 50..52, 100..110 unmapped
        assert_eq!(
            t.map_interval(iv(40, 70)),
            vec![iv(40, 10), iv(52, 48), iv(50, 2), iv(100, 10)]
        );
    }

    #[test]
    fn huge_interval_splits_into_few_pieces() {
        let t = table(&[(0, 1 << 40, 1 << 20)]);
        let pieces = t.map_interval(iv(0, 1 << 50));
        assert_eq!(pieces, vec![iv(0, 1 << 40), iv(0, 1 << 20), iv((1 << 40) + (1 << 20), (1 << 50) - (1 << 40) - (1 << 20))]);
    }

    #[test]
    fn rejects_overflowing_ranges() {
        assert!(Rule::new(0, u64::MAX, 2).is_none());
        assert!(Rule::new(u64::MAX, 0, 2).is_none());
        assert!(Rule::new(0, u64::MAX - 1, 1).is_some());
        assert!(Interval::new(u64::MAX, 1).is_none());
    }

    fn arb_table() -> impl Strategy<Value = RuleTable> {
        prop::collection::vec((0u64 .. 200, 0u64 .. 200, 0u64 .. 40), 0 .. 6)
            .prop_map(|rules| table(&rules))
    }

    proptest! {
        #[test]
        fn interval_image_matches_pointwise(t in arb_table(), start in 0u64 .. 250, length in 0u64 .. 60) {
            let pieces = t.map_interval(iv(start, length));
            prop_assert_eq!(pieces.iter().map(|p| p.length).sum::<u64>(), length);
            prop_assert!(pieces.iter().all(|p| !p.is_empty()));
            let mapped: Vec<u64> = pieces.iter().flat_map(|p| p.start .. p.end()).collect();
            let expected: Vec<u64> = (start .. start + length).map(|v| t.map_value(v)).collect();
            prop_assert_eq!(mapped, expected);
        }

        #[test]
        fn uncovered_values_are_fixed(t in arb_table(), v in 0u64 .. 400) {
            if !t.rules().iter().any(|rule| rule.contains(v)) {
                prop_assert_eq!(t.map_value(v), v);
            }
        }
    }
}
