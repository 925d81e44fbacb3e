use rustc_hash::FxHashSet;

use crate::error::{parse_num, AocError};

/// Number of own numbers that are also winning numbers, per card in input order.
fn match_counts(input: &str) -> Result<Vec<usize>, AocError> {
    input.trim().lines().map(|line| {
        let Some((_, numbers)) = line.split_once(':') else {
            return Err(AocError::malformed(line, "expected `Card <id>: ...`"))
        };
        let Some((winning, have)) = numbers.split_once('|') else {
            return Err(AocError::malformed(line, "expected `|` between number lists"))
        };
        let winning_set = winning.split_whitespace()
            .map(parse_num::<u64>)
            .collect::<Result<FxHashSet<_>, _>>()?;
        have.split_whitespace().map(parse_num::<u64>).try_fold(0, |count, n|
            n.map(|n| count + winning_set.contains(&n) as usize)
        )
    }).collect()
}

pub fn day4(part: u8, input: &str) -> Result<String, AocError> {
    let matches = match_counts(input)?;
    if part == 1 {
        return matches.iter().enumerate().filter(|&(_, &m)| m > 0).try_fold(0u64, |total, (ci, &m)|
            u32::try_from(m - 1).ok()
                .and_then(|shift| 1u64.checked_shl(shift))
                .and_then(|points| total.checked_add(points))
                .ok_or_else(|| AocError::malformed(&format!("card {}", ci + 1), "points overflow u64"))
        ).map(|total| total.to_string());
    }
    let mut copies = vec![1u64; matches.len()];
    for (ci, &m) in matches.iter().enumerate() {
        let won = copies[ci];
        for later in copies.iter_mut().skip(ci + 1).take(m) {
            *later += won;
        }
    }
    Ok(copies.iter().sum::<u64>().to_string())
}
