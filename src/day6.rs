use itertools::Itertools;

use crate::error::{parse_num, AocError};

/// Hold times `h` in `0 ..= time` that travel further than `record`,
/// i.e. `h * (time - h) > record`.
///
/// The float root only seeds the search; the exact bound is settled with
/// integer arithmetic so records landing exactly on a root are not counted.
pub fn ways_to_win(time: u64, record: u64) -> u64 {
    let beats = |h: u64| h as u128 * (time - h) as u128 > record as u128;
    let half = time / 2;
    if !beats(half) {return 0}
    let disc = (time as f64).powi(2) - 4.0 * record as f64;
    let mut lo = ((time as f64 - disc.max(0.0).sqrt()) / 2.0).floor().clamp(0.0, half as f64) as u64;
    while lo > 0 && beats(lo - 1) {lo -= 1}
    while !beats(lo) {lo += 1}
    // beats(0) never holds, so lo >= 1 and this cannot overflow
    time - 2 * lo + 1
}

fn line_values<'a>(input: &'a str, label: &'static str) -> Result<impl Iterator<Item = &'a str>, AocError> {
    input.lines()
        .find_map(|line| line.trim().strip_prefix(label))
        .map(str::split_whitespace)
        .ok_or(AocError::MissingSection(label))
}

pub fn day6(part: u8, input: &str) -> Result<String, AocError> {
    let times = line_values(input, "Time:")?;
    let records = line_values(input, "Distance:")?;
    if part == 1 {
        let times = times.map(parse_num).collect::<Result<Vec<u64>, _>>()?;
        let records = records.map(parse_num).collect::<Result<Vec<u64>, _>>()?;
        if times.len() != records.len() {
            return Err(AocError::malformed(input.trim(), "times and distances differ in count"));
        }
        Ok(times.into_iter().zip_eq(records).map(|(t, d)| ways_to_win(t, d)).product::<u64>().to_string())
    } else {
        // kerning: the digits of each line form one number
        let time = parse_num(&times.collect::<String>())?;
        let record = parse_num(&records.collect::<String>())?;
        Ok(ways_to_win(time, record).to_string())
    }
}
