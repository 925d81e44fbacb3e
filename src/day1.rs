use crate::error::AocError;

const WORDS: [&str; 9] = ["one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];

// spelled digits may share letters ("eightwo"), so every offset is a candidate start
fn digit_at(line: &str, at: usize, spelled: bool) -> Option<u32> {
    let rest = &line[at ..];
    let first = *rest.as_bytes().first()?;
    if first.is_ascii_digit() {return Some((first - b'0') as u32)}
    if !spelled {return None}
    WORDS.iter().position(|word| rest.starts_with(word)).map(|ix| ix as u32 + 1)
}

pub fn day1(part: u8, input: &str) -> Result<String, AocError> {
    let spelled = part > 1;
    input.trim().lines().map(|line| {
        let offsets = line.char_indices().map(|(at, _)| at);
        let first = offsets.clone().find_map(|at| digit_at(line, at, spelled));
        let last = offsets.rev().find_map(|at| digit_at(line, at, spelled));
        match (first, last) {
            (Some(first), Some(last)) => Ok(10 * first + last),
            _ => Err(AocError::malformed(line, "no digit on line")),
        }
    }).sum::<Result<u32, _>>().map(|sum| sum.to_string())
}
