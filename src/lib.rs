pub mod day1;
pub mod day2;
pub mod day4;
pub mod day5;
pub mod day6;
mod error;

pub use error::AocError;

/// Takes the part (1 or 2) and the whole puzzle input, returns the answer.
pub type Solver = fn(u8, &str) -> Result<String, AocError>;

const DAYS: [Option<Solver>; 6] = [
    Some(day1::day1), Some(day2::day2), None, Some(day4::day4), Some(day5::day5), Some(day6::day6)
];

pub fn solver(day: u8) -> Result<Solver, AocError> {
    (day as usize).checked_sub(1)
        .and_then(|ix| DAYS.get(ix).copied().flatten())
        .ok_or(AocError::UnknownDay(day))
}
