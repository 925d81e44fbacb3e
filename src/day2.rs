use regex::Regex;
use rustc_hash::FxHashMap;

use crate::error::{parse_num, AocError};

// red, green, blue, the order `maxima` uses
const STOCK: [u32; 3] = [12, 13, 14];

/// Largest count of each colour drawn in any round, per game id.
/// A repeated game id keeps its first line.
fn parse_games(input: &str) -> Result<FxHashMap<u32, [u32; 3]>, AocError> {
    let game_re = Regex::new(r"^Game (\d+):(.*)$").unwrap();
    let draw_re = Regex::new(r"(\d+) (red|green|blue)").unwrap();
    let mut games = FxHashMap::default();
    for line in input.trim().lines() {
        let Some(game) = game_re.captures(line.trim()) else {
            return Err(AocError::malformed(line, "expected `Game <id>: ...`"))
        };
        let mut maxima = [0u32; 3];
        for draw in draw_re.captures_iter(&game[2]) {
            let color = match &draw[2] {"red" => 0, "green" => 1, "blue" => 2, _ => unreachable!()};
            maxima[color] = maxima[color].max(parse_num(&draw[1])?);
        }
        games.entry(parse_num(&game[1])?).or_insert(maxima);
    }
    Ok(games)
}

pub fn day2(part: u8, input: &str) -> Result<String, AocError> {
    let games = parse_games(input)?;
    Ok(if part == 1 {
        games.iter()
            .filter(|(_, maxima)| maxima.iter().zip(STOCK).all(|(&seen, stock)| seen <= stock))
            .map(|(&id, _)| id as u64)
            .sum::<u64>().to_string()
    } else {
        // a colour that never shows up counts as 1 so the product stays meaningful
        games.values()
            .map(|maxima| maxima.iter().map(|&n| n.max(1) as u64).product::<u64>())
            .sum::<u64>().to_string()
    })
}
