//! Word scores and player score keeping.
//!
//! Word length: < 3: 0 points
//!              3-6: 1 point per character
//!              7-9: 2 points per character
//!              10+: 3 points per character
//!

use log::debug;

/// Words shorter than this are worth nothing.
pub const MIN_SCORING_LENGTH: usize = 3;
/// Shortest word earning 2 points per character.
pub const DOUBLE_SCORE_LENGTH: usize = 7;
/// Shortest word earning 3 points per character.
pub const TRIPLE_SCORE_LENGTH: usize = 10;

/// A player's name together with their running score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerInfo {
    pub name: String,
    pub score: u32,
}

impl PlayerInfo {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self { name: name.into(), score }
    }
}

/// Return the point value `word` earns, based on its length in characters.
///
/// ```
/// assert_eq!(fd_wordsearch::word_score("DRUDGERY"), 16);
/// ```
pub fn word_score(word: &str) -> u32 {
    let len = word.chars().count();
    let per_char = match len {
        0..MIN_SCORING_LENGTH => 0,
        MIN_SCORING_LENGTH..DOUBLE_SCORE_LENGTH => 1,
        DOUBLE_SCORE_LENGTH..TRIPLE_SCORE_LENGTH => 2,
        _ => 3,
    };
    u32::try_from(len).unwrap_or(u32::MAX).saturating_mul(per_char)
}

/// Add the point value of `word` to the player's score.
///
/// The score saturates at `u32::MAX` instead of wrapping.
pub fn update_score(player_info: &mut PlayerInfo, word: &str) {
    let points = word_score(word);
    player_info.score = player_info.score.saturating_add(points);
    debug!("{} scores {points} for {word} (total {}).", player_info.name, player_info.score);
}
