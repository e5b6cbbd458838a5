//! End-of-game commentary lines keyed on final score.
//!
//! Pure lookup: three score buckets with five lines each. Selection within a
//! bucket is either fixed (first line) or drawn from a caller-supplied RNG.

use crate::game_state::GameState;
use crate::rng::SimpleRng;

/// Score thresholds for the commentary buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBucket {
    /// score < 1000
    Low,
    /// 1000 <= score < 5000
    Medium,
    /// score >= 5000
    High,
}

const LOW: [&str; 5] = [
    "Was that a practice round? Go again and prove it!",
    "Just warming up? The real skills have not shown up yet.",
    "Chin up. Every block-stacking master started out as a beginner.",
    "Sure the keyboard was working properly?",
    "Failure is the mother of success. Keep going!",
];

const MEDIUM: [&str; 5] = [
    "Not bad at all, there is real skill here. Keep pushing!",
    "A solid, steady run, but you can do better than that.",
    "Ahead of most players already. Keep it up!",
    "Careful and consistent. Aim higher next time!",
    "Clear progress. Expert level is only a little further on.",
];

const HIGH: [&str; 5] = [
    "Outstanding! A true legend of the falling blocks!",
    "That timing, that vision... simply superhuman.",
    "Suspiciously good. No proof of cheating, though.",
    "Bowing down to the master.",
    "That score belongs on a leaderboard. Absolute pro!",
];

/// Bucket for a final score
pub fn bucket(score: u32) -> ScoreBucket {
    if score < 1000 {
        ScoreBucket::Low
    } else if score < 5000 {
        ScoreBucket::Medium
    } else {
        ScoreBucket::High
    }
}

/// All lines for a bucket
pub fn lines(bucket: ScoreBucket) -> &'static [&'static str] {
    match bucket {
        ScoreBucket::Low => &LOW,
        ScoreBucket::Medium => &MEDIUM,
        ScoreBucket::High => &HIGH,
    }
}

/// Fixed line for a score (first of its bucket)
pub fn line_for(score: u32) -> &'static str {
    lines(bucket(score))[0]
}

/// Random line from the score's bucket
pub fn pick(score: u32, rng: &mut SimpleRng) -> &'static str {
    let options = lines(bucket(score));
    options[rng.next_range(options.len() as u32) as usize]
}

/// Commentary for a finished game; nothing for a scoreless one
pub fn for_game(state: &GameState, rng: &mut SimpleRng) -> Option<&'static str> {
    if state.score == 0 {
        return None;
    }
    Some(pick(state.score, rng))
}
