use std::collections::HashMap;

use protocol::PlayerScore;

use crate::consts::*;

/// Points for a correct guess, given how many players already guessed this round.
pub fn guess_points(already_correct: usize) -> u32 {
    if already_correct == 0 {
        FIRST_GUESS_POINTS
    } else {
        GUESS_POINTS
    }
}

/// Score table snapshot in roster order.
pub fn snapshot(roster: &[String], scores: &HashMap<String, u32>) -> Vec<PlayerScore> {
    roster
        .iter()
        .filter_map(|name| {
            scores.get(name).map(|&score| PlayerScore { name: name.clone(), score })
        })
        .collect()
}

/// Sorted by score, highest first. Ties keep roster order.
pub fn rankings(roster: &[String], scores: &HashMap<String, u32>) -> Vec<PlayerScore> {
    let mut ranked = snapshot(roster, scores);
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

pub fn ranking_summary(ranked: &[PlayerScore]) -> String {
    let mut summary = String::from("The game is over.\n\n======= Rankings =======\n");
    for (i, entry) in ranked.iter().enumerate() {
        summary.push_str(&format!("{}. {} ({} points)\n", i + 1, entry.name, entry.score));
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, u32)]) -> (Vec<String>, HashMap<String, u32>) {
        let roster = entries.iter().map(|(n, _)| n.to_string()).collect();
        let scores = entries.iter().map(|(n, s)| (n.to_string(), *s)).collect();
        (roster, scores)
    }

    #[test]
    fn first_guess_is_worth_more() {
        assert_eq!(guess_points(0), 15);
        assert_eq!(guess_points(1), 10);
        assert_eq!(guess_points(5), 10);
    }

    #[test]
    fn ties_keep_roster_order() {
        let (roster, scores) = table(&[("User1", 10), ("User2", 25), ("User3", 10), ("User4", 25)]);
        let names: Vec<_> = rankings(&roster, &scores).into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["User2", "User4", "User1", "User3"]);
    }

    #[test]
    fn summary_lists_every_rank() {
        let (roster, scores) = table(&[("User1", 0), ("User2", 15)]);
        let summary = ranking_summary(&rankings(&roster, &scores));
        assert!(summary.contains("1. User2 (15 points)"));
        assert!(summary.contains("2. User1 (0 points)"));
    }
}
