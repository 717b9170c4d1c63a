use std::collections::HashSet;
use std::path::Path;

use rand::Rng;
use tokio::time::Duration;

use protocol::Lexicon;

use crate::consts::*;
use crate::error::{RoomError, RoomResult};

pub struct Config {
    pub host: String,
    pub port: u16,
    pub max_turns: u32,
    pub round_secs: u32,
    pub tick: Duration,
    pub heartbeat: Duration,
    pub words: WordPool,
    pub seed: Option<u64>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_turns: MAX_TURNS,
            round_secs: ROUND_SECS,
            tick: TICK_DURATION,
            heartbeat: HB_DURATION,
            words: WordPool::builtin(),
            seed: None,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed catalog of secret words, deduplicated, never empty.
#[derive(Debug, Clone)]
pub struct WordPool(Vec<String>);

impl WordPool {
    pub fn new<I, S>(words: I) -> RoomResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty() && seen.insert(w.clone()))
            .collect();
        if words.is_empty() {
            return Err(RoomError::EmptyWordPool);
        }
        Ok(Self(words))
    }

    pub fn builtin() -> Self {
        Self(WORDS.iter().map(|w| w.to_string()).collect())
    }

    pub fn from_lexicon_file(path: impl AsRef<Path>) -> RoomResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| RoomError::LexiconRead {
            path: path.display().to_string(),
            source,
        })?;
        let lexicon: Lexicon =
            serde_json::from_str(&text).map_err(|source| RoomError::LexiconParse {
                path: path.display().to_string(),
                source,
            })?;
        Self::new(lexicon.lexicon)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn words(&self) -> &[String] {
        &self.0
    }

    /// Samples uniformly, rejecting words already in `used`, then records the pick.
    /// `used` is cleared once it covers the whole pool, so words repeat only across cycles.
    pub(crate) fn draw(&self, used: &mut HashSet<String>, rng: &mut impl Rng) -> String {
        let word = loop {
            let candidate = &self.0[rng.gen_range(0..self.0.len())];
            if !used.contains(candidate) {
                break candidate.clone();
            }
        };
        used.insert(word.clone());
        if used.len() == self.0.len() {
            used.clear();
        }
        word
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn builtin_pool_has_forty_distinct_words() {
        let pool = WordPool::builtin();
        assert_eq!(pool.len(), 40);
        let distinct: HashSet<_> = pool.words().iter().collect();
        assert_eq!(distinct.len(), 40);
    }

    #[test]
    fn duplicates_and_blanks_are_dropped() {
        let pool = WordPool::new(["apple", " apple ", "", "tree"]).unwrap();
        assert_eq!(pool.words(), &["apple".to_string(), "tree".to_string()]);
    }

    #[test]
    fn empty_pool_is_rejected() {
        assert!(matches!(WordPool::new(Vec::<String>::new()), Err(RoomError::EmptyWordPool)));
        assert!(matches!(WordPool::new(["  "]), Err(RoomError::EmptyWordPool)));
    }

    #[test]
    fn no_repeat_within_a_cycle() {
        let pool = WordPool::new(["a", "b", "c", "d"]).unwrap();
        let mut used = HashSet::new();
        let mut rng = StdRng::seed_from_u64(7);
        let mut cycle = HashSet::new();
        for i in 0..4 {
            assert!(cycle.insert(pool.draw(&mut used, &mut rng)));
            if i < 3 {
                assert_eq!(used.len(), i + 1);
            }
        }
        assert!(used.is_empty());
    }

    #[test]
    fn missing_lexicon_file() {
        let res = WordPool::from_lexicon_file("/definitely/not/here.json");
        assert!(matches!(res, Err(RoomError::LexiconRead { .. })));
    }

    #[test]
    fn lexicon_file() {
        let path = std::env::temp_dir().join(format!("room-lexicon-{}.json", std::process::id()));
        let doc = r#"{"name": "fruit", "lexicon": ["grape", "apple", "grape"]}"#;
        std::fs::write(&path, doc).unwrap();
        let pool = WordPool::from_lexicon_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn broken_lexicon_file() {
        let path =
            std::env::temp_dir().join(format!("room-lexicon-bad-{}.json", std::process::id()));
        std::fs::write(&path, "not json").unwrap();
        let res = WordPool::from_lexicon_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(res, Err(RoomError::LexiconParse { .. })));
    }
}
