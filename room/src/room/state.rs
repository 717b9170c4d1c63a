use std::collections::{HashMap, HashSet};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use protocol::{Paint, PlayerResponse as PlayerResp};

use super::config::{Config, WordPool};
use super::score;
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// No round running: nobody has joined yet, or the roster ran empty.
    Idle,
    Drawing,
    Over,
}

/// What the room should do after a rule fired, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Broadcast(PlayerResp),
    Send(String, PlayerResp),
    StartCountdown,
    StopCountdown,
}

/// Roster, scores and round state. Pure game rules, no I/O.
pub struct State {
    stage: Stage,

    roster: Vec<String>,
    scores: HashMap<String, u32>,

    drawer_idx: usize,
    drawer: Option<String>,
    word: Option<String>,
    used_words: HashSet<String>,
    correct: HashSet<String>,
    time_left: u32,
    turn: u32,

    words: WordPool,
    max_turns: u32,
    round_secs: u32,
    rng: StdRng,
}

impl State {
    pub fn new(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            stage: Stage::Idle,
            roster: Vec::new(),
            scores: HashMap::new(),
            drawer_idx: 0,
            drawer: None,
            word: None,
            used_words: HashSet::new(),
            correct: HashSet::new(),
            time_left: 0,
            turn: 1,
            words: config.words.clone(),
            max_turns: config.max_turns,
            round_secs: config.round_secs,
            rng,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    pub fn score(&self, name: &str) -> Option<u32> {
        self.scores.get(name).copied()
    }

    pub fn drawer(&self) -> Option<&str> {
        self.drawer.as_deref()
    }

    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    pub fn used_words(&self) -> &HashSet<String> {
        &self.used_words
    }

    pub fn correct_guessers(&self) -> &HashSet<String> {
        &self.correct
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    fn scores_frame(&self) -> PlayerResp {
        PlayerResp::Scores(score::snapshot(&self.roster, &self.scores))
    }

    fn award(&mut self, name: &str, points: u32, effects: &mut Vec<Effect>) {
        if let Some(score) = self.scores.get_mut(name) {
            *score += points;
            effects.push(Effect::Broadcast(self.scores_frame()));
        }
    }

    pub fn join(&mut self, name: &str) -> Vec<Effect> {
        if self.roster.iter().any(|n| n == name) {
            return vec![];
        }
        self.roster.push(name.to_string());
        self.scores.insert(name.to_string(), 0);
        info!("{} joined, {} player(s) in room", name, self.roster.len());

        let mut effects = vec![
            Effect::Broadcast(self.scores_frame()),
            Effect::Broadcast(PlayerResp::chat(format!("{} has joined.", name))),
        ];
        if self.roster.len() == 1 && self.stage != Stage::Over {
            effects.extend(self.next_round());
        }
        effects
    }

    /// Removes a player. Safe to call more than once for the same name.
    pub fn leave(&mut self, name: &str) -> Vec<Effect> {
        let pos = match self.roster.iter().position(|n| n == name) {
            Some(pos) => pos,
            None => return vec![],
        };
        self.roster.remove(pos);
        self.scores.remove(name);
        info!("{} left, {} player(s) in room", name, self.roster.len());

        // keep rotation pointing at whoever followed the departed slot
        let len = self.roster.len();
        if len == 0 {
            self.drawer_idx = 0;
        } else {
            if pos < self.drawer_idx {
                self.drawer_idx -= 1;
            } else if pos == self.drawer_idx {
                self.drawer_idx = (pos + len - 1) % len;
            }
            self.drawer_idx %= len;
        }

        vec![
            Effect::Broadcast(self.scores_frame()),
            Effect::Broadcast(PlayerResp::chat(format!("{} has left.", name))),
        ]
    }

    pub fn chat(&mut self, name: &str, msg: &str) -> Vec<Effect> {
        if !self.roster.iter().any(|n| n == name) {
            return vec![];
        }
        let is_guess = self.stage == Stage::Drawing
            && self.drawer.as_deref() != Some(name)
            && !self.correct.contains(name)
            && self
                .word
                .as_deref()
                .map_or(false, |word| word.to_lowercase() == msg.to_lowercase());

        if !is_guess {
            return vec![Effect::Broadcast(PlayerResp::chat(format!("{}: {}", name, msg)))];
        }

        let points = score::guess_points(self.correct.len());
        self.correct.insert(name.to_string());
        info!("{} guessed the word for {} points", name, points);

        let mut effects = vec![];
        self.award(name, points, &mut effects);
        effects.push(Effect::Send(name.to_string(), PlayerResp::chat("You guessed the word!")));
        effects.push(Effect::Broadcast(PlayerResp::chat(format!("{} guessed the word!", name))));
        effects
    }

    /// Only the current drawer may paint.
    pub fn paint(&self, name: &str, paint: Paint) -> Vec<Effect> {
        if self.stage == Stage::Drawing && self.drawer.as_deref() == Some(name) {
            vec![Effect::Broadcast(PlayerResp::Paint(paint))]
        } else {
            debug!("dropping paint from {}, not the drawer", name);
            vec![]
        }
    }

    pub fn tick(&mut self) -> Vec<Effect> {
        if self.stage != Stage::Drawing {
            return vec![];
        }
        if self.time_left > 0 {
            let frame = PlayerResp::Timer(self.time_left);
            self.time_left -= 1;
            return vec![Effect::Broadcast(frame)];
        }

        let mut effects = vec![Effect::Broadcast(PlayerResp::Timer(0)), Effect::StopCountdown];
        self.reward_drawer(&mut effects);
        effects.extend(self.next_round());
        effects
    }

    /// Flat bonus for the drawer when every remaining guesser got the word.
    fn reward_drawer(&mut self, effects: &mut Vec<Effect>) {
        let drawer = match self.drawer.clone() {
            Some(drawer) if self.scores.contains_key(&drawer) => drawer,
            _ => return,
        };
        // holds vacuously for a drawer with nobody else in the room
        let everyone = self
            .roster
            .iter()
            .filter(|n| **n != drawer)
            .all(|n| self.correct.contains(n));
        if everyone {
            self.award(&drawer, DRAWER_BONUS, effects);
            effects.push(Effect::Broadcast(PlayerResp::chat(format!(
                "Everyone guessed the word! {} earns a bonus for the drawing.",
                drawer
            ))));
        }
    }

    fn next_round(&mut self) -> Vec<Effect> {
        if self.roster.is_empty() {
            info!("no players left, waiting for someone to join");
            self.stage = Stage::Idle;
            self.drawer = None;
            self.word = None;
            return vec![];
        }

        if self.turn > self.max_turns {
            return self.game_over();
        }

        let mut effects = vec![Effect::Broadcast(PlayerResp::chat(format!(
            "====== Round {} ======",
            self.turn
        )))];

        self.drawer_idx = (self.drawer_idx + 1) % self.roster.len();
        let drawer = self.roster[self.drawer_idx].clone();
        self.correct.clear();
        let word = self.words.draw(&mut self.used_words, &mut self.rng);
        info!("round {}: {} draws", self.turn, drawer);

        effects.push(Effect::Broadcast(PlayerResp::Drawing(drawer.clone())));
        effects.push(Effect::Broadcast(PlayerResp::Word(word.clone())));
        effects.push(Effect::Send(drawer.clone(), PlayerResp::chat("It is your turn to draw.")));
        effects.push(Effect::StartCountdown);

        self.drawer = Some(drawer);
        self.word = Some(word);
        self.time_left = self.round_secs;
        self.stage = Stage::Drawing;
        self.turn += 1;
        effects
    }

    fn game_over(&mut self) -> Vec<Effect> {
        info!("game over after {} rounds", self.max_turns);
        self.stage = Stage::Over;
        self.drawer = None;
        self.word = None;
        let ranked = score::rankings(&self.roster, &self.scores);
        vec![
            Effect::StopCountdown,
            Effect::Broadcast(PlayerResp::GameOver),
            Effect::Broadcast(self.scores_frame()),
            Effect::Broadcast(PlayerResp::chat(score::ranking_summary(&ranked))),
        ]
    }
}
