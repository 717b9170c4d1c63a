use std::fmt;
use std::str::FromStr;

use crate::{split_keyword, Paint, ParseError, TextMessage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerScore {
    pub name: String,
    pub score: u32,
}

/// Frames the server sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerResponse {
    Username(String),
    Chat {
        msg: String
    },
    /// A relayed draw primitive from the current drawer.
    Paint(Paint),
    Timer(u32),
    Drawing(String),
    Word(String),
    /// Full score table in roster order.
    Scores(Vec<PlayerScore>),
    GameOver,
}

impl PlayerResponse {
    pub fn chat(msg: impl Into<String>) -> Self {
        PlayerResponse::Chat { msg: msg.into() }
    }
}

fn required<'a>(keyword: &'static str, rest: Option<&'a str>) -> Result<&'a str, ParseError> {
    rest.filter(|r| !r.is_empty()).ok_or(ParseError::MissingField(keyword))
}

fn parse_scores(body: &str) -> Result<Vec<PlayerScore>, ParseError> {
    body.lines()
        .map(|line| {
            let (name, score) = line
                .rsplit_once(": ")
                .ok_or_else(|| ParseError::BadScore(line.to_string()))?;
            let score = score
                .parse()
                .map_err(|_| ParseError::BadScore(line.to_string()))?;
            Ok(PlayerScore { name: name.to_string(), score })
        })
        .collect()
}

impl FromStr for PlayerResponse {
    type Err = ParseError;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        if line.is_empty() {
            return Err(ParseError::Empty);
        }
        let (keyword, rest) = split_keyword(line);
        let resp = match keyword {
            "USERNAME" => PlayerResponse::Username(required("USERNAME", rest)?.to_string()),
            "CHAT" => PlayerResponse::chat(rest.unwrap_or_default()),
            "TIMER" => {
                let secs = required("TIMER", rest)?;
                let secs = secs.parse().map_err(|_| ParseError::BadInteger(secs.to_string()))?;
                PlayerResponse::Timer(secs)
            }
            "DRAWING" => PlayerResponse::Drawing(required("DRAWING", rest)?.to_string()),
            "WORD" => PlayerResponse::Word(required("WORD", rest)?.to_string()),
            "SCORES" => PlayerResponse::Scores(parse_scores(rest.unwrap_or_default())?),
            "GAME_OVER" => match rest {
                None => PlayerResponse::GameOver,
                Some(_) => return Err(ParseError::TrailingField("GAME_OVER")),
            },
            other => match Paint::parse(other, rest) {
                Some(paint) => PlayerResponse::Paint(paint?),
                None => return Err(ParseError::UnknownKeyword(other.to_string())),
            },
        };
        Ok(resp)
    }
}

impl fmt::Display for PlayerResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerResponse::Username(name) => write!(f, "USERNAME {}", name),
            PlayerResponse::Chat { msg } => write!(f, "CHAT {}", msg),
            PlayerResponse::Paint(paint) => write!(f, "{}", paint),
            PlayerResponse::Timer(secs) => write!(f, "TIMER {}", secs),
            PlayerResponse::Drawing(name) => write!(f, "DRAWING {}", name),
            PlayerResponse::Word(word) => write!(f, "WORD {}", word),
            PlayerResponse::Scores(scores) => {
                f.write_str("SCORES")?;
                for (i, entry) in scores.iter().enumerate() {
                    let sep = if i == 0 { " " } else { "\n" };
                    write!(f, "{}{}: {}", sep, entry.name, entry.score)?;
                }
                Ok(())
            }
            PlayerResponse::GameOver => f.write_str("GAME_OVER"),
        }
    }
}

impl TextMessage for PlayerResponse {}
