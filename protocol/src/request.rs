use std::fmt;
use std::str::FromStr;

use crate::{ints, split_keyword, ParseError, TextMessage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    FilledRectangle,
    Oval,
    FilledOval,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShapeKind::Rectangle => "RECTANGLE",
            ShapeKind::FilledRectangle => "FILLED_RECTANGLE",
            ShapeKind::Oval => "OVAL",
            ShapeKind::FilledOval => "FILLED_OVAL",
        })
    }
}

impl FromStr for ShapeKind {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RECTANGLE" => Ok(ShapeKind::Rectangle),
            "FILLED_RECTANGLE" => Ok(ShapeKind::FilledRectangle),
            "OVAL" => Ok(ShapeKind::Oval),
            "FILLED_OVAL" => Ok(ShapeKind::FilledOval),
            other => Err(ParseError::UnknownShape(other.to_string())),
        }
    }
}

/// A draw primitive. The server never looks inside, it only decides who may emit one.
///
/// Colors are packed ARGB ints and may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Line { x1: i32, y1: i32, x2: i32, y2: i32, color: i32 },
    Shape { kind: ShapeKind, x: i32, y: i32, w: i32, h: i32, color: i32 },
    Erase { x: i32, y: i32, brush: i32 },
}

impl Paint {
    /// Parses the arguments of a `DRAW`, `SHAPE` or `ERASE` frame.
    /// Returns `None` when `keyword` is not one of those.
    pub(crate) fn parse(keyword: &str, rest: Option<&str>) -> Option<Result<Self, ParseError>> {
        let res = match keyword {
            "DRAW" => rest
                .ok_or(ParseError::MissingField("DRAW"))
                .and_then(|rest| ints::<5>("DRAW", rest))
                .map(|[x1, y1, x2, y2, color]| Paint::Line { x1, y1, x2, y2, color }),
            "SHAPE" => rest
                .ok_or(ParseError::MissingField("SHAPE"))
                .and_then(|rest| {
                    let (kind, rest) =
                        rest.split_once(' ').ok_or(ParseError::MissingField("SHAPE"))?;
                    let kind = kind.parse::<ShapeKind>()?;
                    let [x, y, w, h, color] = ints::<5>("SHAPE", rest)?;
                    Ok(Paint::Shape { kind, x, y, w, h, color })
                }),
            "ERASE" => rest
                .ok_or(ParseError::MissingField("ERASE"))
                .and_then(|rest| ints::<3>("ERASE", rest))
                .map(|[x, y, brush]| Paint::Erase { x, y, brush }),
            _ => return None,
        };
        Some(res)
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::Line { x1, y1, x2, y2, color } => {
                write!(f, "DRAW {} {} {} {} {}", x1, y1, x2, y2, color)
            }
            Paint::Shape { kind, x, y, w, h, color } => {
                write!(f, "SHAPE {} {} {} {} {} {}", kind, x, y, w, h, color)
            }
            Paint::Erase { x, y, brush } => write!(f, "ERASE {} {} {}", x, y, brush),
        }
    }
}

/// Frames a client may send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerRequest {
    Chat {
        msg: String,
    },
    Paint(Paint),
}

impl FromStr for PlayerRequest {
    type Err = ParseError;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        if line.is_empty() {
            return Err(ParseError::Empty);
        }
        let (keyword, rest) = split_keyword(line);
        if keyword == "CHAT" {
            return Ok(PlayerRequest::Chat { msg: rest.unwrap_or_default().to_string() });
        }
        match Paint::parse(keyword, rest) {
            Some(paint) => paint.map(PlayerRequest::Paint),
            None => Err(ParseError::UnknownKeyword(keyword.to_string())),
        }
    }
}

impl fmt::Display for PlayerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerRequest::Chat { msg } => write!(f, "CHAT {}", msg),
            PlayerRequest::Paint(paint) => write!(f, "{}", paint),
        }
    }
}

impl TextMessage for PlayerRequest {}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_tungstenite::tungstenite::Message;

    #[test]
    fn chat_keeps_spaces_and_newlines() {
        let req: PlayerRequest = "CHAT hello  there\nfriend".parse().unwrap();
        assert_eq!(req, PlayerRequest::Chat { msg: "hello  there\nfriend".to_string() });
    }

    #[test]
    fn bare_chat_is_empty_text() {
        let empty = PlayerRequest::Chat { msg: String::new() };
        assert_eq!("CHAT".parse::<PlayerRequest>().unwrap(), empty);
        assert_eq!("CHAT ".parse::<PlayerRequest>().unwrap(), empty);
    }

    #[test]
    fn draw_with_negative_color() {
        let req: PlayerRequest = "DRAW 10 20 30 40 -16777216".parse().unwrap();
        assert_eq!(
            req,
            PlayerRequest::Paint(Paint::Line { x1: 10, y1: 20, x2: 30, y2: 40, color: -16777216 })
        );
        assert_eq!(req.to_string(), "DRAW 10 20 30 40 -16777216");
    }

    #[test]
    fn every_shape_kind() {
        for kind in ["RECTANGLE", "FILLED_RECTANGLE", "OVAL", "FILLED_OVAL"] {
            let line = format!("SHAPE {} 1 2 3 4 255", kind);
            let req: PlayerRequest = line.parse().unwrap();
            assert_eq!(req.to_string(), line);
        }
    }

    #[test]
    fn erase() {
        let req: PlayerRequest = "ERASE 5 6 12".parse().unwrap();
        assert_eq!(req, PlayerRequest::Paint(Paint::Erase { x: 5, y: 6, brush: 12 }));
    }

    #[test]
    fn malformed_frames() {
        assert_eq!("".parse::<PlayerRequest>(), Err(ParseError::Empty));
        assert_eq!(
            "HELLO there".parse::<PlayerRequest>(),
            Err(ParseError::UnknownKeyword("HELLO".into()))
        );
        assert_eq!("DRAW 1 2 3 4".parse::<PlayerRequest>(), Err(ParseError::MissingField("DRAW")));
        assert_eq!("DRAW".parse::<PlayerRequest>(), Err(ParseError::MissingField("DRAW")));
        assert_eq!(
            "ERASE 1 2 3 4".parse::<PlayerRequest>(),
            Err(ParseError::TrailingField("ERASE"))
        );
        assert_eq!("ERASE 1 x 3".parse::<PlayerRequest>(), Err(ParseError::BadInteger("x".into())));
        assert_eq!(
            "SHAPE TRIANGLE 1 2 3 4 5".parse::<PlayerRequest>(),
            Err(ParseError::UnknownShape("TRIANGLE".into()))
        );
        // keywords are case-sensitive
        assert!("chat hi".parse::<PlayerRequest>().is_err());
    }

    #[test]
    fn binary_message_is_rejected() {
        assert_eq!(PlayerRequest::deser(Message::Binary(vec![1, 2])), Err(ParseError::NotText));
        assert_eq!(
            PlayerRequest::deser(Message::Text("CHAT hi".into())),
            Ok(PlayerRequest::Chat { msg: "hi".into() })
        );
    }
}
