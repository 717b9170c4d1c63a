pub mod request;
pub mod response;
pub mod error;
pub mod lexicon;

pub use response::*;
pub use request::*;
pub use error::ParseError;
pub use lexicon::Lexicon;

use std::str::FromStr;
use tokio_tungstenite::tungstenite::Message;

/// One frame per WebSocket text message.
pub trait TextMessage: FromStr<Err = ParseError> + ToString {
    fn deser(msg: Message) -> Result<Self, ParseError> {
        match msg {
            Message::Text(text) => text.parse::<Self>(),
            _ => Err(ParseError::NotText),
        }
    }

    fn ser(&self) -> Message {
        Message::Text(self.to_string())
    }
}

/// Splits `KEYWORD rest` at the first space. A bare keyword yields an empty rest.
pub(crate) fn split_keyword(line: &str) -> (&str, Option<&str>) {
    match line.split_once(' ') {
        Some((keyword, rest)) => (keyword, Some(rest)),
        None => (line, None),
    }
}

/// Parses exactly `N` space-separated integers.
pub(crate) fn ints<const N: usize>(
    keyword: &'static str,
    rest: &str,
) -> Result<[i32; N], ParseError> {
    let mut out = [0i32; N];
    let mut tokens = rest.split(' ');
    for slot in out.iter_mut() {
        let token = tokens
            .next()
            .filter(|t| !t.is_empty())
            .ok_or(ParseError::MissingField(keyword))?;
        *slot = token
            .parse()
            .map_err(|_| ParseError::BadInteger(token.to_string()))?;
    }
    if tokens.next().is_some() {
        return Err(ParseError::TrailingField(keyword));
    }
    Ok(out)
}
