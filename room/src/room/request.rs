use crate::types::*;

#[derive(Debug)]
pub enum Request {
    PlayerReq(String, protocol::PlayerRequest),
    PlayerLogin {
        name: String,
        ws_stream: WsStream,
    },
    PlayerLogout(String),

    /// One countdown tick. `round` identifies the countdown that produced it.
    Tick(u64),
}
