use crate::types::*;
use crate::room::RoomReq;
use log::{debug, warn};
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tokio::time::{self, Duration};
use futures::{StreamExt, SinkExt};

use protocol::{PlayerRequest, TextMessage};

/// One connected peer. Owns the socket through its reader, writer and heartbeat tasks;
/// dropping the player aborts them and closes the connection.
#[derive(Debug)]
pub(crate) struct Player {
    pub(crate) name: String,

    pub(crate) ws_from_room_tx: mpsc::Sender<WsMsg>,

    pub(crate) _tx_handle: JoinHandle<()>,
    pub(crate) _rx_handle: JoinHandle<()>,
    pub(crate) _ping_handle: JoinHandle<()>,
}

impl Player {
    pub(crate) fn new(
        name: String,
        stream: WsStream,
        room_tx: mpsc::Sender<RoomReq>,
        heartbeat: Duration,
    ) -> Self {
        let (mut ws_tx, mut ws_rx) = stream.split();
        let (ws_from_room_tx, mut ws_from_room_rx) =
            mpsc::channel::<WsMsg>(crate::consts::PLAYER_QUEUE);

        let tx_ping = ws_from_room_tx.clone();
        let _ping_handle = tokio::spawn(async move {
            loop {
                if tx_ping.send(WsMsg::Ping(Vec::new())).await.is_err() {
                    break;
                }
                time::sleep(heartbeat).await;
            }
        });

        let rx_name = name.clone();
        let _rx_handle = tokio::spawn(
            async move {
                while let Some(inbound) = ws_rx.next().await {
                    let ws_msg = match inbound {
                        Ok(ws_msg) => ws_msg,
                        Err(e) => {
                            debug!("read from {} failed: {}", rx_name, e);
                            break;
                        }
                    };
                    match ws_msg {
                        WsMsg::Close(_) => break,
                        WsMsg::Ping(_) | WsMsg::Pong(_) | WsMsg::Frame(_) => {},
                        frame => match PlayerRequest::deser(frame) {
                            Ok(req) => {
                                let req = RoomReq::PlayerReq(rx_name.clone(), req);
                                if room_tx.send(req).await.is_err() {
                                    break;
                                }
                            }
                            Err(e) => warn!("dropping malformed frame from {}: {}", rx_name, e),
                        },
                    }
                }
                room_tx.send(RoomReq::PlayerLogout(rx_name)).await.unwrap_or_default();
            }
        );

        let tx_name = name.clone();
        let _tx_handle = tokio::spawn(
            async move {
                use tokio_tungstenite::tungstenite::error::Error::{AlreadyClosed, ConnectionClosed};
                while let Some(ws_msg) = ws_from_room_rx.recv().await {
                    match ws_tx.send(ws_msg).await {
                        Ok(()) => {},
                        Err(AlreadyClosed) | Err(ConnectionClosed) => break,
                        Err(e) => warn!("send to {} failed: {}", tx_name, e),
                    };
                }
            }
        );

        Self {
            name,

            ws_from_room_tx,

            _tx_handle,
            _rx_handle,
            _ping_handle
        }
    }

    /// Queues one frame for this peer without blocking.
    ///
    /// Returns `false` when the peer has fallen a full queue behind. The frame is not
    /// queued, so the room must disconnect the peer before it drifts out of sync.
    /// A peer whose queue is closed is already on its way out.
    pub(crate) fn send(&self, msg: WsMsg) -> bool {
        match self.ws_from_room_tx.try_send(msg) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                warn!("outbound queue of {} is full", self.name);
                false
            }
            Err(TrySendError::Closed(_)) => {
                debug!("{} is gone, frame dropped", self.name);
                true
            }
        }
    }

    pub(crate) fn abort(&self) {
        self._rx_handle.abort();
        self._tx_handle.abort();
        self._ping_handle.abort();
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        self.abort();
    }
}
