use log::{error, info, warn};
use tokio::net::{TcpListener, TcpStream};

use crate::error::{RoomError, RoomResult};
use crate::room::{self, Config, RoomReq};
use crate::types::*;

/// Binds the configured address and serves until the process is stopped.
pub async fn run(config: Config) -> RoomResult<()> {
    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| RoomError::Bind { addr: addr.clone(), source })?;
    info!("listening on {}", addr);
    serve(listener, config).await
}

/// Accepts connections on an already bound listener. Each peer becomes `User<N>`
/// and is handed to the room once its websocket handshake completes.
pub async fn serve(listener: TcpListener, config: Config) -> RoomResult<()> {
    let room = room::Room::new(&config);
    let room_tx = room.get_tx();
    let _handle_room = tokio::spawn(room.run());

    let mut joined: u64 = 0;
    loop {
        let (stream, addr) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("failed to accept a connection: {}", e);
                continue;
            }
        };
        joined += 1;
        let name = format!("User{}", joined);
        let room_tx_clone = room_tx.clone();
        tokio::spawn(async move {
            match handshake(stream).await {
                Ok(ws_stream) => {
                    info!("{} connected from {}", name, addr);
                    if room_tx_clone.send(RoomReq::PlayerLogin { name, ws_stream }).await.is_err() {
                        error!("room is gone, dropping connection from {}", addr);
                    }
                }
                Err(e) => warn!("{} from {}: {}", name, addr, e),
            }
        });
    }
}

async fn handshake(stream: TcpStream) -> RoomResult<WsStream> {
    Ok(tokio_tungstenite::accept_async(stream).await?)
}
