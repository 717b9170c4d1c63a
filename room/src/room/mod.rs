mod config;
mod state;
mod request;
mod score;

use std::collections::HashMap;

use log::{debug, info, warn};
use tokio::sync::mpsc::{Sender, Receiver, channel};
use tokio::sync::oneshot;
use tokio::time::{self, Duration, MissedTickBehavior};

use crate::consts::*;
use crate::types::*;
use crate::player::*;

pub use config::{Config, WordPool};
pub use state::{Effect, Stage, State};
pub use request::Request as RoomReq;

use protocol::{PlayerRequest as PlayerReq, PlayerResponse as PlayerResp, TextMessage};

/// The game coordinator. A single task owns every player and all round state;
/// sessions and the listener only talk to it through `RoomReq`s.
pub struct Room {
    state: State,
    players: HashMap<String, Player>,

    rm_rx: Receiver<RoomReq>,
    loopback: Sender<RoomReq>,

    tick: Duration,
    heartbeat: Duration,
    round: u64,
    stopper: Option<oneshot::Sender<()>>,

    /// Peers whose outbound queue overflowed; disconnected once the current effects are out.
    lagging: Vec<String>,
}

impl Room {
    pub fn new(config: &Config) -> Self {
        let (loopback, rm_rx) = channel::<RoomReq>(ROOM_QUEUE);

        Self {
            state: State::new(config),
            players: HashMap::new(),

            rm_rx,
            loopback,

            tick: config.tick,
            heartbeat: config.heartbeat,
            round: 0,
            stopper: None,

            lagging: Vec::new(),
        }
    }

    pub fn get_tx(&self) -> Sender<RoomReq> {
        self.loopback.clone()
    }

    fn login_player(&mut self, name: String, ws_stream: WsStream) -> Vec<Effect> {
        let player = Player::new(name.clone(), ws_stream, self.get_tx(), self.heartbeat);
        // a fresh queue always has room
        let _ = player.send(PlayerResp::Username(name.clone()).ser());
        self.players.insert(name.clone(), player);
        self.state.join(&name)
    }

    fn logout(&mut self, name: &str) -> Vec<Effect> {
        // dropping the player closes its connection
        self.players.remove(name);
        self.state.leave(name)
    }

    pub async fn run(mut self) {
        while let Some(req) = self.rm_rx.recv().await {
            let effects = match req {
                RoomReq::PlayerLogin { name, ws_stream } => {
                    self.login_player(name, ws_stream)
                }
                RoomReq::PlayerLogout(name) => self.logout(&name),
                RoomReq::PlayerReq(name, PlayerReq::Chat { msg }) => {
                    self.state.chat(&name, &msg)
                }
                RoomReq::PlayerReq(name, PlayerReq::Paint(paint)) => {
                    self.state.paint(&name, paint)
                }
                RoomReq::Tick(round) if round == self.round => self.state.tick(),
                RoomReq::Tick(round) => {
                    debug!("ignoring tick from superseded countdown {}", round);
                    vec![]
                }
            };
            self.apply(effects);
        }
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Broadcast(resp) => self.broadcast(&resp),
                Effect::Send(name, resp) => self.send(&name, &resp),
                Effect::StartCountdown => self.start_countdown(),
                Effect::StopCountdown => self.stop_countdown(),
            }
        }
        while let Some(name) = self.lagging.pop() {
            if self.players.contains_key(&name) {
                warn!("{} cannot keep up, disconnecting", name);
                let effects = self.logout(&name);
                self.apply(effects);
            }
        }
    }

    fn send(&mut self, name: &str, resp: &PlayerResp) {
        if let Some(player) = self.players.get(name) {
            if !player.send(resp.ser()) {
                self.lagging.push(name.to_string());
            }
        }
    }

    /// Fans one frame out to every player in roster order.
    fn broadcast(&mut self, resp: &PlayerResp) {
        let msg = resp.ser();
        for name in self.state.roster() {
            if let Some(player) = self.players.get(name) {
                if !player.send(msg.clone()) {
                    self.lagging.push(name.clone());
                }
            }
        }
    }

    /// Starts a fresh countdown, superseding any running one.
    fn start_countdown(&mut self) {
        self.stop_countdown();
        self.round += 1;
        let round = self.round;
        info!("countdown {} started", round);

        let (tx, mut rx) = oneshot::channel::<()>();
        let loopback_tx = self.loopback.clone();
        let period = self.tick;
        tokio::spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // the first tick fires immediately
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = &mut rx => return,
                    _ = interval.tick() => {
                        if loopback_tx.send(RoomReq::Tick(round)).await.is_err() {
                            return;
                        }
                    }
                }
            }
        });
        self.stopper = Some(tx);
    }

    fn stop_countdown(&mut self) {
        if let Some(stopper) = self.stopper.take() {
            let _ = stopper.send(());
        }
    }
}
