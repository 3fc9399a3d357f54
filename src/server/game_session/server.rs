use actix::prelude::*;
use std::collections::HashMap;
use actix::MessageResult;
use uuid::Uuid;
use log::{debug, info, warn};

use crate::config::game::SessionTiming;
use crate::game::{GameError, Session};
use crate::game::types::WhackOutcome;
use crate::server::game_session::cycles::{start_cycles, cancel_cycles};
use crate::server::game_session::messages::{
    StartGame, WhackSlot, ReportViewport, GetSnapshot, RegisterObserver, Shutdown, SessionUpdate,
};

/// Owns one Session. Timers and client events all arrive through this actor's
/// mailbox, so transitions never interleave.
pub struct GameSession {
    pub game_id: Uuid,
    pub session: Session,
    pub timing: SessionTiming,
    pub observer: Option<Recipient<SessionUpdate>>,

    pub(super) countdown_timer: Option<SpawnHandle>,
    pub(super) spawn_timer: Option<SpawnHandle>,
}

impl GameSession {
    pub fn new(game_id: Uuid, timing: SessionTiming) -> Self {
        Self {
            game_id,
            session: Session::default(),
            timing,
            observer: None,
            countdown_timer: None,
            spawn_timer: None,
        }
    }

    pub fn send_state(&self) {
        if let Some(observer) = &self.observer {
            observer.do_send(SessionUpdate::State(self.session.snapshot()));
        }
    }

    pub fn send_game_over(&self) {
        if let Some(observer) = &self.observer {
            observer.do_send(SessionUpdate::GameOver { final_score: self.session.score });
        }
    }
}

impl Actor for GameSession {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        debug!("[GameSession] game_id={} created", self.game_id);
    }

    fn stopped(&mut self, ctx: &mut Self::Context) {
        cancel_cycles(self, ctx);
        info!("[GameSession] game_id={} torn down", self.game_id);
    }
}

impl Handler<StartGame> for GameSession {
    type Result = ();

    fn handle(&mut self, _msg: StartGame, ctx: &mut Context<Self>) -> Self::Result {
        let restart = self.session.is_running();
        self.session.start();
        start_cycles(self, ctx);
        info!(
            "[GameSession] game_id={} {} ({} slots)",
            self.game_id,
            if restart { "restarted" } else { "started" },
            self.session.slot_count()
        );
        self.send_state();
    }
}

impl Handler<WhackSlot> for GameSession {
    type Result = Result<WhackOutcome, GameError>;

    fn handle(&mut self, msg: WhackSlot, _ctx: &mut Context<Self>) -> Self::Result {
        let outcome = self.session.activate(msg.index);
        match &outcome {
            Ok(WhackOutcome::Hit) => {
                debug!("[GameSession] game_id={} hit slot {}, score {}", self.game_id, msg.index, self.session.score);
                self.send_state();
            }
            Ok(_) => {}
            Err(e) => warn!("[GameSession] game_id={} rejected whack: {}", self.game_id, e),
        }
        outcome
    }
}

impl Handler<ReportViewport> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: ReportViewport, _ctx: &mut Context<Self>) -> Self::Result {
        if self.session.set_viewport_width(msg.width) {
            debug!(
                "[GameSession] game_id={} device class now {:?}",
                self.game_id, self.session.device_class
            );
            self.send_state();
        }
    }
}

impl Handler<GetSnapshot> for GameSession {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _msg: GetSnapshot, _ctx: &mut Context<Self>) -> Self::Result {
        MessageResult(self.session.snapshot())
    }
}

impl Handler<RegisterObserver> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: RegisterObserver, _ctx: &mut Context<Self>) -> Self::Result {
        self.observer = Some(msg.recipient);
        self.send_state();
    }
}

impl Handler<Shutdown> for GameSession {
    type Result = ();

    fn handle(&mut self, _msg: Shutdown, ctx: &mut Context<Self>) -> Self::Result {
        ctx.stop();
    }
}

/// Tracks every live GameSession by id.
pub struct GameSessionManager {
    sessions: HashMap<Uuid, Addr<GameSession>>,
    timing: SessionTiming,
}

impl GameSessionManager {
    pub fn new() -> Self {
        Self::with_timing(SessionTiming::default())
    }

    pub fn with_timing(timing: SessionTiming) -> Self {
        Self {
            sessions: HashMap::new(),
            timing,
        }
    }

    pub fn create_game(&mut self) -> Uuid {
        let game_id = Uuid::new_v4();
        let session = GameSession::new(game_id, self.timing).start();
        self.sessions.insert(game_id, session);
        info!("[Manager] game_id={} created ({} active)", game_id, self.sessions.len());
        game_id
    }
}

impl Default for GameSessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor for GameSessionManager {
    type Context = Context<Self>;
}

#[derive(Message)]
#[rtype(result = "Uuid")]
pub struct CreateGame;

impl Handler<CreateGame> for GameSessionManager {
    type Result = MessageResult<CreateGame>;

    fn handle(&mut self, _msg: CreateGame, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.create_game())
    }
}

#[derive(Message)]
#[rtype(result = "Result<Addr<GameSession>, String>")]
pub struct GetGameSession {
    pub game_id: Uuid,
}

impl Handler<GetGameSession> for GameSessionManager {
    type Result = Result<Addr<GameSession>, String>;

    fn handle(&mut self, msg: GetGameSession, _: &mut Context<Self>) -> Self::Result {
        self.sessions.get(&msg.game_id)
            .cloned()
            .ok_or_else(|| "Game session not found".to_string())
    }
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct CloseGame {
    pub game_id: Uuid,
}

impl Handler<CloseGame> for GameSessionManager {
    type Result = ();

    fn handle(&mut self, msg: CloseGame, _: &mut Context<Self>) -> Self::Result {
        match self.sessions.remove(&msg.game_id) {
            Some(addr) => {
                addr.do_send(Shutdown);
                info!("[Manager] game_id={} closed ({} active)", msg.game_id, self.sessions.len());
            }
            None => warn!("[Manager] close requested for unknown game_id={}", msg.game_id),
        }
    }
}

#[derive(Message)]
#[rtype(result = "usize")]
pub struct ActiveGames;

impl Handler<ActiveGames> for GameSessionManager {
    type Result = usize;

    fn handle(&mut self, _msg: ActiveGames, _: &mut Context<Self>) -> Self::Result {
        self.sessions.len()
    }
}
