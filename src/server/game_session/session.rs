/// WebSocket connection handler for one game.
///
/// This actor owns a single client's socket. It forwards client actions to its
/// `GameSession` and relays every `SessionUpdate` back as JSON. Closing the socket
/// closes the game.
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse, error};
use actix_web_actors::ws;
use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::server::anti_spam::AntiSpamState;
use crate::server::game_session::{GameSession, GameSessionManager};
use crate::server::game_session::messages::{
    ClientAction, GetSnapshot, RegisterObserver, ReportViewport, SessionUpdate, StartGame, WhackSlot,
};
use crate::server::game_session::server::{CloseGame, CreateGame, GetGameSession};
use crate::server::ws_actor_utils::WsActorUtils;
use crate::server::ws_error::{INVALID_COMMAND, RATE_LIMITED};

pub struct GameSessionActor {
    pub game_id: Uuid,
    pub session_addr: Addr<GameSession>,
    pub manager_addr: Addr<GameSessionManager>,
    /// Viewport width reported in the connect URL, applied once on start.
    pub initial_width: Option<u32>,
    anti_spam: AntiSpamState,
}

impl GameSessionActor {
    pub fn new(
        game_id: Uuid,
        session_addr: Addr<GameSession>,
        manager_addr: Addr<GameSessionManager>,
        initial_width: Option<u32>,
    ) -> Self {
        Self {
            game_id,
            session_addr,
            manager_addr,
            initial_width,
            anti_spam: AntiSpamState::new(),
        }
    }

    fn handle_action(&mut self, action: ClientAction, ctx: &mut ws::WebsocketContext<Self>) {
        match action {
            ClientAction::Start => {
                self.anti_spam.reset_on_valid_action();
                self.session_addr.do_send(StartGame);
            }
            ClientAction::Whack { index } => {
                let request = self.session_addr.send(WhackSlot { index });
                ctx.spawn(request.into_actor(self).map(move |res, act, ctx| match res {
                    Ok(Ok(_)) => act.anti_spam.reset_on_valid_action(),
                    Ok(Err(e)) => {
                        act.send_error(ctx, e.code(), &e.to_string(), Some(json!({ "index": index })));
                    }
                    Err(e) => {
                        warn!("[WsGame] game_id={} session unreachable: {}", act.game_id, e);
                        ctx.stop();
                    }
                }));
            }
            ClientAction::Viewport { width } => {
                self.anti_spam.reset_on_valid_action();
                self.session_addr.do_send(ReportViewport { width });
            }
            ClientAction::Ping => {
                let request = self.session_addr.send(GetSnapshot);
                ctx.spawn(request.into_actor(self).map(|res, act, ctx| match res {
                    Ok(snapshot) => act.send_json(ctx, &SessionUpdate::State(snapshot)),
                    Err(e) => {
                        warn!("[WsGame] game_id={} session unreachable: {}", act.game_id, e);
                        ctx.stop();
                    }
                }));
            }
        }
    }
}

impl WsActorUtils for GameSessionActor {
    fn anti_spam(&mut self) -> &mut AntiSpamState {
        &mut self.anti_spam
    }

    fn connection_id(&self) -> String {
        self.game_id.to_string()
    }
}

impl Actor for GameSessionActor {
    type Context = ws::WebsocketContext<Self>;

    /// Applies the initial viewport, then subscribes, so the first state sent
    /// already has the client's grid size.
    fn started(&mut self, ctx: &mut Self::Context) {
        if let Some(width) = self.initial_width.take() {
            self.session_addr.do_send(ReportViewport { width });
        }
        self.session_addr.do_send(RegisterObserver {
            recipient: ctx.address().recipient(),
        });
        info!("[WsGame] game_id={} connected", self.game_id);
    }

    /// Closes the game so its timers stop with the connection.
    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.manager_addr.do_send(CloseGame { game_id: self.game_id });
        info!("[WsGame] game_id={} disconnected", self.game_id);
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for GameSessionActor {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                let connection_id = self.connection_id();
                if self.anti_spam.record_request(&connection_id) {
                    self.send_error(ctx, RATE_LIMITED, "Too many requests, slow down.", None);
                    return;
                }
                match serde_json::from_str::<ClientAction>(&text) {
                    Ok(action) => {
                        debug!("[WsGame] game_id={} action {:?}", self.game_id, action);
                        self.handle_action(action, ctx);
                    }
                    Err(_) => self.send_error(ctx, INVALID_COMMAND, "Invalid command", None),
                }
            }
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Err(e) => {
                warn!("[WsGame] game_id={} protocol error: {}", self.game_id, e);
                ctx.stop();
            }
            _ => (),
        }
    }
}

// Relay session updates to the client
impl Handler<SessionUpdate> for GameSessionActor {
    type Result = ();

    fn handle(&mut self, msg: SessionUpdate, ctx: &mut Self::Context) -> Self::Result {
        self.send_json(ctx, &msg);
    }
}

#[derive(Debug, Deserialize)]
pub struct ConnectParams {
    pub width: Option<u32>,
}

/// WebSocket endpoint for a new game.
///
/// Accepts an optional `width` query parameter (viewport width in CSS pixels).
pub async fn ws_game(
    req: HttpRequest,
    stream: web::Payload,
    params: web::Query<ConnectParams>,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    let manager = data.game_session_manager.clone();

    let game_id = manager
        .send(CreateGame)
        .await
        .map_err(error::ErrorInternalServerError)?;

    let session_addr = manager
        .send(GetGameSession { game_id })
        .await
        .map_err(error::ErrorInternalServerError)?
        .map_err(error::ErrorBadRequest)?;

    let actor = GameSessionActor::new(game_id, session_addr, manager.clone(), params.width);
    ws::start(actor, &req, stream).inspect_err(|e| {
        warn!("[WsGame] game_id={} handshake failed: {}", game_id, e);
        manager.do_send(CloseGame { game_id });
    })
}
