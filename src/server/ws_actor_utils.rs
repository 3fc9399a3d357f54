use actix_web_actors::ws;
use serde_json::Value;

use crate::server::ws_error::ws_error_message;
use crate::server::anti_spam::AntiSpamState;

/// Helpers shared by WebSocket actors.
pub trait WsActorUtils {
    fn anti_spam(&mut self) -> &mut AntiSpamState;
    fn connection_id(&self) -> String;

    /// Send an error unless the same code was just sent.
    fn send_error<A>(
        &mut self,
        ctx: &mut ws::WebsocketContext<A>,
        code: &str,
        message: &str,
        context: Option<Value>,
    )
    where
        A: actix::Actor<Context = ws::WebsocketContext<A>>,
    {
        let connection_id = self.connection_id();
        if self.anti_spam().should_send_error(code, &connection_id) {
            ctx.text(ws_error_message(code, message, context));
        }
    }

    /// Serialize `payload` and send it, or report an internal error.
    fn send_json<A, T>(&mut self, ctx: &mut ws::WebsocketContext<A>, payload: &T)
    where
        A: actix::Actor<Context = ws::WebsocketContext<A>>,
        T: serde::Serialize,
    {
        match serde_json::to_string(payload) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                log::error!("[WsGame] connection={} failed to serialize update: {}", self.connection_id(), e);
                ctx.text(ws_error_message("INTERNAL", "Failed to serialize game state", None));
            }
        }
    }
}
