use actix::prelude::*;
use serde::{Serialize, Deserialize};

use crate::game::{GameError, SessionSnapshot};
use crate::game::types::WhackOutcome;

/// Message: begin (or restart) the play-through.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct StartGame;

/// Message: the player hit slot `index`.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "Result<WhackOutcome, GameError>")]
pub struct WhackSlot {
    pub index: usize,
}

/// Message: the client's viewport width changed.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct ReportViewport {
    pub width: u32,
}

/// Message: read the current state.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "SessionSnapshot")]
pub struct GetSnapshot;

/// Message: route state updates to `recipient`. Replaces any previous observer.
#[derive(Message)]
#[rtype(result = "()")]
pub struct RegisterObserver {
    pub recipient: Recipient<SessionUpdate>,
}

/// Message: stop the session actor.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct Shutdown;

/// Pushed by the session to its observer.
#[derive(Message, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[rtype(result = "()")]
#[serde(tag = "action", content = "data")]
pub enum SessionUpdate {
    State(SessionSnapshot),
    GameOver { final_score: u32 },
}

/// Client -> server socket payload.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "action", content = "data")]
pub enum ClientAction {
    Start,
    Whack { index: usize },
    Viewport { width: u32 },
    Ping,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_action_wire_format() {
        let start: ClientAction = serde_json::from_str(r#"{"action":"Start"}"#).unwrap();
        assert_eq!(start, ClientAction::Start);

        let whack: ClientAction =
            serde_json::from_str(r#"{"action":"Whack","data":{"index":3}}"#).unwrap();
        assert_eq!(whack, ClientAction::Whack { index: 3 });

        let viewport: ClientAction =
            serde_json::from_str(r#"{"action":"Viewport","data":{"width":720}}"#).unwrap();
        assert_eq!(viewport, ClientAction::Viewport { width: 720 });

        assert!(serde_json::from_str::<ClientAction>(r#"{"action":"Shoot"}"#).is_err());
        assert!(serde_json::from_str::<ClientAction>(r#"{"action":"Whack","data":{"index":-1}}"#).is_err());
    }

    #[test]
    fn test_game_over_wire_format() {
        let text = serde_json::to_string(&SessionUpdate::GameOver { final_score: 12 }).unwrap();
        assert_eq!(text, r#"{"action":"GameOver","data":{"final_score":12}}"#);
    }
}
