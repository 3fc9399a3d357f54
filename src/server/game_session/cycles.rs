/// Countdown and spawn cycles for a GameSession.
/// Encapsulates timer management and the transitions each cycle drives.

use actix::prelude::*;
use log::{debug, info};

use crate::game::types::TickOutcome;
use crate::server::game_session::server::GameSession;

/// Schedule fresh countdown and spawn cycles, dropping any previous ones.
pub fn start_cycles(this: &mut GameSession, ctx: &mut Context<GameSession>) {
    cancel_cycles(this, ctx);

    let countdown = ctx.run_interval(this.timing.countdown_period, |act, ctx| {
        countdown_tick(act, ctx);
    });
    let spawn = ctx.run_interval(this.timing.spawn_period, |act, _ctx| {
        spawn_targets(act);
    });
    this.countdown_timer = Some(countdown);
    this.spawn_timer = Some(spawn);
}

/// Cancel both cycles. Returns true if any was scheduled.
pub fn cancel_cycles(this: &mut GameSession, ctx: &mut Context<GameSession>) -> bool {
    let mut cancelled = false;
    if let Some(handle) = this.countdown_timer.take() {
        cancelled |= ctx.cancel_future(handle);
    }
    if let Some(handle) = this.spawn_timer.take() {
        cancelled |= ctx.cancel_future(handle);
    }
    cancelled
}

/// One second elapsed: count down, end the game at zero.
pub fn countdown_tick(this: &mut GameSession, ctx: &mut Context<GameSession>) {
    match this.session.tick() {
        TickOutcome::Counted(left) => {
            debug!("[GameSession] game_id={} tick, {}s left", this.game_id, left);
            this.send_state();
        }
        TickOutcome::Expired => {
            cancel_cycles(this, ctx);
            info!(
                "[GameSession] game_id={} over, final score {}",
                this.game_id, this.session.score
            );
            this.send_state();
            this.send_game_over();
        }
        TickOutcome::Ignored => {}
    }
}

/// Reposition targets.
pub fn spawn_targets(this: &mut GameSession) {
    let mut rng = rand::rng();
    if this.session.spawn(&mut rng) {
        debug!(
            "[GameSession] game_id={} spawn, visible={:?}",
            this.game_id,
            this.session.slots.iter().enumerate().filter(|(_, s)| s.visible).map(|(i, _)| i).collect::<Vec<_>>()
        );
        this.send_state();
    }
}
