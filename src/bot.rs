// Welcome to
// __________         __    __  .__                               __
// \______   \_____ _/  |__/  |_|  |   ____   ______ ____ _____  |  | __ ____
//  |    |  _/\__  \\   __\   __\  | _/ __ \ /  ___//    \\__  \ |  |/ // __ \
//  |    |   \ / __ \|  |  |  | |  |_\  ___/ \___ \|   |  \/ __ \|    <\  ___/
//  |________/(______/__|  |__| |____/\_____>______>___|__(______/__|__\\_____>
//
// Endpoint-level facade: appearance, lifecycle logging and per-turn move decisions.
// The decision itself lives in `selector`; this layer adds logging and the debug log.

use log::info;
use serde_json::{json, Value};
use std::time::Instant;

use crate::config::Config;
use crate::debug_logger::DebugLogger;
use crate::selector::{select_move, MoveDecision};
use crate::types::{Battlesnake, Board, Game};

/// Forager bot: one method per game endpoint, all reading the same startup config
pub struct Bot {
    config: Config,
    debug_logger: DebugLogger,
}

impl Bot {
    /// Creates a new Bot instance with the given configuration and debug logging off
    ///
    /// # Arguments
    /// * `config` - Static configuration that does not change during the bot's lifetime
    pub fn new(config: Config) -> Self {
        Bot {
            config,
            debug_logger: DebugLogger::disabled(),
        }
    }

    /// Attaches a debug logger that records every decision
    pub fn with_debug_logger(mut self, debug_logger: DebugLogger) -> Self {
        self.debug_logger = debug_logger;
        self
    }

    /// Returns bot metadata and appearance
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> Value {
        info!("INFO");

        let appearance = &self.config.appearance;
        json!({
            "apiversion": appearance.apiversion,
            "author": appearance.author,
            "color": appearance.color,
            "head": appearance.head,
            "tail": appearance.tail,
        })
    }

    /// Called when a game starts
    /// Corresponds to POST /start endpoint
    pub fn start(&self, game: &Game, _turn: &i32, _board: &Board, _you: &Battlesnake) {
        info!("{} GAME START", game.id);
    }

    /// Called when a game ends
    /// Corresponds to POST /end endpoint
    pub fn end(&self, game: &Game, turn: &i32, _board: &Board, _you: &Battlesnake) {
        info!("{} GAME OVER after {} turns", game.id, turn);
    }

    /// Computes the move decision for this turn
    pub fn decide(&self, board: &Board, you: &Battlesnake) -> MoveDecision {
        select_move(board, you, &self.config.selector)
    }

    /// Computes and returns the next move
    /// Corresponds to POST /move endpoint
    ///
    /// # Returns
    /// * `Value` - JSON response containing the chosen move direction
    pub fn get_move(
        &self,
        game: &Game,
        turn: &i32,
        board: &Board,
        you: &Battlesnake,
    ) -> Value {
        let start_time = Instant::now();

        let decision = self.decide(board, you);

        // The selector already warns when the fallback is forced
        if !decision.degraded {
            info!(
                "{} MOVE {}: {} (score: {:?}, food distance: {}, time: {}us)",
                game.id,
                turn,
                decision.direction,
                decision.score,
                decision.food.distance,
                start_time.elapsed().as_micros()
            );
        }

        self.debug_logger.log_move(*turn, board, you, &decision);

        json!({ "move": decision.direction.as_str() })
    }
}
