//! Headless session driver
//!
//! Plays sessions against the core with a random input policy. The driver owns the
//! clock: it interleaves player actions with `tick()` calls and never sleeps, so a
//! session runs as fast as the rules can be evaluated.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::core::Game;
use crate::types::UserAction;

/// Driver settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Sessions to play back to back
    pub games: u32,
    /// Seed for both the piece generator and the input policy; `None` uses OS entropy
    pub seed: Option<u64>,
    /// Ticks after which a session is terminated
    pub max_ticks: u64,
    /// High score loaded from an external store before the first session
    pub high_score: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            games: 1,
            seed: None,
            max_ticks: 20_000,
            high_score: 0,
        }
    }
}

impl SimConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key/value source; missing or malformed values keep the default
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let games = lookup("TETRIS_SIM_GAMES")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.games);

        let seed = lookup("TETRIS_SIM_SEED").and_then(|s| s.trim().parse().ok());

        let max_ticks = lookup("TETRIS_SIM_MAX_TICKS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_ticks);

        let high_score = lookup("TETRIS_HIGH_SCORE")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.high_score);

        Self {
            games,
            seed,
            max_ticks,
            high_score,
        }
    }
}

/// Outcome of one session, printed as a JSON line by the binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    pub session: u32,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub lines: u32,
    pub pieces: u32,
    pub ticks: u64,
    /// True when the session hit the tick cap and was terminated by the driver
    pub capped: bool,
}

/// Random input policy
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    /// Next player input, or `None` to let gravity act
    pub fn choose(&mut self) -> Option<(UserAction, bool)> {
        match self.rng.random_range(0..10u8) {
            0 | 1 => Some((UserAction::Left, false)),
            2 | 3 => Some((UserAction::Right, false)),
            4 | 5 => Some((UserAction::Action, false)),
            6 => Some((UserAction::Down, false)),
            7 => Some((UserAction::Down, true)),
            _ => None,
        }
    }
}

/// Play one session from START until game over or the tick cap
pub fn run_session(
    game: &mut Game,
    policy: &mut RandomPolicy,
    session: u32,
    max_ticks: u64,
) -> SessionReport {
    game.action(UserAction::Start, false);

    while !game.game_over() && game.ticks() < max_ticks {
        if let Some((action, hold)) = policy.choose() {
            game.action(action, hold);
        }
        game.tick();
    }

    let capped = !game.game_over();
    if capped {
        debug!("session {} reached {} ticks", session, max_ticks);
        game.action(UserAction::Terminate, false);
    }

    SessionReport {
        session,
        score: game.score(),
        high_score: game.high_score(),
        level: game.level(),
        lines: game.lines(),
        pieces: game.pieces(),
        ticks: game.ticks(),
        capped,
    }
}

/// Play every configured session on one game, carrying the high score forward
pub fn run(config: &SimConfig) -> Vec<SessionReport> {
    let mut game = match config.seed {
        Some(seed) => Game::with_seed(seed),
        None => Game::new(),
    };
    game.set_high_score(config.high_score);

    // Offset the policy seed so it does not mirror the generator stream.
    let mut policy = RandomPolicy::new(config.seed.map(|s| s.wrapping_add(1)));

    let mut reports = Vec::with_capacity(config.games as usize);
    for session in 0..config.games {
        if session > 0 {
            game.restart();
        }
        let report = run_session(&mut game, &mut policy, session, config.max_ticks);
        info!(
            "session {} finished: score {}, lines {}, pieces {}",
            report.session, report.score, report.lines, report.pieces
        );
        reports.push(report);
    }

    game.teardown();
    reports
}
