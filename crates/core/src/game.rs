//! Game module - the gameplay state machine
//!
//! This module ties together all core components: field, generator, collision and
//! scoring. An external driver feeds it discrete events through [`Game::action`] and
//! [`Game::tick`]; the game never sleeps, polls or keeps time of its own. The driver
//! schedules ticks every [`Game::speed`] milliseconds.
//!
//! Transient stages (SPAWN, SHIFTING, ATTACHING) are resolved inside the call that
//! entered them, so every public call returns with the game in START, MOVING, PAUSE
//! or GAME_OVER.

use log::{debug, error, info, trace};

use crate::collision::{self, Direction};
use crate::field::Field;
use crate::figure::Figure;
use crate::generator::FigureGenerator;
use crate::scoring::{self, Progress};
use crate::snapshot::GameSnapshot;
use crate::types::{ShapeKind, Stage, UserAction, EMPTY, FIGURE_SIZE};

/// One game session and everything it owns
#[derive(Debug, Clone)]
pub struct Game {
    field: Field,
    generator: FigureGenerator,
    active: Option<Figure>,
    progress: Progress,
    stage: Stage,
    /// Stage restored when a pause ends
    resume_stage: Stage,
    /// Ticks that advanced gravity
    ticks: u64,
    lines: u32,
    pieces: u32,
    torn_down: bool,
}

impl Game {
    /// Create a game whose generator is seeded from OS entropy
    pub fn new() -> Self {
        Self::with_generator(FigureGenerator::new())
    }

    /// Create a reproducible game
    pub fn with_seed(seed: u64) -> Self {
        Self::with_generator(FigureGenerator::with_seed(seed))
    }

    pub fn with_generator(generator: FigureGenerator) -> Self {
        Self {
            field: Field::new(),
            generator,
            active: None,
            progress: Progress::new(),
            stage: Stage::Start,
            resume_stage: Stage::Start,
            ticks: 0,
            lines: 0,
            pieces: 0,
            torn_down: false,
        }
    }

    /// Start from a prepared field instead of an empty one (puzzles, scripted scenarios)
    pub fn with_field(mut self, field: Field) -> Self {
        self.field = field;
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn game_over(&self) -> bool {
        self.stage == Stage::GameOver
    }

    pub fn paused(&self) -> bool {
        self.stage == Stage::Pause
    }

    pub fn score(&self) -> u32 {
        self.progress.score()
    }

    pub fn high_score(&self) -> u32 {
        self.progress.high_score()
    }

    pub fn level(&self) -> u32 {
        self.progress.level()
    }

    /// Milliseconds the driver should wait between ticks
    pub fn speed(&self) -> u32 {
        self.progress.speed()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Figures settled this session
    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    /// Settled cells only (the active figure is not part of the field)
    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn active(&self) -> Option<Figure> {
        self.active
    }

    pub fn next_shape(&self) -> ShapeKind {
        self.generator.next()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Row the active figure would land on
    pub fn ghost_y(&self) -> Option<i8> {
        let figure = self.active?;
        Some(figure.y + collision::drop_distance(&self.field, &figure) as i8)
    }

    /// Replace the pending next shape
    pub fn set_next_shape(&mut self, kind: ShapeKind) {
        self.generator.set_next(kind);
    }

    /// Load a high score kept by an external store
    pub fn set_high_score(&mut self, value: u32) {
        self.progress.load_high_score(value);
    }

    /// Apply a player action
    ///
    /// Actions that make no sense in the current stage are ignored. `hold` marks a
    /// sustained key: a held `Down` drops the figure all the way and attaches it, a
    /// held `Action` does not rotate again.
    pub fn action(&mut self, action: UserAction, hold: bool) {
        if self.torn_down {
            trace!("{} ignored after teardown", action.as_str());
            return;
        }

        match action {
            UserAction::Terminate => self.terminate(),
            UserAction::Pause => self.toggle_pause(),
            UserAction::Start if self.stage == Stage::Start => {
                info!("session started");
                self.enter(Stage::Spawn);
                self.resolve();
            }
            UserAction::Left | UserAction::Right | UserAction::Down | UserAction::Action
                if self.stage == Stage::Moving =>
            {
                self.control(action, hold)
            }
            _ => trace!(
                "{} ignored in stage {}",
                action.as_str(),
                self.stage.as_str()
            ),
        }
    }

    /// Apply a raw action code; unknown codes are ignored
    pub fn action_code(&mut self, code: u8, hold: bool) {
        match UserAction::from_code(code) {
            Some(action) => self.action(action, hold),
            None => trace!("unknown action code {} ignored", code),
        }
    }

    /// Advance gravity by one step; does nothing outside MOVING
    pub fn tick(&mut self) {
        if self.stage != Stage::Moving {
            return;
        }
        self.ticks = self.ticks.wrapping_add(1);
        self.shift();
    }

    /// Return to START with an empty field, keeping the high score
    pub fn restart(&mut self) {
        self.field.reset();
        self.active = None;
        self.progress.reset();
        self.stage = Stage::Start;
        self.resume_stage = Stage::Start;
        self.ticks = 0;
        self.lines = 0;
        self.pieces = 0;
        self.torn_down = false;
        info!("session restarted (high score {})", self.high_score());
    }

    /// Release the figures and the board contents; repeated calls are no-ops
    pub fn teardown(&mut self) {
        if self.torn_down {
            debug!("teardown of a released game ignored");
            return;
        }
        self.active = None;
        self.field.reset();
        self.enter(Stage::GameOver);
        self.torn_down = true;
        info!("game released (high score {})", self.high_score());
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.field.write_grid(&mut out.field);

        if let Some(figure) = self.active {
            for (x, y) in figure.cells() {
                if self.field.in_bounds(x, y) {
                    out.field[y as usize][x as usize] = figure.color;
                }
            }
        }

        out.next = if self.torn_down {
            [[EMPTY; FIGURE_SIZE]; FIGURE_SIZE]
        } else {
            self.generator.preview()
        };
        out.score = self.progress.score();
        out.high_score = self.progress.high_score();
        out.level = self.progress.level();
        out.speed = self.progress.speed();
        out.paused = self.paused();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn enter(&mut self, stage: Stage) {
        if self.stage != stage {
            debug!("stage {} -> {}", self.stage.as_str(), stage.as_str());
        }
        self.stage = stage;
    }

    /// Run transient stages until the game waits for the driver again
    fn resolve(&mut self) {
        loop {
            match self.stage {
                Stage::Spawn => self.spawn(),
                Stage::Attaching => self.attach(),
                _ => break,
            }
        }
    }

    fn control(&mut self, action: UserAction, hold: bool) {
        let Some(figure) = self.active.as_mut() else {
            return;
        };

        match action {
            UserAction::Left => {
                collision::try_move(&self.field, figure, Direction::Left);
            }
            UserAction::Right => {
                collision::try_move(&self.field, figure, Direction::Right);
            }
            UserAction::Action if hold => trace!("held rotation ignored"),
            UserAction::Action => {
                collision::try_rotate(&self.field, figure);
            }
            UserAction::Down => {
                if hold {
                    collision::hard_drop(&self.field, figure);
                }
                self.shift();
            }
            _ => {}
        }
    }

    fn shift(&mut self) {
        self.enter(Stage::Shifting);
        let moved = match self.active.as_mut() {
            Some(figure) => collision::soft_drop_step(&self.field, figure),
            None => false,
        };
        self.enter(if moved {
            Stage::Moving
        } else {
            Stage::Attaching
        });
        self.resolve();
    }

    fn spawn(&mut self) {
        let figure = self.generator.spawn_from_next();
        if collision::can_place(&self.field, &figure, 0, 0, 0) {
            self.active = Some(figure);
            self.enter(Stage::Moving);
        } else {
            debug!("spawn of {} blocked", figure.kind.as_str());
            self.finish();
        }
    }

    fn attach(&mut self) {
        let Some(figure) = self.active.take() else {
            self.enter(Stage::Spawn);
            return;
        };

        let settled = scoring::settle(&mut self.field, &figure)
            .and_then(|()| scoring::scan_and_clear(&mut self.field));
        let cleared = match settled {
            Ok(cleared) => cleared,
            Err(err) => {
                error!("cannot settle {}: {}", figure.kind.as_str(), err);
                self.finish();
                return;
            }
        };

        self.pieces = self.pieces.wrapping_add(1);
        self.lines = self.lines.saturating_add(cleared as u32);
        let points = self.progress.apply_clear(cleared);
        if cleared > 0 {
            debug!(
                "cleared {} rows for {} points (score {}, level {})",
                cleared,
                points,
                self.progress.score(),
                self.progress.level()
            );
        }

        let upcoming = Figure::spawn(self.generator.next());
        if collision::can_place(&self.field, &upcoming, 0, 0, 0) {
            self.enter(Stage::Spawn);
        } else {
            self.finish();
        }
    }

    fn terminate(&mut self) {
        if self.stage == Stage::GameOver {
            trace!("terminate ignored, game already over");
            return;
        }
        debug!("terminated in stage {}", self.stage.as_str());
        self.finish();
    }

    fn toggle_pause(&mut self) {
        match self.stage {
            Stage::GameOver => trace!("pause ignored, game over"),
            Stage::Pause => {
                let resume = self.resume_stage;
                self.enter(resume);
            }
            current => {
                self.resume_stage = current;
                self.enter(Stage::Pause);
            }
        }
    }

    fn finish(&mut self) {
        self.active = None;
        self.enter(Stage::GameOver);
        info!(
            "game over: score {}, high score {}, lines {}",
            self.progress.score(),
            self.progress.high_score(),
            self.lines
        );
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
