//! Loop driver
//!
//! `Game` owns the single authoritative [`GameState`] together with the board
//! geometry and settings. Input is funneled through [`Game::apply`], which
//! only ever queues a turn or replaces the whole state; the snake itself is
//! moved exclusively by [`Game::step`].

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

use crate::hud;
use crate::input::Command;
use crate::renderer::scene::{self, DrawCommand};
use crate::settings::Settings;
use crate::sim::{GameState, GridGeometry, TickOutcome, autopilot, tick};

/// Game instance holding all state
pub struct Game {
    state: GameState,
    geometry: GridGeometry,
    settings: Settings,
    /// Seeds each new round so restarts stay reproducible
    seeds: Pcg32,
    demo: bool,
}

impl Game {
    pub fn new(settings: Settings, geometry: GridGeometry, seed: u64) -> Self {
        let mut seeds = Pcg32::seed_from_u64(seed);
        let state = GameState::new(&geometry, settings.target_score, seeds.next_u64());
        log::info!(
            "New game on {}x{} board ({} px cells), seed {}",
            geometry.cols,
            geometry.rows,
            geometry.cell_size,
            seed
        );
        Self {
            state,
            geometry,
            settings,
            seeds,
            demo: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn demo(&self) -> bool {
        self.demo
    }

    /// Throw the current round away and start over
    pub fn restart(&mut self) {
        let seed = self.seeds.next_u64();
        self.state = GameState::new(&self.geometry, self.settings.target_score, seed);
        log::info!("Restarted with seed {}", seed);
    }

    /// Adopt the board for a new viewport and start a fresh round
    pub fn resize(&mut self, geometry: GridGeometry) {
        if geometry != self.geometry {
            log::info!(
                "Board resized to {}x{} ({} px cells)",
                geometry.cols,
                geometry.rows,
                geometry.cell_size
            );
        }
        self.geometry = geometry;
        self.restart();
    }

    /// Handle a player command
    ///
    /// Any command on a finished round restarts it. Returns `true` when the
    /// state was replaced and the frame should be redrawn right away.
    pub fn apply(&mut self, command: Command) -> bool {
        if command == Command::ToggleDemo {
            self.demo = !self.demo;
            log::info!("Demo mode: {}", self.demo);
        }

        if command == Command::Restart || self.state.is_terminal() {
            self.restart();
            return true;
        }

        if let Command::Turn(direction) = command {
            if !self.state.set_direction(direction) {
                log::debug!("Dropped reversal to {:?}", direction);
            }
        }
        false
    }

    /// Advance one tick
    pub fn step(&mut self) -> TickOutcome {
        if self.demo {
            if let Some(direction) = autopilot::steer(&self.state) {
                self.state.set_direction(direction);
            }
        }

        let outcome = tick(&mut self.state);
        match outcome {
            TickOutcome::Collided(kind) => log::info!(
                "Game over ({:?}) at score {}/{}",
                kind,
                self.state.score,
                self.state.target_score
            ),
            TickOutcome::Won => log::info!(
                "Round won at score {}/{} after {} ticks",
                self.state.score,
                self.state.target_score,
                self.state.time_ticks
            ),
            TickOutcome::Ate => log::debug!("Fruit eaten, score {}", self.state.score),
            TickOutcome::Moved => log::trace!("Head at {}", self.state.head()),
            TickOutcome::Idle => {}
        }
        outcome
    }

    /// Display list for the current frame
    pub fn scene(&self) -> Vec<DrawCommand<'_>> {
        scene::build(&self.state, &self.geometry, &self.settings.palette)
    }

    pub fn score_text(&self) -> String {
        hud::score_text(&self.state)
    }

    pub fn overlay_html(&self) -> Option<&'static str> {
        hud::overlay_html(self.state.phase)
    }
}
