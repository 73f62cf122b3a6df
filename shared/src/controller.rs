//! The interaction state machine.
//!
//! Every input goes through [`InteractionController::dispatch`], which is the
//! only place that decides whether an input edits the grid, drives the
//! simulation, or is ignored in the current state.

use std::fmt;

use log::{debug, info, trace};

use crate::config::SimulationConfig;
use crate::cursor::Cursor;
use crate::engine;
use crate::grid::Grid;
use crate::input::Input;
use crate::tick::is_generation_tick;
use crate::Result;

/// The three phases of an interaction session, cycled by [`Input::ToggleState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Seeding,
    Running,
}

impl InteractionState {
    pub fn next(self) -> Self {
        match self {
            InteractionState::Idle => InteractionState::Seeding,
            InteractionState::Seeding => InteractionState::Running,
            InteractionState::Running => InteractionState::Idle,
        }
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InteractionState::Idle => "idle",
            InteractionState::Seeding => "seeding",
            InteractionState::Running => "running",
        };
        f.write_str(name)
    }
}

/// What a dispatched input did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Transitioned {
        from: InteractionState,
        to: InteractionState,
    },
    Edited {
        col: isize,
        row: isize,
        alive: bool,
    },
    Randomized,
    /// A generation was computed; `changed` is false for a still board.
    Stepped { generation: u64, changed: bool },
    CursorMoved(Cursor),
    /// The input has no meaning in the current state.
    Ignored,
}

/// Owns the current grid and the interaction state.
#[derive(Debug, Clone)]
pub struct InteractionController {
    state: InteractionState,
    grid: Grid,
    cursor: Cursor,
    ticks_per_generation: u64,
    generation: u64,
    stable: bool,
}

impl InteractionController {
    /// Starts idle with an all-dead grid sized from `config`.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            state: InteractionState::Idle,
            grid: Grid::new(config.width, config.height)?,
            cursor: Cursor::default(),
            ticks_per_generation: config.ticks_per_generation,
            generation: 0,
            stable: false,
        })
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Generations computed since the grid was last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the last generation step left the grid unchanged.
    pub fn is_stable(&self) -> bool {
        self.stable
    }

    /// Apply one input.
    ///
    /// # Errors
    ///
    /// Only a cell edit while seeding can fail, with
    /// [`Error::OutOfBounds`](crate::Error::OutOfBounds) when the
    /// coordinates are off the board; the grid is left untouched.
    pub fn dispatch(&mut self, input: Input) -> Result<Effect> {
        let effect = match (self.state, input) {
            (_, Input::ToggleState) => self.transition(),
            (_, Input::MoveCursor { d_col, d_row }) => {
                self.cursor
                    .move_by(d_col, d_row, self.grid.width(), self.grid.height());
                Effect::CursorMoved(self.cursor)
            }
            (InteractionState::Seeding, Input::EditCell { col, row }) => {
                let alive = self.grid.toggle(col, row)?;
                debug!("cell ({col}, {row}) set to {alive}");
                Effect::Edited { col, row, alive }
            }
            (InteractionState::Seeding, Input::Randomize) => {
                self.grid.randomize();
                debug!("grid randomized, population {}", self.grid.population());
                Effect::Randomized
            }
            (InteractionState::Running, Input::Tick(tick))
                if is_generation_tick(tick, self.ticks_per_generation) =>
            {
                self.step()
            }
            (state, input) => {
                trace!("{input:?} ignored while {state}");
                Effect::Ignored
            }
        };
        Ok(effect)
    }

    fn transition(&mut self) -> Effect {
        let from = self.state;
        let to = from.next();
        self.state = to;
        if to == InteractionState::Idle {
            self.reset();
        }
        info!("state {from} -> {to}");
        Effect::Transitioned { from, to }
    }

    fn step(&mut self) -> Effect {
        let changed = engine::advance(&mut self.grid);
        self.generation += 1;
        self.stable = !changed;
        debug!(
            "generation {} population {}",
            self.generation,
            self.grid.population()
        );
        Effect::Stepped {
            generation: self.generation,
            changed,
        }
    }

    fn reset(&mut self) {
        self.grid.clear();
        self.generation = 0;
        self.stable = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn controller(width: usize, height: usize, ticks_per_generation: u64) -> InteractionController {
        InteractionController::new(SimulationConfig {
            width,
            height,
            ticks_per_generation,
        })
        .unwrap()
    }

    #[test]
    fn state_cycle() {
        assert_eq!(InteractionState::Idle.next(), InteractionState::Seeding);
        assert_eq!(InteractionState::Seeding.next(), InteractionState::Running);
        assert_eq!(InteractionState::Running.next(), InteractionState::Idle);
    }

    #[test]
    fn starts_idle_and_empty() {
        let controller = controller(5, 5, 1);
        assert_eq!(controller.state(), InteractionState::Idle);
        assert_eq!(controller.grid().population(), 0);
        assert_eq!(controller.generation(), 0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = InteractionController::new(SimulationConfig {
            width: 5,
            height: 5,
            ticks_per_generation: 0,
        });
        assert_eq!(result.unwrap_err(), Error::InvalidTickInterval);
    }

    #[test]
    fn edits_only_apply_while_seeding() {
        let mut controller = controller(5, 5, 1);
        assert_eq!(
            controller.dispatch(Input::EditCell { col: 1, row: 1 }),
            Ok(Effect::Ignored)
        );

        controller.dispatch(Input::ToggleState).unwrap();
        assert_eq!(
            controller.dispatch(Input::EditCell { col: 1, row: 1 }),
            Ok(Effect::Edited { col: 1, row: 1, alive: true })
        );

        controller.dispatch(Input::ToggleState).unwrap();
        let before = controller.grid().clone();
        assert_eq!(
            controller.dispatch(Input::EditCell { col: 2, row: 2 }),
            Ok(Effect::Ignored)
        );
        assert_eq!(controller.grid(), &before);
    }

    #[test]
    fn out_of_bounds_edit_is_an_error_without_side_effects() {
        let mut controller = controller(5, 5, 1);
        controller.dispatch(Input::ToggleState).unwrap();
        let result = controller.dispatch(Input::EditCell { col: 5, row: 0 });
        assert!(matches!(result, Err(Error::OutOfBounds { col: 5, .. })));
        assert_eq!(controller.grid().population(), 0);
        assert_eq!(controller.state(), InteractionState::Seeding);
    }

    #[test]
    fn ticks_step_only_while_running() {
        let mut controller = controller(5, 5, 1);
        controller.dispatch(Input::ToggleState).unwrap();
        for col in 1..=3 {
            controller.dispatch(Input::EditCell { col, row: 2 }).unwrap();
        }
        assert_eq!(controller.dispatch(Input::Tick(0)), Ok(Effect::Ignored));

        controller.dispatch(Input::ToggleState).unwrap();
        assert_eq!(
            controller.dispatch(Input::Tick(1)),
            Ok(Effect::Stepped { generation: 1, changed: true })
        );
        assert!(controller.grid().get(2, 1));
        assert!(!controller.grid().get(1, 2));
    }

    #[test]
    fn ticks_are_throttled() {
        let mut controller = controller(5, 5, 30);
        controller.dispatch(Input::ToggleState).unwrap();
        controller.dispatch(Input::ToggleState).unwrap();

        let steps = (0..90)
            .map(|tick| controller.dispatch(Input::Tick(tick)).unwrap())
            .filter(|effect| matches!(effect, Effect::Stepped { .. }))
            .count();
        assert_eq!(steps, 3);
        assert_eq!(controller.generation(), 3);
        assert!(controller.is_stable());
    }

    #[test]
    fn entering_idle_resets_the_grid() {
        let mut controller = controller(5, 5, 1);
        let initial = controller.grid().clone();

        controller.dispatch(Input::ToggleState).unwrap();
        controller.dispatch(Input::EditCell { col: 0, row: 0 }).unwrap();
        controller.dispatch(Input::ToggleState).unwrap();
        controller.dispatch(Input::Tick(0)).unwrap();
        assert_eq!(
            controller.dispatch(Input::ToggleState),
            Ok(Effect::Transitioned {
                from: InteractionState::Running,
                to: InteractionState::Idle,
            })
        );

        assert_eq!(controller.grid(), &initial);
        assert_eq!(controller.generation(), 0);
        assert!(!controller.is_stable());
    }

    #[test]
    fn randomize_only_while_seeding() {
        let mut controller = controller(16, 16, 1);
        assert_eq!(controller.dispatch(Input::Randomize), Ok(Effect::Ignored));
        assert_eq!(controller.grid().population(), 0);

        controller.dispatch(Input::ToggleState).unwrap();
        assert_eq!(controller.dispatch(Input::Randomize), Ok(Effect::Randomized));
    }

    #[test]
    fn cursor_moves_in_every_state_without_touching_the_grid() {
        let mut controller = controller(4, 4, 1);
        assert_eq!(
            controller.dispatch(Input::MoveCursor { d_col: -1, d_row: 0 }),
            Ok(Effect::CursorMoved(Cursor::new(3, 0)))
        );
        controller.dispatch(Input::ToggleState).unwrap();
        controller.dispatch(Input::MoveCursor { d_col: 0, d_row: 1 }).unwrap();
        assert_eq!(controller.cursor(), Cursor::new(3, 1));
        assert_eq!(controller.grid().population(), 0);
    }
}
