use std::time::Duration;

use tracing::debug;
use tracing::info;

use crate::config::Config;
use crate::config::ConfigError;
use crate::events::EngineEvent;
use crate::grid::Grid;
use crate::life;
use crate::resize;
use crate::rule_set::RuleSet;

/// What a call to [`Simulation::tick`] did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// The simulation is paused, nothing happened
    Idle,

    /// One generation was computed
    Advanced,

    /// One generation was computed and every cell died, so the simulation paused itself
    Settled,
}

/// Number of `(rows, cols)` of `cell_size` pixels that fit in a `(width, height)` display.
pub fn grid_dimensions(display: (usize, usize), cell_size: usize) -> (usize, usize) {
    let (width, height) = display;

    (height / cell_size, width / cell_size)
}

/// The `(row, col)` of the cell under pixel `(x, y)`. The result is not bounds checked.
pub fn pixel_to_cell(x: usize, y: usize, cell_size: usize) -> (usize, usize) {
    (y / cell_size, x / cell_size)
}

/// Owns the live grid and every setting around it.
///
/// Starts paused. Cells can only be edited, and the cell size changed, while paused.
pub struct Simulation {
    grid: Grid,
    paused: bool,
    generation: u64,

    /// `(width, height)` of the drawing area, in pixels
    display: (usize, usize),

    cell_sizes: Vec<usize>,
    cell_size_index: usize,

    speeds: Vec<u32>,
    speed_index: usize,

    stroke: usize,
    rule: RuleSet,
}

impl Simulation {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let Config {
            display,
            cell_sizes,
            cell_size_index,
            speeds,
            speed_index,
            stroke,
            rule,
        } = config;

        let (rows, cols) = grid_dimensions(display, cell_sizes[cell_size_index]);
        info!(rows, cols, %rule, "Starting simulation");

        Ok(Self {
            grid: Grid::new(rows, cols),
            paused: true,
            generation: 0,
            display,
            cell_sizes,
            cell_size_index,
            speeds,
            speed_index,
            stroke,
            rule,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn display(&self) -> (usize, usize) {
        self.display
    }

    /// Side length of a cell, in pixels
    pub fn cell_size(&self) -> usize {
        self.cell_sizes[self.cell_size_index]
    }

    pub fn stroke(&self) -> usize {
        self.stroke
    }

    /// Generations per second
    pub fn speed(&self) -> u32 {
        self.speeds[self.speed_index]
    }

    /// Time between two generations at the current speed
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.speed()
    }

    pub fn rule(&self) -> RuleSet {
        self.rule
    }

    /// Pause or resume. Returns whether the simulation is now paused.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        info!(paused = self.paused, generation = self.generation, "Toggled pause");

        self.paused
    }

    /// Flip the cell under pixel `(x, y)`. Returns the new state of the cell, or `None` if the
    /// simulation is running or the pixel is not over a cell.
    pub fn toggle_at(&mut self, x: usize, y: usize) -> Option<bool> {
        if !self.paused {
            debug!(x, y, "Ignoring edit while running");
            return None;
        }

        let (row, col) = pixel_to_cell(x, y, self.cell_size());
        if !self.grid.contains(row, col) {
            debug!(x, y, row, col, "Ignoring edit outside of the grid");
            return None;
        }

        self.grid.toggle(row, col).ok()
    }

    /// Kill every cell. Only allowed while paused.
    pub fn reset(&mut self) -> bool {
        if !self.paused {
            debug!("Ignoring reset while running");
            return false;
        }

        let (rows, cols) = self.grid.dimensions();
        self.grid = Grid::new(rows, cols);
        self.generation = 0;
        info!("Reset grid");

        true
    }

    /// Advance one generation if running. Pauses once every cell is dead.
    pub fn tick(&mut self) -> Tick {
        if self.paused {
            return Tick::Idle;
        }

        self.advance();

        if life::is_all_dead(&self.grid) {
            self.paused = true;
            info!(generation = self.generation, "Every cell died, pausing");

            return Tick::Settled;
        }

        Tick::Advanced
    }

    /// Advance exactly one generation while paused.
    pub fn step(&mut self) -> bool {
        if !self.paused {
            return false;
        }

        self.advance();

        true
    }

    /// Switch to the cell size at `index`, keeping as much of the pattern as fits. Only allowed
    /// while paused.
    pub fn set_cell_size_index(&mut self, index: usize) -> bool {
        if !self.paused {
            debug!(index, "Ignoring cell size change while running");
            return false;
        }

        if index >= self.cell_sizes.len() {
            return false;
        }

        self.cell_size_index = index;
        self.regrid();

        true
    }

    pub fn grow_cells(&mut self) -> bool {
        self.set_cell_size_index(self.cell_size_index + 1)
    }

    pub fn shrink_cells(&mut self) -> bool {
        match self.cell_size_index.checked_sub(1) {
            Some(index) => self.set_cell_size_index(index),
            None => false,
        }
    }

    /// The drawing area changed size. This happens whether paused or not.
    pub fn resize_display(&mut self, width: usize, height: usize) {
        self.display = (width, height);
        self.regrid();
    }

    /// Returns the new speed.
    pub fn faster(&mut self) -> u32 {
        self.speed_index = (self.speed_index + 1).min(self.speeds.len() - 1);
        debug!(speed = self.speed(), "Speed changed");

        self.speed()
    }

    /// Returns the new speed.
    pub fn slower(&mut self) -> u32 {
        self.speed_index = self.speed_index.saturating_sub(1);
        debug!(speed = self.speed(), "Speed changed");

        self.speed()
    }

    pub fn handle(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::TogglePause => {
                self.toggle_pause();
            }
            EngineEvent::Step => {
                self.step();
            }
            EngineEvent::Reset => {
                self.reset();
            }
            EngineEvent::Toggle { x, y } => {
                self.toggle_at(x, y);
            }
            EngineEvent::GrowCells => {
                self.grow_cells();
            }
            EngineEvent::ShrinkCells => {
                self.shrink_cells();
            }
            EngineEvent::Faster => {
                self.faster();
            }
            EngineEvent::Slower => {
                self.slower();
            }
            EngineEvent::Resize { width, height } => {
                self.resize_display(width, height);
            }
        }
    }

    /// Text for the title line
    pub fn title(&self) -> String {
        let state = if self.paused { "Paused" } else { "Running" };

        format!(
            "Conway's Game of Life : {state} | gen {} | {} alive | cell {}px | {}/s | {}",
            self.generation,
            self.grid.live_count(),
            self.cell_size(),
            self.speed(),
            self.rule,
        )
    }

    fn advance(&mut self) {
        self.grid = life::evolve(&self.grid, &self.rule);
        self.generation += 1;
    }

    /// Rebuild the grid for the current display and cell size
    fn regrid(&mut self) {
        let (rows, cols) = grid_dimensions(self.display, self.cell_size());

        if (rows, cols) != self.grid.dimensions() {
            info!(
                from = ?self.grid.dimensions(),
                to = ?(rows, cols),
                "Resizing grid"
            );
        }

        self.grid = resize::resized(&self.grid, rows, cols);
    }
}
