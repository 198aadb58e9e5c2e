#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    EngineEvent(EngineEvent),
    AppEvent(AppEvent),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    /// Pause a running simulation, or resume a paused one
    TogglePause,

    /// Advance a paused simulation by one generation
    Step,

    /// Kill every cell
    Reset,

    /// Flip the cell under the pixel at `(x, y)`
    Toggle { x: usize, y: usize },

    /// Use the next larger cell size
    GrowCells,

    /// Use the next smaller cell size
    ShrinkCells,

    Faster,
    Slower,

    /// The drawing area is now `width` x `height` pixels
    Resize { width: usize, height: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application
    Exit,
}
