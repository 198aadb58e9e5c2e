pub mod canvas;
pub mod config;
pub mod events;
pub mod grid;
pub mod io;
pub mod life;
pub mod resize;
pub mod rule_set;
pub mod simulation;

pub use grid::Grid;
pub use grid::GridError;
pub use life::count_live_neighbors;
pub use life::is_all_dead;
pub use life::mutate;
pub use resize::transcribe;
