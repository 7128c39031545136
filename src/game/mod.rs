pub mod draw;
pub mod fruit;
pub mod grid;
pub mod snake;
pub mod state;

pub use draw::{FontSize, Renderer};
pub use fruit::{Entity, Fruit, Rgb};
pub use grid::{cell_to_rect, Cell, Rect};
pub use snake::{Intent, Snake, Velocity};
pub use state::{Board, GameState, TickOutcome};
