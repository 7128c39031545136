use rand::Rng;

use crate::config::Config;
use crate::game::grid::{cell_to_rect, Cell, Rect};

/// 24-bit colour, kept free of any terminal type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fruit {
    pub rect: Rect,
    pub color: Rgb,
}

impl Fruit {
    pub fn new(cell: Cell, color: Rgb, config: &Config) -> Self {
        Self {
            rect: cell_to_rect(cell, config.fruit_dim, config.cell_dim),
            color,
        }
    }

    /// A reddish fruit on a uniformly random cell. The snake body is not
    /// avoided, so a fruit may land underneath it.
    pub fn spawn<R: Rng>(rng: &mut R, config: &Config) -> Self {
        let cell = Cell::new(
            rng.gen_range(0..config.rows),
            rng.gen_range(0..config.cols),
        );
        let color = Rgb(
            rng.gen_range(90..=255),
            rng.gen_range(0..=50),
            rng.gen_range(0..=50),
        );
        Self::new(cell, color, config)
    }
}

/// Anything living on the board besides the snake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entity {
    Fruit(Fruit),
}

impl Entity {
    pub fn rect(&self) -> &Rect {
        match self {
            Entity::Fruit(fruit) => &fruit.rect,
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            Entity::Fruit(fruit) => fruit.color,
        }
    }
}
