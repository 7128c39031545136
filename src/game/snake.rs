use crate::config::Config;
use crate::game::grid::{cell_to_rect, inset, Cell, Rect};
use crate::game::{Entity, Rgb};

/// Directional intent sampled from the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Intent {
    pub up: bool,
    pub left: bool,
    pub down: bool,
    pub right: bool,
}

impl Intent {
    pub const UP: Intent = Intent::new(true, false, false, false);
    pub const LEFT: Intent = Intent::new(false, true, false, false);
    pub const DOWN: Intent = Intent::new(false, false, true, false);
    pub const RIGHT: Intent = Intent::new(false, false, false, true);

    pub const fn new(up: bool, left: bool, down: bool, right: bool) -> Self {
        Self {
            up,
            left,
            down,
            right,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.up || self.left || self.down || self.right)
    }
}

/// Movement in cells per tick. Exactly one axis is non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Velocity {
    pub dx: i32,
    pub dy: i32,
}

impl Velocity {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

#[derive(Clone, Debug)]
pub struct Snake {
    segments: Vec<Rect>,
    velocity: Velocity,
    base_speed: i32,
    dim: i32,
    color: Rgb,
    config: Config,
}

impl Snake {
    /// A one-segment snake at `cell`, heading right.
    pub fn new(cell: Cell, color: Rgb, config: &Config) -> Self {
        Self {
            segments: vec![cell_to_rect(cell, config.snake_dim, config.cell_dim)],
            velocity: Velocity::new(config.base_speed, 0),
            base_speed: config.base_speed,
            dim: config.snake_dim,
            color,
            config: *config,
        }
    }

    pub fn segments(&self) -> &[Rect] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn head(&self) -> &Rect {
        self.segments
            .first()
            .expect("snake always has a head segment")
    }

    pub fn tail(&self) -> &Rect {
        self.segments
            .last()
            .expect("snake always has a tail segment")
    }

    /// Turns are only taken on the axis the snake is not moving along, so it
    /// can never reverse into its own neck. Flags are checked up, down, left,
    /// right and a later accepted flag overwrites an earlier one.
    pub fn handle_input(&mut self, intent: Intent) {
        let speed = self.base_speed;
        if self.velocity.dy == 0 && intent.up {
            self.velocity = Velocity::new(0, -speed);
        }
        if self.velocity.dy == 0 && intent.down {
            self.velocity = Velocity::new(0, speed);
        }
        if self.velocity.dx == 0 && intent.left {
            self.velocity = Velocity::new(-speed, 0);
        }
        if self.velocity.dx == 0 && intent.right {
            self.velocity = Velocity::new(speed, 0);
        }
    }

    /// Advances the head one step (wrapping at the board edges) and shifts
    /// every other segment into the slot its predecessor held before the move.
    pub fn move_step(&mut self, board_size: (i32, i32)) {
        let mut carried = *self.head();
        self.segments[0] = self.step_head(carried, board_size);
        for segment in self.segments.iter_mut().skip(1) {
            carried = std::mem::replace(segment, carried);
        }
    }

    fn step_head(&self, head: Rect, (width, height): (i32, i32)) -> Rect {
        let cell = self.config.cell_dim;
        let pad = inset(self.dim, cell);
        let mut next = head.offset(self.velocity.dx * cell, self.velocity.dy * cell);

        if next.left < 0 {
            next.left = (self.config.cols - 1) * cell + pad;
        }
        if next.right() > width {
            next.left = pad;
        }
        if next.top < 0 {
            next.top = (self.config.rows - 1) * cell + pad;
        }
        if next.bottom() > height {
            next.top = pad;
        }
        next
    }

    /// Appends a segment one cell behind the tail, opposite to the heading.
    pub fn grow(&mut self) {
        let cell = self.config.cell_dim;
        let tail = *self.tail();
        let Velocity { dx, dy } = self.velocity;
        let new_segment = if dx > 0 {
            tail.offset(-cell, 0)
        } else if dx < 0 {
            tail.offset(cell, 0)
        } else if dy > 0 {
            tail.offset(0, -cell)
        } else if dy < 0 {
            tail.offset(0, cell)
        } else {
            tail
        };
        self.segments.push(new_segment);
    }

    pub fn collides_with(&self, entity: &Entity) -> bool {
        self.head().intersects(entity.rect())
    }

    /// The neck (index 1) is skipped; it always sits right behind the head.
    pub fn collides_with_itself(&self) -> bool {
        if self.segments.len() < 2 {
            return false;
        }
        let head = self.head();
        self.segments
            .iter()
            .skip(2)
            .any(|seg| head.intersects(seg))
    }

    #[cfg(test)]
    pub(crate) fn from_cells(cells: &[Cell], velocity: Velocity, config: &Config) -> Self {
        let mut snake = Snake::new(cells[0], crate::config::SNAKE_COLOR, config);
        snake.segments = cells
            .iter()
            .map(|c| cell_to_rect(*c, config.snake_dim, config.cell_dim))
            .collect();
        snake.velocity = velocity;
        snake
    }
}
