/// A grid position as `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Axis-aligned rectangle in pixel space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.left + dx, self.top + dy, self.width, self.height)
    }

    /// Two rects overlap unless one lies entirely to one side of the other.
    /// Shared edges do not count as overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

/// Offset that centers an entity of `entity_dim` inside a cell of `cell_dim`.
pub fn inset(entity_dim: i32, cell_dim: i32) -> i32 {
    (cell_dim - entity_dim) / 2
}

/// Pixel rectangle of a square entity centered in `cell`.
pub fn cell_to_rect(cell: Cell, entity_dim: i32, cell_dim: i32) -> Rect {
    let pad = inset(entity_dim, cell_dim);
    Rect::new(
        cell.col * cell_dim + pad,
        cell.row * cell_dim + pad,
        entity_dim,
        entity_dim,
    )
}
