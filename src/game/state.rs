use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::config::{Config, SNAKE_COLOR};
use crate::game::{Cell, Entity, Fruit, Intent, Snake};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    GameOver,
}

/// What a single simulation step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Moved,
    Ate,
    Crashed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Tick(TickOutcome),
    Reset,
}

impl GameState {
    pub fn next(self, event: Event) -> GameState {
        match (self, event) {
            (GameState::Playing, Event::Tick(TickOutcome::Crashed)) => GameState::GameOver,
            (GameState::GameOver, Event::Reset) => GameState::Playing,
            (state, _) => state,
        }
    }
}

pub struct Board<R = ThreadRng> {
    config: Config,
    snake: Snake,
    entities: Vec<Entity>,
    score: u64,
    state: GameState,
    next_move: Intent,
    rng: R,
}

impl Board<ThreadRng> {
    pub fn new(config: Config) -> Self {
        Board::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> Board<R> {
    pub fn with_rng(config: Config, mut rng: R) -> Self {
        let (snake, entities) = Self::fresh_pieces(&config, &mut rng);
        Self {
            config,
            snake,
            entities,
            score: 0,
            state: GameState::Playing,
            next_move: Intent::default(),
            rng,
        }
    }

    fn fresh_pieces(config: &Config, rng: &mut R) -> (Snake, Vec<Entity>) {
        let start = Cell::new(config.rows / 2, config.cols / 2);
        let snake = Snake::new(start, SNAKE_COLOR, config);
        // The board must always have at least one fruit available.
        let entities = vec![Entity::Fruit(Fruit::spawn(rng, config))];
        (snake, entities)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    #[cfg(test)]
    pub fn next_move(&self) -> Intent {
        self.next_move
    }

    /// Latches the latest directional intent until the next tick. Only one
    /// direction is kept; W, A, S, D order decides which when several are held.
    pub fn latch_intent(&mut self, intent: Intent) {
        if intent.is_empty() {
            return;
        }
        if intent.up {
            self.next_move = Intent::UP;
        }
        if intent.left {
            self.next_move = Intent::LEFT;
        }
        if intent.down {
            self.next_move = Intent::DOWN;
        }
        if intent.right {
            self.next_move = Intent::RIGHT;
        }
    }

    /// Advances the simulation by one step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != GameState::Playing {
            return TickOutcome::Idle;
        }

        self.snake.handle_input(self.next_move);
        self.snake.move_step(self.config.board_size());

        let outcome = if self.snake.collides_with_itself() {
            info!("game over: score {} length {}", self.score, self.snake.len());
            TickOutcome::Crashed
        } else if self.snake.collides_with(self.first_entity()) {
            self.entities.remove(0);
            self.snake.grow();
            self.spawn_fruit();
            self.score += 1;
            debug!("fruit eaten, score {}", self.score);
            TickOutcome::Ate
        } else {
            TickOutcome::Moved
        };

        self.state = self.state.next(Event::Tick(outcome));
        outcome
    }

    /// Restarts a finished game. Ignored while a game is still running.
    pub fn reset(&mut self) -> bool {
        if self.state != GameState::GameOver {
            return false;
        }
        self.restart();
        true
    }

    /// Unconditionally puts the board back to its starting layout.
    fn restart(&mut self) {
        let (snake, entities) = Self::fresh_pieces(&self.config, &mut self.rng);
        self.snake = snake;
        self.entities = entities;
        self.score = 0;
        self.next_move = Intent::default();
        self.state = self.state.next(Event::Reset);
        info!("board reset");
    }

    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: GameState) {
        self.state = state;
    }

    fn first_entity(&self) -> &Entity {
        self.entities
            .first()
            .expect("board always holds at least one entity")
    }

    fn spawn_fruit(&mut self) {
        let fruit = Fruit::spawn(&mut self.rng, &self.config);
        self.entities.push(Entity::Fruit(fruit));
    }
}
