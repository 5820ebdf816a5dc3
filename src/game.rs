use std::io;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clock::TickPacer;
use crate::food::Food;
use crate::grid::{Cell, Grid};
use crate::input::{self, Input};
use crate::settings::Settings;
use crate::snake::Snake;
use crate::term::TermManager;

/// What the rest of the loop should do after a tick has been settled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The snake ran into itself and everything was re-initialized.
    Reset,
    Quit,
}

/// Everything the renderer needs for one frame.
pub struct Scene {
    pub head: Cell,
    pub body: Vec<Cell>,
    pub food: Cell,
}

pub struct GameState {
    grid: Grid,
    snake: Snake,
    food: Food,
    rng: StdRng,
    seed: u64,
    food_avoids_snake: bool,
}

impl GameState {
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let grid = settings.grid();
        let mut rng = StdRng::seed_from_u64(seed);
        let snake = Snake::new(&grid, &mut rng);
        let food = Food::new(&grid, &mut rng);

        GameState {
            grid,
            snake,
            food,
            rng,
            seed,
            food_avoids_snake: settings.food_avoids_snake,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Moves the snake one cell and feeds it if it landed on the food.
    /// Returns whether food was eaten.
    pub fn advance_phase(&mut self) -> bool {
        self.snake.advance(&self.grid);

        if !self.food.is_eaten(self.snake.head()) {
            return false;
        }

        // Grow first so the restored tail counts as occupied.
        self.snake.grow();
        self.relocate_food();
        info!(
            "Food eaten, length is now {}, next food at {:?}",
            self.snake.len(),
            self.food.position()
        );
        true
    }

    /// Applies this tick's input, then checks the snake against itself.
    pub fn settle_phase<I>(&mut self, inputs: I) -> Flow
    where
        I: IntoIterator<Item = Input>,
    {
        for input in inputs {
            match input {
                Input::Turn(dir) => {
                    debug!("Turn requested: {:?}", dir);
                    self.snake.set_pending_direction(dir);
                }
                Input::Quit => return Flow::Quit,
            }
        }

        self.snake.apply_pending_direction();

        if self.snake.check_self_collision() {
            info!("Snake hit itself at length {}, resetting", self.snake.len());
            self.reset();
            return Flow::Reset;
        }

        Flow::Continue
    }

    pub fn reset(&mut self) {
        self.snake.reset(&self.grid, &mut self.rng);
        self.relocate_food();
    }

    pub fn scene(&self) -> Scene {
        let mut segments = self.snake.segments().iter().copied();
        let head = segments.next().unwrap_or_else(|| self.grid.center());

        Scene { head, body: segments.collect(), food: self.food.position() }
    }

    fn relocate_food(&mut self) {
        let avoid: Vec<Cell> = if self.food_avoids_snake {
            self.snake.segments().iter().copied().collect()
        } else {
            vec![]
        };
        self.food.relocate(&self.grid, &mut self.rng, &avoid);
    }
}

/// Owns the display and the clock and drives `GameState` tick by tick.
pub struct SnakeGame {
    state: GameState,
    term: TermManager,
    pacer: TickPacer,
}

impl SnakeGame {
    pub fn new(settings: &Settings, seed: u64) -> io::Result<Self> {
        let state = GameState::new(settings, seed);
        let term = TermManager::open(*state.grid(), settings.palette.clone())?;
        let pacer = TickPacer::new(settings.ticks_per_second);

        Ok(SnakeGame { state, term, pacer })
    }

    pub fn play(&mut self) -> io::Result<()> {
        let grid = self.state.grid();
        info!(
            "Starting on a {}x{} board at {} ms per tick, seed {}",
            grid.width(),
            grid.height(),
            self.pacer.interval().as_millis(),
            self.state.seed()
        );

        self.term.draw(&self.state.scene())?;

        loop {
            self.state.advance_phase();

            let inputs: Vec<Input> = self
                .term
                .read_events_queue()?
                .iter()
                .filter_map(input::translate)
                .collect();

            match self.state.settle_phase(inputs) {
                Flow::Quit => {
                    info!("Quit requested at length {}", self.state.snake().len());
                    return Ok(());
                }
                Flow::Reset => self.term.clear_board()?,
                Flow::Continue => {}
            }

            self.term.draw(&self.state.scene())?;
            self.pacer.wait();
        }
    }
}
