//=========================================================================
// Simulation Engine
//=========================================================================
//
// Owns all mutable game state and the surface it draws into.
//
// Tick pipeline:
// ```text
//   tick(key)
//     ├─ 1. key → Direction      (unknown key: keep heading)
//     ├─ 2. step one cell        (wrap, eat / release tail, bite check)
//     └─ 3. full redraw          (clear → food → snake → present)
// ```
//
// State machine: Idle ──first tick──> Running (no terminal state).
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, trace, warn};

//=== Internal Dependencies ===============================================

use super::board::{Board, Cell};
use super::config::GameConfig;
use super::food::FoodSpawner;
use super::snake::Snake;
use crate::core::input::Direction;
use crate::core::render::{BindingError, Color, Surface, SurfaceRegistry};

//=== Palette =============================================================

const BACKGROUND: Color = Color::TRANSPARENT;
const FOOD_COLOR: Color = Color::RED;
const SNAKE_COLOR: Color = Color::GREEN;

//=== EngineState =========================================================

/// Lifecycle of a simulation instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Created and bound, never ticked. Nothing has been drawn.
    Idle,

    /// At least one tick has been applied.
    Running,
}

//=== Collision ===========================================================

/// What the head ran into on the latest step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Empty cell.
    None,

    /// The food; the snake grew by one.
    Food,

    /// Its own body; the snake was reset.
    Snake,
}

//=== FrameReport =========================================================

/// Snapshot of the counters after a tick, cheap to send across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    pub step: u64,
    pub length: usize,
    pub score: u32,
    pub bites: u32,
}

//=== SimulationEngine ====================================================

/// A snake game bound to one surface.
///
/// Created with [`SimulationEngine::create`] and driven by calling
/// [`SimulationEngine::tick`] once per host timer period with the latest
/// key code. `tick` never blocks.
///
/// ```
/// use serpent_engine::core::render::{Canvas, SurfaceRegistry};
/// use serpent_engine::core::sim::{EngineState, SimulationEngine};
/// use serpent_engine::core::input::Direction;
///
/// let mut registry = SurfaceRegistry::new();
/// registry.insert("canvas", Canvas::new(400, 400));
///
/// let mut engine = SimulationEngine::create(&mut registry, "canvas").unwrap();
/// assert_eq!(engine.state(), EngineState::Idle);
///
/// engine.tick(37);
/// assert_eq!(engine.direction(), Direction::Left);
/// assert_eq!(engine.surface().frames_presented(), 1);
/// ```
pub struct SimulationEngine {
    surface_id: String,
    surface: Box<dyn Surface>,
    config: GameConfig,
    board: Board,
    snake: Snake,
    food: Option<Cell>,
    spawner: FoodSpawner,
    state: EngineState,
    last_collision: Collision,
    steps: u64,
    score: u32,
    bites: u32,
}

impl SimulationEngine {
    //--- Construction -----------------------------------------------------

    /// Binds a new simulation with default settings to the surface
    /// registered under `surface_id`.
    pub fn create(registry: &mut SurfaceRegistry, surface_id: &str) -> Result<Self, BindingError> {
        Self::create_with_config(registry, surface_id, GameConfig::default())
    }

    /// Binds a new simulation with `config` to the surface registered
    /// under `surface_id`.
    ///
    /// Does not draw; the first frame appears on the first tick.
    ///
    /// # Errors
    ///
    /// - [`BindingError::InvalidBoard`] if the config does not describe a
    ///   board (see [`GameConfig::checked_cells`])
    /// - [`BindingError::NotFound`] if no surface has that id
    /// - [`BindingError::AlreadyBound`] if another simulation holds it
    /// - [`BindingError::SurfaceTooSmall`] if the board does not fit
    ///
    /// On error the registry is left untouched.
    pub fn create_with_config(
        registry: &mut SurfaceRegistry,
        surface_id: &str,
        config: GameConfig,
    ) -> Result<Self, BindingError> {
        let cells = config.checked_cells().ok_or_else(|| BindingError::InvalidBoard {
            id: surface_id.to_owned(),
            grid_size: config.grid_size,
            square_size: config.square_size,
        })?;

        let candidate = registry.get(surface_id)?;
        if candidate.width() < config.grid_size || candidate.height() < config.grid_size {
            return Err(BindingError::SurfaceTooSmall {
                id: surface_id.to_owned(),
                required: config.grid_size,
                actual_width: candidate.width(),
                actual_height: candidate.height(),
            });
        }

        let surface = registry.bind(surface_id)?;
        let board = Board::new(cells);
        let snake = Snake::spawn(board, board.center(), Direction::Up);
        let mut spawner = FoodSpawner::new(config.seed);
        let food = spawner.spawn(board, &snake);

        info!(
            target: "sim",
            "Simulation bound to {:?} ({}x{} cells of {}px)",
            surface_id,
            board.cells(),
            board.cells(),
            config.square_size
        );

        Ok(Self {
            surface_id: surface_id.to_owned(),
            surface,
            config,
            board,
            snake,
            food,
            spawner,
            state: EngineState::Idle,
            last_collision: Collision::None,
            steps: 0,
            score: 0,
            bites: 0,
        })
    }

    //--- Tick -------------------------------------------------------------

    /// Advances the simulation by exactly one step and redraws.
    ///
    /// `key_code` is the latest raw key code; codes other than the four
    /// arrows leave the heading unchanged.
    pub fn tick(&mut self, key_code: i32) {
        if self.state == EngineState::Idle {
            info!(target: "sim", "First tick on {:?}, simulation running", self.surface_id);
            self.state = EngineState::Running;
        }

        let direction = self.resolve_direction(key_code);
        self.snake.set_direction(direction);
        self.step();
        self.render();

        self.steps += 1;
        trace!(
            target: "sim",
            "Step {}: key={} dir={:?} head={:?} len={}",
            self.steps,
            key_code,
            direction,
            self.snake.head(),
            self.snake.len()
        );
    }

    //--- Queries ----------------------------------------------------------

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    pub fn head(&self) -> Cell {
        self.snake.head()
    }

    /// Body cells, head first.
    pub fn body(&self) -> Vec<Cell> {
        self.snake.body().collect()
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    /// Ticks applied since creation.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Food eaten since the last reset.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Self-collisions since creation.
    pub fn bites(&self) -> u32 {
        self.bites
    }

    pub fn last_collision(&self) -> Collision {
        self.last_collision
    }

    /// Counters of the latest frame.
    pub fn report(&self) -> FrameReport {
        FrameReport {
            step: self.steps,
            length: self.snake.len(),
            score: self.score,
            bites: self.bites,
        }
    }

    pub fn surface_id(&self) -> &str {
        &self.surface_id
    }

    pub fn surface(&self) -> &dyn Surface {
        self.surface.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    //--- Internal Helpers -------------------------------------------------

    fn resolve_direction(&self, key_code: i32) -> Direction {
        let current = self.snake.direction();
        match Direction::from_key_code(key_code) {
            None => current,
            Some(requested) if self.config.guard_reversal && requested.is_opposite(current) => {
                debug!(target: "sim", "Reversal {:?} -> {:?} ignored", current, requested);
                current
            }
            Some(requested) => requested,
        }
    }

    fn step(&mut self) {
        let next = self.snake.next_head(self.board);
        let eats = self.food == Some(next);

        self.snake.push_head(next);
        if !eats {
            self.snake.pop_tail();
        }

        self.last_collision = if self.snake.bites_itself() {
            self.reset_after_bite();
            Collision::Snake
        } else if eats {
            self.score += 1;
            self.food = self.spawner.spawn(self.board, &self.snake);
            debug!(target: "sim", "Food eaten, score {} length {}", self.score, self.snake.len());
            if self.food.is_none() {
                info!(target: "sim", "Board full, no room for food");
            }
            Collision::Food
        } else {
            Collision::None
        };
    }

    fn reset_after_bite(&mut self) {
        self.bites += 1;
        warn!(
            target: "sim",
            "Snake bit itself at {:?} (length {}, score {}), resetting",
            self.snake.head(),
            self.snake.len(),
            self.score
        );

        let direction = self.snake.direction();
        self.snake = Snake::spawn(self.board, self.board.center(), direction);
        self.score = 0;

        let food_covered = self.food.map_or(true, |food| self.snake.occupies(food));
        if food_covered {
            self.food = self.spawner.spawn(self.board, &self.snake);
        }
    }

    fn render(&mut self) {
        let size = self.config.square_size;
        let surface = self.surface.as_mut();

        surface.clear(BACKGROUND);

        if let Some(food) = self.food {
            surface.fill_rect(food.x * size, food.y * size, size, size, FOOD_COLOR);
        }
        for segment in self.snake.body() {
            surface.fill_rect(segment.x * size, segment.y * size, size, size, SNAKE_COLOR);
        }

        surface.present();
    }
}

impl std::fmt::Debug for SimulationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationEngine")
            .field("surface_id", &self.surface_id)
            .field("state", &self.state)
            .field("direction", &self.snake.direction())
            .field("head", &self.snake.head())
            .field("len", &self.snake.len())
            .field("food", &self.food)
            .field("steps", &self.steps)
            .field("score", &self.score)
            .field("bites", &self.bites)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::key_code::{ARROW_DOWN, ARROW_LEFT, ARROW_RIGHT, ARROW_UP};
    use crate::core::render::Canvas;
    use proptest::prelude::*;

    //--- Test Helpers -----------------------------------------------------

    fn registry() -> SurfaceRegistry {
        let mut registry = SurfaceRegistry::new();
        registry.insert("canvas", Canvas::new(400, 400));
        registry
    }

    fn seeded() -> SimulationEngine {
        SimulationEngine::create_with_config(
            &mut registry(),
            "canvas",
            GameConfig::default().with_seed(9),
        )
        .expect("canvas should bind")
    }

    /// Seeded engine with food parked far from the snake's path.
    fn engine() -> SimulationEngine {
        let mut engine = seeded();
        engine.food = Some(Cell::new(0, 0));
        engine
    }

    fn frames(engine: &SimulationEngine) -> u64 {
        engine.surface().frames_presented()
    }

    //=====================================================================
    // Creation
    //=====================================================================

    #[test]
    fn create_binds_without_rendering() {
        let engine = seeded();
        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(engine.steps(), 0);
        assert_eq!(frames(&engine), 0);
        assert_eq!(engine.surface().pixel(200, 200), Some(Color::TRANSPARENT));
    }

    #[test]
    fn create_lays_out_initial_snake() {
        let engine = seeded();
        assert_eq!(engine.direction(), Direction::Up);
        assert_eq!(
            engine.body(),
            vec![Cell::new(20, 20), Cell::new(20, 21), Cell::new(20, 22)]
        );
        let food = engine.food().expect("food spawned");
        assert!(!engine.body().contains(&food));
    }

    #[test]
    fn create_unknown_surface_fails() {
        let err = SimulationEngine::create(&mut registry(), "nope").err();
        assert_eq!(err, Some(BindingError::NotFound("nope".into())));
    }

    #[test]
    fn create_twice_on_same_surface_fails() {
        let mut registry = registry();
        let _first = SimulationEngine::create(&mut registry, "canvas").expect("first bind");
        let err = SimulationEngine::create(&mut registry, "canvas").err();
        assert_eq!(err, Some(BindingError::AlreadyBound("canvas".into())));
    }

    #[test]
    fn create_on_small_surface_fails() {
        let mut registry = SurfaceRegistry::new();
        registry.insert("small", Canvas::new(100, 400));
        let err = SimulationEngine::create(&mut registry, "small").err();
        assert!(matches!(err, Some(BindingError::SurfaceTooSmall { required: 400, .. })));
    }

    #[test]
    fn failed_create_leaves_surface_bindable() {
        let mut registry = SurfaceRegistry::new();
        registry.insert("canvas", Canvas::new(200, 200));

        let err = SimulationEngine::create(&mut registry, "canvas").err();
        assert!(matches!(err, Some(BindingError::SurfaceTooSmall { .. })));
        assert!(!registry.is_bound("canvas"));

        let small_board = GameConfig::default().with_board(200, 10).with_seed(1);
        let engine = SimulationEngine::create_with_config(&mut registry, "canvas", small_board)
            .expect("same surface binds with a board that fits");
        assert_eq!(engine.surface().width(), 200);
        assert!(registry.is_bound("canvas"));
    }

    #[test]
    fn create_rejects_invalid_board_geometry() {
        let cases = [
            GameConfig { square_size: 0, ..GameConfig::default() },
            GameConfig { grid_size: 0, ..GameConfig::default() },
            GameConfig { grid_size: 395, ..GameConfig::default() },
            GameConfig { grid_size: 20, ..GameConfig::default() },
        ];

        for config in cases {
            let mut registry = registry();
            let (grid_size, square_size) = (config.grid_size, config.square_size);

            let err = SimulationEngine::create_with_config(&mut registry, "canvas", config).err();
            assert_eq!(
                err,
                Some(BindingError::InvalidBoard { id: "canvas".into(), grid_size, square_size })
            );
            assert!(!registry.is_bound("canvas"));
        }
    }

    //=====================================================================
    // Tick Scenarios
    //=====================================================================

    #[test]
    fn tick_left_turns_steps_and_redraws_once() {
        let mut engine = engine();
        engine.tick(ARROW_LEFT);

        assert_eq!(engine.state(), EngineState::Running);
        assert_eq!(engine.direction(), Direction::Left);
        assert_eq!(engine.steps(), 1);
        assert_eq!(engine.head(), Cell::new(19, 20));
        assert_eq!(frames(&engine), 1);
    }

    #[test]
    fn two_up_ticks_advance_twice() {
        let mut engine = engine();
        engine.tick(ARROW_UP);
        engine.tick(ARROW_UP);

        assert_eq!(engine.direction(), Direction::Up);
        assert_eq!(engine.steps(), 2);
        assert_eq!(engine.head(), Cell::new(20, 18));
        assert_eq!(engine.len(), 3);
        assert_eq!(frames(&engine), 2);
    }

    #[test]
    fn same_key_keeps_direction_and_still_steps() {
        let mut engine = engine();
        engine.tick(ARROW_RIGHT);
        let head = engine.head();

        engine.tick(ARROW_RIGHT);
        assert_eq!(engine.direction(), Direction::Right);
        assert_eq!(engine.head(), Cell::new(head.x + 1, head.y));
        assert_eq!(engine.steps(), 2);
    }

    #[test]
    fn unknown_key_keeps_direction_and_still_steps() {
        let mut engine = engine();
        engine.tick(ARROW_RIGHT);

        engine.tick(999);
        assert_eq!(engine.direction(), Direction::Right);
        assert_eq!(engine.steps(), 2);
        assert_eq!(engine.head(), Cell::new(22, 20));
        assert_eq!(frames(&engine), 2);
    }

    #[test]
    fn unknown_key_on_first_tick_keeps_initial_heading() {
        let mut engine = engine();
        engine.tick(0);
        assert_eq!(engine.direction(), Direction::Up);
        assert_eq!(engine.head(), Cell::new(20, 19));
    }

    #[test]
    fn head_wraps_around_the_board() {
        let mut engine = engine();
        for _ in 0..21 {
            engine.tick(ARROW_UP);
        }
        assert_eq!(engine.head(), Cell::new(20, 39));
    }

    //=====================================================================
    // Food and Collisions
    //=====================================================================

    #[test]
    fn eating_grows_and_respawns_food() {
        let mut engine = engine();
        engine.food = Some(Cell::new(20, 19));

        engine.tick(ARROW_UP);

        assert_eq!(engine.last_collision(), Collision::Food);
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.len(), 4);
        let food = engine.food().expect("new food");
        assert_ne!(food, Cell::new(20, 19));
        assert!(!engine.body().contains(&food));
    }

    #[test]
    fn report_tracks_counters() {
        let mut engine = engine();
        assert_eq!(engine.report(), FrameReport { step: 0, length: 3, score: 0, bites: 0 });

        engine.food = Some(Cell::new(20, 19));
        engine.tick(ARROW_UP);
        assert_eq!(engine.report(), FrameReport { step: 1, length: 4, score: 1, bites: 0 });
    }

    #[test]
    fn plain_step_reports_no_collision() {
        let mut engine = engine();
        engine.tick(ARROW_UP);
        assert_eq!(engine.last_collision(), Collision::None);
        assert_eq!(engine.len(), 3);
    }

    #[test]
    fn reversing_bites_and_resets_keeping_direction() {
        let mut engine = engine();
        engine.food = Some(Cell::new(20, 19));
        engine.tick(ARROW_UP);
        assert_eq!(engine.score(), 1);

        engine.tick(ARROW_DOWN);

        assert_eq!(engine.last_collision(), Collision::Snake);
        assert_eq!(engine.bites(), 1);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.direction(), Direction::Down);
        assert_eq!(
            engine.body(),
            vec![Cell::new(20, 20), Cell::new(20, 19), Cell::new(20, 18)]
        );
        assert!(!engine.body().contains(&engine.food().expect("food")));
        assert_eq!(engine.steps(), 2);
    }

    /// Up then Down on a length-3 snake: the head re-enters (20, 20) and
    /// the reset snake faces Down, covering (20, 20), (20, 19), (20, 18).
    fn bite_by_reversal(engine: &mut SimulationEngine, food_before_bite: Option<Cell>) {
        engine.tick(ARROW_UP);
        engine.food = food_before_bite;
        engine.tick(ARROW_DOWN);
        assert_eq!(engine.last_collision(), Collision::Snake);
    }

    #[test]
    fn bite_respawns_food_covered_by_reset_snake() {
        let mut engine = engine();
        bite_by_reversal(&mut engine, Some(Cell::new(20, 18)));

        assert_eq!(
            engine.body(),
            vec![Cell::new(20, 20), Cell::new(20, 19), Cell::new(20, 18)]
        );
        let food = engine.food().expect("food respawned");
        assert_ne!(food, Cell::new(20, 18));
        assert!(!engine.body().contains(&food));
    }

    #[test]
    fn bite_keeps_food_clear_of_reset_snake() {
        let mut engine = engine();
        bite_by_reversal(&mut engine, Some(Cell::new(0, 0)));
        assert_eq!(engine.food(), Some(Cell::new(0, 0)));
    }

    #[test]
    fn bite_spawns_food_when_none_is_placed() {
        let mut engine = engine();
        bite_by_reversal(&mut engine, None);

        let food = engine.food().expect("food spawned after reset");
        assert!(!engine.body().contains(&food));
    }

    #[test]
    fn moving_into_vacated_tail_is_not_a_bite() {
        let mut engine = engine();
        // Length-4 snake curled into a 2x2 square: every step enters the tail cell.
        engine.snake = Snake::from_cells(
            &[Cell::new(10, 10), Cell::new(10, 11), Cell::new(9, 11), Cell::new(9, 10)],
            Direction::Up,
        );
        for key in [ARROW_LEFT, ARROW_DOWN, ARROW_RIGHT, ARROW_UP, ARROW_LEFT] {
            engine.tick(key);
            assert_ne!(engine.last_collision(), Collision::Snake, "key {}", key);
        }
        assert_eq!(engine.bites(), 0);
        assert_eq!(engine.len(), 4);
    }

    #[test]
    fn reversal_guard_ignores_opposite_key() {
        let mut engine = SimulationEngine::create_with_config(
            &mut registry(),
            "canvas",
            GameConfig::default().with_seed(3).with_reversal_guard(true),
        )
        .expect("bind");
        engine.food = Some(Cell::new(0, 0));

        engine.tick(ARROW_DOWN);
        assert_eq!(engine.direction(), Direction::Up);
        assert_eq!(engine.head(), Cell::new(20, 19));
        assert_eq!(engine.bites(), 0);

        engine.tick(ARROW_LEFT);
        assert_eq!(engine.direction(), Direction::Left);
    }

    //=====================================================================
    // Rendering
    //=====================================================================

    #[test]
    fn render_draws_snake_and_food() {
        let mut engine = engine();
        engine.food = Some(Cell::new(1, 2));
        engine.tick(ARROW_UP);

        let surface = engine.surface();
        assert_eq!(surface.pixel(10, 20), Some(FOOD_COLOR));
        assert_eq!(surface.pixel(19, 29), Some(FOOD_COLOR));
        assert_eq!(surface.pixel(200, 190), Some(SNAKE_COLOR));
        assert_eq!(surface.pixel(209, 219), Some(SNAKE_COLOR));
    }

    #[test]
    fn render_replaces_previous_frame() {
        let mut engine = engine();
        engine.tick(ARROW_UP);
        // Old tail at (20, 22) must be gone after the frame is redrawn.
        assert_eq!(engine.surface().pixel(205, 225), Some(BACKGROUND));
        assert_eq!(engine.surface().pixel(205, 215), Some(SNAKE_COLOR));
    }

    //=====================================================================
    // Properties
    //=====================================================================

    fn key_strategy() -> impl Strategy<Value = i32> {
        prop_oneof![
            4 => prop::sample::select(vec![ARROW_LEFT, ARROW_UP, ARROW_RIGHT, ARROW_DOWN]),
            1 => any::<i32>(),
        ]
    }

    proptest! {
        #[test]
        fn direction_tracks_last_valid_key(keys in prop::collection::vec(key_strategy(), 1..200)) {
            let mut engine = seeded();
            let mut expected = Direction::Up;

            for (i, key) in keys.iter().enumerate() {
                if let Some(direction) = Direction::from_key_code(*key) {
                    expected = direction;
                }
                engine.tick(*key);

                prop_assert_eq!(engine.direction(), expected);
                prop_assert_eq!(engine.steps(), i as u64 + 1);
                prop_assert_eq!(frames(&engine), i as u64 + 1);
                prop_assert!(engine.len() >= 3);
            }
        }
    }
}
