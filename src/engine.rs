//=========================================================================
// Serpent Engine
//
// Main entry point and coordinator for a native game session.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tick_period()      ├─ binds SimulationEngine to a Canvas
//         ├─ with_game_config()      ├─ starts Interval (timer thread)
//         └─ with_surface_id() ...   ├─ runs Platform (blocks until exit)
//                                    └─ stops Interval
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use crossbeam_channel::{bounded, TrySendError};
use log::{error, info, warn};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::{KeyCell, DEFAULT_KEY_CODE};
use crate::core::render::{BindingError, Canvas, SurfaceRegistry};
use crate::core::schedule::{Interval, PeriodicTask, ScheduleError};
use crate::core::sim::{FrameReport, GameConfig, SimulationEngine};
use crate::platform::{Platform, PlatformError};

//=== EngineError =========================================================

/// Anything that can end a session early.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Binding(#[from] BindingError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Platform(#[from] PlatformError),
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Tick period**: 100 ms
/// - **Surface id**: `"canvas"`
/// - **Initial key**: 37 (left arrow)
/// - **Window title**: `"Serpent"`
/// - **Frame channel capacity**: 16 reports
/// - **Game**: [`GameConfig::default()`]
///
/// # Examples
///
/// Simple usage with defaults:
/// ```no_run
/// use serpent_engine::EngineBuilder;
///
/// EngineBuilder::new().build().run()?;
/// # Ok::<(), serpent_engine::EngineError>(())
/// ```
///
/// Advanced configuration:
/// ```no_run
/// use std::time::Duration;
/// use serpent_engine::EngineBuilder;
/// use serpent_engine::core::sim::GameConfig;
///
/// EngineBuilder::new()
///     .with_tick_period(Duration::from_millis(80))
///     .with_game_config(GameConfig::default().with_board(600, 20).with_seed(7))
///     .with_window_title("Faster Serpent")
///     .build()
///     .run()?;
/// # Ok::<(), serpent_engine::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    tick_period: Duration,
    surface_id: String,
    initial_key: i32,
    window_title: String,
    frame_capacity: usize,
    game: GameConfig,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tick_period: Duration::from_millis(100),
            surface_id: "canvas".to_owned(),
            initial_key: DEFAULT_KEY_CODE,
            window_title: "Serpent".to_owned(),
            frame_capacity: 16,
            game: GameConfig::default(),
        }
    }

    /// Sets the wall-clock time between two simulation ticks.
    ///
    /// Default: 100 ms
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        assert!(!period.is_zero(), "Tick period must be positive");
        self.tick_period = period;
        self
    }

    /// Sets the handle the canvas is registered and bound under.
    ///
    /// # Panics
    ///
    /// Panics if `id` is empty.
    pub fn with_surface_id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        assert!(!id.is_empty(), "Surface id must not be empty");
        self.surface_id = id;
        self
    }

    /// Sets the key code observed before the first key press.
    ///
    /// Default: 37 (left arrow)
    pub fn with_initial_key(mut self, code: i32) -> Self {
        self.initial_key = code;
        self
    }

    /// Sets the window title prefix.
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    /// Sets how many frame reports may wait for the platform.
    ///
    /// Reports beyond this are dropped; only the newest matters.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_frame_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Frame capacity must be positive");
        self.frame_capacity = capacity;
        self
    }

    /// Sets board geometry, seed and rule switches.
    pub fn with_game_config(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!(
            "Building engine (tick: {:?}, surface: {:?}, board: {}px / {}px)",
            self.tick_period, self.surface_id, self.game.grid_size, self.game.square_size
        );

        Engine { config: self }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Serpent runtime.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► Interval (Timer Thread @ tick period)
///   │     └─► keys.get() → SimulationEngine::tick → FrameReport
///   │
///   └─► Platform (Event Loop)
///         └─► Window, key presses → KeyCell
/// ```
pub struct Engine {
    config: EngineBuilder,
}

impl Engine {
    /// Binds the simulation, starts ticking and blocks until the window
    /// is closed.
    ///
    /// # Lifecycle
    ///
    /// 1. Registers a canvas under the surface id and binds the simulation
    /// 2. Starts the interval: each tick samples the key cell, ticks the
    ///    simulation and publishes a frame report
    /// 3. Runs the platform event loop (blocks here)
    /// 4. Stops the interval once the platform returns
    ///
    /// # Errors
    ///
    /// Binding and timer failures abort before the window opens. A
    /// platform failure is returned after the interval has been stopped.
    pub fn run(self) -> Result<(), EngineError> {
        let config = self.config;
        info!("Starting engine runtime (tick: {:?})", config.tick_period);

        //--- 1. Bind the simulation ---------------------------------------
        let mut simulation = Self::bind(&config)?;

        //--- 2. Start the host timer --------------------------------------
        let keys = KeyCell::new(config.initial_key);
        let tick_keys = keys.clone();
        let (frame_tx, frame_rx) = bounded::<FrameReport>(config.frame_capacity);

        let mut interval = Interval::start(config.tick_period, move || {
            simulation.tick(tick_keys.get());

            match frame_tx.try_send(simulation.report()) {
                Ok(()) | Err(TrySendError::Full(_)) => {}
                Err(TrySendError::Disconnected(_)) => {
                    warn!("Platform gone, frame report dropped");
                }
            }
        })?;

        //--- 3. Run the platform ------------------------------------------
        let platform = Platform::new(keys, frame_rx, config.window_title, config.game.grid_size);
        let outcome = platform.run();

        if let Err(e) = &outcome {
            error!("Platform error: {}", e);
        }
        info!("Platform event loop exited");

        //--- 4. Cleanup ---------------------------------------------------
        interval.stop();
        info!("Engine shutdown complete");

        outcome.map_err(EngineError::from)
    }

    /// Registers the canvas and binds a simulation to it.
    fn bind(config: &EngineBuilder) -> Result<SimulationEngine, BindingError> {
        let mut registry = SurfaceRegistry::new();
        let size = config.game.grid_size;
        registry.insert(config.surface_id.clone(), Canvas::new(size, size));

        SimulationEngine::create_with_config(&mut registry, &config.surface_id, config.game.clone())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
