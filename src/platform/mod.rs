//=========================================================================
// Platform Subsystem
//
// Native host for the simulation: a winit window that plays the part of
// the browser page around the game.
//
// Architecture:
// ```text
//  Main Thread (winit):                 Timer Thread:
//  ┌──────────────────────────┐        ┌────────────────────────┐
//  │  Winit Event Loop        │        │  Interval (period)     │
//  │   ↓                      │        │   ↓                    │
//  │  KeyboardInput           │        │  keys.get()            │
//  │   ↓                      │        │   ↓                    │
//  │  InputProcessor ─ i32 ───┼─KeyCell┼─>SimulationEngine::tick│
//  │                          │        │   ↓                    │
//  │  about_to_wait           │        │  FrameReport           │
//  │   └─ window title <──────┼────────┼───┘ (bounded channel)  │
//  └──────────────────────────┘        └────────────────────────┘
// ```
//
// Key Design Decisions:
// - **Last key wins**: presses overwrite the key cell; nothing is queued
// - **Stats-only host**: the window body stays blank and the board is
//   never drawn into it. The simulation renders into an in-memory canvas;
//   the title bar shows length, score and bites from the newest report
// - **Graceful channel disconnect**: if the timer side goes away the
//   platform keeps running so the user can still close the window
// - **Main thread requirement**: winit mandates the main thread on
//   macOS/iOS, so this runs on the thread that called `Engine::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;

//=== External Crates =====================================================

use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use log::*;
use thiserror::Error;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::input::KeyCell;
use crate::core::sim::FrameReport;
use input_processor::InputProcessor;

/// How often the title is refreshed while idle.
const TITLE_REFRESH: Duration = Duration::from_millis(50);

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are fatal: without an event loop there is no host.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Failed to create the event loop (OS-level issue).
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(#[source] winit::error::EventLoopError),

    /// The event loop terminated with an error.
    #[error("event loop error: {0}")]
    EventLoopExecution(#[source] winit::error::EventLoopError),
}

//=== Platform ============================================================

/// Window owner and host input collaborator.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(keys, frames, ...)`
/// 2. **Execution**: `platform.run()` blocks in the winit event loop
/// 3. **Shutdown**: window closed → event loop exits → `run()` returns
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// Window title prefix and initial size.
    title: String,
    size: u32,

    /// Slot written on every mapped key press.
    keys: KeyCell,

    /// Frame reports published by the timer thread.
    frames: Receiver<FrameReport>,
    last_report: Option<FrameReport>,

    input_processor: InputProcessor,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(
        keys: KeyCell,
        frames: Receiver<FrameReport>,
        title: impl Into<String>,
        size: u32,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            title: title.into(),
            size,
            keys,
            frames,
            last_report: None,
            input_processor: InputProcessor::new(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window is closed.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// exits with an error.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread on platforms that require it.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)?;

        info!(
            target: "platform",
            "Event loop finished after {} key presses",
            self.input_processor.presses()
        );
        Ok(())
    }

    //--- Internal Helpers -------------------------------------------------

    /// Shows the newest frame report in the window title.
    fn sync_title(&mut self) {
        let Some(report) = self.frames.try_iter().last() else {
            return;
        };
        if self.last_report == Some(report) {
            return;
        }
        self.last_report = Some(report);

        if let Some(window) = &self.window {
            window.set_title(&format_title(&self.title, &report));
        }
    }
}

/// Window title for a frame report.
fn format_title(prefix: &str, report: &FrameReport) -> String {
    format!(
        "{} | length {} | score {} | bites {}",
        prefix, report.length, report.score, report.bites
    )
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first resume.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.size, self.size));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match self.input_processor.process_key_event(key_event) {
                    Some(code) => {
                        trace!(target: "platform::input", "Key code {}", code);
                        self.keys.set(code);
                    }
                    None => trace!(target: "platform::input", "Key event ignored"),
                }
            }

            WindowEvent::RedrawRequested => self.sync_title(),

            _ => {
                // Ignore: Resized, Focused, mouse, etc.
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.sync_title();
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + TITLE_REFRESH));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
