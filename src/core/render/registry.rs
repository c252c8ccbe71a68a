//=========================================================================
// Surface Registry
//=========================================================================
//
// Resolves string handles (e.g. "canvas") to drawable surfaces.
//
// Plays the part of the host document: the host registers surfaces by
// id, and the simulation binds one of them at creation time. Binding
// moves the surface out of the registry, so a handle can be bound at
// most once.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::Surface;

//=== BindingError ========================================================

/// Failure to bind a simulation to a surface. Fatal to initialization.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindingError {
    /// No surface is registered under the handle.
    #[error("no surface registered under id {0:?}")]
    NotFound(String),

    /// The surface was already bound by another simulation.
    #[error("surface {0:?} is already bound")]
    AlreadyBound(String),

    /// The surface cannot hold the board.
    #[error("surface {id:?} is {actual_width}x{actual_height}px, board needs {required}x{required}px")]
    SurfaceTooSmall {
        id: String,
        required: u32,
        actual_width: u32,
        actual_height: u32,
    },

    /// The board geometry cannot be laid out on any surface.
    #[error("surface {id:?}: {grid_size}px board of {square_size}px squares is not a valid board")]
    InvalidBoard {
        id: String,
        grid_size: u32,
        square_size: u32,
    },
}

//=== SurfaceRegistry =====================================================

/// Owns unbound surfaces, keyed by handle.
///
/// A slot holding `None` marks a handle whose surface has been bound.
#[derive(Default)]
pub struct SurfaceRegistry {
    slots: HashMap<String, Option<Box<dyn Surface>>>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `surface` under `id`, replacing any unbound surface there.
    pub fn insert<S>(&mut self, id: impl Into<String>, surface: S)
    where
        S: Surface + 'static,
    {
        let id = id.into();
        debug!(target: "render", "Registering surface {:?} ({}x{})", id, surface.width(), surface.height());

        if let Some(Some(_)) = self.slots.insert(id.clone(), Some(Box::new(surface))) {
            warn!(target: "render", "Surface {:?} was already registered and has been replaced", id);
        }
    }

    /// Returns `true` if a surface was ever registered under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.slots.contains_key(id)
    }

    /// Returns `true` if the surface under `id` has been bound.
    pub fn is_bound(&self, id: &str) -> bool {
        matches!(self.slots.get(id), Some(None))
    }

    /// Borrows the unbound surface under `id` without binding it.
    pub fn get(&self, id: &str) -> Result<&dyn Surface, BindingError> {
        match self.slots.get(id) {
            None => Err(BindingError::NotFound(id.to_owned())),
            Some(slot) => slot
                .as_deref()
                .ok_or_else(|| BindingError::AlreadyBound(id.to_owned())),
        }
    }

    /// Takes exclusive ownership of the surface registered under `id`.
    pub fn bind(&mut self, id: &str) -> Result<Box<dyn Surface>, BindingError> {
        match self.slots.get_mut(id) {
            None => Err(BindingError::NotFound(id.to_owned())),
            Some(slot) => slot
                .take()
                .ok_or_else(|| BindingError::AlreadyBound(id.to_owned())),
        }
    }
}

impl std::fmt::Debug for SurfaceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (id, slot) in &self.slots {
            map.entry(id, &if slot.is_some() { "unbound" } else { "bound" });
        }
        map.finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::Canvas;

    #[test]
    fn bind_unknown_id_fails() {
        let mut registry = SurfaceRegistry::new();
        let err = registry.bind("missing").err();
        assert_eq!(err, Some(BindingError::NotFound("missing".into())));
    }

    #[test]
    fn bind_returns_registered_surface() {
        let mut registry = SurfaceRegistry::new();
        registry.insert("canvas", Canvas::new(40, 30));

        let surface = registry.bind("canvas").expect("surface should bind");
        assert_eq!((surface.width(), surface.height()), (40, 30));
        assert!(registry.contains("canvas"));
        assert!(registry.is_bound("canvas"));
    }

    #[test]
    fn second_bind_fails_with_already_bound() {
        let mut registry = SurfaceRegistry::new();
        registry.insert("canvas", Canvas::new(1, 1));

        assert!(registry.bind("canvas").is_ok());
        let err = registry.bind("canvas").err();
        assert_eq!(err, Some(BindingError::AlreadyBound("canvas".into())));
    }

    #[test]
    fn get_peeks_without_binding() {
        let mut registry = SurfaceRegistry::new();
        registry.insert("canvas", Canvas::new(40, 30));

        let surface = registry.get("canvas").expect("surface registered");
        assert_eq!((surface.width(), surface.height()), (40, 30));
        assert!(!registry.is_bound("canvas"));

        let _ = registry.bind("canvas");
        assert_eq!(registry.get("canvas").err(), Some(BindingError::AlreadyBound("canvas".into())));
        assert_eq!(registry.get("missing").err(), Some(BindingError::NotFound("missing".into())));
    }

    #[test]
    fn reinsert_makes_handle_bindable_again() {
        let mut registry = SurfaceRegistry::new();
        registry.insert("canvas", Canvas::new(1, 1));
        let _ = registry.bind("canvas");

        registry.insert("canvas", Canvas::new(2, 2));
        assert!(!registry.is_bound("canvas"));
        assert_eq!(registry.bind("canvas").map(|s| s.width()).ok(), Some(2));
    }

    #[test]
    fn error_messages_name_the_handle() {
        let msg = BindingError::NotFound("canvas".into()).to_string();
        assert!(msg.contains("\"canvas\""));

        let msg = BindingError::SurfaceTooSmall {
            id: "small".into(),
            required: 400,
            actual_width: 100,
            actual_height: 50,
        }
        .to_string();
        assert!(msg.contains("100x50px"));
        assert!(msg.contains("400x400px"));
    }
}
