//! Shared calculator state for the web service.
//!
//! The calculation core is stateless. The only thing a running server keeps
//! between requests is the last valid speed/distance pair, so a reloaded
//! page comes back with the user's previous inputs.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use pitch_equiv::services::SharedCalculatorState;
//! use pitch_equiv::{CalculatorInputs, Config};
//!
//! let state = Arc::new(SharedCalculatorState::new(Config::default()));
//!
//! // Reads take a copy of the last inputs
//! let inputs = state.inputs();
//!
//! // Recompute stores the inputs only when they are valid
//! let view = state.recompute(CalculatorInputs::new(70.0, 46.0))?;
//! ```

use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::config::Config;
use crate::session::{CalculatorInputs, CalculatorView};
use crate::validation::ValidationReport;

// ============================================================================
// Shared Calculator State
// ============================================================================

/// State shared by every request handler.
///
/// # Thread Safety
///
/// - `CalculatorInputs` is `Copy`, so the lock is held only long enough to
///   read or overwrite two numbers. Computation happens outside the lock.
/// - A poisoned lock is recovered rather than propagated: the guarded value
///   is plain data and cannot be left half-written.
pub struct SharedCalculatorState {
    /// Last inputs that passed validation
    last_inputs: Mutex<CalculatorInputs>,

    /// Application configuration (read-only after startup)
    config: Config,
}

impl SharedCalculatorState {
    /// Create new shared state, starting from the configured default inputs.
    pub fn new(config: Config) -> Self {
        Self {
            last_inputs: Mutex::new(config.calculator.initial_inputs()),
            config,
        }
    }

    /// Configuration the server was started with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the last inputs with a mutable lock.
    ///
    /// The closure pattern prevents accidentally holding the lock across
    /// await points.
    pub fn with_inputs<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut CalculatorInputs) -> R,
    {
        let mut guard = self
            .last_inputs
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Copy of the last valid inputs.
    pub fn inputs(&self) -> CalculatorInputs {
        self.with_inputs(|inputs| *inputs)
    }

    /// Recompute for `inputs` and remember them if they are valid.
    ///
    /// Invalid inputs leave the stored value untouched.
    pub fn recompute(&self, inputs: CalculatorInputs) -> Result<CalculatorView, ValidationReport> {
        let view = inputs.recompute()?;
        self.with_inputs(|last| *last = inputs);
        debug!(
            speed_mph = inputs.speed_mph,
            distance_ft = inputs.distance_ft,
            "stored last inputs"
        );
        Ok(view)
    }
}

impl Default for SharedCalculatorState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
