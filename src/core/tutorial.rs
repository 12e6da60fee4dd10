//! Guided-tutorial flags and step progression
//!
//! Two flags persist across reloads and gate whether the tutorial overlay
//! auto-starts. The step cursor itself is memory-only: a reload restarts
//! an unfinished tutorial from the beginning.

use crate::storage::Storage;
use crate::Result;
use tracing::debug;

/// Storage key for the user-facing "show tutorial" toggle
pub const KEY_TUTORIAL_ENABLED: &str = "tutorial_enabled";
/// Storage key for the "tutorial finished or skipped" flag
pub const KEY_TUTORIAL_COMPLETED: &str = "tutorial_completed";

/// Tutorial step enum, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialStep {
    /// Welcome panel
    Welcome,
    /// Bottom navigation walkthrough
    Navigation,
    /// Adding items to the cart
    Cart,
    /// Placing an order
    Checkout,
    /// Closing panel
    Finish,
}

impl TutorialStep {
    /// All steps in presentation order
    pub const ALL: [TutorialStep; 5] = [
        TutorialStep::Welcome,
        TutorialStep::Navigation,
        TutorialStep::Cart,
        TutorialStep::Checkout,
        TutorialStep::Finish,
    ];

    /// Converts the enum to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TutorialStep::Welcome => "welcome",
            TutorialStep::Navigation => "navigation",
            TutorialStep::Cart => "cart",
            TutorialStep::Checkout => "checkout",
            TutorialStep::Finish => "finish",
        }
    }
}

/// Drives the guided tutorial overlay
#[derive(Debug, Clone)]
pub struct TutorialController {
    enabled: bool,
    completed: bool,
    cursor: Option<usize>,
}

impl TutorialController {
    /// Loads the persisted flags; missing keys fall back to the defaults
    /// (enabled, not completed)
    pub fn load(storage: &dyn Storage) -> Self {
        let enabled = storage
            .get(KEY_TUTORIAL_ENABLED)
            .map(|v| v == "true")
            .unwrap_or(true);
        let completed = storage
            .get(KEY_TUTORIAL_COMPLETED)
            .map(|v| v == "true")
            .unwrap_or(false);
        Self {
            enabled,
            completed,
            cursor: None,
        }
    }

    /// Whether the overlay should open on its own after launch
    pub fn should_auto_start(&self) -> bool {
        self.enabled && !self.completed
    }

    /// Whether the tutorial toggle is on
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the tutorial was finished or skipped before
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether a tutorial run is in progress
    pub fn is_running(&self) -> bool {
        self.cursor.is_some()
    }

    /// The step currently shown, if a run is in progress
    pub fn current_step(&self) -> Option<TutorialStep> {
        self.cursor.map(|i| TutorialStep::ALL[i])
    }

    /// Begins a run at the first step
    pub fn start(&mut self) {
        debug!("tutorial started");
        self.cursor = Some(0);
    }

    /// Moves to the next step; finishing the last step marks the tutorial
    /// completed and persists the flag. No-op when no run is in progress.
    pub fn advance(&mut self, storage: &mut dyn Storage) -> Result<()> {
        let Some(index) = self.cursor else {
            return Ok(());
        };
        if index + 1 < TutorialStep::ALL.len() {
            self.cursor = Some(index + 1);
            Ok(())
        } else {
            self.finish(storage)
        }
    }

    /// Abandons the run and marks the tutorial completed
    pub fn skip(&mut self, storage: &mut dyn Storage) -> Result<()> {
        debug!("tutorial skipped");
        self.finish(storage)
    }

    /// Flips the user-facing toggle and persists it
    ///
    /// Re-enabling also clears the completed flag so the overlay can
    /// auto-start again.
    pub fn set_enabled(&mut self, enabled: bool, storage: &mut dyn Storage) -> Result<()> {
        self.enabled = enabled;
        storage.set(KEY_TUTORIAL_ENABLED, bool_str(enabled))?;
        if enabled {
            self.completed = false;
            storage.set(KEY_TUTORIAL_COMPLETED, bool_str(false))?;
        }
        Ok(())
    }

    fn finish(&mut self, storage: &mut dyn Storage) -> Result<()> {
        self.cursor = None;
        self.completed = true;
        storage.set(KEY_TUTORIAL_COMPLETED, bool_str(true))
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
