//! Process-wide theme state.
//!
//! The [`ThemeRegistry`] is a small subject: it owns the current
//! [`ThemeMode`], a stack of toggle targets (one per mounted
//! [`ThemeScope`](crate::ThemeScope)), and a set of observers interested in
//! mode changes.
//!
//! # Dispatch
//!
//! A toggle request is delivered to exactly one target: the most recently
//! subscribed one that is still alive. The target flips its own state and
//! reports the new mode, which the registry records before the lock is
//! released, so the registry and the active scope never disagree.
//!
//! When the active target goes away, the previous live target takes over and
//! is re-synced to the registry's mode. The mode itself is never reset: a
//! scope mounted after all others were dropped starts where the last one left
//! off.
//!
//! # Example
//!
//! ```rust
//! use evote_ui::{ThemeMode, ThemeRegistry, ThemeScope};
//!
//! let registry = ThemeRegistry::new();
//! assert!(registry.try_toggle().is_err());
//!
//! let scope = ThemeScope::mount(&registry);
//! registry.request_toggle();
//! assert_eq!(registry.mode(), ThemeMode::Light);
//! assert_eq!(scope.mode(), ThemeMode::Light);
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, error};

use crate::error::ThemeError;
use crate::theme::ThemeMode;

static GLOBAL: ThemeRegistry = ThemeRegistry::with_mode(ThemeMode::Dark);

/// Something that owns a mode and can flip it on request.
///
/// Implemented by scope state. The registry calls into targets while holding
/// its own lock, so implementations must not call back into the registry.
pub trait ToggleTarget: Send + Sync {
    /// Flips the target's mode and returns the new value.
    fn flip(&self) -> ThemeMode;

    /// Overwrites the target's mode with the registry's.
    fn sync(&self, mode: ThemeMode);
}

/// Callback run after every mode change.
pub type ModeObserver = Arc<dyn Fn(ThemeMode) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct RegistryState {
    mode: ThemeMode,
    targets: Vec<(SubscriptionId, Arc<dyn ToggleTarget>)>,
    observers: Vec<(SubscriptionId, ModeObserver)>,
    next_id: u64,
}

impl RegistryState {
    fn allocate_id(&mut self) -> SubscriptionId {
        self.next_id += 1;
        SubscriptionId(self.next_id)
    }

    fn active(&self) -> Option<&(SubscriptionId, Arc<dyn ToggleTarget>)> {
        self.targets.last()
    }

    fn observers(&self) -> Vec<ModeObserver> {
        self.observers.iter().map(|(_, o)| Arc::clone(o)).collect()
    }
}

/// Holds the current mode and routes toggle requests to the active scope.
///
/// Use [`ThemeRegistry::global`] for the application-wide instance. Separate
/// instances are handy in tests and embedded previews.
pub struct ThemeRegistry {
    state: Mutex<RegistryState>,
}

impl ThemeRegistry {
    /// Creates a registry starting in dark mode.
    pub const fn new() -> Self {
        Self::with_mode(ThemeMode::Dark)
    }

    /// Creates a registry starting in `mode`.
    pub const fn with_mode(mode: ThemeMode) -> Self {
        Self {
            state: Mutex::new(RegistryState {
                mode,
                targets: Vec::new(),
                observers: Vec::new(),
                next_id: 0,
            }),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static ThemeRegistry {
        &GLOBAL
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        // The state is only ever written whole, so a poisoned lock is still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn mode(&self) -> ThemeMode {
        self.lock().mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    /// Whether any scope is mounted.
    pub fn is_mounted(&self) -> bool {
        !self.lock().targets.is_empty()
    }

    pub fn mounted_count(&self) -> usize {
        self.lock().targets.len()
    }

    pub(crate) fn active_id(&self) -> Option<SubscriptionId> {
        self.lock().active().map(|(id, _)| *id)
    }

    /// Moves the registry to `mode`.
    ///
    /// With a scope mounted this is a toggle routed through the active scope
    /// (or nothing, if the mode already matches). Without one it seeds the
    /// value the next mount will start from.
    pub fn set_mode(&self, mode: ThemeMode) {
        let mut state = self.lock();
        if state.mode == mode {
            return;
        }
        let next = match state.active() {
            Some((_, target)) => target.flip(),
            None => mode,
        };
        state.mode = next;
        let observers = state.observers();
        drop(state);

        debug!(mode = %next, "theme mode set");
        notify(&observers, next);
    }

    /// Registers the toggle target of a newly mounted scope.
    ///
    /// The target is synced to the current mode and becomes the active one.
    /// Dropping the returned [`Subscription`] unregisters it.
    pub fn subscribe(&self, target: Arc<dyn ToggleTarget>) -> Subscription<'_> {
        let mut state = self.lock();
        let id = state.allocate_id();
        target.sync(state.mode);
        state.targets.push((id, target));
        let depth = state.targets.len();
        drop(state);

        debug!(subscription = %id, depth, "theme target subscribed");
        Subscription { registry: self, id }
    }

    /// Registers a callback run after every mode change.
    ///
    /// Observers are called outside the registry lock and may read the registry.
    pub fn observe<F>(&self, observer: F) -> Subscription<'_>
    where
        F: Fn(ThemeMode) + Send + Sync + 'static,
    {
        let mut state = self.lock();
        let id = state.allocate_id();
        state.observers.push((id, Arc::new(observer)));
        Subscription { registry: self, id }
    }

    /// Flips the mode through the active scope.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::NotMounted`] when no scope is mounted; the mode is
    /// left unchanged.
    pub fn try_toggle(&self) -> Result<ThemeMode, ThemeError> {
        let mut state = self.lock();
        let (id, target) = state.active().ok_or(ThemeError::NotMounted)?;
        let id = *id;
        let next = target.flip();
        state.mode = next;
        let observers = state.observers();
        drop(state);

        debug!(subscription = %id, mode = %next, "theme toggled");
        notify(&observers, next);
        Ok(next)
    }

    /// Flips the mode from anywhere in the application.
    ///
    /// Calling this before any scope has mounted is logged and ignored.
    pub fn request_toggle(&self) {
        if let Err(err) = self.try_toggle() {
            error!(%err, "theme toggle ignored");
        }
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        let mut state = self.lock();
        let was_active = state.active().is_some_and(|(active, _)| *active == id);
        state.targets.retain(|(sid, _)| *sid != id);
        state.observers.retain(|(sid, _)| *sid != id);

        if was_active {
            let mode = state.mode;
            if let Some((next_id, next)) = state.active() {
                next.sync(mode);
                debug!(subscription = %id, next = %next_id, %mode, "active theme target handed over");
            } else {
                debug!(subscription = %id, %mode, "last theme target unsubscribed");
            }
        }
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ThemeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("ThemeRegistry")
            .field("mode", &state.mode)
            .field("targets", &state.targets.len())
            .field("observers", &state.observers.len())
            .finish()
    }
}

fn notify(observers: &[ModeObserver], mode: ThemeMode) {
    for observer in observers {
        observer(mode);
    }
}

/// Keeps a target or observer registered until dropped.
#[must_use = "dropping a subscription unregisters it immediately"]
pub struct Subscription<'r> {
    registry: &'r ThemeRegistry,
    id: SubscriptionId,
}

impl Subscription<'_> {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl fmt::Debug for Subscription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Subscription").field(&self.id).finish()
    }
}

impl Drop for Subscription<'_> {
    fn drop(&mut self) {
        self.registry.unsubscribe(self.id);
    }
}
