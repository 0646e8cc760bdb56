//! Theme scopes: the bridge between the registry and a render tree.
//!
//! A [`ThemeScope`] owns the authoritative mode while it is mounted. Mounting
//! seeds it from the [`ThemeRegistry`] and registers it as the registry's
//! toggle target; dropping it unmounts. Each [`render`](ThemeScope::render)
//! resolves the definition once and hands it to the whole tree.

pub mod context;

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::components::Component;
use crate::error::{RenderError, ThemeError};
use crate::registry::{Subscription, ThemeRegistry, ToggleTarget};
use crate::render::{RenderContext, Renderer};
use crate::theme::{catalog, ThemeDefinition, ThemeMode};

/// Render state owned by one scope.
struct ScopeState {
    is_dark: AtomicBool,
    revision: AtomicU64,
}

impl ScopeState {
    fn new(mode: ThemeMode) -> Self {
        Self {
            is_dark: AtomicBool::new(mode.is_dark()),
            revision: AtomicU64::new(0),
        }
    }

    fn mode(&self) -> ThemeMode {
        ThemeMode::from_dark(self.is_dark.load(Ordering::Acquire))
    }
}

impl ToggleTarget for ScopeState {
    fn flip(&self) -> ThemeMode {
        let was_dark = self.is_dark.fetch_xor(true, Ordering::AcqRel);
        self.revision.fetch_add(1, Ordering::AcqRel);
        ThemeMode::from_dark(!was_dark)
    }

    fn sync(&self, mode: ThemeMode) {
        let was_dark = self.is_dark.swap(mode.is_dark(), Ordering::AcqRel);
        if was_dark != mode.is_dark() {
            self.revision.fetch_add(1, Ordering::AcqRel);
        }
    }
}

/// One rendered pass.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Mode the pass rendered under.
    pub mode: ThemeMode,
    /// Scope revision at the start of the pass.
    pub revision: u64,
    /// Definition every component in the pass received.
    pub theme: &'static ThemeDefinition,
    pub output: String,
}

/// A mounted theme provider.
///
/// # Example
///
/// ```rust
/// use evote_ui::{ThemeMode, ThemeRegistry, ThemeScope};
///
/// let registry = ThemeRegistry::new();
/// {
///     let scope = ThemeScope::mount(&registry);
///     scope.toggle().unwrap();
///     assert_eq!(scope.mode(), ThemeMode::Light);
/// }
/// // Unmounting keeps the registry's value; the next mount resumes it.
/// let scope = ThemeScope::mount(&registry);
/// assert_eq!(scope.mode(), ThemeMode::Light);
/// ```
pub struct ThemeScope<'r> {
    registry: &'r ThemeRegistry,
    state: Arc<ScopeState>,
    subscription: Subscription<'r>,
}

impl<'r> ThemeScope<'r> {
    /// Mounts a scope on `registry`, making it the active toggle target.
    pub fn mount(registry: &'r ThemeRegistry) -> Self {
        let state = Arc::new(ScopeState::new(registry.mode()));
        let subscription = registry.subscribe(Arc::clone(&state) as Arc<dyn ToggleTarget>);
        debug!(scope = %subscription.id(), mode = %state.mode(), "theme scope mounted");
        Self {
            registry,
            state,
            subscription,
        }
    }

    pub fn registry(&self) -> &'r ThemeRegistry {
        self.registry
    }

    pub fn mode(&self) -> ThemeMode {
        self.state.mode()
    }

    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    /// The definition for the scope's current mode.
    pub fn theme(&self) -> &'static ThemeDefinition {
        catalog::resolve(self.mode())
    }

    /// Increments whenever the scope's mode changes.
    ///
    /// Event loops compare this against the revision of their last frame to
    /// decide whether to render again.
    pub fn revision(&self) -> u64 {
        self.state.revision.load(Ordering::Acquire)
    }

    /// Whether toggle requests currently reach this scope.
    pub fn is_active(&self) -> bool {
        self.registry.active_id() == Some(self.subscription.id())
    }

    /// Requests a toggle through the registry.
    ///
    /// The request goes to the active scope, which is this one unless a
    /// newer scope is mounted on the same registry.
    pub fn toggle(&self) -> Result<ThemeMode, ThemeError> {
        self.registry.try_toggle()
    }

    /// Runs `f` with this scope's theme provided to the ambient context.
    pub fn provide<R>(&self, f: impl FnOnce(&'static ThemeDefinition) -> R) -> R {
        let theme = self.theme();
        let _guard = context::provide(theme);
        f(theme)
    }

    /// Renders `root` and everything below it under one theme.
    pub fn render(&self, renderer: &Renderer, root: &dyn Component) -> Result<Frame, RenderError> {
        let revision = self.revision();
        let theme = self.theme();
        let _guard = context::provide(theme);
        let cx = RenderContext::new(renderer, theme);
        let output = root.render(&cx)?;
        Ok(Frame {
            mode: theme.mode(),
            revision,
            theme,
            output,
        })
    }
}

impl ThemeScope<'static> {
    /// Mounts a scope on the process-wide registry.
    pub fn mount_global() -> Self {
        Self::mount(ThemeRegistry::global())
    }
}

impl fmt::Debug for ThemeScope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeScope")
            .field("id", &self.subscription.id())
            .field("mode", &self.mode())
            .field("revision", &self.revision())
            .finish()
    }
}

impl Drop for ThemeScope<'_> {
    fn drop(&mut self) {
        debug!(scope = %self.subscription.id(), mode = %self.mode(), "theme scope unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_seeds_from_registry() {
        let registry = ThemeRegistry::with_mode(ThemeMode::Light);
        let scope = ThemeScope::mount(&registry);
        assert_eq!(scope.mode(), ThemeMode::Light);
        assert!(scope.is_active());
    }

    #[test]
    fn test_toggle_updates_scope_and_registry() {
        let registry = ThemeRegistry::new();
        let scope = ThemeScope::mount(&registry);

        registry.request_toggle();
        assert_eq!(scope.mode(), ThemeMode::Light);
        assert_eq!(registry.mode(), ThemeMode::Light);
        assert_eq!(scope.revision(), 1);
    }

    #[test]
    fn test_theme_follows_mode() {
        let registry = ThemeRegistry::new();
        let scope = ThemeScope::mount(&registry);
        let dark = scope.theme();

        scope.toggle().unwrap();
        assert!(std::ptr::eq(scope.theme(), catalog::resolve(ThemeMode::Light)));

        scope.toggle().unwrap();
        assert!(std::ptr::eq(scope.theme(), dark));
    }

    #[test]
    fn test_newer_scope_takes_over() {
        let registry = ThemeRegistry::new();
        let first = ThemeScope::mount(&registry);
        let second = ThemeScope::mount(&registry);

        assert!(!first.is_active());
        assert!(second.is_active());

        first.toggle().unwrap();
        assert_eq!(second.mode(), ThemeMode::Light);
        assert_eq!(first.mode(), ThemeMode::Dark);

        drop(second);
        assert!(first.is_active());
        assert_eq!(first.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_provide_exposes_theme() {
        let registry = ThemeRegistry::new();
        let scope = ThemeScope::mount(&registry);
        let seen = scope.provide(|theme| {
            assert!(std::ptr::eq(context::current().unwrap(), theme));
            theme.mode()
        });
        assert_eq!(seen, ThemeMode::Dark);
        assert!(context::current().is_none());
    }
}
