//! Scoped ambient theme for the current render pass.
//!
//! A [`ThemeScope`](super::ThemeScope) pushes its resolved definition here for
//! the duration of a render and pops it when the pass ends. Template filters,
//! which cannot take extra arguments per render, read the theme through
//! [`current`]. Nested scopes shadow outer ones; the innermost wins.
//!
//! The stack is thread-local: a render pass runs on one thread, and nothing
//! outside an active pass can observe a stale value.

use std::cell::RefCell;
use std::marker::PhantomData;

use crate::error::ThemeError;
use crate::theme::ThemeDefinition;

thread_local! {
    static THEME_STACK: RefCell<Vec<&'static ThemeDefinition>> = const { RefCell::new(Vec::new()) };
}

/// The innermost provided theme, if any.
pub fn current() -> Option<&'static ThemeDefinition> {
    THEME_STACK.with(|stack| stack.borrow().last().copied())
}

/// Like [`current`], but an error outside of any scope.
pub fn use_theme() -> Result<&'static ThemeDefinition, ThemeError> {
    current().ok_or(ThemeError::NoProvider)
}

/// How many scopes are providing a theme on this thread right now.
pub fn depth() -> usize {
    THEME_STACK.with(|stack| stack.borrow().len())
}

/// Pops the provided theme when dropped.
///
/// Not `Send`: the guard must be dropped on the thread that pushed it.
#[must_use = "the theme is only provided while the guard is alive"]
pub struct ProvideGuard {
    depth: usize,
    _not_send: PhantomData<*const ()>,
}

/// Pushes `theme` for the current thread until the guard drops.
pub fn provide(theme: &'static ThemeDefinition) -> ProvideGuard {
    let depth = THEME_STACK.with(|stack| {
        let mut stack = stack.borrow_mut();
        stack.push(theme);
        stack.len()
    });
    ProvideGuard {
        depth,
        _not_send: PhantomData,
    }
}

impl Drop for ProvideGuard {
    fn drop(&mut self) {
        THEME_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();
            debug_assert_eq!(stack.len(), self.depth, "theme guards dropped out of order");
            stack.truncate(self.depth - 1);
        });
    }
}
