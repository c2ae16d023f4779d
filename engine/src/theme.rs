//! Theme controller: a three-state preference machine over a persisted value.
//!
//! Transitions come from two places: an explicit user toggle (advances the
//! `auto -> light -> dark` ring and persists the result) and a system
//! color-scheme change (re-resolves without touching the stored preference,
//! and only when the preference is `auto`).

use vitrine_types::{ResolvedTheme, ThemePreference, ThemeState};

use crate::prefs::PreferenceStore;
use crate::system::SystemScheme;

/// Pure resolution: `(preference, system signal) -> state`.
///
/// Explicit preferences ignore the system signal entirely. Auto follows it
/// and marks the result as auto-derived, for both light and dark.
#[must_use]
pub fn resolve(pref: ThemePreference, system_dark: bool) -> ThemeState {
    match pref {
        ThemePreference::Light => ThemeState::explicit(ResolvedTheme::Light),
        ThemePreference::Dark => ThemeState::explicit(ResolvedTheme::Dark),
        ThemePreference::Auto => ThemeState::auto(if system_dark {
            ResolvedTheme::Dark
        } else {
            ResolvedTheme::Light
        }),
    }
}

/// Owns the current preference, its backing store, and the system probe.
///
/// The resolved theme is never stored; callers get a fresh [`ThemeState`]
/// from every operation and apply it to their presentation target.
pub struct ThemeController<S, C> {
    preference: ThemePreference,
    store: S,
    scheme: C,
}

impl<S: PreferenceStore, C: SystemScheme> ThemeController<S, C> {
    /// Load the persisted preference (absent or unreadable means `auto`).
    pub fn new(store: S, scheme: C) -> Self {
        let preference = store.load().unwrap_or_default();
        Self {
            preference,
            store,
            scheme,
        }
    }

    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Current resolved state for the current preference and system signal.
    #[must_use]
    pub fn theme_state(&self) -> ThemeState {
        resolve(self.preference, self.scheme.prefers_dark())
    }

    /// User toggle: advance the preference ring, persist, re-resolve.
    pub fn cycle(&mut self) -> ThemeState {
        self.set_preference(self.preference.cycle())
    }

    /// Set an explicit preference value. Always succeeds; a failed persist is
    /// logged and the in-memory preference still advances.
    pub fn set_preference(&mut self, next: ThemePreference) -> ThemeState {
        self.preference = next;
        if let Err(e) = self.store.save(next) {
            tracing::warn!("Failed to persist theme preference: {e}");
        }
        self.theme_state()
    }

    /// System color-scheme change notification.
    ///
    /// No-op unless the preference is `auto`; never writes the store.
    pub fn handle_system_change(&mut self) -> Option<ThemeState> {
        if self.preference == ThemePreference::Auto {
            Some(self.theme_state())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use vitrine_types::{ResolvedTheme, ThemePreference};

    use super::{ThemeController, resolve};
    use crate::prefs::{MemoryPreferenceStore, PreferenceStore};
    use crate::system::FixedScheme;

    #[test]
    fn explicit_preference_ignores_system_signal() {
        for system_dark in [false, true] {
            let state = resolve(ThemePreference::Dark, system_dark);
            assert_eq!(state.resolved, ResolvedTheme::Dark);
            assert!(!state.auto_derived);

            let state = resolve(ThemePreference::Light, system_dark);
            assert_eq!(state.resolved, ResolvedTheme::Light);
            assert!(!state.auto_derived);
        }
    }

    #[test]
    fn auto_follows_system_and_marks_derivation() {
        let dark = resolve(ThemePreference::Auto, true);
        assert_eq!(dark.resolved, ResolvedTheme::Dark);
        assert!(dark.auto_derived);

        let light = resolve(ThemePreference::Auto, false);
        assert_eq!(light.resolved, ResolvedTheme::Light);
        assert!(light.auto_derived);
    }

    #[test]
    fn three_cycles_return_to_start() {
        let mut controller =
            ThemeController::new(MemoryPreferenceStore::default(), FixedScheme::dark());
        for start in [
            ThemePreference::Auto,
            ThemePreference::Light,
            ThemePreference::Dark,
        ] {
            controller.set_preference(start);
            controller.cycle();
            controller.cycle();
            controller.cycle();
            assert_eq!(controller.preference(), start);
        }
    }

    #[test]
    fn cycle_persists_each_step() {
        let store = MemoryPreferenceStore::default();
        let mut controller = ThemeController::new(store.clone(), FixedScheme::dark());
        controller.cycle();
        assert_eq!(store.load(), Some(ThemePreference::Light));
        controller.cycle();
        assert_eq!(store.load(), Some(ThemePreference::Dark));
    }

    #[test]
    fn persisted_preference_restores_without_user_action() {
        let store = MemoryPreferenceStore::default();
        store.save(ThemePreference::Dark).unwrap();

        let controller = ThemeController::new(store, FixedScheme::light());
        assert_eq!(controller.preference(), ThemePreference::Dark);
        assert_eq!(controller.theme_state().resolved, ResolvedTheme::Dark);
        assert!(!controller.theme_state().auto_derived);
    }

    #[test]
    fn empty_store_defaults_to_auto() {
        let controller =
            ThemeController::new(MemoryPreferenceStore::default(), FixedScheme::light());
        assert_eq!(controller.preference(), ThemePreference::Auto);
        assert_eq!(controller.theme_state().resolved, ResolvedTheme::Light);
        assert!(controller.theme_state().auto_derived);
    }

    #[test]
    fn system_change_is_noop_unless_auto() {
        let mut controller =
            ThemeController::new(MemoryPreferenceStore::default(), FixedScheme::dark());

        controller.set_preference(ThemePreference::Light);
        assert!(controller.handle_system_change().is_none());

        controller.set_preference(ThemePreference::Auto);
        let state = controller.handle_system_change().unwrap();
        assert_eq!(state.resolved, ResolvedTheme::Dark);
        assert!(state.auto_derived);
    }

    #[test]
    fn system_change_never_touches_the_store() {
        let store = MemoryPreferenceStore::default();
        let mut controller = ThemeController::new(store.clone(), FixedScheme::dark());
        controller.handle_system_change();
        assert_eq!(store.load(), None);
    }
}
