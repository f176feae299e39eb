//! Appearance state synchronization
//!
//! Reads the state back from whichever settings backend is active and fans
//! state changes out to every theme slot the backend exposes.

use crate::desktop::{DesktopError, SettingsBackend, ThemeSlot};

use super::identifiers::{AppearanceState, ThemeIdentifierSet, parse_interface_theme};

/// Infer the current appearance state from the backend's interface theme.
///
/// Never fails on theme names this tool did not produce; those resolve to
/// the default state. Only an unreachable settings store is an error.
pub fn infer_state(backend: &dyn SettingsBackend) -> Result<AppearanceState, DesktopError> {
    let Some(key) = backend.theme_key(ThemeSlot::Interface) else {
        return Ok(AppearanceState::default());
    };

    let current = backend.get_string(key)?;
    Ok(parse_interface_theme(&current))
}

/// Recompute all theme identifiers for `state` and write each to the backend.
///
/// Slots the environment does not expose are skipped. Writes are not
/// transactional: a failure leaves earlier slots updated and later ones
/// stale. Re-running with the same state fully reconciles the store, so
/// recovery is simply applying the intended state again.
pub fn apply_state(
    backend: &dyn SettingsBackend,
    state: AppearanceState,
) -> Result<(), DesktopError> {
    let identifiers = ThemeIdentifierSet::compose(state);

    for slot in ThemeSlot::ALL {
        if let Some(key) = backend.theme_key(slot) {
            backend.set_string(key, identifiers.get(slot))?;
        }
    }

    Ok(())
}
