//! Theme preference stored under its own key.

use super::{KeyValueStore, StorageError, StorageResult, THEME_KEY};
use crate::domain::Theme;
use tracing::debug;

/// Reads the theme preference. Unset or unrecognised values read as light.
///
/// The value is a JSON string. A bare word, as older versions wrote it, is
/// accepted too.
pub(super) fn theme<S: KeyValueStore + ?Sized>(storage: &S) -> StorageResult<Theme> {
    let Some(raw) = storage.get(THEME_KEY)? else {
        return Ok(Theme::default());
    };

    let word = serde_json::from_str::<String>(&raw).unwrap_or(raw);
    Ok(word.parse().unwrap_or_else(|err| {
        debug!(%err, "ignoring stored theme");
        Theme::default()
    }))
}

/// Stores the theme preference as a JSON string.
pub(super) fn set_theme<S: KeyValueStore + ?Sized>(
    storage: &mut S,
    theme: Theme,
) -> StorageResult<()> {
    let json = serde_json::to_string(theme.as_str()).map_err(|source| StorageError::Encode {
        key: THEME_KEY.to_string(),
        source,
    })?;
    storage.set(THEME_KEY, &json)
}

/// Flips the stored theme and returns the new value.
pub(super) fn toggle_theme<S: KeyValueStore + ?Sized>(storage: &mut S) -> StorageResult<Theme> {
    let next = theme(storage)?.toggled();
    set_theme(storage, next)?;
    Ok(next)
}
