use std::{env, sync::LazyLock};

/// Fallback label for a credential whose display name was never set.
///
/// Registration leaves the display name empty until the user submits one;
/// the unlink node still needs something readable to show.
pub(crate) static WEBAUTHN_DEFAULT_KEY_NAME: LazyLock<String> = LazyLock::new(|| {
    env::var("WEBAUTHN_DEFAULT_KEY_NAME")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "security key".to_string())
});
