// Keyboard activation helpers

/// Whether a `KeyboardEvent.key` value activates a focused control.
///
/// Browsers report Space as `" "`; older engines use `"Spacebar"`.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}
