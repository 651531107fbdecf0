use std::fmt::Display;

/// Turns a failed step into "no value" and leaves a warning behind.
///
/// Transaction logs are untrusted text and must never abort downstream
/// processing. Every place that tolerates bad input (malformed base64,
/// decoders rejecting a payload) goes through this function, so the policy
/// lives in one spot.
pub fn skip_on_error<T, E: Display>(context: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(context, error = %err, "Skipping malformed log input");
            None
        }
    }
}
