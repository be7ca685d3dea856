//! Count Field Sanitizer
//!
//! Turns raw field text into a non-negative integer string. Keystrokes keep
//! an empty field empty so the user can clear it and retype; a commit
//! (blur / change) settles on a canonical number.

/// Which editing signal produced the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    /// Raw keystroke: recompute only
    Keystroke,
    /// Done editing: recompute and persist
    Commit,
}

/// Sanitize field text for the given phase
pub fn sanitize(raw: &str, max: Option<u64>, phase: EditPhase) -> String {
    match phase {
        EditPhase::Keystroke => sanitize_keystroke(raw, max),
        EditPhase::Commit => sanitize_commit(raw, max),
    }
}

/// Strip non-digits and clamp to `max`; empty stays empty
pub fn sanitize_keystroke(raw: &str, max: Option<u64>) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return digits;
    }
    match max {
        Some(max) if exceeds(&digits, max) => max.to_string(),
        _ => digits,
    }
}

/// Keystroke rules plus: empty becomes "0", leading zeros dropped
pub fn sanitize_commit(raw: &str, max: Option<u64>) -> String {
    let digits = sanitize_keystroke(raw, max);
    parse_count(&digits).to_string()
}

/// Lenient integer parse: leading digits only, negatives and failures are 0
pub fn parse_count(text: &str) -> u64 {
    let text = text.trim_start();
    if text.starts_with('-') {
        return 0;
    }
    let text = text.strip_prefix('+').unwrap_or(text);
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text[..end].parse().unwrap_or(0)
}

/// Clamp a parsed count to an optional maximum
pub fn clamp_count(count: u64, max: Option<u64>) -> u64 {
    match max {
        Some(max) => count.min(max),
        None => count,
    }
}

// `digits` is non-empty and all ASCII digits, so a parse error means overflow
fn exceeds(digits: &str, max: u64) -> bool {
    match digits.parse::<u64>() {
        Ok(n) => n > max,
        Err(_) => true,
    }
}
