//! Emoji-only ("mega") message classifier.
//!
//! Short bursts of emoji render at a larger scale. Walls of emoji do not,
//! so the count is capped.

use once_cell::sync::Lazy;
use regex::Regex;

/// Most emoji a message may hold and still render large.
pub const MEGA_MAX_EMOJI: usize = 5;

static CUSTOM_EMOJI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<a?:[A-Za-z0-9_]+:[0-9]+>").unwrap());

// One match per rendered glyph: flags, keycaps, and pictographs with their
// modifiers, variation selectors and ZWJ continuations.
static UNICODE_EMOJI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"[\x{1F1E6}-\x{1F1FF}]{2}",
        r"|[0-9#*]\x{FE0F}?\x{20E3}",
        r"|\p{Extended_Pictographic}(?:\p{Emoji_Modifier}|\x{FE0F})*",
        r"(?:\x{200D}\p{Extended_Pictographic}(?:\p{Emoji_Modifier}|\x{FE0F})*)*",
    ))
    .unwrap()
});

/// Whether `input` consists only of 1 to [`MEGA_MAX_EMOJI`] emoji.
pub fn is_emoji_only(input: &str) -> bool {
    is_emoji_only_with_limit(input, MEGA_MAX_EMOJI)
}

/// [`is_emoji_only`] with a caller-chosen upper bound.
pub fn is_emoji_only_with_limit(input: &str, max: usize) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return false;
    }

    let without_custom = CUSTOM_EMOJI_RE.replace_all(trimmed, "");
    let leftover = UNICODE_EMOJI_RE.replace_all(&without_custom, "");
    if leftover.chars().any(|c| !c.is_whitespace()) {
        return false;
    }

    (1..=max).contains(&count_emoji(trimmed))
}

/// Number of custom emoji tags plus Unicode emoji in `input`.
pub fn count_emoji(input: &str) -> usize {
    let custom = CUSTOM_EMOJI_RE.find_iter(input).count();
    let without_custom = CUSTOM_EMOJI_RE.replace_all(input, "");
    custom + UNICODE_EMOJI_RE.find_iter(&without_custom).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_emoji_is_mega() {
        assert!(is_emoji_only("🎉"));
        assert!(is_emoji_only("  🎉 \n"));
    }

    #[test]
    fn too_many_emoji_is_not_mega() {
        assert!(is_emoji_only("🎉🎉🎉🎉🎉"));
        assert!(!is_emoji_only("🎉🎉🎉🎉🎉🎉"));
    }

    #[test]
    fn text_disqualifies() {
        assert!(!is_emoji_only("gg 🎉"));
        assert!(!is_emoji_only("🎉!"));
        assert!(!is_emoji_only("hello"));
    }

    #[test]
    fn custom_emoji_tags_count() {
        assert!(is_emoji_only("<a:party:123>"));
        assert!(is_emoji_only("<:wave:1> 🎉 <a:party:2>"));
        assert_eq!(count_emoji("<:wave:1> 🎉 <a:party:2>"), 3);
        assert!(!is_emoji_only("<:wave:1> <:wave:1> <:wave:1> <:wave:1> <:wave:1> <:wave:1>"));
    }

    #[test]
    fn empty_and_whitespace_are_not_mega() {
        assert!(!is_emoji_only(""));
        assert!(!is_emoji_only("   \n\t"));
    }

    #[test]
    fn sequences_count_once() {
        assert_eq!(count_emoji("👍🏽"), 1);
        assert_eq!(count_emoji("👨‍👩‍👧"), 1);
        assert_eq!(count_emoji("🇺🇸"), 1);
        assert_eq!(count_emoji("❤️"), 1);
        assert_eq!(count_emoji("1️⃣"), 1);
        assert!(is_emoji_only("👨‍👩‍👧👍🏽🇺🇸❤️"));
    }

    #[test]
    fn plain_digits_are_not_emoji() {
        assert!(!is_emoji_only("1"));
        assert_eq!(count_emoji("123"), 0);
    }

    #[test]
    fn custom_limit() {
        assert!(is_emoji_only_with_limit("🎉🎉🎉🎉🎉🎉", 10));
        assert!(!is_emoji_only_with_limit("🎉🎉", 1));
        assert!(!is_emoji_only_with_limit("🎉", 0));
    }
}
