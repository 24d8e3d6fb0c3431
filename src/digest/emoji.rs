use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// One pictograph, dingbat or misc symbol with its optional skin-tone
/// modifier and VS-16. `•` (U+2022) is outside the class: the bullet stage
/// still needs it.
const EMOJI_UNIT: &str = r"[\x{1F000}-\x{1FAFF}\x{2300}-\x{23FF}\x{2600}-\x{27BF}\x{2B00}-\x{2BFF}][\x{1F3FB}-\x{1F3FF}]?\x{FE0F}?";

/// A regional-indicator pair (flag), or units joined by ZWJ, as one match.
static EMOJI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"[\x{{1F1E6}}-\x{{1F1FF}}]{{2}}|{unit}(?:\x{{200D}}{unit})*",
        unit = EMOJI_UNIT
    ))
    .expect("static regex compile")
});

/// Output of [`dedupe_emoji`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiDedup {
    pub text: String,
    pub first_emoji: Option<String>,
}

/// Keep the first emoji and delete every later one.
///
/// Later matches are removed outright, with no replacement whitespace.
/// Applying this twice gives the same text as applying it once.
#[must_use]
pub fn dedupe_emoji(text: &str) -> EmojiDedup {
    let mut out = String::with_capacity(text.len());
    let mut first_emoji: Option<String> = None;
    let mut removed = 0usize;
    let mut last_end = 0usize;

    for m in EMOJI_RE.find_iter(text) {
        out.push_str(&text[last_end..m.start()]);
        if first_emoji.is_none() {
            first_emoji = Some(m.as_str().to_string());
            out.push_str(m.as_str());
        } else {
            removed += 1;
        }
        last_end = m.end();
    }
    out.push_str(&text[last_end..]);

    if removed > 0 {
        debug!(emoji_removed = removed, "Removed repeated emoji");
    }

    EmojiDedup {
        text: out,
        first_emoji,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_first_emoji() {
        let result = dedupe_emoji("📧 Invoice 📧 due ✅ today 🎉");
        assert_eq!(result.text, "📧 Invoice  due  today ");
        assert_eq!(result.first_emoji.as_deref(), Some("📧"));
    }

    #[test]
    fn no_emoji_leaves_text_untouched() {
        let result = dedupe_emoji("Plain text • with bullet – and dash");
        assert_eq!(result.text, "Plain text • with bullet – and dash");
        assert_eq!(result.first_emoji, None);
    }

    #[test]
    fn modifiers_travel_with_their_base() {
        let result = dedupe_emoji("👍🏽 ok 👍🏽 ❤\u{FE0F}");
        assert_eq!(result.text, "👍🏽 ok  ");
        assert_eq!(result.first_emoji.as_deref(), Some("👍🏽"));
    }

    #[test]
    fn flags_are_removed_whole() {
        let result = dedupe_emoji("🇺🇸 flag 🇬🇧 again 🇺🇸");
        assert_eq!(result.text, "🇺🇸 flag  again ");
        assert_eq!(result.first_emoji.as_deref(), Some("🇺🇸"));
    }

    #[test]
    fn zwj_sequences_are_removed_whole() {
        let coder = "👩\u{200D}💻";
        let result = dedupe_emoji(&format!("{coder} dev {coder} ❤\u{FE0F}\u{200D}🔥 end"));
        assert_eq!(result.text, format!("{coder} dev   end"));
        assert!(!result.text[coder.len()..].contains('\u{200D}'));
        assert_eq!(result.first_emoji.as_deref(), Some(coder));
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let once = dedupe_emoji("🚀a🚀b⭐c🔥").text;
        let twice = dedupe_emoji(&once).text;
        assert_eq!(once, "🚀abc");
        assert_eq!(once, twice);
    }
}
