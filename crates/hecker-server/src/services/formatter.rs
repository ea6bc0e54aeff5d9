/// formatter.rs - turns raw model text into escaped, emphasis-annotated markup
///
/// The pipeline order matters: structural markers are matched on the raw
/// text, and HTML escaping runs last so it cannot shift what the markers see.
/// Output is not idempotent; formatting twice escapes `&amp;` again.
use regex::Regex;

pub struct ResponseFormatter {
    excess_newlines: Regex,
    line_markers: Vec<Regex>,
    numbered: Regex,
    conclusion: Regex,
    inline_code: Regex,
    bullet: Regex,
    colon_break: Regex,
}

const SEQUENCE_MARKERS: &str = r"(?m)^(Step[ \t]*\d+:|First:|Second:|Third:|Next:|Finally:)";
const SECTION_MARKERS: &str = r"(?m)^(Solution:|Method:|Process:|Example:|Result:|Summary:)";
const CALLOUT_MARKERS: &str = r"(?m)^(Explanation:|Note:|Important:|Key Point:|Remember:)";

impl ResponseFormatter {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            excess_newlines: Regex::new(r"\n{3,}")?,
            // `3.14` is not a marker; `1.` alone on a line is
            numbered: Regex::new(r"(?m)^(\d+\.)([ \t]|$)")?,
            line_markers: vec![
                Regex::new(SEQUENCE_MARKERS)?,
                Regex::new(SECTION_MARKERS)?,
                Regex::new(CALLOUT_MARKERS)?,
            ],
            conclusion: Regex::new(
                r"\b(Therefore|Hence|Thus|So|In conclusion|To summarize)([,:])",
            )?,
            inline_code: Regex::new(r"`([^`\n]+)`")?,
            bullet: Regex::new(r"(?m)^[ \t]*[-•][ \t]+")?,
            // Any colon with content after it on the same line. A closing `**`
            // stays attached to the colon so step-2 markers remain balanced.
            colon_break: Regex::new(r":(\*\*)?[ \t]*([^\s*])")?,
        })
    }

    pub fn format(&self, raw: &str) -> String {
        // 1. Normalize paragraph spacing
        let text = self.excess_newlines.replace_all(raw, "\n\n");

        // 2. Line-start structure: numbered items, then step/section/callout words
        let mut text = self
            .numbered
            .replace_all(&text, "\n**${1}**${2}")
            .into_owned();
        for marker in &self.line_markers {
            text = marker.replace_all(&text, "\n**${1}**").into_owned();
        }

        // 3. Inline conclusions ("Therefore," / "In conclusion:")
        let text = self.conclusion.replace_all(&text, "\n**${1}**${2}");

        // 4. Inline code spans on their own line
        let text = self.inline_code.replace_all(&text, "\n`${1}`\n");

        // 5. Canonical bullets
        let text = self.bullet.replace_all(&text, "\n• ");

        // 6. Label / content split after colons
        let text = self.colon_break.replace_all(&text, ":${1}\n${2}");

        // 7. Escape last
        let escaped = escape_html(&text);

        // 8. Steps 2-6 can reintroduce long runs
        self.excess_newlines
            .replace_all(&escaped, "\n\n")
            .into_owned()
    }
}

/// Escapes the five HTML-significant characters, `&` first
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatter() -> ResponseFormatter {
        ResponseFormatter::new().unwrap()
    }

    #[test]
    fn test_collapse_newlines() {
        assert_eq!(formatter().format("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(formatter().format(""), "");
    }

    #[test]
    fn test_step_marker_and_colon_break() {
        assert_eq!(
            formatter().format("Intro\nStep 1: Add the numbers"),
            "Intro\n\n**Step 1:**\nAdd the numbers"
        );
    }

    #[test]
    fn test_numbered_markers() {
        assert_eq!(
            formatter().format("1. Mix\n2. Bake"),
            "\n**1.** Mix\n\n**2.** Bake"
        );
        assert_eq!(formatter().format("1.\nMix"), "\n**1.**\nMix");
        assert_eq!(formatter().format("3.14 is pi"), "3.14 is pi");
    }

    #[test]
    fn test_callout_marker() {
        assert_eq!(
            formatter().format("Note: read this"),
            "\n**Note:**\nread this"
        );
    }

    #[test]
    fn test_conclusion_words() {
        assert_eq!(
            formatter().format("x = 2\nTherefore, x is even"),
            "x = 2\n\n**Therefore**, x is even"
        );
        assert_eq!(formatter().format("So, we stop"), "\n**So**, we stop");
        // Needs the trailing punctuation and a word boundary
        assert_eq!(formatter().format("Also, fine"), "Also, fine");
        assert_eq!(formatter().format("Thus we stop"), "Thus we stop");
    }

    #[test]
    fn test_inline_code_gets_own_line() {
        assert_eq!(
            formatter().format("Use `let x` here"),
            "Use \n`let x`\n here"
        );
    }

    #[test]
    fn test_bullets_normalized() {
        assert_eq!(
            formatter().format("- apples\n• pears"),
            "\n• apples\n\n• pears"
        );
    }

    #[test]
    fn test_colon_break_rules() {
        assert_eq!(formatter().format("Answer: 42"), "Answer:\n42");
        assert_eq!(formatter().format("Ratio a:b"), "Ratio a:\nb");
        assert_eq!(formatter().format("Meet at 10:30"), "Meet at 10:\n30");
        assert_eq!(formatter().format("see https://example.com"), "see https:\n//example.com");
        assert_eq!(formatter().format("Trailing:"), "Trailing:");
        assert_eq!(formatter().format("Trailing:\nnext"), "Trailing:\nnext");
    }

    #[test]
    fn test_colon_break_keeps_bold_markers() {
        assert_eq!(formatter().format("Step 2:Stir"), "\n**Step 2:**\nStir");
        assert_eq!(formatter().format("Note:\nbelow"), "\n**Note:**\nbelow");
    }

    #[test]
    fn test_html_escaped() {
        let out = formatter().format(r#"<script>"it's"</script>"#);
        assert_eq!(out, "&lt;script&gt;&quot;it&#039;s&quot;&lt;/script&gt;");
        assert!(out.contains("&lt;script&gt;"));
        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
        assert!(!out.contains('"'));
        assert!(!out.contains('\''));
    }

    #[test]
    fn test_escape_order() {
        assert_eq!(escape_html("a & b < c"), "a &amp; b &lt; c");
    }

    #[test]
    fn test_not_idempotent() {
        let f = formatter();
        let once = f.format("a & b");
        let twice = f.format(&once);
        assert_eq!(once, "a &amp; b");
        assert_eq!(twice, "a &amp;amp; b");
        assert_ne!(once, twice);
    }

    #[test]
    fn test_final_collapse() {
        // The numbered marker adds a third newline after the blank line
        assert_eq!(formatter().format("Intro\n\n1. item"), "Intro\n\n**1.** item");
    }
}
