// ============================================================
// Layer 4 — Notes Preprocessor
// ============================================================
// Cleans the free-text "Additional Notes" field before it is
// tokenised for the text feature.
//
// Notes are pasted from anywhere, so they arrive with:
//   - Non-breaking and zero-width spaces
//   - Tabs and Windows line endings
//   - Stray control characters
//
// Cleaning steps (applied in order):
//   1. Map whitespace variants and control characters to a space
//   2. Collapse runs of whitespace into a single space
//   3. Trim both ends
//
// The result is always a single line.

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Clean a raw notes string. Returns an owned single-line String.
    pub fn clean(&self, text: &str) -> String {
        // ── Step 1: Normalise individual characters ───────────────────────────
        let normalised = text.chars().map(|c| match c {
            '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
            c if c.is_whitespace() || c.is_control() => ' ',
            c => c,
        });

        // ── Step 2: Collapse repeated spaces ──────────────────────────────────
        let mut out        = String::with_capacity(text.len());
        let mut last_space = true;

        for c in normalised {
            if c == ' ' {
                if !last_space {
                    out.push(' ');
                }
                last_space = true;
            } else {
                out.push(c);
                last_space = false;
            }
        }

        // ── Step 3: Trim ──────────────────────────────────────────────────────
        let trimmed_len = out.trim_end().len();
        out.truncate(trimmed_len);
        out
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
