/// A policy prepared for scanning: the raw text plus its lowercased form, computed once.
#[derive(Clone, Debug)]
pub struct PolicyText<'a> {
    pub raw: &'a str,
    pub lowered: String,
}

impl<'a> PolicyText<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lowered: raw.to_lowercase(),
        }
    }

    /// Number of whitespace-delimited tokens.
    ///
    /// Text with no tokens at all (empty or whitespace only) still counts as one
    /// word: splitting an empty string yields a single empty token.
    pub fn word_count(&self) -> usize {
        self.raw.split_whitespace().count().max(1)
    }

    /// True when any of `needles` (lowercase) occurs in the lowered text.
    pub fn mentions_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.lowered.contains(n))
    }
}
