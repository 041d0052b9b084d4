/// A candidate password prepared once for all checks.
///
/// Holds the character boundaries so checks can slice character windows without re-decoding.
#[derive(Clone, Debug)]
pub struct Candidate<'a> {
    text: &'a str,
    /// Byte offset of every character start, plus `text.len()` as a final sentinel.
    bounds: Vec<usize>,
}

impl<'a> Candidate<'a> {
    pub fn new(text: &'a str) -> Self {
        let bounds = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        Self { text, bounds }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Length in characters (Unicode scalar values), not bytes.
    pub fn char_len(&self) -> usize {
        self.bounds.len() - 1
    }

    /// Every contiguous window of `size` characters, in order.
    pub fn windows(&self, size: usize) -> impl Iterator<Item = &'a str> + '_ {
        let count = if size == 0 {
            0
        } else {
            (self.char_len() + 1).saturating_sub(size)
        };
        let text = self.text;
        let bounds = &self.bounds;
        (0..count).map(move |i| &text[bounds[i]..bounds[i + size]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_characters_not_bytes() {
        let c = Candidate::new("héllo");
        assert_eq!(c.char_len(), 5);
        assert_eq!(c.as_str().len(), 6);
    }

    #[test]
    fn empty_candidate_has_no_windows() {
        let c = Candidate::new("");
        assert_eq!(c.char_len(), 0);
        assert_eq!(c.windows(1).count(), 0);
    }

    #[test]
    fn windows_slide_over_characters() {
        let c = Candidate::new("aéb");
        let w: Vec<&str> = c.windows(2).collect();
        assert_eq!(w, vec!["aé", "éb"]);
    }

    #[test]
    fn window_longer_than_candidate_yields_nothing() {
        let c = Candidate::new("abc");
        assert_eq!(c.windows(3).count(), 1);
        assert_eq!(c.windows(4).count(), 0);
        assert_eq!(c.windows(0).count(), 0);
    }
}
