use log::debug;
use rustc_hash::FxHashMap;

use crate::heading::strip_heading_marker;
use crate::normalize::slugify;

/// Stateful slug generator.
///
/// Remembers every slug it has handed out and appends `-1`, `-2`, … to
/// repeats, so two headings with the same text get distinct anchors. Each
/// instance is its own uniqueness domain, typically one per document.
///
/// ## Example
/// ```rs
/// use ancre::Slugger;
///
/// let mut slugger = Slugger::new();
///
/// assert_eq!(slugger.slug("# Hello World!"), "hello-world");
/// assert_eq!(slugger.slug("Hello, world"), "hello-world-1");
/// ```
pub struct Slugger {
    occurrences: FxHashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self {
            occurrences: FxHashMap::default(),
        }
    }

    /// Converts heading text into a slug unique within this instance.
    ///
    /// A leading Markdown heading marker is stripped, the remainder is
    /// normalized as by [`slugify`], and the result is suffixed if an
    /// earlier call already produced it. Every input has a defined output:
    /// text with no letters or digits yields the empty slug, and repeats of
    /// it are suffixed like any other (`""`, `"-1"`, `"-2"`, …) rather than
    /// falling back to a placeholder.
    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(strip_heading_marker(text));
        self.resolve(base)
    }

    /// Forgets every slug handed out so far, starting a fresh uniqueness
    /// domain.
    pub fn reset(&mut self) {
        self.occurrences.clear();
    }

    fn resolve(&mut self, base: String) -> String {
        let mut count = match self.occurrences.get(&base) {
            None => {
                self.occurrences.insert(base.clone(), 0);
                return base;
            }
            Some(count) => *count,
        };

        // The suffixed form may have been emitted as a base slug of its own
        // earlier, keep counting until a free one comes up.
        let candidate = loop {
            count += 1;
            let candidate = format!("{base}-{count}");
            if !self.occurrences.contains_key(&candidate) {
                break candidate;
            }
        };

        debug!("duplicate slug {:?}, using {:?}", base, candidate);

        self.occurrences.insert(base, count);
        self.occurrences.insert(candidate.clone(), 0);
        candidate
    }
}

impl Default for Slugger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_is_unsuffixed() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Hello World!"), "hello-world");
    }

    #[test]
    fn repeats_get_numeric_suffixes() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Hello World!"), "hello-world");
        assert_eq!(slugger.slug("Hello World!"), "hello-world-1");
        assert_eq!(slugger.slug("Hello World!"), "hello-world-2");
    }

    #[test]
    fn different_text_same_base_collides() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Hello, world"), "hello-world");
        assert_eq!(slugger.slug("Hello World!"), "hello-world-1");
    }

    #[test]
    fn suffixed_form_used_as_base_keeps_counting() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("a-1"), "a-1");
        assert_eq!(slugger.slug("a"), "a");
        // "a-1" is taken, so the counter moves past it.
        assert_eq!(slugger.slug("a"), "a-2");
    }

    #[test]
    fn heading_markers_are_stripped() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("### Title One"), "title-one");
        assert_eq!(slugger.slug("## A # B"), "a-b");
    }

    #[test]
    fn empty_input_is_a_valid_candidate() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug(""), "");
        assert_eq!(slugger.slug(""), "-1");
        assert_eq!(slugger.slug("!!!"), "-2");
    }

    #[test]
    fn reset_starts_a_fresh_domain() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Hello World!"), "hello-world");
        assert_eq!(slugger.slug("Hello World!"), "hello-world-1");

        slugger.reset();
        assert_eq!(slugger.slug("Hello World!"), "hello-world");
    }

    #[test]
    fn outputs_never_repeat() {
        let mut slugger = Slugger::new();
        let inputs = [
            "Title", "Title", "title", "# Title", "title-1", "Title", "", "", "!!!",
        ];

        let mut seen = std::collections::HashSet::new();
        for input in inputs {
            assert!(seen.insert(slugger.slug(input)));
        }
    }
}
