//! The universe of bubbles a formula is evaluated against

use crate::bubble::Bubble;
use ahash::AHashMap;

/// Identifier to bubble mapping that iterates in insertion order
#[derive(Debug, Clone, Default)]
pub struct Universe {
    bubbles: Vec<Bubble>,
    /// Identifier → index into `bubbles`
    index: AHashMap<String, usize>,
}

impl Universe {
    /// Create an empty universe
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a universe from bubbles in load order
    pub fn from_bubbles<I>(bubbles: I) -> Self
    where
        I: IntoIterator<Item = Bubble>,
    {
        let mut universe = Self::new();
        for bubble in bubbles {
            universe.insert(bubble);
        }
        universe
    }

    /// Insert a bubble. A bubble with the same identifier is replaced in
    /// place and returned.
    pub fn insert(&mut self, bubble: Bubble) -> Option<Bubble> {
        match self.index.get(bubble.identifier()) {
            Some(&idx) => Some(std::mem::replace(&mut self.bubbles[idx], bubble)),
            None => {
                self.index
                    .insert(bubble.identifier().to_string(), self.bubbles.len());
                self.bubbles.push(bubble);
                None
            }
        }
    }

    /// Look up a bubble by identifier only
    pub fn get(&self, identifier: &str) -> Option<&Bubble> {
        self.index.get(identifier).map(|&idx| &self.bubbles[idx])
    }

    /// Resolve a reference target to a bubble.
    ///
    /// The identifier match is only a starting candidate: every bubble whose
    /// name equals `target` replaces it, so the last name match in universe
    /// order wins, even over an identifier match.
    // NOTE: name-over-identifier precedence is kept for compatibility with
    // existing bubble files; do not build new behavior on it.
    pub fn resolve(&self, target: &str) -> Option<&Bubble> {
        let mut found = self.get(target);
        for bubble in &self.bubbles {
            if bubble.name() == target {
                found = Some(bubble);
            }
        }
        found
    }

    /// Bubbles in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Bubble> {
        self.bubbles.iter()
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }
}

impl FromIterator<Bubble> for Universe {
    fn from_iter<I: IntoIterator<Item = Bubble>>(iter: I) -> Self {
        Self::from_bubbles(iter)
    }
}
