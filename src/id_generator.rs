use std::fmt;

/// Identifier of a shape inside a [`crate::Document`].
///
/// Carries no meaning beyond uniqueness within the generator that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(u64);

impl ShapeId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic counter owned by the canvas; never hands out the same id twice.
#[derive(Debug)]
pub struct IdGenerator {
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn generate_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut ids = IdGenerator::new();
        let a = ids.generate_id();
        let b = ids.generate_id();
        let c = ids.generate_id();

        assert!(a < b && b < c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_separate_generators_are_independent() {
        let mut first = IdGenerator::new();
        let mut second = IdGenerator::new();
        assert_eq!(first.generate_id(), second.generate_id());
    }
}
