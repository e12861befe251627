use crate::core::BodyHandle;
use std::fmt;

/// An unordered pair of bodies in contact.
///
/// The handles are stored sorted, so `(a, b)` and `(b, a)` compare and hash
/// equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactPair {
    body_a: BodyHandle,
    body_b: BodyHandle,
}

impl ContactPair {
    /// Creates a new contact pair
    pub fn new(body_a: BodyHandle, body_b: BodyHandle) -> Self {
        if body_a <= body_b {
            Self { body_a, body_b }
        } else {
            Self { body_a: body_b, body_b: body_a }
        }
    }

    /// The lower of the two handles
    pub fn first(&self) -> BodyHandle {
        self.body_a
    }

    /// The higher of the two handles
    pub fn second(&self) -> BodyHandle {
        self.body_b
    }

    /// Checks if this pair contains the specified body
    pub fn contains(&self, body: BodyHandle) -> bool {
        self.body_a == body || self.body_b == body
    }

    /// Returns the other body in the pair
    pub fn other(&self, body: BodyHandle) -> Option<BodyHandle> {
        if self.body_a == body {
            Some(self.body_b)
        } else if self.body_b == body {
            Some(self.body_a)
        } else {
            None
        }
    }
}

impl fmt::Display for ContactPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.body_a, self.body_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn order_does_not_matter() {
        let a = BodyHandle::new(3);
        let b = BodyHandle::new(1);
        assert_eq!(ContactPair::new(a, b), ContactPair::new(b, a));
        assert_eq!(ContactPair::new(a, b).first(), b);

        let mut counts = HashMap::new();
        *counts.entry(ContactPair::new(a, b)).or_insert(0) += 1;
        *counts.entry(ContactPair::new(b, a)).or_insert(0) += 1;
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[&ContactPair::new(a, b)], 2);
    }

    #[test]
    fn other_body() {
        let pair = ContactPair::new(BodyHandle::new(1), BodyHandle::GROUND);
        assert!(pair.contains(BodyHandle::GROUND));
        assert_eq!(pair.other(BodyHandle::new(1)), Some(BodyHandle::GROUND));
        assert_eq!(pair.other(BodyHandle::new(2)), None);
    }
}
