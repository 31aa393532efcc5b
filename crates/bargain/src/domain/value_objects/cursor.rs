//! PaginationCursor - Clamped index into a ranked sequence

/// Index into a non-empty sequence of fixed length
///
/// Moves never leave `[0, len - 1]`; calls at a boundary are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    index: usize,
    len: usize,
}

impl PaginationCursor {
    /// Cursor at the first element. `None` for an empty sequence.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.len
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.index += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.has_previous() {
            self.index -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_has_no_cursor() {
        assert!(PaginationCursor::new(0).is_none());
    }

    #[test]
    fn test_next_clamps_at_last() {
        let mut cursor = PaginationCursor::new(3).unwrap();
        cursor.next();
        assert_eq!(cursor.index(), 1);
        assert!(cursor.has_previous() && cursor.has_next());

        cursor.next();
        cursor.next();
        assert_eq!(cursor.index(), 2);
        assert!(cursor.has_previous());
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_previous_clamps_at_first() {
        let mut cursor = PaginationCursor::new(2).unwrap();
        cursor.previous();
        cursor.previous();
        assert_eq!(cursor.index(), 0);
        assert!(!cursor.has_previous());
    }

    #[test]
    fn test_single_element() {
        let mut cursor = PaginationCursor::new(1).unwrap();
        cursor.next();
        cursor.previous();
        assert_eq!(cursor.index(), 0);
        assert!(!cursor.has_previous() && !cursor.has_next());
    }

    #[test]
    fn test_stays_in_bounds_under_interleaving() {
        let len = 5;
        let mut cursor = PaginationCursor::new(len).unwrap();
        // Deterministic pseudo-random walk
        let mut seed: u32 = 7;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            if seed & 0x100 == 0 {
                cursor.next();
            } else {
                cursor.previous();
            }
            assert!(cursor.index() < len);
        }
    }
}
