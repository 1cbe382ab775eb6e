//! Zig-zag triangle strip ordering over a square vertex grid.
//!
//! Strip `s` walks the quad row between grid rows `s` and `s + 1`, alternating
//! rows on every vertex. Even strips run left to right and odd strips right
//! to left, so consecutive strips share their turning vertex and the whole
//! grid draws as one strip without restarts. Turning produces a few
//! zero-area triangles, which the rasterizer discards.

/// Index arithmetic for a strip over a `vertices × vertices` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripLayout {
    vertices: usize,
}

impl StripLayout {
    /// `vertices` is the grid side and must be at least 2.
    pub const fn new(vertices: usize) -> Self {
        assert!(vertices >= 2, "a strip needs at least a 2x2 vertex grid");
        Self { vertices }
    }

    pub const fn vertices(&self) -> usize {
        self.vertices
    }

    /// Number of strip entries: `V² + (V − 2)(V − 1)`.
    pub const fn len(&self) -> usize {
        let v = self.vertices;
        v * v + (v - 2) * (v - 1)
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Grid `(row, col)` visited at strip position `i`.
    ///
    /// Signed division truncates toward zero, so `i = 0` lands in strip 0.
    pub fn grid_coord(&self, i: usize) -> (usize, usize) {
        debug_assert!(i < self.len(), "strip index {i} out of range");

        let i = i as i64;
        let span = 2 * self.vertices as i64 - 1;

        let strip = (i - 1) / span;
        let row = (i + strip) % 2 + strip;
        let col = ((strip + 1) / 2 * span - (i + strip % 2) / 2).abs();

        (row as usize, col as usize)
    }

    /// All strip positions in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.len()).map(move |i| self.grid_coord(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_len_closed_form() {
        assert_eq!(StripLayout::new(2).len(), 4);
        assert_eq!(StripLayout::new(3).len(), 11);
        assert_eq!(StripLayout::new(4).len(), 22);
        assert_eq!(StripLayout::new(5).len(), 37);
    }

    #[test]
    fn test_two_by_two_is_single_quad() {
        let coords: Vec<_> = StripLayout::new(2).iter().collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_three_vertices_reference_sequence() {
        let coords: Vec<_> = StripLayout::new(3).iter().collect();
        #[rustfmt::skip]
        let expected = vec![
            (0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2),
            (2, 2), (1, 1), (2, 1), (1, 0), (2, 0),
        ];
        assert_eq!(coords, expected);
    }

    #[test]
    fn test_four_vertices_reference_sequence() {
        let coords: Vec<_> = StripLayout::new(4).iter().collect();
        #[rustfmt::skip]
        let expected = vec![
            (0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3), (1, 3),
            (2, 3), (1, 2), (2, 2), (1, 1), (2, 1), (1, 0), (2, 0),
            (3, 0), (2, 1), (3, 1), (2, 2), (3, 2), (2, 3), (3, 3),
        ];
        assert_eq!(coords, expected);
    }

    #[test]
    fn test_five_vertices_reference_sequence() {
        let coords: Vec<_> = StripLayout::new(5).iter().collect();
        #[rustfmt::skip]
        let expected = vec![
            (0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3), (1, 3), (0, 4), (1, 4),
            (2, 4), (1, 3), (2, 3), (1, 2), (2, 2), (1, 1), (2, 1), (1, 0), (2, 0),
            (3, 0), (2, 1), (3, 1), (2, 2), (3, 2), (2, 3), (3, 3), (2, 4), (3, 4),
            (4, 4), (3, 3), (4, 3), (3, 2), (4, 2), (3, 1), (4, 1), (3, 0), (4, 0),
        ];
        assert_eq!(coords, expected);
    }

    #[test]
    fn test_strip_covers_grid_with_adjacent_steps() {
        for vertices in 2..=12 {
            let layout = StripLayout::new(vertices);
            let coords: Vec<_> = layout.iter().collect();

            let distinct: HashSet<_> = coords.iter().copied().collect();
            assert_eq!(distinct.len(), vertices * vertices, "V = {vertices}");

            for &(row, col) in &coords {
                assert!(row < vertices && col < vertices);
            }

            for pair in coords.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                assert!(
                    a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1,
                    "V = {vertices}: {a:?} -> {b:?}"
                );
            }
        }
    }

    #[test]
    fn test_every_quad_is_drawn_twice() {
        // Each quad appears as two non-degenerate triangles somewhere in the strip.
        let vertices = 6;
        let coords: Vec<_> = StripLayout::new(vertices).iter().collect();
        let mut triangles = HashSet::new();
        for tri in coords.windows(3) {
            let mut t = [tri[0], tri[1], tri[2]];
            let collinear = (t[0].0 == t[1].0 && t[1].0 == t[2].0)
                || (t[0].1 == t[1].1 && t[1].1 == t[2].1)
                || t[0] == t[1]
                || t[1] == t[2]
                || t[0] == t[2];
            if !collinear {
                t.sort();
                triangles.insert(t);
            }
        }
        assert_eq!(triangles.len(), 2 * (vertices - 1) * (vertices - 1));
    }
}
