//! Point container for the picker canvas.

/// Pixel radius inside which two points count as the same point.
pub const DUPLICATE_THRESHOLD: f64 = 10.0;

/// A position in canvas pixel space (origin top-left, Y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Ordered collection of picked points.
///
/// Insertion order is click/generation order; it drives line continuity and
/// the order of exported literals. Near-duplicates are rejected on insert.
#[derive(Debug, Clone, Default)]
pub struct PointStore {
    /// Points in insertion order
    points: Vec<Point>,
}

impl PointStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Inserts `p` unless an existing point lies within [`DUPLICATE_THRESHOLD`].
    ///
    /// Returns `true` if the point was added, `false` if it was suppressed.
    pub fn insert(&mut self, p: Point) -> bool {
        if self.has_point_near(p) {
            log::trace!("Suppressed duplicate point ({:.1}, {:.1})", p.x, p.y);
            return false;
        }
        self.points.push(p);
        true
    }

    fn has_point_near(&self, p: Point) -> bool {
        self.points
            .iter()
            .any(|existing| existing.distance_to(p) < DUPLICATE_THRESHOLD)
    }

    /// Index of the most recently added point within the threshold of `p`.
    pub fn find_nearest(&self, p: Point) -> Option<usize> {
        self.points
            .iter()
            .rposition(|existing| existing.distance_to(p) < DUPLICATE_THRESHOLD)
    }

    /// Removes the point at `index`, keeping the order of the rest.
    ///
    /// Returns `None` when the index is out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<Point> {
        if index < self.points.len() {
            Some(self.points.remove(index))
        } else {
            None
        }
    }

    /// Removes every point.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Replaces the whole point set (shape generation, import).
    pub fn replace_all(&mut self, points: Vec<Point>) {
        self.points = points;
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_suppresses_same_point() {
        let mut store = PointStore::new();
        assert!(store.insert(Point::new(100.0, 100.0)));
        assert!(!store.insert(Point::new(100.0, 100.0)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn insert_suppresses_points_within_threshold() {
        let mut store = PointStore::new();
        store.insert(Point::new(100.0, 100.0));
        assert!(!store.insert(Point::new(106.0, 107.0)));
        assert_eq!(store.len(), 1);

        // Exactly at the threshold is far enough away
        assert!(store.insert(Point::new(110.0, 100.0)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn find_nearest_prefers_most_recent() {
        let mut store = PointStore::new();
        store.replace_all(vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(104.0, 100.0),
        ]);

        assert_eq!(store.find_nearest(Point::new(102.0, 100.0)), Some(2));
        assert_eq!(store.find_nearest(Point::new(1.0, 1.0)), Some(0));
        assert_eq!(store.find_nearest(Point::new(300.0, 300.0)), None);
    }

    #[test]
    fn remove_at_preserves_order() {
        let mut store = PointStore::new();
        store.replace_all(vec![
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.0),
            Point::new(100.0, 0.0),
        ]);

        assert_eq!(store.remove_at(1), Some(Point::new(50.0, 0.0)));
        assert_eq!(
            store.points(),
            &[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]
        );
        assert_eq!(store.remove_at(5), None);
    }

    #[test]
    fn clear_empties_store() {
        let mut store = PointStore::new();
        store.insert(Point::new(1.0, 2.0));
        store.clear();
        assert!(store.is_empty());
    }
}
