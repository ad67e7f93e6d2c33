//! Ordered log of recorded pointer clicks

use super::geometry::Point;

/// Click positions in the order they were recorded
///
/// Entries are only ever appended. Insertion order is the draw order of the
/// markers on the canvas.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClickHistory {
    points: Vec<Point>,
}

impl ClickHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point to the end of the history
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recently recorded point
    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }
}

impl FromIterator<Point> for ClickHistory {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let clicks = [(3.0, 4.0), (-10.0, 2.5), (3.0, 4.0), (1e6, -1e6)];
        let mut history = ClickHistory::new();
        for (x, y) in clicks {
            history.push(Point::new(x, y));
        }

        assert_eq!(history.len(), clicks.len());
        let recorded: Vec<(f32, f32)> = history.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(recorded, clicks.to_vec());
    }

    #[test]
    fn test_push_never_rewrites_prefix() {
        let mut history = ClickHistory::new();
        let mut previous: Vec<Point> = Vec::new();
        for i in 0..50 {
            history.push(Point::new(i as f32, (i * 7 % 13) as f32));
            assert_eq!(&history.as_slice()[..previous.len()], previous.as_slice());
            assert_eq!(history.len(), previous.len() + 1);
            previous = history.as_slice().to_vec();
        }
    }

    #[test]
    fn test_empty_history() {
        let history = ClickHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.last(), None);
        assert_eq!(history.iter().count(), 0);
    }

    #[test]
    fn test_from_iterator() {
        let history: ClickHistory = [Point::new(0.0, 0.0), Point::new(100.0, 100.0)]
            .into_iter()
            .collect();
        assert_eq!(history.len(), 2);
        assert_eq!(history.last(), Some(&Point::new(100.0, 100.0)));
    }
}
