use super::point::Point;

/// Date-ordered, read-only sequence of points.
///
/// The only way to build one is [`Series::from_points`], which stable-sorts
/// by date, so the ordering invariant holds for every instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    points: Vec<Point>,
}

impl Series {
    /// Sorts ascending by date. Points sharing a date keep their input order.
    pub fn from_points(mut points: Vec<Point>) -> Self {
        points.sort_by_key(|p| p.date);
        Series { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Leading `upto` points, clamped to the series length.
    pub fn prefix(&self, upto: usize) -> &[Point] {
        &self.points[..upto.min(self.points.len())]
    }

    /// Last point of the visible prefix, `None` when nothing is visible yet.
    pub fn last_in_prefix(&self, upto: usize) -> Option<&Point> {
        self.prefix(upto).last()
    }

    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }
}
