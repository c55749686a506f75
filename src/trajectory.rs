use nalgebra::Vector2;

/// Last `capacity` positions of a moving body, oldest evicted first.
#[derive(Clone, Debug)]
pub struct Trajectory {
    points: Vec<Vector2<f64>>,
    capacity: usize,
    head: usize,
}

impl Trajectory {
    pub fn with_capacity(capacity: usize) -> Trajectory {
        assert!(capacity > 0, "trajectory capacity must be positive");
        Trajectory {
            points: Vec::with_capacity(capacity),
            capacity,
            head: 0,
        }
    }

    pub fn push(&mut self, point: Vector2<f64>) {
        if self.points.len() < self.capacity {
            self.points.push(point);
        } else {
            self.points[self.head] = point;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.points.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Chronological order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Vector2<f64>> + '_ {
        let (newer, older) = self.points.split_at(self.head);
        older.iter().chain(newer.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(i: usize) -> Vector2<f64> {
        Vector2::new(i as f64, 2. * i as f64)
    }

    fn contents(trajectory: &Trajectory) -> Vec<Vector2<f64>> {
        trajectory.iter().cloned().collect()
    }

    #[test]
    fn fills_in_order_until_capacity() {
        let mut trajectory = Trajectory::with_capacity(100);
        for k in 0..100 {
            trajectory.push(point(k));
            assert_eq!(trajectory.len(), k + 1);
            assert_eq!(contents(&trajectory), (0..=k).map(point).collect::<Vec<_>>());
        }
        assert!(trajectory.is_full());
    }

    #[test]
    fn evicts_oldest_once_full() {
        let mut trajectory = Trajectory::with_capacity(100);
        for k in 0..357 {
            trajectory.push(point(k));
        }
        assert_eq!(trajectory.len(), 100);
        assert_eq!(contents(&trajectory), (257..357).map(point).collect::<Vec<_>>());
    }

    #[test]
    fn wraps_exactly_at_capacity_boundary() {
        let mut trajectory = Trajectory::with_capacity(3);
        for k in 0..6 {
            trajectory.push(point(k));
        }
        assert_eq!(contents(&trajectory), vec![point(3), point(4), point(5)]);
        trajectory.push(point(6));
        assert_eq!(contents(&trajectory), vec![point(4), point(5), point(6)]);
    }

    #[test]
    fn starts_empty() {
        let trajectory = Trajectory::with_capacity(4);
        assert!(trajectory.is_empty());
        assert_eq!(trajectory.iter().count(), 0);
        assert_eq!(trajectory.capacity(), 4);
    }
}
