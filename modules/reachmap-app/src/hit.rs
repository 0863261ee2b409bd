//! Screen-space hit testing for projected country outlines.

use egui::Pos2;

/// Ray-casting test against one closed ring.
pub fn point_in_ring(point: Pos2, ring: &[Pos2]) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[j];
        if (a.y > point.y) != (b.y > point.y) {
            let crossing_x = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if point.x < crossing_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Inside the exterior ring and outside every hole.
pub fn point_in_polygon(point: Pos2, exterior: &[Pos2], holes: &[Vec<Pos2>]) -> bool {
    point_in_ring(point, exterior) && !holes.iter().any(|hole| point_in_ring(point, hole))
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn square(min: f32, max: f32) -> Vec<Pos2> {
        vec![
            pos2(min, min),
            pos2(max, min),
            pos2(max, max),
            pos2(min, max),
        ]
    }

    #[test]
    fn square_contains_its_center() {
        let ring = square(0.0, 10.0);
        assert!(point_in_ring(pos2(5.0, 5.0), &ring));
        assert!(!point_in_ring(pos2(15.0, 5.0), &ring));
        assert!(!point_in_ring(pos2(5.0, -1.0), &ring));
    }

    #[test]
    fn concave_ring_excludes_the_notch() {
        // A "U": solid on the left, right, and bottom, open in the top middle.
        let ring = vec![
            pos2(0.0, 0.0),
            pos2(10.0, 0.0),
            pos2(10.0, 10.0),
            pos2(7.0, 10.0),
            pos2(7.0, 3.0),
            pos2(3.0, 3.0),
            pos2(3.0, 10.0),
            pos2(0.0, 10.0),
        ];
        assert!(point_in_ring(pos2(1.5, 8.0), &ring));
        assert!(point_in_ring(pos2(8.5, 8.0), &ring));
        assert!(point_in_ring(pos2(5.0, 1.5), &ring));
        assert!(!point_in_ring(pos2(5.0, 8.0), &ring));
    }

    #[test]
    fn holes_punch_through() {
        let exterior = square(0.0, 10.0);
        let hole = square(4.0, 6.0);
        assert!(point_in_polygon(pos2(2.0, 2.0), &exterior, &[hole.clone()]));
        assert!(!point_in_polygon(pos2(5.0, 5.0), &exterior, &[hole]));
    }

    #[test]
    fn degenerate_rings_never_match() {
        assert!(!point_in_ring(pos2(0.0, 0.0), &[]));
        assert!(!point_in_ring(pos2(0.0, 0.0), &[pos2(0.0, 0.0), pos2(1.0, 1.0)]));
    }
}
