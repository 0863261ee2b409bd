//! Ear-clipping triangulation for filling projected country outlines.
//!
//! Rings arrive already projected to screen space, in either winding
//! order, and are usually concave.

use egui::Pos2;

fn cross(o: Pos2, a: Pos2, b: Pos2) -> f32 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

fn signed_area(ring: &[Pos2]) -> f32 {
    let mut sum = 0.0;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        sum += ring[j].x * ring[i].y - ring[i].x * ring[j].y;
        j = i;
    }
    sum / 2.0
}

fn point_in_triangle(p: Pos2, a: Pos2, b: Pos2, c: Pos2) -> bool {
    let d1 = cross(a, b, p);
    let d2 = cross(b, c, p);
    let d3 = cross(c, a, p);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    // On-edge points count as inside.
    !(has_neg && has_pos)
}

/// Triangulates one simple ring into index triples over the ring's own
/// vertex order. Rings with fewer than three points yield nothing.
pub fn triangulate_ring(ring: &[Pos2]) -> Vec<[u32; 3]> {
    if ring.len() < 3 {
        return Vec::new();
    }

    let orientation = signed_area(ring).signum();
    let mut indices: Vec<u32> = (0..ring.len() as u32).collect();
    let mut triangles = Vec::with_capacity(ring.len() - 2);

    'outer: while indices.len() > 3 {
        let m = indices.len();
        for k in 0..m {
            let prev = indices[(k + m - 1) % m];
            let curr = indices[k];
            let next = indices[(k + 1) % m];
            let a = ring[prev as usize];
            let b = ring[curr as usize];
            let c = ring[next as usize];

            // The candidate corner must turn the same way as the ring.
            if cross(a, b, c) * orientation <= 0.0 {
                continue;
            }
            let blocked = indices
                .iter()
                .filter(|&&i| i != prev && i != curr && i != next)
                .any(|&i| point_in_triangle(ring[i as usize], a, b, c));
            if blocked {
                continue;
            }

            triangles.push([prev, curr, next]);
            indices.remove(k);
            continue 'outer;
        }

        // Numerically degenerate ring: close out with a fan.
        for k in 1..indices.len() - 1 {
            triangles.push([indices[0], indices[k], indices[k + 1]]);
        }
        return triangles;
    }

    triangles.push([indices[0], indices[1], indices[2]]);
    triangles
}
