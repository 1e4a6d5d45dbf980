use std::f64::consts::TAU;

use tracing::trace;

use crate::geometry::{Aabb, Polygon, Segment};
use crate::math::intersect::ray_segment_intersect_2d;
use crate::math::{angle, Point2, Vector2, TOLERANCE};
use crate::scene::WallIndex;

use super::config::SweepConfig;

/// Jitter cast either side of each segment endpoint so corners throw
/// shadows instead of falling between two evenly spaced samples.
const ANGLE_JITTER: f64 = 1e-6;

/// Sample angles closer than this collapse into a single ray.
const ANGLE_DEDUP: f64 = 1e-7;

/// Consecutive hit points closer than this collapse into a single vertex.
const POINT_DEDUP: f64 = 1e-6;

/// Radial-sweep visibility polygon.
///
/// Casts rays from `origin` across the configured sector (or the full turn)
/// and keeps, per ray, the nearest blocking intersection among the wall
/// index's candidates and the configuration's synthetic boundary segments,
/// falling back to the radius limit. Hit points are emitted in
/// counter-clockwise order; for a restricted sector the origin itself is the
/// first vertex, closing the wedge.
///
/// A zero radius or zero-width sector yields the empty polygon, never an
/// error. Two segments meeting on a sampled ray tie-break naturally toward
/// the nearer hit.
#[must_use]
pub fn sweep_polygon(origin: &Point2, config: &SweepConfig, walls: &dyn WallIndex) -> Polygon {
    if config.radius <= TOLERANCE {
        return Polygon::empty();
    }
    let (start, span) = match &config.sector {
        Some(sector) => {
            let width = sector.width_radians();
            if width <= TOLERANCE {
                return Polygon::empty();
            }
            (sector.center() - width / 2.0, width.min(TAU))
        }
        None => (0.0, TAU),
    };
    let full_turn = config.sector.is_none();

    // Candidate segments: nearby blocking walls plus the synthetic boundary.
    let region = Aabb::around(origin, config.radius);
    let mut segments: Vec<Segment> = walls
        .query_near(&region)
        .into_iter()
        .filter(Segment::blocks)
        .collect();
    segments.extend(config.boundary.iter().filter(|s| s.blocks()).copied());

    // Sample angles, expressed as offsets from the sector start so a plain
    // ascending sort yields counter-clockwise winding.
    let mut offsets: Vec<f64> = Vec::new();
    if full_turn {
        let rays = config.density.max(3);
        let step = TAU / rays as f64;
        offsets.extend((0..rays).map(|i| i as f64 * step));
    } else if let Some(sector) = &config.sector {
        let steps = sector.sample_count(config.density);
        let step = span / steps as f64;
        offsets.extend((0..=steps).map(|i| i as f64 * step));
    }
    for seg in &segments {
        for p in [seg.a, seg.b] {
            if (p - origin).norm() <= TOLERANCE {
                continue;
            }
            let delta = angle::normalize(angle::bearing(origin, &p) - start);
            for candidate in [delta - ANGLE_JITTER, delta, delta + ANGLE_JITTER] {
                if full_turn {
                    offsets.push(angle::normalize(candidate));
                } else if candidate >= -TOLERANCE && candidate <= span + TOLERANCE {
                    offsets.push(candidate.clamp(0.0, span));
                }
            }
        }
    }
    offsets.sort_by(f64::total_cmp);
    offsets.dedup_by(|a, b| (*a - *b).abs() < ANGLE_DEDUP);

    // Cast: nearest blocking hit per ray, radius limit otherwise.
    let mut points: Vec<Point2> = Vec::with_capacity(offsets.len());
    for &offset in &offsets {
        let theta = start + offset;
        let dir = Vector2::new(theta.cos(), theta.sin());
        let mut nearest = config.radius;
        for seg in &segments {
            if let Some((_, t)) = ray_segment_intersect_2d(origin, &dir, &seg.a, &seg.b) {
                if t > TOLERANCE && t < nearest {
                    nearest = t;
                }
            }
        }
        let pt = origin + dir * nearest;
        if points
            .last()
            .map_or(true, |last| (pt - last).norm() > POINT_DEDUP)
        {
            points.push(pt);
        }
    }
    if full_turn && points.len() > 1 {
        let first = points[0];
        let last = points[points.len() - 1];
        if (first - last).norm() <= POINT_DEDUP {
            points.pop();
        }
    }

    let polygon = if full_turn {
        Polygon::new(points)
    } else {
        let mut vertices = Vec::with_capacity(points.len() + 1);
        vertices.push(*origin);
        vertices.extend(points);
        Polygon::new(vertices)
    };

    if config.trace {
        trace!(
            rays = offsets.len(),
            candidates = segments.len(),
            vertices = polygon.len(),
            "visibility sweep complete"
        );
    }
    polygon
}
