//! Immovable obstacles.

use swarm_core::{Aabb, Segment, SwarmResult, Vec2, WorldConfig};

/// A static obstacle described by its sensing segments.
///
/// Segments are validated on construction, so every wall in a world has
/// only non-degenerate edges.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wall {
    segments: Vec<Segment>,
}

impl Wall {
    /// Axis-aligned rectangle with top-left corner `(x, y)`.  Its four edges
    /// are the sensing segments.
    pub fn rect(x: f64, y: f64, w: f64, h: f64) -> SwarmResult<Self> {
        let tl = Vec2::new(x, y);
        let tr = Vec2::new(x + w, y);
        let br = Vec2::new(x + w, y + h);
        let bl = Vec2::new(x, y + h);
        Ok(Self {
            segments: vec![
                Segment::new(tl, tr)?,
                Segment::new(tr, br)?,
                Segment::new(br, bl)?,
                Segment::new(bl, tl)?,
            ],
        })
    }

    /// Open chain through `points`.  With `closed`, the last point connects
    /// back to the first.
    pub fn polyline(points: &[Vec2], closed: bool) -> SwarmResult<Self> {
        let mut segments = Vec::with_capacity(points.len());
        for pair in points.windows(2) {
            segments.push(Segment::new(pair[0], pair[1])?);
        }
        if closed && points.len() > 2 {
            segments.push(Segment::new(points[points.len() - 1], points[0])?);
        }
        Ok(Self { segments })
    }

    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    #[inline]
    pub fn sensing_segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Bounding box of all segments, or `None` for an empty wall.
    pub fn aabb(&self) -> Option<Aabb> {
        let mut it = self.segments.iter().map(Segment::aabb);
        let first = it.next()?;
        Some(it.fold(first, |acc, b| {
            Aabb::new(
                Vec2::new(acc.min.x.min(b.min.x), acc.min.y.min(b.min.y)),
                Vec2::new(acc.max.x.max(b.max.x), acc.max.y.max(b.max.y)),
            )
        }))
    }
}

/// Four one-unit-thick walls just outside the padded arena, so that
/// wall-sensing agents perceive the border.
pub fn border_walls(config: &WorldConfig) -> SwarmResult<Vec<Wall>> {
    let p = config.padding;
    let (w, h) = (config.width, config.height);
    Ok(vec![
        Wall::rect(p - 1.0, p - 1.0, 1.0, h)?,
        Wall::rect(p - 1.0, p - 1.0, w, 1.0)?,
        Wall::rect(p - 1.0, p + h + 1.0, w, 1.0)?,
        Wall::rect(p + w + 1.0, p - 1.0, 1.0, h)?,
    ])
}
