use std::collections::VecDeque;

use eframe::egui::Pos2;

use super::{HeadState, MIN_TRAIL_POINTS, TAIL_LENGTH};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub position: Pos2,
    pub radius: f32,
}

impl TrailPoint {
    pub fn of(head: &HeadState) -> Option<Self> {
        head.position.map(|position| Self {
            position,
            radius: head.radius,
        })
    }
}

/// Quadratic Bézier piece starting wherever the previous one ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadSegment {
    pub control: Pos2,
    pub end: Pos2,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrailCurve {
    pub start: Pos2,
    pub segments: Vec<QuadSegment>,
}

impl TrailCurve {
    /// Polyline approximation with `steps` lines per segment.
    pub fn flatten(&self, steps: usize) -> Vec<Pos2> {
        let steps = steps.max(1);
        let mut points = Vec::with_capacity(1 + self.segments.len() * steps);
        points.push(self.start);

        let mut from = self.start;
        for segment in &self.segments {
            for step in 1..=steps {
                let t = step as f32 / steps as f32;
                let inverse = 1.0 - t;
                let point = from.to_vec2() * (inverse * inverse)
                    + segment.control.to_vec2() * (2.0 * inverse * t)
                    + segment.end.to_vec2() * (t * t);
                points.push(point.to_pos2());
            }
            from = segment.end;
        }

        points
    }
}

/// Most recent head snapshots, oldest first.
#[derive(Debug, Default)]
pub struct Trail {
    points: VecDeque<TrailPoint>,
}

impl Trail {
    pub fn push(&mut self, point: TrailPoint) {
        self.points.push_back(point);
        while self.points.len() > TAIL_LENGTH {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    /// Smoothed curve through the history: from the oldest point through the
    /// midpoints of the later ones, ending on the newest.
    pub fn curve(&self) -> Option<TrailCurve> {
        let len = self.points.len();
        if len < MIN_TRAIL_POINTS {
            return None;
        }

        let at = |index: usize| self.points[index].position;
        let mut segments = Vec::with_capacity(len - 3);
        let mut index = 2;
        while index < len - 2 {
            segments.push(QuadSegment {
                control: at(index),
                end: at(index).lerp(at(index + 1), 0.5),
            });
            index += 1;
        }
        segments.push(QuadSegment {
            control: at(index),
            end: at(index + 1),
        });

        Some(TrailCurve {
            start: at(0),
            segments,
        })
    }
}
