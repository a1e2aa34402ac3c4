//! An in-memory surface that records drawing events. Used by tests and by
//! anything that wants to inspect a drawing without rendering it.

use crate::{Color, Surface};
use glam::DVec2;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawEvent {
    Stroke {
        points: Vec<DVec2>,
        color: Color,
        width: f64,
    },
    Fill {
        points: Vec<DVec2>,
        fill: Color,
        stroke: Color,
    },
    Refresh,
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub events: Vec<DrawEvent>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stroke_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, DrawEvent::Stroke { .. }))
            .count()
    }

    pub fn fill_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, DrawEvent::Fill { .. }))
            .count()
    }

    pub fn refresh_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, DrawEvent::Refresh))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn stroke_path(&mut self, points: &[DVec2], color: Color, width: f64) {
        self.events.push(DrawEvent::Stroke {
            points: points.to_vec(),
            color,
            width,
        });
    }

    fn fill_polygon(&mut self, points: &[DVec2], fill: Color, stroke: Color) {
        self.events.push(DrawEvent::Fill {
            points: points.to_vec(),
            fill,
            stroke,
        });
    }

    fn refresh(&mut self) {
        self.events.push(DrawEvent::Refresh);
    }
}
