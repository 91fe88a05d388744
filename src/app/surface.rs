use eframe::egui::{Color32, Painter, Pos2, Shape, Stroke};
use focus_trail::motion::{BlendMode, StrokeStyle, Surface, Viewport};

pub(super) struct PainterSurface {
    painter: Painter,
}

impl PainterSurface {
    pub(super) fn new(painter: Painter) -> Self {
        Self { painter }
    }
}

/// egui has no compositing modes: `Lighter` becomes an additive color
/// (premultiplied with zero alpha) and `Overlay` a translucent tint.
fn blended(color: Color32, blend: BlendMode) -> Color32 {
    match blend {
        BlendMode::Normal => color,
        BlendMode::Lighter => Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), 0),
        BlendMode::Overlay => color.gamma_multiply(0.55),
    }
}

impl Surface for PainterSurface {
    fn clear(&mut self, viewport: &Viewport) {
        // Layers start empty every frame; only the drawable area needs setting.
        self.painter.set_clip_rect(viewport.rect());
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter.circle_filled(center, radius, color);
    }

    fn stroke_polyline(&mut self, points: &[Pos2], style: StrokeStyle) {
        let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
            return;
        };
        if points.len() < 2 {
            return;
        }

        let color = blended(style.color, style.blend);
        self.painter
            .add(Shape::line(points.to_vec(), Stroke::new(style.width, color)));

        // round caps
        let cap_radius = style.width / 2.0;
        self.painter.circle_filled(first, cap_radius, color);
        self.painter.circle_filled(last, cap_radius, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighter_is_additive() {
        let color = blended(Color32::from_rgb(0x55, 0x55, 0x55), BlendMode::Lighter);
        assert_eq!(color.a(), 0);
        assert_eq!(color.r(), 0x55);
    }

    #[test]
    fn overlay_is_translucent() {
        let color = blended(Color32::WHITE, BlendMode::Overlay);
        assert!(color.a() < 255);
        assert_eq!(blended(Color32::WHITE, BlendMode::Normal), Color32::WHITE);
    }
}
