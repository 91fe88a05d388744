use eframe::egui::Pos2;

pub fn path_length(points: &[Pos2]) -> f32 {
    points.windows(2).map(|pair| pair[0].distance(pair[1])).sum()
}

/// Arc-length spans of a path of `length` left drawn by a `[dash, gap]`
/// pattern shifted by `offset`: position `s` is drawn when
/// `(s + offset) mod (dash + gap) < dash`.
pub fn visible_spans(length: f32, dash: f32, gap: f32, offset: f32) -> Vec<(f32, f32)> {
    if length <= 0.0 {
        return Vec::new();
    }

    let period = dash + gap;
    if dash <= 0.0 || period <= 0.0 {
        return Vec::new();
    }
    if gap <= 0.0 {
        return vec![(0.0, length)];
    }

    let mut spans = Vec::new();
    let mut period_start = -offset.rem_euclid(period);
    while period_start < length {
        let start = period_start.max(0.0);
        let end = (period_start + dash).min(length);
        if end > start {
            spans.push((start, end));
        }
        period_start += period;
    }

    spans
}

/// The part of a polyline between arc lengths `from` and `to`.
pub fn sub_polyline(points: &[Pos2], from: f32, to: f32) -> Vec<Pos2> {
    let mut out = Vec::new();
    if to <= from {
        return out;
    }

    let mut travelled = 0.0;
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let segment = a.distance(b);
        let segment_start = travelled;
        let segment_end = travelled + segment;
        travelled = segment_end;

        if segment <= f32::EPSILON || segment_end <= from || segment_start >= to {
            continue;
        }

        let start = if from <= segment_start {
            a
        } else {
            a.lerp(b, (from - segment_start) / segment)
        };
        let end = if to >= segment_end {
            b
        } else {
            a.lerp(b, (to - segment_start) / segment)
        };

        if out.last() != Some(&start) {
            out.push(start);
        }
        out.push(end);
    }

    out
}

#[cfg(test)]
mod tests {
    use eframe::egui::pos2;

    use super::*;

    #[test]
    fn offset_of_one_period_shows_leading_dash() {
        assert_eq!(visible_spans(16.0, 18.0, 18.0, 36.0), vec![(0.0, 16.0)]);
    }

    #[test]
    fn offset_of_one_dash_hides_short_path() {
        assert!(visible_spans(16.0, 18.0, 18.0, 18.0).is_empty());
    }

    #[test]
    fn partial_offset_reveals_tail_of_path() {
        assert_eq!(visible_spans(16.0, 18.0, 18.0, 27.0), vec![(9.0, 16.0)]);
    }

    #[test]
    fn long_path_alternates_dash_and_gap() {
        let spans = visible_spans(50.0, 10.0, 10.0, 0.0);
        assert_eq!(spans, vec![(0.0, 10.0), (20.0, 30.0), (40.0, 50.0)]);
    }

    #[test]
    fn sub_polyline_cuts_across_vertices() {
        let points = [pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(10.0, 10.0)];
        let cut = sub_polyline(&points, 5.0, 15.0);
        assert_eq!(cut, vec![pos2(5.0, 0.0), pos2(10.0, 0.0), pos2(10.0, 5.0)]);
    }

    #[test]
    fn sub_polyline_starting_on_a_vertex_has_no_degenerate_piece() {
        let points = [pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(10.0, 10.0)];
        let cut = sub_polyline(&points, 10.0, 20.0);
        assert_eq!(cut, vec![pos2(10.0, 0.0), pos2(10.0, 10.0)]);
        assert_eq!(path_length(&cut), 10.0);
    }
}
