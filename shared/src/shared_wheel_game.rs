use serde::{Serialize, Deserialize};

use crate::constants::WHEEL_SPIN_MS;
use crate::outcome_policy::RandomSource;

// Canvas angles: 0° is 3 o'clock and angles grow clockwise, the same
// convention `CanvasRenderingContext2d::arc` and `rotate` use.
pub const POINTER_ANGLE_DEG: f64 = 270.0; // 12 o'clock
pub const MIN_SPINS: u32 = 5;
pub const MAX_SPINS: u32 = 8;
pub const LANDING_MARGIN_DEG: f64 = 10.0;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Win,
    Lose,
}

impl Segment {
    pub fn from_outcome(win: bool) -> Self {
        if win { Segment::Win } else { Segment::Lose }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, Segment::Win)
    }
}

/// Two-colour wheel. The winning arc runs clockwise from `win_start_deg` to
/// `win_end_deg` in the wheel's own (unrotated) frame; the rest is losing.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    pub win_start_deg: f64,
    pub win_end_deg: f64,
    pub pointer_deg: f64,
}

impl Default for WheelGeometry {
    fn default() -> Self {
        // Win half is drawn on the bottom with the wheel at rest, so the
        // pointer starts over the losing half.
        Self {
            win_start_deg: 0.0,
            win_end_deg: 180.0,
            pointer_deg: POINTER_ANGLE_DEG,
        }
    }
}

pub fn normalize_deg(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(360.0);
    if normalized >= 360.0 { 0.0 } else { normalized }
}

impl WheelGeometry {
    fn win_span(&self) -> f64 {
        let span = normalize_deg(self.win_end_deg - self.win_start_deg);
        if span == 0.0 { 360.0 } else { span }
    }

    /// `(start, span)` of a segment in the wheel frame, in degrees.
    pub fn band(&self, segment: Segment) -> (f64, f64) {
        match segment {
            Segment::Win => (normalize_deg(self.win_start_deg), self.win_span()),
            Segment::Lose => (normalize_deg(self.win_end_deg), 360.0 - self.win_span()),
        }
    }

    /// Start and end of a segment in radians, ready for `arc`.
    pub fn arc_radians(&self, segment: Segment) -> (f64, f64) {
        let (start, span) = self.band(segment);
        (start.to_radians(), (start + span).to_radians())
    }

    pub fn segment_at(&self, wheel_angle: f64) -> Segment {
        let offset = normalize_deg(wheel_angle - self.win_start_deg);
        if offset < self.win_span() { Segment::Win } else { Segment::Lose }
    }

    /// Wheel-frame angle sitting under the pointer when the wheel is rotated
    /// clockwise by `rotation` degrees.
    pub fn angle_under_pointer(&self, rotation: f64) -> f64 {
        normalize_deg(self.pointer_deg - rotation)
    }

    pub fn segment_under_pointer(&self, rotation: f64) -> Segment {
        self.segment_at(self.angle_under_pointer(rotation))
    }

    /// Resting rotation that puts the pointer over the requested segment.
    /// Always lands at least `MIN_SPINS` full turns past `current`.
    pub fn target_rotation(&self, current: f64, win: bool, source: &mut dyn RandomSource) -> f64 {
        let (start, span) = self.band(Segment::from_outcome(win));
        let margin = LANDING_MARGIN_DEG.min(span / 4.0);
        let landing = start + margin + source.next_unit() * (span - 2.0 * margin);

        let resting = normalize_deg(self.pointer_deg - landing);
        let adjustment = normalize_deg(resting - normalize_deg(current));
        let spins = MIN_SPINS + source.next_index((MAX_SPINS - MIN_SPINS + 1) as usize) as u32;

        current + spins as f64 * 360.0 + adjustment
    }
}

pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SpinAnimation {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
}

impl SpinAnimation {
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to, duration_ms: WHEEL_SPIN_MS as f64 }
    }

    pub fn rotation_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        let progress = elapsed_ms / self.duration_ms;
        self.from + (self.to - self.from) * ease_out_cubic(progress)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome_policy::ScriptedDraws;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Independent check: rotate the pointer's screen vector back into the
    /// wheel frame with trig and read the colour from the drawn arcs.
    fn drawn_segment_under_pointer(geometry: &WheelGeometry, rotation: f64) -> Segment {
        let pointer = geometry.pointer_deg.to_radians();
        let (px, py) = (pointer.cos(), pointer.sin());
        let back = -rotation.to_radians();
        let x = px * back.cos() - py * back.sin();
        let y = px * back.sin() + py * back.cos();
        let local = y.atan2(x).to_degrees().rem_euclid(360.0);

        let (start, end) = geometry.arc_radians(Segment::Win);
        let (start, end) = (start.to_degrees(), end.to_degrees());
        let inside = if end <= 360.0 {
            local >= start && local < end
        } else {
            local >= start || local < end - 360.0
        };
        if inside { Segment::Win } else { Segment::Lose }
    }

    #[test]
    fn test_default_wheel_rests_on_losing_half() {
        let geometry = WheelGeometry::default();
        // Unrotated, 12 o'clock is 270° in the wheel frame: the top half.
        assert_eq!(geometry.segment_under_pointer(0.0), Segment::Lose);
        assert_eq!(drawn_segment_under_pointer(&geometry, 0.0), Segment::Lose);
        // Half a turn brings the bottom half under the pointer.
        assert_eq!(geometry.segment_under_pointer(180.0), Segment::Win);
        assert_eq!(drawn_segment_under_pointer(&geometry, 180.0), Segment::Win);
        // A quarter turn clockwise puts 180° (9 o'clock) under the pointer,
        // which is the end of the winning arc.
        assert_eq!(geometry.angle_under_pointer(90.0), 180.0);
        assert_eq!(geometry.segment_under_pointer(90.0), Segment::Lose);
        assert_eq!(geometry.segment_under_pointer(91.0), Segment::Win);
    }

    #[test]
    fn test_target_lands_in_requested_band() {
        let geometry = WheelGeometry::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut rotation = 0.0;
        for i in 0..500 {
            let win = i % 3 == 0;
            let next = geometry.target_rotation(rotation, win, &mut rng);
            assert_eq!(geometry.segment_under_pointer(next).is_win(), win);
            assert_eq!(drawn_segment_under_pointer(&geometry, next).is_win(), win);
            rotation = next;
        }
    }

    #[test]
    fn test_target_respects_other_geometries() {
        let geometries = [
            WheelGeometry { win_start_deg: 180.0, win_end_deg: 360.0, pointer_deg: POINTER_ANGLE_DEG },
            WheelGeometry { win_start_deg: 300.0, win_end_deg: 60.0, pointer_deg: 0.0 },
            WheelGeometry { win_start_deg: 45.0, win_end_deg: 135.0, pointer_deg: 90.0 },
        ];
        let mut rng = StdRng::seed_from_u64(9);
        for geometry in geometries {
            for win in [true, false] {
                for start in [0.0, 37.5, 719.0, 12_345.6] {
                    let next = geometry.target_rotation(start, win, &mut rng);
                    assert_eq!(drawn_segment_under_pointer(&geometry, next).is_win(), win);
                }
            }
        }
    }

    #[test]
    fn test_rotation_only_accumulates() {
        let geometry = WheelGeometry::default();
        let mut draws = ScriptedDraws::new([0.0, 0.0, 0.999, 0.999]);
        let first = geometry.target_rotation(0.0, true, &mut draws);
        assert!(first >= MIN_SPINS as f64 * 360.0);
        let second = geometry.target_rotation(first, false, &mut draws);
        assert!(second > first);
        assert!(second - first < (MAX_SPINS + 1) as f64 * 360.0);
    }

    #[test]
    fn test_landing_keeps_margin_from_edges() {
        let geometry = WheelGeometry::default();
        for draw in [0.0, 0.999_999] {
            let mut draws = ScriptedDraws::new([draw, 0.0]);
            let rotation = geometry.target_rotation(0.0, true, &mut draws);
            let under = geometry.angle_under_pointer(rotation);
            assert!(under >= LANDING_MARGIN_DEG - 1e-6);
            assert!(under <= 180.0 - LANDING_MARGIN_DEG + 1e-6);
        }
    }

    #[test]
    fn test_spin_animation_decelerates() {
        let animation = SpinAnimation::new(90.0, 2250.0);
        assert_eq!(animation.rotation_at(0.0), 90.0);
        assert_eq!(animation.rotation_at(animation.duration_ms), 2250.0);
        assert_eq!(animation.rotation_at(animation.duration_ms * 2.0), 2250.0);

        let quarter = animation.rotation_at(animation.duration_ms * 0.25) - animation.rotation_at(0.0);
        let last_quarter = animation.rotation_at(animation.duration_ms)
            - animation.rotation_at(animation.duration_ms * 0.75);
        assert!(quarter > last_quarter);
        assert!(animation.is_finished(4000.0));
    }
}
