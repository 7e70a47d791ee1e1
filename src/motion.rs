//! Pure math for the decorative animations.
//!
//! Two consumers: the product vignettes step through a small cyclic
//! [`AnimationPhase`] on a fixed timer, and the security visuals derive ring
//! rotations and satellite orbits from a free-running phase advanced once per
//! animation frame.

/// Cyclic counter driving the product vignette stages.
///
/// Always in `[0, COUNT)`; the only way to move it is `advance`, so the range
/// invariant is enforced here rather than at every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationPhase(u8);

impl AnimationPhase {
    pub const COUNT: u8 = 4;

    pub fn advance(self) -> Self {
        Self((self.0 + 1) % Self::COUNT)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Milliseconds between vignette stage advances.
pub const PHASE_TICK_MS: u32 = 2000;

/// Ambient phase increment per animation frame.
pub const AMBIENT_STEP_PER_FRAME: f64 = 0.02;

/// Number of satellites orbiting the vendor-stack hub.
pub const ORBIT_SLOTS: usize = 5;

/// Orbit radius in pixels.
pub const ORBIT_RADIUS: f64 = 100.0;

/// Rotation angles in degrees for the three concentric security rings: inner
/// forward, middle counter-rotating, outer slow.
pub fn ring_angles(phase: f64) -> [f64; 3] {
    [phase * 20.0, -phase * 15.0, phase * 5.0]
}

/// Pixel offset of orbit slot `slot` of `total`, evenly spaced around the hub
/// and advanced 10 degrees per unit of phase.
pub fn orbit_position(slot: usize, total: usize, phase: f64, radius: f64) -> (f64, f64) {
    let angle = (slot as f64 * (360.0 / total as f64) + phase * 10.0).to_radians();
    (angle.cos() * radius, angle.sin() * radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_cycles_through_four_stages() {
        let mut phase = AnimationPhase::default();
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(phase.get());
            phase = phase.advance();
        }
        assert_eq!(seen, [0, 1, 2, 3, 0]);
    }

    #[test]
    fn default_phase_is_initial_stage() {
        assert_eq!(AnimationPhase::default().get(), 0);
    }

    #[test]
    fn ring_angles_scale_with_phase() {
        assert_eq!(ring_angles(0.0), [0.0, 0.0, 0.0]);
        let [inner, middle, outer] = ring_angles(2.0);
        assert_eq!(inner, 40.0);
        assert_eq!(middle, -30.0);
        assert_eq!(outer, 10.0);
    }

    #[test]
    fn orbit_slots_are_evenly_spaced() {
        let (x0, y0) = orbit_position(0, ORBIT_SLOTS, 0.0, ORBIT_RADIUS);
        assert!((x0 - ORBIT_RADIUS).abs() < 1e-9);
        assert!(y0.abs() < 1e-9);

        // Slot 1 sits 72 degrees around the circle.
        let (x1, y1) = orbit_position(1, ORBIT_SLOTS, 0.0, ORBIT_RADIUS);
        let expected = 72.0_f64.to_radians();
        assert!((x1 - expected.cos() * ORBIT_RADIUS).abs() < 1e-9);
        assert!((y1 - expected.sin() * ORBIT_RADIUS).abs() < 1e-9);
    }

    #[test]
    fn orbit_advances_ten_degrees_per_phase_unit() {
        let (x, y) = orbit_position(0, ORBIT_SLOTS, 9.0, ORBIT_RADIUS);
        let expected = 90.0_f64.to_radians();
        assert!((x - expected.cos() * ORBIT_RADIUS).abs() < 1e-9);
        assert!((y - expected.sin() * ORBIT_RADIUS).abs() < 1e-9);
    }
}
