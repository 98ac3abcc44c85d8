// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Linear color blending in normalized RGBA.

use dotline_port::Rgba;

/// Blends `a` toward `b` by `fraction`.
///
/// Each channel is `(1 - fraction) * a + fraction * b`. `fraction` is clamped
/// into `[0, 1]` and the result channels are clamped into `[0, 1]`, so
/// `interpolate(a, b, 0.0) == a` and `interpolate(a, b, 1.0) == b`.
pub fn interpolate(a: Rgba, b: Rgba, fraction: f32) -> Rgba {
    let t = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    let [ar, ag, ab, aa] = a.to_array();
    let [br, bg, bb, ba] = b.to_array();
    let mix = |x: f32, y: f32| (1.0 - t) * x + t * y;
    Rgba::new(mix(ar, br), mix(ag, bg), mix(ab, bb), mix(aa, ba))
}

/// Color of the dot at `index` while progress sits `delta` pages away.
///
/// Dots at or before the progress point fade from active toward inactive by
/// `delta`; dots after it come in from inactive toward active by `1 - delta`.
/// The two branches meet at the crossing so the ramp has no seam.
pub(crate) fn approach_color(
    active: Rgba,
    inactive: Rgba,
    index: f32,
    progress: f32,
    delta: f32,
) -> Rgba {
    if index <= progress {
        interpolate(active, inactive, delta)
    } else {
        interpolate(inactive, active, 1.0 - delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const INK: Rgba = Rgba::BLACK;

    #[test]
    fn endpoints_are_exact() {
        let a = Rgba::new(0.2, 0.4, 0.6, 0.8);
        let b = Rgba::WHITE;
        assert_eq!(interpolate(a, b, 0.0), a);
        assert_eq!(interpolate(a, b, 1.0), b);
    }

    #[test]
    fn midpoint_blends_every_channel() {
        let c = interpolate(Rgba::CLEAR, Rgba::WHITE, 0.5);
        for ch in c.to_array() {
            assert_relative_eq!(ch, 0.5);
        }
    }

    #[test]
    fn out_of_range_fraction_is_clamped() {
        assert_eq!(interpolate(INK, Rgba::WHITE, 3.0), Rgba::WHITE);
        assert_eq!(interpolate(INK, Rgba::WHITE, -1.0), INK);
        assert_eq!(interpolate(INK, Rgba::WHITE, f32::NAN), INK);
    }

    #[test]
    fn approach_is_continuous_across_the_crossing() {
        let active = Rgba::WHITE;
        let inactive = Rgba::new(1.0, 1.0, 1.0, 0.3);
        // dot 1 just before and just after progress passes it
        let before = approach_color(active, inactive, 1.0, 0.999, 0.001);
        let after = approach_color(active, inactive, 1.0, 1.001, 0.001);
        assert_relative_eq!(before.a(), after.a(), epsilon = 1e-6);
        assert_relative_eq!(before.a(), 1.0, epsilon = 1e-3);
    }
}
