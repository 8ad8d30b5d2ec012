use serde::Deserialize;

/// Easing curves, named the way the CSS and tween presets name them.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
    /// Cubic ease-out, the "power3.out" preset.
    Power3Out,
    /// Overshooting ease-out with the given overshoot amount ("back.out(1.7)").
    #[serde(skip)]
    BackOut(f64),
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::Power3Out => 1.0 - (1.0 - t).powi(3),
            Easing::BackOut(s) => {
                let u = t - 1.0;
                u * u * ((s + 1.0) * u + s) + 1.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Power3Out,
        Easing::BackOut(1.7),
    ];

    #[test]
    fn curves_pin_both_ends() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-9, "{:?} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{:?} at 1", easing);
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::EaseOut.apply(3.0), 1.0);
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::BackOut(1.7).apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn parses_kebab_names() {
        let easing: Easing = serde_json::from_str("\"ease-in-out\"").unwrap();
        assert_eq!(easing, Easing::EaseInOut);
        let easing: Easing = serde_json::from_str("\"power3-out\"").unwrap();
        assert_eq!(easing, Easing::Power3Out);
    }
}
