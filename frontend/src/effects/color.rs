use thiserror::Error;

/// Saturation used when the base colour is a pure grey, so random hues stay visible.
pub const FALLBACK_SATURATION: f64 = 80.0;

#[derive(Debug, Error, PartialEq)]
pub enum ColorError {
    #[error("colour `{0}` must start with '#'")]
    MissingHash(String),
    #[error("colour `{0}` must have 3 or 6 hex digits")]
    BadLength(String),
    #[error("colour `{0}` contains a non-hex digit")]
    BadDigit(String),
}

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Parses `#rgb` or `#rrggbb`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(hex.to_string()))?;
        if !digits.is_ascii() {
            return Err(ColorError::BadDigit(hex.to_string()));
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(ColorError::BadLength(hex.to_string())),
        };

        let channel = |range: std::ops::Range<usize>| -> Result<f64, ColorError> {
            u8::from_str_radix(&expanded[range], 16)
                .map(|v| f64::from(v) / 255.0)
                .map_err(|_| ColorError::BadDigit(hex.to_string()))
        };
        let r = channel(0..2)?;
        let g = channel(2..4)?;
        let b = channel(4..6)?;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
            let h = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            (h / 6.0, s)
        };

        Ok(Hsl {
            h: h * 360.0,
            s: s * 100.0,
            l: l * 100.0,
        })
    }

    pub fn effective_saturation(&self) -> f64 {
        if self.s == 0.0 {
            FALLBACK_SATURATION
        } else {
            self.s
        }
    }

    /// CSS colour with the given hue and this colour's saturation/lightness.
    pub fn css_with_hue(&self, hue: f64) -> String {
        format!("hsl({:.0}, {:.1}%, {:.1}%)", hue, self.effective_saturation(), self.l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_falls_back_to_visible_saturation() {
        let white = Hsl::from_hex("#ffffff").unwrap();
        assert_eq!(white.s, 0.0);
        assert_eq!(white.l, 100.0);
        assert!(white.effective_saturation() > 0.0);
    }

    #[test]
    fn red_has_zero_hue() {
        let red = Hsl::from_hex("#ff0000").unwrap();
        assert!(red.h.abs() < 1e-9);
        assert!((red.s - 100.0).abs() < 1e-9);
        assert!((red.l - 50.0).abs() < 1e-9);
    }

    #[test]
    fn short_form_matches_long_form() {
        assert_eq!(Hsl::from_hex("#fff").unwrap(), Hsl::from_hex("#ffffff").unwrap());
        let blue = Hsl::from_hex("#00f").unwrap();
        assert!((blue.h - 240.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_malformed_colours() {
        assert_eq!(Hsl::from_hex("ffffff"), Err(ColorError::MissingHash("ffffff".into())));
        assert_eq!(Hsl::from_hex("#ffff"), Err(ColorError::BadLength("#ffff".into())));
        assert_eq!(Hsl::from_hex("#gggggg"), Err(ColorError::BadDigit("#gggggg".into())));
    }

    #[test]
    fn css_uses_fallback_saturation_for_grey() {
        let white = Hsl::from_hex("#fff").unwrap();
        assert_eq!(white.css_with_hue(120.0), "hsl(120, 80.0%, 100.0%)");
    }
}
