use serde::{Deserialize, Serialize};

/// Inclusive integer bounds for one HSL channel.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct ChannelRange {
    pub min: i32,
    pub max: i32,
}

impl ChannelRange {
    pub const fn new(min: i32, max: i32) -> ChannelRange {
        ChannelRange { min, max }
    }

    pub const fn fixed(value: i32) -> ChannelRange {
        ChannelRange { min: value, max: value }
    }

    /// Map a unit sample in `[0, 1)` onto this range, endpoints inclusive.
    /// A range with min > max is left unvalidated and samples arbitrarily.
    fn sample(&self, unit: f64) -> i32 {
        let span = (self.max - self.min + 1) as f64;
        self.min + (unit * span).floor() as i32
    }
}

/// Per-channel ranges for random HSL sampling.
///
/// Defaults match the classic toy palette: any hue, full saturation,
/// medium lightness.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct HslRanges {
    pub hue: ChannelRange,
    pub saturation: ChannelRange,
    pub lightness: ChannelRange,
}

impl Default for HslRanges {
    fn default() -> Self {
        HslRanges {
            hue: ChannelRange::new(0, 360),
            saturation: ChannelRange::fixed(100),
            lightness: ChannelRange::fixed(50),
        }
    }
}

/// Sample one `hsl(h,s%,l%)` string, drawing each channel independently
/// from `rng`, which must yield values in `[0, 1)`.
pub fn sample_hsl_with(ranges: &HslRanges, mut rng: impl FnMut() -> f64) -> String {
    let h = ranges.hue.sample(rng());
    let s = ranges.saturation.sample(rng());
    let l = ranges.lightness.sample(rng());
    format!("hsl({h},{s}%,{l}%)")
}

/// Browser entry point: sample with `Math.random`.
pub fn random_hsl(ranges: &HslRanges) -> String {
    sample_hsl_with(ranges, js_sys::Math::random)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ranges_format() {
        let color = sample_hsl_with(&HslRanges::default(), || 0.0);
        assert_eq!(color, "hsl(0,100%,50%)");
    }

    #[test]
    fn range_endpoints_are_inclusive() {
        let ranges = HslRanges {
            hue: ChannelRange::new(120, 240),
            saturation: ChannelRange::new(40, 60),
            lightness: ChannelRange::new(10, 90),
        };
        let low = sample_hsl_with(&ranges, || 0.0);
        assert_eq!(low, "hsl(120,40%,10%)");
        // 1.0 is excluded from the rng contract; just below it must land on max.
        let high = sample_hsl_with(&ranges, || 1.0 - 1e-12);
        assert_eq!(high, "hsl(240,60%,90%)");
    }

    #[test]
    fn samples_stay_in_range() {
        let ranges = HslRanges {
            hue: ChannelRange::new(200, 220),
            saturation: ChannelRange::fixed(100),
            lightness: ChannelRange::new(45, 55),
        };
        // Deterministic low-discrepancy walk over [0, 1).
        let mut state = 0.137_f64;
        let mut rng = move || {
            state = (state + 0.618_033_988_749_895) % 1.0;
            state
        };
        for _ in 0..200 {
            let color = sample_hsl_with(&ranges, &mut rng);
            let inner = color
                .strip_prefix("hsl(")
                .and_then(|s| s.strip_suffix(')'))
                .expect("well-formed hsl string");
            let parts: Vec<&str> = inner.split(',').collect();
            assert_eq!(parts.len(), 3);
            let h: i32 = parts[0].parse().unwrap();
            let s: i32 = parts[1].strip_suffix('%').unwrap().parse().unwrap();
            let l: i32 = parts[2].strip_suffix('%').unwrap().parse().unwrap();
            assert!((200..=220).contains(&h), "hue {h} out of range");
            assert_eq!(s, 100);
            assert!((45..=55).contains(&l), "lightness {l} out of range");
        }
    }

    #[test]
    fn fixed_range_ignores_rng() {
        let ranges = HslRanges {
            hue: ChannelRange::fixed(42),
            saturation: ChannelRange::fixed(7),
            lightness: ChannelRange::fixed(93),
        };
        assert_eq!(sample_hsl_with(&ranges, || 0.42), "hsl(42,7%,93%)");
        assert_eq!(sample_hsl_with(&ranges, || 0.99), "hsl(42,7%,93%)");
    }
}
