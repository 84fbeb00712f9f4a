/// Display severity tier for a magnitude, used only to pick a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MagnitudeBucket {
    M1,
    M2,
    M3,
    M4,
    M5,
    M6,
    M7,
    M8,
    M9,
    M10Plus,
}

impl MagnitudeBucket {
    /// Bucket by the floor of the magnitude: 0 and 1 share the first tier,
    /// 2 through 9 get their own, everything else (10 and up, negatives,
    /// NaN) lands in the last one.
    pub fn from_magnitude(magnitude: f64) -> Self {
        if magnitude.is_nan() {
            return MagnitudeBucket::M10Plus;
        }

        match magnitude.floor() as i64 {
            0 | 1 => MagnitudeBucket::M1,
            2 => MagnitudeBucket::M2,
            3 => MagnitudeBucket::M3,
            4 => MagnitudeBucket::M4,
            5 => MagnitudeBucket::M5,
            6 => MagnitudeBucket::M6,
            7 => MagnitudeBucket::M7,
            8 => MagnitudeBucket::M8,
            9 => MagnitudeBucket::M9,
            _ => MagnitudeBucket::M10Plus,
        }
    }
}

pub fn format_magnitude(magnitude: f64) -> String {
    format!("{:.1}", magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(MagnitudeBucket::from_magnitude(0.0), MagnitudeBucket::M1);
        assert_eq!(MagnitudeBucket::from_magnitude(1.9), MagnitudeBucket::M1);
        assert_eq!(MagnitudeBucket::from_magnitude(2.0), MagnitudeBucket::M2);
        assert_eq!(MagnitudeBucket::from_magnitude(6.5), MagnitudeBucket::M6);
        assert_eq!(MagnitudeBucket::from_magnitude(9.99), MagnitudeBucket::M9);
        assert_eq!(MagnitudeBucket::from_magnitude(10.1), MagnitudeBucket::M10Plus);
    }

    #[test]
    fn test_negative_magnitudes_fall_into_last_bucket() {
        assert_eq!(MagnitudeBucket::from_magnitude(-0.5), MagnitudeBucket::M10Plus);
        assert_eq!(MagnitudeBucket::from_magnitude(-3.0), MagnitudeBucket::M10Plus);
    }

    #[test]
    fn test_non_finite_magnitudes_fall_into_last_bucket() {
        assert_eq!(MagnitudeBucket::from_magnitude(f64::NAN), MagnitudeBucket::M10Plus);
        assert_eq!(MagnitudeBucket::from_magnitude(f64::INFINITY), MagnitudeBucket::M10Plus);
        assert_eq!(
            MagnitudeBucket::from_magnitude(f64::NEG_INFINITY),
            MagnitudeBucket::M10Plus
        );
    }

    #[test]
    fn test_bucket_is_monotonic_over_display_range() {
        let mut previous = MagnitudeBucket::from_magnitude(0.0);
        let mut m = 0.0;
        while m < 12.0 {
            let bucket = MagnitudeBucket::from_magnitude(m);
            assert!(bucket >= previous, "bucket went down at {}", m);
            previous = bucket;
            m += 0.05;
        }
    }

    #[test]
    fn test_format_magnitude_one_decimal() {
        assert_eq!(format_magnitude(6.5), "6.5");
        assert_eq!(format_magnitude(7.0), "7.0");
        assert_eq!(format_magnitude(6.04), "6.0");
    }
}
