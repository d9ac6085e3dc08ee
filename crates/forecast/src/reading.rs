/// A single temperature value. No unit is attached.
pub type Reading = f64;

/// Ordered readings; insertion order is display order.
pub type ReadingSeries = Vec<Reading>;

/// Readings at or below this value are tagged cold.
pub const COLD_THRESHOLD: Reading = 17.0;

/// Readings at or above this value are tagged warm.
pub const WARM_THRESHOLD: Reading = 23.0;

/// Series every forecast starts with before its first reload.
pub const INITIAL_READINGS: [Reading; 7] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];

/// Fixed series used by the plain render and the static forecast reload.
pub const TEST_TEMPERATURES: [Reading; 7] = [13.0, 18.0, 21.0, 19.0, 26.0, 25.0, 16.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureTag {
    Cold,
    Warm,
}

impl TemperatureTag {
    pub fn classify(reading: Reading) -> Option<Self> {
        if reading <= COLD_THRESHOLD {
            Some(Self::Cold)
        } else if reading >= WARM_THRESHOLD {
            Some(Self::Warm)
        } else {
            None
        }
    }

    /// Class name attached to the rendered element.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cold => "cold",
            Self::Warm => "warm",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "cold" => Some(Self::Cold),
            "warm" => Some(Self::Warm),
            _ => None,
        }
    }
}

/// Shortest decimal form of a reading: `13.0` prints as `13`, `13.5` as `13.5`.
/// Negative zero prints as `0`.
pub fn format_reading(reading: Reading) -> String {
    let reading = if reading == 0.0 { 0.0 } else { reading };
    reading.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(TemperatureTag::classify(17.0), Some(TemperatureTag::Cold));
        assert_eq!(TemperatureTag::classify(-4.5), Some(TemperatureTag::Cold));
        assert_eq!(TemperatureTag::classify(17.5), None);
        assert_eq!(TemperatureTag::classify(22.9), None);
        assert_eq!(TemperatureTag::classify(23.0), Some(TemperatureTag::Warm));
        assert_eq!(TemperatureTag::classify(31.2), Some(TemperatureTag::Warm));
    }

    #[test]
    fn test_format_reading_drops_trailing_zero() {
        assert_eq!(format_reading(13.0), "13");
        assert_eq!(format_reading(13.5), "13.5");
        assert_eq!(format_reading(-2.0), "-2");
        assert_eq!(format_reading(-0.0), "0");
    }

    #[test]
    fn test_tag_parse_matches_as_str() {
        for tag in [TemperatureTag::Cold, TemperatureTag::Warm] {
            assert_eq!(TemperatureTag::parse(tag.as_str()), Some(tag));
        }
        assert_eq!(TemperatureTag::parse("mild"), None);
    }
}
