//! Reporting window keywords for the time-series operation.

/// Time-series window length.
///
/// Parsing is the input-validation boundary: anything but the three literal
/// keywords is rejected before any store access happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    SevenDays,
    ThirtyDays,
    NinetyDays,
}

impl Period {
    pub fn days(&self) -> i64 {
        match self {
            Self::SevenDays => 7,
            Self::ThirtyDays => 30,
            Self::NinetyDays => 90,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SevenDays => "7d",
            Self::ThirtyDays => "30d",
            Self::NinetyDays => "90d",
        }
    }
}

impl std::str::FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7d" => Ok(Self::SevenDays),
            "30d" => Ok(Self::ThirtyDays),
            "90d" => Ok(Self::NinetyDays),
            other => Err(format!("invalid period '{other}': use 7d, 30d, or 90d")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_periods() {
        assert_eq!("7d".parse::<Period>().unwrap(), Period::SevenDays);
        assert_eq!("30d".parse::<Period>().unwrap(), Period::ThirtyDays);
        assert_eq!("90d".parse::<Period>().unwrap(), Period::NinetyDays);
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        for bad in ["60d", "7D", " 7d", "7", "week", ""] {
            let err = bad.parse::<Period>().unwrap_err();
            assert!(err.contains("invalid period"), "unexpected error for {bad:?}: {err}");
        }
    }

    #[test]
    fn test_days_roundtrip() {
        for period in [Period::SevenDays, Period::ThirtyDays, Period::NinetyDays] {
            assert_eq!(period.as_str().parse::<Period>().unwrap(), period);
        }
        assert_eq!(Period::SevenDays.days(), 7);
        assert_eq!(Period::NinetyDays.days(), 90);
    }
}
