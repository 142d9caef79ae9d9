//! Missing-data policy
//!
//! Every report column that can lack data has exactly one default, listed
//! here so the row assembly never picks its own.

/// Report columns that fall back to a default when their data is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    LibyearLatest,
    Drift,
    Pulse,
    Releases,
    Major,
    Minor,
    Patch,
    NpmLatest,
    Wanted,
    EasyUpgrade,
    Unused,
}

/// Text written for a missing version or metric
pub const UNKNOWN: &str = "Unknown";

impl Field {
    /// Text written when this column has no data
    pub fn missing(&self) -> &'static str {
        match self {
            Field::LibyearLatest
            | Field::Drift
            | Field::Pulse
            | Field::NpmLatest
            | Field::Wanted => UNKNOWN,
            Field::Releases | Field::Major | Field::Minor | Field::Patch => "0",
            Field::EasyUpgrade | Field::Unused => "false",
        }
    }

    /// Render an optional text value
    pub fn text(&self, value: Option<&str>) -> String {
        value.unwrap_or(self.missing()).to_string()
    }

    /// Render an optional count
    pub fn count(&self, value: Option<u64>) -> String {
        value
            .map(|v| v.to_string())
            .unwrap_or_else(|| self.missing().to_string())
    }

    /// Render an optional flag
    pub fn flag(&self, value: Option<bool>) -> String {
        value
            .map(|v| v.to_string())
            .unwrap_or_else(|| self.missing().to_string())
    }

    /// Render an optional metric with two decimals
    pub fn decimal(&self, value: Option<f64>) -> String {
        match value {
            Some(v) => format_decimal(Some(v)),
            None => self.missing().to_string(),
        }
    }
}

/// Two decimals with a comma separator, `Unknown` when absent
pub fn format_decimal(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v).replace('.', ","),
        None => UNKNOWN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_format_decimal() {
        assert_eq!(format_decimal(Some(3.14159)), "3,14");
        assert_eq!(format_decimal(Some(0.0)), "0,00");
        assert_eq!(format_decimal(Some(12.5)), "12,50");
        assert_eq!(format_decimal(None), "Unknown");
    }

    #[test]
    fn test_missing_defaults() {
        assert_eq!(Field::Drift.missing(), "Unknown");
        assert_eq!(Field::Releases.missing(), "0");
        assert_eq!(Field::Patch.missing(), "0");
        assert_eq!(Field::NpmLatest.missing(), "Unknown");
        assert_eq!(Field::EasyUpgrade.missing(), "false");
        assert_eq!(Field::Unused.missing(), "false");
    }

    #[test]
    fn test_render_helpers() {
        assert_eq!(Field::Wanted.text(Some("1.2.3")), "1.2.3");
        assert_eq!(Field::Wanted.text(None), "Unknown");
        assert_eq!(Field::Major.count(Some(2)), "2");
        assert_eq!(Field::Major.count(None), "0");
        assert_eq!(Field::EasyUpgrade.flag(Some(true)), "true");
        assert_eq!(Field::EasyUpgrade.flag(None), "false");
        assert_eq!(Field::Pulse.decimal(Some(0.256)), "0,26");
        assert_eq!(Field::Pulse.decimal(None), "Unknown");
    }
}
