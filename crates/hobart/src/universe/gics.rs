//! GICS level-1 sectors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The eleven GICS sectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GicsSector {
    /// Energy
    Energy,
    /// Materials
    Materials,
    /// Industrials
    Industrials,
    /// Consumer Discretionary
    ConsumerDiscretionary,
    /// Consumer Staples
    ConsumerStaples,
    /// Health Care
    HealthCare,
    /// Financials
    Financials,
    /// Information Technology
    InformationTechnology,
    /// Communication Services
    CommunicationServices,
    /// Utilities
    Utilities,
    /// Real Estate
    RealEstate,
}

impl GicsSector {
    /// Every sector in code order.
    pub const ALL: [Self; 11] = [
        Self::Energy,
        Self::Materials,
        Self::Industrials,
        Self::ConsumerDiscretionary,
        Self::ConsumerStaples,
        Self::HealthCare,
        Self::Financials,
        Self::InformationTechnology,
        Self::CommunicationServices,
        Self::Utilities,
        Self::RealEstate,
    ];

    /// Two-digit sector code.
    pub const fn code(self) -> u8 {
        match self {
            Self::Energy => 10,
            Self::Materials => 15,
            Self::Industrials => 20,
            Self::ConsumerDiscretionary => 25,
            Self::ConsumerStaples => 30,
            Self::HealthCare => 35,
            Self::Financials => 40,
            Self::InformationTechnology => 45,
            Self::CommunicationServices => 50,
            Self::Utilities => 55,
            Self::RealEstate => 60,
        }
    }

    /// Sector name as published.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Energy => "Energy",
            Self::Materials => "Materials",
            Self::Industrials => "Industrials",
            Self::ConsumerDiscretionary => "Consumer Discretionary",
            Self::ConsumerStaples => "Consumer Staples",
            Self::HealthCare => "Health Care",
            Self::Financials => "Financials",
            Self::InformationTechnology => "Information Technology",
            Self::CommunicationServices => "Communication Services",
            Self::Utilities => "Utilities",
            Self::RealEstate => "Real Estate",
        }
    }
}

impl fmt::Display for GicsSector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GicsSector {
    type Err = String;

    /// Parse a sector name or two-digit code, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u8>() {
            return Self::ALL
                .into_iter()
                .find(|sector| sector.code() == code)
                .ok_or_else(|| format!("unknown GICS sector code {code}"));
        }
        Self::ALL
            .into_iter()
            .find(|sector| sector.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown GICS sector {s:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_codes_ascend_in_canonical_order() {
        let codes: Vec<u8> = GicsSector::ALL.iter().map(|s| s.code()).collect();
        assert!(codes.windows(2).all(|w| w[0] < w[1]));
    }

    #[rstest]
    #[case("Health Care", GicsSector::HealthCare)]
    #[case("information technology", GicsSector::InformationTechnology)]
    #[case("45", GicsSector::InformationTechnology)]
    #[case(" 60 ", GicsSector::RealEstate)]
    fn test_parse(#[case] input: &str, #[case] expected: GicsSector) {
        assert_eq!(input.parse::<GicsSector>().unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("99".parse::<GicsSector>().is_err());
        assert!("Crypto".parse::<GicsSector>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for sector in GicsSector::ALL {
            assert_eq!(sector.to_string().parse::<GicsSector>().unwrap(), sector);
        }
    }
}
