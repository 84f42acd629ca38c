//! The 18 Iraqi governorates, the primary geographic filter dimension.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;
use crate::query::ALL_SENTINEL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Governorate {
    Anbar,
    Basra,
    Muthanna,
    Qadisiyah,
    Najaf,
    Erbil,
    Sulaymaniyah,
    Babil,
    Baghdad,
    Dohuk,
    #[serde(rename = "Dhi Qar")]
    DhiQar,
    Diyala,
    Karbala,
    Kirkuk,
    Maysan,
    Nineveh,
    Saladin,
    Wasit,
}

impl Governorate {
    pub const ALL: [Governorate; 18] = [
        Governorate::Anbar,
        Governorate::Basra,
        Governorate::Muthanna,
        Governorate::Qadisiyah,
        Governorate::Najaf,
        Governorate::Erbil,
        Governorate::Sulaymaniyah,
        Governorate::Babil,
        Governorate::Baghdad,
        Governorate::Dohuk,
        Governorate::DhiQar,
        Governorate::Diyala,
        Governorate::Karbala,
        Governorate::Kirkuk,
        Governorate::Maysan,
        Governorate::Nineveh,
        Governorate::Saladin,
        Governorate::Wasit,
    ];

    /// Two-letter registry code.
    pub fn code(&self) -> &'static str {
        match self {
            Governorate::Anbar => "AN",
            Governorate::Basra => "BA",
            Governorate::Muthanna => "MU",
            Governorate::Qadisiyah => "QA",
            Governorate::Najaf => "NA",
            Governorate::Erbil => "AR",
            Governorate::Sulaymaniyah => "SU",
            Governorate::Babil => "BB",
            Governorate::Baghdad => "BG",
            Governorate::Dohuk => "DA",
            Governorate::DhiQar => "DQ",
            Governorate::Diyala => "DI",
            Governorate::Karbala => "KA",
            Governorate::Kirkuk => "KI",
            Governorate::Maysan => "MA",
            Governorate::Nineveh => "NI",
            Governorate::Saladin => "SD",
            Governorate::Wasit => "WA",
        }
    }

    pub fn arabic_name(&self) -> &'static str {
        match self {
            Governorate::Anbar => "الأنبار",
            Governorate::Basra => "البصرة",
            Governorate::Muthanna => "المثنى",
            Governorate::Qadisiyah => "القادسية",
            Governorate::Najaf => "النجف",
            Governorate::Erbil => "أربيل",
            Governorate::Sulaymaniyah => "السليمانية",
            Governorate::Babil => "بابل",
            Governorate::Baghdad => "بغداد",
            Governorate::Dohuk => "دهوك",
            Governorate::DhiQar => "ذي قار",
            Governorate::Diyala => "ديالى",
            Governorate::Karbala => "كربلاء",
            Governorate::Kirkuk => "كركوك",
            Governorate::Maysan => "ميسان",
            Governorate::Nineveh => "نينوى",
            Governorate::Saladin => "صلاح الدين",
            Governorate::Wasit => "واسط",
        }
    }

    pub fn en_name(&self) -> &'static str {
        match self {
            Governorate::Anbar => "Anbar",
            Governorate::Basra => "Basra",
            Governorate::Muthanna => "Muthanna",
            Governorate::Qadisiyah => "Qadisiyah",
            Governorate::Najaf => "Najaf",
            Governorate::Erbil => "Erbil",
            Governorate::Sulaymaniyah => "Sulaymaniyah",
            Governorate::Babil => "Babil",
            Governorate::Baghdad => "Baghdad",
            Governorate::Dohuk => "Dohuk",
            Governorate::DhiQar => "Dhi Qar",
            Governorate::Diyala => "Diyala",
            Governorate::Karbala => "Karbala",
            Governorate::Kirkuk => "Kirkuk",
            Governorate::Maysan => "Maysan",
            Governorate::Nineveh => "Nineveh",
            Governorate::Saladin => "Saladin",
            Governorate::Wasit => "Wasit",
        }
    }

    /// URL slug, e.g. `dhi-qar`.
    pub fn path(&self) -> &'static str {
        match self {
            Governorate::DhiQar => "dhi-qar",
            Governorate::Anbar => "anbar",
            Governorate::Basra => "basra",
            Governorate::Muthanna => "muthanna",
            Governorate::Qadisiyah => "qadisiyah",
            Governorate::Najaf => "najaf",
            Governorate::Erbil => "erbil",
            Governorate::Sulaymaniyah => "sulaymaniyah",
            Governorate::Babil => "babil",
            Governorate::Baghdad => "baghdad",
            Governorate::Dohuk => "dohuk",
            Governorate::Diyala => "diyala",
            Governorate::Karbala => "karbala",
            Governorate::Kirkuk => "kirkuk",
            Governorate::Maysan => "maysan",
            Governorate::Nineveh => "nineveh",
            Governorate::Saladin => "saladin",
            Governorate::Wasit => "wasit",
        }
    }

    /// Lookup by English name or slug, ignoring case.
    pub fn find(name: &str) -> Option<Governorate> {
        let needle = name.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|g| g.en_name().to_lowercase() == needle || g.path() == needle)
    }

    /// Exact match against the lower-cased English name (`"dhi qar"`).
    /// Used by the governorate detail endpoint, which addresses entries this way.
    pub fn from_detail_name(name: &str) -> Option<Governorate> {
        Self::ALL
            .into_iter()
            .find(|g| g.en_name().to_lowercase() == name)
    }

    pub fn info(&self) -> GovernorateInfo {
        GovernorateInfo {
            id: self.code().to_string(),
            name: self.arabic_name().to_string(),
            en_name: self.en_name().to_string(),
            path: self.path().to_string(),
        }
    }
}

impl fmt::Display for Governorate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.en_name())
    }
}

impl FromStr for Governorate {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::find(s).ok_or_else(|| ApiError::InvalidInput(format!("unknown governorate '{}'", s)))
    }
}

/// Registry entry as served by the civic endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernorateInfo {
    pub id: String,
    pub name: String,
    pub en_name: String,
    pub path: String,
}

/// Governorate picker value: everything, or one governorate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GovernorateFilter {
    #[default]
    All,
    Only(Governorate),
}

impl GovernorateFilter {
    pub fn governorate(&self) -> Option<Governorate> {
        match self {
            GovernorateFilter::All => None,
            GovernorateFilter::Only(g) => Some(*g),
        }
    }

    pub fn matches(&self, governorate: Governorate) -> bool {
        match self {
            GovernorateFilter::All => true,
            GovernorateFilter::Only(g) => *g == governorate,
        }
    }

    pub fn matches_any(&self, governorates: &[Governorate]) -> bool {
        match self {
            GovernorateFilter::All => true,
            GovernorateFilter::Only(g) => governorates.contains(g),
        }
    }

    /// Query-string value; `None` for `All`.
    pub fn query_value(&self) -> Option<&'static str> {
        self.governorate().map(|g| g.en_name())
    }
}

impl From<Governorate> for GovernorateFilter {
    fn from(governorate: Governorate) -> Self {
        GovernorateFilter::Only(governorate)
    }
}

impl From<Option<Governorate>> for GovernorateFilter {
    fn from(governorate: Option<Governorate>) -> Self {
        governorate.map_or(GovernorateFilter::All, GovernorateFilter::Only)
    }
}

impl FromStr for GovernorateFilter {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL_SENTINEL) {
            return Ok(GovernorateFilter::All);
        }
        s.parse().map(GovernorateFilter::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_complete_and_unique() {
        let mut codes: Vec<_> = Governorate::ALL.iter().map(|g| g.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 18);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(Governorate::find("baghdad"), Some(Governorate::Baghdad));
        assert_eq!(Governorate::find("BASRA"), Some(Governorate::Basra));
        assert_eq!(Governorate::find("dhi qar"), Some(Governorate::DhiQar));
        assert_eq!(Governorate::find("dhi-qar"), Some(Governorate::DhiQar));
        assert_eq!(Governorate::find("atlantis"), None);
    }

    #[test]
    fn test_detail_name_is_exact_lowercase() {
        assert_eq!(Governorate::from_detail_name("dhi qar"), Some(Governorate::DhiQar));
        assert_eq!(Governorate::from_detail_name("basra"), Some(Governorate::Basra));
        assert_eq!(Governorate::from_detail_name("Basra"), None);
        assert_eq!(Governorate::from_detail_name("dhi-qar"), None);
        assert_eq!(Governorate::from_detail_name(" basra"), None);
    }

    #[test]
    fn test_serialized_as_english_name() {
        let json = serde_json::to_string(&Governorate::DhiQar).unwrap();
        assert_eq!(json, "\"Dhi Qar\"");
        let parsed: Governorate = serde_json::from_str("\"Nineveh\"").unwrap();
        assert_eq!(parsed, Governorate::Nineveh);
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("All".parse::<GovernorateFilter>().unwrap(), GovernorateFilter::All);
        assert_eq!(
            "erbil".parse::<GovernorateFilter>().unwrap(),
            GovernorateFilter::Only(Governorate::Erbil)
        );
        assert!("atlantis".parse::<GovernorateFilter>().is_err());
    }

    #[test]
    fn test_filter_matching() {
        let filter = GovernorateFilter::from(Governorate::Najaf);
        assert!(filter.matches(Governorate::Najaf));
        assert!(!filter.matches(Governorate::Basra));
        assert!(filter.matches_any(&[Governorate::Basra, Governorate::Najaf]));
        assert!(GovernorateFilter::All.matches_any(&[]));
        assert_eq!(GovernorateFilter::All.query_value(), None);
    }
}
