//! Building kinds for location anchors and residential plots.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingType {
    HouseSmall,
    HouseMedium,
    HouseLarge,
    Shop,
    Arena,
    Council,
    Library,
    Tavern,
    Well,
    Fountain,
}

impl BuildingType {
    /// Art size in unscaled pixels `(width, height)`.
    pub fn art_size(&self) -> (u32, u32) {
        match self {
            BuildingType::HouseSmall => (24, 28),
            BuildingType::HouseMedium => (32, 28),
            BuildingType::HouseLarge => (40, 32),
            BuildingType::Shop => (36, 32),
            BuildingType::Arena => (48, 36),
            BuildingType::Council => (48, 40),
            BuildingType::Library => (32, 40),
            BuildingType::Tavern => (36, 32),
            BuildingType::Well => (16, 16),
            BuildingType::Fountain => (24, 20),
        }
    }

    /// Column (art px) of the chimney, for buildings that smoke.
    pub fn chimney_column(&self) -> Option<u32> {
        match self {
            BuildingType::HouseSmall => Some(17),
            BuildingType::HouseMedium => Some(25),
            BuildingType::HouseLarge => Some(33),
            BuildingType::Tavern => Some(29),
            _ => None,
        }
    }

    pub fn is_house(&self) -> bool {
        matches!(
            self,
            BuildingType::HouseSmall | BuildingType::HouseMedium | BuildingType::HouseLarge
        )
    }

    /// Pick the building that represents a location.
    ///
    /// The location kind wins; the name is a fallback hint. Anything unknown
    /// becomes a tavern.
    pub fn for_location(kind: &str, name: &str) -> Self {
        let t = kind.to_lowercase();
        let n = name.to_lowercase();
        if t == "trade" || t == "market" || n.contains("market") || n.contains("shop") {
            BuildingType::Shop
        } else if t == "conflict" || t == "arena" || n.contains("arena") {
            BuildingType::Arena
        } else if t == "diplomacy" || t == "council" || n.contains("council") || n.contains("hall") {
            BuildingType::Council
        } else if t == "knowledge" || t == "library" || n.contains("library") {
            BuildingType::Library
        } else if t == "exploration"
            || t == "wilderness"
            || n.contains("tavern")
            || n.contains("inn")
        {
            BuildingType::Tavern
        } else if n.contains("well") {
            BuildingType::Well
        } else if n.contains("fountain") {
            BuildingType::Fountain
        } else {
            BuildingType::Tavern
        }
    }

    /// Get ASCII character for text dumps
    pub fn ascii_char(&self) -> char {
        match self {
            BuildingType::HouseSmall | BuildingType::HouseMedium | BuildingType::HouseLarge => 'h',
            BuildingType::Shop => 'S',
            BuildingType::Arena => 'A',
            BuildingType::Council => 'C',
            BuildingType::Library => 'L',
            BuildingType::Tavern => 'V',
            BuildingType::Well => 'W',
            BuildingType::Fountain => 'F',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_kind_mapping() {
        assert_eq!(BuildingType::for_location("trade", "Market Square"), BuildingType::Shop);
        assert_eq!(BuildingType::for_location("conflict", "The Arena"), BuildingType::Arena);
        assert_eq!(BuildingType::for_location("diplomacy", "Council Hall"), BuildingType::Council);
        assert_eq!(BuildingType::for_location("knowledge", "Library"), BuildingType::Library);
        assert_eq!(BuildingType::for_location("exploration", "Wilderness"), BuildingType::Tavern);
    }

    #[test]
    fn test_name_fallbacks() {
        assert_eq!(BuildingType::for_location("", "Old Well"), BuildingType::Well);
        assert_eq!(BuildingType::for_location("misc", "Town FOUNTAIN"), BuildingType::Fountain);
        assert_eq!(BuildingType::for_location("misc", "Grand Hall"), BuildingType::Council);
        assert_eq!(BuildingType::for_location("unknown", "Nowhere"), BuildingType::Tavern);
    }

    #[test]
    fn test_house_sizes_grow() {
        let (small, _) = BuildingType::HouseSmall.art_size();
        let (medium, _) = BuildingType::HouseMedium.art_size();
        let (large, _) = BuildingType::HouseLarge.art_size();
        assert!(small < medium && medium < large);
        assert!(BuildingType::HouseLarge.is_house());
        assert!(!BuildingType::Shop.is_house());
    }
}
