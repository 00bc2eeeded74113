//! Static district data for Tamil Nadu
//!
//! This module contains the static list of supported districts with their
//! geographic coordinates used as the forecast query key.

use super::District;

/// Static array of supported Tamil Nadu districts
///
/// Contains 18 districts with the coordinates of their administrative
/// centers. Order is fixed and drives the `--list` output.
pub static DISTRICTS: [District; 18] = [
    District {
        name: "Chennai",
        latitude: 13.0827,
        longitude: 80.2707,
    },
    District {
        name: "Coimbatore",
        latitude: 11.0168,
        longitude: 76.9558,
    },
    District {
        name: "Madurai",
        latitude: 9.9252,
        longitude: 78.1198,
    },
    District {
        name: "Tiruchirappalli",
        latitude: 10.7905,
        longitude: 78.7047,
    },
    District {
        name: "Salem",
        latitude: 11.6643,
        longitude: 78.1460,
    },
    District {
        name: "Erode",
        latitude: 11.3410,
        longitude: 77.7172,
    },
    District {
        name: "Vellore",
        latitude: 12.9165,
        longitude: 79.1325,
    },
    District {
        name: "Tirunelveli",
        latitude: 8.7139,
        longitude: 77.7567,
    },
    District {
        name: "Thoothukudi",
        latitude: 8.7642,
        longitude: 78.1348,
    },
    District {
        name: "Thanjavur",
        latitude: 10.7867,
        longitude: 79.1378,
    },
    District {
        name: "Dharmapuri",
        latitude: 12.1211,
        longitude: 78.1580,
    },
    District {
        name: "Dindigul",
        latitude: 10.3673,
        longitude: 77.9803,
    },
    District {
        name: "Kanyakumari",
        latitude: 8.0883,
        longitude: 77.5385,
    },
    District {
        name: "Namakkal",
        latitude: 11.2196,
        longitude: 78.1670,
    },
    District {
        name: "Theni",
        latitude: 10.0153,
        longitude: 77.4820,
    },
    District {
        name: "Karur",
        latitude: 10.9601,
        longitude: 78.0766,
    },
    District {
        name: "Villupuram",
        latitude: 11.9392,
        longitude: 79.4924,
    },
    District {
        name: "Cuddalore",
        latitude: 11.7447,
        longitude: 79.7680,
    },
];

/// Resolve a district by name
///
/// Matching ignores leading/trailing whitespace on the input and is
/// case-insensitive. District names in the table are unique, so at most
/// one entry can match.
///
/// # Arguments
///
/// * `name` - The district name as typed by the user (e.g., " chennai ")
///
/// # Returns
///
/// Returns `Some(&District)` if found, `None` otherwise
///
/// # Example
///
/// ```
/// use tnweather::data::resolve_district;
///
/// if let Some(district) = resolve_district("  chennai ") {
///     println!("Found: {}", district.name);
/// }
/// ```
pub fn resolve_district(name: &str) -> Option<&'static District> {
    let needle = name.trim();
    DISTRICTS
        .iter()
        .find(|district| district.name.eq_ignore_ascii_case(needle))
}

/// Get all supported districts
///
/// # Returns
///
/// Returns a static slice containing all 18 districts in table order
pub fn all_districts() -> &'static [District] {
    &DISTRICTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_districts_array_has_18_entries() {
        assert_eq!(DISTRICTS.len(), 18);
    }

    #[test]
    fn test_all_districts_returns_18_entries() {
        assert_eq!(all_districts().len(), 18);
    }

    #[test]
    fn test_each_district_has_valid_tamil_nadu_coordinates() {
        // Tamil Nadu latitude range: 8.0 to 13.6
        // Tamil Nadu longitude range: 76.2 to 80.4
        for district in all_districts() {
            assert!(
                district.latitude >= 8.0 && district.latitude <= 13.6,
                "District {} has invalid latitude: {}",
                district.name,
                district.latitude
            );
            assert!(
                district.longitude >= 76.2 && district.longitude <= 80.4,
                "District {} has invalid longitude: {}",
                district.name,
                district.longitude
            );
        }
    }

    #[test]
    fn test_resolve_district_exact_name() {
        let district = resolve_district("Chennai");
        assert!(district.is_some());
        let district = district.unwrap();
        assert_eq!(district.name, "Chennai");
        assert!((district.latitude - 13.0827).abs() < 0.0001);
        assert!((district.longitude - 80.2707).abs() < 0.0001);
    }

    #[test]
    fn test_resolve_district_is_case_insensitive() {
        assert_eq!(resolve_district("CHENNAI").unwrap().name, "Chennai");
        assert_eq!(resolve_district("chennai").unwrap().name, "Chennai");
        assert_eq!(resolve_district("cHeNnAi").unwrap().name, "Chennai");
    }

    #[test]
    fn test_resolve_district_trims_whitespace() {
        assert_eq!(resolve_district("  chennai ").unwrap().name, "Chennai");
        assert_eq!(resolve_district("\tMadurai\n").unwrap().name, "Madurai");
    }

    #[test]
    fn test_resolve_district_returns_none_for_unknown_name() {
        assert!(resolve_district("Atlantis").is_none());
        assert!(resolve_district("").is_none());
        assert!(resolve_district("   ").is_none());
    }

    #[test]
    fn test_resolve_district_rejects_partial_match() {
        assert!(resolve_district("Chen").is_none());
        assert!(resolve_district("Chennai City").is_none());
    }

    #[test]
    fn test_all_districts_have_unique_names() {
        let mut names: Vec<String> = all_districts()
            .iter()
            .map(|d| d.name.to_ascii_lowercase())
            .collect();
        names.sort();
        let original_len = names.len();
        names.dedup();
        assert_eq!(names.len(), original_len, "District names are not unique");
    }

    #[test]
    fn test_specific_district_coordinates() {
        let test_cases = [
            ("Chennai", 13.0827, 80.2707),
            ("Coimbatore", 11.0168, 76.9558),
            ("Madurai", 9.9252, 78.1198),
            ("Kanyakumari", 8.0883, 77.5385),
            ("Cuddalore", 11.7447, 79.7680),
        ];

        for (name, expected_lat, expected_lon) in test_cases {
            let district =
                resolve_district(name).unwrap_or_else(|| panic!("District {} not found", name));
            assert!(
                (district.latitude - expected_lat).abs() < 0.0001,
                "District {} latitude mismatch: expected {}, got {}",
                name,
                expected_lat,
                district.latitude
            );
            assert!(
                (district.longitude - expected_lon).abs() < 0.0001,
                "District {} longitude mismatch: expected {}, got {}",
                name,
                expected_lon,
                district.longitude
            );
        }
    }
}
