//! Static directory of heritage and tourist sites.
//!
//! Maps districts to their known sites (full postal addresses) and answers
//! the two lookups the rest of the system needs: "which sites does this
//! place have" and "where exactly is this site".

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Indian postal codes are six digits.
static PINCODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{6}\b").unwrap());

/// District-wise site listing. Each entry is a full postal address so the
/// geocoder and the pincode extraction both work from the same string.
static DISTRICT_SITES: &[(&str, &[&str])] = &[
    (
        "Thanjavur",
        &[
            "Brihadeeswarar Temple, Membalam Road, Balaganapathy Nagar, Thanjavur, Tamil Nadu 613007",
            "Thanjavur Maratha Palace, East Main Street, Thanjavur, Tamil Nadu 613001",
            "Saraswathi Mahal Library, East Main Street, Thanjavur, Tamil Nadu 613001",
        ],
    ),
    (
        "Chengalpattu",
        &[
            "Shore Temple, East Raja Street, Mahabalipuram, Tamil Nadu 603104",
            "Pancha Rathas, Mahabalipuram, Tamil Nadu 603104",
            "Arjuna's Penance, West Raja Street, Mahabalipuram, Tamil Nadu 603104",
        ],
    ),
    (
        "Madurai",
        &[
            "Meenakshi Amman Temple, Madurai Main, Madurai, Tamil Nadu 625001",
            "Thirumalai Nayakkar Palace, Panthadi 1st Street, Madurai, Tamil Nadu 625001",
            "Gandhi Memorial Museum, Tamukkam, Madurai, Tamil Nadu 625020",
        ],
    ),
    (
        "Chennai",
        &[
            "Kapaleeshwarar Temple, Mylapore, Chennai, Tamil Nadu 600004",
            "Fort St. George, Rajaji Salai, Chennai, Tamil Nadu 600009",
            "Santhome Cathedral Basilica, Santhome High Road, Chennai, Tamil Nadu 600004",
            "Marina Beach, Chennai, Tamil Nadu 600005",
        ],
    ),
    (
        "Kanchipuram",
        &[
            "Kailasanathar Temple, Pillaiyarpalayam, Kanchipuram, Tamil Nadu 631501",
            "Ekambareswarar Temple, Ekambaranathar Sannathi Street, Kanchipuram, Tamil Nadu 631502",
            "Varadharaja Perumal Temple, Vishnu Kanchi, Kanchipuram, Tamil Nadu 631503",
        ],
    ),
    (
        "Tiruchirappalli",
        &[
            "Sri Ranganathaswamy Temple, Srirangam, Tiruchirappalli, Tamil Nadu 620006",
            "Rockfort Temple, Chinna Bazaar, Tiruchirappalli, Tamil Nadu 620002",
        ],
    ),
    (
        "Kanyakumari",
        &[
            "Vivekananda Rock Memorial, Kanyakumari, Tamil Nadu 629702",
            "Thiruvalluvar Statue, Kanyakumari, Tamil Nadu 629702",
            "Padmanabhapuram Palace, Thuckalay, Kanyakumari, Tamil Nadu 629175",
        ],
    ),
    (
        "Ramanathapuram",
        &[
            "Ramanathaswamy Temple, Rameswaram, Tamil Nadu 623526",
            "Dhanushkodi Beach, Rameswaram, Tamil Nadu 623526",
        ],
    ),
    (
        "Nilgiris",
        &[
            "Government Botanical Garden, Udhagamandalam, Nilgiris, Tamil Nadu 643001",
            "Doddabetta Peak, Udhagamandalam, Nilgiris, Tamil Nadu 643001",
        ],
    ),
    (
        "Dindigul",
        &[
            "Kodaikanal Lake, Kodaikanal, Dindigul, Tamil Nadu 624101",
            "Dindigul Rock Fort, Dindigul, Tamil Nadu 624001",
        ],
    ),
];

/// Location details for one site, resolved from the static directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteDetails {
    pub district: String,
    pub full_address: String,
    pub pincode: Option<String>,
}

/// Read-only lookup over the static district table.
#[derive(Debug, Clone, Copy, Default)]
pub struct SiteDirectory;

impl SiteDirectory {
    pub fn new() -> Self {
        Self
    }

    /// All known district names, in table order.
    pub fn districts(&self) -> Vec<&'static str> {
        DISTRICT_SITES.iter().map(|(d, _)| *d).collect()
    }

    /// Sites for a place, which may be a district name or a town that
    /// appears in site addresses (e.g. "Mahabalipuram" under Chengalpattu).
    ///
    /// Returns an empty list when nothing matches.
    pub fn sites_for_place(&self, place: &str) -> Vec<String> {
        let needle = place.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        // District name match takes the whole district's listing.
        for (district, sites) in DISTRICT_SITES {
            if district.to_lowercase() == needle {
                return sites.iter().map(|s| s.to_string()).collect();
            }
        }

        // Otherwise collect sites whose address mentions the place.
        DISTRICT_SITES
            .iter()
            .flat_map(|(_, sites)| sites.iter())
            .filter(|s| s.to_lowercase().contains(&needle))
            .map(|s| s.to_string())
            .collect()
    }

    /// Scan all districts for a site whose address contains the given name.
    pub fn find_site_details(&self, site_name: &str) -> Option<SiteDetails> {
        let needle = site_name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        for (district, sites) in DISTRICT_SITES {
            for full_site in *sites {
                if full_site.to_lowercase().contains(&needle) {
                    let pincode = PINCODE_RE
                        .find(full_site)
                        .map(|m| m.as_str().to_string());
                    return Some(SiteDetails {
                        district: district.to_string(),
                        full_address: full_site.to_string(),
                        pincode,
                    });
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir() -> SiteDirectory {
        SiteDirectory::new()
    }

    #[test]
    fn test_sites_for_district() {
        let sites = dir().sites_for_place("Thanjavur");
        assert_eq!(sites.len(), 3);
        assert!(sites[0].contains("Brihadeeswarar Temple"));
    }

    #[test]
    fn test_sites_for_district_case_insensitive() {
        let sites = dir().sites_for_place("madurai");
        assert_eq!(sites.len(), 3);
        let sites = dir().sites_for_place("MADURAI");
        assert_eq!(sites.len(), 3);
    }

    #[test]
    fn test_sites_for_town_inside_district() {
        // Mahabalipuram is not a district; its sites live under Chengalpattu.
        let sites = dir().sites_for_place("Mahabalipuram");
        assert_eq!(sites.len(), 3);
        assert!(sites.iter().any(|s| s.contains("Shore Temple")));
    }

    #[test]
    fn test_sites_for_unknown_place() {
        assert!(dir().sites_for_place("Atlantis").is_empty());
    }

    #[test]
    fn test_sites_for_empty_place() {
        assert!(dir().sites_for_place("").is_empty());
        assert!(dir().sites_for_place("   ").is_empty());
    }

    #[test]
    fn test_find_site_details() {
        let details = dir().find_site_details("Shore Temple").unwrap();
        assert_eq!(details.district, "Chengalpattu");
        assert!(details.full_address.contains("Mahabalipuram"));
        assert_eq!(details.pincode.as_deref(), Some("603104"));
    }

    #[test]
    fn test_find_site_details_case_insensitive() {
        let details = dir().find_site_details("meenakshi amman temple").unwrap();
        assert_eq!(details.district, "Madurai");
        assert_eq!(details.pincode.as_deref(), Some("625001"));
    }

    #[test]
    fn test_find_site_details_partial_name() {
        let details = dir().find_site_details("Brihadeeswarar").unwrap();
        assert_eq!(details.district, "Thanjavur");
    }

    #[test]
    fn test_find_site_details_unknown() {
        assert!(dir().find_site_details("Eiffel Tower").is_none());
        assert!(dir().find_site_details("").is_none());
    }

    #[test]
    fn test_every_site_has_pincode() {
        for (_, sites) in DISTRICT_SITES {
            for site in *sites {
                assert!(
                    PINCODE_RE.is_match(site),
                    "address missing pincode: {site}"
                );
            }
        }
    }

    #[test]
    fn test_districts_listing() {
        let districts = dir().districts();
        assert!(districts.contains(&"Chennai"));
        assert!(districts.contains(&"Kanyakumari"));
        assert_eq!(districts.len(), DISTRICT_SITES.len());
    }
}
