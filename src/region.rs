use crate::error::UnsupportedRegionError;
use std::fmt;
use std::str::FromStr;

/// Macro-region that serves the match-v5 and account-v1 endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutingRegion {
    Americas,
    Europe,
    Asia,
    Sea,
}

impl RoutingRegion {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingRegion::Americas => "americas",
            RoutingRegion::Europe => "europe",
            RoutingRegion::Asia => "asia",
            RoutingRegion::Sea => "sea",
        }
    }

    pub fn host(&self) -> String {
        format!("{}.api.riotgames.com", self.as_str())
    }
}

impl fmt::Display for RoutingRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved server: what the user picked, the platform shard serving
/// summoner/league data, and the routing region serving matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub display: &'static str,
    pub platform: &'static str,
    pub routing: RoutingRegion,
}

const REGIONS: &[Region] = &[
    Region { display: "North America", platform: "na1", routing: RoutingRegion::Americas },
    Region { display: "Brazil", platform: "br1", routing: RoutingRegion::Americas },
    Region { display: "Latin America North", platform: "la1", routing: RoutingRegion::Americas },
    Region { display: "Latin America South", platform: "la2", routing: RoutingRegion::Americas },
    Region { display: "Europe West", platform: "euw1", routing: RoutingRegion::Europe },
    Region { display: "Europe Nordic & East", platform: "eun1", routing: RoutingRegion::Europe },
    Region { display: "Turkey", platform: "tr1", routing: RoutingRegion::Europe },
    Region { display: "Russia", platform: "ru", routing: RoutingRegion::Europe },
    Region { display: "Korea", platform: "kr", routing: RoutingRegion::Asia },
    Region { display: "Japan", platform: "jp1", routing: RoutingRegion::Asia },
    Region { display: "Oceania", platform: "oc1", routing: RoutingRegion::Sea },
    Region { display: "Philippines", platform: "ph2", routing: RoutingRegion::Sea },
    Region { display: "Singapore", platform: "sg2", routing: RoutingRegion::Sea },
    Region { display: "Thailand", platform: "th2", routing: RoutingRegion::Sea },
    Region { display: "Vietnam", platform: "vn2", routing: RoutingRegion::Sea },
];

impl Region {
    /// Accepts a display name or a platform code, case-insensitively.
    pub fn resolve(input: &str) -> Result<Region, UnsupportedRegionError> {
        let needle = input.trim();
        REGIONS
            .iter()
            .find(|r| r.display.eq_ignore_ascii_case(needle) || r.platform.eq_ignore_ascii_case(needle))
            .copied()
            .ok_or_else(|| UnsupportedRegionError(input.to_string()))
    }

    pub fn all() -> &'static [Region] {
        REGIONS
    }

    /// Platform codes of every supported region, comma separated.
    pub fn supported_platforms() -> String {
        Self::all().iter().map(|r| r.platform).collect::<Vec<_>>().join(", ")
    }

    pub fn platform_host(&self) -> String {
        format!("{}.api.riotgames.com", self.platform)
    }
}

impl FromStr for Region {
    type Err = UnsupportedRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::resolve(s)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display, self.platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_routes_to_europe() {
        let region = Region::resolve("Europe West").unwrap();
        assert_eq!(region.platform, "euw1");
        assert_eq!(region.routing, RoutingRegion::Europe);
        assert_eq!(region.routing.as_str(), "europe");
    }

    #[test]
    fn test_platform_code_is_case_insensitive() {
        let region: Region = "KR".parse().unwrap();
        assert_eq!(region.display, "Korea");
        assert_eq!(region.routing, RoutingRegion::Asia);
    }

    #[test]
    fn test_sea_shards() {
        for code in ["oc1", "ph2", "sg2", "th2", "vn2"] {
            assert_eq!(Region::resolve(code).unwrap().routing, RoutingRegion::Sea);
        }
    }

    #[test]
    fn test_unmapped_region_is_an_error() {
        let err = Region::resolve("Atlantis").unwrap_err();
        assert_eq!(err, UnsupportedRegionError("Atlantis".to_string()));
    }

    #[test]
    fn test_every_listed_region_resolves_by_platform() {
        assert_eq!(Region::all().len(), 15);
        for region in Region::all() {
            assert_eq!(Region::resolve(region.platform), Ok(*region));
        }
        let supported = Region::supported_platforms();
        assert!(supported.starts_with("na1, br1"));
        assert!(supported.ends_with("vn2"));
        assert!(!supported.contains("cn"));
    }

    #[test]
    fn test_hosts() {
        let region = Region::resolve("na1").unwrap();
        assert_eq!(region.platform_host(), "na1.api.riotgames.com");
        assert_eq!(region.routing.host(), "americas.api.riotgames.com");
    }
}
