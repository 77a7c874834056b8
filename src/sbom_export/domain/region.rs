use std::fmt;
use std::str::FromStr;

/// Sysdig Secure deployment region.
///
/// The set is closed: every region maps to one fixed vulnerability API
/// base URL. Unknown names resolve to [`Region::Us1`] through
/// [`Region::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    #[default]
    Us1,
    Us2,
    Us4,
    Eu1,
    Au1,
    Me2,
    In1,
}

impl Region {
    /// All known regions, in table order
    pub const ALL: [Region; 7] = [
        Region::Us1,
        Region::Us2,
        Region::Us4,
        Region::Eu1,
        Region::Au1,
        Region::Me2,
        Region::In1,
    ];

    /// Resolves a configured region name, falling back to the default
    /// region for anything outside the table. Matching is exact.
    pub fn resolve(name: &str) -> Self {
        match name.parse::<Region>() {
            Ok(region) => region,
            Err(_) => Region::default(),
        }
    }

    /// Region code as written in the config file
    pub fn code(&self) -> &'static str {
        match self {
            Region::Us1 => "us1",
            Region::Us2 => "us2",
            Region::Us4 => "us4",
            Region::Eu1 => "eu1",
            Region::Au1 => "au1",
            Region::Me2 => "me2",
            Region::In1 => "in1",
        }
    }

    /// Vulnerability API base URL, always ending with `/`
    pub fn base_url(&self) -> &'static str {
        match self {
            Region::Us1 => "https://secure.sysdig.com/secure/vulnerability/",
            Region::Us2 => "https://us2.app.sysdig.com/secure/vulnerability/",
            Region::Us4 => "https://app.us4.sysdig.com/secure/vulnerability/",
            Region::Eu1 => "https://eu1.app.sysdig.com/secure/vulnerability/",
            Region::Au1 => "https://app.au1.sysdig.com/secure/vulnerability/",
            Region::Me2 => "https://app.me2.sysdig.com/secure/vulnerability/",
            Region::In1 => "https://app.in1.sysdig.com/secure/vulnerability/",
        }
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|region| region.code() == s)
            .ok_or_else(|| format!("Unknown region: {}", s))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
