//! Region codes the building list groups by.

/// The regions rendered ahead of all others, in display order.
///
/// Any region code not listed here is still shown, after these, in the
/// order it is first seen in the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Nsw,
    Vic,
    Qld,
    Sa,
    Wa,
    Tas,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Nsw,
        Region::Vic,
        Region::Qld,
        Region::Sa,
        Region::Wa,
        Region::Tas,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Region::Nsw => "NSW",
            Region::Vic => "VIC",
            Region::Qld => "QLD",
            Region::Sa => "SA",
            Region::Wa => "WA",
            Region::Tas => "TAS",
        }
    }

    /// Section heading for the region. Codes are shown as-is.
    pub fn display_name(self) -> &'static str {
        self.code()
    }

    pub fn from_code(code: &str) -> Option<Region> {
        Region::ALL.into_iter().find(|region| region.code() == code)
    }

    /// Position in the fixed display order.
    pub fn priority(self) -> usize {
        self as usize
    }
}

/// Heading for any region code, known or not.
pub fn region_display_name(code: &str) -> &str {
    Region::from_code(code)
        .map(Region::display_name)
        .unwrap_or(code)
}
