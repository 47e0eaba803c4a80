//! Region reference table - the Indonesian provinces the PINTAR portal
//! schedules Kas Keliling visits for
//!
//! Loaded once, never mutated. Codes follow the portal's own numbering
//! (BPS province codes), which is why the sequence has gaps.

/// Province code to display name, as the portal labels them.
pub const REGIONS: &[(u32, &str)] = &[
    (11, "ACEH"),
    (12, "SUMATERA UTARA"),
    (13, "SUMATERA BARAT"),
    (14, "RIAU"),
    (15, "JAMBI"),
    (16, "SUMATERA SELATAN"),
    (17, "BENGKULU"),
    (18, "LAMPUNG"),
    (19, "KEP. BANGKA BELITUNG"),
    (20, "KEP. RIAU"),
    (31, "DKI JAKARTA"),
    (32, "JAWA BARAT"),
    (33, "JAWA TENGAH"),
    (34, "D.I. YOGYAKARTA"),
    (35, "JAWA TIMUR"),
    (36, "BANTEN"),
    (51, "BALI"),
    (52, "NUSA TENGGARA BARAT"),
    (53, "NUSA TENGGARA TIMUR"),
    (61, "KALIMANTAN BARAT"),
    (62, "KALIMANTAN TENGAH"),
    (63, "KALIMANTAN SELATAN"),
    (64, "KALIMANTAN TIMUR"),
    (65, "KALIMANTAN UTARA"),
    (71, "SULAWESI UTARA"),
    (72, "SULAWESI TENGAH"),
    (73, "SULAWESI SELATAN"),
    (74, "SULAWESI TENGGARA"),
    (75, "GORONTALO"),
    (76, "SULAWESI BARAT"),
    (81, "MALUKU"),
    (82, "MALUKU UTARA"),
    (91, "PAPUA BARAT"),
    (94, "PAPUA"),
];

/// Look up the display name for a region code.
///
/// Unknown codes get a synthesized label instead of an error - the portal
/// itself accepts any numeric code and simply serves an empty listing.
pub fn region_name(region_id: u32) -> String {
    REGIONS
        .iter()
        .find(|(code, _)| *code == region_id)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| format!("PROVINSI ID {}", region_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_region_resolves_to_name() {
        assert_eq!(region_name(31), "DKI JAKARTA");
        assert_eq!(region_name(94), "PAPUA");
    }

    #[test]
    fn unknown_region_gets_fallback_label() {
        assert_eq!(region_name(99), "PROVINSI ID 99");
    }
}
