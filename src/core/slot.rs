//! Normalized slot shapes - the stable output of the extraction pipeline

use serde::{Deserialize, Serialize};

/// One bookable time window at a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotEntry {
    /// Display time as the portal renders it (e.g. "08:00 WIB").
    pub display_time: String,

    /// Remaining bookable units for this window.
    pub remaining_quota: i64,

    /// Portal-side slot identifier, `"N/A"` when none was recognized.
    pub slot_id: String,
}

/// One Kas Keliling location with its open date and slot windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEntry {
    pub location_name: String,

    pub kaskel_id: String,

    /// Open date as the portal formats it; passed through verbatim.
    pub open_date: String,

    /// Sum of remaining quota over every raw slot record of the location,
    /// including records whose display time failed to parse.
    pub total_remaining_quota: i64,

    /// Slots with a recognized display time, in the portal's own order.
    pub slots: Vec<SlotEntry>,
}
