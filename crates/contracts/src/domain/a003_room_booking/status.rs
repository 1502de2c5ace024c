use serde::{Deserialize, Serialize};

/// Status of an individual room booking, as decided by an administrator.
///
/// This is backend vocabulary. The cart's client-side entry statuses
/// (`CartEntryStatus`) are a different, purely local state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Approved => "Approved",
            BookingStatus::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Group-level status derived by the backend from its member bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupStatus {
    Pending,
    AllApproved,
    AllRejected,
    PartiallyApproved,
    PartiallyRejected,
}

impl GroupStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupStatus::Pending => "Pending",
            GroupStatus::AllApproved => "AllApproved",
            GroupStatus::AllRejected => "AllRejected",
            GroupStatus::PartiallyApproved => "PartiallyApproved",
            GroupStatus::PartiallyRejected => "PartiallyRejected",
        }
    }
}

impl std::fmt::Display for GroupStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
