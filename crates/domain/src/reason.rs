// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Business reason codes.
//!
//! Every expected refusal maps to exactly one code. Callers render
//! [`ReasonCode::message`] to the member; the code itself is the stable,
//! machine-readable contract.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Closed enumeration of admission refusal reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    CompanyMismatch,
    CompanyInactive,
    WindowClosed,
    NoSelection,
    ProductDisabled,
    SoldOut,
    NotWhitelistedForProduct,
    NotOnWhitelist,
    LockerDisabled,
    PeriodOverlap,
}

impl ReasonCode {
    /// Returns the wire code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CompanyMismatch => "COMPANY_MISMATCH",
            Self::CompanyInactive => "COMPANY_INACTIVE",
            Self::WindowClosed => "WINDOW_CLOSED",
            Self::NoSelection => "NO_SELECTION",
            Self::ProductDisabled => "PRODUCT_DISABLED",
            Self::SoldOut => "SOLD_OUT",
            Self::NotWhitelistedForProduct => "NOT_WHITELISTED_FOR_PRODUCT",
            Self::NotOnWhitelist => "NOT_ON_WHITELIST",
            Self::LockerDisabled => "LOCKER_DISABLED",
            Self::PeriodOverlap => "PERIOD_OVERLAP",
        }
    }

    /// Returns the member-facing message for this reason.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::CompanyMismatch => "You can only register through your own company.",
            Self::CompanyInactive => "Registration for your company is not active.",
            Self::WindowClosed => "Registration is not open at this time.",
            Self::NoSelection => "Select exactly one product to continue.",
            Self::ProductDisabled => "The selected product is not currently offered.",
            Self::SoldOut => "All registration slots have been taken.",
            Self::NotWhitelistedForProduct => {
                "You are not on the approved list for the selected product."
            }
            Self::NotOnWhitelist => "You are not on the approved registration list.",
            Self::LockerDisabled => "Lockers are not currently offered.",
            Self::PeriodOverlap => "The requested period overlaps one you already hold.",
        }
    }
}

impl FromStr for ReasonCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COMPANY_MISMATCH" => Ok(Self::CompanyMismatch),
            "COMPANY_INACTIVE" => Ok(Self::CompanyInactive),
            "WINDOW_CLOSED" => Ok(Self::WindowClosed),
            "NO_SELECTION" => Ok(Self::NoSelection),
            "PRODUCT_DISABLED" => Ok(Self::ProductDisabled),
            "SOLD_OUT" => Ok(Self::SoldOut),
            "NOT_WHITELISTED_FOR_PRODUCT" => Ok(Self::NotWhitelistedForProduct),
            "NOT_ON_WHITELIST" => Ok(Self::NotOnWhitelist),
            "LOCKER_DISABLED" => Ok(Self::LockerDisabled),
            "PERIOD_OVERLAP" => Ok(Self::PeriodOverlap),
            _ => Err(DomainError::InvalidReasonCode(s.to_string())),
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const ALL: [ReasonCode; 10] = [
        ReasonCode::CompanyMismatch,
        ReasonCode::CompanyInactive,
        ReasonCode::WindowClosed,
        ReasonCode::NoSelection,
        ReasonCode::ProductDisabled,
        ReasonCode::SoldOut,
        ReasonCode::NotWhitelistedForProduct,
        ReasonCode::NotOnWhitelist,
        ReasonCode::LockerDisabled,
        ReasonCode::PeriodOverlap,
    ];

    #[test]
    fn test_serde_matches_wire_code() {
        for code in ALL {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn test_parse_wire_code() {
        for code in ALL {
            assert_eq!(code.as_str().parse::<ReasonCode>().unwrap(), code);
        }
        assert!("BOGUS".parse::<ReasonCode>().is_err());
    }

    #[test]
    fn test_every_code_has_a_message() {
        for code in ALL {
            assert!(!code.message().is_empty());
        }
    }
}
