//! Plan type and payment method of an order

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

// ============================================================================
// Plan Type
// ============================================================================

/// Card plan tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    #[default]
    Standard,
    Logo,
    Custom,
}

impl PlanType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Logo => "logo",
            Self::Custom => "custom",
        }
    }

    /// Whether orders on this plan expect an uploaded logo
    pub const fn expects_logo_file(&self) -> bool {
        matches!(self, Self::Logo)
    }

    /// Whether orders on this plan expect an uploaded design
    pub const fn expects_design_file(&self) -> bool {
        matches!(self, Self::Custom)
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "logo" => Ok(Self::Logo),
            "custom" => Ok(Self::Custom),
            other => Err(DomainError::ValidationError(format!(
                "unknown plan type: {other}"
            ))),
        }
    }
}

// ============================================================================
// Payment Method
// ============================================================================

/// Accepted payment methods (cash on delivery only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    CashOnDelivery,
}

impl PaymentMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CashOnDelivery => "cash_on_delivery",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash_on_delivery" => Ok(Self::CashOnDelivery),
            other => Err(DomainError::ValidationError(format!(
                "unsupported payment method: {other}"
            ))),
        }
    }
}
