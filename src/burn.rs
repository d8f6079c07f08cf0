// 🔥 Burn Rate & Runway Calculator
//
//   burn_rate = monthly_expenses - monthly_revenue
//   runway    = cash_in_hand / burn_rate   (only while burning cash)

use crate::error::InputError;
use crate::numeric::{ensure_finite, round_to};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Burn rates at or above this are classified as high burn
pub const HIGH_BURN_THRESHOLD: f64 = 50_000.0;

// ============================================================================
// RUNWAY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "months", rename_all = "snake_case")]
pub enum Runway {
    /// Not burning cash, so there is no finite runway
    Profitable,

    /// Months left at the current burn, rounded to one decimal
    Months(f64),
}

impl Runway {
    pub fn is_profitable(&self) -> bool {
        matches!(self, Runway::Profitable)
    }

    pub fn months(&self) -> Option<f64> {
        match self {
            Runway::Profitable => None,
            Runway::Months(months) => Some(*months),
        }
    }
}

impl fmt::Display for Runway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Runway::Profitable => write!(f, "Profitable 🚀"),
            Runway::Months(months) => write!(f, "{:.1} months", months),
        }
    }
}

// ============================================================================
// ADVICE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advice {
    /// burn <= 0
    Profitable,

    /// 0 < burn < HIGH_BURN_THRESHOLD
    Manageable,

    /// burn >= HIGH_BURN_THRESHOLD
    HighBurn,
}

impl Advice {
    pub fn from_burn_rate(burn: f64) -> Self {
        if burn <= 0.0 {
            Advice::Profitable
        } else if burn < HIGH_BURN_THRESHOLD {
            Advice::Manageable
        } else {
            Advice::HighBurn
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Advice::Profitable => "Startup is profitable. Focus on scaling.",
            Advice::Manageable => "Burn rate is manageable. Monitor growth.",
            Advice::HighBurn => "High burn rate! Consider reducing costs or raising funds.",
        }
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// FINANCIAL PROFILE
// ============================================================================

/// A startup's cash position. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialProfile {
    name: String,
    cash_in_hand: f64,
    monthly_expenses: f64,
    monthly_revenue: f64,
}

impl FinancialProfile {
    /// Validates that every amount is finite and that cash is not negative.
    /// Expenses and revenue are otherwise taken as given. Inputs whose burn
    /// rate or runway would overflow to infinity are rejected here, so every
    /// report carries finite numbers.
    pub fn new(
        name: impl Into<String>,
        cash_in_hand: f64,
        monthly_expenses: f64,
        monthly_revenue: f64,
    ) -> Result<Self, InputError> {
        let cash_in_hand = ensure_finite("cash_in_hand", cash_in_hand)?;
        let monthly_expenses = ensure_finite("monthly_expenses", monthly_expenses)?;
        let monthly_revenue = ensure_finite("monthly_revenue", monthly_revenue)?;

        if cash_in_hand < 0.0 {
            return Err(InputError::Negative {
                field: "cash_in_hand",
                value: cash_in_hand,
            });
        }

        let profile = FinancialProfile {
            name: name.into(),
            cash_in_hand,
            monthly_expenses,
            monthly_revenue,
        };

        let burn = profile.burn_rate();
        if !burn.is_finite() {
            return Err(InputError::Overflow { field: "burn_rate" });
        }
        if burn > 0.0 && !(cash_in_hand / burn).is_finite() {
            return Err(InputError::Overflow {
                field: "runway_months",
            });
        }

        Ok(profile)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cash_in_hand(&self) -> f64 {
        self.cash_in_hand
    }

    pub fn monthly_expenses(&self) -> f64 {
        self.monthly_expenses
    }

    pub fn monthly_revenue(&self) -> f64 {
        self.monthly_revenue
    }

    pub fn burn_rate(&self) -> f64 {
        self.monthly_expenses - self.monthly_revenue
    }

    pub fn runway_months(&self) -> Runway {
        let burn = self.burn_rate();
        // Zero burn must take this branch before any division
        if burn <= 0.0 {
            return Runway::Profitable;
        }
        Runway::Months(round_to(self.cash_in_hand / burn, 1))
    }

    pub fn advice(&self) -> Advice {
        Advice::from_burn_rate(self.burn_rate())
    }

    /// Snapshot everything the console report shows
    pub fn report(&self) -> BurnReport {
        let report = BurnReport {
            name: self.name.clone(),
            cash_in_hand: self.cash_in_hand,
            monthly_expenses: self.monthly_expenses,
            monthly_revenue: self.monthly_revenue,
            burn_rate: self.burn_rate(),
            runway: self.runway_months(),
            advice: self.advice(),
            generated_at: Utc::now(),
        };

        tracing::debug!(
            name = %report.name,
            burn_rate = report.burn_rate,
            advice = ?report.advice,
            "computed burn report"
        );

        report
    }
}

// ============================================================================
// BURN REPORT
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct BurnReport {
    pub name: String,
    pub cash_in_hand: f64,
    pub monthly_expenses: f64,
    pub monthly_revenue: f64,
    pub burn_rate: f64,
    pub runway: Runway,
    pub advice: Advice,
    pub generated_at: DateTime<Utc>,
}

impl fmt::Display for BurnReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📊 {} Financial Report", self.name)?;
        writeln!(f, "Cash in Hand: ${:.2}", self.cash_in_hand)?;
        writeln!(f, "Monthly Expenses: ${:.2}", self.monthly_expenses)?;
        writeln!(f, "Monthly Revenue: ${:.2}", self.monthly_revenue)?;
        writeln!(f, "Burn Rate: ${:.2}", self.burn_rate)?;
        writeln!(f, "Runway: {}", self.runway)?;
        write!(f, "Advice: {}", self.advice)
    }
}

// ============================================================================
// TESTS
// ============================================================================
