// 💡 Idea Validation Scorer
//
//   score = problem * 0.4 + market * 0.4 - competition * 0.2   (2 decimals)
//
// Problem severity and market size pull the score up at equal weight,
// competition pulls it down at half that weight.

use crate::error::InputError;
use crate::numeric::{ensure_finite, round_to};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

pub const PROBLEM_WEIGHT: f64 = 0.4;
pub const MARKET_WEIGHT: f64 = 0.4;
pub const COMPETITION_WEIGHT: f64 = 0.2;

/// Documented rating scale
pub const RATING_MIN: f64 = 1.0;
pub const RATING_MAX: f64 = 10.0;

pub const STRONG_THRESHOLD: f64 = 7.0;
pub const MODERATE_THRESHOLD: f64 = 5.0;

// ============================================================================
// RATING POLICY
// ============================================================================

/// What to do with a rating outside RATING_MIN..=RATING_MAX
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RatingPolicy {
    /// Use the rating as given
    #[default]
    Accept,

    /// Pull the rating into range
    Clamp,

    /// Fail construction with InputError::OutOfRange
    Reject,
}

impl RatingPolicy {
    fn apply(self, field: &'static str, value: f64) -> Result<f64, InputError> {
        let value = ensure_finite(field, value)?;
        let in_range = (RATING_MIN..=RATING_MAX).contains(&value);

        match self {
            RatingPolicy::Accept => Ok(value),
            RatingPolicy::Clamp if !in_range => {
                let clamped = value.clamp(RATING_MIN, RATING_MAX);
                tracing::warn!(field, value, clamped, "rating out of range, clamped");
                Ok(clamped)
            }
            RatingPolicy::Clamp => Ok(value),
            RatingPolicy::Reject if !in_range => Err(InputError::OutOfRange {
                field,
                value,
                min: RATING_MIN,
                max: RATING_MAX,
            }),
            RatingPolicy::Reject => Ok(value),
        }
    }
}

// ============================================================================
// VERDICT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Strong,
    Moderate,
    Weak,
}

impl Verdict {
    pub fn from_score(score: f64) -> Self {
        if score >= STRONG_THRESHOLD {
            Verdict::Strong
        } else if score >= MODERATE_THRESHOLD {
            Verdict::Moderate
        } else {
            Verdict::Weak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Strong => "Strong idea 🚀",
            Verdict::Moderate => "Moderate idea ⚖️",
            Verdict::Weak => "Weak idea ❌",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// IDEA PROFILE
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct IdeaProfile {
    idea_name: String,
    problem_score: f64,
    market_size: f64,
    competition_level: f64,
}

impl IdeaProfile {
    /// Build with the default policy (ratings passed through as given)
    pub fn new(
        idea_name: impl Into<String>,
        problem_score: f64,
        market_size: f64,
        competition_level: f64,
    ) -> Result<Self, InputError> {
        Self::with_policy(
            idea_name,
            problem_score,
            market_size,
            competition_level,
            RatingPolicy::default(),
        )
    }

    pub fn with_policy(
        idea_name: impl Into<String>,
        problem_score: f64,
        market_size: f64,
        competition_level: f64,
        policy: RatingPolicy,
    ) -> Result<Self, InputError> {
        Ok(IdeaProfile {
            idea_name: idea_name.into(),
            problem_score: policy.apply("problem_score", problem_score)?,
            market_size: policy.apply("market_size", market_size)?,
            competition_level: policy.apply("competition_level", competition_level)?,
        })
    }

    pub fn idea_name(&self) -> &str {
        &self.idea_name
    }

    pub fn problem_score(&self) -> f64 {
        self.problem_score
    }

    pub fn market_size(&self) -> f64 {
        self.market_size
    }

    pub fn competition_level(&self) -> f64 {
        self.competition_level
    }

    pub fn validation_score(&self) -> f64 {
        let score = self.problem_score * PROBLEM_WEIGHT + self.market_size * MARKET_WEIGHT
            - self.competition_level * COMPETITION_WEIGHT;
        round_to(score, 2)
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_score(self.validation_score())
    }

    /// Snapshot of name, ratings, score and verdict
    pub fn show_result(&self) -> IdeaReport {
        let report = IdeaReport {
            idea_name: self.idea_name.clone(),
            problem_score: self.problem_score,
            market_size: self.market_size,
            competition_level: self.competition_level,
            score: self.validation_score(),
            verdict: self.verdict(),
            generated_at: Utc::now(),
        };

        tracing::debug!(
            idea = %report.idea_name,
            score = report.score,
            verdict = ?report.verdict,
            "computed idea score"
        );

        report
    }
}

// ============================================================================
// IDEA REPORT
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct IdeaReport {
    pub idea_name: String,
    pub problem_score: f64,
    pub market_size: f64,
    pub competition_level: f64,
    pub score: f64,
    pub verdict: Verdict,
    pub generated_at: DateTime<Utc>,
}

impl fmt::Display for IdeaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "💡 Startup Idea: {}", self.idea_name)?;
        writeln!(f, "Validation Score: {:.2}/10", self.score)?;
        write!(f, "Verdict: {}", self.verdict)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_idea_end_to_end() {
        let idea = IdeaProfile::new("AI Resume Screener", 8.0, 7.0, 5.0).unwrap();

        assert_eq!(idea.validation_score(), 5.0);
        assert_eq!(idea.verdict(), Verdict::Moderate);
    }

    #[test]
    fn test_verdict_boundaries() {
        assert_eq!(Verdict::from_score(7.0), Verdict::Strong);
        assert_eq!(Verdict::from_score(6.99), Verdict::Moderate);
        assert_eq!(Verdict::from_score(5.0), Verdict::Moderate);
        assert_eq!(Verdict::from_score(4.99), Verdict::Weak);
        assert_eq!(Verdict::from_score(-2.0), Verdict::Weak);
    }

    #[test]
    fn test_score_rounds_like_python() {
        // 4 + 4 - 1.015 is stored as 6.984999999999999, which Python rounds to 6.98
        let idea = IdeaProfile::new("Near Miss", 10.0, 10.0, 5.075).unwrap();
        assert_eq!(idea.validation_score(), 6.98);
        assert_eq!(idea.verdict(), Verdict::Moderate);
    }

    #[test]
    fn test_verdict_uses_rounded_score() {
        // raw 6.996 rounds up to 7.00
        let idea = IdeaProfile::new("Rounded Up", 10.0, 10.0, 5.02).unwrap();
        assert_eq!(idea.validation_score(), 7.0);
        assert_eq!(idea.verdict(), Verdict::Strong);

        // raw 6.994 rounds down to 6.99
        let idea = IdeaProfile::new("Rounded Down", 10.0, 10.0, 5.03).unwrap();
        assert_eq!(idea.validation_score(), 6.99);
        assert_eq!(idea.verdict(), Verdict::Moderate);

        // raw 4.996 rounds up to 5.00
        let idea = IdeaProfile::new("Scraped By", 5.0, 10.0, 5.02).unwrap();
        assert_eq!(idea.validation_score(), 5.0);
        assert_eq!(idea.verdict(), Verdict::Moderate);
    }

    #[test]
    fn test_strong_and_weak_ideas() {
        let strong = IdeaProfile::new("Strong", 10.0, 10.0, 1.0).unwrap();
        assert_eq!(strong.validation_score(), 7.8);
        assert_eq!(strong.verdict(), Verdict::Strong);

        let weak = IdeaProfile::new("Weak", 2.0, 3.0, 9.0).unwrap();
        assert_eq!(weak.validation_score(), 0.2);
        assert_eq!(weak.verdict(), Verdict::Weak);
    }

    #[test]
    fn test_accept_passes_out_of_range_through() {
        let idea = IdeaProfile::new("Wild", 20.0, 0.0, 0.0).unwrap();
        assert_eq!(idea.problem_score(), 20.0);
        assert_eq!(idea.validation_score(), 8.0);
        assert_eq!(idea.verdict(), Verdict::Strong);
    }

    #[test]
    fn test_clamp_pulls_ratings_into_range() {
        let idea = IdeaProfile::with_policy("Wild", 20.0, 0.0, 5.0, RatingPolicy::Clamp).unwrap();
        assert_eq!(idea.problem_score(), 10.0);
        assert_eq!(idea.market_size(), 1.0);
        assert_eq!(idea.competition_level(), 5.0);
    }

    #[test]
    fn test_reject_out_of_range() {
        let err =
            IdeaProfile::with_policy("Wild", 8.0, 11.0, 5.0, RatingPolicy::Reject).unwrap_err();
        assert_eq!(
            err,
            InputError::OutOfRange {
                field: "market_size",
                value: 11.0,
                min: 1.0,
                max: 10.0,
            }
        );

        // Boundaries themselves are fine
        assert!(IdeaProfile::with_policy("Edge", 1.0, 10.0, 1.0, RatingPolicy::Reject).is_ok());
    }

    #[test]
    fn test_non_finite_rejected_under_every_policy() {
        for policy in [RatingPolicy::Accept, RatingPolicy::Clamp, RatingPolicy::Reject] {
            let err = IdeaProfile::with_policy("NaN", f64::NAN, 5.0, 5.0, policy).unwrap_err();
            assert_eq!(err.field(), "problem_score");
        }
    }

    #[test]
    fn test_show_result_text() {
        let idea = IdeaProfile::new("AI Resume Screener", 8.0, 7.0, 5.0).unwrap();
        let text = idea.show_result().to_string();

        println!("{}", text);

        assert!(text.starts_with("💡 Startup Idea: AI Resume Screener"));
        assert!(text.contains("Validation Score: 5.00/10"));
        assert!(text.contains("Verdict: Moderate idea"));
    }
}
