// 📦 Batch Evaluation - many profiles from one CSV file
//
// Rows are deserialized into raw records and then pushed through the same
// constructors as single profiles, so a bad row fails the whole load.

use crate::burn::{Advice, BurnReport, FinancialProfile};
use crate::idea::{IdeaProfile, IdeaReport, RatingPolicy, Verdict};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// RAW CSV RECORDS
// ============================================================================

#[derive(Debug, Deserialize)]
struct FinancialRecord {
    name: String,
    cash_in_hand: f64,
    monthly_expenses: f64,
    monthly_revenue: f64,
}

#[derive(Debug, Deserialize)]
struct IdeaRecord {
    idea_name: String,
    problem_score: f64,
    market_size: f64,
    competition_level: f64,
}

// ============================================================================
// LOADERS
// ============================================================================

fn open_reader(csv_path: &Path) -> Result<csv::Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(csv_path)
        .with_context(|| format!("Failed to open CSV file: {:?}", csv_path))
}

/// CSV header: name,cash_in_hand,monthly_expenses,monthly_revenue
pub fn load_financial_profiles(csv_path: &Path) -> Result<Vec<FinancialProfile>> {
    let mut rdr = open_reader(csv_path)?;

    let mut profiles = Vec::new();

    for (index, result) in rdr.deserialize().enumerate() {
        // Header is line 1
        let line = index + 2;
        let record: FinancialRecord =
            result.with_context(|| format!("Failed to parse financial row at line {}", line))?;

        let profile = FinancialProfile::new(
            record.name,
            record.cash_in_hand,
            record.monthly_expenses,
            record.monthly_revenue,
        )
        .with_context(|| format!("Invalid financial row at line {}", line))?;

        profiles.push(profile);
    }

    tracing::info!(path = ?csv_path, count = profiles.len(), "loaded financial profiles");

    Ok(profiles)
}

/// CSV header: idea_name,problem_score,market_size,competition_level
pub fn load_idea_profiles(csv_path: &Path, policy: RatingPolicy) -> Result<Vec<IdeaProfile>> {
    let mut rdr = open_reader(csv_path)?;

    let mut profiles = Vec::new();

    for (index, result) in rdr.deserialize().enumerate() {
        let line = index + 2;
        let record: IdeaRecord =
            result.with_context(|| format!("Failed to parse idea row at line {}", line))?;

        let profile = IdeaProfile::with_policy(
            record.idea_name,
            record.problem_score,
            record.market_size,
            record.competition_level,
            policy,
        )
        .with_context(|| format!("Invalid idea row at line {}", line))?;

        profiles.push(profile);
    }

    tracing::info!(path = ?csv_path, count = profiles.len(), ?policy, "loaded idea profiles");

    Ok(profiles)
}

// ============================================================================
// BURN BATCH SUMMARY
// ============================================================================

#[derive(Debug, Clone, Default, Serialize)]
pub struct BurnBatchSummary {
    pub total_startups: usize,
    pub profitable_count: usize,
    pub manageable_count: usize,
    pub high_burn_count: usize,
    pub total_cash: f64,
    /// Mean burn over startups that are actually burning cash
    pub average_burn: Option<f64>,
    /// Name and months of the startup closest to running out
    pub shortest_runway: Option<(String, f64)>,
}

impl BurnBatchSummary {
    pub fn from_reports(reports: &[BurnReport]) -> Self {
        let mut summary = BurnBatchSummary {
            total_startups: reports.len(),
            ..Default::default()
        };

        let mut burning_total = 0.0;
        let mut burning_count = 0usize;

        for report in reports {
            summary.total_cash += report.cash_in_hand;

            match report.advice {
                Advice::Profitable => summary.profitable_count += 1,
                Advice::Manageable => summary.manageable_count += 1,
                Advice::HighBurn => summary.high_burn_count += 1,
            }

            if let Some(months) = report.runway.months() {
                burning_total += report.burn_rate;
                burning_count += 1;

                let shorter = summary
                    .shortest_runway
                    .as_ref()
                    .map_or(true, |(_, best)| months < *best);
                if shorter {
                    summary.shortest_runway = Some((report.name.clone(), months));
                }
            }
        }

        if burning_count > 0 {
            summary.average_burn = Some(burning_total / burning_count as f64);
        }

        summary
    }

    pub fn summary(&self) -> String {
        let shortest = match &self.shortest_runway {
            Some((name, months)) => format!("shortest runway {} ({:.1} months)", name, months),
            None => "no startup is burning cash".to_string(),
        };

        format!(
            "{} startups: {} profitable, {} manageable, {} high burn | total cash ${:.2} | {}",
            self.total_startups,
            self.profitable_count,
            self.manageable_count,
            self.high_burn_count,
            self.total_cash,
            shortest
        )
    }
}

// ============================================================================
// IDEA BATCH SUMMARY
// ============================================================================

#[derive(Debug, Clone, Default, Serialize)]
pub struct IdeaBatchSummary {
    pub total_ideas: usize,
    pub strong_count: usize,
    pub moderate_count: usize,
    pub weak_count: usize,
    pub average_score: Option<f64>,
    /// Highest score; the earliest idea wins a tie
    pub best_idea: Option<(String, f64)>,
}

impl IdeaBatchSummary {
    pub fn from_reports(reports: &[IdeaReport]) -> Self {
        let mut summary = IdeaBatchSummary {
            total_ideas: reports.len(),
            ..Default::default()
        };

        let mut score_total = 0.0;

        for report in reports {
            score_total += report.score;

            match report.verdict {
                Verdict::Strong => summary.strong_count += 1,
                Verdict::Moderate => summary.moderate_count += 1,
                Verdict::Weak => summary.weak_count += 1,
            }

            let better = summary
                .best_idea
                .as_ref()
                .map_or(true, |(_, best)| report.score > *best);
            if better {
                summary.best_idea = Some((report.idea_name.clone(), report.score));
            }
        }

        if !reports.is_empty() {
            summary.average_score = Some(score_total / reports.len() as f64);
        }

        summary
    }

    pub fn summary(&self) -> String {
        let best = match &self.best_idea {
            Some((name, score)) => format!("best {} ({:.2})", name, score),
            None => "no ideas".to_string(),
        };

        format!(
            "{} ideas: {} strong, {} moderate, {} weak | average score {:.2} | {}",
            self.total_ideas,
            self.strong_count,
            self.moderate_count,
            self.weak_count,
            self.average_score.unwrap_or(0.0),
            best
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
