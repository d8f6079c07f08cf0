// Startup Metrics - Core Library
// Burn/runway calculator and idea validation scorer, used by the CLI and tests

pub mod error;
pub mod numeric;
pub mod burn;    // Burn rate, runway, advice
pub mod idea;    // Weighted idea validation score + verdict
pub mod batch;   // CSV batches + summaries
pub mod samples; // Fixed sample data

// Re-export commonly used types
pub use error::InputError;
pub use numeric::round_to;
pub use burn::{
    FinancialProfile, Runway, Advice, BurnReport,
    HIGH_BURN_THRESHOLD,
};
pub use idea::{
    IdeaProfile, RatingPolicy, Verdict, IdeaReport,
    PROBLEM_WEIGHT, MARKET_WEIGHT, COMPETITION_WEIGHT,
};
pub use batch::{
    load_financial_profiles, load_idea_profiles,
    BurnBatchSummary, IdeaBatchSummary,
};
pub use samples::{sample_startup, sample_idea};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
