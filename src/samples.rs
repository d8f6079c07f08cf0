// Sample data printed when the binary runs without a subcommand

use crate::burn::FinancialProfile;
use crate::error::InputError;
use crate::idea::IdeaProfile;

pub fn sample_startup() -> Result<FinancialProfile, InputError> {
    FinancialProfile::new("ByteBell", 500_000.0, 120_000.0, 60_000.0)
}

pub fn sample_idea() -> Result<IdeaProfile, InputError> {
    IdeaProfile::new("AI Resume Screener", 8.0, 7.0, 5.0)
}
