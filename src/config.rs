//! Campaign parameters.

use crate::error::{to_i64, Result, SimError};

/// Default population size.
pub const DEFAULT_POPULATION: usize = 500;
/// Default size of each vaccine cohort.
pub const DEFAULT_COHORT: usize = 75;
/// Default number of members printed per derived set.
pub const DEFAULT_SAMPLE_LIMIT: usize = 50;

/// Sizes and labels for one simulated campaign.
///
/// # Examples
/// ```
/// use u_vaxsets::config::CampaignConfig;
/// let config = CampaignConfig::default();
/// assert_eq!(config.population, 500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignConfig {
    pub population: usize,
    /// Size of cohort P.
    pub first_cohort: usize,
    /// Size of cohort A.
    pub second_cohort: usize,
    pub first_label: String,
    pub second_label: String,
    pub sample_limit: usize,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            population: DEFAULT_POPULATION,
            first_cohort: DEFAULT_COHORT,
            second_cohort: DEFAULT_COHORT,
            first_label: "Pfizer".to_string(),
            second_label: "AstraZeneca".to_string(),
            sample_limit: DEFAULT_SAMPLE_LIMIT,
        }
    }
}

impl CampaignConfig {
    /// Builds a config from signed sizes as received on the command line.
    ///
    /// Labels and the sample limit keep their defaults.
    ///
    /// # Errors
    /// [`SimError::InvalidArgument`] for any negative size, or any
    /// combination rejected by [`validate`](Self::validate).
    pub fn from_raw(population: i64, first_cohort: i64, second_cohort: i64) -> Result<Self> {
        let config = Self {
            population: non_negative("population", population)?,
            first_cohort: non_negative("first_cohort", first_cohort)?,
            second_cohort: non_negative("second_cohort", second_cohort)?,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that the population is positive and both cohorts fit in it.
    pub fn validate(&self) -> Result<()> {
        if self.population == 0 {
            return Err(SimError::invalid(
                "population",
                0,
                "population must be positive",
            ));
        }
        for (name, size) in [
            ("first_cohort", self.first_cohort),
            ("second_cohort", self.second_cohort),
        ] {
            if size > self.population {
                return Err(SimError::invalid(
                    name,
                    to_i64(size),
                    format!("cohort exceeds population of {}", self.population),
                ));
            }
        }
        Ok(())
    }
}

fn non_negative(name: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| SimError::invalid(name, value, "must not be negative"))
}
