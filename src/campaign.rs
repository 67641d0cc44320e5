//! One simulated vaccination campaign.
//!
//! Generates the universe, draws both cohorts from a single seeded stream
//! (P first, then A), and derives the four breakdown sets:
//!
//! | Set | Formula |
//! |---|---|
//! | not vaccinated | U \ (P ∪ A) |
//! | both doses | P ∩ A |
//! | only P | P \ A |
//! | only A | A \ P |
//!
//! `only P`, `only A`, `both` and `not vaccinated` partition `U`.

use rand::Rng;
use tracing::info;

use crate::collections::{difference, intersect, union};
use crate::config::CampaignConfig;
use crate::error::Result;
use crate::population::{generate, Cohort, Universe};
use crate::random::{create_rng, sample, SeedSource};

/// Sets derived from a universe and two cohorts. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown {
    not_vaccinated: Cohort,
    both: Cohort,
    only_first: Cohort,
    only_second: Cohort,
}

impl Breakdown {
    /// Derives the breakdown of `universe` for cohorts `first` (P) and `second` (A).
    ///
    /// # Examples
    /// ```
    /// use u_vaxsets::campaign::Breakdown;
    /// use u_vaxsets::population::{generate, Citizen, Cohort};
    /// let universe = generate(4).unwrap();
    /// let p: Cohort = [Citizen::new(1), Citizen::new(2)].into();
    /// let a: Cohort = [Citizen::new(2), Citizen::new(3)].into();
    /// let b = Breakdown::derive(&universe, &p, &a);
    /// assert_eq!(b.both(), &Cohort::from([Citizen::new(2)]));
    /// assert_eq!(b.not_vaccinated(), &Cohort::from([Citizen::new(4)]));
    /// ```
    pub fn derive(universe: &Universe, first: &Cohort, second: &Cohort) -> Self {
        let vaccinated = union(first, second);
        Self {
            not_vaccinated: difference(universe.members(), &vaccinated),
            both: intersect(first, second),
            only_first: difference(first, second),
            only_second: difference(second, first),
        }
    }

    pub fn not_vaccinated(&self) -> &Cohort {
        &self.not_vaccinated
    }

    pub fn both(&self) -> &Cohort {
        &self.both
    }

    pub fn only_first(&self) -> &Cohort {
        &self.only_first
    }

    pub fn only_second(&self) -> &Cohort {
        &self.only_second
    }
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct CampaignOutcome {
    pub config: CampaignConfig,
    pub seed: SeedSource,
    pub universe: Universe,
    pub first: Cohort,
    pub second: Cohort,
    pub breakdown: Breakdown,
}

/// Runs a campaign with an rng seeded from `seed`.
///
/// # Errors
/// [`SimError::InvalidArgument`](crate::SimError::InvalidArgument) if the
/// config is invalid. Nothing is sampled in that case.
pub fn run(config: CampaignConfig, seed: SeedSource) -> Result<CampaignOutcome> {
    let mut rng = create_rng(seed.value());
    run_with_rng(config, seed, &mut rng)
}

/// Runs a campaign drawing from a caller-supplied rng.
///
/// `seed` is recorded in the outcome only; it does not reseed `rng`.
pub fn run_with_rng<R: Rng>(
    config: CampaignConfig,
    seed: SeedSource,
    rng: &mut R,
) -> Result<CampaignOutcome> {
    config.validate()?;

    let universe = generate(config.population)?;
    let first = sample(universe.members(), config.first_cohort, rng)?;
    let second = sample(universe.members(), config.second_cohort, rng)?;
    let breakdown = Breakdown::derive(&universe, &first, &second);

    info!(
        seed = seed.value(),
        population = universe.len(),
        both = breakdown.both.len(),
        not_vaccinated = breakdown.not_vaccinated.len(),
        "campaign simulated"
    );

    Ok(CampaignOutcome {
        config,
        seed,
        universe,
        first,
        second,
        breakdown,
    })
}
