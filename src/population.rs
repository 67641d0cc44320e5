//! Citizens and the fixed population they belong to.
//!
//! A [`Universe`] is generated once per run and never changes afterwards.
//! Members are kept in a `BTreeSet`, so iteration always yields citizens
//! in ascending id order. The sampler relies on that order being stable.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{to_i64, Result, SimError};

/// An opaque, uniquely identified member of the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Citizen(u32);

impl Citizen {
    /// Wraps a raw identifier.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    pub fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Citizen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Citizen {}", self.0)
    }
}

/// A group of citizens drawn from the universe.
pub type Cohort = BTreeSet<Citizen>;

/// The full, immutable population of a run.
///
/// # Examples
/// ```
/// use u_vaxsets::population::{generate, Citizen};
/// let universe = generate(3).unwrap();
/// assert_eq!(universe.len(), 3);
/// assert!(universe.contains(&Citizen::new(3)));
/// assert!(!universe.contains(&Citizen::new(4)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe {
    members: Cohort,
}

impl Universe {
    /// Read-only view of every citizen.
    pub fn members(&self) -> &Cohort {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, citizen: &Citizen) -> bool {
        self.members.contains(citizen)
    }

    /// Iterates in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Citizen> {
        self.members.iter()
    }
}

/// Generates a universe of `n` citizens labeled `1..=n`.
///
/// Deterministic: the same `n` always yields the same universe.
///
/// # Errors
/// [`SimError::InvalidArgument`] if `n == 0` or `n` does not fit in a `u32` id.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
pub fn generate(n: usize) -> Result<Universe> {
    if n == 0 {
        return Err(SimError::invalid(
            "population",
            0,
            "population must be positive",
        ));
    }
    let upper = u32::try_from(n).map_err(|_| {
        SimError::invalid(
            "population",
            to_i64(n),
            "population exceeds the citizen id range",
        )
    })?;

    let members: Cohort = (1..=upper).map(Citizen).collect();
    Ok(Universe { members })
}
