//! Plain-text rendering of a campaign outcome.
//!
//! Nothing here computes; it only formats what [`crate::campaign`] produced.

use std::fmt;

use crate::campaign::CampaignOutcome;
use crate::population::Cohort;

const TITLE: &str = "VACCINATION CAMPAIGN RESULTS (simulated data)";

/// Renders a [`CampaignOutcome`] via `Display`.
///
/// # Examples
/// ```
/// use u_vaxsets::campaign::run;
/// use u_vaxsets::config::CampaignConfig;
/// use u_vaxsets::random::SeedSource;
/// use u_vaxsets::report::Report;
/// let outcome = run(CampaignConfig::default(), SeedSource::Explicit(1)).unwrap();
/// let text = Report::new(&outcome).to_string();
/// assert!(text.contains("Seed: 1"));
/// ```
pub struct Report<'a> {
    outcome: &'a CampaignOutcome,
}

impl<'a> Report<'a> {
    pub fn new(outcome: &'a CampaignOutcome) -> Self {
        Self { outcome }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = self.outcome;
        let c = &o.config;
        let b = &o.breakdown;
        let (p, a) = (&c.first_label, &c.second_label);

        let rule = "=".repeat(TITLE.chars().count());
        writeln!(f, "{rule}")?;
        writeln!(f, "{TITLE}")?;
        writeln!(f, "{rule}")?;
        writeln!(f)?;

        let note = if o.seed.is_reproducible() {
            ""
        } else {
            " (from clock)"
        };
        writeln!(f, "Seed: {}{note}", o.seed.value())?;
        writeln!(f, "Total citizens (U): {}", o.universe.len())?;
        writeln!(f, "Vaccinated {p} (P): {}", o.first.len())?;
        writeln!(f, "Vaccinated {a} (A): {}", o.second.len())?;
        writeln!(f)?;

        let limit = c.sample_limit;
        write_set(f, "Citizens NOT vaccinated = U \\ (P ∪ A)", b.not_vaccinated(), limit)?;
        write_set(f, "Citizens with BOTH doses = P ∩ A", b.both(), limit)?;
        write_set(f, &format!("Citizens ONLY {p} = P \\ A"), b.only_first(), limit)?;
        write_set(f, &format!("Citizens ONLY {a} = A \\ P"), b.only_second(), limit)
    }
}

fn write_set(f: &mut fmt::Formatter<'_>, label: &str, set: &Cohort, limit: usize) -> fmt::Result {
    writeln!(f, "• {label}")?;
    writeln!(f, "  Count: {}", set.len())?;
    if !set.is_empty() {
        writeln!(f, "  Sample: {}", sample_line(set, limit))?;
    }
    writeln!(f)
}

/// Joins at most `limit` members, appending `...` when truncated.
pub fn sample_line(set: &Cohort, limit: usize) -> String {
    let mut line = set
        .iter()
        .take(limit)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    if set.len() > limit {
        if !line.is_empty() {
            line.push_str(", ");
        }
        line.push_str("...");
    }
    line
}
