pub use crate::config::*;
use crate::run_ranking;

/// A builder for assembling a medal table row by row.
///
/// ```
/// pub use medal_ranking::builder::Builder;
/// pub use medal_ranking::RankingRules;
/// # use medal_ranking::RankingErrors;
///
/// let mut builder = Builder::new(&RankingRules::medal_default());
/// builder.add_row("FRA", 16, 26, 22)?;
/// builder.add_row("USA", 40, 44, 42)?;
///
/// let result = builder.ranking()?;
/// assert_eq!(result.comparison.len(), 2);
///
/// # Ok::<(), RankingErrors>(())
/// ```
pub struct Builder {
    pub(crate) _rules: RankingRules,
    pub(crate) _records: Vec<MedalRecord>,
}

impl Builder {
    pub fn new(rules: &RankingRules) -> Builder {
        Builder {
            _rules: rules.clone(),
            _records: Vec::new(),
        }
    }

    /// Adds a candidate with its three medal counts. The total column is
    /// derived, so rows added this way always satisfy the sum invariant.
    pub fn add_row(
        &mut self,
        candidate: &str,
        gold: u64,
        silver: u64,
        bronze: u64,
    ) -> Result<(), RankingErrors> {
        self.add_record(&MedalRecord {
            candidate: candidate.to_string(),
            gold,
            silver,
            bronze,
            total: gold + silver + bronze,
        })
    }

    /// Adds a full record, stated total included. Duplicate identities are
    /// rejected here rather than at ranking time.
    pub fn add_record(&mut self, record: &MedalRecord) -> Result<(), RankingErrors> {
        if self
            ._records
            .iter()
            .any(|r| r.candidate == record.candidate)
        {
            return Err(RankingErrors::InvalidMedalRow {
                candidate: record.candidate.clone(),
                reason: "duplicate candidate identity".to_string(),
            });
        }
        self._records.push(record.clone());
        Ok(())
    }

    /// Runs the ranking pipeline over the collected table.
    pub fn ranking(&self) -> Result<RankingResult, RankingErrors> {
        run_ranking(&self._records, &self._rules)
    }
}
