// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// The largest number of grade slots supported by the ballot model.
///
/// The medal pipeline always populates [MEDAL_GRADE_COUNT] of them and leaves
/// the remainder unset. Unset slots are absent from the ballots, they are
/// never counted as zero-weight grades.
pub const MAX_GRADE_SLOTS: usize = 7;

/// The number of grades used by medal-derived ballots:
/// Gold, Silver, Bronze and No-Medal, in that order.
pub const MEDAL_GRADE_COUNT: usize = 4;

const GOLD_MEDAL: &str = "\u{1F947}";
const SILVER_MEDAL: &str = "\u{1F948}";
const BRONZE_MEDAL: &str = "\u{1F949}";
const CHOCOLATE: &str = "\u{1F36B}";

/// One row of the medal table: a candidate (country) and its tallies.
///
/// The candidate string is the canonical identity for the whole pipeline and
/// must be unique within one table.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct MedalRecord {
    pub candidate: String,
    pub gold: u64,
    pub silver: u64,
    pub bronze: u64,
    pub total: u64,
}

impl MedalRecord {
    /// The sum of the three medal columns, which the `total` column is
    /// expected to match.
    pub fn medal_sum(&self) -> u64 {
        self.gold + self.silver + self.bronze
    }
}

/// An ordered list of grade labels, best first.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct GradeVocabulary {
    labels: Vec<String>,
}

impl GradeVocabulary {
    /// Builds a vocabulary from labels given best-to-worst.
    ///
    /// The list may not be empty, hold more than [MAX_GRADE_SLOTS] entries or
    /// repeat a label.
    pub fn new(labels: &[String]) -> Result<GradeVocabulary, RankingErrors> {
        if labels.is_empty() || labels.len() > MAX_GRADE_SLOTS {
            return Err(RankingErrors::GradeVocabularyMismatch {
                grade: format!(
                    "vocabulary must have between 1 and {} grades, got {}",
                    MAX_GRADE_SLOTS,
                    labels.len()
                ),
            });
        }
        for (idx, l) in labels.iter().enumerate() {
            if labels[..idx].contains(l) {
                return Err(RankingErrors::GradeVocabularyMismatch { grade: l.clone() });
            }
        }
        Ok(GradeVocabulary {
            labels: labels.to_vec(),
        })
    }

    /// The four grades of the medal domain, with their usual glyphs.
    pub fn medal_default() -> GradeVocabulary {
        GradeVocabulary {
            labels: vec![
                format!("Gold {}", GOLD_MEDAL),
                format!("Silver {}", SILVER_MEDAL),
                format!("Bronze {}", BRONZE_MEDAL),
                format!("No Medal {}", CHOCOLATE),
            ],
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub(crate) fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }
}

/// What to do when a row's `total` column disagrees with the sum of its medal
/// columns.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum SumMismatchMode {
    /// Fail the whole pipeline on the first inconsistent row.
    Strict,
    /// Keep going with the recomputed sum and surface a warning.
    Warn,
}

/// The configuration of one ranking run.
///
/// Passed explicitly into the pipeline entry point so that several runs with
/// different cutoffs can execute without interference.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RankingRules {
    /// Grade labels, best first. The medal pipeline requires exactly
    /// [MEDAL_GRADE_COUNT] of them.
    pub vocabulary: GradeVocabulary,
    /// Candidates with a `total` strictly below this cutoff are removed from
    /// all three rankings.
    pub min_total: u64,
    pub sum_mismatch: SumMismatchMode,
}

impl RankingRules {
    pub fn medal_default() -> RankingRules {
        RankingRules {
            vocabulary: GradeVocabulary::medal_default(),
            min_total: 0,
            sum_mismatch: SumMismatchMode::Warn,
        }
    }
}

// ******** Output data structures *********

/// The grade distribution of one candidate.
///
/// Only the grades of the configured vocabulary appear; unused slots of the
/// generic model are absent rather than zero.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Ballot {
    pub candidate: String,
    /// (grade label, weight) pairs, best grade first.
    pub weights: Vec<(String, u64)>,
}

impl Ballot {
    pub fn weight_sum(&self) -> u64 {
        self.weights.iter().map(|(_, w)| *w).sum()
    }
}

/// The ballots of one run plus the constant denominator they share.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct BallotSet {
    pub ballots: Vec<Ballot>,
    /// The largest medal total over the candidate set. Every ballot's weights
    /// sum to this constant.
    pub max_total: u64,
    /// Data-quality findings that did not stop the run.
    pub warnings: Vec<String>,
}

/// One candidate ranked by majority judgment.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct MajorityRanked {
    pub candidate: String,
    /// 1-based; two candidates share a rank only when the recursive
    /// tie-break exhausted without resolving.
    pub rank: u32,
    /// The majority grade label, for display.
    pub grade: String,
}

/// One candidate ranked by (gold, silver, bronze) descending.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct LexicoRanked {
    pub candidate: String,
    /// Sequential 1..=N, no gaps; ties broken by input order.
    pub rank: u32,
    pub gold: u64,
    pub silver: u64,
    pub bronze: u64,
}

/// One candidate ranked by total medal count.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct TotalRanked {
    pub candidate: String,
    /// Minimum-rank ("1224") numbering: equal totals share a rank and the
    /// next distinct total skips ahead by the tie-group size.
    pub rank: u32,
    pub total: u64,
}

/// One row of the unified comparison table.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ComparisonRow {
    pub candidate: String,
    pub rank_mj: u32,
    pub grade: String,
    pub rank_lexico: u32,
    pub rank_total: u32,
    pub gold: u64,
    pub silver: u64,
    pub bronze: u64,
    pub total: u64,
}

/// Everything one ranking run produces.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RankingResult {
    /// The ballot table, for merit-profile plotting by a renderer.
    pub ballots: Vec<Ballot>,
    pub majority: Vec<MajorityRanked>,
    pub lexicographic: Vec<LexicoRanked>,
    pub total: Vec<TotalRanked>,
    /// The three rankings merged on the candidate identity.
    pub comparison: Vec<ComparisonRow>,
    pub warnings: Vec<String>,
    pub max_total: u64,
}

/// Errors that prevent a ranking run from completing.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum RankingErrors {
    /// Malformed counts, a medal-sum violation under strict checking, or a
    /// duplicate candidate identity.
    InvalidMedalRow { candidate: String, reason: String },
    /// Zero candidates reached a ranker.
    EmptyCandidateSet,
    /// A ballot references a grade outside the configured vocabulary.
    GradeVocabularyMismatch { grade: String },
    /// The three rank tables do not cover the same population. Carries the
    /// sorted symmetric difference.
    CandidateSetMismatch { missing: Vec<String> },
}

impl Error for RankingErrors {}

impl Display for RankingErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankingErrors::InvalidMedalRow { candidate, reason } => {
                write!(f, "invalid medal row for {}: {}", candidate, reason)
            }
            RankingErrors::EmptyCandidateSet => write!(f, "no candidate reached the ranking"),
            RankingErrors::GradeVocabularyMismatch { grade } => {
                write!(f, "grade not in the configured vocabulary: {}", grade)
            }
            RankingErrors::CandidateSetMismatch { missing } => {
                write!(
                    f,
                    "rankings do not cover the same candidates: {}",
                    missing.join(", ")
                )
            }
        }
    }
}
