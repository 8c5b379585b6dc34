mod config;
pub mod builder;

use log::{debug, info, warn};

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::ops::{Add, AddAssign};

pub use crate::config::*;

// **** Private structures ****

#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
struct GradeId(u8);

#[derive(Eq, PartialEq, Debug, Clone, Copy, PartialOrd, Ord, Hash)]
struct Weight(u64);

impl Weight {
    const EMPTY: Weight = Weight(0);
}

impl std::iter::Sum for Weight {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Weight(iter.map(|w| w.0).sum())
    }
}

impl AddAssign for Weight {
    fn add_assign(&mut self, rhs: Weight) {
        self.0 += rhs.0;
    }
}

impl Add for Weight {
    type Output = Weight;
    fn add(self: Weight, rhs: Weight) -> Weight {
        Weight(self.0 + rhs.0)
    }
}

// A candidate's vote multiset, tallied per grade. Indexed by grade position
// in the vocabulary, best grade first.
type GradeTallies = Vec<Weight>;

/// Runs the whole ranking pipeline over one immutable snapshot of the medal
/// table: cutoff filter, ballot construction, the three rankers and the
/// final merge.
///
/// Arguments:
/// * `records` the medal table, one row per candidate
/// * `rules` the configuration of this run (vocabulary, cutoff, sum checking)
pub fn run_ranking(
    records: &[MedalRecord],
    rules: &RankingRules,
) -> Result<RankingResult, RankingErrors> {
    info!(
        "run_ranking: processing {:?} rows, cutoff: {:?}, rules: {:?}",
        records.len(),
        rules.min_total,
        rules
    );

    let filtered: Vec<MedalRecord> = records
        .iter()
        .filter(|r| r.total >= rules.min_total)
        .cloned()
        .collect();
    debug!(
        "run_ranking: {:?} candidates left after cutoff",
        filtered.len()
    );
    if filtered.is_empty() {
        return Err(RankingErrors::EmptyCandidateSet);
    }

    let ballot_set = build_ballots(&filtered, rules)?;
    for w in ballot_set.warnings.iter() {
        info!("run_ranking: data-quality warning: {}", w);
    }

    // The three rankers read the same immutable snapshot and are independent
    // of each other; only the merge needs all of them.
    let majority = rank_majority_judgment(&ballot_set.ballots, &rules.vocabulary)?;
    let lexicographic = rank_lexicographic(&filtered)?;
    let total = rank_by_total(&filtered)?;

    let comparison = reconcile(&majority, &lexicographic, &total)?;
    for row in comparison.iter() {
        info!(
            "run_ranking: {} mj:{} ({}) lexico:{} total:{}",
            row.candidate, row.rank_mj, row.grade, row.rank_lexico, row.rank_total
        );
    }

    Ok(RankingResult {
        ballots: ballot_set.ballots,
        majority,
        lexicographic,
        total,
        comparison,
        warnings: ballot_set.warnings,
        max_total: ballot_set.max_total,
    })
}

/// Converts the medal table into one graded ballot per candidate.
///
/// Weights are the medal counts themselves, plus a No-Medal padding of
/// `max_total - total` so that every ballot sums to the same constant.
pub fn build_ballots(
    records: &[MedalRecord],
    rules: &RankingRules,
) -> Result<BallotSet, RankingErrors> {
    if records.is_empty() {
        return Err(RankingErrors::EmptyCandidateSet);
    }
    if rules.vocabulary.len() != MEDAL_GRADE_COUNT {
        return Err(RankingErrors::GradeVocabularyMismatch {
            grade: format!(
                "medal ballots need exactly {} grades, vocabulary has {}",
                MEDAL_GRADE_COUNT,
                rules.vocabulary.len()
            ),
        });
    }

    let warnings = check_records(records, rules.sum_mismatch)?;

    // The recomputed sum is authoritative: it keeps the constant-denominator
    // invariant even when a stated total was off.
    let max_total = records.iter().map(|r| r.medal_sum()).max().unwrap_or(0);
    debug!("build_ballots: max_total: {:?}", max_total);

    let labels = rules.vocabulary.labels();
    let mut ballots: Vec<Ballot> = Vec::with_capacity(records.len());
    for r in records.iter() {
        let spread = [r.gold, r.silver, r.bronze, max_total - r.medal_sum()];
        ballots.push(Ballot {
            candidate: r.candidate.clone(),
            weights: labels.iter().cloned().zip(spread).collect(),
        });
    }
    Ok(BallotSet {
        ballots,
        max_total,
        warnings,
    })
}

// Uniqueness of the candidate identity and the medal-sum invariant.
// Returns the warnings collected under the tolerant mode.
fn check_records(
    records: &[MedalRecord],
    mode: SumMismatchMode,
) -> Result<Vec<String>, RankingErrors> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut warnings: Vec<String> = Vec::new();
    for r in records.iter() {
        if !seen.insert(r.candidate.as_str()) {
            return Err(RankingErrors::InvalidMedalRow {
                candidate: r.candidate.clone(),
                reason: "duplicate candidate identity".to_string(),
            });
        }
        if r.medal_sum() != r.total {
            let reason = format!(
                "medal sum {} does not match stated total {}",
                r.medal_sum(),
                r.total
            );
            match mode {
                SumMismatchMode::Strict => {
                    return Err(RankingErrors::InvalidMedalRow {
                        candidate: r.candidate.clone(),
                        reason,
                    });
                }
                SumMismatchMode::Warn => {
                    warn!("check_records: {}: {}", r.candidate, reason);
                    warnings.push(format!("{}: {}", r.candidate, reason));
                }
            }
        }
    }
    Ok(warnings)
}

/// Orders candidates by their majority grade, best first.
///
/// Ties on the majority grade are broken by repeatedly removing one vote of
/// the shared grade from each tied multiset and recomparing. Two candidates
/// share a rank only when that procedure exhausts both multisets, in which
/// case they stay in input order.
pub fn rank_majority_judgment(
    ballots: &[Ballot],
    vocabulary: &GradeVocabulary,
) -> Result<Vec<MajorityRanked>, RankingErrors> {
    if ballots.is_empty() {
        return Err(RankingErrors::EmptyCandidateSet);
    }

    let tallies: Vec<GradeTallies> = ballots
        .iter()
        .map(|b| ballot_tallies(b, vocabulary))
        .collect::<Result<_, _>>()?;

    // Stable sort: exhausted ties keep the input order deterministically.
    let mut order: Vec<usize> = (0..ballots.len()).collect();
    order.sort_by(|&i, &j| cmp_majority(&tallies[i], &tallies[j]));

    let worst_label = vocabulary
        .labels()
        .last()
        .cloned()
        .ok_or(RankingErrors::EmptyCandidateSet)?;

    let mut res: Vec<MajorityRanked> = Vec::with_capacity(order.len());
    let mut prev: Option<(usize, u32)> = None;
    for (pos, &idx) in order.iter().enumerate() {
        let rank = match prev {
            Some((prev_idx, prev_rank))
                if cmp_majority(&tallies[prev_idx], &tallies[idx]) == Ordering::Equal =>
            {
                prev_rank
            }
            _ => pos as u32 + 1,
        };
        // An empty multiset only happens when every candidate has zero
        // medals; it reads as all-No-Medal.
        let grade = match majority_grade(&tallies[idx]) {
            Some(g) => vocabulary.labels()[g.0 as usize].clone(),
            None => worst_label.clone(),
        };
        debug!(
            "rank_majority_judgment: rank {:?} for {:?} with grade {:?}",
            rank, ballots[idx].candidate, grade
        );
        res.push(MajorityRanked {
            candidate: ballots[idx].candidate.clone(),
            rank,
            grade,
        });
        prev = Some((idx, rank));
    }
    Ok(res)
}

// Tallies one public ballot against the vocabulary. Fails on any label
// outside the vocabulary; grades the ballot does not mention stay absent.
fn ballot_tallies(
    ballot: &Ballot,
    vocabulary: &GradeVocabulary,
) -> Result<GradeTallies, RankingErrors> {
    let mut tallies: GradeTallies = vec![Weight::EMPTY; vocabulary.len()];
    for (label, w) in ballot.weights.iter() {
        let idx = vocabulary
            .index_of(label)
            .ok_or(RankingErrors::GradeVocabularyMismatch {
                grade: label.clone(),
            })?;
        tallies[idx] += Weight(*w);
    }
    Ok(tallies)
}

// The lower-median grade of the multiset: with n votes sorted best to worst,
// the grade at 0-based position n/2. At least half the votes are at or above
// it and at least half at or below it.
fn majority_grade(tallies: &[Weight]) -> Option<GradeId> {
    let n: u64 = tallies.iter().map(|w| w.0).sum();
    if n == 0 {
        return None;
    }
    let median_pos = n / 2;
    let mut cum: u64 = 0;
    for (idx, w) in tallies.iter().enumerate() {
        cum += w.0;
        if cum > median_pos {
            return Some(GradeId(idx as u8));
        }
    }
    None
}

// Majority-judgment comparison of two vote multisets. Less means `a` ranks
// better. Pure: works on reduced copies, the inputs are never touched.
fn cmp_majority(a: &[Weight], b: &[Weight]) -> Ordering {
    let mut ta = a.to_vec();
    let mut tb = b.to_vec();
    loop {
        match (majority_grade(&ta), majority_grade(&tb)) {
            (None, None) => return Ordering::Equal,
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            (Some(ga), Some(gb)) if ga != gb => return ga.cmp(&gb),
            (Some(ga), Some(gb)) => {
                // Same majority grade: strip one occurrence from each side
                // and recompare the reduced multisets.
                ta[ga.0 as usize].0 -= 1;
                tb[gb.0 as usize].0 -= 1;
            }
        }
    }
}

/// Orders candidates by (gold, silver, bronze) descending, gold most
/// significant. Ranks are sequential 1..=N with ties broken by input order.
pub fn rank_lexicographic(records: &[MedalRecord]) -> Result<Vec<LexicoRanked>, RankingErrors> {
    if records.is_empty() {
        return Err(RankingErrors::EmptyCandidateSet);
    }
    let mut order: Vec<&MedalRecord> = records.iter().collect();
    order.sort_by(|a, b| (b.gold, b.silver, b.bronze).cmp(&(a.gold, a.silver, a.bronze)));
    Ok(order
        .iter()
        .enumerate()
        .map(|(pos, r)| LexicoRanked {
            candidate: r.candidate.clone(),
            rank: pos as u32 + 1,
            gold: r.gold,
            silver: r.silver,
            bronze: r.bronze,
        })
        .collect())
}

/// Orders candidates by total medals descending. Equal totals share the
/// minimum applicable rank number and the next distinct total skips ahead.
pub fn rank_by_total(records: &[MedalRecord]) -> Result<Vec<TotalRanked>, RankingErrors> {
    if records.is_empty() {
        return Err(RankingErrors::EmptyCandidateSet);
    }
    let mut order: Vec<&MedalRecord> = records.iter().collect();
    order.sort_by(|a, b| b.total.cmp(&a.total));
    let mut res: Vec<TotalRanked> = Vec::with_capacity(order.len());
    for (pos, r) in order.iter().enumerate() {
        let rank = match res.last() {
            Some(prev) if prev.total == r.total => prev.rank,
            _ => pos as u32 + 1,
        };
        res.push(TotalRanked {
            candidate: r.candidate.clone(),
            rank,
            total: r.total,
        });
    }
    Ok(res)
}

/// Joins the three rank tables on the candidate identity.
///
/// The three populations must be identical; any candidate present in only
/// one or two tables fails the merge with the full symmetric difference.
/// Rows come back ordered by majority-judgment rank, then candidate.
pub fn reconcile(
    majority: &[MajorityRanked],
    lexicographic: &[LexicoRanked],
    total: &[TotalRanked],
) -> Result<Vec<ComparisonRow>, RankingErrors> {
    if majority.is_empty() && lexicographic.is_empty() && total.is_empty() {
        return Err(RankingErrors::EmptyCandidateSet);
    }

    let mj = index_unique(majority, |r| r.candidate.as_str())?;
    let lx = index_unique(lexicographic, |r| r.candidate.as_str())?;
    let tt = index_unique(total, |r| r.candidate.as_str())?;

    let mut union: HashSet<&str> = HashSet::new();
    union.extend(mj.keys());
    union.extend(lx.keys());
    union.extend(tt.keys());

    let mut missing: Vec<String> = union
        .iter()
        .filter(|c| !(mj.contains_key(*c) && lx.contains_key(*c) && tt.contains_key(*c)))
        .map(|c| c.to_string())
        .collect();
    if !missing.is_empty() {
        missing.sort();
        warn!("reconcile: population mismatch: {:?}", missing);
        return Err(RankingErrors::CandidateSetMismatch { missing });
    }

    let mut rows: Vec<ComparisonRow> = union
        .iter()
        .map(|c| {
            let m = mj[c];
            let l = lx[c];
            let t = tt[c];
            ComparisonRow {
                candidate: c.to_string(),
                rank_mj: m.rank,
                grade: m.grade.clone(),
                rank_lexico: l.rank,
                rank_total: t.rank,
                gold: l.gold,
                silver: l.silver,
                bronze: l.bronze,
                total: t.total,
            }
        })
        .collect();
    rows.sort_by(|a, b| {
        a.rank_mj
            .cmp(&b.rank_mj)
            .then_with(|| a.candidate.cmp(&b.candidate))
    });
    Ok(rows)
}

// A plain inner join over maps would silently shrink on a duplicated key.
fn index_unique<'a, T, F>(items: &'a [T], key: F) -> Result<HashMap<&'a str, &'a T>, RankingErrors>
where
    F: Fn(&'a T) -> &'a str,
{
    let mut res: HashMap<&'a str, &'a T> = HashMap::with_capacity(items.len());
    for item in items.iter() {
        let k = key(item);
        if res.insert(k, item).is_some() {
            return Err(RankingErrors::InvalidMedalRow {
                candidate: k.to_string(),
                reason: "duplicate candidate identity in a rank table".to_string(),
            });
        }
    }
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(candidate: &str, gold: u64, silver: u64, bronze: u64) -> MedalRecord {
        MedalRecord {
            candidate: candidate.to_string(),
            gold,
            silver,
            bronze,
            total: gold + silver + bronze,
        }
    }

    fn rules() -> RankingRules {
        RankingRules::medal_default()
    }

    fn mj_rank(res: &[MajorityRanked], candidate: &str) -> u32 {
        res.iter().find(|r| r.candidate == candidate).unwrap().rank
    }

    #[test]
    fn ballot_weights_sum_to_max_total() {
        let records = vec![rec("USA", 40, 44, 42), rec("FRA", 16, 26, 22), rec("KEN", 4, 2, 5)];
        let bs = build_ballots(&records, &rules()).unwrap();
        assert_eq!(bs.max_total, 126);
        for b in bs.ballots.iter() {
            assert_eq!(b.weight_sum(), 126, "ballot of {}", b.candidate);
            assert_eq!(b.weights.len(), MEDAL_GRADE_COUNT);
        }
    }

    #[test]
    fn no_medal_weight_is_zero_at_max_total() {
        let records = vec![rec("A", 3, 0, 0), rec("B", 0, 3, 0), rec("C", 1, 1, 1)];
        let bs = build_ballots(&records, &rules()).unwrap();
        assert_eq!(bs.max_total, 3);
        for b in bs.ballots.iter() {
            assert_eq!(b.weights.last().unwrap().1, 0);
        }
    }

    #[test]
    fn lexicographic_gold_most_significant() {
        // A(3,0,0) beats C(1,1,1) beats B(0,3,0).
        let records = vec![rec("A", 3, 0, 0), rec("B", 0, 3, 0), rec("C", 1, 1, 1)];
        let ranked = rank_lexicographic(&records).unwrap();
        let by_rank: Vec<&str> = ranked.iter().map(|r| r.candidate.as_str()).collect();
        assert_eq!(by_rank, vec!["A", "C", "B"]);
        let ranks: Vec<u32> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn lexicographic_ties_stay_sequential_in_input_order() {
        let records = vec![rec("X", 2, 1, 0), rec("Y", 2, 1, 0), rec("Z", 3, 0, 0)];
        let ranked = rank_lexicographic(&records).unwrap();
        let by_rank: Vec<(&str, u32)> = ranked
            .iter()
            .map(|r| (r.candidate.as_str(), r.rank))
            .collect();
        assert_eq!(by_rank, vec![("Z", 1), ("X", 2), ("Y", 3)]);
    }

    #[test]
    fn lexicographic_is_a_permutation() {
        let records = vec![
            rec("A", 5, 1, 2),
            rec("B", 5, 1, 2),
            rec("C", 0, 0, 0),
            rec("D", 2, 8, 1),
        ];
        let ranked = rank_lexicographic(&records).unwrap();
        let mut ranks: Vec<u32> = ranked.iter().map(|r| r.rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn total_rank_shares_minimum_and_skips() {
        let records = vec![rec("X", 4, 3, 3), rec("Y", 2, 2, 6), rec("Z", 1, 1, 3)];
        let ranked = rank_by_total(&records).unwrap();
        let by_rank: Vec<(&str, u32)> = ranked
            .iter()
            .map(|r| (r.candidate.as_str(), r.rank))
            .collect();
        assert_eq!(by_rank, vec![("X", 1), ("Y", 1), ("Z", 3)]);
    }

    #[test]
    fn majority_grade_is_the_lower_median() {
        // A: 5 gold votes -> Gold.
        // B: 5 silver votes -> Silver.
        // C: 1 bronze + 4 chocolate -> No Medal.
        let records = vec![rec("A", 5, 0, 0), rec("B", 0, 5, 0), rec("C", 0, 0, 1)];
        let r = rules();
        let bs = build_ballots(&records, &r).unwrap();
        let ranked = rank_majority_judgment(&bs.ballots, &r.vocabulary).unwrap();
        let labels = r.vocabulary.labels();
        assert_eq!(ranked[0].candidate, "A");
        assert_eq!(ranked[0].grade, labels[0]);
        assert_eq!(ranked[1].candidate, "B");
        assert_eq!(ranked[1].grade, labels[1]);
        assert_eq!(ranked[2].candidate, "C");
        assert_eq!(ranked[2].grade, labels[3]);
        assert_eq!(
            ranked.iter().map(|r| r.rank).collect::<Vec<u32>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn majority_tie_resolves_by_stripping_the_shared_grade() {
        // Both have majority grade Gold on [G,G,S] and [G,G,B]; after one
        // strip the medians are Silver vs Bronze.
        let records = vec![rec("B", 2, 0, 1), rec("A", 2, 1, 0)];
        let r = rules();
        let bs = build_ballots(&records, &r).unwrap();
        let ranked = rank_majority_judgment(&bs.ballots, &r.vocabulary).unwrap();
        assert_eq!(mj_rank(&ranked, "A"), 1);
        assert_eq!(mj_rank(&ranked, "B"), 2);
    }

    #[test]
    fn exhausted_tie_shares_rank_in_input_order() {
        let records = vec![rec("B", 1, 2, 0), rec("A", 1, 2, 0), rec("C", 0, 0, 1)];
        let r = rules();
        let bs = build_ballots(&records, &r).unwrap();
        let ranked = rank_majority_judgment(&bs.ballots, &r.vocabulary).unwrap();
        // B and A are identical: same rank, input order preserved.
        assert_eq!(ranked[0].candidate, "B");
        assert_eq!(ranked[1].candidate, "A");
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].rank, 1);
        assert_eq!(mj_rank(&ranked, "C"), 3);
    }

    #[test]
    fn swapping_two_records_swaps_exactly_their_ranks() {
        let records = vec![rec("A", 6, 1, 0), rec("B", 2, 2, 2), rec("C", 0, 1, 4)];
        let r = rules();
        let before = rank_majority_judgment(&build_ballots(&records, &r).unwrap().ballots, &r.vocabulary).unwrap();

        let mut swapped = records.clone();
        let (ga, sa, ba) = (swapped[0].gold, swapped[0].silver, swapped[0].bronze);
        swapped[0] = rec("A", swapped[2].gold, swapped[2].silver, swapped[2].bronze);
        swapped[2] = rec("C", ga, sa, ba);
        let after = rank_majority_judgment(&build_ballots(&swapped, &r).unwrap().ballots, &r.vocabulary).unwrap();

        assert_eq!(mj_rank(&after, "A"), mj_rank(&before, "C"));
        assert_eq!(mj_rank(&after, "C"), mj_rank(&before, "A"));
        assert_eq!(mj_rank(&after, "B"), mj_rank(&before, "B"));
    }

    #[test]
    fn empty_input_is_rejected_everywhere() {
        assert_eq!(
            rank_lexicographic(&[]).unwrap_err(),
            RankingErrors::EmptyCandidateSet
        );
        assert_eq!(
            rank_by_total(&[]).unwrap_err(),
            RankingErrors::EmptyCandidateSet
        );
        assert_eq!(
            rank_majority_judgment(&[], &GradeVocabulary::medal_default()).unwrap_err(),
            RankingErrors::EmptyCandidateSet
        );
        assert_eq!(
            run_ranking(&[], &rules()).unwrap_err(),
            RankingErrors::EmptyCandidateSet
        );
    }

    #[test]
    fn unknown_grade_label_is_rejected() {
        let ballots = vec![Ballot {
            candidate: "A".to_string(),
            weights: vec![("Platinum".to_string(), 3)],
        }];
        let err = rank_majority_judgment(&ballots, &GradeVocabulary::medal_default()).unwrap_err();
        assert_eq!(
            err,
            RankingErrors::GradeVocabularyMismatch {
                grade: "Platinum".to_string()
            }
        );
    }

    #[test]
    fn duplicate_candidate_is_rejected() {
        let records = vec![rec("FRA", 1, 0, 0), rec("FRA", 0, 1, 0)];
        match build_ballots(&records, &rules()) {
            Err(RankingErrors::InvalidMedalRow { candidate, .. }) => assert_eq!(candidate, "FRA"),
            other => panic!("expected InvalidMedalRow, got {:?}", other),
        }
    }

    #[test]
    fn inconsistent_total_fails_strict_and_warns_otherwise() {
        let mut bad = rec("GER", 2, 1, 1);
        bad.total = 5;
        let records = vec![rec("USA", 3, 0, 0), bad];

        let mut strict = rules();
        strict.sum_mismatch = SumMismatchMode::Strict;
        match build_ballots(&records, &strict) {
            Err(RankingErrors::InvalidMedalRow { candidate, .. }) => assert_eq!(candidate, "GER"),
            other => panic!("expected InvalidMedalRow, got {:?}", other),
        }

        let bs = build_ballots(&records, &rules()).unwrap();
        assert_eq!(bs.warnings.len(), 1);
        assert!(bs.warnings[0].starts_with("GER"));
        // The recomputed sum keeps the denominator constant.
        for b in bs.ballots.iter() {
            assert_eq!(b.weight_sum(), bs.max_total);
        }
    }

    #[test]
    fn reconcile_rejects_a_missing_candidate() {
        let records = vec![rec("A", 3, 0, 0), rec("B", 0, 3, 0), rec("C", 1, 1, 1)];
        let r = rules();
        let majority =
            rank_majority_judgment(&build_ballots(&records, &r).unwrap().ballots, &r.vocabulary)
                .unwrap();
        let lexicographic = rank_lexicographic(&records).unwrap();
        let total = rank_by_total(&records[..2]).unwrap();
        match reconcile(&majority, &lexicographic, &total) {
            Err(RankingErrors::CandidateSetMismatch { missing }) => {
                assert_eq!(missing, vec!["C".to_string()]);
            }
            other => panic!("expected CandidateSetMismatch, got {:?}", other),
        }
    }

    #[test]
    fn run_ranking_end_to_end() {
        let records = vec![
            rec("USA", 40, 44, 42),
            rec("FRA", 16, 26, 22),
            rec("JPN", 20, 12, 13),
            rec("KEN", 4, 2, 5),
            rec("FIJ", 1, 0, 0),
        ];
        let mut r = rules();
        r.min_total = 5;
        let res = run_ranking(&records, &r).unwrap();

        // FIJ is below the cutoff everywhere.
        assert_eq!(res.comparison.len(), 4);
        assert!(res.comparison.iter().all(|row| row.candidate != "FIJ"));
        assert_eq!(res.max_total, 126);
        assert!(res.warnings.is_empty());

        // All three rank columns cover the same population.
        for row in res.comparison.iter() {
            assert!(row.rank_mj >= 1 && row.rank_mj <= 4);
            assert!(row.rank_lexico >= 1 && row.rank_lexico <= 4);
            assert!(row.rank_total >= 1 && row.rank_total <= 4);
            assert_eq!(row.total, row.gold + row.silver + row.bronze);
        }
        assert_eq!(res.comparison[0].candidate, "USA");
        assert_eq!(res.comparison[0].rank_mj, 1);
        assert_eq!(res.comparison[0].rank_lexico, 1);
        assert_eq!(res.comparison[0].rank_total, 1);

        // The ballot table goes out alongside the merged table.
        assert_eq!(res.ballots.len(), 4);
        for b in res.ballots.iter() {
            assert_eq!(b.weight_sum(), res.max_total);
        }
    }

    #[test]
    fn rerunning_with_a_different_cutoff_is_independent() {
        let records = vec![rec("A", 3, 0, 0), rec("B", 0, 3, 0), rec("C", 1, 1, 0)];
        let r_all = rules();
        let mut r_cut = rules();
        r_cut.min_total = 3;

        let all = run_ranking(&records, &r_all).unwrap();
        let cut = run_ranking(&records, &r_cut).unwrap();
        let all_again = run_ranking(&records, &r_all).unwrap();

        assert_eq!(all, all_again);
        assert_eq!(cut.comparison.len(), 2);
        assert_eq!(all.comparison.len(), 3);
    }
}
