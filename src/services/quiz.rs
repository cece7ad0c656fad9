// src/services/quiz.rs
// DOCUMENTATION: Constrained random pick for quiz rounds
// PURPOSE: Choose one unseen question uniformly, or signal the round is over

use crate::models::Question;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Candidates not yet served in this round
pub fn eligible_pool(candidates: Vec<Question>, previous: &HashSet<i32>) -> Vec<Question> {
    candidates
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect()
}

/// Pick one question uniformly from the eligible pool.
///
/// Returns `None` when every candidate has already been served; the pool is
/// built up front so an exhausted round never loops.
pub fn pick_question<R: Rng + ?Sized>(
    candidates: Vec<Question>,
    previous: &HashSet<i32>,
    rng: &mut R,
) -> Option<Question> {
    let pool = eligible_pool(candidates, previous);
    pool.choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn questions(ids: &[i32]) -> Vec<Question> {
        ids.iter()
            .map(|id| Question {
                id: *id,
                question: format!("Question {}", id),
                answer: format!("Answer {}", id),
                category: 1,
                difficulty: 1,
            })
            .collect()
    }

    #[test]
    fn test_exhausted_pool_ends_round() {
        let previous: HashSet<i32> = [1, 2, 3].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(pick_question(questions(&[1, 2, 3]), &previous, &mut rng).is_none());
    }

    #[test]
    fn test_empty_candidates_end_round() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(pick_question(Vec::new(), &HashSet::new(), &mut rng).is_none());
    }

    #[test]
    fn test_never_returns_previous_question() {
        let previous: HashSet<i32> = [1, 2, 4].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let picked = pick_question(questions(&[1, 2, 3, 4]), &previous, &mut rng).unwrap();
            assert_eq!(picked.id, 3);
        }
    }

    #[test]
    fn test_previous_ids_outside_candidates_are_ignored() {
        let previous: HashSet<i32> = [99, 100].into_iter().collect();
        let pool = eligible_pool(questions(&[1, 2]), &previous);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_pick_is_uniform_over_pool() {
        let previous: HashSet<i32> = [1, 2].into_iter().collect();
        let candidates = questions(&[1, 2, 3, 4, 5]);
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen: HashMap<i32, usize> = HashMap::new();

        let draws = 10_000;
        for _ in 0..draws {
            let picked = pick_question(candidates.clone(), &previous, &mut rng).unwrap();
            *seen.entry(picked.id).or_insert(0) += 1;
        }

        assert_eq!(seen.len(), 3);
        for id in [3, 4, 5] {
            let freq = seen[&id] as f64 / draws as f64;
            // ~6 standard deviations for p = 1/3, n = 10_000
            assert!((freq - 1.0 / 3.0).abs() < 0.03, "id {} drawn with frequency {}", id, freq);
        }
    }
}
