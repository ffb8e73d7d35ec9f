use rand::Rng;

use crate::quiz::definition::QuestionBank;
use crate::quiz::topics::TopicSelector;


/// Picks up to `desired_count` distinct bank indices among questions whose
/// topic is enabled. Indices come out in draw order.
pub fn sample<R: Rng + ?Sized>(
    bank: &QuestionBank,
    topics: &TopicSelector,
    desired_count: usize,
    rng: &mut R,
) -> Vec<usize> {
    let candidates: Vec<usize> = bank
        .get_questions()
        .iter()
        .enumerate()
        .filter(|(_, q)| topics.is_enabled(&q.topic))
        .map(|(index, _)| index)
        .collect();

    let num_candidates = candidates.len();
    if num_candidates == 0 {
        return Vec::new();
    }

    let target = desired_count.min(num_candidates);
    let mut drawn = vec![false; num_candidates];
    let mut order = Vec::with_capacity(target);
    while order.len() < target {
        let position = rng.gen_range(0, num_candidates);
        if !drawn[position] {
            drawn[position] = true;
            order.push(candidates[position]);
        }
    }
    order
}
