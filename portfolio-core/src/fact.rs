/// Fun facts shown in the fact container. Never empty.
pub const FACTS: [&str; 6] = [
    "I love Mike Tyson Mysteries.",
    "I was once attacked by a turkey.",
    "I can't say the alphabet backwards.",
    "I've seen the original Predator ~100 times.",
    "I played almost 400 hours of Mount and Blade Warband in middle school.",
    "I once coded a neural net in Java from scratch and got it to 92% accuracy on MNIST.",
];

/// Map a uniform sample `r` in `[0, 1)` to an index into a list of `len` items.
///
/// Out-of-range samples are clamped so the result is always a valid index.
pub fn index_for_sample(r: f64, len: usize) -> usize {
    debug_assert!(len > 0);
    let scaled = (r * len as f64).floor();
    if scaled.is_nan() || scaled < 0.0 {
        0
    } else {
        (scaled as usize).min(len - 1)
    }
}

/// Pick a fact using a uniform sample `r` in `[0, 1)`, e.g. `Math.random()`.
pub fn pick_fact(r: f64) -> &'static str {
    FACTS[index_for_sample(r, FACTS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_fact_is_always_a_member() {
        for step in 0..1000 {
            let r = step as f64 / 1000.0;
            assert!(FACTS.contains(&pick_fact(r)));
        }
    }

    #[test]
    fn test_pick_fact_covers_every_fact() {
        let picked: Vec<&str> = (0..FACTS.len())
            .map(|i| pick_fact((i as f64 + 0.5) / FACTS.len() as f64))
            .collect();
        assert_eq!(picked, FACTS.to_vec());
    }

    #[test]
    fn test_index_for_sample_clamps() {
        assert_eq!(index_for_sample(0.0, 6), 0);
        assert_eq!(index_for_sample(0.999_999, 6), 5);
        assert_eq!(index_for_sample(1.0, 6), 5);
        assert_eq!(index_for_sample(-0.5, 6), 0);
        assert_eq!(index_for_sample(f64::NAN, 6), 0);
    }
}
