use rand::Rng;

/// Uniform-random pick of one endpoint from a resolved host list.
pub struct HostSelector;

impl HostSelector {
    /// Pick one host. The random source is injected so fairness can be
    /// tested with a seeded generator; production callers pass
    /// `rand::thread_rng()`, which is seeded once per thread, not per call.
    ///
    /// Callers must have rejected the empty list already.
    pub fn pick<'a, R: Rng>(rng: &mut R, hosts: &'a [String]) -> &'a str {
        debug_assert!(!hosts.is_empty());
        if hosts.len() == 1 {
            return &hosts[0];
        }
        &hosts[rng.gen_range(0..hosts.len())]
    }
}
