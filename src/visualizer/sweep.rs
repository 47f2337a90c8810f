/// Radius sequence for the expanding radar sweep.
///
/// A finite, restartable cycle: the radius climbs from 0 to `max_radius`
/// over `steps` ticks, then wraps back to 0 and repeats. The display loop
/// calls `advance` once per tick; the sweep itself knows nothing about wall
/// time.
pub struct Sweep {
    max_radius: f64,
    steps: u32,
    tick: u32,
}

impl Sweep {
    pub fn new(max_radius: f64, steps: u32) -> Self {
        Self {
            max_radius,
            // A cycle needs at least a start and an end.
            steps: steps.max(2),
            tick: 0,
        }
    }

    /// Radius at the current tick, without advancing.
    pub fn radius(&self) -> f64 {
        self.max_radius * f64::from(self.tick) / f64::from(self.steps - 1)
    }

    /// Return the current radius and move one tick forward, wrapping at the
    /// end of the cycle.
    pub fn advance(&mut self) -> f64 {
        let radius = self.radius();
        self.tick = (self.tick + 1) % self.steps;
        radius
    }

    /// Fraction of the cycle completed, for fading the sweep as it expands.
    pub fn phase(&self) -> f32 {
        self.tick as f32 / (self.steps - 1) as f32
    }

    pub fn restart(&mut self) {
        self.tick = 0;
    }

    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_reaches_max() {
        let mut sweep = Sweep::new(10.0, 100);
        assert_eq!(sweep.advance(), 0.0);

        let mut last = 0.0;
        for _ in 0..99 {
            last = sweep.advance();
        }
        assert_eq!(last, 10.0);
    }

    #[test]
    fn is_monotonic_within_a_cycle() {
        let mut sweep = Sweep::new(10.0, 100);
        let mut prev = sweep.advance();
        for _ in 0..98 {
            let next = sweep.advance();
            assert!(next > prev);
            prev = next;
        }
    }

    #[test]
    fn wraps_to_zero_after_the_last_step() {
        let mut sweep = Sweep::new(10.0, 4);
        let cycle: Vec<f64> = (0..8).map(|_| sweep.advance()).collect();
        // Two identical cycles of 0, max/3, 2*max/3, max.
        assert_eq!(&cycle[0..4], &cycle[4..8]);
        assert_eq!(cycle[0], 0.0);
        assert_eq!(cycle[3], 10.0);
    }

    #[test]
    fn restart_rewinds_the_cycle() {
        let mut sweep = Sweep::new(10.0, 100);
        for _ in 0..37 {
            sweep.advance();
        }
        sweep.restart();
        assert_eq!(sweep.advance(), 0.0);
    }

    #[test]
    fn degenerate_step_count_is_clamped() {
        let mut sweep = Sweep::new(10.0, 0);
        assert_eq!(sweep.advance(), 0.0);
        assert_eq!(sweep.advance(), 10.0);
        assert_eq!(sweep.advance(), 0.0);
    }
}
