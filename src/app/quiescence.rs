use std::time::Duration;

use tokio::time::Instant;

/// Tracks how long the tailed output file has gone without growth.
///
/// Once the load generator has exited, a sustained idle window is the
/// signal that the pipeline has drained. This is a heuristic, not a proof
/// of completion: a monitor stalled for longer than the threshold is
/// indistinguishable from one that finished.
#[derive(Debug)]
pub(crate) struct QuiescenceClock {
    last_growth: Instant,
}

impl QuiescenceClock {
    #[must_use]
    pub(crate) fn start() -> Self {
        Self {
            last_growth: Instant::now(),
        }
    }

    /// Marks the present poll as having observed growth.
    pub(crate) fn touch(&mut self) {
        self.last_growth = Instant::now();
    }

    /// Time elapsed since growth was last observed.
    #[must_use]
    pub(crate) fn idle_for(&self) -> Duration {
        self.last_growth.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_resets_the_idle_window() -> Result<(), String> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|err| format!("runtime build failed: {}", err))?;
        runtime.block_on(async {
            let mut clock = QuiescenceClock::start();
            tokio::time::sleep(Duration::from_millis(30)).await;
            if clock.idle_for() < Duration::from_millis(20) {
                return Err("Idle window did not grow".to_owned());
            }
            clock.touch();
            if clock.idle_for() > Duration::from_millis(20) {
                return Err("Touch did not reset the idle window".to_owned());
            }
            Ok(())
        })
    }
}
