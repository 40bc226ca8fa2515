use std::time::{Duration, Instant};

use log::debug;

use super::benchmark::Benchmark;
use crate::error::{HarnessError, HarnessResult};

/// Wall-clock outcome of one benchmark.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub iterations: u32,
    /// Total time across all repetitions.
    pub elapsed: Duration,
}

impl Measurement {
    /// Mean milliseconds per call.
    pub fn average_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0 / f64::from(self.iterations)
    }
}

/// Run `op` `iterations` times back to back and return the total elapsed
/// time.
///
/// The clock starts right before the first call and stops right after the
/// last one. Nothing is discarded as warm-up, so one-time setup inside the
/// library (thread pools, lazy dispatch) lands in the first benchmark that
/// triggers it.
pub fn time_repetitions<F>(iterations: u32, mut op: F) -> HarnessResult<Duration>
where
    F: FnMut() -> HarnessResult<()>,
{
    let start = Instant::now();
    for _ in 0..iterations {
        op()?;
    }
    Ok(start.elapsed())
}

/// Time a benchmark. A failing repetition stops it immediately and the
/// error is tagged with the benchmark's name.
pub fn measure(benchmark: &mut Benchmark<'_>) -> HarnessResult<Measurement> {
    let iterations = benchmark.iterations();
    if iterations == 0 {
        return Err(HarnessError::InvalidIterations {
            name: benchmark.name().to_string(),
        });
    }

    debug!("running {} ({} iterations)", benchmark.name(), iterations);
    let elapsed = time_repetitions(iterations, || benchmark.invoke()).map_err(|e| {
        HarnessError::Benchmark {
            name: benchmark.name().to_string(),
            source: Box::new(e),
        }
    })?;

    Ok(Measurement {
        name: benchmark.name().to_string(),
        iterations,
        elapsed,
    })
}
