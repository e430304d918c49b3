use crate::error::Error;
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How many expansions pass between two memory samples.
const MEMORY_SAMPLE_INTERVAL: u64 = 1024;

/// Resource limits for a single search. The search itself has no bound on
/// the number of permutations it may explore, so callers serving many
/// requests should always set at least one of these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    pub time_limit: Option<Duration>,
    pub max_expansions: Option<u64>,
    pub memory_limit_mb: Option<usize>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }
}

#[derive(Debug)]
pub struct TerminationCondition {
    limits: SearchLimits,
    start_time: Instant,
    peak_memory_usage_mb: Option<usize>,
    last_log_time: Instant,
}

impl TerminationCondition {
    pub fn new(limits: SearchLimits) -> Self {
        debug!(
            time_limit = limits.time_limit.map(|d| d.as_secs_f64()),
            max_expansions = limits.max_expansions,
            memory_limit_mb = limits.memory_limit_mb,
        );
        Self {
            limits,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_log_time: Instant::now(),
        }
    }

    fn sample_memory(&mut self) {
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
    }

    pub fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.sample_memory();
        info!(
            memory_usage_mb = self.peak_memory_usage_mb,
            time_elapsed = self.start_time.elapsed().as_secs_f64(),
        );
    }

    /// Check the limits after `expanded_nodes` expansions. Returns the error
    /// the search should stop with, if any.
    pub fn should_terminate(&mut self, expanded_nodes: u64) -> Option<Error> {
        if let Some(limit) = self.limits.max_expansions {
            if expanded_nodes >= limit {
                return Some(Error::ExpansionLimitExceeded { limit });
            }
        }
        if let Some(time_limit) = self.limits.time_limit {
            if self.start_time.elapsed() > time_limit {
                return Some(Error::TimeLimitExceeded { expanded_nodes });
            }
        }
        if let Some(limit_mb) = self.limits.memory_limit_mb {
            if expanded_nodes % MEMORY_SAMPLE_INTERVAL == 0 {
                self.sample_memory();
            }
            if let Some(peak_usage) = self.peak_memory_usage_mb {
                if peak_usage > limit_mb {
                    return Some(Error::MemoryLimitExceeded { limit_mb });
                }
            }
        }
        self.log_if_needed();
        None
    }
}
