//! Fluent builder for constructing a [`Sim`].

use museum_core::{CoinFlipPaths, EventSink, NoopSink, PathSource, SimConfig, VisitPath, VisitorId};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<S>`].
///
/// # Required input
///
/// - [`SimConfig`] — capacities, visitor count, dwell nominals, seed.
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                      |
/// |-------------------|----------------------------------------------|
/// | `.sink(s)`        | [`NoopSink`] (trace discarded)               |
/// | `.paths(v)`       | Coin-flip assignment from `config.seed`      |
/// | `.path_source(p)` | —                                            |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(config)
///     .sink(MemorySink::new())
///     .paths(vec![VisitPath::HallAOnly, VisitPath::HallAThenB])
///     .build()?;
/// let summary = sim.run();
/// ```
pub struct SimBuilder<S: EventSink> {
    config: SimConfig,
    sink:   S,
    paths:  Option<Vec<VisitPath>>,
}

impl SimBuilder<NoopSink> {
    /// Create a builder with the required configuration and default seams.
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            sink:  NoopSink,
            paths: None,
        }
    }
}

impl<S: EventSink> SimBuilder<S> {
    /// Supply the event sink the shared space will emit into.
    pub fn sink<S2: EventSink>(self, sink: S2) -> SimBuilder<S2> {
        SimBuilder {
            config: self.config,
            sink,
            paths:  self.paths,
        }
    }

    /// Supply an explicit itinerary per visitor (must be length
    /// `visitor_count`).
    pub fn paths(mut self, paths: Vec<VisitPath>) -> Self {
        self.paths = Some(paths);
        self
    }

    /// Resolve itineraries from a [`PathSource`].
    ///
    /// Paths are immutable pre-assignments, so the source is queried once
    /// per visitor here rather than at spawn time.
    pub fn path_source(mut self, source: &dyn PathSource) -> Self {
        let paths = (0..self.config.visitor_count)
            .map(|i| source.path_for(VisitorId(i as u32)))
            .collect();
        self.paths = Some(paths);
        self
    }

    /// Validate the configuration, resolve the path assignment, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<S>> {
        self.config.validate()?;

        let paths = match self.paths {
            Some(p) => {
                if p.len() != self.config.visitor_count {
                    return Err(SimError::PathCountMismatch {
                        expected: self.config.visitor_count,
                        got:      p.len(),
                    });
                }
                p
            }
            None => {
                let source = CoinFlipPaths::new(self.config.seed);
                (0..self.config.visitor_count)
                    .map(|i| source.path_for(VisitorId(i as u32)))
                    .collect()
            }
        };

        Ok(Sim {
            config: self.config,
            paths,
            sink: self.sink,
        })
    }
}
