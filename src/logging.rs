use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

/// How much of a run is narrated on stderr. Each step adds one tier of
/// events; `RUST_LOG` overrides the choice entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Nothing. Fatal errors still reach stderr through `main`.
    Quiet,
    /// Key collisions and other recoverable surprises.
    Warnings,
    /// The end-of-run totals and where the report went.
    Summary,
    /// One event per located or annotated file, plus cycle revisits.
    Files,
    /// Skipped extends clauses and parents missing from the graph.
    Lines,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Warnings,
            1 => Self::Summary,
            2 => Self::Files,
            _ => Self::Lines,
        }
    }

    fn level(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::OFF,
            Self::Warnings => LevelFilter::WARN,
            Self::Summary => LevelFilter::INFO,
            Self::Files => LevelFilter::DEBUG,
            Self::Lines => LevelFilter::TRACE,
        }
    }

    fn to_filter(self) -> String {
        let level = self.level();
        format!("deep_test_count={level},deep_tests={level}")
    }
}

/// Installs the global subscriber on stderr, keeping stdout for the report.
pub fn init(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.to_filter()));

    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(0, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(0, false), Verbosity::Warnings);
        assert_eq!(Verbosity::from_flags(1, false), Verbosity::Summary);
        assert_eq!(Verbosity::from_flags(2, false), Verbosity::Files);
        assert_eq!(Verbosity::from_flags(3, false), Verbosity::Lines);
        assert_eq!(Verbosity::from_flags(10, false), Verbosity::Lines);
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        assert_eq!(Verbosity::from_flags(3, true), Verbosity::Quiet);
    }

    #[test]
    fn test_filter_names_both_targets() {
        assert_eq!(
            Verbosity::Files.to_filter(),
            "deep_test_count=debug,deep_tests=debug"
        );
        assert_eq!(
            Verbosity::Quiet.to_filter(),
            "deep_test_count=off,deep_tests=off"
        );
    }

    #[test]
    fn test_each_tier_admits_its_events() {
        use tracing::Level;

        assert!(Verbosity::Warnings.level() >= Level::WARN);
        assert!(Verbosity::Warnings.level() < Level::INFO);
        assert!(Verbosity::Summary.level() >= Level::INFO);
        assert!(Verbosity::Files.level() >= Level::DEBUG);
        assert!(Verbosity::Files.level() < Level::TRACE);
        assert!(Verbosity::Lines.level() >= Level::TRACE);
        assert!(Verbosity::Quiet.level() < Level::ERROR);
    }
}
