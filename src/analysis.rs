//! Locate, annotate, reduce, report: the whole run as three sequential
//! passes over the file set. The first error aborts the run.

use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::ScanConfig;
use crate::discovery::locate_sources;
use crate::error::Result;
use crate::graph::{compute_deep_counts, CyclePolicy, TestGraph};
use crate::output::Report;
use crate::scanner::Annotator;

pub struct Analyzer {
    config: ScanConfig,
    annotator: Annotator,
}

impl Analyzer {
    pub fn new(config: ScanConfig) -> Result<Self> {
        config.validate()?;
        let annotator = Annotator::from_config(&config)?;
        Ok(Self { config, annotator })
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Builds the annotated graph for every matching file under `root`.
    pub fn build_graph(&self, root: &Path) -> Result<TestGraph> {
        let extensions = self.config.normalized_extensions();
        let sources = locate_sources(root, &extensions)?;
        let mut graph = TestGraph::from_sources(sources);

        let ids: Vec<_> = graph.ids().collect();
        for id in ids {
            let node = graph.node(id);
            let annotation = self.annotator.annotate_file(&node.key, &node.path)?;
            if !graph.annotate(id, annotation) {
                warn!(key = %graph.node(id).key, "file already annotated, keeping first scan");
            }
        }

        debug!(files = graph.len(), "annotation pass complete");
        Ok(graph)
    }

    pub fn run(&self, root: &Path) -> Result<Report> {
        let graph = self.build_graph(root)?;
        let policy = CyclePolicy::from_strict(self.config.strict_cycles);
        let counts = compute_deep_counts(&graph, policy)?;
        let report = Report::build(&graph, &counts);

        info!(
            scanned = graph.len(),
            reported = report.file_count,
            total_tests = report.total_tests,
            deep_tests = report.total_deep_tests,
            "analysis complete"
        );
        Ok(report)
    }
}

/// One-shot convenience wrapper around [`Analyzer`].
pub fn analyze(root: &Path, config: ScanConfig) -> Result<Report> {
    Analyzer::new(config)?.run(root)
}
