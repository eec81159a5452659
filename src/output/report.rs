use serde::Serialize;
use std::path::PathBuf;

use crate::graph::{DeepCounts, TestGraph};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub short_name: String,
    pub path: PathBuf,
    pub num_tests: usize,
    pub deep_tests: usize,
    pub extended: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub files: Vec<FileReport>,
    pub total_tests: usize,
    pub total_deep_tests: usize,
    pub file_count: usize,
}

impl Report {
    /// Keeps every file with a non-zero deep count, sorted by short name.
    pub fn build(graph: &TestGraph, counts: &DeepCounts) -> Self {
        let mut files: Vec<FileReport> = graph
            .iter()
            .filter_map(|(id, node)| {
                let deep_tests = counts.get(id);
                (deep_tests > 0).then(|| FileReport {
                    short_name: node.key.clone(),
                    path: node.path.clone(),
                    num_tests: node.own_tests(),
                    deep_tests,
                    extended: node.parents().to_vec(),
                })
            })
            .collect();
        files.sort_by(|a, b| a.short_name.cmp(&b.short_name));

        let total_tests = files.iter().map(|f| f.num_tests).sum();
        let total_deep_tests = files.iter().map(|f| f.deep_tests).sum();
        let file_count = files.len();

        Self {
            files,
            total_tests,
            total_deep_tests,
            file_count,
        }
    }

    pub fn find(&self, short_name: &str) -> Option<&FileReport> {
        self.files.iter().find(|f| f.short_name == short_name)
    }

    pub fn summary_line(&self) -> String {
        format!(
            "{} total tests, {} deep tests in {} source code files",
            self.total_tests, self.total_deep_tests, self.file_count
        )
    }
}

impl FileReport {
    pub fn to_line(&self) -> String {
        format!(
            "shortName={}, numTests={}, deepTests={}, extended={}",
            self.short_name,
            self.num_tests,
            self.deep_tests,
            self.extended.join(",")
        )
    }
}
