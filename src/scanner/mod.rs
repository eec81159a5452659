pub mod patterns;

use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

use crate::config::ScanConfig;
use crate::error::{ConfigError, IoError};

/// What a single pass over a file yields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    pub own_tests: usize,
    pub parents: Vec<String>,
}

/// Line-level scanner counting test markers and picking up
/// `class <key> ... extends <Parent>` declarations.
///
/// Matching never spans lines, so declarations broken over several lines
/// are not seen.
#[derive(Debug, Clone)]
pub struct Annotator {
    marker: String,
    extends: Regex,
}

impl Annotator {
    pub fn new(marker: impl Into<String>, extends: Regex) -> Self {
        Self {
            marker: marker.into(),
            extends,
        }
    }

    pub fn from_config(config: &ScanConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.test_marker.clone(), config.compile_pattern()?))
    }

    /// Parent named on `line` when its declared class is `key`.
    pub fn extended_parent<'l>(&self, line: &'l str, key: &str) -> Option<&'l str> {
        let caps = self.extends.captures(line)?;
        let child = caps.get(1)?.as_str();
        let parent = caps.get(2)?.as_str();
        if child == key {
            Some(parent)
        } else {
            trace!(child, key, "extends clause for another class, skipping");
            None
        }
    }

    pub fn annotate_line(&self, line: &str, key: &str, annotation: &mut Annotation) {
        if line.contains(&self.marker) {
            annotation.own_tests += 1;
        }
        if let Some(parent) = self.extended_parent(line, key) {
            annotation.parents.push(parent.to_string());
        }
    }

    /// Scans every line of `reader`. Lines are decoded lossily and a
    /// trailing `\r` is dropped.
    pub fn annotate_reader<R: BufRead>(
        &self,
        key: &str,
        mut reader: R,
    ) -> std::io::Result<Annotation> {
        let mut annotation = Annotation::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
            let line = String::from_utf8_lossy(&buf);
            self.annotate_line(&line, key, &mut annotation);
        }

        Ok(annotation)
    }

    pub fn annotate_file(&self, key: &str, path: &Path) -> Result<Annotation, IoError> {
        let file = File::open(path).map_err(|e| IoError::open_error(path, e))?;
        let annotation = self
            .annotate_reader(key, BufReader::new(file))
            .map_err(|e| IoError::read_error(path, e))?;

        debug!(
            key,
            tests = annotation.own_tests,
            parents = ?annotation.parents,
            "annotated file"
        );
        Ok(annotation)
    }
}
