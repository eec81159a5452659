use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("inheritance cycle detected: {}", chain.join(" -> "))]
    Cycle { chain: Vec<String> },
}

impl GraphError {
    pub fn cycle(chain: Vec<String>) -> Self {
        Self::Cycle { chain }
    }
}
