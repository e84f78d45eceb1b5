use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("unknown scenario type {0}")]
    UnknownScenario(u32),
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("worker thread `{0}` panicked")]
    WorkerPanicked(String),
}

pub type ScenarioResult<T, E = ScenarioError> = Result<T, E>;
