use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be a finite number greater than zero, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("max_rotation_degrees must be finite, got {0}")]
    InvalidRotation(f64),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
