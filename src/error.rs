use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Coarse grouping of chart failures, used by hosts that only care about
/// which stage of the pipeline rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Parse,
    EmptyInput,
    Configuration,
    Render,
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("record {index}: field `{field}` value {value:?} is not a valid {expected}")]
    Parse {
        field: String,
        index: usize,
        value: String,
        expected: &'static str,
    },

    #[error("cannot derive {context} from an empty record set")]
    EmptyInput { context: &'static str },

    #[error("record {index} is missing required field `{field}`")]
    MissingField { field: String, index: usize },

    #[error("bin count must be > 0, got {count}")]
    InvalidBinCount { count: usize },

    #[error("unknown attribute `{name}`")]
    UnknownAttribute { name: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("export failed: {0}")]
    Export(String),
}

impl ChartError {
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Parse { .. } => ErrorCategory::Parse,
            Self::EmptyInput { .. } => ErrorCategory::EmptyInput,
            Self::MissingField { .. }
            | Self::InvalidBinCount { .. }
            | Self::UnknownAttribute { .. }
            | Self::Config(_) => ErrorCategory::Configuration,
            Self::InvalidViewport { .. } | Self::InvalidData(_) | Self::Export(_) => {
                ErrorCategory::Render
            }
        }
    }

    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }
}
