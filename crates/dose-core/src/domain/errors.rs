use std::error::Error;
use std::fmt::{Display, Formatter};

pub type DoseResult<T> = Result<T, DoseError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoseErrorCategory {
    InputValidationError,
    DataError,
    ContractViolation,
    IoSystemError,
    InternalError,
}

impl DoseErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::DataError => 4,
            Self::ContractViolation => 5,
            Self::InternalError => 6,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InputValidationError => "InputValidationError",
            Self::DataError => "DataError",
            Self::ContractViolation => "ContractViolation",
            Self::IoSystemError => "IoSystemError",
            Self::InternalError => "InternalError",
        }
    }

    /// Data and contract failures abort the run; input problems are reported
    /// against the offending request.
    pub const fn aborts_run(self) -> bool {
        matches!(
            self,
            Self::DataError | Self::ContractViolation | Self::InternalError
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoseError {
    category: DoseErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl DoseError {
    pub fn new(
        category: DoseErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn input_validation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(
            DoseErrorCategory::InputValidationError,
            placeholder,
            message,
        )
    }

    pub fn data(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(DoseErrorCategory::DataError, placeholder, message)
    }

    pub fn contract(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(DoseErrorCategory::ContractViolation, placeholder, message)
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(DoseErrorCategory::IoSystemError, placeholder, message)
    }

    pub fn internal(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(DoseErrorCategory::InternalError, placeholder, message)
    }

    pub const fn category(&self) -> DoseErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        let severity = if self.category.aborts_run() {
            "FATAL"
        } else {
            "ERROR"
        };
        format!("{}: [{}] {}", severity, self.placeholder, self.message)
    }
}

impl Display for DoseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category.as_str(),
            self.placeholder,
            self.message
        )
    }
}

impl Error for DoseError {}
