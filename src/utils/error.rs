use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Type mismatch on field '{field}': expected {expected}, found {found}")]
    TypeMismatchError {
        field: String,
        expected: String,
        found: String,
    },

    #[error("Unknown field '{field}' for schema {schema}")]
    UnknownFieldError { field: String, schema: String },

    #[error("Extension key '{key}' collides with a declared field of schema {schema}")]
    SchemaConflictError { key: String, schema: String },

    #[error("Malformed JSON: expected an object, found {found}")]
    MalformedJsonError { found: String },

    #[error("Unknown schema: {name}")]
    UnknownSchemaError { name: String },

    #[error("Record #{index} rejected: {source}")]
    InvalidRecordError {
        index: usize,
        #[source]
        source: Box<RecordError>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl RecordError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RecordError::TypeMismatchError { .. }
            | RecordError::UnknownFieldError { .. }
            | RecordError::SchemaConflictError { .. }
            | RecordError::MalformedJsonError { .. }
            | RecordError::InvalidRecordError { .. }
            | RecordError::SerializationError(_) => ErrorCategory::Validation,
            RecordError::UnknownSchemaError { .. }
            | RecordError::ConfigError { .. }
            | RecordError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RecordError::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RecordError::TypeMismatchError { field, expected, .. } => {
                format!("Provide a {} value for '{}'", expected, field)
            }
            RecordError::UnknownFieldError { .. } => {
                "Use the extension accessors for fields outside the schema".to_string()
            }
            RecordError::SchemaConflictError { key, .. } => {
                format!("Set '{}' through the declared field setter instead", key)
            }
            RecordError::MalformedJsonError { .. } => {
                "Input must be a JSON object or an array of JSON objects".to_string()
            }
            RecordError::UnknownSchemaError { .. } => {
                "Check --schema or declare the schema in --schema-file".to_string()
            }
            RecordError::InvalidRecordError { source, .. } => source.recovery_suggestion(),
            RecordError::IoError(_) => "Check that the file exists and is readable".to_string(),
            RecordError::SerializationError(_) => "Check the input for JSON syntax errors".to_string(),
            RecordError::ConfigError { .. } | RecordError::InvalidConfigValueError { .. } => {
                "Review the command line arguments and schema file".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RecordError::InvalidRecordError { index, source } => {
                format!("Record {} is invalid: {}", index, source)
            }
            RecordError::IoError(e) => format!("Could not access file: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecordError>;
