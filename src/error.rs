use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum JsonError {
    #[error("Malformed JSON text at line {line}, column {column}: {message}")]
    Malformed {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Unknown primitive selector '{0}'")]
    UnknownSelector(String),
}

impl From<serde_json::Error> for JsonError {
    fn from(err: serde_json::Error) -> Self {
        JsonError::Malformed {
            line: err.line(),
            column: err.column(),
            // serde_json appends the position to its Display output; keep the bare message.
            message: strip_position(&err.to_string()).to_owned(),
        }
    }
}

fn strip_position(message: &str) -> &str {
    match message.rfind(" at line ") {
        Some(index) => &message[..index],
        None => message,
    }
}
