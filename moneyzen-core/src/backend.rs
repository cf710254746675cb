//! The remote-call seam to the native backend.
//!
//! Every persistence operation goes through a single generic primitive:
//! a command name plus a JSON object of arguments, answered with JSON.
//! Repositories build on [`call`] to get typed results.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend rejected or failed the command
    #[error("backend command `{command}` failed: {message}")]
    Command { command: String, message: String },

    /// The backend answered with something we could not decode
    #[error("unexpected response from `{command}`: {source}")]
    Response {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode arguments for `{command}`: {source}")]
    Arguments {
        command: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Opaque remote command executor.
///
/// Implementations own transport and error reporting; a failed command is
/// reported as a plain message, like the native side does.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, String>;
}

/// Invoke `command` and decode its JSON answer into `T`.
pub async fn call<T: DeserializeOwned>(
    backend: &dyn Backend,
    command: &str,
    args: Value,
) -> Result<T, BackendError> {
    let raw = backend.invoke(command, args).await.map_err(|message| {
        tracing::error!(command, %message, "backend command failed");
        BackendError::Command {
            command: command.to_string(),
            message,
        }
    })?;

    serde_json::from_value(raw).map_err(|source| {
        tracing::error!(command, error = %source, "backend response did not decode");
        BackendError::Response {
            command: command.to_string(),
            source,
        }
    })
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Records every call and answers from a canned table
    #[derive(Default)]
    pub struct RecordingBackend {
        pub calls: Mutex<Vec<(String, Value)>>,
        pub responses: HashMap<String, Value>,
    }

    impl RecordingBackend {
        pub fn with(mut self, command: &str, response: Value) -> Self {
            self.responses.insert(command.to_string(), response);
            self
        }

        pub fn calls(&self) -> Vec<(String, Value)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Backend for RecordingBackend {
        async fn invoke(&self, command: &str, args: Value) -> Result<Value, String> {
            self.calls.lock().unwrap().push((command.to_string(), args));
            self.responses
                .get(command)
                .cloned()
                .ok_or_else(|| format!("unknown command {command}"))
        }
    }
}
