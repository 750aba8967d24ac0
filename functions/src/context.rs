use std::path::Path;

use crate::error::{BindingError, Result};

/// Metadata about a single function invocation
pub trait Context {
    /// Unique identifier of this invocation
    fn invocation_id(&self) -> &str;

    /// Name of the function being invoked
    fn function_name(&self) -> &str;

    /// Absolute path to the deployed function's code
    fn function_directory(&self) -> &str;
}

/// Contains information about the call to the user function
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvocationContext {
    invocation_id: String,
    function_name: String,
    function_directory: String,
}

impl InvocationContext {
    /// Fails with [BindingError::RelativeDirectory] unless `function_directory` is absolute
    pub fn new<I, N, D>(invocation_id: I, function_name: N, function_directory: D) -> Result<Self>
    where
        I: Into<String>,
        N: Into<String>,
        D: Into<String>,
    {
        let function_directory = function_directory.into();
        if !Path::new(&function_directory).is_absolute() {
            return Err(BindingError::RelativeDirectory(function_directory));
        }
        Ok(InvocationContext {
            invocation_id: invocation_id.into(),
            function_name: function_name.into(),
            function_directory,
        })
    }

    /// Build a context for a fresh invocation from the process environment
    ///
    /// The function name comes from `FUNC_HANDLER`; the directory from `FUNC_DIRECTORY`, resolved
    /// against the working directory when relative, or the working directory itself when unset.
    pub fn from_env() -> Result<Self> {
        let function_name = (*crate::FUNC_HANDLER)
            .clone()
            .ok_or(BindingError::MissingEnvironment("FUNC_HANDLER"))?;

        let cwd = std::env::current_dir().map_err(BindingError::WorkingDirectory)?;
        let function_directory = match (*crate::FUNC_DIRECTORY).as_deref() {
            Some(dir) => cwd.join(dir),
            None => cwd,
        };

        let invocation_id = uuid::Uuid::new_v4().to_string();
        tracing::debug!(%invocation_id, %function_name, "created invocation context");

        InvocationContext::new(
            invocation_id,
            function_name,
            function_directory.to_string_lossy().into_owned(),
        )
    }
}

impl Context for InvocationContext {
    fn invocation_id(&self) -> &str {
        &self.invocation_id
    }

    fn function_name(&self) -> &str {
        &self.function_name
    }

    fn function_directory(&self) -> &str {
        &self.function_directory
    }
}
