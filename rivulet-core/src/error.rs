// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the rivulet stream operators
//!
//! Every error that terminates a rivulet stream is a [`RivuletError`]. Operators
//! never recover from errors; they forward them as the final `StreamItem::Error`
//! of the stream.
//!
//! # Examples
//!
//! ```
//! use rivulet_core::{RivuletError, Result};
//!
//! fn process_data() -> Result<()> {
//!     Err(RivuletError::stream_error("Stream not ready"))
//! }
//! ```

/// Root error type for all rivulet operations
#[derive(Debug, thiserror::Error)]
pub enum RivuletError {
    /// Stream processing encountered an error
    ///
    /// General error for stream operations that don't fit
    /// other specific categories.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong during stream processing
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps errors produced by user-provided predicates and transforms
    /// passed to the fallible operators (`try_filter_items`, `try_map_items`).
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A null element was found where none is allowed
    ///
    /// Raised by `require_no_nulls` when it observes `None`. This is an
    /// invalid-argument error: the stream itself violated the caller's contract.
    #[error("null element found in {stream}.")]
    NullElement {
        /// Identifies the stream that produced the null element
        stream: String,
    },
}

impl RivuletError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Create a null element error for the named stream
    pub fn null_element(stream: impl Into<String>) -> Self {
        Self::NullElement {
            stream: stream.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Check if this error signals an invalid argument
    ///
    /// Only the null element error is in this class.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::NullElement { .. })
    }
}

/// Specialized Result type for rivulet operations
///
/// # Examples
///
/// ```
/// use rivulet_core::Result;
///
/// fn process() -> Result<String> {
///     Ok("processed".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, RivuletError>;

/// Extension trait for converting errors into `RivuletError`
///
/// Implemented for every `std::error::Error + Send + Sync + 'static`, so
/// fallible closures can end with `.map_err(IntoRivuletError::into_rivulet)`.
pub trait IntoRivuletError {
    /// Convert this error into a `RivuletError` with additional context
    fn into_rivulet_error(self, context: &str) -> RivuletError;

    /// Convert this error into a `RivuletError` without additional context
    fn into_rivulet(self) -> RivuletError
    where
        Self: Sized,
    {
        self.into_rivulet_error("")
    }
}

impl<E: std::error::Error + Send + Sync + 'static> IntoRivuletError for E {
    fn into_rivulet_error(self, context: &str) -> RivuletError {
        if context.is_empty() {
            RivuletError::user_error(self)
        } else {
            RivuletError::stream_error(format!("{context}: {self}"))
        }
    }
}

/// Helper trait for adding context to `Result`s
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// # Errors
    /// Returns `Err(RivuletError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context to an error using a closure (lazy evaluation)
    ///
    /// # Errors
    /// Returns `Err(RivuletError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<RivuletError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let context = context.into();
            match e.into() {
                RivuletError::UserError(inner) => RivuletError::StreamProcessingError {
                    context: format!("{context}: {inner}"),
                },
                other => other,
            }
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let context = f();
            match e.into() {
                RivuletError::UserError(inner) => RivuletError::StreamProcessingError {
                    context: format!("{context}: {inner}"),
                },
                other => other,
            }
        })
    }
}

impl Clone for RivuletError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            // The boxed source can't be cloned, keep its message
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {}", e),
            },
            Self::NullElement { stream } => Self::NullElement {
                stream: stream.clone(),
            },
        }
    }
}
