//! User-facing diagnostics for configuration and transform failures
mod code_frame;
mod code_highlight;
mod diagnostic;
mod error_kind;

pub use self::code_frame::*;
pub use self::code_highlight::*;
pub use self::diagnostic::*;
pub use self::error_kind::*;

/// Errors surfaced to users carry a [`Diagnostic`] payload behind an
/// `anyhow::Error` so call sites can chain context and downcast.
pub type DiagnosticError = anyhow::Error;

/// Builds a [`DiagnosticError`] from a format string or a
/// [`DiagnosticBuilder`] expression.
#[macro_export]
macro_rules! diagnostic_error {
  ($message:literal $(, $args:expr)* $(,)?) => {
    $crate::diagnostic::DiagnosticError::from(
      $crate::diagnostic::DiagnosticBuilder::default()
        .message(format!($message $(, $args)*))
        .build()
        .expect("invalid diagnostic"),
    )
  };
  ($builder:expr) => {
    $crate::diagnostic::DiagnosticError::from($builder.build().expect("invalid diagnostic"))
  };
}
