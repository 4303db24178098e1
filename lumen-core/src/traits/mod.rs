//! Driver-facing traits
//!
//! These traits define the interface between the graphics layer and
//! controller-specific drivers.

pub mod diagnostics;
pub mod display;

pub use diagnostics::{Diagnostic, DiagnosticHook, DiagnosticLog, NoDiagnostics};
pub use display::{PixelDisplay, PixelDisplayExt};
