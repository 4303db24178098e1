//! Diagnostic hook for the silent paths
//!
//! Drivers never signal out-of-clip geometry or unsupported control requests
//! to the caller. A [`DiagnosticHook`] can observe them instead, which is
//! mostly useful in tests and bring-up.

use crate::geometry::Rect;
use crate::state::PowerMode;

/// Something the driver chose not to do (or only partly did)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Diagnostic {
    /// Request was entirely outside the clip; nothing was sent
    Discarded {
        /// Rectangle as requested
        requested: Rect,
    },
    /// Request was trimmed to the clip
    Clipped {
        /// Rectangle as requested
        requested: Rect,
        /// Rectangle actually drawn
        drawn: Rect,
    },
    /// Raw control request did not decode
    UnknownControl {
        /// Raw opcode
        what: u16,
        /// Raw value
        value: u32,
    },
    /// Power request matched the current mode
    PowerUnchanged(PowerMode),
}

/// Observer for [`Diagnostic`] events
pub trait DiagnosticHook {
    /// Record one event
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Hook that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiagnostics;

impl DiagnosticHook for NoDiagnostics {
    #[inline(always)]
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

/// Bounded in-memory log of diagnostics
///
/// Keeps the first `N` events; later ones only bump the overflow counter.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticLog<const N: usize> {
    events: heapless::Vec<Diagnostic, N>,
    dropped: u32,
}

impl<const N: usize> DiagnosticLog<N> {
    /// Create an empty log
    pub const fn new() -> Self {
        Self {
            events: heapless::Vec::new(),
            dropped: 0,
        }
    }

    /// Recorded events, oldest first
    pub fn events(&self) -> &[Diagnostic] {
        &self.events
    }

    /// Number of events that did not fit
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Forget everything recorded so far
    pub fn clear(&mut self) {
        self.events.clear();
        self.dropped = 0;
    }
}

impl<const N: usize> DiagnosticHook for DiagnosticLog<N> {
    fn report(&mut self, diagnostic: Diagnostic) {
        if self.events.push(diagnostic).is_err() {
            self.dropped = self.dropped.saturating_add(1);
        }
    }
}

impl<H: DiagnosticHook> DiagnosticHook for &mut H {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}
