//! Host print capability
//!
//! The browser owns the print dialog. This module wraps `window.print()` behind
//! a small trait so components can be handed an alternative host through Yew
//! context (tests count calls this way) while the default stays the browser.

use std::fmt;
use std::rc::Rc;

use crate::dom;

#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    #[error("No browser window is available")]
    WindowUnavailable,
    #[error("Print request rejected: {0}")]
    Rejected(String),
}

/// A fire-and-forget print action provided by the host environment.
pub trait PrintCapability {
    /// Ask the host to start its print flow.
    ///
    /// # Errors
    /// Returns an error if the host cannot start printing. The outcome of the
    /// dialog itself (printed, cancelled) is never reported.
    fn print(&self) -> Result<(), PrintError>;
}

/// Prints through the browser's `window.print()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowPrint;

impl PrintCapability for WindowPrint {
    fn print(&self) -> Result<(), PrintError> {
        let window = dom::window().ok_or(PrintError::WindowUnavailable)?;
        window
            .print()
            .map_err(|err| PrintError::Rejected(dom::js_error_message(&err)))
    }
}

/// Shared handle to the active print capability.
#[derive(Clone)]
pub struct PrintHost {
    capability: Rc<dyn PrintCapability>,
}

impl PrintHost {
    #[must_use]
    pub fn new(capability: impl PrintCapability + 'static) -> Self {
        Self {
            capability: Rc::new(capability),
        }
    }

    /// Host backed by the browser window.
    #[must_use]
    pub fn window() -> Self {
        Self::new(WindowPrint)
    }

    /// Issue one print request. Failures are logged and dropped.
    pub fn request(&self) {
        match self.capability.print() {
            Ok(()) => log::debug!("print dialog requested"),
            Err(err) => log::warn!("{err}"),
        }
    }
}

impl Default for PrintHost {
    fn default() -> Self {
        Self::window()
    }
}

impl PartialEq for PrintHost {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.capability, &other.capability)
    }
}

impl fmt::Debug for PrintHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrintHost").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counting(Rc<Cell<usize>>);

    impl PrintCapability for Counting {
        fn print(&self) -> Result<(), PrintError> {
            self.0.set(self.0.get() + 1);
            Ok(())
        }
    }

    struct Failing(Rc<Cell<usize>>);

    impl PrintCapability for Failing {
        fn print(&self) -> Result<(), PrintError> {
            self.0.set(self.0.get() + 1);
            Err(PrintError::Rejected("blocked by sandbox".into()))
        }
    }

    #[test]
    fn request_invokes_capability_once_per_call() {
        let calls = Rc::new(Cell::new(0));
        let host = PrintHost::new(Counting(calls.clone()));
        assert_eq!(calls.get(), 0);
        host.request();
        assert_eq!(calls.get(), 1);
        for _ in 0..4 {
            host.request();
        }
        assert_eq!(calls.get(), 5);
    }

    #[test]
    fn request_swallows_host_failures() {
        let calls = Rc::new(Cell::new(0));
        let host = PrintHost::new(Failing(calls.clone()));
        host.request();
        host.request();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn clones_compare_equal_and_distinct_hosts_do_not() {
        let calls = Rc::new(Cell::new(0));
        let host = PrintHost::new(Counting(calls.clone()));
        assert_eq!(host, host.clone());
        assert_ne!(host, PrintHost::new(Counting(calls)));
    }

    #[test]
    fn error_messages_are_readable() {
        assert_eq!(
            PrintError::WindowUnavailable.to_string(),
            "No browser window is available"
        );
        assert!(
            PrintError::Rejected("denied".into())
                .to_string()
                .contains("denied")
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn window_print_is_unavailable_natively() {
        assert!(matches!(
            WindowPrint.print(),
            Err(PrintError::WindowUnavailable)
        ));
        PrintHost::default().request();
    }
}
