//! Commands bound to the home and item buttons.
//!
//! A [`Command`] is the non-visual counterpart of a click: the control asks
//! `can_execute()` first and only then calls `execute()`. [`RelayCommand`]
//! adapts plain closures.

use std::fmt;

/// An executable command with an enabled check.
pub trait Command<P>: Send + Sync {
    /// Returns `true` if the command may run right now.
    fn can_execute(&self) -> bool {
        true
    }

    /// Runs the command.
    fn execute(&self, parameter: &P);
}

type ExecuteFn<P> = Box<dyn Fn(&P) + Send + Sync>;
type CanExecuteFn = Box<dyn Fn() -> bool + Send + Sync>;

/// A command built from closures.
///
/// # Example
///
/// ```
/// use horizon_breadcrumb::{Command, RelayCommand};
///
/// let go_home = RelayCommand::new(|_: &()| println!("navigating home"))
///     .with_can_execute(|| true);
/// assert!(go_home.can_execute());
/// go_home.execute(&());
/// ```
pub struct RelayCommand<P> {
    execute: ExecuteFn<P>,
    can_execute: Option<CanExecuteFn>,
}

impl<P> RelayCommand<P> {
    /// Creates a command that is always executable.
    pub fn new<F>(execute: F) -> Self
    where
        F: Fn(&P) + Send + Sync + 'static,
    {
        Self {
            execute: Box::new(execute),
            can_execute: None,
        }
    }

    /// Sets the enabled check using builder pattern.
    pub fn with_can_execute<F>(mut self, can_execute: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.can_execute = Some(Box::new(can_execute));
        self
    }
}

impl<P> Command<P> for RelayCommand<P> {
    fn can_execute(&self) -> bool {
        self.can_execute.as_ref().is_none_or(|check| check())
    }

    fn execute(&self, parameter: &P) {
        (self.execute)(parameter);
    }
}

impl<P> fmt::Debug for RelayCommand<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayCommand")
            .field("has_can_execute", &self.can_execute.is_some())
            .finish()
    }
}
