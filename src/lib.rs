//! *An engine for incremental evaluation, description and diagnosis of
//! reverse Polish expression stacks*.
//!
//! The engine keeps a single mutable stack of [`Operation`]s — literal
//! operands, named variables, named constants, and unary/binary operators.
//! Three walkers consume that stack along the same recursive postfix
//! grammar:
//!
//! - the **evaluator** reduces the topmost complete expression to a number,
//! - the **formatter** reconstructs a readable rendition of *everything*
//!   resting on the stack,
//! - the **reporter** explains why the topmost expression cannot be
//!   evaluated.
//!
//! Every mutation of the stack or of the variable environment synchronously
//! re-runs the formatter and hands the result to any registered
//! [`FormulaObserver`] — the hook a display layer uses to stay in sync.
//!
//! ```
//! use rpncalc::prelude::*;
//!
//! let mut calculator = Calculator::new();
//! calculator.push_operand(4.);
//! calculator.push_operand(3.);
//! assert_eq!(calculator.push_operation("-"), Some(1.));
//! assert_eq!(calculator.description(), "4 - 3");
//! ```

use thiserror::Error;

mod builtins;
mod calculator;
mod describe;
mod diagnose;
mod evaluate;
mod observer;
mod operation;
mod registry;
mod variables;

pub use calculator::Calculator;
pub use observer::FormulaObserver;
pub use observer::ObserverHandle;
pub use operation::BinaryFn;
pub use operation::BinaryFormat;
pub use operation::Operation;
pub use operation::UnaryFn;
pub use operation::UnaryFormat;
pub use registry::OperatorRegistry;
pub use variables::Variables;

/// The entire public surface in one gulp
pub mod prelude {
    pub use crate::BinaryFn;
    pub use crate::BinaryFormat;
    pub use crate::Calculator;
    pub use crate::Error;
    pub use crate::FormulaObserver;
    pub use crate::ObserverHandle;
    pub use crate::Operation;
    pub use crate::OperatorRegistry;
    pub use crate::UnaryFn;
    pub use crate::UnaryFormat;
    pub use crate::Variables;
}

/// Preamble for crate-internal modules
pub(crate) mod internal {
    pub use std::collections::BTreeMap;
    pub use std::rc::Rc;

    pub use log::debug;
    pub use log::trace;

    pub use crate::builtins::Builtin;
    pub use crate::builtins::BUILTIN_CONSTANTS;
    pub use crate::builtins::BUILTIN_OPERATORS;
    pub use crate::describe::describe;
    pub use crate::describe::description_of;
    pub use crate::describe::BLANK;
    pub use crate::diagnose::check;
    pub use crate::evaluate::value_of;
    pub use crate::observer::ObserverHub;
    pub use crate::operation::BinaryFn;
    pub use crate::operation::BinaryFormat;
    pub use crate::operation::Operation;
    pub use crate::operation::UnaryFn;
    pub use crate::operation::UnaryFormat;
    pub use crate::registry::OperatorRegistry;
    pub use crate::variables::Variables;
    pub use crate::Error;
    pub use crate::FormulaObserver;
    pub use crate::ObserverHandle;
}

// ----- E R R O R S -------------------------------------------------------------------

/// The reasons evaluation of an expression stack may fail.
///
/// Failure is communicated to evaluating callers purely through an absent
/// result; these variants exist for the separate diagnostic path
/// ([`Calculator::report_errors`]). Note that pushing an operator symbol
/// unknown to the registry is *not* among them: that condition is absorbed
/// as a no-op push.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The walk reached for a value, but the stack held nothing at all
    #[error("expected a value")]
    EmptyStack,

    /// An operator reached for an operand the stack does not hold
    #[error("expected an operand for {0}")]
    InsufficientOperands(String),

    /// A variable was referenced before being given a value
    #[error("expected a value for variable {0}")]
    UnboundVariable(String),
}
