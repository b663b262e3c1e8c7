use crate::internal::*;
use std::fmt;

// ----- T H E   C A L C U L A T O R ---------------------------------------------------

/// A reverse Polish expression engine.
///
/// Owns the operand stack, the operator registry, the constant table, the
/// variable environment and the observer list. The stack is the sole
/// authoritative state: the numeric result, the description and the error
/// diagnosis are all derived from it on demand, so they cannot diverge.
///
/// Every mutating operation ends with an explicit notification step, and
/// every push or removal returns a fresh top-level evaluation, so a driving
/// caller always holds the current result:
///
/// ```
/// use rpncalc::prelude::*;
///
/// let mut calculator = Calculator::new();
/// calculator.push_operand(3.);
/// assert_eq!(calculator.push_operand(4.), Some(4.));
/// assert_eq!(calculator.push_operation("+"), Some(7.));
/// ```
#[derive(Debug, Default)]
pub struct Calculator {
    registry: OperatorRegistry,
    constants: BTreeMap<String, f64>,
    stack: Vec<Operation>,
    variables: Variables,
    observers: ObserverHub,
}

impl Calculator {
    /// `new` differs from `default` only by knowing the builtin operators
    /// and constants
    pub fn new() -> Calculator {
        let mut calculator = Calculator {
            registry: OperatorRegistry::new(),
            ..Calculator::default()
        };
        for (name, value) in BUILTIN_CONSTANTS {
            calculator.constants.insert(name.to_string(), value);
        }
        calculator
    }

    // ----- P U S H I N G ---------------------------------------------------------

    /// Append a literal operand, then evaluate
    pub fn push_operand(&mut self, value: f64) -> Option<f64> {
        self.stack.push(Operation::Operand(value));
        self.notify();
        self.evaluate()
    }

    /// Append a variable reference, then evaluate. The reference resolves
    /// against the current binding on every evaluation
    pub fn push_variable(&mut self, name: &str) -> Option<f64> {
        self.stack.push(Operation::Variable(name.to_string()));
        self.notify();
        self.evaluate()
    }

    /// Append the named constant, then evaluate. An unknown constant name
    /// leaves the stack unchanged
    pub fn push_constant(&mut self, name: &str) -> Option<f64> {
        match self.constants.get(name) {
            Some(&value) => {
                self.stack.push(Operation::Constant(name.to_string(), value));
                self.notify();
            }
            None => debug!("absorbing unknown constant {name}"),
        }
        self.evaluate()
    }

    /// Append the operator registered for `symbol`, then evaluate. An
    /// unknown symbol leaves the stack unchanged — deliberately not an
    /// error, the evaluation result is still returned
    pub fn push_operation(&mut self, symbol: &str) -> Option<f64> {
        match self.registry.get(symbol) {
            Some(operation) => {
                self.stack.push(operation);
                self.notify();
            }
            None => debug!("absorbing unknown operator {symbol}"),
        }
        self.evaluate()
    }

    /// Pop the top of the stack, then evaluate the remainder. `None` on an
    /// empty stack
    pub fn remove_last_element(&mut self) -> Option<f64> {
        self.stack.pop()?;
        self.notify();
        self.evaluate()
    }

    // ----- D E R I V E D   S T A T E ---------------------------------------------

    /// The value of the topmost complete expression. Whatever the recursion
    /// does not consume is left on the stack and is not part of the result.
    /// Absence means the expression cannot currently be evaluated — ask
    /// [`Calculator::report_errors`] why
    pub fn evaluate(&self) -> Option<f64> {
        let (result, remainder) = value_of(&self.stack, &self.variables)?;
        trace!(
            "evaluated to {result}, remaining stack [{}]",
            remainder
                .iter()
                .map(|operation| operation.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        );
        Some(result)
    }

    /// A textual rendition of every pending expression on the stack, in
    /// push order, joined with `", "`. A blank single space for the empty
    /// stack
    pub fn description(&self) -> String {
        describe(&self.stack)
    }

    /// The first reason the topmost expression cannot be evaluated, or
    /// `None` if it can. Never invoked automatically — this is the separate
    /// diagnostic path for callers who just saw an absent result
    pub fn report_errors(&self) -> Option<String> {
        check(&self.stack, &self.variables)
            .err()
            .map(|reason| reason.to_string())
    }

    // ----- V A R I A B L E S -----------------------------------------------------

    /// Bind `name`, returning any previous binding. Takes effect on the
    /// next evaluation of any stack referencing the name
    pub fn bind(&mut self, name: &str, value: f64) -> Option<f64> {
        let previous = self.variables.bind(name, value);
        self.notify();
        previous
    }

    /// Remove the binding for `name`, if any
    pub fn unbind(&mut self, name: &str) -> Option<f64> {
        let previous = self.variables.unbind(name)?;
        self.notify();
        Some(previous)
    }

    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name)
    }

    // ----- H O U S E K E E P I N G -----------------------------------------------

    /// Empty the stack *and* the variable environment. Idempotent
    pub fn clear(&mut self) {
        self.stack.clear();
        self.variables.clear();
        self.notify();
    }

    /// Teach the engine a unary operator (the registry's only extension
    /// surface, together with its binary sibling)
    pub fn learn_unary(&mut self, symbol: &str, f: fn(f64) -> f64, format: fn(&str) -> String) {
        self.registry.learn_unary(symbol, f, format);
    }

    /// Teach the engine a binary operator. `f` and `format` receive the
    /// operand consumed first as their first argument
    pub fn learn_binary(
        &mut self,
        symbol: &str,
        f: fn(f64, f64) -> f64,
        format: fn(&str, &str) -> String,
    ) {
        self.registry.learn_binary(symbol, f, format);
    }

    pub fn has_operator(&self, symbol: &str) -> bool {
        self.registry.contains(symbol)
    }

    pub fn has_constant(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }

    /// Register an observer of description changes. Observers are held for
    /// the lifetime of the engine; there is no unregistration
    pub fn register_observer(&mut self, observer: Rc<dyn FormulaObserver>) -> ObserverHandle {
        self.observers.register(observer)
    }

    // Every mutating method above ends here: re-run the formatter and hand
    // the outcome to the observers, synchronously
    fn notify(&self) {
        if self.stack.is_empty() {
            self.observers.notify(None);
            return;
        }
        let description = self.description();
        self.observers.notify(Some(&description));
    }
}

impl fmt::Display for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

// ----- T E S T S ---------------------------------------------------------------------
