use std::fmt;

// ----- T H E   O P E R A T I O N   V A R I A N T -------------------------------------

/// The closed set of things an expression stack can hold.
///
/// Each case is immutable once constructed, and owned exclusively by the
/// stack (or, for operator definitions, by the registry) holding it.
#[derive(Debug, Clone)]
pub enum Operation {
    /// A literal number
    Operand(f64),
    /// A reference, resolved against the variable environment at evaluation
    /// time — never cached
    Variable(String),
    /// A named literal (π, say) whose value was fixed when it was pushed
    Constant(String, f64),
    /// Symbol, evaluation function, display format. Consumes one operand
    Unary(String, UnaryFn, UnaryFormat),
    /// Symbol, evaluation function, display format. Consumes two operands;
    /// both functions receive the operand consumed *first* (i.e. the one
    /// pushed last) as their first argument
    Binary(String, BinaryFn, BinaryFormat),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Operand(value) => write!(f, "{value}"),
            Operation::Variable(name) => write!(f, "{name}"),
            Operation::Constant(name, _) => write!(f, "{name}"),
            Operation::Unary(symbol, _, _) => write!(f, "{symbol}"),
            Operation::Binary(symbol, _, _) => write!(f, "{symbol}"),
        }
    }
}

// ----- F U N C T I O N   P A Y L O A D S ---------------------------------------------

/// Evaluation function for a unary operator.
///
/// UnaryFn (and its three siblings below) need to be newtypes, rather than
/// type aliases, since we must implement the Debug-trait for them (to make
/// auto derive of the Debug-trait work for Operation).
#[derive(Clone, Copy)]
pub struct UnaryFn(pub fn(f64) -> f64);

/// Evaluation function for a binary operator
#[derive(Clone, Copy)]
pub struct BinaryFn(pub fn(f64, f64) -> f64);

/// Display formatting function for a unary operator
#[derive(Clone, Copy)]
pub struct UnaryFormat(pub fn(&str) -> String);

/// Display formatting function for a binary operator
#[derive(Clone, Copy)]
pub struct BinaryFormat(pub fn(&str, &str) -> String);

// Cannot autoderive the Debug trait
impl fmt::Debug for UnaryFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnaryFn")
    }
}

impl fmt::Debug for BinaryFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinaryFn")
    }
}

impl fmt::Debug for UnaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnaryFormat")
    }
}

impl fmt::Debug for BinaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinaryFormat")
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Operation::Operand(3.).to_string(), "3");
        assert_eq!(Operation::Operand(3.5).to_string(), "3.5");
        assert_eq!(Operation::Variable("M".to_string()).to_string(), "M");
        assert_eq!(
            Operation::Constant("π".to_string(), std::f64::consts::PI).to_string(),
            "π"
        );

        fn noop(x: f64) -> f64 {
            x
        }
        fn noop_format(x: &str) -> String {
            x.to_string()
        }
        let op = Operation::Unary("√".to_string(), UnaryFn(noop), UnaryFormat(noop_format));
        assert_eq!(op.to_string(), "√");
    }

    #[test]
    fn clones_are_independent() {
        let original = Operation::Variable("M".to_string());
        let copy = original.clone();
        drop(original);
        assert_eq!(copy.to_string(), "M");
    }
}
