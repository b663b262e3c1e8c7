use crate::internal::*;

// ----- B U I L T I N   O P E R A T O R S ---------------------------------------------

// Install new builtin operators by adding them in the function and
// `BUILTIN_OPERATORS` blocks below

/// Blueprint for a builtin operator: the arity-tagged pair of its
/// evaluation function and its display formatting function
#[derive(Clone, Copy)]
pub enum Builtin {
    Unary(fn(f64) -> f64, fn(&str) -> String),
    Binary(fn(f64, f64) -> f64, fn(&str, &str) -> String),
}

// The binary functions receive the operand consumed first (pushed last) as
// their first argument, so subtraction and division must apply in reversed
// order: `3 4 -` reads as `4 - 3`

fn add(a: f64, b: f64) -> f64 {
    a + b
}

fn add_format(a: &str, b: &str) -> String {
    format!("{a} + {b}")
}

fn subtract(a: f64, b: f64) -> f64 {
    b - a
}

fn subtract_format(a: &str, b: &str) -> String {
    format!("{b} - {a}")
}

fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

fn multiply_format(a: &str, b: &str) -> String {
    format!("({a} * {b})")
}

fn divide(a: f64, b: f64) -> f64 {
    b / a
}

fn divide_format(a: &str, b: &str) -> String {
    format!("({b}) / ({a})")
}

fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

fn sqrt_format(x: &str) -> String {
    format!("√({x})")
}

fn square(x: f64) -> f64 {
    x.powi(2)
}

fn square_format(x: &str) -> String {
    format!("{x}²")
}

fn sin(x: f64) -> f64 {
    x.sin()
}

fn sin_format(x: &str) -> String {
    format!("sin({x})")
}

fn cos(x: f64) -> f64 {
    x.cos()
}

fn cos_format(x: &str) -> String {
    format!("cos({x})")
}

fn negate(x: f64) -> f64 {
    -x
}

fn negate_format(x: &str) -> String {
    format!("- {x}")
}

#[rustfmt::skip]
pub const BUILTIN_OPERATORS: [(&str, Builtin); 9] = [
    ("+",    Builtin::Binary(add,      add_format)),
    ("-",    Builtin::Binary(subtract, subtract_format)),
    ("*",    Builtin::Binary(multiply, multiply_format)),
    ("/",    Builtin::Binary(divide,   divide_format)),
    ("√",    Builtin::Unary(sqrt,      sqrt_format)),
    ("²",    Builtin::Unary(square,    square_format)),
    ("sin",  Builtin::Unary(sin,       sin_format)),
    ("cos",  Builtin::Unary(cos,       cos_format)),
    ("ᐩ/-",  Builtin::Unary(negate,    negate_format)),
];
// A BTreeMap would have been a better choice for BUILTIN_OPERATORS, except
// for the annoying fact that it cannot be compile-time const-constructed.

#[rustfmt::skip]
pub const BUILTIN_CONSTANTS: [(&str, f64); 1] = [
    ("π",    std::f64::consts::PI),
];

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn reversed_operand_order() {
        // The first argument is the operand nearest the operator, so
        // subtraction and division compute second-minus-first
        assert_eq!(subtract(3., 4.), 1.);
        assert_eq!(divide(2., 8.), 4.);
        assert_eq!(subtract_format("3", "4"), "4 - 3");
        assert_eq!(divide_format("2", "8"), "(8) / (2)");
    }

    #[test]
    fn commutative_operators() {
        assert_eq!(add(3., 4.), 7.);
        assert_eq!(multiply(3., 4.), 12.);
        assert_eq!(add_format("4", "3"), "4 + 3");
        assert_eq!(multiply_format("4", "3"), "(4 * 3)");
    }

    #[test]
    fn unary_operators() {
        assert_eq!(sqrt(16.), 4.);
        assert_eq!(square(3.), 9.);
        assert_eq!(negate(5.), -5.);
        assert_float_eq!(sin(std::f64::consts::FRAC_PI_2), 1., abs <= 1e-15);
        assert_float_eq!(cos(std::f64::consts::PI), -1., abs <= 1e-15);

        assert_eq!(sqrt_format("16"), "√(16)");
        assert_eq!(square_format("3"), "3²");
        assert_eq!(sin_format("x"), "sin(x)");
        assert_eq!(cos_format("x"), "cos(x)");
        assert_eq!(negate_format("5"), "- 5");
    }

    #[test]
    fn constants() {
        assert_eq!(BUILTIN_CONSTANTS[0].0, "π");
        assert_float_eq!(BUILTIN_CONSTANTS[0].1, 3.14159265358979, abs <= 1e-14);
    }
}
