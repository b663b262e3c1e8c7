use crate::internal::*;

// ----- T H E   E R R O R   R E P O R T E R -------------------------------------------

/// Why can the topmost expression on `stack` not be evaluated?
///
/// Same recursive grammar as the evaluator, but walking for the first
/// reason evaluation would fail rather than for a value: `Ok` carries the
/// remainder below the checked expression, `Err` the first error found.
/// A binary operator checks the subtree of its first consumed operand, and
/// only if that one is clean, the second. Only the single topmost
/// expression is inspected — pending expressions further down are the
/// formatter's business, not the reporter's.
pub fn check<'a>(
    stack: &'a [Operation],
    variables: &Variables,
) -> Result<&'a [Operation], Error> {
    let Some((operation, rest)) = stack.split_last() else {
        return Err(Error::EmptyStack);
    };

    match operation {
        Operation::Operand(_) => Ok(rest),
        Operation::Constant(_, _) => Ok(rest),
        Operation::Variable(name) => {
            if variables.get(name).is_some() {
                return Ok(rest);
            }
            Err(Error::UnboundVariable(name.to_string()))
        }
        Operation::Unary(symbol, _, _) => named(check(rest, variables), symbol),
        Operation::Binary(symbol, _, _) => {
            let rest = named(check(rest, variables), symbol)?;
            named(check(rest, variables), symbol)
        }
    }
}

// Exhaustion inside an expression means an operator reached for an operand
// the stack does not hold; name that operator in the complaint
fn named<'a>(
    outcome: Result<&'a [Operation], Error>,
    symbol: &str,
) -> Result<&'a [Operation], Error> {
    outcome.map_err(|error| match error {
        Error::EmptyStack => Error::InsufficientOperands(symbol.to_string()),
        other => other,
    })
}

// ----- T E S T S ---------------------------------------------------------------------
