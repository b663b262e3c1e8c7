use crate::internal::*;

// ----- T H E   F O R M A T T E R -----------------------------------------------------

/// The description of an empty stack
pub const BLANK: &str = " ";

/// Reconstruct the topmost complete expression on `stack` as text.
///
/// Same recursive grammar as the evaluator, building strings instead of
/// numbers: operands render as their literal text, variables and constants
/// as their names (a variable renders whether bound or not), and operators
/// apply their display format to the recursively rendered operand(s), in
/// the same consumption order the evaluator uses.
pub fn description_of(stack: &[Operation]) -> Option<(String, &[Operation])> {
    let (operation, rest) = stack.split_last()?;

    match operation {
        Operation::Operand(value) => Some((format!("{value}"), rest)),
        Operation::Variable(name) => Some((name.clone(), rest)),
        Operation::Constant(name, _) => Some((name.clone(), rest)),
        Operation::Unary(_, _, format) => {
            let (operand, rest) = description_of(rest)?;
            Some((format.0(&operand), rest))
        }
        Operation::Binary(_, _, format) => {
            let (first, rest) = description_of(rest)?;
            let (second, rest) = description_of(rest)?;
            Some((format.0(&first, &second), rest))
        }
    }
}

/// Render *all* independent top-level expressions resting on `stack`.
///
/// Unlike evaluation, description does not stop after one complete
/// expression: it keeps consuming until the stack is exhausted or a
/// malformed remainder fails to format. The expressions are collected
/// top-of-stack first, so the collection is reversed before joining —
/// pending expressions read left-to-right in the order they were pushed.
/// Never mutates the stack it reads, so it is safe to re-run on every
/// mutation, at any frequency.
pub fn describe(stack: &[Operation]) -> String {
    let mut pending = Vec::new();
    let mut remainder = stack;
    while let Some((expression, rest)) = description_of(remainder) {
        pending.push(expression);
        remainder = rest;
    }

    if pending.is_empty() {
        return BLANK.to_string();
    }

    pending.reverse();
    pending.join(", ")
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stack_is_blank() {
        assert_eq!(describe(&[]), " ");
    }

    #[test]
    fn pending_expressions_read_in_push_order() {
        let stack = [Operation::Operand(3.), Operation::Operand(4.)];
        assert_eq!(describe(&stack), "3, 4");
    }

    #[test]
    fn tie_break() {
        let registry = OperatorRegistry::new();
        let stack = vec![
            Operation::Operand(4.),
            Operation::Operand(3.),
            registry.get("-").unwrap(),
        ];
        assert_eq!(describe(&stack), "4 - 3");
    }

    #[test]
    fn nested_formats() {
        // Multiplication consumes the 5 first, then the 4 + 3 expression,
        // and renders its operands in that consumption order
        let registry = OperatorRegistry::new();
        let stack = vec![
            Operation::Operand(3.),
            Operation::Operand(4.),
            registry.get("+").unwrap(),
            Operation::Operand(5.),
            registry.get("*").unwrap(),
        ];
        assert_eq!(describe(&stack), "(5 * 4 + 3)");
    }

    #[test]
    fn unary_and_constant() {
        let registry = OperatorRegistry::new();
        let stack = vec![
            Operation::Constant("π".to_string(), std::f64::consts::PI),
            registry.get("cos").unwrap(),
        ];
        assert_eq!(describe(&stack), "cos(π)");
    }

    #[test]
    fn unbound_variables_still_render() {
        let registry = OperatorRegistry::new();
        let stack = vec![
            Operation::Operand(3.),
            Operation::Variable("M".to_string()),
            registry.get("+").unwrap(),
        ];
        assert_eq!(describe(&stack), "M + 3");
    }

    #[test]
    fn malformed_remainder_cuts_the_description_short() {
        // A lone operator at the bottom cannot be formatted; the complete
        // expressions above it still are
        let registry = OperatorRegistry::new();
        let stack = vec![registry.get("+").unwrap(), Operation::Operand(3.)];
        assert_eq!(describe(&stack), "3");
    }
}
