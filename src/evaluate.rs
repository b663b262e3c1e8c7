use crate::internal::*;

// ----- T H E   E V A L U A T O R -----------------------------------------------------

/// Reduce the topmost complete expression on `stack` to a number.
///
/// Consumes from the top (the end of the slice) following the postfix
/// grammar, and returns the value together with the untouched remainder of
/// the stack. Failure of any sub-evaluation — an exhausted stack, or an
/// unbound variable — aborts the whole chain with `None`; there is no
/// partial or default substitution, and no panic path.
pub fn value_of<'a>(
    stack: &'a [Operation],
    variables: &Variables,
) -> Option<(f64, &'a [Operation])> {
    let (operation, rest) = stack.split_last()?;

    match operation {
        Operation::Operand(value) => Some((*value, rest)),
        Operation::Constant(_, value) => Some((*value, rest)),
        Operation::Variable(name) => Some((variables.get(name)?, rest)),
        Operation::Unary(_, f, _) => {
            let (operand, rest) = value_of(rest, variables)?;
            Some((f.0(operand), rest))
        }
        Operation::Binary(_, f, _) => {
            let (first, rest) = value_of(rest, variables)?;
            let (second, rest) = value_of(rest, variables)?;
            Some((f.0(first, second), rest))
        }
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    // Builds [4, 3, -] the way a caller pushing 4, then 3, then "-" would
    fn four_three_minus() -> Vec<Operation> {
        let registry = OperatorRegistry::new();
        vec![
            Operation::Operand(4.),
            Operation::Operand(3.),
            registry.get("-").unwrap(),
        ]
    }

    #[test]
    fn literals() {
        let variables = Variables::new();
        let stack = [Operation::Operand(3.)];
        let (value, rest) = value_of(&stack, &variables).unwrap();
        assert_eq!(value, 3.);
        assert!(rest.is_empty());

        let stack = [Operation::Constant("π".to_string(), std::f64::consts::PI)];
        let (value, rest) = value_of(&stack, &variables).unwrap();
        assert_eq!(value, std::f64::consts::PI);
        assert!(rest.is_empty());
    }

    #[test]
    fn tie_break() {
        // 4 3 - means 4 - 3: the operand nearer the operator is subtrahend
        let variables = Variables::new();
        let stack = four_three_minus();
        let (value, rest) = value_of(&stack, &variables).unwrap();
        assert_eq!(value, 1.);
        assert!(rest.is_empty());
    }

    #[test]
    fn only_the_topmost_expression() {
        // Operations below a complete expression are left untouched
        let variables = Variables::new();
        let mut stack = vec![Operation::Operand(55.), Operation::Operand(59.)];
        stack.extend(four_three_minus());

        let (value, rest) = value_of(&stack, &variables).unwrap();
        assert_eq!(value, 1.);
        assert_eq!(rest.len(), 2);
    }

    #[test]
    fn nesting() {
        // 2 16 √ * reads as (2 * √16) = 8
        let registry = OperatorRegistry::new();
        let variables = Variables::new();
        let stack = vec![
            Operation::Operand(2.),
            Operation::Operand(16.),
            registry.get("√").unwrap(),
            registry.get("*").unwrap(),
        ];
        let (value, rest) = value_of(&stack, &variables).unwrap();
        assert_float_eq!(value, 8., abs <= 1e-15);
        assert!(rest.is_empty());
    }

    #[test]
    fn variables_resolve_at_evaluation_time() {
        let mut variables = Variables::new();
        let stack = [Operation::Variable("M".to_string())];

        // Unbound: the whole evaluation is absent
        assert!(value_of(&stack, &variables).is_none());

        // Bound later: the same stack evaluates, no re-push needed
        variables.bind("M", 5.);
        assert_eq!(value_of(&stack, &variables).map(|(v, _)| v), Some(5.));

        // And a rebinding changes the result
        variables.bind("M", 7.);
        assert_eq!(value_of(&stack, &variables).map(|(v, _)| v), Some(7.));
    }

    #[test]
    fn failure_aborts_the_whole_chain() {
        let registry = OperatorRegistry::new();
        let variables = Variables::new();

        // 3 M + with M unbound: no partial result
        let stack = vec![
            Operation::Operand(3.),
            Operation::Variable("M".to_string()),
            registry.get("+").unwrap(),
        ];
        assert!(value_of(&stack, &variables).is_none());

        // A lone operator has nothing to consume
        let stack = [registry.get("√").unwrap()];
        assert!(value_of(&stack, &variables).is_none());

        // And so does the empty stack
        assert!(value_of(&[], &variables).is_none());
    }
}
