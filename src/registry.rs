use crate::internal::*;

// ----- T H E   O P E R A T O R   R E G I S T R Y -------------------------------------

/// Maps an operator symbol to its ready-to-push definition.
///
/// Populated once at construction with the builtin set, and effectively
/// read-only afterwards — unless a caller extends it through the `learn`
/// methods, where the last registration for a symbol wins. No collision
/// checks are made.
#[derive(Debug, Default, Clone)]
pub struct OperatorRegistry {
    operators: BTreeMap<String, Operation>,
}

impl OperatorRegistry {
    /// `new` differs from `default` only by knowing the builtin operator set
    pub fn new() -> OperatorRegistry {
        let mut registry = OperatorRegistry::default();
        for (symbol, definition) in BUILTIN_OPERATORS {
            match definition {
                Builtin::Unary(f, format) => registry.learn_unary(symbol, f, format),
                Builtin::Binary(f, format) => registry.learn_binary(symbol, f, format),
            }
        }
        registry
    }

    /// Register (or overwrite) the definition of the unary operator `symbol`
    pub fn learn_unary(&mut self, symbol: &str, f: fn(f64) -> f64, format: fn(&str) -> String) {
        self.operators.insert(
            symbol.to_string(),
            Operation::Unary(symbol.to_string(), UnaryFn(f), UnaryFormat(format)),
        );
    }

    /// Register (or overwrite) the definition of the binary operator `symbol`.
    /// `f` and `format` receive the operand consumed first as their first argument
    pub fn learn_binary(
        &mut self,
        symbol: &str,
        f: fn(f64, f64) -> f64,
        format: fn(&str, &str) -> String,
    ) {
        self.operators.insert(
            symbol.to_string(),
            Operation::Binary(symbol.to_string(), BinaryFn(f), BinaryFormat(format)),
        );
    }

    /// A clone of the definition registered for `symbol`. Absence is not an
    /// error: callers absorb unknown symbols as no-ops
    pub fn get(&self, symbol: &str) -> Option<Operation> {
        self.operators.get(symbol).cloned()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.operators.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

// ----- T E S T S ---------------------------------------------------------------------
