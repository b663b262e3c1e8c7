use crate::internal::*;
use std::fmt;
use uuid::Uuid;

// ----- O B S E R V E R S -------------------------------------------------------------

/// Implemented by collaborators (typically a display layer) wanting to hear
/// about every change to the engine's description.
pub trait FormulaObserver {
    /// Called synchronously, on the mutating call stack, after every stack
    /// or variable-environment mutation. `formula` is `None` when the stack
    /// is empty — the blank placeholder case. Implementations must only
    /// read: mutating the calculator from inside the callback would recurse
    /// into another notification.
    fn formula_changed(&self, formula: Option<&str>);
}

/// Identification of a single observer registration
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub struct ObserverHandle(Uuid);

impl ObserverHandle {
    pub fn new() -> Self {
        ObserverHandle(Uuid::new_v4())
    }
}

impl Default for ObserverHandle {
    fn default() -> Self {
        ObserverHandle(Uuid::new_v4())
    }
}

/// Fans a fresh description out to every registered observer. Observers are
/// registered once and never removed — no unregistration operation exists.
#[derive(Default)]
pub struct ObserverHub {
    observers: Vec<(ObserverHandle, Rc<dyn FormulaObserver>)>,
}

impl ObserverHub {
    pub fn register(&mut self, observer: Rc<dyn FormulaObserver>) -> ObserverHandle {
        let handle = ObserverHandle::new();
        self.observers.push((handle, observer));
        handle
    }

    pub fn notify(&self, formula: Option<&str>) {
        for (_, observer) in &self.observers {
            observer.formula_changed(formula);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }
}

// Cannot autoderive the Debug trait for the dyn observer handles
impl fmt::Debug for ObserverHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObserverHub({} observers)", self.observers.len())
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recording {
        formulas: RefCell<Vec<Option<String>>>,
    }

    impl FormulaObserver for Recording {
        fn formula_changed(&self, formula: Option<&str>) {
            self.formulas.borrow_mut().push(formula.map(String::from));
        }
    }

    #[test]
    fn every_observer_hears_every_notification() {
        let mut hub = ObserverHub::default();
        let first = Rc::new(Recording::default());
        let second = Rc::new(Recording::default());

        let a = hub.register(first.clone());
        let b = hub.register(second.clone());
        assert_ne!(a, b);
        assert_eq!(hub.len(), 2);

        hub.notify(Some("4 - 3"));
        hub.notify(None);

        for recorder in [first, second] {
            let heard = recorder.formulas.borrow();
            assert_eq!(*heard, vec![Some("4 - 3".to_string()), None]);
        }
    }

    #[test]
    fn notifying_nobody_is_fine() {
        let hub = ObserverHub::default();
        hub.notify(Some("3"));
    }
}
