use crate::*;

use rustc_hash::FxHashMap;

use std::cell::RefCell;

/// One frame of the lexical scope chain.
///
/// Variables map to `None` while declared but unset. Functions are stored
/// by declaration only: the frame holding a declaration is the frame it
/// closes over, so the pairing is rebuilt on lookup instead of being stored
/// (a stored `Rc` back to the owning frame would never be freed).
pub struct Environment {
    values: RefCell<FxHashMap<String, Option<Value>>>,
    functions: RefCell<FxHashMap<String, Rc<Function>>>,
    outer: Option<Rc<Environment>>,
}

/// A function declaration paired with the frame active at its declaration.
#[derive(Clone)]
pub struct Closure {
    pub function: Rc<Function>,
    pub env: Rc<Environment>,
}

impl Environment {
    pub fn new(outer: Option<Rc<Environment>>) -> Rc<Environment> {
        Rc::new(Environment {
            values: RefCell::new(FxHashMap::default()),
            functions: RefCell::new(FxHashMap::default()),
            outer,
        })
    }

    pub fn global() -> Rc<Environment> {
        Environment::new(None)
    }

    pub fn child(self: &Rc<Self>) -> Rc<Environment> {
        tracing::trace!("opening child scope");

        Environment::new(Some(Rc::clone(self)))
    }

    /// `None` when no frame in the chain declares `name`, `Some(None)` when
    /// the nearest declaration has no value yet.
    pub fn get(&self, name: &str) -> Option<Option<Value>> {
        let mut scope = Some(self);

        while let Some(env) = scope {
            if let Some(value) = env.values.borrow().get(name) {
                return Some(value.clone());
            }

            scope = env.outer.as_deref();
        }

        None
    }

    pub fn declare_local(&self, name: String, value: Option<Value>) {
        self.values.borrow_mut().insert(name, value);
    }

    /// Overwrites the nearest existing binding of `name`. Without one, `name`
    /// is declared in this frame.
    pub fn assign(&self, name: &str, value: Value) {
        let mut scope = Some(self);

        while let Some(env) = scope {
            if let Some(slot) = env.values.borrow_mut().get_mut(name) {
                *slot = Some(value);

                return;
            }

            scope = env.outer.as_deref();
        }

        tracing::trace!(name, "assignment declares a new binding");

        self.declare_local(name.to_owned(), Some(value));
    }

    pub fn declare_function(&self, function: Rc<Function>) {
        self.functions
            .borrow_mut()
            .insert(function.name.clone(), function);
    }

    pub fn get_function(self: &Rc<Self>, name: &str) -> Option<Closure> {
        let mut scope = Some(self);

        while let Some(env) = scope {
            if let Some(function) = env.functions.borrow().get(name) {
                return Some(Closure {
                    function: Rc::clone(function),
                    env: Rc::clone(env),
                });
            }

            scope = env.outer.as_ref();
        }

        None
    }
}
