use crate::ast::Literal;
use chainmap::ChainMap;

/// The single flat namespace mapping variable names to their current
/// value. The language has no block scoping, so one scope of the chain is
/// all that ever exists; bindings live until overwritten.
pub struct Environment {
    values: ChainMap<String, Literal>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            values: ChainMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<Literal> {
        self.values.get(&name.to_owned())
    }

    pub fn put(&mut self, name: &str, value: Literal) {
        self.values.insert(name.to_owned(), value);
    }
}
