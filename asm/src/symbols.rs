use arch::sym;
use indexmap::IndexMap;

use crate::error::Error;

/// First RAM address handed to user variables.
const VAR_BASE: u16 = 16;
/// Variables must stay below the screen map.
const VAR_LIMIT: u16 = 0x4000;

/// Address bindings for one assembly run: the predefined names, the
/// labels bound by the first pass, and the variables allocated by the
/// second. Lives exactly as long as one run.
#[derive(Debug)]
pub struct SymbolTable {
    table: IndexMap<String, u16>,
    next_var: u16,
}

impl SymbolTable {
    pub fn new() -> Self {
        let mut table = IndexMap::new();
        for (name, addr) in sym::PREDEF {
            table.insert(name.to_string(), *addr);
        }
        SymbolTable {
            table,
            next_var: VAR_BASE,
        }
    }

    /// Binds a label. Names are bound at most once per run: a predefined
    /// name or an already-bound label is rejected.
    pub fn bind(&mut self, name: &str, addr: u16) -> Result<(), Error> {
        if sym::is_predefined(name) {
            return Err(Error::ReservedSymbol(name.to_string()));
        }
        if self.table.contains_key(name) {
            return Err(Error::RedefinedLabel(name.to_string()));
        }
        self.table.insert(name.to_string(), addr);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    pub fn resolve(&self, name: &str) -> Option<u16> {
        self.table.get(name).copied()
    }

    /// Binds `name` to the next free variable slot. Callers check
    /// `contains` first; allocating a bound name would rebind it.
    pub fn allocate(&mut self, name: &str) -> Result<u16, Error> {
        if self.next_var >= VAR_LIMIT {
            return Err(Error::VariableSpace(name.to_string()));
        }
        let addr = self.next_var;
        self.table.insert(name.to_string(), addr);
        self.next_var += 1;
        Ok(addr)
    }
}
