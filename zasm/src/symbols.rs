use crate::section::Section;
use std::collections::HashMap;

/// Stable handle to a symbol table entry.
///
/// Entries are never removed, so a `SymbolId` taken during parsing stays
/// valid for the table's whole lifetime; expressions and relocation entries
/// hold these instead of references.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SymbolId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolType {
    Undef,
    Func,
    Object,
    Section,
    Macro,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SymbolEnt {
    pub name: String,
    pub sym_type: SymbolType,
    pub sec: Section,
    pub value: i32,
}

/// Name-keyed table of symbols with forward-reference semantics: referencing
/// an unknown name inserts an `Undef` entry whose first definition fills in
/// the type, section and value.
pub struct SymbolTable {
    names: HashMap<String, SymbolId>,
    entries: Vec<SymbolEnt>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable {
            names: HashMap::with_capacity(128),
            entries: Vec::new(),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.names.get(name).copied()
    }

    pub fn get(&self, id: SymbolId) -> &SymbolEnt {
        &self.entries[id.0]
    }

    /// Returns the entry for `name`, inserting an undefined one if the name
    /// has not been seen before.
    pub fn intern(&mut self, name: &str) -> SymbolId {
        if let Some(id) = self.lookup(name) {
            return id;
        }
        self.insert(name, SymbolType::Undef, Section::Undef, 0)
    }

    /// Defines `name`. An existing `Undef` entry is overwritten in place (a
    /// forward reference becoming defined); a second definition of anything
    /// else returns `None`.
    pub fn define(
        &mut self,
        name: &str,
        sym_type: SymbolType,
        sec: Section,
        value: i32,
    ) -> Option<SymbolId> {
        match self.lookup(name) {
            Some(id) => {
                let ent = &mut self.entries[id.0];
                if ent.sym_type != SymbolType::Undef {
                    return None;
                }
                ent.sym_type = sym_type;
                ent.sec = sec;
                ent.value = value;
                Some(id)
            }
            None => Some(self.insert(name, sym_type, sec, value)),
        }
    }

    fn insert(
        &mut self,
        name: &str,
        sym_type: SymbolType,
        sec: Section,
        value: i32,
    ) -> SymbolId {
        let id = SymbolId(self.entries.len());
        self.entries.push(SymbolEnt {
            name: name.to_owned(),
            sym_type,
            sec,
            value,
        });
        self.names.insert(name.to_owned(), id);
        id
    }
}

impl Default for SymbolTable {
    fn default() -> SymbolTable {
        SymbolTable::new()
    }
}
