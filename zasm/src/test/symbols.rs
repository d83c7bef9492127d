use crate::section::Section;
use crate::symbols::{SymbolTable, SymbolType};

#[test]
fn forward_reference_becomes_defined_in_place() {
    let mut table = SymbolTable::new();
    let id = table.intern("loop");
    assert_eq!(table.get(id).sym_type, SymbolType::Undef);

    let defined = table
        .define("loop", SymbolType::Object, Section::Text, 8)
        .unwrap();
    assert_eq!(defined, id);

    let ent = table.get(id);
    assert_eq!(ent.sym_type, SymbolType::Object);
    assert_eq!(ent.sec, Section::Text);
    assert_eq!(ent.value, 8);
}

#[test]
fn second_definition_is_rejected() {
    let mut table = SymbolTable::new();
    table
        .define("twice", SymbolType::Object, Section::Abs, 1)
        .unwrap();
    assert!(table
        .define("twice", SymbolType::Object, Section::Abs, 2)
        .is_none());

    let id = table.lookup("twice").unwrap();
    assert_eq!(table.get(id).value, 1);
}

#[test]
fn interning_twice_returns_the_same_entry() {
    let mut table = SymbolTable::new();
    assert_eq!(table.intern("x"), table.intern("x"));
}

#[test]
fn ids_stay_stable_as_the_table_grows() {
    let mut table = SymbolTable::new();
    let id = table
        .define("first", SymbolType::Object, Section::Abs, 1)
        .unwrap();

    for i in 0..200 {
        table.intern(&format!("sym{}", i));
    }

    assert_eq!(table.lookup("first"), Some(id));
    assert_eq!(table.get(id).name, "first");
    assert_eq!(table.get(id).value, 1);
}

#[test]
fn names_are_case_sensitive() {
    let mut table = SymbolTable::new();
    assert_ne!(table.intern("Foo"), table.intern("foo"));
}
