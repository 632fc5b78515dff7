use super::*;
use crate::declarations::{Ancestor, ClassDeclaration, Declaration};
use crate::types::ValueType;

fn names(table: &MemberTable<'_>) -> Vec<String> {
    table.names().map(str::to_string).collect()
}

#[test]
fn test_empty_class_has_empty_table() {
    let class = ClassDeclaration::new("Empty");
    let table = MemberTableBuilder::new(&class).build();
    assert!(table.is_empty());
}

#[test]
fn test_own_declarations_grouped_by_name() {
    let class = ClassDeclaration::new("C")
        .with_member(Declaration::getter("C", "p", ValueType::String))
        .with_member(Declaration::setter("C", "p", ValueType::String))
        .with_member(Declaration::field("C", "q", ValueType::Number));

    let table = MemberTableBuilder::new(&class).build();

    assert_eq!(names(&table), vec!["p", "q"]);
    let p = table.get("p").unwrap();
    assert_eq!(p.len(), 2);
    assert!(p.entries().iter().all(|e| e.is_own()));
}

#[test]
fn test_nearest_ancestor_wins() {
    let class = ClassDeclaration::new("C")
        .with_ancestor(Ancestor::class(
            "B",
            vec![Declaration::field("B", "x", ValueType::String).make_abstract()],
        ))
        .with_ancestor(Ancestor::class(
            "A",
            vec![
                Declaration::field("A", "x", ValueType::Number).make_abstract(),
                Declaration::method("A", "m", ValueType::function(vec![], ValueType::Void))
                    .make_abstract(),
            ],
        ));

    let table = MemberTableBuilder::new(&class).build();

    let x = table.get("x").unwrap();
    assert_eq!(x.len(), 1);
    assert_eq!(x.entries()[0].ancestor(), Some("B"));
    assert_eq!(x.entries()[0].declaration.value_type, ValueType::String);
    assert_eq!(names(&table), vec!["x", "m"]);
}

#[test]
fn test_accessor_pair_from_one_ancestor_is_kept_together() {
    let class = ClassDeclaration::new("C").with_ancestor(Ancestor::class(
        "B",
        vec![
            Declaration::getter("B", "p", ValueType::String).make_abstract(),
            Declaration::setter("B", "p", ValueType::String).make_abstract(),
        ],
    ));

    let table = MemberTableBuilder::new(&class).build();
    assert_eq!(table.get("p").unwrap().inherited_abstract().count(), 2);
}

#[test]
fn test_concrete_ancestor_member_claims_name() {
    // B implements `x`, so A's abstract `x` is no longer an obligation.
    let class = ClassDeclaration::new("C")
        .with_ancestor(Ancestor::class(
            "B",
            vec![Declaration::field("B", "x", ValueType::String)],
        ))
        .with_ancestor(Ancestor::class(
            "A",
            vec![Declaration::field("A", "x", ValueType::String).make_abstract()],
        ));

    let table = MemberTableBuilder::new(&class).build();
    assert!(table.get("x").is_none());
}

#[test]
fn test_read_only_constraints_recorded() {
    let class = ClassDeclaration::new("C").with_ancestor(Ancestor::class(
        "B",
        vec![
            Declaration::field("B", "id", ValueType::String).make_readonly(),
            Declaration::getter("B", "size", ValueType::Number),
            Declaration::getter("B", "open", ValueType::Boolean),
            Declaration::setter("B", "open", ValueType::Boolean),
        ],
    ));

    let table = MemberTableBuilder::new(&class).build();

    assert_eq!(table.get("id").unwrap().inherited_constraints().count(), 1);
    assert_eq!(table.get("size").unwrap().inherited_constraints().count(), 1);
    assert!(table.get("open").is_none());
}

#[test]
fn test_own_declarations_join_inherited_groups_in_order() {
    let class = ClassDeclaration::new("C")
        .with_member(Declaration::field("C", "own_only", ValueType::Number))
        .with_member(Declaration::field("C", "x", ValueType::String))
        .with_ancestor(Ancestor::interface(
            "I",
            vec![Declaration::field("I", "x", ValueType::String)],
        ));

    let table = MemberTableBuilder::new(&class).build();

    assert_eq!(names(&table), vec!["x", "own_only"]);
    let x = table.get("x").unwrap();
    assert!(x.has_abstract());
    assert!(x.has_own_concrete());
    assert_eq!(x.own().count(), 1);
}

#[test]
fn test_duplicates_are_kept_for_the_checker() {
    let class = ClassDeclaration::new("C")
        .with_member(Declaration::getter("C", "num", ValueType::String))
        .with_member(Declaration::getter("C", "num", ValueType::String));

    let table = MemberTableBuilder::new(&class).build();
    assert_eq!(table.get("num").unwrap().own_concrete().count(), 2);
}
