use artisan::prelude::*;

#[derive(ToProps)]
struct NewWallet {
    address: String,
    balance: i64,
}

#[test]
fn test_facade_constructors() {
    assert_eq!(node("").render(), "()");
    assert_eq!(edge("tx").set_direction(Direction::Outgoing).render(), "-[tx]->");
    assert!(query_builder().is_empty());
}

#[test]
fn test_into_query_keeps_text() {
    let qb = query_builder().match_(["(a:Person)"]).return_(["a"]);
    let q = qb.into_query();
    assert_eq!(q.text(), qb.execute());
}

#[test]
fn test_from_builder() {
    let qb = query_builder().match_(["(a)"]);
    let expected = qb.execute();
    let q = CypherQuery::from(qb);
    assert_eq!(q.text(), expected);
}

#[test]
fn test_params_leave_text_alone() {
    let w = NewWallet { address: "0xabc".into(), balance: 3 };
    let q = query("CREATE (w:Wallet {address: $address, balance: $balance})")
        .params_from(&w)
        .param("extra", 1_i64);
    assert_eq!(q.text(), "CREATE (w:Wallet {address: $address, balance: $balance})");
}

#[test]
fn test_placeholders_are_literal_text() {
    let q = query_builder()
        .match_(["(w1:Wallet {address: {w1}})"])
        .execute();
    assert!(q.contains("{address: {w1}}"));
}

#[test]
fn test_alias_and_assign_reexported() {
    assert_eq!(alias("a", "b"), "a AS b");
    assert_eq!(assign("p", "(a)--(b)"), "p = (a)--(b)");
}

#[test]
fn test_query_constructor_in_prelude() {
    let q = query("MATCH (n) RETURN n");
    assert_eq!(q.text(), "MATCH (n) RETURN n");
}
