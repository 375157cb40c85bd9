use artisan_core::builder::{alias, assign, Layout, QueryBuilder};
use artisan_core::error::ArtisanError;
use artisan_core::pattern::{Direction, GraphEdge, GraphNode, Hops};

/// Bodies of each clause, trimmed, in order.
fn bodies(query: &str) -> Vec<String> {
    let keywords = ["MATCH", "OPTIONAL MATCH", "WHERE", "WITH", "RETURN", "ORDER BY", "SKIP", "LIMIT"];
    let mut out: Vec<String> = Vec::new();
    let mut current: Option<String> = None;
    for line in query.lines() {
        let trimmed = line.trim();
        if keywords.contains(&trimmed) {
            if let Some(body) = current.take() {
                out.push(body.trim().to_string());
            }
            current = Some(String::new());
        } else if let Some(body) = current.as_mut() {
            body.push_str(trimmed);
            body.push('\n');
        }
    }
    if let Some(body) = current {
        out.push(body.trim().to_string());
    }
    out
}

#[test]
fn test_empty_builder() {
    let qb = QueryBuilder::new();
    assert_eq!(qb.execute(), "");
    assert!(qb.is_empty());
}

#[test]
fn test_golden_layout() {
    let q = QueryBuilder::new()
        .match_(["(a:Person)"])
        .where_("a.from = \"Sweden\"")
        .return_(["a"])
        .execute();
    assert_eq!(
        q,
        "\n\t\tMATCH \n\t\t\t(a:Person)\n\t\tWHERE \n\t\t\ta.from = \"Sweden\"\n\t\tRETURN \n\t\t\ta"
    );
}

#[test]
fn test_end_to_end_with_rendered_node() {
    let q = QueryBuilder::new()
        .match_([GraphNode::new("a").add_labels(["Person"]).render()])
        .where_("a.from = \"Sweden\"")
        .return_(["a"])
        .execute();
    assert_eq!(bodies(&q), vec!["(a:Person)", "a.from = \"Sweden\"", "a"]);
}

#[test]
fn test_clause_order_preserved() {
    let q = QueryBuilder::new()
        .match_(["(n)"])
        .where_("n.x > 1")
        .return_(["n"])
        .execute();
    let m = q.find("MATCH").unwrap();
    let w = q.find("WHERE").unwrap();
    let r = q.find("RETURN").unwrap();
    assert!(m < w && w < r);
    assert_eq!(q.matches("MATCH").count(), 1);
    assert_eq!(q.matches("WHERE").count(), 1);
    assert_eq!(q.matches("RETURN").count(), 1);
}

#[test]
fn test_no_ordering_rules_enforced() {
    let q = QueryBuilder::new().where_("x").match_(["(a)"]).where_("y").execute();
    assert!(q.find("WHERE").unwrap() < q.find("MATCH").unwrap());
    assert_eq!(q.matches("WHERE").count(), 2);
}

#[test]
fn test_match_multiple_patterns() {
    let q = QueryBuilder::new().match_(["(w1:Wallet)", "(w2:Wallet)"]).execute();
    assert_eq!(q, "\n\t\tMATCH \n\t\t\t(w1:Wallet),\n\t\t\t(w2:Wallet)");
}

#[test]
fn test_match_accepts_owned_strings() {
    let patterns = vec![
        GraphNode::new("a").render(),
        assign("p", "shortestPath((a)-[*]-(b))"),
    ];
    let q = QueryBuilder::new().match_(&patterns).execute();
    assert!(q.contains("(a),\n\t\t\tp = shortestPath((a)-[*]-(b))"));
}

#[test]
fn test_optional_match() {
    let q = QueryBuilder::new()
        .match_(["(a)"])
        .optional_match(["(a)-[:KNOWS]->(b)"])
        .execute();
    assert!(q.ends_with("\n\t\tOPTIONAL MATCH \n\t\t\t(a)-[:KNOWS]->(b)"));
}

#[test]
fn test_with_and_return_join() {
    let q = QueryBuilder::new()
        .with(["p", "w1", alias("w2.address", "recipient").as_str()])
        .return_(["p", "w1", "length(p)"])
        .execute();
    assert_eq!(bodies(&q), vec!["p, w1, w2.address AS recipient", "p, w1, length(p)"]);
}

#[test]
fn test_order_by_skip_limit() {
    let q = QueryBuilder::new()
        .order_by("n.name")
        .order_by_desc("n.age")
        .skip(5)
        .limit(20)
        .execute();
    assert_eq!(
        q,
        "\n\t\tORDER BY \n\t\t\tn.name\n\t\tORDER BY \n\t\t\tn.age DESC\n\t\tSKIP \n\t\t\t5\n\t\tLIMIT \n\t\t\t20"
    );
}

#[test]
fn test_execute_idempotent() {
    let qb = QueryBuilder::new().match_(["(a)"]).return_(["a"]);
    assert_eq!(qb.execute(), qb.execute());
}

#[test]
fn test_builder_immutable_and_branchable() {
    let base = QueryBuilder::new().match_(["(a)"]);
    let before = base.execute();

    let left = base.return_(["a"]);
    let right = base.where_("a.x = 1").return_(["a.x"]);

    assert_eq!(base.execute(), before);
    assert_eq!(base.clause_count(), 1);
    assert_eq!(left.clause_count(), 2);
    assert_eq!(right.clause_count(), 3);
    assert!(left.execute().starts_with(&before));
    assert!(right.execute().starts_with(&before));
    assert!(!left.execute().contains("WHERE"));
}

#[test]
fn test_extend_after_execute() {
    let qb = QueryBuilder::new().match_(["(a)"]);
    let first = qb.execute();
    let extended = qb.limit(1).execute();
    assert!(extended.starts_with(&first));
    assert!(extended.ends_with("LIMIT \n\t\t\t1"));
}

#[test]
fn test_try_execute_always_ok() {
    let qb = QueryBuilder::new().where_("not valid cypher at all (");
    assert_eq!(qb.try_execute().unwrap(), qb.execute());
}

#[test]
fn test_execute_error_message() {
    assert_eq!(ArtisanError::Execute.to_string(), "failed to execute query");
}

#[test]
fn test_flat_layout() {
    let q = QueryBuilder::with_layout(Layout::flat())
        .match_(["(a)", "(b)"])
        .return_(["a", "b"])
        .execute();
    assert_eq!(q, "\nMATCH \n(a),\n(b)\nRETURN \na, b");
}

#[test]
fn test_custom_layout_carried_through_chain() {
    let layout = Layout { clause_indent: "  ".into(), body_indent: "    ".into() };
    let qb = QueryBuilder::with_layout(layout.clone()).match_(["(a)"]).limit(3);
    assert_eq!(qb.layout(), &layout);
    assert_eq!(qb.execute(), "\n  MATCH \n    (a)\n  LIMIT \n    3");
}

#[test]
fn test_alias_and_assign() {
    assert_eq!(alias("count(n)", "total"), "count(n) AS total");
    assert_eq!(assign("p", "(a)-[*]-(b)"), "p = (a)-[*]-(b)");
}

#[test]
fn test_wallet_path_query() {
    let w1 = GraphNode::new("w1").add_label("Wallet").add_property("address", "0xabc");
    let w2 = GraphNode::new("w2").add_label("Wallet");
    let tx = GraphEdge::new("tx").add_label("SENT").hops(Hops::Between(1, 3)).set_direction(Direction::Outgoing);
    let path = assign("p", tx.relationship(&GraphNode::new("w1"), &GraphNode::new("w2")));

    let q = QueryBuilder::new()
        .match_([w1.render(), w2.render(), path])
        .with(["p", "w1", "w2", alias("w2.address", "recipient").as_str()])
        .return_(["p", "w1", "w2", "length(p)"])
        .order_by_desc("length(p)")
        .limit(20)
        .execute();

    assert_eq!(
        bodies(&q),
        vec![
            "(w1:Wallet {address: '0xabc'}),\n(w2:Wallet),\np = (w1)-[tx:SENT*1..3]->(w2)",
            "p, w1, w2, w2.address AS recipient",
            "p, w1, w2, length(p)",
            "length(p) DESC",
            "20",
        ]
    );
}
