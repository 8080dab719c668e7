use super::*;

enum Nest {
    Leaf,
    Node(Box<Nest>),
}

fn build(depth: usize) -> Nest {
    let mut nest = Nest::Leaf;
    for _ in 0..depth {
        nest = Nest::Node(Box::new(nest));
    }
    nest
}

fn measure(nest: &Nest) -> usize {
    ensure_sufficient_stack(|| match nest {
        Nest::Leaf => 0,
        Nest::Node(inner) => measure(inner) + 1,
    })
}

fn dismantle(nest: Nest) {
    // Drop iteratively so the test does not overflow in the destructor.
    let mut current = nest;
    while let Nest::Node(inner) = current {
        current = *inner;
    }
}

#[test]
fn shallow_nesting_is_measured() {
    let nest = build(16);
    assert_eq!(measure(&nest), 16);
    dismantle(nest);
}

#[test]
fn deep_nesting_does_not_overflow() {
    let nest = build(200_000);
    assert_eq!(measure(&nest), 200_000);
    dismantle(nest);
}

#[test]
fn passes_results_through() {
    let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("unsupported"));
    assert_eq!(result, Err("unsupported"));
}
