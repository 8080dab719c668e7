use super::*;

#[test]
fn clone_keeps_identity() {
    let h1 = Heap::new(vec![1, 2, 3]);
    let h2 = h1.clone();
    assert!(h1.ptr_eq(&h2));
    assert_eq!(h1.addr(), h2.addr());
}

#[test]
fn equal_payloads_have_distinct_identity() {
    let h1 = Heap::new("hello".to_string());
    let h2 = Heap::new("hello".to_string());
    assert_eq!(h1, h2);
    assert!(!h1.ptr_eq(&h2));
    assert_ne!(h1.addr(), h2.addr());
}

#[test]
fn content_inequality() {
    let h1 = Heap::new("hello".to_string());
    let h3 = Heap::new("world".to_string());
    assert_ne!(h1, h3);
    assert!(h1 < h3);
}
