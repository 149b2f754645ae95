use erasure::{category::SinglyLinked, prelude::*, ForwardList, ForwardNode};

struct Node<T> {
    item: T,
    next: Option<Box<Node<T>>>,
}

impl<T> ForwardNode for Node<T> {
    type Item = T;

    fn item(&self) -> &T {
        &self.item
    }

    fn next_link(&mut self) -> &mut Option<Box<Self>> {
        &mut self.next
    }
}

/// A minimal singly-linked list, in the spirit of `std::forward_list`.
struct ForwardVec<T> {
    head: Option<Box<Node<T>>>,
}

impl<T> ForwardList for ForwardVec<T> {
    type Node = Node<T>;

    fn head_link(&mut self) -> &mut Option<Box<Node<T>>> {
        &mut self.head
    }
}

impl<T> Erasable for ForwardVec<T> {
    type Category = SinglyLinked;
}

impl<T: Clone> ForwardVec<T> {
    fn new(items: &[T]) -> Self {
        let head = items.iter().rev().fold(None, |next, item| {
            Some(Box::new(Node {
                item: item.clone(),
                next,
            }))
        });
        Self { head }
    }

    fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::new();
        let mut link = &self.head;
        while let Some(node) = link {
            out.push(node.item.clone());
            link = &node.next;
        }
        out
    }
}

#[test]
fn empty() {
    let mut list = ForwardVec::<i32>::new(&[]);
    assert_eq!(erase(&mut list, &0), 0);
    assert_eq!(erase_if(&mut list, |_: &i32| true), 0);
    assert!(list.head.is_none());

    let mut list = ForwardVec::<String>::new(&[]);
    assert_eq!(erase_if(&mut list, |s: &String| s.is_empty()), 0);
}

#[test]
fn by_value() {
    let mut list = ForwardVec::new(&[1, 0, 2, 1, -3]);
    assert_eq!(erase(&mut list, &1), 2);
    assert_eq!(list.to_vec(), [0, 2, -3]);
}

#[test]
fn by_predicate() {
    let mut list = ForwardVec::new(&[1, 0, 2, 1, -3]);
    assert_eq!(erase_if(&mut list, |x: &i32| *x == 2), 1);
    assert_eq!(list.to_vec(), [1, 0, 1, -3]);
}

#[test]
fn no_match() {
    let mut list = ForwardVec::new(&["a", "b"]);
    assert_eq!(erase(&mut list, &"c"), 0);
    assert_eq!(list.to_vec(), ["a", "b"]);
}

#[test]
fn everything() {
    let mut list = ForwardVec::new(&[7; 5]);
    assert_eq!(erase(&mut list, &7), 5);
    assert!(list.head.is_none());
}

#[test]
fn fallible() {
    let mut list = ForwardVec::new(&[0, 1, 0, 2, 0]);
    let res = try_erase_if(&mut list, |x: &i32| if *x == 2 { Err("two") } else { Ok(*x == 0) });
    assert_eq!(res, Err(Interrupted::new(2, "two")));
    assert_eq!(list.to_vec(), [1, 2, 0]);
}
