//! Erasure over singly-linked sequences.
//!
//! Without back links a node can only be removed through the link that points at it, so the strategy carries a
//! trailing cursor: the link owned by the last node it kept (initially the list's head). A matching node is cut out
//! by re-pointing that link at the node's successor, and the cursor stays put; otherwise the cursor moves on to the
//! kept node's own link.

use super::*;

/// A node of a singly-linked list.
pub trait ForwardNode: Sized {
    /// The type of element stored in the node.
    type Item;

    /// Borrow the node's element.
    fn item(&self) -> &Self::Item;

    /// The link to the node that follows this one.
    fn next_link(&mut self) -> &mut Option<Box<Self>>;
}

/// A singly-linked list made of boxed [`ForwardNode`]s.
///
/// # Examples
///
/// ```
/// use erasure::{erase_if, category::SinglyLinked, Erasable, ForwardList, ForwardNode};
///
/// struct Node {
///     value: u32,
///     next: Option<Box<Node>>,
/// }
///
/// impl ForwardNode for Node {
///     type Item = u32;
///     fn item(&self) -> &u32 {
///         &self.value
///     }
///     fn next_link(&mut self) -> &mut Option<Box<Node>> {
///         &mut self.next
///     }
/// }
///
/// #[derive(Default)]
/// struct Stack {
///     head: Option<Box<Node>>,
/// }
///
/// impl Stack {
///     fn push(&mut self, value: u32) {
///         let next = self.head.take();
///         self.head = Some(Box::new(Node { value, next }));
///     }
/// }
///
/// impl ForwardList for Stack {
///     type Node = Node;
///     fn head_link(&mut self) -> &mut Option<Box<Node>> {
///         &mut self.head
///     }
/// }
///
/// impl Erasable for Stack {
///     type Category = SinglyLinked;
/// }
///
/// let mut stack = Stack::default();
/// (1..=6).for_each(|x| stack.push(x));
/// assert_eq!(erase_if(&mut stack, |x: &u32| x % 2 == 0), 3);
/// ```
pub trait ForwardList {
    /// The node type.
    type Node: ForwardNode;

    /// The link to the first node.
    fn head_link(&mut self) -> &mut Option<Box<Self::Node>>;
}

pub(crate) fn erase_where<L, E>(
    list: &mut L,
    mut test: impl FnMut(&<L::Node as ForwardNode>::Item) -> Result<bool, E>,
) -> Result<usize, Interrupted<E>>
where
    L: ForwardList + ?Sized,
{
    let mut link = list.head_link();
    let mut removed = 0;
    loop {
        let hit = match link.as_deref() {
            Some(node) => test(node.item()),
            None => return Ok(removed),
        };
        match hit {
            Ok(true) => {
                if let Some(mut node) = link.take() {
                    *link = node.next_link().take();
                    removed += 1;
                }
            }
            Ok(false) => match link {
                Some(node) => link = node.next_link(),
                None => return Ok(removed),
            },
            Err(err) => return Err(Interrupted::new(removed, err)),
        }
    }
}

impl<L> EraseValue<L> for SinglyLinked
where
    L: ForwardList + ?Sized,
    <L::Node as ForwardNode>::Item: PartialEq,
{
    type Value = <L::Node as ForwardNode>::Item;

    fn erase_value(list: &mut L, value: &Self::Value) -> usize {
        unwrap_infallible(erase_where(list, |item| Ok::<_, Infallible>(item == value)))
    }
}

impl<L, F, R> EraseWhere<L, F> for SinglyLinked
where
    L: ForwardList + ?Sized,
    F: FnMut(&<L::Node as ForwardNode>::Item) -> R,
    R: Verdict,
{
    type Error = R::Error;

    fn erase_where(list: &mut L, mut pred: F) -> Result<usize, Interrupted<R::Error>> {
        erase_where(list, |item| pred(item).into_result())
    }
}
