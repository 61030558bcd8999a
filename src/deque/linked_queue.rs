use crate::error::{EmptyContainerError, Result};
use crate::linear_list::{ForwardList, Iter, IterMut, IterOwned};

use std::fmt;
use std::iter::FromIterator;

/// A FIFO queue backed by a singly-linked chain of nodes.
///
/// Values are enqueued at the end and dequeued from the front. The queue does
/// no locking of its own: mutation needs `&mut self`, and it is `Send`/`Sync`
/// only when `T` is, so a queue shared between threads has to be wrapped in
/// the caller's own synchronisation.
pub struct LinkedQueue<T>(ForwardList<T>);

impl<T> LinkedQueue<T> {
    pub fn new() -> Self {
        Self(ForwardList::new())
    }

    /// Builds a queue holding `items` in order. `None` gives an empty queue.
    pub fn from_sequence<I>(items: Option<I>) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        match items {
            Some(items) => items.into_iter().collect(),
            None => {
                tracing::trace!("no sequence given, building an empty queue");
                Self::new()
            }
        }
    }

    /// Deep copy of `other`, or an empty queue when there is nothing to copy.
    pub fn copy_from(other: Option<&Self>) -> Self
    where
        T: Clone,
    {
        match other {
            Some(other) => other.clone(),
            None => Self::new(),
        }
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn front(&self) -> Result<&T> {
        self.0.front().ok_or_else(|| {
            tracing::debug!("front requested from an empty queue");
            EmptyContainerError
        })
    }

    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.0.front_mut().ok_or_else(|| {
            tracing::debug!("front requested from an empty queue");
            EmptyContainerError
        })
    }

    pub fn back(&self) -> Option<&T> {
        self.0.back()
    }

    pub fn enqueue(&mut self, elem: T) {
        self.0.push_back(elem)
    }

    /// Removes the front value and hands it back.
    pub fn dequeue(&mut self) -> Result<T> {
        self.0.pop_front().ok_or_else(|| {
            tracing::debug!("dequeue on an empty queue");
            EmptyContainerError
        })
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.0.iter_mut()
    }

    pub fn into_forward_list(self) -> ForwardList<T> {
        self.0
    }
}

impl<T: PartialEq> LinkedQueue<T> {
    /// Scans front to end for a value equal to `elem`.
    pub fn linear_search(&self, elem: &T) -> bool {
        self.iter().any(|e| e == elem)
    }
}

impl<T: fmt::Display> LinkedQueue<T> {
    /// Renders the values from end to front, each followed by a space, then a
    /// newline. The queue itself is left untouched.
    ///
    /// The walk to the end is recursive, one stack frame per element, so very
    /// long queues (on the order of a million elements with default thread
    /// stacks) overflow the stack. Use `iter` and reverse the collected values
    /// for queues of that size.
    pub fn reverse_queue(&self) -> String {
        let mut buf = String::new();
        self.0.rev_visit(|elem| {
            buf.push_str(&elem.to_string());
            buf.push(' ');
        });
        buf.push('\n');
        buf
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedQueue<T> {
    fn clone(&self) -> Self {
        tracing::trace!(len = self.len(), "deep copying queue");
        Self(self.0.clone())
    }
}

/// Values front to end, each followed by a space, then a newline.
impl<T: fmt::Display> fmt::Display for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for elem in self.iter() {
            write!(f, "{} ", elem)?;
        }
        writeln!(f)
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LinkedQueue").field(&self.0).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedQueue<T> {}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(ForwardList::from_iter(iter))
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl<T> From<Vec<T>> for LinkedQueue<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedQueue<T> {
    fn from(items: [T; N]) -> Self {
        IntoIterator::into_iter(items).collect()
    }
}

impl<T> IntoIterator for LinkedQueue<T> {
    type Item = T;
    type IntoIter = IterOwned<T>;
    fn into_iter(self) -> IterOwned<T> {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a LinkedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedQueue<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
