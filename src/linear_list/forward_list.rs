use std::fmt;
use std::iter::FromIterator;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

struct Node<T> {
    elem: T,
    next: Option<NonNull<Node<T>>>,
}

impl<T> Node<T> {
    fn alloc(elem: T) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { elem, next: None })))
    }

    // cond: ptr came from Node::alloc and is no longer linked
    unsafe fn consume(ptr: NonNull<Self>) -> T {
        let node = *Box::from_raw(ptr.as_ptr());
        node.elem
    }
}

// Singly-linked list. Every node is reached from head and owned by the list,
// tail aliases the last one.
pub struct ForwardList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

unsafe impl<T: Send> Send for ForwardList<T> {}
unsafe impl<T: Sync> Sync for ForwardList<T> {}

impl<T> ForwardList<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|ptr| unsafe { &(*ptr.as_ptr()).elem })
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.map(|ptr| unsafe { &mut (*ptr.as_ptr()).elem })
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|ptr| unsafe { &(*ptr.as_ptr()).elem })
    }

    pub fn push_back(&mut self, elem: T) {
        let node_ptr = Node::alloc(elem);
        match self.tail {
            None => self.head = Some(node_ptr),
            Some(tail_ptr) => unsafe { (*tail_ptr.as_ptr()).next = Some(node_ptr) },
        }
        self.tail = Some(node_ptr);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|head_ptr| unsafe {
            self.head = (*head_ptr.as_ptr()).next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.len -= 1;
            Node::consume(head_ptr)
        })
    }

    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Calls `f` on every element from back to front.
    ///
    /// The walk recurses once per node before visiting, so its stack depth
    /// grows with `len`.
    pub fn rev_visit<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        // cond: ptr is a live node of this list
        unsafe fn visit<T, F: FnMut(&T)>(ptr: NonNull<Node<T>>, f: &mut F) {
            let node = &*ptr.as_ptr();
            if let Some(next) = node.next {
                visit(next, f);
            }
            f(&node.elem);
        }

        if let Some(head) = self.head {
            unsafe { visit(head, &mut f) };
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            iter: RawNodeIter {
                next: self.head,
                len: self.len,
            },
            _marker: PhantomData,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            iter: RawNodeIter {
                next: self.head,
                len: self.len,
            },
            _marker: PhantomData,
        }
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        self.clear()
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push_back(elem);
        }
    }
}

// --------------------------------
// begin: IterOwned

pub struct IterOwned<T>(ForwardList<T>);

impl<T> Iterator for IterOwned<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = IterOwned<T>;
    fn into_iter(self) -> IterOwned<T> {
        IterOwned(self)
    }
}

impl<T> ExactSizeIterator for IterOwned<T> {
    fn len(&self) -> usize {
        self.0.len
    }
}

impl<T> FusedIterator for IterOwned<T> {}

// end: IterOwned
// ------------------------------------------

struct RawNodeIter<T> {
    next: Option<NonNull<Node<T>>>,
    len: usize,
}

impl<T> Clone for RawNodeIter<T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            len: self.len,
        }
    }
}

impl<T> RawNodeIter<T> {
    fn next_front(&mut self) -> Option<NonNull<Node<T>>> {
        self.next.map(|ptr| {
            self.next = unsafe { (*ptr.as_ptr()).next };
            self.len -= 1;
            ptr
        })
    }
}

// ------------------------------------------
// begin: IterMut

pub struct IterMut<'a, T> {
    iter: RawNodeIter<T>,
    _marker: PhantomData<&'a mut ForwardList<T>>,
}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<&'a mut T> {
        self.iter
            .next_front()
            .map(|ptr| unsafe { &mut (*ptr.as_ptr()).elem })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.iter.len, Some(self.iter.len))
    }
}

impl<'a, T> IntoIterator for &'a mut ForwardList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.iter.len
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

// end: IterMut
// ------------------------------------------

// ------------------------------------------
// begin: Iter

pub struct Iter<'a, T> {
    iter: RawNodeIter<T>,
    _marker: PhantomData<&'a ForwardList<T>>,
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        self.iter
            .next_front()
            .map(|ptr| unsafe { &(*ptr.as_ptr()).elem })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.iter.len, Some(self.iter.len))
    }
}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.iter.len
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

// end: Iter
// ------------------------------------------
