use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;

use crate::tree_map::{self, TreeMap};

/// An ordered set backed by a [`TreeMap`] with unit values.
///
/// Elements are kept in ascending order; membership, insertion, and removal
/// are O(log n). The set-algebra operations build a new set by iterating the
/// operands' ascending element sequences and probing membership, so they run
/// in O(n log n).
///
/// # Examples
///
/// ```
/// use kaede_tree::TreeSet;
///
/// let mut books = TreeSet::new();
/// books.insert("A Dance With Dragons");
/// books.insert("To Kill a Mockingbird");
///
/// if !books.contains("The Winds of Winter") {
///     println!("We have {} books, but The Winds of Winter ain't one.", books.len());
/// }
///
/// books.remove("To Kill a Mockingbird");
/// for book in books.iter() {
///     println!("{book}");
/// }
/// ```
#[derive(Clone)]
pub struct TreeSet<T> {
    map: TreeMap<T, ()>,
}

impl<T> TreeSet<T> {
    /// Makes a new, empty `TreeSet`. Does not allocate.
    #[must_use]
    pub const fn new() -> Self {
        Self { map: TreeMap::new() }
    }

    /// Returns the number of elements in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Clears the set, removing all elements.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Gets an iterator over the elements of the set, in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.map.keys() }
    }
}

impl<T: Ord> TreeSet<T> {
    /// Adds an element to the set. Returns `true` if it was not yet present.
    ///
    /// # Examples
    ///
    /// ```
    /// use kaede_tree::TreeSet;
    ///
    /// let mut set = TreeSet::new();
    /// assert!(set.insert(2));
    /// assert!(!set.insert(2));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        self.map.insert(element, ()).is_none()
    }

    /// Removes an element from the set. Returns `true` exactly once per
    /// present element.
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.remove(element).is_some()
    }

    /// Returns `true` if the set contains the element.
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.contains_key(element)
    }

    /// Returns the stored element equal to the given one, if any.
    pub fn find<Q>(&self, element: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.get_key_value(element).map(|(stored, _)| stored)
    }

    /// Returns the smallest element.
    pub fn first(&self) -> Option<&T> {
        self.map.first_key_value().map(|(element, _)| element)
    }

    /// Returns the largest element.
    pub fn last(&self) -> Option<&T> {
        self.map.last_key_value().map(|(element, _)| element)
    }
}

impl<T: Ord + Clone> TreeSet<T> {
    /// Returns a new set holding the elements of both `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kaede_tree::TreeSet;
    ///
    /// let a = TreeSet::from_iter([1, 2, 3]);
    /// let b = TreeSet::from_iter([2, 3, 4]);
    /// let union: Vec<_> = a.union(&b).iter().copied().collect();
    /// assert_eq!(union, [1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for element in self.iter().chain(other.iter()) {
            result.insert(element.clone());
        }
        result
    }

    /// Returns a new set holding the elements present in both sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use kaede_tree::TreeSet;
    ///
    /// let a = TreeSet::from_iter([1, 2, 3]);
    /// let b = TreeSet::from_iter([2, 3, 4]);
    /// let intersection: Vec<_> = a.intersection(&b).iter().copied().collect();
    /// assert_eq!(intersection, [2, 3]);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for element in self.iter() {
            if other.contains(element) {
                result.insert(element.clone());
            }
        }
        result
    }

    /// Returns a new set holding the elements of `self` that are not in
    /// `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kaede_tree::TreeSet;
    ///
    /// let a = TreeSet::from_iter([1, 2, 3]);
    /// let b = TreeSet::from_iter([2, 3, 4]);
    /// let difference: Vec<_> = a.difference(&b).iter().copied().collect();
    /// assert_eq!(difference, [1]);
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for element in self.iter() {
            if !other.contains(element) {
                result.insert(element.clone());
            }
        }
        result
    }
}

impl<T> Default for TreeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for TreeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for TreeSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<T: Eq> Eq for TreeSet<T> {}

impl<T: Ord> FromIterator<T> for TreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for TreeSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a TreeSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// An iterator over the elements of a [`TreeSet`], in ascending order.
///
/// Created by [`TreeSet::iter`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    inner: tree_map::Keys<'a, T, ()>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
