//! Empty collections and forwarding smart pointers.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::BuildHasher;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

use crate::MockData;

impl<T> MockData for Vec<T> {
    fn mock_data() -> Self {
        Self::new()
    }
}

impl<T> MockData for Option<T> {
    fn mock_data() -> Self {
        None
    }
}

impl<T> MockData for VecDeque<T> {
    fn mock_data() -> Self {
        Self::new()
    }
}

impl<T> MockData for LinkedList<T> {
    fn mock_data() -> Self {
        Self::new()
    }
}

impl<T: Ord> MockData for BinaryHeap<T> {
    fn mock_data() -> Self {
        Self::new()
    }
}

impl<T> MockData for BTreeSet<T> {
    fn mock_data() -> Self {
        Self::new()
    }
}

impl<K, V> MockData for BTreeMap<K, V> {
    fn mock_data() -> Self {
        Self::new()
    }
}

impl<T, S: BuildHasher + Default> MockData for HashSet<T, S> {
    fn mock_data() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S: BuildHasher + Default> MockData for HashMap<K, V, S> {
    fn mock_data() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: ?Sized> MockData for PhantomData<T> {
    fn mock_data() -> Self {
        Self
    }
}

impl<T: MockData, const N: usize> MockData for [T; N] {
    fn mock_data() -> Self {
        std::array::from_fn(|_| T::mock_data())
    }
}

macro_rules! impl_mock_data_wrapper {
    ($($wrapper:ident),* $(,)?) => {
        $(
            impl<T: MockData> MockData for $wrapper<T> {
                fn mock_data() -> Self {
                    $wrapper::new(T::mock_data())
                }
            }
        )*
    };
}

impl_mock_data_wrapper!(Box, Rc, Arc, RefCell);
