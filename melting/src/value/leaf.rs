//! Leaf implementations of [`Melt`] for standard library types.
//!
//! A leaf is overwritten wholesale by a clone of a source value of exactly
//! the same type. Collections and maps are leaves too: their contents are
//! replaced, never merged element by element. Pointer-like types copy the
//! pointer, so an `Rc` or `Arc` destination ends up sharing the source's
//! allocation.

use std::any::Any;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::ffi::OsString;
use std::hash::BuildHasher;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use super::Melt;

/// Overwrite `destination` with a clone of `source` when both have the same
/// concrete type.
///
/// This is the assignment rule shared by every leaf, including the ones
/// generated by `#[derive(Melt)]` with `#[melt(leaf)]`. Returns `false` and
/// leaves `destination` untouched on a type mismatch.
///
/// # Examples
///
/// ```
/// use melting::assign_cloned;
///
/// let mut destination = String::from("b");
/// assert!(assign_cloned(&mut destination, &String::from("a")));
/// assert_eq!(destination, "a");
///
/// assert!(!assign_cloned(&mut destination, &7_u32));
/// assert_eq!(destination, "a");
/// ```
pub fn assign_cloned<T>(destination: &mut T, source: &dyn Melt) -> bool
where
    T: Clone + Any,
{
    let source: &dyn Any = source;
    source
        .downcast_ref::<T>()
        .map(|value| destination.clone_from(value))
        .is_some()
}

macro_rules! leaf {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Melt for $ty {
                fn assign(&mut self, source: &dyn Melt) -> bool {
                    assign_cloned(self, source)
                }
            }
        )+
    };
}

leaf!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    &'static str,
    Cow<'static, str>,
    PathBuf,
    OsString,
    Duration,
);

macro_rules! generic_leaf {
    ($(impl<$($param:ident),+> for $ty:ty;)+) => {
        $(
            impl<$($param),+> Melt for $ty
            where
                $($param: Clone + 'static,)+
            {
                fn assign(&mut self, source: &dyn Melt) -> bool {
                    assign_cloned(self, source)
                }
            }
        )+
    };
}

generic_leaf! {
    impl<T> for Option<T>;
    impl<T> for Vec<T>;
    impl<T> for VecDeque<T>;
    impl<T> for Box<T>;
    impl<T> for BTreeSet<T>;
    impl<K, V> for BTreeMap<K, V>;
    impl<A> for (A,);
    impl<A, B> for (A, B);
    impl<A, B, C> for (A, B, C);
    impl<A, B, C, D> for (A, B, C, D);
    impl<A, B, C, D, E> for (A, B, C, D, E);
    impl<A, B, C, D, E, F> for (A, B, C, D, E, F);
}

impl<T, const N: usize> Melt for [T; N]
where
    T: Clone + 'static,
{
    fn assign(&mut self, source: &dyn Melt) -> bool {
        assign_cloned(self, source)
    }
}

impl<T, S> Melt for HashSet<T, S>
where
    T: Clone + 'static,
    S: BuildHasher + Clone + 'static,
{
    fn assign(&mut self, source: &dyn Melt) -> bool {
        assign_cloned(self, source)
    }
}

impl<K, V, S> Melt for HashMap<K, V, S>
where
    K: Clone + 'static,
    V: Clone + 'static,
    S: BuildHasher + Clone + 'static,
{
    fn assign(&mut self, source: &dyn Melt) -> bool {
        assign_cloned(self, source)
    }
}

// Cloning the handle shares the pointee; it is never merged through.
impl<T: ?Sized + 'static> Melt for Rc<T> {
    fn assign(&mut self, source: &dyn Melt) -> bool {
        assign_cloned(self, source)
    }
}

impl<T: ?Sized + 'static> Melt for Arc<T> {
    fn assign(&mut self, source: &dyn Melt) -> bool {
        assign_cloned(self, source)
    }
}

#[cfg(feature = "serde_json")]
leaf!(serde_json::Value);
