use std::{marker::PhantomData, rc::Rc};

/// Semantic type of an embedded term.
///
/// `Value` is what a term of this type denotes once evaluated. Representations that
/// never evaluate (such as the pretty printer) ignore it.
pub trait Type: 'static {
    type Value: Clone + 'static;
}

pub type Int = i64;

/// Function type `A -> B`. Never constructed.
pub struct Fun<A, B>(PhantomData<fn(A) -> B>);

/// Homogeneous list type. Never constructed.
pub struct List<T>(PhantomData<T>);

impl Type for Int {
    type Value = Int;
}
impl Type for bool {
    type Value = bool;
}
impl Type for String {
    type Value = Rc<str>;
}
impl<A: Type, B: Type> Type for Fun<A, B> {
    type Value = Rc<dyn Fn(A::Value) -> B::Value>;
}
impl<T: Type> Type for List<T> {
    type Value = rpds::List<T::Value>;
}

/// Types whose values can be compared with `equals`.
pub trait Equality: Type {
    fn same(lhs: &Self::Value, rhs: &Self::Value) -> bool;
}
impl Equality for Int {
    fn same(lhs: &Int, rhs: &Int) -> bool {
        lhs == rhs
    }
}
impl Equality for bool {
    fn same(lhs: &bool, rhs: &bool) -> bool {
        lhs == rhs
    }
}
impl Equality for String {
    fn same(lhs: &Rc<str>, rhs: &Rc<str>) -> bool {
        lhs == rhs
    }
}
impl<T: Equality> Equality for List<T> {
    fn same(lhs: &Self::Value, rhs: &Self::Value) -> bool {
        lhs.len() == rhs.len() && lhs.iter().zip(rhs.iter()).all(|(l, r)| T::same(l, r))
    }
}

/// Sequence-like types `length` accepts.
pub trait Sequence: Type {
    fn length(value: &Self::Value) -> usize;
}
impl Sequence for String {
    fn length(value: &Rc<str>) -> usize {
        value.chars().count()
    }
}
impl<T: Type> Sequence for List<T> {
    fn length(value: &Self::Value) -> usize {
        value.len()
    }
}
