//! Capability extensions.
//!
//! Each trait adds one independent group of operations on top of [`Lambda`]. A
//! representation implements whichever groups it supports, and term-building code asks
//! for exactly the groups it uses, e.g. `L: NumOps + ListOps`.

use crate::{
    term::{Lambda, Term},
    types::{Equality, Fun, Int, List, Sequence, Type},
};

pub trait NumOps: Lambda {
    fn int(value: Int) -> Term<Self, Int>;
    fn add(lhs: Term<Self, Int>, rhs: Term<Self, Int>) -> Term<Self, Int>;
}

pub trait ListOps: Lambda {
    fn nil<T: Type>() -> Term<Self, List<T>>;
    fn cons<T: Type>(head: Term<Self, T>, tail: Term<Self, List<T>>) -> Term<Self, List<T>>;
    fn map<A: Type, B: Type>(
        f: Term<Self, Fun<A, B>>,
        xs: Term<Self, List<A>>,
    ) -> Term<Self, List<B>>;
}

pub trait BoolOps: Lambda {
    fn bool(value: bool) -> Term<Self, bool>;
    /// Both branches are already-built terms, not host control flow.
    fn if_then_else<T: Type>(
        cond: Term<Self, bool>,
        positive: Term<Self, T>,
        negative: Term<Self, T>,
    ) -> Term<Self, T>;
    fn not(x: Term<Self, bool>) -> Term<Self, bool>;
}

pub trait StringOps: Lambda {
    fn string(value: &str) -> Term<Self, String>;
    fn length<S: Sequence>(xs: Term<Self, S>) -> Term<Self, Int>;
}

pub trait EqOps: Lambda {
    fn equals<T: Equality>(lhs: Term<Self, T>, rhs: Term<Self, T>) -> Term<Self, bool>;
}
