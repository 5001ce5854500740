//! Evaluating representation: a term is the host value it denotes.

use std::rc::Rc;

use crate::{
    ops::{BoolOps, EqOps, ListOps, NumOps, StringOps},
    term::{Lambda, Term},
    types::{Equality, Fun, Int, List, Sequence, Type},
};

pub struct Eval;

pub fn evaluate<T: Type>(term: Term<Eval, T>) -> T::Value {
    term.into_repr()
}

impl Lambda for Eval {
    type Repr<T: Type> = T::Value;

    fn apply<A: Type, B: Type>(f: Term<Self, Fun<A, B>>, x: Term<Self, A>) -> Term<Self, B> {
        let f = f.into_repr();
        Term::new(f(x.into_repr()))
    }

    fn lambda<A: Type, B: Type, F>(body: F) -> Term<Self, Fun<A, B>>
    where
        F: Fn(Term<Self, A>) -> Term<Self, B> + 'static,
    {
        let f: Rc<dyn Fn(A::Value) -> B::Value> =
            Rc::new(move |x: A::Value| body(Term::new(x)).into_repr());
        Term::new(f)
    }
}

impl NumOps for Eval {
    fn int(value: Int) -> Term<Self, Int> {
        Term::new(value)
    }
    fn add(lhs: Term<Self, Int>, rhs: Term<Self, Int>) -> Term<Self, Int> {
        Term::new(lhs.into_repr().wrapping_add(rhs.into_repr()))
    }
}

impl ListOps for Eval {
    fn nil<T: Type>() -> Term<Self, List<T>> {
        Term::new(rpds::List::new())
    }
    fn cons<T: Type>(head: Term<Self, T>, tail: Term<Self, List<T>>) -> Term<Self, List<T>> {
        Term::new(tail.repr().push_front(head.into_repr()))
    }
    fn map<A: Type, B: Type>(
        f: Term<Self, Fun<A, B>>,
        xs: Term<Self, List<A>>,
    ) -> Term<Self, List<B>> {
        let f = f.into_repr();
        Term::new(xs.repr().iter().map(|x| f(x.clone())).collect())
    }
}

impl BoolOps for Eval {
    fn bool(value: bool) -> Term<Self, bool> {
        Term::new(value)
    }
    fn if_then_else<T: Type>(
        cond: Term<Self, bool>,
        positive: Term<Self, T>,
        negative: Term<Self, T>,
    ) -> Term<Self, T> {
        if cond.into_repr() {
            positive
        } else {
            negative
        }
    }
    fn not(x: Term<Self, bool>) -> Term<Self, bool> {
        Term::new(!x.into_repr())
    }
}

impl StringOps for Eval {
    fn string(value: &str) -> Term<Self, String> {
        Term::new(Rc::from(value))
    }
    fn length<S: Sequence>(xs: Term<Self, S>) -> Term<Self, Int> {
        Term::new(Int::try_from(S::length(xs.repr())).unwrap_or(Int::MAX))
    }
}

impl EqOps for Eval {
    fn equals<T: Equality>(lhs: Term<Self, T>, rhs: Term<Self, T>) -> Term<Self, bool> {
        Term::new(T::same(lhs.repr(), rhs.repr()))
    }
}
