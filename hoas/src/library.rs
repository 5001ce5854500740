//! Combinators built from [`Lambda`] alone, so they work under every representation.
//!
//! Functions that also need literals or arithmetic ask for the extra capability in
//! their bounds and nothing more.

use crate::prelude::*;

pub fn identity<L: Lambda, A: Type>() -> Term<L, Fun<A, A>> {
    L::lambda(|x| x)
}

/// `identity` applied to `identity`.
pub fn self_application<L: Lambda, A: Type>() -> Term<L, Fun<A, A>> {
    L::apply(identity::<L, Fun<A, A>>(), identity())
}

/// `\a f -> f a`
pub fn app<L: Lambda, A: Type, B: Type>() -> Term<L, Fun<A, Fun<Fun<A, B>, B>>> {
    L::lambda(|a: Term<L, A>| L::lambda(move |f: Term<L, Fun<A, B>>| L::apply(f, a.clone())))
}

/// `\a b -> a`
pub fn konst<L: Lambda, A: Type, B: Type>() -> Term<L, Fun<A, Fun<B, A>>> {
    L::lambda(|a: Term<L, A>| L::lambda(move |_: Term<L, B>| a.clone()))
}

/// `\f g x -> f (g x)`
pub fn compose<L: Lambda, A: Type, B: Type, C: Type>(
) -> Term<L, Fun<Fun<B, C>, Fun<Fun<A, B>, Fun<A, C>>>> {
    L::lambda(|f: Term<L, Fun<B, C>>| {
        L::lambda(move |g: Term<L, Fun<A, B>>| {
            let f = f.clone();
            L::lambda(move |x: Term<L, A>| L::apply(f.clone(), L::apply(g.clone(), x)))
        })
    })
}

/// `\f b a -> f a b`
pub fn flip<L: Lambda, A: Type, B: Type, C: Type>(
) -> Term<L, Fun<Fun<A, Fun<B, C>>, Fun<B, Fun<A, C>>>> {
    L::lambda(|f: Term<L, Fun<A, Fun<B, C>>>| {
        L::lambda(move |b: Term<L, B>| {
            let f = f.clone();
            L::lambda(move |a: Term<L, A>| L::apply(L::apply(f.clone(), a), b.clone()))
        })
    })
}

/// `\n f x -> f (n f x)`
pub fn succ<L: Lambda, A: Type>() -> Term<L, Fun<Church<A>, Church<A>>> {
    L::lambda(|n: Term<L, Church<A>>| {
        L::lambda(move |f: Term<L, Fun<A, A>>| {
            let n = n.clone();
            L::lambda(move |x: Term<L, A>| {
                L::apply(f.clone(), L::apply(L::apply(n.clone(), f.clone()), x))
            })
        })
    })
}

pub fn zero<L: Lambda, A: Type>() -> Term<L, Church<A>> {
    L::apply(konst::<L, Fun<A, A>, Fun<A, A>>(), identity())
}

pub fn one<L: Lambda, A: Type>() -> Term<L, Church<A>> {
    L::apply(succ::<L, A>(), zero())
}

pub fn two<L: Lambda, A: Type>() -> Term<L, Church<A>> {
    L::apply(succ::<L, A>(), L::apply(succ::<L, A>(), zero()))
}

/// The numeral `n`, built as `n` applications of `succ` to `zero`.
pub fn numeral<L: Lambda, A: Type>(n: usize) -> Term<L, Church<A>> {
    (0..n).fold(zero(), |acc, _| L::apply(succ::<L, A>(), acc))
}

pub fn add_one<L: NumOps>() -> Term<L, Fun<Int, Int>> {
    L::lambda(|x| L::add(x, L::int(1)))
}

/// Reads a numeral back as an integer by applying it to `add_one` and `0`.
pub fn church_to_int<L: NumOps>(n: Term<L, Church<Int>>) -> Term<L, Int> {
    L::apply(L::apply(n, add_one()), L::int(0))
}

pub fn run_church_two<L: NumOps>() -> Term<L, Int> {
    church_to_int(two())
}

pub fn increment_all<L: NumOps + ListOps>(xs: Term<L, List<Int>>) -> Term<L, List<Int>> {
    L::map(add_one(), xs)
}
