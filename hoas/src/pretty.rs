//! Pretty-printing representation.
//!
//! A term is a function from the naming counter to text. Every lambda takes the counter
//! it is rendered at as its own binder index and renders its body at the next one.
//! Sibling operands all receive the counter of their parent, so binder names are unique
//! along each path from the root but may repeat across independent branches.

use std::{fmt, rc::Rc};

use tracing::trace;

use crate::{
    ops::{BoolOps, EqOps, ListOps, NumOps, StringOps},
    term::{Lambda, Term},
    types::{Equality, Fun, Int, List, Sequence, Type},
};

/// Index of the next unused binder.
#[derive(
    PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default, derive_more::Display, Debug,
)]
pub struct Naming(usize);

impl Naming {
    pub const fn new(next: usize) -> Self {
        Self(next)
    }
    pub fn index(self) -> usize {
        self.0
    }
    pub fn binder(self) -> Binder {
        Binder(self.0)
    }
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

#[derive(PartialEq, Eq, Hash, Clone, Copy, derive_more::Display, Debug)]
#[display(fmt = "a{_0}")]
pub struct Binder(usize);

/// Rendering of a term, waiting for its naming counter.
#[derive(Clone)]
pub struct Doc(Rc<dyn Fn(Naming) -> String>);

impl Doc {
    fn new(render: impl Fn(Naming) -> String + 'static) -> Self {
        Self(Rc::new(render))
    }
    /// Renders the same text at every counter.
    fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(move |_| text.clone())
    }
    pub fn at(&self, naming: Naming) -> String {
        (self.0)(naming)
    }
}

pub struct PrettyPrint;

pub fn render<T: Type>(term: &Term<PrettyPrint, T>) -> String {
    render_at(term, Naming::default())
}

pub fn render_at<T: Type>(term: &Term<PrettyPrint, T>, naming: Naming) -> String {
    term.repr().at(naming)
}

impl<T: Type> fmt::Display for Term<PrettyPrint, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

fn doc<T: Type>(render: impl Fn(Naming) -> String + 'static) -> Term<PrettyPrint, T> {
    Term::new(Doc::new(render))
}

fn text<T: Type>(text: impl Into<String>) -> Term<PrettyPrint, T> {
    Term::new(Doc::text(text))
}

impl Lambda for PrettyPrint {
    type Repr<T: Type> = Doc;

    fn apply<A: Type, B: Type>(f: Term<Self, Fun<A, B>>, x: Term<Self, A>) -> Term<Self, B> {
        let (f, x) = (f.into_repr(), x.into_repr());
        doc(move |i| format!("({} $ {})", f.at(i), x.at(i)))
    }

    fn lambda<A: Type, B: Type, F>(body: F) -> Term<Self, Fun<A, B>>
    where
        F: Fn(Term<Self, A>) -> Term<Self, B> + 'static,
    {
        doc(move |i: Naming| {
            let binder = i.binder();
            trace!(%binder, "allocating binder");
            let var: Term<Self, A> = text(binder.to_string());
            format!("(\\ {binder} -> {})", body(var).repr().at(i.next()))
        })
    }
}

impl NumOps for PrettyPrint {
    fn int(value: Int) -> Term<Self, Int> {
        text(value.to_string())
    }
    fn add(lhs: Term<Self, Int>, rhs: Term<Self, Int>) -> Term<Self, Int> {
        let (lhs, rhs) = (lhs.into_repr(), rhs.into_repr());
        doc(move |i| format!("({} + {})", lhs.at(i), rhs.at(i)))
    }
}

impl ListOps for PrettyPrint {
    fn nil<T: Type>() -> Term<Self, List<T>> {
        text("[]")
    }
    fn cons<T: Type>(head: Term<Self, T>, tail: Term<Self, List<T>>) -> Term<Self, List<T>> {
        let (head, tail) = (head.into_repr(), tail.into_repr());
        doc(move |i| format!("({} : {})", head.at(i), tail.at(i)))
    }
    fn map<A: Type, B: Type>(
        f: Term<Self, Fun<A, B>>,
        xs: Term<Self, List<A>>,
    ) -> Term<Self, List<B>> {
        let (f, xs) = (f.into_repr(), xs.into_repr());
        doc(move |i| format!("map {} {}", f.at(i), xs.at(i)))
    }
}

impl BoolOps for PrettyPrint {
    fn bool(value: bool) -> Term<Self, bool> {
        text(if value { "True" } else { "False" })
    }
    fn if_then_else<T: Type>(
        cond: Term<Self, bool>,
        positive: Term<Self, T>,
        negative: Term<Self, T>,
    ) -> Term<Self, T> {
        let cond = cond.into_repr();
        let (positive, negative) = (positive.into_repr(), negative.into_repr());
        doc(move |i| {
            format!(
                "if ({}) then {} else {}",
                cond.at(i),
                positive.at(i),
                negative.at(i)
            )
        })
    }
    fn not(x: Term<Self, bool>) -> Term<Self, bool> {
        let x = x.into_repr();
        doc(move |i| format!("(not {})", x.at(i)))
    }
}

impl StringOps for PrettyPrint {
    fn string(value: &str) -> Term<Self, String> {
        text(format!("{value:?}"))
    }
    fn length<S: Sequence>(xs: Term<Self, S>) -> Term<Self, Int> {
        let xs = xs.into_repr();
        doc(move |i| format!("length {}", xs.at(i)))
    }
}

impl EqOps for PrettyPrint {
    fn equals<T: Equality>(lhs: Term<Self, T>, rhs: Term<Self, T>) -> Term<Self, bool> {
        let (lhs, rhs) = (lhs.into_repr(), rhs.into_repr());
        doc(move |i| format!("{} == {}", lhs.at(i), rhs.at(i)))
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    type P = PrettyPrint;

    #[test]
    fn test_lambda() {
        assert_eq!(render(&P::lambda::<Int, Int, _>(|x| x)), r"(\ a0 -> a0)");
        assert_eq!(
            render(&P::lambda(|x: Term<P, Int>| P::add(x, P::int(1)))),
            r"(\ a0 -> (a0 + 1))"
        );
    }

    #[test]
    fn test_apply_does_not_allocate() {
        let id = || P::lambda::<Int, Int, _>(|x| x);
        assert_eq!(
            render(&P::apply(P::lambda(|f: Term<P, Fun<Int, Int>>| f), id())),
            r"((\ a0 -> a0) $ (\ a0 -> a0))"
        );
    }

    #[test]
    fn test_if_then_else() {
        let term = P::if_then_else(P::not(P::bool(true)), P::bool(false), P::bool(true));
        assert_eq!(render(&term), "if ((not True)) then False else True");
    }

    #[test]
    fn test_guarded_list() {
        let literals = |values: &[Int]| {
            values
                .iter()
                .rev()
                .fold(P::nil(), |tail, &v| P::cons(P::int(v), tail))
        };
        let term = P::cons(
            P::int(0),
            P::if_then_else(
                P::equals(P::add(P::int(23), P::int(27)), P::int(50)),
                literals(&[1, 2, 3]),
                P::nil(),
            ),
        );
        assert_eq!(
            render(&term),
            "(0 : if ((23 + 27) == 50) then (1 : (2 : (3 : []))) else [])"
        );
    }

    #[test]
    fn test_map() {
        let term = P::map(
            P::lambda(P::not),
            P::cons(P::bool(true), P::cons(P::bool(false), P::nil())),
        );
        assert_eq!(render(&term), r"map (\ a0 -> (not a0)) (True : (False : []))");
    }

    #[test]
    fn test_string_ops() {
        assert_eq!(render(&P::length(P::string("hello"))), r#"length "hello""#);
        assert_eq!(render(&P::string("say \"hi\"")), r#""say \"hi\"""#);
        assert_eq!(
            render(&P::equals(P::string("a"), P::string("b"))),
            r#""a" == "b""#
        );
    }

    #[test]
    fn test_nested_binders_are_distinct() {
        let term = P::lambda(|x: Term<P, Int>| {
            P::lambda(move |y: Term<P, Int>| {
                let x = x.clone();
                P::lambda(move |z: Term<P, Int>| P::add(x.clone(), P::add(y.clone(), z)))
            })
        });
        assert_eq!(
            render(&term),
            r"(\ a0 -> (\ a1 -> (\ a2 -> (a0 + (a1 + a2)))))"
        );
    }

    #[test]
    fn test_siblings_restart_from_parent_counter() {
        let inc = || P::lambda(|x: Term<P, Int>| P::add(x, P::int(1)));
        let term = P::cons(inc(), P::cons(inc(), P::nil()));
        assert_eq!(
            render(&term),
            r"((\ a0 -> (a0 + 1)) : ((\ a0 -> (a0 + 1)) : []))"
        );
        let nested = P::lambda(move |_: Term<P, bool>| P::cons(inc(), P::nil()));
        assert_eq!(render(&nested), r"(\ a0 -> ((\ a1 -> (a1 + 1)) : []))");
    }

    #[test]
    fn test_render_at_renumbers() {
        let term = P::lambda(|x: Term<P, Int>| P::lambda(move |_: Term<P, Int>| x.clone()));
        assert_eq!(render_at(&term, Naming::new(3)), r"(\ a3 -> (\ a4 -> a3))");
        assert_eq!(render(&term), r"(\ a0 -> (\ a1 -> a0))");
    }

    #[test]
    fn test_placeholder_ignores_counter() {
        let term = P::lambda(|x: Term<P, Int>| {
            P::apply(P::lambda(move |_: Term<P, Int>| x.clone()), P::int(7))
        });
        assert_eq!(render(&term), r"(\ a0 -> ((\ a1 -> a0) $ 7))");
    }

    #[test]
    fn test_deterministic() {
        let term = P::map(
            P::lambda(|x: Term<P, Int>| P::add(x, P::int(2))),
            P::cons(P::int(1), P::nil()),
        );
        assert_eq!(render(&term), render(&term));
        assert_eq!(term.to_string(), render(&term));
    }

    #[test]
    fn test_naming() {
        let naming = Naming::default();
        assert_eq!(naming.index(), 0);
        assert_eq!(naming.binder().to_string(), "a0");
        assert_eq!(naming.next().next().binder().to_string(), "a2");
        assert_eq!(Naming::new(5).to_string(), "5");
    }
}
