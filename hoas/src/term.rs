use crate::types::{Fun, Type};

/// An embedded expression of semantic type `T` under representation `L`.
///
/// A term carries nothing but its representation; what it means is entirely up to `L`.
pub struct Term<L: Lambda, T: Type> {
    repr: L::Repr<T>,
}

impl<L: Lambda, T: Type> Term<L, T> {
    pub fn new(repr: L::Repr<T>) -> Self {
        Self { repr }
    }
    pub fn repr(&self) -> &L::Repr<T> {
        &self.repr
    }
    pub fn into_repr(self) -> L::Repr<T> {
        self.repr
    }
}

impl<L: Lambda, T: Type> Clone for Term<L, T> {
    fn clone(&self) -> Self {
        Self::new(self.repr.clone())
    }
}

impl<L: Lambda, A: Type, B: Type> Term<L, Fun<A, B>> {
    pub fn apply(self, arg: Term<L, A>) -> Term<L, B> {
        L::apply(self, arg)
    }
}

/// Application and abstraction: the operations every representation supports.
///
/// Binding is the host's own: `lambda` receives a Rust closure and the representation
/// decides what to pass in for the parameter. No environment or substitution exists at
/// this level.
pub trait Lambda: Sized + 'static {
    type Repr<T: Type>: Clone + 'static;

    fn apply<A: Type, B: Type>(f: Term<Self, Fun<A, B>>, x: Term<Self, A>) -> Term<Self, B>;

    fn lambda<A: Type, B: Type, F>(body: F) -> Term<Self, Fun<A, B>>
    where
        F: Fn(Term<Self, A>) -> Term<Self, B> + 'static;
}
