pub use crate::{
    ops::{BoolOps, EqOps, ListOps, NumOps, StringOps},
    term::{Lambda, Term},
    types::{Equality, Fun, Int, List, Sequence, Type},
};

/// A Church numeral over values of type `A`.
pub type Church<A> = Fun<Fun<A, A>, Fun<A, A>>;
