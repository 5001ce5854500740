//! Named example terms shown by the demo and the REPL.

use hoas::{evaluate, library::*, prelude::*, render, Eval, PrettyPrint};

type P = PrettyPrint;

/// `if (not True) then False else True`
pub fn branch<L: BoolOps>() -> Term<L, bool> {
    L::if_then_else(L::not(L::bool(true)), L::bool(false), L::bool(true))
}

pub fn ints<L: NumOps + ListOps>(values: &[Int]) -> Term<L, List<Int>> {
    values
        .iter()
        .rev()
        .fold(L::nil(), |tail, &v| L::cons(L::int(v), tail))
}

/// `0` followed by `[1, 2, 3]` when `23 + 27 == 50`.
pub fn guarded_list<L: NumOps + ListOps + BoolOps + EqOps>() -> Term<L, List<Int>> {
    let cond = L::equals(L::add(L::int(23), L::int(27)), L::int(50));
    L::cons(L::int(0), L::if_then_else(cond, ints(&[1, 2, 3]), L::nil()))
}

pub fn map_not<L: BoolOps + ListOps>() -> Term<L, List<bool>> {
    L::map(
        L::lambda(L::not),
        L::cons(L::bool(true), L::cons(L::bool(false), L::nil())),
    )
}

pub fn increments<L: NumOps + ListOps>() -> Term<L, List<Int>> {
    increment_all(ints(&[1, 2, 3]))
}

pub fn greeting_length<L: StringOps>() -> Term<L, Int> {
    L::length(L::string("hello, world"))
}

#[derive(PartialEq, Eq, Hash, Clone, Copy, derive_more::Display, Debug)]
pub enum Example {
    #[display(fmt = "identity")]
    Identity,
    #[display(fmt = "selfApplication")]
    SelfApplication,
    #[display(fmt = "app")]
    App,
    #[display(fmt = "konst")]
    Konst,
    #[display(fmt = "compose")]
    Compose,
    #[display(fmt = "flip")]
    Flip,
    #[display(fmt = "succ")]
    Succ,
    #[display(fmt = "zero")]
    Zero,
    #[display(fmt = "one")]
    One,
    #[display(fmt = "two")]
    Two,
    #[display(fmt = "addOne")]
    AddOne,
    #[display(fmt = "runChurchTwo")]
    RunChurchTwo,
    #[display(fmt = "branch")]
    Branch,
    #[display(fmt = "guardedList")]
    GuardedList,
    #[display(fmt = "mapNot")]
    MapNot,
    #[display(fmt = "increments")]
    Increments,
    #[display(fmt = "greetingLength")]
    GreetingLength,
}

impl Example {
    pub const ALL: [Example; 17] = [
        Example::Identity,
        Example::SelfApplication,
        Example::App,
        Example::Konst,
        Example::Compose,
        Example::Flip,
        Example::Succ,
        Example::Zero,
        Example::One,
        Example::Two,
        Example::AddOne,
        Example::RunChurchTwo,
        Example::Branch,
        Example::GuardedList,
        Example::MapNot,
        Example::Increments,
        Example::GreetingLength,
    ];

    pub fn find(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|example| example.to_string() == name)
    }

    /// Pretty-prints the example starting from binder `a0`.
    pub fn render(self) -> String {
        match self {
            Example::Identity => render(&identity::<P, Int>()),
            Example::SelfApplication => render(&self_application::<P, Int>()),
            Example::App => render(&app::<P, Int, Int>()),
            Example::Konst => render(&konst::<P, Int, Int>()),
            Example::Compose => render(&compose::<P, Int, Int, Int>()),
            Example::Flip => render(&flip::<P, Int, Int, Int>()),
            Example::Succ => render(&succ::<P, Int>()),
            Example::Zero => render(&zero::<P, Int>()),
            Example::One => render(&one::<P, Int>()),
            Example::Two => render(&two::<P, Int>()),
            Example::AddOne => render(&add_one::<P>()),
            Example::RunChurchTwo => render(&run_church_two::<P>()),
            Example::Branch => render(&branch::<P>()),
            Example::GuardedList => render(&guarded_list::<P>()),
            Example::MapNot => render(&map_not::<P>()),
            Example::Increments => render(&increments::<P>()),
            Example::GreetingLength => render(&greeting_length::<P>()),
        }
    }

    /// Evaluates the example, or `None` when it denotes a function.
    pub fn evaluate(self) -> Option<String> {
        let int_list =
            |list: <List<Int> as Type>::Value| show_list(list.iter().map(Int::to_string));
        Some(match self {
            Example::Zero => evaluate(church_to_int(zero::<Eval, Int>())).to_string(),
            Example::One => evaluate(church_to_int(one::<Eval, Int>())).to_string(),
            Example::Two => evaluate(church_to_int(two::<Eval, Int>())).to_string(),
            Example::RunChurchTwo => evaluate(run_church_two::<Eval>()).to_string(),
            Example::Branch => show_bool(evaluate(branch::<Eval>())).to_string(),
            Example::GuardedList => int_list(evaluate(guarded_list::<Eval>())),
            Example::MapNot => {
                show_list(evaluate(map_not::<Eval>()).iter().map(|&b| show_bool(b).to_string()))
            }
            Example::Increments => int_list(evaluate(increments::<Eval>())),
            Example::GreetingLength => evaluate(greeting_length::<Eval>()).to_string(),
            Example::Identity
            | Example::SelfApplication
            | Example::App
            | Example::Konst
            | Example::Compose
            | Example::Flip
            | Example::Succ
            | Example::AddOne => return None,
        })
    }
}

fn show_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn show_list(items: impl Iterator<Item = String>) -> String {
    format!("[{}]", items.collect::<Vec<_>>().join(", "))
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_names_round_trip() {
        for example in Example::ALL {
            assert_eq!(Example::find(&example.to_string()), Some(example));
        }
        assert_eq!(Example::find("runChurchTwo"), Some(Example::RunChurchTwo));
        assert_eq!(Example::find("three"), None);
    }

    #[test]
    fn test_render_scenarios() {
        assert_eq!(Example::Identity.render(), r"(\ a0 -> a0)");
        assert_eq!(
            Example::Branch.render(),
            "if ((not True)) then False else True"
        );
        assert_eq!(
            Example::GuardedList.render(),
            "(0 : if ((23 + 27) == 50) then (1 : (2 : (3 : []))) else [])"
        );
        assert_eq!(
            Example::MapNot.render(),
            r"map (\ a0 -> (not a0)) (True : (False : []))"
        );
        assert_eq!(
            Example::Increments.render(),
            r"map (\ a0 -> (a0 + 1)) (1 : (2 : (3 : [])))"
        );
    }

    #[test]
    fn test_evaluate() {
        assert_eq!(Example::RunChurchTwo.evaluate().as_deref(), Some("2"));
        assert_eq!(Example::Zero.evaluate().as_deref(), Some("0"));
        assert_eq!(Example::Two.evaluate().as_deref(), Some("2"));
        assert_eq!(Example::Branch.evaluate().as_deref(), Some("True"));
        assert_eq!(
            Example::GuardedList.evaluate().as_deref(),
            Some("[0, 1, 2, 3]")
        );
        assert_eq!(Example::MapNot.evaluate().as_deref(), Some("[False, True]"));
        assert_eq!(Example::Increments.evaluate().as_deref(), Some("[2, 3, 4]"));
        assert_eq!(Example::GreetingLength.evaluate().as_deref(), Some("12"));
        assert_eq!(Example::Compose.evaluate(), None);
    }
}
