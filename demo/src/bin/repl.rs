use anyhow::{bail, Result};
use demo::catalog::Example;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use util::repl;

struct Repl;

impl Repl {
    fn find(name: &str) -> Result<Example> {
        match Example::find(name.trim()) {
            Some(example) => Ok(example),
            None => bail!("Unknown term `{}`, try :list", name.trim()),
        }
    }

    fn list() {
        for example in Example::ALL {
            println!("{example}");
        }
    }

    fn render(input: &str) -> Result<()> {
        println!("{}", Self::find(input)?.render());
        Ok(())
    }

    fn eval(input: &str) -> Result<()> {
        let example = Self::find(input)?;
        match example.evaluate() {
            Some(value) => println!("{value}"),
            None => println!("{example} denotes a function"),
        }
        Ok(())
    }

    fn show_help() {
        println!(
            "{}",
            r#"
name                -- same as :render name
:list               -- list the example terms
:render     name    -- pretty-print the term
:eval       name    -- evaluate the term
:help               -- show this message
        "#
            .trim()
        );
    }

    fn handle_repl_input(input: &str) -> Result<()> {
        let (cmd, input) = if let Some(stripped) = input.strip_prefix(':') {
            stripped
                .trim_start()
                .split_once(char::is_whitespace)
                .unwrap_or((stripped.trim(), ""))
        } else {
            ("", input)
        };
        debug!(cmd, "dispatching");
        match cmd {
            "l" | "ls" | "list" => Self::list(),
            "" | "r" | "render" => Self::render(input)?,
            "e" | "eval" | "evaluate" => Self::eval(input)?,
            "h" | "he" | "hel" | "help" => Self::show_help(),
            _ => {
                eprintln!("Unknown command {cmd}");
                Self::show_help();
            }
        }
        Ok(())
    }
}

impl repl::Repl for Repl {
    type Error = anyhow::Error;
    const HISTORY: Option<&'static str> = Some("/tmp/hoas.history");
    fn evaluate(&mut self, input: String) -> Result<(), Self::Error> {
        if input.trim().is_empty() {
            return Ok(());
        }
        if let Err(e) = Self::handle_repl_input(&input) {
            eprintln!("{e}");
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    println!("Hi, this is a HOAS term explorer. :h to show help");
    println!();
    repl::start_repl(Repl)?;
    Ok(())
}
