use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::debug;

use typemaths::ast::SyntaxTree;
use typemaths::calculus::read;
use typemaths::doc::render_file;
use typemaths::interpreter::evaluate;
use typemaths::lexer::{expression_tokenizer, filter_whitespace};
use typemaths::numerical::{Bisection, NewtonRaphson, Secant, limit};
use typemaths::parser::parse_expression;

#[derive(Parser)]
#[command(name = "typemaths")]
#[command(about = "Evaluate, differentiate and solve arithmetic expressions")]
struct Args {
    /// More output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate an expression
    Eval { expression: String },

    /// Print the syntax tree of an expression, fully parenthesised
    Tree { expression: String },

    /// Print the tokens of an expression
    Tokens {
        expression: String,

        #[arg(long)]
        keep_whitespace: bool,
    },

    /// Differentiate a function of x
    Diff {
        expression: String,

        /// Also evaluate f and f' at this point
        #[arg(long)]
        at: Option<f64>,
    },

    /// Find a root of a function of x
    Root {
        expression: String,

        #[arg(long, value_enum, default_value_t = Method::Newton)]
        method: Method,

        /// Starting point (or left end of the interval)
        #[arg(long)]
        from: f64,

        /// Second starting point (or right end of the interval)
        #[arg(long)]
        to: Option<f64>,

        #[arg(long, default_value_t = 1e-6)]
        tolerance: f64,
    },

    /// Render Markdown documentation from documentation blocks
    Doc { input: PathBuf, output: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum Method {
    Newton,
    Secant,
    Bisection,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match args.command {
        Command::Eval { expression } => {
            println!("{}", evaluate(&expression)?);
        }
        Command::Tree { expression } => {
            println!("{}", parse_expression(SyntaxTree, &expression)?);
        }
        Command::Tokens {
            expression,
            keep_whitespace,
        } => {
            let mut tokens = expression_tokenizer().tokenize(&expression)?;
            if !keep_whitespace {
                tokens = filter_whitespace(tokens);
            }
            for token in tokens {
                println!("{token}");
            }
        }
        Command::Diff { expression, at } => {
            let f = read(&expression)?;
            let df = f.derivative();
            println!("f(x)  = {f}");
            println!("f'(x) = {df}");
            if let Some(x) = at {
                println!("f({x}) = {}", f.eval(x));
                println!("f'({x}) = {}", df.eval(x));
            }
        }
        Command::Root {
            expression,
            method,
            from,
            to,
            tolerance,
        } => {
            let f = read(&expression)?;
            let df = f.derivative();
            debug!("f'(x) = {df}");

            let eval = |x: f64| f.eval(x);
            let root = match (method, to) {
                (Method::Newton, _) => limit(tolerance, NewtonRaphson::new(eval, |x| df.eval(x), from)),
                (Method::Secant, Some(to)) => limit(tolerance, Secant::new(eval, from, to)),
                (Method::Bisection, Some(to)) => limit(tolerance, Bisection::new(eval, from, to)),
                (_, None) => bail!("this method needs --to"),
            };
            let root = root.context("the iteration stopped before converging")?;
            println!("{root}");
        }
        Command::Doc { input, output } => {
            render_file(&input, &output)?;
        }
    }

    Ok(())
}
