//! Selkie CLI
//!
//! Builds a selector from fragment and combinator tokens, for example:
//!
//! ```text
//! selkie element=div id=main + element=span        # div#main + span
//! selkie 'attr=href$=".png"' pseudo-class=focus     # [href$=".png"]:focus
//! ```

use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use selkie_common::warning::warn_once;
use selkie_common::{encode, encode_pretty};
use selkie_css::{FragmentKind, Selector, SelectorNode, Stringify, combinator};

/// Build a CSS selector from typed fragments.
#[derive(Debug, Parser)]
#[command(name = "selkie", version, about)]
struct Cli {
    /// Print the selector as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Indent the JSON output.
    #[arg(long, requires = "json")]
    pretty: bool,

    /// `kind=value` fragments and combinator symbols, in selector order.
    ///
    /// Kinds: element, id, class, attr (or attribute), pseudo-class,
    /// pseudo-element. Any other token is a combinator.
    #[arg(required = true, allow_hyphen_values = true, value_name = "TOKEN")]
    tokens: Vec<String>,
}

/// One command-line token.
#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Fragment(FragmentKind, &'a str),
    Combinator(&'a str),
}

/// Split `kind=value` tokens from combinators. The value is everything after
/// the first `=`.
fn classify(token: &str) -> Result<Token<'_>> {
    let Some((name, value)) = token.split_once('=') else {
        return Ok(Token::Combinator(token));
    };

    let looks_like_kind = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == '-');
    if !looks_like_kind {
        return Ok(Token::Combinator(token));
    }

    match name.parse::<FragmentKind>() {
        Ok(kind) => Ok(Token::Fragment(kind, value)),
        Err(_) => bail!("unknown fragment kind '{name}' in '{token}'"),
    }
}

/// Fold the tokens left to right into a selector.
fn build_selector(tokens: &[String]) -> Result<Selector> {
    let mut built: Option<(Selector, &str)> = None;
    let mut current = SelectorNode::new();

    for token in tokens {
        match classify(token)? {
            Token::Fragment(kind, value) => {
                let appended = current.append(kind, value).map(|_| ());
                appended.with_context(|| format!("cannot add '{token}' to '{current}'"))?;
            }
            Token::Combinator(symbol) => {
                if !combinator::is_conventional(symbol) {
                    warn_once(
                        "CLI",
                        &format!("combinator '{symbol}' is not one of ' ', '>', '+', '~'"),
                    );
                }
                let left = close(built.take(), std::mem::take(&mut current));
                built = Some((left, symbol));
            }
        }
    }

    Ok(close(built, current))
}

/// Combine the pending left side, if any, with the finished compound `node`.
fn close(pending: Option<(Selector, &str)>, node: SelectorNode) -> Selector {
    match pending {
        Some((left, symbol)) => left.combine(symbol, &node),
        None => node.into(),
    }
}

fn run(cli: &Cli) -> Result<String> {
    let selector = build_selector(&cli.tokens)?;

    if !cli.json {
        return Ok(selector.stringify());
    }

    let encoded = if cli.pretty {
        encode_pretty(&selector)
    } else {
        encode(&selector)
    };
    encoded.context("failed to encode selector as JSON")
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
