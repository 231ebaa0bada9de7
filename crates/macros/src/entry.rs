use proc_macro::{Ident, Literal, Span, TokenStream, TokenTree};

use crate::tokens::{Error, Tokens};

/// Arguments to `#[entry]`.
#[derive(Default)]
struct Config {
    input: Option<Literal>,
    expect: Option<Vec<TokenTree>>,
}

pub(crate) fn build(args: TokenStream, item_stream: TokenStream) -> TokenStream {
    let mut errors = Vec::new();
    let config = parse_config(args, &mut errors);
    let name = fn_name(item_stream.clone());

    if name.is_none() {
        errors.push(Error::new(Span::call_site(), "expected a function"));
    }

    let mut out = Tokens::new(Span::call_site());

    match (&config.input, &name) {
        (Some(input), Some(name)) if errors.is_empty() => {
            let expect = config.expect.as_deref();

            // A solver called `main` is shadowed by the generated one, so it
            // has to live inside of it.
            if name.to_string() == "main" {
                signature(&mut out).braced(|s| {
                    s.tokens(item_stream);
                    body(s, input, expect, name);
                });
            } else {
                out.tokens(item_stream);
                signature(&mut out).braced(|s| body(s, input, expect, name));
            }
        }
        _ => {
            out.tokens(item_stream);

            for error in &errors {
                out.error(error);
            }
        }
    }

    out.into_stream()
}

fn parse_config(args: TokenStream, errors: &mut Vec<Error>) -> Config {
    let mut config = Config::default();
    let tokens = args.into_iter().collect::<Vec<_>>();

    for option in tokens.split(|tt| matches!(tt, TokenTree::Punct(p) if p.as_char() == ',')) {
        let [key, rest @ ..] = option else {
            continue;
        };

        let TokenTree::Ident(key) = key else {
            errors.push(Error::new(key.span(), "expected identifier"));
            continue;
        };

        let value = match rest {
            [TokenTree::Punct(p), value @ ..] if p.as_char() == '=' => value,
            _ => {
                errors.push(Error::new(key.span(), "expected assignment `=`"));
                continue;
            }
        };

        match key.to_string().as_str() {
            "input" => match value {
                [TokenTree::Literal(literal)] => {
                    config.input = Some(literal.clone());
                }
                _ => {
                    errors.push(Error::new(key.span(), "expected a string literal"));
                }
            },
            "expect" if !value.is_empty() => {
                config.expect = Some(value.to_vec());
            }
            "expect" => {
                errors.push(Error::new(key.span(), "expected an answer"));
            }
            name => {
                errors.push(Error::new(key.span(), format!("unknown option `{name}`")));
            }
        }
    }

    if config.input.is_none() {
        errors.push(Error::new(Span::call_site(), "missing `input` argument"));
    }

    config
}

/// Find the name of the annotated function.
fn fn_name(item_stream: TokenStream) -> Option<Ident> {
    let mut it = item_stream.into_iter();

    while let Some(tt) = it.next() {
        if matches!(&tt, TokenTree::Ident(ident) if ident.to_string() == "fn") {
            return match it.next()? {
                TokenTree::Ident(name) => Some(name),
                _ => None,
            };
        }
    }

    None
}

/// `fn main() -> lib::prelude::Result<()>`
fn signature(s: &mut Tokens) -> &mut Tokens {
    s.ident("fn")
        .ident("main")
        .parens(|_| {})
        .punct("->")
        .path(&["lib", "prelude", "Result"])
        .punct("<")
        .parens(|_| {})
        .punct(">")
}

fn body(s: &mut Tokens, input: &Literal, expect: Option<&[TokenTree]>, name: &Ident) {
    s.ident("let")
        .ident("opts")
        .punct("=")
        .path(&["lib", "cli", "Opts", "parse"])
        .parens(|_| {})
        .punct("?")
        .punct(";");

    s.ident("let")
        .parens(|s| {
            s.ident("input").punct(",").ident("path");
        })
        .punct("=")
        .path(&["lib", "input"])
        .punct("!")
        .parens(|s| {
            s.tokens([TokenTree::Literal(input.clone())])
                .punct(",")
                .punct("&")
                .ident("opts");
        })
        .punct(";");

    if let Some(expect) = expect {
        s.ident("let")
            .ident("expected")
            .punct("=")
            .tokens(expect.iter().cloned())
            .punct(";");
    }

    s.path(&["lib", "cli", "run"]).parens(|s| {
        s.punct("&")
            .ident("opts")
            .punct(",")
            .punct("&")
            .ident("path")
            .punct(",")
            .ident("input")
            .punct(",");

        if expect.is_some() {
            s.punct("|")
                .ident("value")
                .punct("|")
                .path(&["lib", "cli", "expect"])
                .parens(|s| {
                    s.ident("value").punct(",").punct("&").ident("expected");
                });
        } else {
            s.punct("|").ident("_").punct("|").ident("Ok").parens(|s| {
                s.parens(|_| {});
            });
        }

        s.punct(",").tokens([TokenTree::Ident(name.clone())]);
    });
}
