use proc_macro::{Delimiter, Group, Ident, Literal, Punct, Spacing, Span, TokenStream, TokenTree};

/// Error raised while expanding a macro.
pub(crate) struct Error {
    span: Span,
    message: String,
}

impl Error {
    pub(crate) fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// Builder for an output token stream.
///
/// Every token written gets the span the builder was constructed with.
pub(crate) struct Tokens {
    out: Vec<TokenTree>,
    span: Span,
}

impl Tokens {
    pub(crate) fn new(span: Span) -> Self {
        Self {
            out: Vec::new(),
            span,
        }
    }

    pub(crate) fn ident(&mut self, name: &str) -> &mut Self {
        self.out.push(TokenTree::Ident(Ident::new(name, self.span)));
        self
    }

    /// Write punctuation, where consecutive characters are joint.
    pub(crate) fn punct(&mut self, chars: &str) -> &mut Self {
        let mut it = chars.chars().peekable();

        while let Some(c) = it.next() {
            let spacing = if it.peek().is_some() {
                Spacing::Joint
            } else {
                Spacing::Alone
            };

            let mut p = Punct::new(c, spacing);
            p.set_span(self.span);
            self.out.push(TokenTree::Punct(p));
        }

        self
    }

    /// Write a path like `lib::cli::run`.
    pub(crate) fn path(&mut self, segments: &[&str]) -> &mut Self {
        for (n, segment) in segments.iter().enumerate() {
            if n > 0 {
                self.punct("::");
            }

            self.ident(segment);
        }

        self
    }

    pub(crate) fn string(&mut self, value: &str) -> &mut Self {
        let mut literal = Literal::string(value);
        literal.set_span(self.span);
        self.out.push(TokenTree::Literal(literal));
        self
    }

    pub(crate) fn group(&mut self, delimiter: Delimiter, f: impl FnOnce(&mut Tokens)) -> &mut Self {
        let mut inner = Tokens::new(self.span);
        f(&mut inner);
        let mut group = Group::new(delimiter, inner.into_stream());
        group.set_span(self.span);
        self.out.push(TokenTree::Group(group));
        self
    }

    pub(crate) fn parens(&mut self, f: impl FnOnce(&mut Tokens)) -> &mut Self {
        self.group(Delimiter::Parenthesis, f)
    }

    pub(crate) fn braced(&mut self, f: impl FnOnce(&mut Tokens)) -> &mut Self {
        self.group(Delimiter::Brace, f)
    }

    /// Write tokens as they are, keeping their spans.
    pub(crate) fn tokens(&mut self, tokens: impl IntoIterator<Item = TokenTree>) -> &mut Self {
        self.out.extend(tokens);
        self
    }

    /// Write `compile_error!("..");` pointing at the span of the error.
    pub(crate) fn error(&mut self, error: &Error) -> &mut Self {
        let mut tokens = Tokens::new(error.span);

        tokens
            .ident("compile_error")
            .punct("!")
            .parens(|s| {
                s.string(&error.message);
            })
            .punct(";");

        self.out.extend(tokens.out);
        self
    }

    pub(crate) fn into_stream(self) -> TokenStream {
        self.out.into_iter().collect()
    }
}
