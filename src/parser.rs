use crate::ast::AstNode;
use crate::error::ParseError;
use crate::token::Token;

/// Default cap on `(` nesting depth. `base`'s `'(' expr ')'` arm recurses
/// back into `parse_expr`, so a pattern that is nothing but opening parens
/// drives the parser's own call stack one frame deeper per `(` — bounding it
/// here is what keeps that recursion from overflowing the native stack,
/// independent of whatever [`AstNode::depth`] budget the builder enforces
/// afterward on the (possibly much shallower) tree that recursion produces.
pub const DEFAULT_MAX_PAREN_DEPTH: usize = 512;

/// Recursive-descent parser over a token slice.
///
/// Grammar (lowest to highest precedence), `|` left-associative by fold,
/// concatenation implicit by juxtaposition:
///
/// ```text
/// expr   := term ('|' term)*
/// term   := factor factor*
/// factor := base ('*' | '+' | '?')*
/// base   := CHAR | '(' expr ')'
/// ```
pub struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    paren_depth: usize,
    max_paren_depth: usize,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self::with_max_paren_depth(tokens, DEFAULT_MAX_PAREN_DEPTH)
    }

    /// Same as [`Parser::new`], but with an explicit cap on `(` nesting
    /// depth instead of [`DEFAULT_MAX_PAREN_DEPTH`] — mainly so tests can
    /// exercise the guard without constructing a pattern hundreds of
    /// thousands of parens deep.
    pub fn with_max_paren_depth(tokens: &'t [Token], max_paren_depth: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            paren_depth: 0,
            max_paren_depth,
        }
    }

    /// Parses the entire token slice as a single expression, failing on any
    /// trailing tokens (a stray `)` or quantifier left dangling).
    pub fn parse(mut self) -> Result<AstNode, ParseError> {
        if self.tokens.is_empty() {
            return Err(ParseError::new(0, "empty pattern"));
        }
        let node = self.parse_expr()?;
        if self.pos != self.tokens.len() {
            return Err(ParseError::new(
                self.pos,
                format!("unexpected trailing token {:?}", self.tokens[self.pos]),
            ));
        }
        Ok(node)
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse_expr(&mut self) -> Result<AstNode, ParseError> {
        let mut node = self.parse_term()?;
        while self.peek() == Some(Token::Or) {
            self.advance();
            let rhs = self.parse_term()?;
            node = AstNode::or(node, rhs);
        }
        Ok(node)
    }

    fn parse_term(&mut self) -> Result<AstNode, ParseError> {
        let mut node = self.parse_factor()?;
        while matches!(self.peek(), Some(t) if t.starts_factor()) {
            let rhs = self.parse_factor()?;
            node = AstNode::concat(node, rhs);
        }
        Ok(node)
    }

    fn parse_factor(&mut self) -> Result<AstNode, ParseError> {
        let mut node = self.parse_base()?;
        while matches!(self.peek(), Some(t) if t.is_quantifier()) {
            node = match self.advance().unwrap() {
                Token::Star => AstNode::star(node),
                Token::Plus => AstNode::plus(node),
                Token::Question => AstNode::question(node),
                _ => unreachable!("loop guard only admits quantifier tokens"),
            };
        }
        Ok(node)
    }

    fn parse_base(&mut self) -> Result<AstNode, ParseError> {
        match self.advance() {
            Some(Token::Char(c)) => Ok(AstNode::Char(c)),
            Some(Token::LParen) => {
                self.paren_depth += 1;
                if self.paren_depth > self.max_paren_depth {
                    return Err(ParseError::new(self.pos - 1, "pattern nested too deeply"));
                }
                if self.peek() == Some(Token::RParen) {
                    return Err(ParseError::new(self.pos, "empty group '()'"));
                }
                let inner = self.parse_expr()?;
                self.paren_depth -= 1;
                match self.advance() {
                    Some(Token::RParen) => Ok(inner),
                    Some(other) => Err(ParseError::new(
                        self.pos - 1,
                        format!("expected ')', found {:?}", other),
                    )),
                    None => Err(ParseError::new(self.pos, "unterminated group, expected ')'")),
                }
            }
            Some(other @ (Token::Star | Token::Plus | Token::Question)) => Err(ParseError::new(
                self.pos - 1,
                format!("quantifier {:?} with nothing to repeat", other),
            )),
            Some(Token::Or) => Err(ParseError::new(self.pos - 1, "'|' with missing operand")),
            Some(Token::RParen) => Err(ParseError::new(self.pos - 1, "unmatched ')'")),
            Some(other @ Token::Eof) | Some(other @ Token::Error(_)) => Err(ParseError::new(
                self.pos - 1,
                format!("unexpected {:?} token reached parser", other),
            )),
            None => Err(ParseError::new(self.pos, "unexpected end of pattern")),
        }
    }
}
