use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// A node in the abstract syntax tree produced by [`Parser`](crate::Parser).
///
/// Ownership of children is by `Box`, so the tree is freed in the usual
/// single recursive `Drop` pass — there's no cycle here for anything to go
/// wrong with, unlike the NFA (see [`crate::nfa`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
    Char(u8),
    Star(Box<AstNode>),
    Plus(Box<AstNode>),
    Question(Box<AstNode>),
    Or(Box<AstNode>, Box<AstNode>),
    Concat(Box<AstNode>, Box<AstNode>),
}

impl AstNode {
    pub fn star(child: AstNode) -> Self {
        AstNode::Star(Box::new(child))
    }
    pub fn plus(child: AstNode) -> Self {
        AstNode::Plus(Box::new(child))
    }
    pub fn question(child: AstNode) -> Self {
        AstNode::Question(Box::new(child))
    }
    pub fn or(left: AstNode, right: AstNode) -> Self {
        AstNode::Or(Box::new(left), Box::new(right))
    }
    pub fn concat(left: AstNode, right: AstNode) -> Self {
        AstNode::Concat(Box::new(left), Box::new(right))
    }

    /// Depth of the tree, counting the root as depth 1. Used by the builder
    /// to enforce its recursion budget before it ever recurses.
    ///
    /// Walked with an explicit stack rather than by recursing on `self`: a
    /// long run of concatenations or a long chain of stacked quantifiers
    /// builds a deep tree without the parser itself ever recursing (those
    /// are loops in `parse_term`/`parse_factor`, not recursive descent), so
    /// this is the one walk that has to survive an arbitrarily deep tree in
    /// order to reject it — a recursive `depth()` would overflow the native
    /// stack on exactly the input the builder's budget exists to catch.
    pub fn depth(&self) -> usize {
        let mut stack = vec![(self, 1usize)];
        let mut max_depth = 0;
        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            match node {
                AstNode::Char(_) => {}
                AstNode::Star(c) | AstNode::Plus(c) | AstNode::Question(c) => {
                    stack.push((c, depth + 1));
                }
                AstNode::Or(l, r) | AstNode::Concat(l, r) => {
                    stack.push((l, depth + 1));
                    stack.push((r, depth + 1));
                }
            }
        }
        max_depth
    }

    /// Pretty-print this tree via [`ptree`], the same facility `lang_pt`
    /// exposes on its own `ASTNode`.
    pub fn print(&self) -> std::io::Result<()> {
        ptree::print_tree(self)
    }
}

impl Display for AstNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AstNode::Char(c) => write!(f, "{}", *c as char),
            AstNode::Star(c) => write!(f, "({})*", c),
            AstNode::Plus(c) => write!(f, "({})+", c),
            AstNode::Question(c) => write!(f, "({})?", c),
            AstNode::Or(l, r) => write!(f, "({}|{})", l, r),
            AstNode::Concat(l, r) => write!(f, "({}{})", l, r),
        }
    }
}

impl ptree::TreeItem for AstNode {
    type Child = AstNode;

    fn write_self<W: std::io::Write>(&self, f: &mut W, _style: &ptree::Style) -> std::io::Result<()> {
        match self {
            AstNode::Char(c) => write!(f, "Char({})", *c as char),
            AstNode::Star(_) => write!(f, "Star"),
            AstNode::Plus(_) => write!(f, "Plus"),
            AstNode::Question(_) => write!(f, "Question"),
            AstNode::Or(_, _) => write!(f, "Or"),
            AstNode::Concat(_, _) => write!(f, "Concat"),
        }
    }

    fn children(&self) -> Cow<[Self::Child]> {
        match self {
            AstNode::Char(_) => Cow::Borrowed(&[]),
            AstNode::Star(c) | AstNode::Plus(c) | AstNode::Question(c) => {
                Cow::Owned(vec![(**c).clone()])
            }
            AstNode::Or(l, r) | AstNode::Concat(l, r) => {
                Cow::Owned(vec![(**l).clone(), (**r).clone()])
            }
        }
    }
}
