use crate::ast::AstNode;

#[test]
fn display_reconstructs_a_textual_form() {
    let tree = AstNode::concat(
        AstNode::Char(b'a'),
        AstNode::star(AstNode::or(AstNode::Char(b'b'), AstNode::Char(b'c'))),
    );
    assert_eq!(tree.to_string(), "(a(b|c)*)");
}

#[test]
fn depth_counts_the_root() {
    assert_eq!(AstNode::Char(b'a').depth(), 1);
    assert_eq!(AstNode::star(AstNode::Char(b'a')).depth(), 2);

    let nested = AstNode::plus(AstNode::question(AstNode::Char(b'a')));
    assert_eq!(nested.depth(), 3);
}

#[test]
fn depth_takes_the_deeper_branch_of_a_binary_node() {
    let shallow = AstNode::Char(b'a');
    let deep = AstNode::star(AstNode::star(AstNode::Char(b'b')));
    let tree = AstNode::concat(shallow, deep);
    assert_eq!(tree.depth(), 1 + 3);
}
