use std::collections::HashMap;

use crate::expression::{Expression, ExpressionError, Node, Notation, Operator};

fn num(n: i64) -> Box<Expression<i64>> {
    Box::new(Expression::Number(n))
}

#[test]
fn test_operator_apply_integer() {
    assert_eq!(Operator::Plus.apply(69_i64, 420), Ok(489));
    assert_eq!(Operator::Minus.apply(69_i64, 420), Ok(-351));
    assert_eq!(Operator::Times.apply(69_i64, 420), Ok(28980));
    assert_eq!(Operator::Divide.apply(420_i64, 70), Ok(6));
    assert_eq!(
        Operator::Divide.apply(420_i64, 69),
        Err(ExpressionError::InexactDivision)
    );
    assert_eq!(
        Operator::Divide.apply(420_i64, 0),
        Err(ExpressionError::DivisionByZero)
    );
    assert_eq!(
        Operator::Times.apply(i64::MAX, 2),
        Err(ExpressionError::Overflow)
    );
}

#[test]
fn test_operator_apply_float() {
    assert_eq!(Operator::Divide.apply(1.0_f64, 8.0), Ok(0.125));
    assert_eq!(
        Operator::Divide.apply(1.0_f64, 0.0),
        Err(ExpressionError::DivisionByZero)
    );
    assert_eq!(
        Operator::Times.apply(f64::MAX, 10.0),
        Err(ExpressionError::Overflow)
    );
}

#[test]
fn test_operator_symbols() {
    for op in Operator::BINARY {
        assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
    }
    assert_eq!(Operator::from_symbol('^'), None);
    assert!(Operator::Plus.is_commutative());
    assert!(Operator::Times.is_commutative());
    assert!(!Operator::Minus.is_commutative());
    assert!(!Operator::Divide.is_commutative());
}

#[test]
fn test_seed_node() {
    let node = Node::seed(69_i64);
    assert_eq!(node.value(), 69);
    assert_eq!(node.left(), 69);
    assert_eq!(node.right(), 69);
    assert_eq!(node.cost(), 1);
    assert!(node.is_seed());
}

#[test]
fn test_combined_node_cost_is_sum() {
    let a = Node::seed(69_i64);
    let b = Node::seed(420_i64);
    let sum = Node::combine(Operator::Plus, &a, &b);
    assert!(sum.is_ok());
    if let Ok(sum) = sum {
        assert_eq!(sum.value(), 489);
        assert_eq!(sum.cost(), 2);
        assert_eq!(sum.left(), 69);
        assert_eq!(sum.right(), 420);
        assert!(!sum.is_seed());

        let product = Node::combine(Operator::Times, &sum, &sum);
        assert!(matches!(product, Ok(ref p) if p.cost() == 4 && p.value() == 489 * 489));
    }
}

#[test]
fn test_combine_rejects_inexact_division() {
    let a = Node::seed(420_i64);
    let b = Node::seed(69_i64);
    assert_eq!(
        Node::combine(Operator::Divide, &a, &b),
        Err(ExpressionError::InexactDivision)
    );
}

#[test]
fn test_infix_display() {
    let expr = Expression::Sub(
        Box::new(Expression::Mul(num(69), num(420))),
        num(5),
    );
    assert_eq!(expr.to_string(), "((69*420)-5)");
    assert_eq!(Expression::Number(5_i64).to_string(), "5");
}

#[test]
fn test_negative_seed_is_parenthesized() {
    let expr = Expression::Sub(num(5), num(-3));
    assert_eq!(expr.to_string(), "(5-(-3))");
    assert_eq!(expr.to_rpn(), "5 -3 -");
}

#[test]
fn test_postfix_display() {
    let expr = Expression::Div(Box::new(Expression::Add(num(69), num(420))), num(3));
    assert_eq!(expr.to_rpn(), "69 420 + 3 /");
    assert_eq!(expr.render(Notation::Postfix), "69 420 + 3 /");
    assert_eq!(expr.render(Notation::Infix), "((69+420)/3)");
}

#[test]
fn test_evaluate_and_term_count() {
    let expr = Expression::Div(Box::new(Expression::Add(num(69), num(420))), num(3));
    assert_eq!(expr.evaluate(), Ok(163));
    assert_eq!(expr.term_count(), 3);

    let bad = Expression::Div(num(7), num(2));
    assert_eq!(bad.evaluate(), Err(ExpressionError::InexactDivision));

    let zero = Expression::Div(num(7), Box::new(Expression::Sub(num(2), num(2))));
    assert_eq!(zero.evaluate(), Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_from_nodes_rebuilds_tree() {
    let two = Node::seed(2_i64);
    let mut nodes = HashMap::new();
    nodes.insert(2, two);

    let four = Node::combine(Operator::Plus, &two, &two);
    assert!(four.is_ok());
    if let Ok(four) = four {
        nodes.insert(4, four);
        let sixteen = Node::combine(Operator::Times, &four, &four);
        assert!(sixteen.is_ok());
        if let Ok(sixteen) = sixteen {
            nodes.insert(16, sixteen);
        }
    }

    let lookup = |v: i64| nodes.get(&v);
    let expr = Expression::from_nodes(16, &lookup);
    assert!(expr.is_ok());
    if let Ok(expr) = expr {
        assert_eq!(expr.to_string(), "((2+2)*(2+2))");
        assert_eq!(expr.term_count(), 4);
        assert_eq!(expr.evaluate(), Ok(16));
    }

    assert_eq!(
        Expression::from_nodes(15, &lookup),
        Err(ExpressionError::UnknownValue("15".to_string()))
    );
}
