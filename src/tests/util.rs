macro_rules! text {
    ($s:expr) => { crate::node::Node::text($s) };
}

macro_rules! dec {
    ($l:literal) => { crate::node::Node::decimal(stringify!($l)) };
}

macro_rules! frac {
    ($t:expr, $b:expr $(,)?) => { crate::node::Node::fraction(vec![$t, $b], None).unwrap() };
    ($t:expr, $b:expr, markup $m:literal $(,)?) => {
        crate::node::Node::fraction(vec![$t, $b], Some($m.to_string())).unwrap()
    };
}

macro_rules! pow {
    ($b:expr, $e:expr $(,)?) => { crate::node::Node::exponent(vec![$b, $e], None).unwrap() };
    ($b:expr, $e:expr, markup $m:literal $(,)?) => {
        crate::node::Node::exponent(vec![$b, $e], Some($m.to_string())).unwrap()
    };
}

macro_rules! alg {
    ($($x:expr),* $(,)?) => { crate::node::Node::algebraic(vec![ $($x),* ], None) };
}

macro_rules! eqn {
    ($($x:expr),* $(,)?) => { crate::node::Node::equation(vec![ $($x),* ], None) };
}

macro_rules! input {
    ($id:literal => $expected:literal) => { crate::node::Node::input($id, $expected).unwrap() };
}

macro_rules! doc {
    ($($x:expr),* $(,)?) => { crate::node::Document::new(vec![ $($x),* ]) };
}

macro_rules! answers {
    ($($id:literal => $v:literal),* $(,)?) => {
        <crate::score::AnswerSet as std::iter::FromIterator<(&str, &str)>>::from_iter(vec![ $(($id, $v)),* ])
    };
}

/// The "what is 2+2" question:
///
/// ```text
/// What is 2+2? [a]
/// ```
pub fn what_is_two_plus_two() -> crate::node::Document {
    doc!(
        text!("What is "),
        eqn!(dec!(2), text!("+"), dec!(2)),
        input!("a" => "4"),
    )
}

/// A document with answer slots nested at several depths, followed by rich content which
/// mentions a slot but must not be searched:
///
/// ```text
///  [a]     [b][c]
///  --- + 2
///   3
///
///  <p>[x] is not a slot</p>
/// ```
pub fn nested_inputs() -> crate::node::Document {
    doc!(
        alg!(
            frac!(input!("a" => "1"), dec!(3)),
            text!("+"),
            pow!(dec!(2), alg!(input!("b" => "2"), input!("c" => "3"))),
        ),
        crate::node::Node::rich("<p>[x] is not a slot</p>").on_new_line(),
    )
}
