/// Build a tree, then check how it prints and what it evaluates to.
///
/// `value` is compared in decimal so results of any size can be written
/// as literals.
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        expr: |$b:ident| $build:expr,
        printed: $printed:expr,
        value: $value:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let arena = calc::ExprArena::new();
            let $b = calc::ExprBuilder::new(&arena);
            let expr: &calc::Expr<'_> = $build;

            pretty_assertions::assert_eq!(calc::print(expr), $printed);

            let expected: Result<&str, calc::EvalError> = $value;
            pretty_assertions::assert_eq!(
                calc::evaluate(expr).map(|value| value.to_string()),
                expected.map(String::from),
            );
        }
    };
}
