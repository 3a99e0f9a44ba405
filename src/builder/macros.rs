//! Macros for ergonomic automaton construction.

/// Build an [`Automaton`](crate::core::Automaton) from a literal description.
///
/// Expands to an [`AutomatonBuilder`](crate::builder::AutomatonBuilder)
/// chain and evaluates to `Result<Automaton, BuildError>`. Flags in
/// parentheses after a state name are `start` and/or `accept`.
///
/// # Example
///
/// ```
/// use dfa_runner::automaton;
/// use dfa_runner::core::accepts;
///
/// let graph = automaton! {
///     states: [Even(start, accept), Odd],
///     transitions: [
///         (Even, "0", Even),
///         (Even, "1", Odd),
///         (Odd, "0", Odd),
///         (Odd, "1", Even),
///     ],
/// }
/// .unwrap();
///
/// assert!(accepts(&graph, "0110").unwrap());
/// assert!(!accepts(&graph, "010").unwrap());
/// ```
#[macro_export]
macro_rules! automaton {
    (
        states: [ $( $label:ident $( ( $($flag:ident),* $(,)? ) )? ),* $(,)? ],
        transitions: [ $( ($from:ident, $symbol:literal, $to:ident) ),* $(,)? ] $(,)?
    ) => {{
        let builder = $crate::builder::AutomatonBuilder::new();
        $(
            let builder = builder.with_flags(
                stringify!($label),
                $crate::builder::StateFlags::NONE $($( .$flag() )*)?,
            );
        )*
        $(
            let builder = builder.transition(stringify!($from), $symbol, stringify!($to));
        )*
        builder.build()
    }};
}
