//! Macros for declaring vocabularies.

/// Build a `(name, description)` list for
/// [`StateMachineBuilder::states`](crate::builder::StateMachineBuilder::states)
/// or [`events`](crate::builder::StateMachineBuilder::events).
///
/// Entries without `=> description` get an empty description.
///
/// # Example
///
/// ```
/// use fsm_graph::builder::StateMachineBuilder;
/// use fsm_graph::vocabulary;
///
/// let machine = StateMachineBuilder::<()>::new("door")
///     .states(vocabulary![
///         "open" => "door is open",
///         "closed",
///     ])
///     .events(vocabulary!["push", "pull"])
///     .build();
///
/// assert_eq!(machine.graph().states().len(), 2);
/// ```
#[macro_export]
macro_rules! vocabulary {
    (@description) => { "" };
    (@description $description:expr) => { $description };
    ($($name:expr $(=> $description:expr)?),* $(,)?) => {
        ::std::vec![$(($name, $crate::vocabulary!(@description $($description)?))),*]
    };
}
