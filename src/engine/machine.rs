//! Frozen state machine and the trigger algorithm.

use crate::core::{Event, EventProcessor, HookError, NoopProcessor, State, StateGraph, Transition};
use crate::definition::GraphDefinition;
use crate::engine::error::TriggerError;
use std::sync::Arc;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;

/// A declared state machine, ready to be triggered.
///
/// Built once through [`StateMachineBuilder`](crate::builder::StateMachineBuilder)
/// and immutable afterwards. Triggering only reads the graph, so a machine
/// can be cloned (cheaply) and triggered from many threads at once.
pub struct StateMachine<C = ()> {
    processor: Arc<dyn EventProcessor<C>>,
    graph: Arc<StateGraph<C>>,
}

impl<C: 'static> StateMachine<C> {
    pub(crate) fn new(graph: StateGraph<C>, processor: Option<Arc<dyn EventProcessor<C>>>) -> Self {
        Self {
            processor: processor.unwrap_or_else(|| Arc::new(NoopProcessor)),
            graph: Arc::new(graph),
        }
    }
}

impl<C> StateMachine<C> {
    pub fn name(&self) -> &str {
        self.graph.name()
    }

    /// Read-only view of the declared graph.
    pub fn graph(&self) -> &StateGraph<C> {
        &self.graph
    }

    pub fn transition(&self, from: &State, event: &Event) -> Option<&Transition<C>> {
        self.graph.transition(from, event)
    }

    pub fn is_nondeterministic(&self) -> bool {
        self.graph.is_nondeterministic()
    }

    /// Export the graph as plain data.
    pub fn definition(&self) -> GraphDefinition {
        GraphDefinition::from(self.graph.as_ref())
    }

    /// Fire `event` from `from`.
    ///
    /// Rejects undeclared states and events, then looks up the transition,
    /// runs the exit hook, the action, and either the failure hook or the
    /// enter hook. Hook errors are logged and discarded. The state returned
    /// by the action is trusted as-is.
    pub fn trigger(&self, ctx: &C, from: &State, event: &Event) -> Result<State, TriggerError> {
        if !self.graph.has_state(from) {
            tracing::debug!(machine = %self.name(), from = %from, "unknown state");
            return Err(TriggerError::UnknownState {
                state: from.clone(),
            });
        }
        if !self.graph.has_event(event) {
            tracing::debug!(machine = %self.name(), event = %event, "unknown event");
            return Err(TriggerError::UnknownEvent {
                event: event.clone(),
            });
        }
        let Some(transition) = self.graph.transition(from, event) else {
            tracing::debug!(
                machine = %self.name(),
                from = %from,
                event = %event,
                "no transition defined"
            );
            return Err(TriggerError::UndefinedTransition {
                from: from.clone(),
                event: event.clone(),
            });
        };

        let processor = transition.processor.as_ref().unwrap_or(&self.processor);

        self.discard("on_exit", processor.on_exit(ctx, from, event));

        match (transition.action)(ctx, from, event, &transition.to) {
            Ok(to) => {
                self.discard("on_enter", processor.on_enter(ctx, &to));
                tracing::debug!(
                    machine = %self.name(),
                    from = %from,
                    event = %event,
                    to = %to,
                    "transition fired"
                );
                Ok(to)
            }
            Err(failure) => {
                tracing::warn!(
                    machine = %self.name(),
                    from = %from,
                    event = %event,
                    error = %failure,
                    "transition action failed"
                );
                self.discard(
                    "on_action_failure",
                    processor.on_action_failure(ctx, from, event, &transition.to, &failure),
                );
                Err(TriggerError::Action {
                    state: failure.state,
                    source: failure.source,
                })
            }
        }
    }

    fn discard(&self, hook: &'static str, result: Result<(), HookError>) {
        if let Err(err) = result {
            tracing::warn!(machine = %self.name(), hook, error = %err, "hook failed");
        }
    }
}

impl<C: Clone + Send + Sync + 'static> StateMachine<C> {
    /// [`trigger`](Self::trigger) as an effect whose environment is the
    /// context.
    pub fn trigger_effect(&self, from: State, event: Event) -> BoxedEffect<State, TriggerError, C> {
        let machine = self.clone();
        from_fn(move |ctx: &C| machine.trigger(ctx, &from, &event)).boxed()
    }
}

impl<C> Clone for StateMachine<C> {
    fn clone(&self) -> Self {
        Self {
            processor: Arc::clone(&self.processor),
            graph: Arc::clone(&self.graph),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{transition, StateMachineBuilder};
    use crate::core::{ActionFailure, HookError};
    use std::sync::Mutex;
    use stillwater::effect::Effect;

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<String>>,
        fail: bool,
    }

    impl Recorder {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn push(&self, call: String) -> Result<(), HookError> {
            self.calls.lock().unwrap().push(call);
            if self.fail {
                Err("hook failed".into())
            } else {
                Ok(())
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl EventProcessor for Recorder {
        fn on_exit(&self, _ctx: &(), state: &State, event: &Event) -> Result<(), HookError> {
            self.push(format!("exit {state} {event}"))
        }

        fn on_action_failure(
            &self,
            _ctx: &(),
            from: &State,
            event: &Event,
            to: &[State],
            failure: &ActionFailure,
        ) -> Result<(), HookError> {
            let to: Vec<&str> = to.iter().map(State::as_str).collect();
            self.push(format!("failure {from} {event} [{}] {failure}", to.join(",")))
        }

        fn on_enter(&self, _ctx: &(), state: &State) -> Result<(), HookError> {
            self.push(format!("enter {state}"))
        }
    }

    fn lifecycle() -> StateMachineBuilder {
        StateMachineBuilder::new("lifecycle")
            .states([("idle", ""), ("running", ""), ("done", "")])
            .events([("start", ""), ("finish", "")])
            .transition(transition("idle", "start", "running"))
            .transition(transition("running", "finish", "done"))
    }

    #[test]
    fn deterministic_transitions_follow_the_table() {
        let machine = lifecycle().build();

        let running = machine
            .trigger(&(), &State::from("idle"), &Event::from("start"))
            .unwrap();
        assert_eq!(running, State::from("running"));

        let done = machine.trigger(&(), &running, &Event::from("finish")).unwrap();
        assert_eq!(done, State::from("done"));
    }

    #[test]
    fn missing_transition_is_undefined() {
        let machine = lifecycle().build();
        let err = machine
            .trigger(&(), &State::from("done"), &Event::from("start"))
            .unwrap_err();
        assert!(matches!(err, TriggerError::UndefinedTransition { .. }));
        assert!(err.state().is_none());
    }

    #[test]
    fn undeclared_origin_is_rejected_before_lookup() {
        let machine = lifecycle()
            .transition(transition("ghost", "start", "running"))
            .build();
        let err = machine
            .trigger(&(), &State::from("ghost"), &Event::from("start"))
            .unwrap_err();
        assert!(matches!(err, TriggerError::UnknownState { .. }));
    }

    #[test]
    fn undeclared_event_is_rejected() {
        let machine = lifecycle().build();
        let err = machine
            .trigger(&(), &State::from("idle"), &Event::from("explode"))
            .unwrap_err();
        assert!(matches!(err, TriggerError::UnknownEvent { .. }));
    }

    #[test]
    fn hooks_run_in_order_around_the_action() {
        let recorder = Arc::new(Recorder::default());
        let machine = lifecycle().processor(Arc::clone(&recorder)).build();

        machine
            .trigger(&(), &State::from("idle"), &Event::from("start"))
            .unwrap();

        assert_eq!(recorder.calls(), vec!["exit idle start", "enter running"]);
    }

    #[test]
    fn validation_failures_run_no_hooks() {
        let recorder = Arc::new(Recorder::default());
        let machine = lifecycle().processor(Arc::clone(&recorder)).build();

        let _ = machine.trigger(&(), &State::from("done"), &Event::from("start"));
        let _ = machine.trigger(&(), &State::from("ghost"), &Event::from("start"));

        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn transition_processor_overrides_default() {
        let default = Arc::new(Recorder::default());
        let own = Arc::new(Recorder::default());
        let machine = lifecycle()
            .processor(Arc::clone(&default))
            .transition(
                Transition::new("idle", "finish", ["done"]).with_processor(Arc::clone(&own)),
            )
            .build();

        machine
            .trigger(&(), &State::from("idle"), &Event::from("finish"))
            .unwrap();

        assert!(default.calls().is_empty());
        assert_eq!(own.calls(), vec!["exit idle finish", "enter done"]);
    }

    #[test]
    fn action_failure_is_reported_with_all_candidates() {
        let recorder = Arc::new(Recorder::default());
        let machine = StateMachineBuilder::new("nfa")
            .states([("s", ""), ("x", ""), ("y", "")])
            .events([("e", "")])
            .processor(Arc::clone(&recorder))
            .transition(
                Transition::new("s", "e", ["x", "y"])
                    .with_action(|_, _, _, _| Err(ActionFailure::new(State::from("y"), "refused"))),
            )
            .build();

        let err = machine
            .trigger(&(), &State::from("s"), &Event::from("e"))
            .unwrap_err();

        assert!(err.is_action_failure());
        assert_eq!(err.state(), State::from("y"));
        assert_eq!(err.to_string(), "transition action failed: refused");
        assert_eq!(recorder.calls(), vec!["exit s e", "failure s e [x,y] refused"]);
    }

    #[test]
    fn failing_hooks_do_not_change_the_outcome() {
        let machine = lifecycle().processor(Recorder::failing()).build();

        let result = machine.trigger(&(), &State::from("idle"), &Event::from("start"));
        assert_eq!(result.unwrap(), State::from("running"));
    }

    #[test]
    fn returned_state_is_not_checked_against_vocabulary() {
        let machine = lifecycle()
            .transition(
                Transition::new("idle", "finish", ["done"])
                    .with_action(|_, _, _, _| Ok(State::from("elsewhere"))),
            )
            .build();

        let result = machine.trigger(&(), &State::from("idle"), &Event::from("finish"));
        assert_eq!(result.unwrap(), State::from("elsewhere"));
    }

    #[test]
    fn context_reaches_the_action() {
        let machine = StateMachineBuilder::<u32>::new("ctx")
            .states([("a", ""), ("low", ""), ("high", "")])
            .events([("measure", "")])
            .transition(
                Transition::new("a", "measure", ["low", "high"]).with_action(
                    |ctx: &u32, _, _, to| Ok(if *ctx > 10 { to[1].clone() } else { to[0].clone() }),
                ),
            )
            .build();

        let from = State::from("a");
        let event = Event::from("measure");
        assert_eq!(machine.trigger(&3, &from, &event).unwrap(), State::from("low"));
        assert_eq!(machine.trigger(&42, &from, &event).unwrap(), State::from("high"));
    }

    #[derive(Default)]
    struct ContextRecorder {
        seen: Mutex<Vec<(&'static str, u32)>>,
    }

    impl ContextRecorder {
        fn seen(&self) -> Vec<(&'static str, u32)> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl EventProcessor<u32> for ContextRecorder {
        fn on_exit(&self, ctx: &u32, _: &State, _: &Event) -> Result<(), HookError> {
            self.seen.lock().unwrap().push(("exit", *ctx));
            Ok(())
        }

        fn on_action_failure(
            &self,
            ctx: &u32,
            _: &State,
            _: &Event,
            _: &[State],
            _: &ActionFailure,
        ) -> Result<(), HookError> {
            self.seen.lock().unwrap().push(("failure", *ctx));
            Ok(())
        }

        fn on_enter(&self, ctx: &u32, _: &State) -> Result<(), HookError> {
            self.seen.lock().unwrap().push(("enter", *ctx));
            Ok(())
        }
    }

    #[test]
    fn context_reaches_every_hook() {
        let recorder = Arc::new(ContextRecorder::default());
        let machine = StateMachineBuilder::<u32>::new("ctx")
            .states([("a", ""), ("b", "")])
            .events([("go", ""), ("fail", "")])
            .processor(Arc::clone(&recorder))
            .transition(Transition::new("a", "go", ["b"]))
            .transition(
                Transition::new("a", "fail", ["b"])
                    .with_action(|_: &u32, _, _, _| Err(ActionFailure::without_state("boom"))),
            )
            .build();

        let from = State::from("a");
        let entered = machine.trigger(&7, &from, &Event::from("go")).unwrap();
        assert_eq!(entered, State::from("b"));
        assert!(machine.trigger(&9, &from, &Event::from("fail")).is_err());

        assert_eq!(
            recorder.seen(),
            vec![("exit", 7), ("enter", 7), ("exit", 9), ("failure", 9)]
        );
    }

    #[tokio::test]
    async fn trigger_effect_runs_with_context_as_environment() {
        let machine = lifecycle().build();

        let state = machine
            .trigger_effect(State::from("idle"), Event::from("start"))
            .run(&())
            .await
            .unwrap();
        assert_eq!(state, State::from("running"));

        let err = machine
            .trigger_effect(State::from("done"), Event::from("start"))
            .run(&())
            .await
            .unwrap_err();
        assert!(matches!(err, TriggerError::UndefinedTransition { .. }));
    }
}
