//! PlantUML rendering of graph definitions.
//!
//! Produces the diagram script only; turning it into an image (or opening
//! one) is left to the caller.

use crate::core::MARKER;
use crate::definition::{GraphDefinition, TransitionDefinition};
use std::fmt::Write;

/// Render `definition` as a PlantUML state diagram.
///
/// The root box is labelled `<<NFA>>` when any transition has several
/// candidates and `<<DFA>>` otherwise. States with a nondeterministic
/// outgoing transition carry the `<<NFA>>` stereotype and their event
/// labels are highlighted.
///
/// # Example
///
/// ```rust
/// use fsm_graph::builder::{transition, StateMachineBuilder};
/// use fsm_graph::render::plantuml;
///
/// let machine = StateMachineBuilder::<()>::new("switch")
///     .states([("off", ""), ("on", "")])
///     .events([("flip", "")])
///     .start(["off"])
///     .transition(transition("off", "flip", "on"))
///     .build();
///
/// let script = plantuml(&machine.definition());
/// assert!(script.contains("[*] --> off"));
/// assert!(script.contains("off --> on : (flip)"));
/// ```
pub fn plantuml(definition: &GraphDefinition) -> String {
    let kind = if definition.is_nondeterministic() {
        "NFA"
    } else {
        "DFA"
    };
    let title = if definition.name.is_empty() {
        String::new()
    } else {
        format!("<b>[{}]</b> ", definition.name)
    };

    let mut out = String::new();
    out.push_str("@startuml\n");
    out.push_str("skinparam state {\n  BackgroundColor<<NFA>> Red\n}\n");
    let _ = writeln!(
        out,
        "state \"<font color=red><b><<{kind}>></b></font>\\n{title}State Graph\" as rootGraph {{"
    );

    for declared in &definition.states {
        let state = &declared.name;
        let stereotype = if definition
            .transitions_from(state)
            .any(TransitionDefinition::is_nondeterministic)
        {
            " <<NFA>>"
        } else {
            ""
        };
        let _ = write!(out, "  state \"{state}\" as {state}{stereotype}");
        if !declared.description.is_empty() {
            let _ = write!(out, " : {}", declared.description);
        }
        out.push('\n');
    }

    out.push('\n');

    for state in &definition.start {
        let _ = writeln!(out, "  {MARKER} --> {state}");
    }

    for transition in &definition.transitions {
        let label = event_label(definition, transition);
        for to in &transition.to {
            let _ = writeln!(out, "  {} --> {to}{label}", transition.from);
        }
    }

    for state in &definition.end {
        let _ = writeln!(out, "  {state} --> {MARKER}");
    }

    out.push_str("}\n@enduml\n");
    out
}

fn event_label(definition: &GraphDefinition, transition: &TransitionDefinition) -> String {
    if transition.event.is_empty() {
        return String::new();
    }
    let mut label = format!("({})", transition.event);
    let description = definition.event_description(&transition.event);
    if !description.is_empty() {
        label.push(' ');
        label.push_str(description);
    }
    if transition.is_nondeterministic() {
        label = format!("<font color=red><b>{label}</b></font>");
    }
    format!(" : {label}")
}
