//! Tests for task factories.

use super::*;
use crate::agent;
use crate::config::ConfigDocument;
use crate::registry::DiscoveryTable;

fn agent_registry(yaml: &str) -> Arc<FactoryRegistry<Agent>> {
    let doc = ConfigDocument::from_yaml(yaml).unwrap();
    let mut host = DiscoveryTable::new();
    Arc::new(FactoryRegistry::register_all(doc, agent::build_factory, &mut host).unwrap())
}

fn attributes(yaml: &str) -> Attributes {
    serde_yaml::from_str(yaml).unwrap()
}

#[test]
fn test_task_resolves_its_agent() {
    let builder = TaskBuilder::new(agent_registry("writer:\n  role: Writer\n"));
    let factory = builder.build(
        "draft",
        attributes("description: Write the draft\nexpected_output: A draft\nagent: writer\n"),
    );

    let task = factory().unwrap();

    assert_eq!(task.name, "draft");
    assert_eq!(task.agent_name(), "writer");
    assert_eq!(task.agent.role(), Some("Writer"));
    assert_eq!(task.description(), Some("Write the draft"));
    assert_eq!(task.expected_output(), Some("A draft"));
    assert_eq!(task.output_file(), None);
}

#[test]
fn test_task_carries_output_file() {
    let builder = TaskBuilder::new(agent_registry("writer: {}\n"));
    let factory = builder.build(
        "draft",
        attributes("agent: writer\noutput_file: out/draft.md\n"),
    );

    let task = factory().unwrap();

    assert_eq!(task.output_file(), Some(Path::new("out/draft.md")));
}

#[test]
fn test_task_agent_matches_direct_resolution() {
    let agents = agent_registry("editor:\n  goal: Polish\n");
    let builder = TaskBuilder::new(Arc::clone(&agents));
    let factory = builder.build("edit", attributes("agent: editor\n"));

    let task = factory().unwrap();
    let direct = agents.resolve("editor").unwrap();

    assert_eq!(*task.agent, direct);
}

#[test]
fn test_task_without_agent_field_fails() {
    let builder = TaskBuilder::new(agent_registry("writer: {}\n"));
    let factory = builder.build("orphan", attributes("description: Nobody owns this\n"));

    let err = factory().unwrap_err();

    assert!(err.is_unknown_agent());
    assert!(matches!(err, CrewError::UnassignedTask { ref task } if task == "orphan"));
}

#[test]
fn test_task_with_unknown_agent_fails() {
    let builder = TaskBuilder::new(agent_registry("writer: {}\n"));
    let factory = builder.build("draft", attributes("agent: ghost\n"));

    let err = factory().unwrap_err();

    assert!(err.is_unknown_agent());
    let message = err.to_string();
    assert!(message.contains("ghost"));
    assert!(message.contains("writer")); // available agents
}

#[test]
fn test_building_factory_does_not_resolve_agent() {
    let builder = TaskBuilder::new(agent_registry(""));

    // Registration succeeds; only invocation looks the agent up.
    let factory = builder.build("draft", attributes("agent: missing\n"));

    assert!(factory().is_err());
}

#[test]
fn test_non_string_output_file_fails() {
    let builder = TaskBuilder::new(agent_registry("writer: {}\n"));
    let factory = builder.build("draft", attributes("agent: writer\noutput_file: 2024\n"));

    let err = factory().unwrap_err();

    match err {
        CrewError::InvalidTask { task, key, found } => {
            assert_eq!(task, "draft");
            assert_eq!(key, OUTPUT_FILE_KEY);
            assert_eq!(found, "a number");
        }
        other => panic!("expected InvalidTask, got {other:?}"),
    }
}

#[test]
fn test_sequence_output_file_fails() {
    let builder = TaskBuilder::new(agent_registry("writer: {}\n"));
    let factory = builder.build(
        "draft",
        attributes("agent: writer\noutput_file: [a.md, b.md]\n"),
    );

    let err = factory().unwrap_err();

    assert!(matches!(err, CrewError::InvalidTask { ref found, .. } if found == "a sequence"));
    assert!(!err.is_unknown_agent());
}

#[test]
fn test_null_output_file_is_absent() {
    let builder = TaskBuilder::new(agent_registry("writer: {}\n"));
    let factory = builder.build("draft", attributes("agent: writer\noutput_file: ~\n"));

    assert_eq!(factory().unwrap().output_file(), None);
}

#[test]
fn test_non_string_agent_reports_its_type() {
    let builder = TaskBuilder::new(agent_registry("writer: {}\n"));
    let factory = builder.build("draft", attributes("agent: 42\n"));

    let err = factory().unwrap_err();

    assert!(err.is_unknown_agent());
    assert!(matches!(err, CrewError::InvalidTask { ref key, .. } if key == AGENT_KEY));
    assert_eq!(
        err.to_string(),
        "task 'draft' has an invalid 'agent': expected a string, found a number"
    );
}
