//! Rule assembly through the public API.

use nobuild_lib::compiler::Compiler;
use nobuild_lib::consts::NAME_CAPACITY;
use nobuild_lib::execute::{CommandLine, ExecuteConfig, ExecuteError, build};
use nobuild_lib::item::{ItemList, NamedItem};
use nobuild_lib::rule::{BuildRule, RuleError};

fn demo_rule() -> BuildRule {
  let mut cc = Compiler::new();
  cc.set_command("gcc");

  let mut flags = ItemList::new();
  flags.append("-Wall").unwrap();
  flags.append("-Wextra").unwrap();

  let mut dependencies = ItemList::new();
  dependencies.append("test/foo.c").unwrap();
  dependencies.append("test/bar.c").unwrap();

  let mut rule = BuildRule::new();
  rule
    .assemble(cc, flags, NamedItem::new("test/main.c").unwrap(), dependencies, "out")
    .unwrap();
  rule
}

#[test]
fn demo_rule_serializes_to_expected_argv() {
  let line = CommandLine::from_rule(&demo_rule()).unwrap();

  assert_eq!(
    line.argv(),
    ["gcc", "-Wall", "-Wextra", "-o", "out", "test/main.c", "test/foo.c", "test/bar.c"]
  );
}

#[test]
fn rejected_append_keeps_list_intact() {
  let mut flags = ItemList::try_from_names(["-O2", "-g"]).unwrap();

  assert!(flags.append("x".repeat(NAME_CAPACITY)).is_err());
  assert!(flags.append("x".repeat(NAME_CAPACITY * 3)).is_err());

  assert_eq!(flags.names().collect::<Vec<_>>(), ["-O2", "-g"]);
}

#[tokio::test]
async fn rule_left_incomplete_is_never_spawned() {
  let mut rule = BuildRule::new();
  let result = rule.assemble(
    Compiler::with_command("gcc"),
    ItemList::new(),
    NamedItem::new("main.c").unwrap(),
    ItemList::new(),
    "out",
  );
  assert_eq!(result, Err(RuleError::NoDependencies));

  // Fields of the untouched rule stay readable.
  assert!(rule.compiler().is_none());
  assert_eq!(rule.output(), "");

  let err = build(&rule, &ExecuteConfig::default()).await.unwrap_err();
  assert!(matches!(err, ExecuteError::MalformedRule(RuleError::MissingCompiler)));
}

#[test]
fn rule_without_target_is_incomplete() {
  let err = BuildRule::builder()
    .compiler(Compiler::with_command("gcc"))
    .dependency("foo.c")
    .build()
    .unwrap_err();
  assert_eq!(err, RuleError::MissingTarget);
}

#[test]
fn parts_are_returned_once() {
  let parts = demo_rule().into_parts();

  let cc = parts.compiler.unwrap();
  assert_eq!(cc.flags().len(), 2);
  assert_eq!(parts.dependencies.len(), 2);
  assert_eq!(parts.target.unwrap().name(), "test/main.c");
}

#[test]
fn rules_can_move_across_threads() {
  let rule = demo_rule();
  let rendered = std::thread::spawn(move || nobuild_lib::execute::render(&rule).unwrap())
    .join()
    .unwrap();
  assert_eq!(rendered, "gcc -Wall -Wextra -o out test/main.c test/foo.c test/bar.c");
}
