//! End-to-end builds against stub compilers.

#![cfg(unix)]

use std::path::Path;

use nobuild_lib::compiler::Compiler;
use nobuild_lib::execute::{BuildStatus, ExecuteConfig, Termination, build, build_blocking};
use nobuild_lib::rule::BuildRule;

use super::common::TestEnv;

fn rule_with(compiler: &Path, output: &str) -> BuildRule {
  BuildRule::builder()
    .compiler(Compiler::with_command(compiler.to_str().unwrap()))
    .flags(["-Wall", "-Wextra"])
    .target("main.c")
    .dependencies(["foo.c", "bar.c"])
    .output(output)
    .build()
    .unwrap()
}

#[tokio::test]
async fn stub_exiting_zero_reports_success() {
  let env = TestEnv::new();
  let gcc = env.stub_compiler("gcc", "exit 0");

  let status = build(&rule_with(&gcc, "out"), &ExecuteConfig::default()).await.unwrap();

  assert_eq!(status, BuildStatus::Succeeded);
}

#[tokio::test]
async fn stub_exiting_two_reports_failure() {
  let env = TestEnv::new();
  let gcc = env.stub_compiler("gcc", "exit 2");

  let status = build(&rule_with(&gcc, "out"), &ExecuteConfig::default()).await.unwrap();

  assert_eq!(status, BuildStatus::Failed(Termination::Exited(2)));
}

#[tokio::test]
async fn stub_sees_full_argument_vector() {
  let env = TestEnv::new();
  let record = env.path().join("argv");
  let gcc = env.stub_compiler(
    "gcc",
    &format!("printf '%s\\n' \"$0\" \"$@\" > '{}'", record.display()),
  );

  let status = build(&rule_with(&gcc, "out"), &ExecuteConfig::default()).await.unwrap();
  assert!(status.is_success());

  let argv: Vec<String> = std::fs::read_to_string(&record)
    .unwrap()
    .lines()
    .map(str::to_string)
    .collect();
  assert_eq!(argv[0], gcc.to_str().unwrap());
  assert_eq!(&argv[1..], ["-Wall", "-Wextra", "-o", "out", "main.c", "foo.c", "bar.c"]);
}

#[test]
fn stub_writes_output_in_working_directory() {
  let env = TestEnv::new();
  env.write_file("main.c", "int main(void) { return 0; }\n");
  env.write_file("foo.c", "");
  env.write_file("bar.c", "");
  // Concatenate sources into the output, like a toy compiler would.
  let gcc = env.stub_compiler(
    "gcc",
    r#"
while [ "$1" != "-o" ]; do shift; done
out="$2"
shift 2
cat "$@" > "$out"
"#,
  );
  let config = ExecuteConfig {
    cwd: Some(env.path().to_path_buf()),
    ..ExecuteConfig::default()
  };

  let status = build_blocking(&rule_with(&gcc, "app"), &config).unwrap();

  assert!(status.is_success());
  let built = std::fs::read_to_string(env.path().join("app")).unwrap();
  assert!(built.contains("int main"));
}

#[test]
fn stub_killed_by_signal_reports_failure() {
  let env = TestEnv::new();
  let gcc = env.stub_compiler("gcc", "kill -KILL $$");

  let status = build_blocking(&rule_with(&gcc, "out"), &ExecuteConfig::default()).unwrap();

  assert_eq!(status, BuildStatus::Failed(Termination::Signaled(9)));
}

#[test]
fn missing_compiler_reports_failure() {
  let env = TestEnv::new();
  let gcc = env.path().join("no-such-gcc");

  let status = build_blocking(&rule_with(&gcc, "out"), &ExecuteConfig::default()).unwrap();

  assert_eq!(status, BuildStatus::Failed(Termination::SpawnFailed));
}
