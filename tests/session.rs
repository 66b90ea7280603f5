//! Scripted tutor sessions: scripted answers in, console transcript out.

use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tempfile::NamedTempFile;
use texttutor::app::Tutor;
use texttutor::console::MemoryConsole;
use texttutor::executor::{ExecError, Executor, ProcessOutput, ShellExecutor};
use texttutor::gate::CommandGate;
use texttutor::gate::approval::ApprovedCommand;
use texttutor::gate::policy::GatePolicy;
use texttutor::prompt::ScriptedPrompter;

/// Replies with fixed output and records every command it is handed.
#[derive(Clone, Default)]
struct StubExecutor {
    stdout: String,
    stderr: String,
    seen: Arc<Mutex<Vec<String>>>,
}

impl StubExecutor {
    fn replying(stdout: &str, stderr: &str) -> Self {
        Self {
            stdout: stdout.to_owned(),
            stderr: stderr.to_owned(),
            seen: Arc::default(),
        }
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl Executor for StubExecutor {
    fn run(
        &self,
        command: &ApprovedCommand,
        _timeout: Duration,
    ) -> Result<ProcessOutput, ExecError> {
        self.seen.lock().unwrap().push(command.as_str().to_owned());
        Ok(ProcessOutput {
            exit_code: Some(0),
            stdout: self.stdout.clone(),
            stderr: self.stderr.clone(),
        })
    }
}

fn run_session<E: Executor>(executor: E, answers: &[&str]) -> MemoryConsole {
    let gate = CommandGate::new(GatePolicy::default(), executor);
    let prompter = ScriptedPrompter::new(answers.iter().copied());
    let mut tutor = Tutor::new(MemoryConsole::new(), prompter, gate);
    tutor.run().expect("session should not fail");

    // Every scripted answer should have been asked for.
    assert_eq!(tutor.prompter().remaining(), 0, "unused answers");
    tutor.into_console()
}

fn notes_file() -> (NamedTempFile, String) {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "first line\nan error here\nname,age\nada,36").unwrap();
    let path = file.path().display().to_string();
    (file, path)
}

#[test]
fn exit_from_main_menu() {
    let console = run_session(StubExecutor::default(), &["4"]);
    assert!(console.contains("Main Menu"));
    assert!(console.contains("1. Regex Playground"));
    assert!(console.contains("Thank you for learning! Goodbye!"));
}

#[test]
fn end_of_input_ends_session_cleanly() {
    let console = run_session(StubExecutor::default(), &[]);
    assert!(console.contains("Thank you for learning! Goodbye!"));
}

#[test]
fn invalid_menu_choice_reprompts() {
    let console = run_session(StubExecutor::default(), &["9", "4"]);
    assert!(console.contains("Invalid choice. Try again!"));
    let menus = console.lines().iter().filter(|l| l.contains("Main Menu")).count();
    assert_eq!(menus, 2);
}

#[test]
fn learn_more_shows_every_lesson() {
    let console = run_session(StubExecutor::default(), &["3", "4"]);
    for title in [
        "REGEX Learning Resource",
        "GREP Learning Resource",
        "AWK Learning Resource",
        "SED Learning Resource",
    ] {
        assert!(console.contains(title), "missing {title}");
    }
    assert!(console.contains("Recommended Next Steps:"));
    assert!(console.contains("3. Create your own text processing challenges"));
}

#[test]
fn playground_lists_matches() {
    let console = run_session(StubExecutor::default(), &["1", "3", r"\d{4}", "exit", "4"]);
    assert!(console.contains("Sample Texts:"));
    assert!(console.contains("Matches found: ['2023', '2024', '2022']"));
    assert!(console.contains("Number of matches: 3"));
}

#[test]
fn playground_default_sample_is_first() {
    let console = run_session(StubExecutor::default(), &["1", "", r"\w+@\w+\.\w+", "EXIT", "4"]);
    assert!(console.contains("Number of matches: 3"));
}

#[test]
fn playground_zero_picks_last_sample() {
    let console = run_session(StubExecutor::default(), &["1", "0", r"\d{4}", "exit", "4"]);
    assert!(console.contains("Matches found: ['2023', '2024', '2022']"));
}

#[test]
fn playground_keeps_empty_matches() {
    let console = run_session(StubExecutor::default(), &["1", "3", r"\d*", "exit", "4"]);
    assert!(console.contains("Number of matches: 29"));
}

#[test]
fn playground_reports_invalid_pattern() {
    let console = run_session(StubExecutor::default(), &["1", "1", "(oops", "exit", "4"]);
    assert!(console.contains("Invalid regex pattern:"));
    assert!(console.contains("Tip: Check your pattern syntax!"));
}

#[test]
fn playground_reports_no_matches() {
    let console = run_session(StubExecutor::default(), &["1", "2", "xyz", "exit", "4"]);
    assert!(console.contains("No matches found. Try a different pattern!"));
}

#[test]
fn playground_never_touches_the_gate() {
    let executor = StubExecutor::default();
    run_session(executor.clone(), &["1", "1", "a", "exit", "4"]);
    assert!(executor.seen().is_empty());
}

#[test]
fn keyword_search_builds_grep_command() {
    let (_file, path) = notes_file();
    let executor = StubExecutor::replying("2:an error here\n", "");
    let console = run_session(executor.clone(), &["2", path.as_str(), "1", "error", "exit", "4"]);

    assert_eq!(executor.seen(), [format!("grep -n 'error' '{path}'")]);
    assert!(console.contains("GREP Learning Resource"));
    assert!(console.contains("Search Results:"));
    assert!(console.contains("2:an error here"));
}

#[test]
fn line_range_uses_defaults() {
    let (_file, path) = notes_file();
    let executor = StubExecutor::replying("first line\n", "");
    run_session(executor.clone(), &["2", path.as_str(), "3", "", "", "exit", "4"]);
    assert_eq!(executor.seen(), [format!("sed -n '1,10p' '{path}'")]);
}

#[test]
fn awk_column_with_separator() {
    let (_file, path) = notes_file();
    let executor = StubExecutor::replying("name\nada\n", "");
    run_session(executor.clone(), &["2", path.as_str(), "4", "1", ",", "exit", "4"]);
    assert_eq!(executor.seen(), [format!("awk -F',' '{{print $1}}' '{path}'")]);
}

#[test]
fn sed_substitution_preview() {
    let (_file, path) = notes_file();
    let executor = StubExecutor::replying("a warning here\n", "");
    run_session(executor.clone(), &["2", path.as_str(), "5", "error", "warning", "exit", "4"]);
    assert_eq!(executor.seen(), [format!("sed 's/error/warning/g' '{path}'")]);
}

#[test]
fn missing_file_is_reported() {
    let executor = StubExecutor::default();
    let console = run_session(
        executor.clone(),
        &["2", "/nonexistent/texttutor/notes.txt", "exit", "4"],
    );
    assert!(console.contains("File not found. Check the path and try again."));
    assert!(executor.seen().is_empty());
}

#[test]
fn invalid_search_type_reprompts_for_path() {
    let (_file, path) = notes_file();
    let executor = StubExecutor::default();
    let console = run_session(executor.clone(), &["2", path.as_str(), "9", "exit", "4"]);
    assert!(console.contains("Invalid choice!"));
    assert!(executor.seen().is_empty());
}

#[test]
fn padded_search_number_is_invalid() {
    let (_file, path) = notes_file();
    let executor = StubExecutor::default();
    let console = run_session(executor.clone(), &["2", path.as_str(), "01", "exit", "4"]);
    assert!(console.contains("Invalid choice!"));
    assert!(executor.seen().is_empty());
}

#[test]
fn piped_pattern_is_rejected_by_gate() {
    let (_file, path) = notes_file();
    let executor = StubExecutor::default();
    let console = run_session(
        executor.clone(),
        &["2", path.as_str(), "2", "error|name", "exit", "4"],
    );
    assert!(console.contains("Error: Command too complex or potentially unsafe"));
    assert!(executor.seen().is_empty());
}

#[test]
fn empty_output_means_no_results() {
    let (_file, path) = notes_file();
    let console = run_session(
        StubExecutor::default(),
        &["2", path.as_str(), "1", "absent", "exit", "4"],
    );
    assert!(console.contains("No results found."));
}

#[test]
fn stderr_is_shown_as_error() {
    let (_file, path) = notes_file();
    let executor = StubExecutor::replying("", "grep: Unmatched [\n");
    let console = run_session(executor, &["2", path.as_str(), "2", "[", "exit", "4"]);
    assert!(console.contains("Error: grep: Unmatched ["));
}

#[test]
fn end_of_input_inside_search_ends_session() {
    let (_file, path) = notes_file();
    let executor = StubExecutor::default();
    let console = run_session(executor.clone(), &["2", path.as_str(), "1"]);
    assert!(console.contains("Thank you for learning! Goodbye!"));
    assert!(executor.seen().is_empty());
}

#[test]
fn live_search_session_runs_real_tools() {
    let (_file, path) = notes_file();
    let executor = ShellExecutor::new("sh").unwrap();
    let console = run_session(
        executor,
        &[
            "2", path.as_str(), "1", "error", // grep keyword
            path.as_str(), "3", "3", "4", // sed line range
            path.as_str(), "4", "2", ",", // awk column
            "exit", "4",
        ],
    );

    assert!(console.contains("2:an error here"));
    assert!(console.contains("name,age"));
    assert!(console.contains("ada,36"));
    assert!(console.lines().iter().any(|l| l == "age"));
}
