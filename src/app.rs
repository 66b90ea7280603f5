//! Menu-driven tutor session. All I/O goes through the injected console,
//! prompter, and command gate.

use std::path::Path;

use crate::console::{Console, Tone};
use crate::error::TutorError;
use crate::executor::Executor;
use crate::gate::{CommandGate, CommandResult};
use crate::lessons::{NEXT_STEPS, Topic};
use crate::playground::{self, SAMPLE_TEXTS};
use crate::prompt::Prompter;
use crate::search::{SearchKind, SearchQuery};

const MAIN_MENU: &str = "
Text Processing Learning Tool
Explore powerful text manipulation techniques!

1. Regex Playground
2. File Search & Learning
3. Learn More
4. Exit
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Playground,
    FileSearch,
    LearnMore,
    Exit,
}

impl MenuChoice {
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Playground),
            "2" => Some(Self::FileSearch),
            "3" => Some(Self::LearnMore),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the session should keep going after a sub-menu returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Input ended; leave every loop.
    Quit,
}

pub struct Tutor<C, P, E> {
    console: C,
    prompter: P,
    gate: CommandGate<E>,
}

impl<C: Console, P: Prompter, E: Executor> Tutor<C, P, E> {
    pub fn new(console: C, prompter: P, gate: CommandGate<E>) -> Self {
        Self {
            console,
            prompter,
            gate,
        }
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Run the main menu until the user exits or input ends.
    pub fn run(&mut self) -> Result<(), TutorError> {
        loop {
            self.console.panel("Main Menu", MAIN_MENU)?;
            let Some(choice) = self.prompter.ask("Select an option", Some("1"))? else {
                break;
            };

            let flow = match MenuChoice::parse(&choice) {
                Some(MenuChoice::Playground) => self.regex_playground()?,
                Some(MenuChoice::FileSearch) => self.file_search()?,
                Some(MenuChoice::LearnMore) => {
                    self.show_all_lessons()?;
                    Flow::Continue
                }
                Some(MenuChoice::Exit) => break,
                None => {
                    self.console.line(Tone::Error, "Invalid choice. Try again!")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        self.console
            .line(Tone::Success, "Thank you for learning! Goodbye!")?;
        Ok(())
    }

    fn show_lesson(&mut self, topic: Topic) -> Result<(), TutorError> {
        self.console.panel(&topic.title(), topic.lesson())?;
        Ok(())
    }

    fn show_all_lessons(&mut self) -> Result<(), TutorError> {
        for topic in Topic::ALL {
            self.show_lesson(topic)?;
        }

        self.console.blank()?;
        self.console.line(Tone::Emphasis, "Recommended Next Steps:")?;
        for (i, step) in NEXT_STEPS.iter().enumerate() {
            self.console.line(Tone::Plain, &format!("{}. {step}", i + 1))?;
        }
        Ok(())
    }

    fn regex_playground(&mut self) -> Result<Flow, TutorError> {
        self.show_lesson(Topic::Regex)?;

        loop {
            self.console.blank()?;
            self.console.line(Tone::Emphasis, "Sample Texts:")?;
            for (i, text) in SAMPLE_TEXTS.iter().enumerate() {
                self.console
                    .line(Tone::Success, &format!("{}. {text}", i + 1))?;
            }

            let Some(choice) = self
                .prompter
                .ask("Choose a sample text (number) or 'exit'", Some("1"))?
            else {
                return Ok(Flow::Quit);
            };
            if choice.eq_ignore_ascii_case("exit") {
                return Ok(Flow::Continue);
            }
            let sample = playground::pick_sample(&choice);

            let Some(pattern) = self.prompter.ask("Enter a regex pattern to match", None)? else {
                return Ok(Flow::Quit);
            };

            match playground::compile(&pattern) {
                Ok(regex) => {
                    let matches = playground::find_all(&regex, sample);
                    if matches.is_empty() {
                        self.console
                            .line(Tone::Error, "No matches found. Try a different pattern!")?;
                    } else {
                        let listed = playground::format_matches(&matches);
                        self.console
                            .line(Tone::Warning, &format!("Matches found: {listed}"))?;
                        self.console.line(
                            Tone::Success,
                            &format!("Number of matches: {}", matches.len()),
                        )?;
                    }
                }
                Err(err) => {
                    tracing::debug!(%pattern, "invalid regex");
                    self.console
                        .line(Tone::Error, &format!("Invalid regex pattern: {err}"))?;
                    self.console
                        .line(Tone::Plain, "Tip: Check your pattern syntax!")?;
                }
            }
        }
    }

    fn file_search(&mut self) -> Result<Flow, TutorError> {
        self.show_lesson(Topic::Grep)?;

        loop {
            let Some(path) = self
                .prompter
                .ask("Enter file path to search (or 'exit' to return)", None)?
            else {
                return Ok(Flow::Quit);
            };
            if path.eq_ignore_ascii_case("exit") {
                return Ok(Flow::Continue);
            }
            if !Path::new(&path).exists() {
                self.console.line(
                    Tone::Error,
                    "File not found. Check the path and try again.",
                )?;
                continue;
            }

            self.console.line(Tone::Emphasis, "Search by:")?;
            for (i, kind) in SearchKind::ALL.iter().enumerate() {
                self.console
                    .line(Tone::Plain, &format!("{}. {}", i + 1, kind.label()))?;
            }
            let Some(choice) = self.prompter.ask("Search type", Some("1"))? else {
                return Ok(Flow::Quit);
            };
            let Some(kind) = SearchKind::parse(&choice) else {
                self.console.line(Tone::Error, "Invalid choice!")?;
                continue;
            };

            let Some(query) = self.read_query(kind)? else {
                return Ok(Flow::Quit);
            };
            self.run_search(&query, &path)?;
        }
    }

    /// Collect the fragments for `kind`. `None` means input ended.
    fn read_query(&mut self, kind: SearchKind) -> Result<Option<SearchQuery>, TutorError> {
        let query = match kind {
            SearchKind::Keyword => self
                .prompter
                .ask("Enter keyword to search", None)?
                .map(SearchQuery::Keyword),
            SearchKind::Pattern => self
                .prompter
                .ask("Enter regex pattern", None)?
                .map(SearchQuery::Pattern),
            SearchKind::LineRange => {
                let Some(start) = self.prompter.ask("Start line number", Some("1"))? else {
                    return Ok(None);
                };
                self.prompter
                    .ask("End line number", Some("10"))?
                    .map(|end| SearchQuery::LineRange { start, end })
            }
            SearchKind::Column => {
                let Some(column) = self.prompter.ask("Column number", Some("1"))? else {
                    return Ok(None);
                };
                self.prompter
                    .ask("Field separator (blank for whitespace)", Some(""))?
                    .map(|separator| SearchQuery::Column { column, separator })
            }
            SearchKind::Substitute => {
                let Some(find) = self.prompter.ask("Text to replace", None)? else {
                    return Ok(None);
                };
                self.prompter
                    .ask("Replacement text", None)?
                    .map(|replace| SearchQuery::Substitute { find, replace })
            }
        };
        Ok(query)
    }

    fn run_search(&mut self, query: &SearchQuery, path: &str) -> Result<(), TutorError> {
        let command = query.to_command(path);
        tracing::info!(tool = query.tool(), "running search");

        match self.gate.execute(&command) {
            CommandResult::Failure { reason } => {
                let message = reason.to_string();
                self.console
                    .line(Tone::Error, &format!("Error: {}", message.trim_end()))?;
            }
            CommandResult::Success { stdout } if stdout.is_empty() => {
                self.console.line(Tone::Warning, "No results found.")?;
            }
            CommandResult::Success { stdout } => {
                self.console.line(Tone::Success, "Search Results:")?;
                self.console
                    .line(Tone::Plain, stdout.trim_end_matches('\n'))?;
            }
        }
        Ok(())
    }
}
