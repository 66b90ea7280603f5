//! Static learning text, one lesson per tool.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Regex,
    Grep,
    Awk,
    Sed,
}

impl Topic {
    /// Display order for "Learn More".
    pub const ALL: [Topic; 4] = [Topic::Regex, Topic::Grep, Topic::Awk, Topic::Sed];

    pub fn name(self) -> &'static str {
        match self {
            Topic::Regex => "regex",
            Topic::Grep => "grep",
            Topic::Awk => "awk",
            Topic::Sed => "sed",
        }
    }

    /// Panel title, e.g. `GREP Learning Resource`.
    pub fn title(self) -> String {
        format!("{} Learning Resource", self.name().to_uppercase())
    }

    pub fn lesson(self) -> &'static str {
        match self {
            Topic::Regex => REGEX_LESSON,
            Topic::Grep => GREP_LESSON,
            Topic::Awk => AWK_LESSON,
            Topic::Sed => SED_LESSON,
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const NEXT_STEPS: [&str; 3] = [
    "Practice each technique",
    "Experiment with different patterns",
    "Create your own text processing challenges",
];

const REGEX_LESSON: &str = r"
# Regular Expression (Regex) Learning Guide

Regular expressions are powerful patterns used to search and manipulate text:
- `.` matches any single character
- `*` means zero or more of the previous character
- `+` means one or more of the previous character
- `\d` matches any digit
- `\w` matches any word character (letters, digits, underscore)

Examples:
- `\d+` matches one or more digits
- `\w+@\w+\.\w+` matches simple email patterns
";

const GREP_LESSON: &str = r"
# Grep (Global Regular Expression Print) Guide

Grep is a command-line tool for searching text:
- Searches files for specific patterns
- Can use regular expressions
- Useful for finding information quickly

Common use cases:
- Finding lines containing specific words
- Searching log files
- Extracting information from large text files
";

const AWK_LESSON: &str = r"
# Awk Text Processing Guide

Awk is a powerful text-processing tool:
- Can process text files line by line
- Allows complex text manipulation
- Great for data extraction and reporting

Basic syntax:
- `awk '{print $1}'` prints the first column of text
- `awk -F, '{print $2}'` prints second column using comma as separator
";

const SED_LESSON: &str = r"
# Sed (Stream Editor) Guide

Sed is used for parsing and transforming text:
- Can substitute text
- Modify files without opening them
- Perform quick text replacements

Common operations:
- `s/old/new/` replaces first occurrence
- `s/old/new/g` replaces all occurrences
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_are_uppercased() {
        assert_eq!(Topic::Regex.title(), "REGEX Learning Resource");
        assert_eq!(Topic::Sed.title(), "SED Learning Resource");
    }

    #[test]
    fn every_topic_has_a_heading() {
        for topic in Topic::ALL {
            let first = topic.lesson().trim().lines().next().unwrap();
            assert!(first.starts_with("# "), "{topic}: {first}");
        }
    }

    #[test]
    fn regex_lesson_examples_compile() {
        for pattern in [r"\d+", r"\w+@\w+\.\w+"] {
            assert!(regex::Regex::new(pattern).is_ok(), "{pattern}");
        }
    }
}
