//! Interactive numbered menu
//!
//! Reads choices and words line by line, so it runs the same against a
//! terminal or a scripted input.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use tracing::{debug, instrument};

use crate::domain::validation::{is_cancel, normalize};
use crate::domain::InputKind;
use crate::infrastructure::di::ServiceContainer;

const RETRY_HINT: &str = "Please try again or enter 'back' to cancel";

/// Menu entries, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    AddWord,
    CheckWord,
    CheckPrefix,
    FindByPrefix,
    RemoveWord,
    ShowAll,
    DeleteAll,
}

impl MenuChoice {
    const ENTRIES: [(MenuChoice, &'static str); 8] = [
        (MenuChoice::Exit, "Exit"),
        (MenuChoice::AddWord, "Add word"),
        (MenuChoice::CheckWord, "Check if word exists"),
        (MenuChoice::CheckPrefix, "Check prefix"),
        (MenuChoice::FindByPrefix, "Find words by prefix"),
        (MenuChoice::RemoveWord, "Remove word"),
        (MenuChoice::ShowAll, "Show all words"),
        (MenuChoice::DeleteAll, "Delete all data"),
    ];

    /// Parse a menu selection; the error is the message to show.
    pub fn parse(input: &str) -> Result<Self, &'static str> {
        let number: usize = input
            .trim()
            .parse()
            .map_err(|_| "!Invalid choice! Please enter a number (0-7), not text!!")?;
        Self::ENTRIES
            .get(number)
            .map(|(choice, _)| *choice)
            .ok_or("!Invalid choice! Please enter number (0-7)!")
    }
}

pub struct Menu<'a, R, W> {
    services: &'a mut ServiceContainer,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(services: &'a mut ServiceContainer, input: R, out: W) -> Self {
        Self {
            services,
            input,
            out,
        }
    }

    /// Run until the user exits or input ends.
    #[instrument(level = "debug", skip_all)]
    pub fn run(&mut self) -> io::Result<()> {
        self.refresh();
        self.show_tree()?;
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Please enter your choice(0-7):")? else {
                writeln!(self.out, "Goodbye!")?;
                return Ok(());
            };
            let choice = match MenuChoice::parse(&line) {
                Ok(choice) => choice,
                Err(message) => {
                    writeln!(self.out, "{}", message.red())?;
                    continue;
                }
            };
            debug!("menu choice: {:?}", choice);

            match choice {
                MenuChoice::Exit => {
                    writeln!(self.out, "Goodbye!")?;
                    return Ok(());
                }
                MenuChoice::AddWord => {
                    self.add_word()?;
                    self.refresh();
                }
                MenuChoice::CheckWord => {
                    if let Some(word) = self.check_word()? {
                        self.services.visualizer.highlight_word(&word);
                    }
                }
                MenuChoice::CheckPrefix => {
                    if let Some(prefix) = self.check_prefix()? {
                        self.services.visualizer.highlight_prefix(&prefix);
                    }
                }
                MenuChoice::FindByPrefix => {
                    if let Some(prefix) = self.find_by_prefix()? {
                        let services = &mut *self.services;
                        services
                            .visualizer
                            .highlight_words_by_prefix(services.dictionary.trie(), &prefix);
                    }
                }
                MenuChoice::RemoveWord => {
                    self.remove_word()?;
                    self.refresh();
                }
                MenuChoice::ShowAll => self.show_all()?,
                MenuChoice::DeleteAll => {
                    self.delete_all()?;
                    self.refresh();
                }
            }
            self.show_tree()?;
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", "======== Trie Menu ========".cyan().bold())?;
        for (number, (_, label)) in MenuChoice::ENTRIES.iter().enumerate() {
            writeln!(self.out, "{}. {}", number, label)?;
        }
        Ok(())
    }

    /// Print `text` and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{} ", text)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until the input normalizes or the user cancels.
    fn prompt_valid(&mut self, text: &str, kind: InputKind) -> io::Result<Option<String>> {
        loop {
            let Some(line) = self.prompt(text)? else {
                return Ok(None);
            };
            if is_cancel(&line) {
                writeln!(self.out, "Operation cancelled")?;
                return Ok(None);
            }
            match normalize(&line, kind) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    writeln!(self.out, "{} {}", "Error:".red(), e)?;
                    writeln!(self.out, "{}", RETRY_HINT)?;
                    writeln!(self.out)?;
                }
            }
        }
    }

    /// True (after telling the user) if there is nothing to work on.
    fn dictionary_empty(&mut self, operation: &str) -> io::Result<bool> {
        if self.services.dictionary.is_empty() {
            writeln!(
                self.out,
                "{}",
                format!("!Dictionary is empty! No words to {}", operation).yellow()
            )?;
            return Ok(true);
        }
        Ok(false)
    }

    fn add_word(&mut self) -> io::Result<()> {
        loop {
            let Some(word) = self.prompt_valid("Enter word to add (or 'back' to cancel):", InputKind::Word)? else {
                return Ok(());
            };
            if self.services.dictionary.contains(&word) {
                writeln!(
                    self.out,
                    "{} Word '{}' already exists in dictionary",
                    "Error:".red(),
                    word
                )?;
                writeln!(self.out, "{}", RETRY_HINT)?;
                writeln!(self.out)?;
                continue;
            }
            self.services.dictionary.insert(&word);
            writeln!(self.out, "Word '{}' added successfully!", word.green())?;
            writeln!(
                self.out,
                "Total words in dictionary: {}",
                self.services.dictionary.word_count()
            )?;
            return self.report_persistence();
        }
    }

    fn check_word(&mut self) -> io::Result<Option<String>> {
        if self.dictionary_empty("check")? {
            return Ok(None);
        }
        let Some(word) = self.prompt_valid("Enter word to check (or 'back' to cancel):", InputKind::Word)? else {
            return Ok(None);
        };
        if self.services.dictionary.contains(&word) {
            writeln!(self.out, "Word '{}' was found in dictionary!", word.green())?;
            Ok(Some(word))
        } else {
            writeln!(self.out, "Word '{}' was not found in dictionary", word)?;
            Ok(None)
        }
    }

    fn check_prefix(&mut self) -> io::Result<Option<String>> {
        if self.dictionary_empty("check prefixes")? {
            return Ok(None);
        }
        let Some(prefix) = self.prompt_valid("Enter prefix to check (or 'back' to cancel):", InputKind::Prefix)? else {
            return Ok(None);
        };
        if self.services.dictionary.starts_with(&prefix) {
            writeln!(self.out, "There are words starting with '{}'!", prefix.green())?;
            Ok(Some(prefix))
        } else {
            writeln!(self.out, "No words starting with '{}' found", prefix)?;
            Ok(None)
        }
    }

    fn find_by_prefix(&mut self) -> io::Result<Option<String>> {
        if self.dictionary_empty("find")? {
            return Ok(None);
        }
        let Some(prefix) = self.prompt_valid("Enter prefix to find words (or 'back' to cancel):", InputKind::Prefix)? else {
            return Ok(None);
        };
        let words = self.services.dictionary.get_by_prefix(&prefix);
        if words.is_empty() {
            writeln!(self.out, "No words with prefix '{}' found", prefix)?;
            return Ok(None);
        }
        writeln!(
            self.out,
            "Found {} words with prefix '{}':",
            words.len(),
            prefix
        )?;
        for (i, word) in words.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, word)?;
        }
        Ok(Some(prefix))
    }

    fn remove_word(&mut self) -> io::Result<()> {
        if self.dictionary_empty("remove")? {
            return Ok(());
        }
        let Some(word) = self.prompt_valid("Enter word to remove (or 'back' to cancel):", InputKind::Word)? else {
            return Ok(());
        };
        if self.services.dictionary.remove_word(&word) {
            writeln!(self.out, "Word '{}' removed successfully!", word.green())?;
            writeln!(
                self.out,
                "Total words in dictionary: {}",
                self.services.dictionary.word_count()
            )?;
            self.report_persistence()
        } else {
            writeln!(self.out, "Word '{}' not found in dictionary", word)
        }
    }

    fn show_all(&mut self) -> io::Result<()> {
        if self.dictionary_empty("print")? {
            return Ok(());
        }
        writeln!(self.out, "{}", "======== All words ========".cyan().bold())?;
        for (i, word) in self.services.dictionary.all_words().iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, word)?;
        }
        Ok(())
    }

    fn delete_all(&mut self) -> io::Result<()> {
        if self.dictionary_empty("delete")? {
            return Ok(());
        }
        let confirmation = self
            .prompt("Delete ALL dictionary data? This cannot be undone! (yes/no):")?
            .unwrap_or_default();
        if confirmation.eq_ignore_ascii_case("yes") {
            self.services.dictionary.delete_all_data();
            writeln!(self.out, "All dictionary data deleted successfully!")?;
            self.report_persistence()
        } else {
            writeln!(self.out, "Operation cancelled")
        }
    }

    fn report_persistence(&mut self) -> io::Result<()> {
        if let Some(warning) = self.services.dictionary.take_warning() {
            writeln!(self.out, "{}: {}", "Warning".yellow(), warning)?;
        }
        Ok(())
    }

    fn refresh(&mut self) {
        let services = &mut *self.services;
        services.visualizer.refresh(services.dictionary.trie());
    }

    fn show_tree(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", self.services.visualizer.render_text())?;
        let status = self
            .services
            .visualizer
            .status_line(self.services.dictionary.trie());
        writeln!(self.out, "{}", status.dimmed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", MenuChoice::Exit)]
    #[case(" 4 ", MenuChoice::FindByPrefix)]
    #[case("7", MenuChoice::DeleteAll)]
    fn test_parse_choice(#[case] input: &str, #[case] expected: MenuChoice) {
        assert_eq!(MenuChoice::parse(input), Ok(expected));
    }

    #[rstest]
    #[case("8", "!Invalid choice! Please enter number (0-7)!")]
    #[case("-1", "!Invalid choice! Please enter a number (0-7), not text!!")]
    #[case("add", "!Invalid choice! Please enter a number (0-7), not text!!")]
    fn test_parse_choice_rejects(#[case] input: &str, #[case] message: &str) {
        assert_eq!(MenuChoice::parse(input), Err(message));
    }
}
