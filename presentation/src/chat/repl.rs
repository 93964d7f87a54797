//! REPL (Read-Eval-Print Loop) for interactive debates

use crate::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use colored::Colorize;
use janus_application::{Applied, ChatSession, NoProgress, SubmitProgress};
use janus_domain::SelectionChange;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// What a slash command asks the loop to do next
#[derive(Debug, Clone, PartialEq, Eq)]
enum CommandOutcome {
    Continue,
    Submit(String),
    Exit,
}

/// Interactive chat REPL
pub struct ChatRepl {
    session: ChatSession,
    suggested_topics: Vec<String>,
    show_progress: bool,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(session: ChatSession, suggested_topics: Vec<String>) -> Self {
        Self {
            session,
            suggested_topics,
            show_progress: true,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("janus-forge").join("history.txt"));
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let prompt = if self.session.is_started() { "... " } else { ">>> " };
            match rl.readline(prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    let text = if line.starts_with('/') {
                        match self.handle_command(line) {
                            CommandOutcome::Continue => continue,
                            CommandOutcome::Exit => break,
                            CommandOutcome::Submit(topic) => topic,
                        }
                    } else {
                        line.to_string()
                    };

                    let _ = rl.add_history_entry(&text);
                    self.submit(&text).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          Janus Forge - Debate Mode          │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        print!(
            "{}",
            ConsoleFormatter::format_catalog(
                self.session.catalog(),
                self.session.selection(),
                self.session.tier()
            )
        );
        println!();
        print!("{}", ConsoleFormatter::format_topics(&self.suggested_topics));
        println!();
        println!("Type a topic to start a debate, then keep typing to follow up.");
        println!("Type /help for commands.");
        println!();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /help, /h, /?       - Show this help");
        println!("  /platforms          - Show platforms and the current selection");
        println!("  /select <id>        - Toggle a platform");
        println!("  /all                - Select every platform your tier allows");
        println!("  /clear              - Keep only the first selected platform");
        println!("  /topics             - Show suggested topics");
        println!("  /topic <n>          - Start a debate on suggested topic n");
        println!("  /new                - Start over with a new topic");
        println!("  /quit, /exit, /q    - Exit");
        println!();
    }

    /// Handle slash commands.
    fn handle_command(&mut self, line: &str) -> CommandOutcome {
        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };

        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                CommandOutcome::Exit
            }
            "/help" | "/h" | "/?" => {
                Self::print_help();
                CommandOutcome::Continue
            }
            "/platforms" => {
                self.print_catalog();
                CommandOutcome::Continue
            }
            "/select" if !arg.is_empty() => {
                match self.session.toggle_platform(arg) {
                    Ok(SelectionChange::Added(id)) => println!("{} {}", "+".green(), id),
                    Ok(SelectionChange::Removed(id)) => println!("{} {}", "-".red(), id),
                    Ok(SelectionChange::KeptLast(id)) => {
                        println!("{}", format!("{} is the only platform selected", id).yellow())
                    }
                    Ok(SelectionChange::Gated(prompt)) => {
                        print!("{}", ConsoleFormatter::format_gating(&prompt))
                    }
                    Err(e) => println!("{}", e.to_string().red()),
                }
                CommandOutcome::Continue
            }
            "/all" => {
                self.session.select_all();
                self.print_catalog();
                CommandOutcome::Continue
            }
            "/clear" => {
                self.session.clear_selection();
                self.print_catalog();
                CommandOutcome::Continue
            }
            "/topics" => {
                print!("{}", ConsoleFormatter::format_topics(&self.suggested_topics));
                CommandOutcome::Continue
            }
            "/topic" => match arg
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| self.suggested_topics.get(i))
            {
                Some(topic) => {
                    let topic = topic.clone();
                    self.session.reset();
                    CommandOutcome::Submit(topic)
                }
                None => {
                    println!("Usage: /topic <1-{}>", self.suggested_topics.len());
                    CommandOutcome::Continue
                }
            },
            "/new" => {
                self.session.reset();
                println!("Conversation cleared. Type a new topic.");
                CommandOutcome::Continue
            }
            _ => {
                println!("Unknown command: {}", line);
                println!("Type /help for available commands");
                CommandOutcome::Continue
            }
        }
    }

    fn print_catalog(&self) {
        print!(
            "{}",
            ConsoleFormatter::format_catalog(
                self.session.catalog(),
                self.session.selection(),
                self.session.tier()
            )
        );
    }

    async fn submit(&mut self, text: &str) {
        println!();

        let reporter;
        let progress: &dyn SubmitProgress = if self.show_progress {
            reporter = ProgressReporter::new(self.session.catalog().clone());
            &reporter
        } else {
            &NoProgress
        };

        let result = if self.session.is_started() {
            self.session.send(text, progress).await
        } else {
            self.session.start(text, progress).await
        };

        match result {
            Ok(Applied::Responses { count, .. }) => {
                let turns = self.session.conversation().turns();
                let new = &turns[turns.len().saturating_sub(count)..];
                print!(
                    "{}",
                    ConsoleFormatter::format_turns(new, self.session.catalog())
                );
            }
            Ok(Applied::Failed(e)) => eprintln!("{} {}", "Error:".red().bold(), e),
            Ok(Applied::Stale) => {}
            Err(e) => eprintln!("{}", e.to_string().yellow()),
        }
        println!();
    }
}
