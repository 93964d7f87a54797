//! Console output formatter for debates

use colored::Colorize;
use janus_domain::{
    DebateOutcome, GatingPrompt, PlatformCatalog, PlatformResponse, PlatformSelection, Tier,
    TierGate, Turn, TurnContent,
};

/// Formats debate results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete outcome with header and footer
    pub fn format(outcome: &DebateOutcome, catalog: &PlatformCatalog) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Janus Forge Debate"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Topic:".cyan().bold(),
            outcome.topic
        ));
        if outcome.is_degraded() {
            output.push_str(&format!(
                "{}\n",
                "Backend unavailable, showing simulated responses".yellow()
            ));
        }

        for response in &outcome.responses {
            output.push_str(&Self::format_response(response, catalog));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(outcome: &DebateOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// Responses only, without header or footer
    pub fn format_plain(outcome: &DebateOutcome, catalog: &PlatformCatalog) -> String {
        outcome
            .responses
            .iter()
            .map(|r| Self::format_response(r, catalog))
            .collect()
    }

    pub fn format_response(response: &PlatformResponse, catalog: &PlatformCatalog) -> String {
        let platform = catalog.get(&response.platform);
        let name = catalog.display_name(&response.platform);
        let avatar = platform.map(|p| p.avatar.as_str()).unwrap_or("");
        let title = format!("── {} {} ──", avatar, name);
        let title = if response.live {
            title.yellow().bold()
        } else {
            title.dimmed().bold()
        };
        let mut out = format!("\n{}\n{}\n", title, Self::indent(&response.text, "  "));
        if let Some(error) = &response.error {
            out.push_str(&format!("  {} {}\n", "backend:".red(), error));
        }
        out
    }

    /// Format conversation turns (used by the chat REPL)
    pub fn format_turns(turns: &[Turn], catalog: &PlatformCatalog) -> String {
        turns
            .iter()
            .map(|turn| match &turn.content {
                TurnContent::User { text } => format!("\n{} {}\n", "You:".cyan().bold(), text),
                TurnContent::Platform { response } => Self::format_response(response, catalog),
            })
            .collect()
    }

    /// List the catalog with selection and lock markers
    pub fn format_catalog(
        catalog: &PlatformCatalog,
        selection: &PlatformSelection,
        tier: &Tier,
    ) -> String {
        let mut output = format!("{} {}\n", "Tier:".cyan().bold(), tier);
        for platform in catalog.iter() {
            let mark = if selection.contains(&platform.id) {
                "[x]".green().to_string()
            } else {
                "[ ]".to_string()
            };
            let lock = if TierGate::permits(tier, platform) {
                String::new()
            } else {
                format!(" {}", "(premium)".magenta())
            };
            output.push_str(&format!(
                "  {} {} {:<10} {}{}\n",
                mark,
                platform.avatar,
                platform.id.as_str(),
                platform.name,
                lock
            ));
        }
        output
    }

    pub fn format_gating(prompt: &GatingPrompt) -> String {
        format!(
            "{}\n{}\n",
            prompt.title.magenta().bold(),
            Self::indent(&prompt.message, "  ")
        )
    }

    pub fn format_topics(topics: &[String]) -> String {
        let mut output = format!("{}\n", "Suggested topics:".cyan().bold());
        for (i, topic) in topics.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, topic));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use janus_domain::Topic;

    fn outcome() -> DebateOutcome {
        DebateOutcome::from_backend(
            Topic::parse("AI ethics").unwrap(),
            vec![
                PlatformResponse::live("chatgpt", "Line one\nLine two"),
                PlatformResponse::simulated("claude", "[Simulated] Regarding \"AI ethics\"")
                    .with_error("API Error: quota"),
            ],
        )
    }

    #[test]
    fn test_format_contains_names_and_text() {
        colored::control::set_override(false);
        let out = ConsoleFormatter::format(&outcome(), &PlatformCatalog::builtin());
        assert!(out.contains("Topic: AI ethics"));
        assert!(out.contains("ChatGPT"));
        assert!(out.contains("  Line two"));
        assert!(out.contains("backend: API Error: quota"));
    }

    #[test]
    fn test_format_json_round_trips_fields() {
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&outcome())).unwrap();
        assert_eq!(json["responses"][1]["live"], false);
        assert_eq!(json["topic"], "AI ethics");
    }

    #[test]
    fn test_format_catalog_marks_premium() {
        colored::control::set_override(false);
        let catalog = PlatformCatalog::builtin();
        let out = ConsoleFormatter::format_catalog(
            &catalog,
            &PlatformSelection::default_for(&catalog),
            &Tier::Explorer,
        );
        let grok = out.lines().find(|l| l.contains("grok")).unwrap();
        assert!(grok.contains("[ ]"));
        assert!(grok.contains("(premium)"));
        let claude = out.lines().find(|l| l.contains("claude")).unwrap();
        assert!(claude.contains("[x]"));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
