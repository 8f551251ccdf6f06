//! Line-oriented interactive menu over a [`LogAnalyzer`].

pub mod menu;
pub mod render;

use crate::analyzer::LogAnalyzer;
use crate::config::Config;
use crate::theme::Theme;
use anyhow::Result;
use menu::MenuChoice;
use std::io::{BufRead, Write};
use tracing::{info, warn};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct ShellOptions {
    pub theme: Theme,
    pub case_sensitive: bool,
    pub pause_after_action: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            case_sensitive: true,
            pause_after_action: true,
        }
    }
}

impl From<&Config> for ShellOptions {
    fn from(config: &Config) -> Self {
        let theme = if config.display.color_output {
            Theme::from_name(config.display.theme).with_overrides(&config.display.overrides)
        } else {
            Theme::plain()
        };

        Self {
            theme,
            case_sensitive: config.search.case_sensitive,
            pause_after_action: config.display.pause_after_action,
        }
    }
}

#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Shell<'a, R, W> {
    analyzer: &'a mut LogAnalyzer,
    input: R,
    output: W,
    options: ShellOptions,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(analyzer: &'a mut LogAnalyzer, input: R, output: W, options: ShellOptions) -> Self {
        Self {
            analyzer,
            input,
            output,
            options,
        }
    }

    pub fn case_sensitive(&self) -> bool {
        self.options.case_sensitive
    }

    /// Runs the menu until Exit is chosen or input is exhausted.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let menu = render::menu(&self.options.theme, self.options.case_sensitive);
            self.write(&menu)?;

            let Some(line) = self.read_line()? else {
                info!("input closed, leaving shell");
                return Ok(());
            };

            match line.parse::<MenuChoice>() {
                Ok(choice) => {
                    info!(choice = choice.label(), "menu selection");
                    if self.dispatch(choice)? == Flow::Exit {
                        return Ok(());
                    }
                }
                Err(e) => {
                    warn!(input = %line, "rejected menu input: {:?}", e);
                    self.write(&format!("\n{}\n", e))?;
                }
            }

            if self.options.pause_after_action {
                self.write("\nPress Enter to continue...")?;
                if self.read_line()?.is_none() {
                    return Ok(());
                }
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        let theme = &self.options.theme;
        let case_sensitive = self.options.case_sensitive;

        match choice {
            MenuChoice::LoadSample => {
                self.analyzer.load_sample_data();
                let out = format!(
                    "\n{}\n   Total logs: {}\n   Unique errors: {}\n",
                    theme.success.paint("✓ Sample data loaded successfully!"),
                    self.analyzer.total_logs(),
                    self.analyzer.error_count()
                );
                self.write(&out)?;
            }
            MenuChoice::AddLog => {
                let Some(timestamp) = self.prompt("\nEnter timestamp (YYYY-MM-DD HH:MM:SS): ")?
                else {
                    return Ok(Flow::Exit);
                };
                let Some(level) = self.prompt("Enter log level (INFO/WARNING/ERROR/DEBUG): ")?
                else {
                    return Ok(Flow::Exit);
                };
                let Some(message) = self.prompt("Enter message: ")? else {
                    return Ok(Flow::Exit);
                };

                let timestamp = if timestamp.trim().is_empty() {
                    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
                } else {
                    timestamp
                };
                self.analyzer.add_log(&timestamp, &level, &message);

                let out = format!(
                    "\n{}\n",
                    self.options.theme.success.paint("✓ Log entry added successfully!")
                );
                self.write(&out)?;
            }
            MenuChoice::DisplayAll => {
                let out = render::all_logs(self.analyzer.records(), theme);
                self.write(&out)?;
            }
            MenuChoice::ErrorFrequency => {
                let out = render::frequency_report(
                    &self.analyzer.frequency_report(),
                    self.analyzer.error_count(),
                    theme,
                );
                self.write(&out)?;
            }
            MenuChoice::SearchKeyword => {
                let Some(keyword) = self.prompt("\nEnter keyword to search: ")? else {
                    return Ok(Flow::Exit);
                };
                let count = self.analyzer.search_keyword(&keyword, case_sensitive);
                self.write(&render::keyword_count(&keyword, count))?;
            }
            MenuChoice::DisplayMatching => {
                let Some(keyword) = self.prompt("\nEnter keyword: ")? else {
                    return Ok(Flow::Exit);
                };
                let matches: Vec<_> = self
                    .analyzer
                    .matching_logs_indexed(&keyword, case_sensitive)
                    .into_iter()
                    .map(|(index, record)| {
                        let positions = self.analyzer.highlight_positions(
                            record.message(),
                            &keyword,
                            case_sensitive,
                        );
                        (index, record, positions)
                    })
                    .collect();
                let out = render::matching_logs(&keyword, &matches, &self.options.theme);
                self.write(&out)?;
            }
            MenuChoice::Statistics => {
                let out = render::statistics(
                    self.analyzer.total_logs(),
                    self.analyzer.error_count(),
                    theme,
                );
                self.write(&out)?;
            }
            MenuChoice::ClearAll => {
                self.analyzer.clear_all();
                let out = format!(
                    "\n{}\n",
                    self.options.theme.success.paint("✓ All data cleared successfully!")
                );
                self.write(&out)?;
            }
            MenuChoice::Exit => {
                self.write("\nExiting... Thank you!\n")?;
                return Ok(Flow::Exit);
            }
            MenuChoice::ToggleCase => {
                self.options.case_sensitive = !self.options.case_sensitive;
                let out = format!(
                    "\nCase-sensitive search is now {}.\n",
                    if self.options.case_sensitive { "ON" } else { "OFF" }
                );
                self.write(&out)?;
            }
            MenuChoice::ExportReport => {
                let json = serde_json::to_string_pretty(&self.analyzer.report())?;
                self.write(&format!("\n{}\n", json))?;
            }
        }

        Ok(Flow::Continue)
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        self.write(text)?;
        self.read_line()
    }

    /// Next input line without its line terminator, or `None` at end of input.
    /// Invalid UTF-8 is replaced with U+FFFD rather than ending the session.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}
