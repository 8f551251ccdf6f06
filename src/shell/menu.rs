use crate::error::ShellError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    LoadSample,
    AddLog,
    DisplayAll,
    ErrorFrequency,
    SearchKeyword,
    DisplayMatching,
    Statistics,
    ClearAll,
    Exit,
    ToggleCase,
    ExportReport,
}

impl MenuChoice {
    pub const ALL: &'static [MenuChoice] = &[
        MenuChoice::LoadSample,
        MenuChoice::AddLog,
        MenuChoice::DisplayAll,
        MenuChoice::ErrorFrequency,
        MenuChoice::SearchKeyword,
        MenuChoice::DisplayMatching,
        MenuChoice::Statistics,
        MenuChoice::ClearAll,
        MenuChoice::Exit,
        MenuChoice::ToggleCase,
        MenuChoice::ExportReport,
    ];

    pub fn number(self) -> u32 {
        match self {
            MenuChoice::LoadSample => 0,
            MenuChoice::AddLog => 1,
            MenuChoice::DisplayAll => 2,
            MenuChoice::ErrorFrequency => 3,
            MenuChoice::SearchKeyword => 4,
            MenuChoice::DisplayMatching => 5,
            MenuChoice::Statistics => 6,
            MenuChoice::ClearAll => 7,
            MenuChoice::Exit => 8,
            MenuChoice::ToggleCase => 9,
            MenuChoice::ExportReport => 10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::LoadSample => "Load Sample Data (for testing)",
            MenuChoice::AddLog => "Add Log Entry",
            MenuChoice::DisplayAll => "Display All Logs",
            MenuChoice::ErrorFrequency => "Analyze ERROR Frequency",
            MenuChoice::SearchKeyword => "Search Keyword in Logs",
            MenuChoice::DisplayMatching => "Display Logs with Keyword",
            MenuChoice::Statistics => "Show Statistics",
            MenuChoice::ClearAll => "Clear All Data",
            MenuChoice::Exit => "Exit",
            MenuChoice::ToggleCase => "Toggle Case-Sensitive Search",
            MenuChoice::ExportReport => "Export Report (JSON)",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u32 = s.trim().parse()?;
        MenuChoice::ALL
            .iter()
            .copied()
            .find(|choice| choice.number() == number)
            .ok_or(ShellError::InvalidChoice(number))
    }
}
