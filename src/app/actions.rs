#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Languages,
    Details,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Overview, Tab::Languages, Tab::Details];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Languages => "Languages",
            Tab::Details => "Details",
        }
    }
}

#[derive(Clone, Debug)]
pub enum Action {
    /// Re-fetch the listing for the current source.
    Refresh,
    /// Parse `inputs.source_text`, persist it and fetch.
    ApplySource,
    ResetSource,

    SetTab(Tab),
    SetDetailsFilter(String),

    /// Open a listing path on github.com.
    OpenFile(String),
    OpenRepo,

    ExportReport,
}
