use std::str::FromStr;

/// A top-level page reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Leads,
    Contacts,
    Accounts,
    Activities,
    Users,
}

impl Section {
    /// Sidebar order.
    pub const ALL: [Section; 6] = [
        Section::Dashboard,
        Section::Leads,
        Section::Contacts,
        Section::Accounts,
        Section::Activities,
        Section::Users,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Leads => "Leads",
            Section::Contacts => "Contacts",
            Section::Accounts => "Accounts",
            Section::Activities => "Activities",
            Section::Users => "Users",
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Section::Dashboard => '▦',
            Section::Leads => '◎',
            Section::Contacts => '☺',
            Section::Accounts => '▣',
            Section::Activities => '◷',
            Section::Users => '♟',
        }
    }

    /// Page heading.
    pub fn heading(self) -> &'static str {
        match self {
            Section::Dashboard => "Welcome back",
            Section::Leads => "Leads",
            Section::Contacts => "Contacts",
            Section::Accounts => "Manage Accounts",
            Section::Activities => "Activities",
            Section::Users => "User Management",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Section::Dashboard => "Here is what is happening with your sales today.",
            Section::Leads => "Track and qualify potential deals.",
            Section::Contacts => "Everyone you do business with.",
            Section::Accounts => "View and manage your customer accounts.",
            Section::Activities => "Calls, emails, meetings and notes.",
            Section::Users => "Manage the people who use the CRM.",
        }
    }

    /// Whether the section has a create form.
    pub fn can_create(self) -> bool {
        matches!(
            self,
            Section::Leads | Section::Contacts | Section::Accounts | Section::Users
        )
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|section| section.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown section '{wanted}'"))
    }
}
