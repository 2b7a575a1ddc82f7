//! Dashboard summary

use crm_ui::Tone;

use crate::model::{Activity, ActivityStatus, LeadStatus};
use crate::store::Store;

/// Number of activities listed under "Recent Activities".
pub const RECENT_ACTIVITY_COUNT: usize = 3;

/// One headline figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: usize,
    pub tone: Tone,
}

/// Figures computed from the store for the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    /// Leads still in the pipeline.
    pub active_leads: usize,
    pub contacts: usize,
    /// Leads closed as won.
    pub deals_won: usize,
    pub upcoming_activities: usize,
    /// Most recent activities by due date, newest first.
    pub recent_activities: Vec<Activity>,
}

impl DashboardSummary {
    pub fn from_store(store: &Store) -> Self {
        let active_leads = store.leads().iter().filter(|l| !l.status.is_closed()).count();
        let deals_won = store
            .leads()
            .iter()
            .filter(|l| l.status == LeadStatus::ClosedWon)
            .count();
        let upcoming_activities = store
            .activities()
            .iter()
            .filter(|a| a.status == ActivityStatus::Upcoming)
            .count();

        let mut recent_activities = store.activities().to_vec();
        recent_activities.sort_by(|a, b| b.due_date.cmp(&a.due_date));
        recent_activities.truncate(RECENT_ACTIVITY_COUNT);

        Self {
            active_leads,
            contacts: store.contacts().len(),
            deals_won,
            upcoming_activities,
            recent_activities,
        }
    }

    /// The headline figures, in display order.
    pub fn stats(&self) -> [Stat; 4] {
        [
            Stat {
                label: "Active Leads",
                value: self.active_leads,
                tone: Tone::Green,
            },
            Stat {
                label: "Contacts",
                value: self.contacts,
                tone: Tone::Blue,
            },
            Stat {
                label: "Deals Closed (Won)",
                value: self.deals_won,
                tone: Tone::Purple,
            },
            Stat {
                label: "Upcoming Activities",
                value: self.upcoming_activities,
                tone: Tone::Orange,
            },
        ]
    }
}
