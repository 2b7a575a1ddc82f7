//! In-memory session store seeded with mock data

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use log::{debug, info};
use rust_decimal::Decimal;

use crate::error::CrmError;
use crate::model::{
    Account, AccountType, Activity, ActivityKind, ActivityStatus, Address, Choice, Contact, Lead, LeadStatus,
    PrimaryContact, Priority, RelatedKind, RelatedTo, Role, User, UserStatus,
};
use crate::notice::{Notice, SHORT_NOTICE_DURATION};

pub const ACCOUNT_ID_PREFIX: &str = "acc_";
pub const CONTACT_ID_PREFIX: &str = "cont_";
pub const LEAD_ID_PREFIX: &str = "L";
pub const ACTIVITY_ID_PREFIX: &str = "act_";
pub const USER_ID_PREFIX: &str = "usr_";

/// Holds every record for the lifetime of the session.
///
/// Nothing is persisted; inserts and status changes are lost on exit.
#[derive(Debug, Clone, Default)]
pub struct Store {
    accounts: Vec<Account>,
    contacts: Vec<Contact>,
    leads: Vec<Lead>,
    activities: Vec<Activity>,
    users: Vec<User>,
}

impl Store {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the demo data set.
    pub fn seeded() -> Self {
        Self {
            accounts: seed_accounts(),
            contacts: seed_contacts(),
            leads: seed_leads(),
            activities: seed_activities(),
            users: seed_users(),
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn account(&self, id: &str) -> Result<&Account, CrmError> {
        self.accounts
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| CrmError::not_found("account", id))
    }

    pub fn contact(&self, id: &str) -> Result<&Contact, CrmError> {
        self.contacts
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| CrmError::not_found("contact", id))
    }

    pub fn lead(&self, id: &str) -> Result<&Lead, CrmError> {
        self.leads
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| CrmError::not_found("lead", id))
    }

    pub fn user(&self, id: &str) -> Result<&User, CrmError> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or_else(|| CrmError::not_found("user", id))
    }

    /// Finds a user by email, ignoring case.
    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        let email = email.trim();
        self.users.iter().find(|u| u.email.eq_ignore_ascii_case(email))
    }

    /// Distinct account industries, sorted.
    pub fn industries(&self) -> Vec<String> {
        let mut industries: Vec<String> = self.accounts.iter().map(|a| a.industry.clone()).collect();
        industries.sort();
        industries.dedup();
        industries
    }

    pub fn contacts_for_account(&self, account_id: &str) -> Vec<Contact> {
        self.contacts
            .iter()
            .filter(|c| c.account_id.as_deref() == Some(account_id))
            .cloned()
            .collect()
    }

    pub fn leads_for_account(&self, account_id: &str) -> Vec<Lead> {
        self.leads
            .iter()
            .filter(|l| l.account_id.as_deref() == Some(account_id))
            .cloned()
            .collect()
    }

    /// Activities attached to the account itself or to any of its contacts and leads.
    pub fn activities_for_account(&self, account_id: &str) -> Vec<Activity> {
        let contact_ids: Vec<&str> = self
            .contacts
            .iter()
            .filter(|c| c.account_id.as_deref() == Some(account_id))
            .map(|c| c.id.as_str())
            .collect();
        let lead_ids: Vec<&str> = self
            .leads
            .iter()
            .filter(|l| l.account_id.as_deref() == Some(account_id))
            .map(|l| l.id.as_str())
            .collect();

        self.activities
            .iter()
            .filter(|a| {
                let related = &a.related_to;
                match related.kind {
                    RelatedKind::Account => related.id == account_id,
                    RelatedKind::Contact => contact_ids.contains(&related.id.as_str()),
                    RelatedKind::Lead => lead_ids.contains(&related.id.as_str()),
                }
            })
            .cloned()
            .collect()
    }

    pub fn activities_for_contact(&self, contact_id: &str) -> Vec<Activity> {
        self.activities_related_to(RelatedKind::Contact, contact_id)
    }

    pub fn activities_for_lead(&self, lead_id: &str) -> Vec<Activity> {
        self.activities_related_to(RelatedKind::Lead, lead_id)
    }

    fn activities_related_to(&self, kind: RelatedKind, id: &str) -> Vec<Activity> {
        self.activities
            .iter()
            .filter(|a| a.related_to.kind == kind && a.related_to.id == id)
            .cloned()
            .collect()
    }

    pub fn leads_for_contact(&self, contact_id: &str) -> Vec<Lead> {
        self.leads
            .iter()
            .filter(|l| l.contact_id.as_deref() == Some(contact_id))
            .cloned()
            .collect()
    }

    /// The lead's own contact plus every contact of the lead's account.
    pub fn contacts_for_lead(&self, lead: &Lead) -> Vec<Contact> {
        self.contacts
            .iter()
            .filter(|c| {
                lead.contact_id.as_deref() == Some(c.id.as_str())
                    || (lead.account_id.is_some() && c.account_id == lead.account_id)
            })
            .cloned()
            .collect()
    }

    /// Appends an account, assigning the next `acc_` id.
    pub fn insert_account(&mut self, mut account: Account) -> &Account {
        account.id = next_id(ACCOUNT_ID_PREFIX, self.accounts.iter().map(|a| a.id.as_str()));
        debug!("Inserted account {} ({})", account.id, account.name);
        self.accounts.push(account);
        &self.accounts[self.accounts.len() - 1]
    }

    /// Appends a contact, assigning the next `cont_` id.
    pub fn insert_contact(&mut self, mut contact: Contact) -> &Contact {
        contact.id = next_id(CONTACT_ID_PREFIX, self.contacts.iter().map(|c| c.id.as_str()));
        debug!("Inserted contact {} ({})", contact.id, contact.name);
        self.contacts.push(contact);
        &self.contacts[self.contacts.len() - 1]
    }

    /// Appends a lead, assigning the next `L` id.
    pub fn insert_lead(&mut self, mut lead: Lead) -> &Lead {
        lead.id = next_id(LEAD_ID_PREFIX, self.leads.iter().map(|l| l.id.as_str()));
        debug!("Inserted lead {} ({})", lead.id, lead.name);
        self.leads.push(lead);
        &self.leads[self.leads.len() - 1]
    }

    /// Appends an activity, assigning the next `act_` id.
    pub fn insert_activity(&mut self, mut activity: Activity) -> &Activity {
        activity.id = next_id(ACTIVITY_ID_PREFIX, self.activities.iter().map(|a| a.id.as_str()));
        debug!("Inserted activity {} ({})", activity.id, activity.subject);
        self.activities.push(activity);
        &self.activities[self.activities.len() - 1]
    }

    /// Appends a user, assigning the next `usr_` id.
    pub fn insert_user(&mut self, mut user: User) -> &User {
        user.id = next_id(USER_ID_PREFIX, self.users.iter().map(|u| u.id.as_str()));
        debug!("Inserted user {} ({})", user.id, user.email);
        self.users.push(user);
        &self.users[self.users.len() - 1]
    }

    /// Flips a user between active and inactive.
    pub fn toggle_user_status(&mut self, id: &str) -> Result<Notice, CrmError> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| CrmError::not_found("user", id))?;
        user.status = user.status.toggled();
        info!("User {} is now {}", user.id, user.status.label());

        let title = match user.status {
            UserStatus::Active => "User Activated",
            UserStatus::Inactive => "User Deactivated",
        };
        Ok(Notice::success(
            title,
            format!("{}'s status has been changed to {}.", user.name, user.status.label()),
        )
        .with_duration(SHORT_NOTICE_DURATION))
    }
}

/// The id after the highest numbered id with `prefix`, zero-padded to three digits.
pub fn next_id<'a>(prefix: &str, ids: impl Iterator<Item = &'a str>) -> String {
    let highest = ids
        .filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|n| n.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{}{:03}", prefix, highest + 1)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn primary(name: &str, title: Option<&str>) -> Option<PrimaryContact> {
    Some(PrimaryContact {
        name: name.to_string(),
        title: title.map(str::to_string),
    })
}

fn innovatech_address() -> Address {
    Address {
        street: "123 Tech Park Road".into(),
        city: "Bangalore".into(),
        state: "Karnataka".into(),
        postal_code: "560001".into(),
        country: "India".into(),
    }
}

fn seed_accounts() -> Vec<Account> {
    vec![
        Account {
            id: "acc_001".into(),
            name: "Innovatech Solutions Ltd.".into(),
            industry: "Information Technology".into(),
            account_type: AccountType::Customer,
            primary_contact: primary("Priya Sharma", Some("CEO")),
            phone: "+91 98765 43210".into(),
            website: Some("https://innovatech.example.com".into()),
            last_activity: Some(date(2023, 10, 25)),
            revenue: Some(Decimal::from(5_000_000)),
            employees: Some(150),
            description: Some(
                "A leading provider of innovative IT solutions, specializing in cloud computing and \
                 AI-driven analytics. Strong partnership potential."
                    .into(),
            ),
            billing_address: Some(innovatech_address()),
            shipping_address: Some(innovatech_address()),
            created: at(2022, 8, 15, 10, 0),
        },
        Account {
            id: "acc_002".into(),
            name: "GreenHarvest AgriCorp".into(),
            industry: "Agriculture".into(),
            account_type: AccountType::Prospect,
            primary_contact: primary("Rajesh Kumar", None),
            phone: "+91 87654 32109".into(),
            website: None,
            last_activity: Some(date(2023, 10, 20)),
            revenue: Some(Decimal::from(2_000_000)),
            employees: Some(75),
            description: None,
            billing_address: None,
            shipping_address: None,
            created: at(2023, 2, 10, 9, 0),
        },
        Account {
            id: "acc_003".into(),
            name: "BuildStrong Constructions".into(),
            industry: "Construction".into(),
            account_type: AccountType::Partner,
            primary_contact: primary("Anita Desai", None),
            phone: "+91 76543 21098".into(),
            website: None,
            last_activity: Some(date(2023, 10, 28)),
            revenue: Some(Decimal::from(10_000_000)),
            employees: Some(300),
            description: None,
            billing_address: None,
            shipping_address: None,
            created: at(2022, 11, 3, 11, 30),
        },
        Account {
            id: "acc_004".into(),
            name: "MediCare Hospitals Group".into(),
            industry: "Healthcare".into(),
            account_type: AccountType::Customer,
            primary_contact: primary("Vikram Singh", None),
            phone: "+91 65432 10987".into(),
            website: None,
            last_activity: Some(date(2023, 10, 15)),
            revenue: Some(Decimal::from(7_500_000)),
            employees: Some(500),
            description: None,
            billing_address: None,
            shipping_address: None,
            created: at(2023, 1, 20, 14, 0),
        },
    ]
}

struct ContactSeed<'a> {
    id: &'a str,
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    company: &'a str,
    account_id: Option<&'a str>,
    role: &'a str,
    created: NaiveDate,
    last_activity: NaiveDate,
}

impl ContactSeed<'_> {
    fn build(self) -> Contact {
        Contact {
            id: self.id.into(),
            name: self.name.into(),
            email: self.email.into(),
            phone: self.phone.into(),
            mobile: None,
            company: self.company.into(),
            account_id: self.account_id.map(str::to_string),
            role: self.role.into(),
            department: None,
            address: None,
            description: None,
            created_date: self.created,
            last_activity: Some(self.last_activity),
        }
    }
}

fn seed_contacts() -> Vec<Contact> {
    let innovatech = "Innovatech Solutions Ltd.";
    vec![
        ContactSeed {
            id: "cont_001",
            name: "Priya Sharma",
            email: "priya.sharma@innovatech.com",
            phone: "+91 98765 43210",
            company: innovatech,
            account_id: Some("acc_001"),
            role: "CEO",
            created: date(2022, 8, 15),
            last_activity: date(2023, 10, 25),
        }
        .build(),
        ContactSeed {
            id: "cont_002",
            name: "Arjun Mehta",
            email: "arjun.mehta@innovatech.com",
            phone: "+91 98765 43211",
            company: innovatech,
            account_id: Some("acc_001"),
            role: "CTO",
            created: date(2022, 8, 15),
            last_activity: date(2023, 10, 15),
        }
        .build(),
        ContactSeed {
            id: "cont_003",
            name: "Sneha Reddy",
            email: "sneha.reddy@innovatech.com",
            phone: "+91 98765 43212",
            company: innovatech,
            account_id: Some("acc_001"),
            role: "Sales Director",
            created: date(2022, 9, 1),
            last_activity: date(2023, 10, 20),
        }
        .build(),
        ContactSeed {
            id: "cont_004",
            name: "Aarav Patel",
            email: "aarav.patel@example.com",
            phone: "+91 99887 76655",
            company: "Tech Solutions Inc.",
            account_id: None,
            role: "Project Manager",
            created: date(2023, 9, 10),
            last_activity: date(2023, 11, 12),
        }
        .build(),
        ContactSeed {
            id: "cont_005",
            name: "Sneha Reddy",
            email: "sneha.reddy@company.co.in",
            phone: "+91 88776 55443",
            company: "Innovate Hub",
            account_id: None,
            role: "Lead Developer",
            created: date(2023, 8, 22),
            last_activity: date(2023, 11, 15),
        }
        .build(),
        ContactSeed {
            id: "cont_006",
            name: "Vikram Singh",
            email: "vikram.singh@business.org",
            phone: "+91 77665 44332",
            company: "Global Connect",
            account_id: None,
            role: "Sales Director",
            created: date(2023, 7, 1),
            last_activity: date(2023, 11, 10),
        }
        .build(),
    ]
}

struct LeadSeed<'a> {
    id: &'a str,
    name: &'a str,
    company: &'a str,
    status: LeadStatus,
    assigned_to: &'a str,
    created: NaiveDate,
    email: &'a str,
    phone: &'a str,
}

impl LeadSeed<'_> {
    fn build(self) -> Lead {
        Lead {
            id: self.id.into(),
            name: self.name.into(),
            company: self.company.into(),
            account_id: None,
            contact_id: None,
            contact_person: None,
            status: self.status,
            assigned_to: self.assigned_to.into(),
            created_date: self.created,
            email: self.email.into(),
            phone: self.phone.into(),
            potential_value: None,
            notes: None,
        }
    }
}

fn seed_leads() -> Vec<Lead> {
    let mut leads = vec![
        LeadSeed {
            id: "L001",
            name: "Alpha Corp Inquiry",
            company: "Alpha Corp",
            status: LeadStatus::New,
            assigned_to: "Sales Rep A",
            created: date(2023, 10, 1),
            email: "contact@alphacorp.com",
            phone: "+91 9876543210",
        }
        .build(),
        LeadSeed {
            id: "L002",
            name: "Beta Solutions Demo Request",
            company: "Beta Solutions",
            status: LeadStatus::Qualified,
            assigned_to: "Sales Rep B",
            created: date(2023, 10, 5),
            email: "info@betasolutions.io",
            phone: "+91 8765432109",
        }
        .build(),
        LeadSeed {
            id: "L003",
            name: "Gamma Services Partnership",
            company: "Gamma Services",
            status: LeadStatus::ProposalSent,
            assigned_to: "Sales Rep A",
            created: date(2023, 10, 10),
            email: "partner@gammaservices.co",
            phone: "+91 7654321098",
        }
        .build(),
        LeadSeed {
            id: "L004",
            name: "Delta Innovations Project",
            company: "Delta Innovations",
            status: LeadStatus::Negotiation,
            assigned_to: "Sales Rep C",
            created: date(2023, 10, 15),
            email: "sales@deltainnov.com",
            phone: "+91 6543210987",
        }
        .build(),
        LeadSeed {
            id: "L005",
            name: "Epsilon Tech Consultation",
            company: "Epsilon Tech",
            status: LeadStatus::ClosedWon,
            assigned_to: "Sales Rep B",
            created: date(2023, 9, 20),
            email: "consult@epsilon.tech",
            phone: "+91 5432109876",
        }
        .build(),
    ];

    let mut alpha = LeadSeed {
        id: "L006",
        name: "Project Alpha Implementation",
        company: "Innovatech Solutions Ltd.",
        status: LeadStatus::ProposalSent,
        assigned_to: "Sales Rep A",
        created: date(2023, 10, 18),
        email: "priya.sharma@innovatech.com",
        phone: "+91 98765 43210",
    }
    .build();
    alpha.account_id = Some("acc_001".into());
    alpha.contact_id = Some("cont_001".into());
    alpha.contact_person = Some("Priya Sharma".into());
    alpha.potential_value = Some(Decimal::from(50_000));
    leads.push(alpha);

    let mut migration = LeadSeed {
        id: "L007",
        name: "Cloud Migration Services",
        company: "Innovatech Solutions Ltd.",
        status: LeadStatus::Negotiation,
        assigned_to: "Sales Rep B",
        created: date(2023, 10, 22),
        email: "arjun.mehta@innovatech.com",
        phone: "+91 98765 43211",
    }
    .build();
    migration.account_id = Some("acc_001".into());
    migration.contact_id = Some("cont_002".into());
    migration.contact_person = Some("Arjun Mehta".into());
    migration.potential_value = Some(Decimal::from(75_000));
    leads.push(migration);

    leads
}

struct ActivitySeed<'a> {
    id: &'a str,
    kind: ActivityKind,
    subject: &'a str,
    related_to: RelatedTo,
    due_date: DateTime<Utc>,
    assigned_to: &'a str,
    status: ActivityStatus,
    priority: Priority,
    notes: Option<&'a str>,
}

impl ActivitySeed<'_> {
    fn build(self) -> Activity {
        Activity {
            id: self.id.into(),
            kind: self.kind,
            subject: self.subject.into(),
            related_to: self.related_to,
            due_date: self.due_date,
            assigned_to: self.assigned_to.into(),
            status: self.status,
            priority: self.priority,
            notes: self.notes.map(str::to_string),
        }
    }
}

fn seed_activities() -> Vec<Activity> {
    let account = |name: &str, id: &str| RelatedTo::new(RelatedKind::Account, name, id);

    vec![
        ActivitySeed {
            id: "act_001",
            kind: ActivityKind::Call,
            subject: "Follow-up call with Innovatech Solutions",
            related_to: account("Innovatech Solutions Ltd.", "acc_001"),
            due_date: at(2023, 11, 10, 10, 0),
            assigned_to: "Aarav Sharma",
            status: ActivityStatus::Upcoming,
            priority: Priority::High,
            notes: None,
        }
        .build(),
        ActivitySeed {
            id: "act_002",
            kind: ActivityKind::Email,
            subject: "Sent proposal to GreenHarvest AgriCorp",
            related_to: account("GreenHarvest AgriCorp", "acc_002"),
            due_date: at(2023, 11, 5, 14, 30),
            assigned_to: "Priya Singh",
            status: ActivityStatus::Completed,
            priority: Priority::Medium,
            notes: None,
        }
        .build(),
        ActivitySeed {
            id: "act_003",
            kind: ActivityKind::Meeting,
            subject: "Product Demo for BuildStrong Constructions",
            related_to: account("BuildStrong Constructions", "acc_003"),
            due_date: at(2023, 11, 15, 11, 0),
            assigned_to: "Rohan Mehta",
            status: ActivityStatus::Upcoming,
            priority: Priority::High,
            notes: None,
        }
        .build(),
        ActivitySeed {
            id: "act_004",
            kind: ActivityKind::Note,
            subject: "Internal discussion about MediCare account strategy",
            related_to: account("MediCare Hospitals Group", "acc_004"),
            due_date: at(2023, 11, 8, 16, 0),
            assigned_to: "Aarav Sharma",
            status: ActivityStatus::Overdue,
            priority: Priority::Low,
            notes: None,
        }
        .build(),
        ActivitySeed {
            id: "act_005",
            kind: ActivityKind::Call,
            subject: "Introductory Call with Priya",
            related_to: RelatedTo::new(RelatedKind::Contact, "Priya Sharma", "cont_001"),
            due_date: at(2023, 10, 25, 9, 0),
            assigned_to: "Sales Rep A",
            status: ActivityStatus::Completed,
            priority: Priority::Medium,
            notes: Some("Discussed potential collaboration."),
        }
        .build(),
        ActivitySeed {
            id: "act_006",
            kind: ActivityKind::Email,
            subject: "Follow-up on Proposal",
            related_to: RelatedTo::new(RelatedKind::Lead, "Project Alpha Implementation", "L006"),
            due_date: at(2023, 10, 20, 12, 0),
            assigned_to: "Sales Rep B",
            status: ActivityStatus::Completed,
            priority: Priority::Medium,
            notes: Some("Sent proposal details."),
        }
        .build(),
        ActivitySeed {
            id: "act_007",
            kind: ActivityKind::Meeting,
            subject: "Product Demo with Arjun",
            related_to: RelatedTo::new(RelatedKind::Contact, "Arjun Mehta", "cont_002"),
            due_date: at(2023, 10, 15, 15, 0),
            assigned_to: "Sales Rep A",
            status: ActivityStatus::Completed,
            priority: Priority::High,
            notes: Some("Showcased new features."),
        }
        .build(),
    ]
}

fn user(id: &str, name: &str, email: &str, role: Role, status: UserStatus, last_login: DateTime<Utc>) -> User {
    User {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        role,
        status,
        last_login: Some(last_login),
    }
}

fn seed_users() -> Vec<User> {
    vec![
        user(
            "usr_001",
            "Aarav Sharma",
            "aarav.sharma@example.com",
            Role::Administrator,
            UserStatus::Active,
            at(2024, 3, 10, 10, 0),
        ),
        user(
            "usr_002",
            "Priya Patel",
            "priya.patel@example.com",
            Role::SalesManager,
            UserStatus::Active,
            at(2024, 3, 10, 9, 30),
        ),
        user(
            "usr_003",
            "Rohan Das",
            "rohan.das@example.com",
            Role::SalesRepresentative,
            UserStatus::Active,
            at(2024, 3, 9, 15, 45),
        ),
        user(
            "usr_004",
            "Sneha Reddy",
            "sneha.reddy@example.com",
            Role::SalesRepresentative,
            UserStatus::Inactive,
            at(2024, 2, 20, 11, 0),
        ),
        user(
            "usr_005",
            "Vikram Singh",
            "vikram.singh@example.com",
            Role::Administrator,
            UserStatus::Active,
            at(2024, 3, 11, 8, 15),
        ),
    ]
}
