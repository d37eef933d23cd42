//! Client record and the data hanging off it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

use super::contract::Contract;
use super::ids::ClientId;

/// Kind of contracted monthly output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliverableType {
    Posts,
    Reels,
    Stories,
}

impl DeliverableType {
    pub const ALL: [DeliverableType; 3] = [
        DeliverableType::Posts,
        DeliverableType::Reels,
        DeliverableType::Stories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliverableType::Posts => "posts",
            DeliverableType::Reels => "reels",
            DeliverableType::Stories => "stories",
        }
    }
}

impl std::fmt::Display for DeliverableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One count per deliverable type. Used both for quotas and completed work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeliverableCounts {
    pub posts: u32,
    pub reels: u32,
    pub stories: u32,
}

impl DeliverableCounts {
    pub fn get(&self, deliverable: DeliverableType) -> u32 {
        match deliverable {
            DeliverableType::Posts => self.posts,
            DeliverableType::Reels => self.reels,
            DeliverableType::Stories => self.stories,
        }
    }

    pub fn set(&mut self, deliverable: DeliverableType, count: u32) {
        match deliverable {
            DeliverableType::Posts => self.posts = count,
            DeliverableType::Reels => self.reels = count,
            DeliverableType::Stories => self.stories = count,
        }
    }
}

/// Unit step applied to a completed-deliverable counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliverableChange {
    Increment,
    Decrement,
}

impl DeliverableChange {
    pub fn delta(&self) -> i64 {
        match self {
            DeliverableChange::Increment => 1,
            DeliverableChange::Decrement => -1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliverableChange::Increment => "increment",
            DeliverableChange::Decrement => "decrement",
        }
    }

    /// `clamp(current + delta, 0, quota)`.
    pub fn apply(&self, current: u32, quota: u32) -> u32 {
        let next = (i64::from(current) + self.delta()).clamp(0, i64::from(quota));
        // within [0, quota], so it fits
        next as u32
    }
}

impl TryFrom<i32> for DeliverableChange {
    type Error = AppError;

    fn try_from(delta: i32) -> Result<Self, Self::Error> {
        match delta {
            1 => Ok(DeliverableChange::Increment),
            -1 => Ok(DeliverableChange::Decrement),
            other => Err(AppError::InvalidRequest(anyhow::anyhow!(
                "Deliverable delta must be +1 or -1, got {}",
                other
            ))),
        }
    }
}

/// Overall state of the engagement with a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Running,
    Paused,
    RenewalDue,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Running => "running",
            ProjectStatus::Paused => "paused",
            ProjectStatus::RenewalDue => "renewal_due",
            ProjectStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub name: String,
    pub company: String,
}

/// KPI snapshot shown on the client dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpi {
    pub leads_generated: u32,
    pub ads_spent: Decimal,
    pub total_reach: u64,
    /// Engagement rate as displayed, e.g. "8.5%".
    pub engagement: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Post,
    Reel,
    CampaignSetup,
    Report,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Completed,
    InProgress,
    Pending,
}

impl TaskStatus {
    /// Order in which task groups are listed on the progress view.
    pub const DISPLAY_ORDER: [TaskStatus; 3] =
        [TaskStatus::InProgress, TaskStatus::Pending, TaskStatus::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "completed",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub task_type: TaskType,
    pub status: TaskStatus,
    pub due_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Paid,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub status: InvoiceStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Resolved,
    InProgress,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportTicket {
    pub id: String,
    pub subject: String,
    pub date: NaiveDate,
    pub status: TicketStatus,
}

/// Everything the dashboard knows about one client. The client's add-on
/// request history lives in the request store, indexed by client id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: ClientId,
    pub profile: ClientProfile,
    pub contract: Contract,
    pub kpi: Kpi,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub deliverables_completed: DeliverableCounts,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    #[serde(default)]
    pub support_tickets: Vec<SupportTicket>,
    pub project_status: ProjectStatus,
}
