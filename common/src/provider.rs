//! Provider bundles and their approval workflow.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderStatus {
    #[serde(rename = "pending initial approval")]
    PendingInitialApproval,
    #[serde(rename = "pending service template submission")]
    PendingTemplateSubmission,
    #[serde(rename = "pending service template approval")]
    PendingTemplateApproval,
    #[serde(rename = "approved")]
    Approved,
    #[serde(rename = "rejected service template")]
    RejectedTemplate,
    #[serde(rename = "rejected")]
    Rejected,
}

impl ProviderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingInitialApproval => "pending initial approval",
            Self::PendingTemplateSubmission => "pending service template submission",
            Self::PendingTemplateApproval => "pending service template approval",
            Self::Approved => "approved",
            Self::RejectedTemplate => "rejected service template",
            Self::Rejected => "rejected",
        }
    }

    /// Next step of the approval chain. Approved and rejected providers stay put.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::PendingInitialApproval => Some(Self::PendingTemplateSubmission),
            Self::PendingTemplateSubmission => Some(Self::PendingTemplateApproval),
            Self::PendingTemplateApproval => Some(Self::Approved),
            Self::Approved | Self::RejectedTemplate | Self::Rejected => None,
        }
    }

    /// Providers in these states have submitted a first service for review.
    pub fn has_pending_first_service(&self) -> bool {
        matches!(self, Self::PendingTemplateApproval | Self::RejectedTemplate)
    }
}

impl Display for ProviderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderBundle {
    pub id: String,
    #[serde(default)]
    pub provider: Provider,
    pub status: ProviderStatus,
    #[serde(default)]
    pub active: bool,
}

/// Body of the provider update call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderStatusUpdate {
    pub id: String,
    pub status: ProviderStatus,
    pub active: bool,
}

impl ProviderStatusUpdate {
    /// Moves the provider one step along the approval chain; it becomes active
    /// once approved.
    pub fn approval_of(bundle: &ProviderBundle) -> Option<Self> {
        let next = bundle.status.next()?;
        Some(Self { id: bundle.id.clone(), status: next, active: next == ProviderStatus::Approved })
    }

    /// Explicit admin decision. Only a pushed approval activates the provider.
    pub fn verify(id: impl Into<String>, new_status: ProviderStatus, pushed_approve: bool) -> Self {
        Self {
            id: id.into(),
            status: new_status,
            active: pushed_approve && new_status == ProviderStatus::Approved,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingService {
    pub id: String,
    #[serde(default)]
    pub name: String,
}
