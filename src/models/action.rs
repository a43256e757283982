use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::vault::VaultRecord;

/// Events that drive the dashboard state.
///
/// The JSON form is tagged by `type` with the wire names below; any other
/// tag deserializes to [`Action::Unknown`], which the reducer ignores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    #[serde(rename = "CONNECTION_CONNECTED", rename_all = "camelCase")]
    ConnectionConnected {
        #[serde(default)]
        account: Option<String>,
        #[serde(default)]
        connector: Option<Value>,
        #[serde(default)]
        library: Option<Value>,
        #[serde(default)]
        chain_id: Option<u64>,
    },
    #[serde(rename = "CONNECTION_UPDATED", rename_all = "camelCase")]
    ConnectionUpdated {
        #[serde(default)]
        library: Option<Value>,
        #[serde(default)]
        chain_id: Option<u64>,
        #[serde(default)]
        active: bool,
    },
    #[serde(rename = "PRICES_LOADED")]
    PricesLoaded { vaults: Vec<VaultRecord> },
    #[serde(rename = "VAULTS_LOADED")]
    VaultsLoaded { vaults: Vec<VaultRecord> },
    #[serde(rename = "SHOW_CONNECTOR_MODAL", rename_all = "camelCase")]
    ShowConnectorModal { show_modal: bool },
    #[serde(other)]
    Unknown,
}

/// Payload-free discriminant of an [`Action`], handy for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    ConnectionConnected,
    ConnectionUpdated,
    PricesLoaded,
    VaultsLoaded,
    ShowConnectorModal,
    Unknown,
}

impl ActionKind {
    /// Wire tag used in the JSON form
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::ConnectionConnected => "CONNECTION_CONNECTED",
            ActionKind::ConnectionUpdated => "CONNECTION_UPDATED",
            ActionKind::PricesLoaded => "PRICES_LOADED",
            ActionKind::VaultsLoaded => "VAULTS_LOADED",
            ActionKind::ShowConnectorModal => "SHOW_CONNECTOR_MODAL",
            ActionKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::ConnectionConnected { .. } => ActionKind::ConnectionConnected,
            Action::ConnectionUpdated { .. } => ActionKind::ConnectionUpdated,
            Action::PricesLoaded { .. } => ActionKind::PricesLoaded,
            Action::VaultsLoaded { .. } => ActionKind::VaultsLoaded,
            Action::ShowConnectorModal { .. } => ActionKind::ShowConnectorModal,
            Action::Unknown => ActionKind::Unknown,
        }
    }

    /// Parse an action from its tagged JSON form
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).map_err(|e| anyhow::anyhow!("Invalid action {}: {}", json, e))
    }
}
