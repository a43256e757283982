use super::vault::VaultRecord;

/// Shown when a vault has no icon or its icon fails to load
pub const FALLBACK_ICON_URL: &str =
    "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains/ethereum/info/logo.png";

/// Icon source for one vault: the vault's own icon, then the underlying
/// token's icon, then the static fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultIcon {
    source: Option<String>,
    failed: bool,
}

impl VaultIcon {
    pub fn for_vault(vault: &VaultRecord) -> Self {
        Self {
            source: vault.vault_icon.clone().or_else(|| vault.token_icon.clone()),
            failed: false,
        }
    }

    /// URL to render right now
    pub fn src(&self) -> &str {
        match (&self.source, self.failed) {
            (Some(url), false) => url.as_str(),
            _ => FALLBACK_ICON_URL,
        }
    }

    /// Record a load failure; the fallback is used from then on
    pub fn on_error(&mut self) {
        self.failed = true;
    }

    pub fn is_fallback(&self) -> bool {
        self.src() == FALLBACK_ICON_URL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_vault_icon_then_token_icon() {
        let mut vault = VaultRecord::new("0xabc");
        vault.token_icon = Some("https://example.org/token.png".to_string());
        assert_eq!(VaultIcon::for_vault(&vault).src(), "https://example.org/token.png");

        vault.vault_icon = Some("https://example.org/vault.png".to_string());
        assert_eq!(VaultIcon::for_vault(&vault).src(), "https://example.org/vault.png");
    }

    #[test]
    fn falls_back_when_missing_or_broken() {
        let bare = VaultIcon::for_vault(&VaultRecord::new("0xabc"));
        assert!(bare.is_fallback());

        let mut vault = VaultRecord::new("0xabc");
        vault.vault_icon = Some("https://example.org/broken.png".to_string());
        let mut icon = VaultIcon::for_vault(&vault);
        assert!(!icon.is_fallback());
        icon.on_error();
        assert_eq!(icon.src(), FALLBACK_ICON_URL);
    }
}
