use crate::network::MintTransaction;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Wallet is not connected")]
    NotConnected,
}

/// Wallet-side view of the player's session after a sync
#[derive(Debug, Clone, PartialEq)]
pub struct WalletSession {
    pub address: String,
    pub transactions: Vec<MintTransaction>,
}

/// Reconciles a wallet session with transactions created by the game API
pub trait SessionManager {
    type Session;

    fn sync(&mut self, transaction: MintTransaction) -> Result<Self::Session, SessionError>;
}
