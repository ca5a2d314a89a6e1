use super::types::{SessionError, SessionManager, WalletSession};
use crate::network::MintTransaction;

/// In-memory wallet session used by the desktop client
#[derive(Debug, Default)]
pub struct LocalSessionManager {
    address: Option<String>,
    transactions: Vec<MintTransaction>,
}

impl LocalSessionManager {
    /// A manager connected to `address`. An empty address leaves it disconnected.
    pub fn new(address: &str) -> Self {
        Self {
            address: Some(address.to_string()).filter(|a| !a.is_empty()),
            transactions: Vec::new(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    pub fn transactions(&self) -> &[MintTransaction] {
        &self.transactions
    }
}

impl SessionManager for LocalSessionManager {
    type Session = WalletSession;

    fn sync(&mut self, transaction: MintTransaction) -> Result<WalletSession, SessionError> {
        let address = self.address.clone().ok_or(SessionError::NotConnected)?;
        self.transactions.push(transaction);

        Ok(WalletSession {
            address,
            transactions: self.transactions.clone(),
        })
    }
}
