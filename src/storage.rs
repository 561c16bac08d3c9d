use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::warn;
use thiserror::Error;
use web_sys::{window, Storage};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    #[error("session storage is not available")]
    Unavailable,

    #[error("session storage rejected the operation: {0}")]
    Rejected(String),
}

/// Key-value capability scoped to the browsing session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.sessionStorage`.
pub struct BrowserSession {
    storage: Storage,
}

impl BrowserSession {
    pub fn open() -> Result<Self, StorageError> {
        let window = window().ok_or(StorageError::Unavailable)?;
        match window.session_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(StorageError::Unavailable),
            Err(e) => Err(StorageError::Rejected(format!("{:?}", e))),
        }
    }
}

impl SessionStore for BrowserSession {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Rejected(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(format!("{:?}", e)))
    }
}

/// In-memory store. Lives only as long as the value itself.
#[derive(Default)]
pub struct MemorySession {
    items: RefCell<HashMap<String, String>>,
}

impl MemorySession {
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: SessionStore + ?Sized> SessionStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Browser session storage, or an in-memory stand-in when the browser refuses it
/// (private mode, disabled storage). With the stand-in the intro replays on every load.
pub fn open_session() -> Rc<dyn SessionStore> {
    match BrowserSession::open() {
        Ok(session) => Rc::new(session),
        Err(e) => {
            warn!("Falling back to in-memory session: {}", e);
            Rc::new(MemorySession::default())
        }
    }
}
