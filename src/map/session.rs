//! Scoped map sessions
//!
//! A [`MapSession`] owns one engine instance and destroys it when dropped,
//! so every path that discards the session (token change, unmount, failed
//! layer setup) releases it exactly once.

use std::fmt;
use std::rc::Rc;

use super::engine::MapEngine;

pub struct MapSession<E: MapEngine> {
    engine: Rc<E>,
    /// `None` only while dropping
    handle: Option<E::Session>,
}

impl<E: MapEngine> MapSession<E> {
    pub fn new(engine: Rc<E>, handle: E::Session) -> Self {
        Self {
            engine,
            handle: Some(handle),
        }
    }

    pub fn handle(&self) -> &E::Session {
        self.handle
            .as_ref()
            .expect("session handle is present until drop")
    }
}

impl<E: MapEngine> Drop for MapSession<E> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            tracing::debug!("Destroying map session");
            self.engine.destroy_session(handle);
        }
    }
}

impl<E: MapEngine> fmt::Debug for MapSession<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapSession")
            .field("live", &self.handle.is_some())
            .finish()
    }
}
