//! Screen stack for modal overlays
//!
//! Screens are installed once under a name and later pushed by that name.
//! The base screen is implicit: an empty stack means nothing is overlaid
//! and input goes to the main form. Only the top screen receives input.

use std::collections::HashMap;

use log::debug;

use crate::error::{Error, Result};

#[derive(Debug)]
pub struct ScreenStack<S> {
    installed: HashMap<String, S>,
    stack: Vec<String>,
}

impl<S> Default for ScreenStack<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ScreenStack<S> {
    pub fn new() -> Self {
        Self {
            installed: HashMap::new(),
            stack: Vec::new(),
        }
    }

    /// Register a screen under `name` so it can be pushed later
    pub fn install_screen(&mut self, name: impl Into<String>, screen: S) -> Result<()> {
        let name = name.into();
        if self.installed.contains_key(&name) {
            return Err(Error::ScreenAlreadyInstalled(name));
        }
        debug!("install screen {name}");
        self.installed.insert(name, screen);
        Ok(())
    }

    /// Remove an installed screen, handing it back to the caller
    pub fn uninstall_screen(&mut self, name: &str) -> Result<S> {
        if self.is_on_stack(name) {
            return Err(Error::ScreenActive(name.to_string()));
        }
        debug!("uninstall screen {name}");
        self.installed
            .remove(name)
            .ok_or_else(|| Error::ScreenNotInstalled(name.to_string()))
    }

    pub fn is_installed(&self, name: &str) -> bool {
        self.installed.contains_key(name)
    }

    pub fn push_screen(&mut self, name: &str) -> Result<()> {
        if !self.installed.contains_key(name) {
            return Err(Error::ScreenNotInstalled(name.to_string()));
        }
        if self.is_on_stack(name) {
            return Err(Error::ScreenAlreadyPushed(name.to_string()));
        }
        debug!("push screen {name}");
        self.stack.push(name.to_string());
        Ok(())
    }

    /// Pop the top screen and return its name
    pub fn pop_screen(&mut self) -> Result<String> {
        let name = self.stack.pop().ok_or(Error::NoScreenToPop)?;
        debug!("pop screen {name}");
        Ok(name)
    }

    pub fn active_name(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    pub fn active(&self) -> Option<&S> {
        self.stack.last().and_then(|name| self.installed.get(name))
    }

    pub fn active_mut(&mut self) -> Option<&mut S> {
        let name = self.stack.last()?;
        self.installed.get_mut(name)
    }

    pub fn get(&self, name: &str) -> Option<&S> {
        self.installed.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut S> {
        self.installed.get_mut(name)
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active_name() == Some(name)
    }

    /// True when no modal screen covers the base screen
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn is_on_stack(&self, name: &str) -> bool {
        self.stack.iter().any(|n| n == name)
    }
}
