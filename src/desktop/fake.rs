//! In-memory settings backend for unit tests
//!
//! Mirrors the slot tables of the real backends but stores values in a map,
//! recording every write in order so tests can assert on fan-out behavior.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::backend::{PanelKeys, SettingKey, SettingsBackend, ThemeSlot};
use super::{DesktopEnvironment, DesktopError, cinnamon, mate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FakeValue {
    Str(String),
    List(Vec<String>),
}

pub(crate) struct FakeBackend {
    environment: DesktopEnvironment,
    panel_keys: Option<PanelKeys>,
    values: RefCell<BTreeMap<(&'static str, &'static str), FakeValue>>,
    writes: RefCell<Vec<SettingKey>>,
}

impl FakeBackend {
    pub fn cinnamon() -> Self {
        Self {
            environment: DesktopEnvironment::Cinnamon,
            panel_keys: Some(cinnamon::panel_keys()),
            values: RefCell::new(BTreeMap::new()),
            writes: RefCell::new(Vec::new()),
        }
    }

    pub fn mate() -> Self {
        Self {
            environment: DesktopEnvironment::Mate,
            panel_keys: None,
            values: RefCell::new(BTreeMap::new()),
            writes: RefCell::new(Vec::new()),
        }
    }

    /// Preload the interface theme slot, as if another tool had set it.
    pub fn with_interface_theme(self, theme: &str) -> Self {
        let key = self
            .theme_key(ThemeSlot::Interface)
            .expect("backend has an interface slot");
        self.values
            .borrow_mut()
            .insert((key.namespace, key.key), FakeValue::Str(theme.to_string()));
        self
    }

    pub fn string(&self, key: SettingKey) -> Option<String> {
        match self.values.borrow().get(&(key.namespace, key.key)) {
            Some(FakeValue::Str(value)) => Some(value.clone()),
            _ => None,
        }
    }

    pub fn list(&self, key: SettingKey) -> Option<Vec<String>> {
        match self.values.borrow().get(&(key.namespace, key.key)) {
            Some(FakeValue::List(values)) => Some(values.clone()),
            _ => None,
        }
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }

    pub fn contents(&self) -> BTreeMap<(&'static str, &'static str), FakeValue> {
        self.values.borrow().clone()
    }
}

impl SettingsBackend for FakeBackend {
    fn environment(&self) -> DesktopEnvironment {
        self.environment.clone()
    }

    fn theme_key(&self, slot: ThemeSlot) -> Option<SettingKey> {
        match self.environment {
            DesktopEnvironment::Cinnamon => cinnamon::theme_key(slot),
            DesktopEnvironment::Mate => mate::theme_key(slot),
            _ => None,
        }
    }

    fn panel_keys(&self) -> Option<&PanelKeys> {
        self.panel_keys.as_ref()
    }

    fn get_string(&self, key: SettingKey) -> Result<String, DesktopError> {
        match self.values.borrow().get(&(key.namespace, key.key)) {
            Some(FakeValue::Str(value)) => Ok(value.clone()),
            _ => Err(DesktopError::ReadFailed {
                namespace: key.namespace,
                key: key.key,
                status: Some(1),
            }),
        }
    }

    fn set_string(&self, key: SettingKey, value: &str) -> Result<(), DesktopError> {
        self.writes.borrow_mut().push(key);
        self.values
            .borrow_mut()
            .insert((key.namespace, key.key), FakeValue::Str(value.to_string()));
        Ok(())
    }

    fn set_string_list(&self, key: SettingKey, values: &[String]) -> Result<(), DesktopError> {
        self.writes.borrow_mut().push(key);
        self.values
            .borrow_mut()
            .insert((key.namespace, key.key), FakeValue::List(values.to_vec()));
        Ok(())
    }
}
