use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::StoreError;

/// DPI recommendation. Fixed-touch devices carry a descriptive label instead of a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dpi {
    Value(u32),
    NotApplicable(String),
}

impl Dpi {
    pub fn is_applicable(&self) -> bool {
        matches!(self, Dpi::Value(_))
    }
}

impl fmt::Display for Dpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dpi::Value(value) => write!(f, "{value}"),
            Dpi::NotApplicable(label) => f.write_str(label),
        }
    }
}

/// Recommended sensitivity settings for one device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceProfile {
    pub general: u8,
    pub red_dot: u8,
    pub scope_2x: u8,
    pub scope_4x: u8,
    pub sniper_scope: u8,
    pub free_look: u8,
    pub dpi: Dpi,
    pub gyro: u32,
    pub tips: String,
}

impl DeviceProfile {
    /// Aim and scope percentages in display order.
    pub fn sensitivity_rows(&self) -> [(&'static str, u8); 6] {
        [
            ("General", self.general),
            ("Red Dot", self.red_dot),
            ("2x Scope", self.scope_2x),
            ("4x Scope", self.scope_4x),
            ("Sniper Scope", self.sniper_scope),
            ("Free Look", self.free_look),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    pub profile: DeviceProfile,
}

impl Device {
    /// Plain-text rendition used for the clipboard.
    pub fn clipboard_text(&self) -> String {
        let mut text = format!("Device: {}\n", self.name);
        for (label, value) in self.profile.sensitivity_rows() {
            text.push_str(&format!("{label}: {value}%\n"));
        }
        text.push_str(&format!("Gyro: {}\n", self.profile.gyro));
        text.push_str(&format!("DPI: {}\n", self.profile.dpi));
        text
    }
}

/// Case-insensitive substring match of `term` against a device name.
/// An empty term matches everything.
pub fn matches_search(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

/// Ordered, read-only device catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    devices: Vec<Device>,
}

impl Catalog {
    pub fn new(devices: Vec<Device>) -> Self {
        Self { devices }
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.devices.iter().map(|device| device.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Device> {
        self.devices.iter().find(|device| device.name == name)
    }

    pub fn lookup(&self, name: &str) -> Result<&Device, StoreError> {
        self.get(name)
            .ok_or_else(|| StoreError::UnknownDevice(name.to_string()))
    }

    /// Devices whose name contains `term`, case-insensitively, in catalog order.
    pub fn search(&self, term: &str) -> Vec<&Device> {
        self.devices
            .iter()
            .filter(|device| matches_search(&device.name, term))
            .collect()
    }
}
