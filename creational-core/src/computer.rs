//! Step-by-step construction of a `Computer`

use std::fmt;

use serde::{Deserialize, Serialize};

/// A computer assembled by [`ComputerBuilder`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Computer {
    pub cpu: String,
    pub ram: String,
    pub storage: String,
    pub gpu: Option<String>,
}

impl Default for Computer {
    fn default() -> Self {
        Self {
            cpu: "cpu - not defined".to_string(),
            ram: "ram - not defined".to_string(),
            storage: "storage - not defined".to_string(),
            gpu: None,
        }
    }
}

impl Computer {
    /// Human readable parts list, one part per line
    pub fn display_configuration(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CPU: {}", self.cpu)?;
        writeln!(f, "RAM: {}", self.ram)?;
        writeln!(f, "Storage: {}", self.storage)?;
        write!(f, "GPU: {}", self.gpu.as_deref().unwrap_or("no GPU"))
    }
}

/// Builder for [`Computer`]
///
/// # Examples
/// ```
/// use creational_core::ComputerBuilder;
///
/// let office = ComputerBuilder::new()
///     .cpu("Intel Core 2 Duo")
///     .ram("4GB")
///     .storage("500GB HDD")
///     .build();
///
/// assert_eq!(office.gpu, None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ComputerBuilder {
    computer: Computer,
}

impl ComputerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cpu(mut self, cpu: impl Into<String>) -> Self {
        self.computer.cpu = cpu.into();
        self
    }

    pub fn ram(mut self, ram: impl Into<String>) -> Self {
        self.computer.ram = ram.into();
        self
    }

    pub fn storage(mut self, storage: impl Into<String>) -> Self {
        self.computer.storage = storage.into();
        self
    }

    pub fn gpu(mut self, gpu: impl Into<String>) -> Self {
        self.computer.gpu = Some(gpu.into());
        self
    }

    pub fn build(self) -> Computer {
        tracing::debug!(cpu = %self.computer.cpu, gpu = ?self.computer.gpu, "computer assembled");
        self.computer
    }
}
