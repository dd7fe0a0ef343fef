use serde::Serialize;

use crate::domain::DomainError;

/// The three hosting product lines the portal sells plans for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanCategory {
    Minecraft,
    Discord,
    Vps,
}

impl PlanCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanCategory::Minecraft => "minecraft",
            PlanCategory::Discord => "discord",
            PlanCategory::Vps => "vps",
        }
    }

    /// Parse the wire value. Unknown categories are rejected here, before any
    /// catalog lookup or upstream call happens.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "minecraft" => Ok(PlanCategory::Minecraft),
            "discord" => Ok(PlanCategory::Discord),
            "vps" => Ok(PlanCategory::Vps),
            other => Err(DomainError::invalid_input(format!(
                "Unknown plan type: {other}"
            ))),
        }
    }
}

/// One tier of the static price/spec table. The catalog is compiled in; it is
/// marketing data, not persisted state.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlanEntry {
    pub name: &'static str,
    pub price: &'static str,
    pub ram: &'static str,
    pub cpu: &'static str,
    pub storage: &'static str,
}

static MINECRAFT_PLANS: &[PlanEntry] = &[
    PlanEntry { name: "Furious – Grass", price: "₹45", ram: "2GB", cpu: "1 vCore", storage: "12GB" },
    PlanEntry { name: "Furious – Wood", price: "₹90", ram: "4GB", cpu: "2 vCores", storage: "24GB" },
    PlanEntry { name: "Furious – Stone", price: "₹180", ram: "6GB", cpu: "3 vCores", storage: "36GB" },
    PlanEntry { name: "Furious – Coal", price: "₹300", ram: "8GB", cpu: "4 vCores", storage: "48GB" },
    PlanEntry { name: "Furious – Iron", price: "₹420", ram: "12GB", cpu: "5 vCores", storage: "60GB" },
    PlanEntry { name: "Furious – Diamond", price: "₹600", ram: "16GB", cpu: "6 vCores", storage: "72GB" },
    PlanEntry { name: "Furious – Netherite", price: "₹900", ram: "24GB", cpu: "7 vCores", storage: "96GB" },
];

static DISCORD_PLANS: &[PlanEntry] = &[
    PlanEntry { name: "Starter", price: "₹10", ram: "256MB", cpu: "50%", storage: "512MB" },
    PlanEntry { name: "Basic", price: "₹45", ram: "512MB", cpu: "75%", storage: "1024MB" },
    PlanEntry { name: "Standard", price: "₹90", ram: "1024MB", cpu: "100%", storage: "2048MB" },
    PlanEntry { name: "Advanced", price: "₹170", ram: "2048MB", cpu: "150%", storage: "4096MB" },
    PlanEntry { name: "Developer", price: "₹260", ram: "4096MB", cpu: "200%", storage: "8192MB" },
];

static VPS_PLANS: &[PlanEntry] = &[
    PlanEntry { name: "Intel 16GB", price: "₹629", ram: "16GB", cpu: "6 Cores", storage: "100GB" },
    PlanEntry { name: "Intel 32GB", price: "₹1199", ram: "32GB", cpu: "12 Cores", storage: "200GB" },
    PlanEntry { name: "Intel 48GB", price: "₹1699", ram: "48GB", cpu: "18 Cores", storage: "300GB" },
    PlanEntry { name: "Intel 64GB", price: "₹2299", ram: "64GB", cpu: "26 Cores", storage: "400GB" },
];

/// The catalog slice for a category.
pub fn plan_catalog(category: PlanCategory) -> &'static [PlanEntry] {
    match category {
        PlanCategory::Minecraft => MINECRAFT_PLANS,
        PlanCategory::Discord => DISCORD_PLANS,
        PlanCategory::Vps => VPS_PLANS,
    }
}
