//! `ecopass-passports` — the digital product passport model.
//!
//! A passport is the structured sustainability record for one garment:
//! material, environmental, manufacturing, durability, end-of-life and
//! supply-chain facts. Pure data plus validation; every other crate in the
//! workspace consumes it.

pub mod passport;

pub use passport::{
    DurabilityAndCare, EndOfLife, EnvironmentImpact, Manufacturing, MaterialComposition, Metadata,
    PassportDraft, Producer, ProductInformation, ProductPassport, ProductionSite, Repairability,
    SupplyChain, SupplyChainStage, TakeBackProgram,
};
