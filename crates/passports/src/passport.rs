use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ecopass_core::{DomainError, DomainResult, Entity, PassportId, UserId, ValueObject};

// ─────────────────────────────────────────────────────────────────────────────
// Nested value objects
// ─────────────────────────────────────────────────────────────────────────────

/// Identifying facts for the garment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInformation {
    /// Global trade item number (barcode). Must be non-empty.
    pub gtin: String,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub model: String,
}

/// One material in the garment's composition.
///
/// Percentages need not sum to 100 across the list — blended garments are
/// routinely reported with partial compositions. Each value must lie in
/// [0,100]; the lower bound is carried by the type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialComposition {
    pub material_name: String,
    pub composition_percentage: u32,
    pub certifications: Vec<String>,
}

/// Environmental footprint figures, all optional (suppliers rarely report
/// the full set).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentImpact {
    pub carbon_footprint_kg: Option<f64>,
    pub water_usage_liters: Option<f64>,
    pub energy_kwh: Option<f64>,
    pub recycled_content_pct: Option<f64>,
    pub hazardous_substances: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Producer {
    pub name: String,
    pub address: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionSite {
    pub country: String,
    pub facility_id: String,
    pub processes: Vec<String>,
}

/// Manufacturing provenance.
///
/// `manufacturing_date` is an opaque caller-supplied string, stored
/// verbatim (upstream systems disagree on date formats).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturing {
    pub producer: Producer,
    pub production_sites: Vec<ProductionSite>,
    pub manufacturing_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repairability {
    pub difficulty: String,
    pub spare_parts_available: bool,
    pub guide_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurabilityAndCare {
    pub expected_lifetime_cycles: Option<u32>,
    pub wash_instructions: Option<String>,
    pub repairability: Option<Repairability>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakeBackProgram {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndOfLife {
    /// Recyclable share of the garment, in [0,100] when present.
    pub recyclability_pct: Option<f64>,
    pub disassembly_url: Option<String>,
    pub take_back_programs: Vec<TakeBackProgram>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyChainStage {
    pub stage: String,
    pub supplier: String,
    pub country: String,
    pub certificate: String,
}

/// Ordered supply chain, raw material first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyChain {
    pub stages: Vec<SupplyChainStage>,
}

/// Record-keeping facts assigned by the directory on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub created_at: DateTime<Utc>,
    pub last_updated_at: DateTime<Utc>,
    pub data_owner: String,
}

impl ValueObject for ProductInformation {}
impl ValueObject for MaterialComposition {}
impl ValueObject for EnvironmentImpact {}
impl ValueObject for Producer {}
impl ValueObject for ProductionSite {}
impl ValueObject for Manufacturing {}
impl ValueObject for Repairability {}
impl ValueObject for DurabilityAndCare {}
impl ValueObject for TakeBackProgram {}
impl ValueObject for EndOfLife {}
impl ValueObject for SupplyChainStage {}
impl ValueObject for SupplyChain {}
impl ValueObject for Metadata {}

// ─────────────────────────────────────────────────────────────────────────────
// Draft + passport
// ─────────────────────────────────────────────────────────────────────────────

/// Caller-supplied passport content, before the directory assigns identity.
///
/// Nested sections arrive fully formed and are stored verbatim: no
/// defaulting, no normalization. A section the caller omits stays absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassportDraft {
    pub product_information: ProductInformation,
    pub materials: Vec<MaterialComposition>,
    pub environment_impact: Option<EnvironmentImpact>,
    pub manufacturing: Option<Manufacturing>,
    pub durability_and_care: Option<DurabilityAndCare>,
    pub end_of_life: Option<EndOfLife>,
    pub supply_chain: Option<SupplyChain>,
    pub data_owner: String,
    pub image: Option<Vec<u8>>,
}

/// Digital product passport for one garment.
///
/// Identity (`id`) and `metadata` timestamps are assigned once, at
/// creation, by the user directory; no component mutates them afterwards.
/// The passport is owned exclusively by the user that created it and is
/// removed only when that owner is removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPassport {
    pub id: PassportId,
    pub owner: UserId,
    pub product_information: ProductInformation,
    pub materials: Vec<MaterialComposition>,
    pub environment_impact: Option<EnvironmentImpact>,
    pub manufacturing: Option<Manufacturing>,
    pub durability_and_care: Option<DurabilityAndCare>,
    pub end_of_life: Option<EndOfLife>,
    pub supply_chain: Option<SupplyChain>,
    pub metadata: Metadata,
    pub image: Option<Vec<u8>>,
}

impl Entity for ProductPassport {
    type Id = PassportId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PassportDraft {
    /// Check the draft against the passport invariants.
    ///
    /// Fails with [`DomainError::Validation`] when the GTIN is empty, any
    /// material composition percentage exceeds 100, or a present
    /// recyclability percentage falls outside [0,100].
    pub fn validate(&self) -> DomainResult<()> {
        if self.product_information.gtin.trim().is_empty() {
            return Err(DomainError::validation("gtin cannot be empty"));
        }

        for material in &self.materials {
            if material.composition_percentage > 100 {
                return Err(DomainError::validation(format!(
                    "composition percentage for '{}' must lie in [0,100], got {}",
                    material.material_name, material.composition_percentage
                )));
            }
        }

        if let Some(end_of_life) = &self.end_of_life {
            if let Some(pct) = end_of_life.recyclability_pct {
                if !(0.0..=100.0).contains(&pct) {
                    return Err(DomainError::validation(format!(
                        "recyclability percentage must lie in [0,100], got {pct}"
                    )));
                }
            }
        }

        Ok(())
    }
}

impl ProductPassport {
    /// Materialize a validated draft into a passport.
    ///
    /// The directory supplies the freshly assigned `id`, the owning user
    /// and the creation instant; everything else is carried over verbatim.
    pub fn from_draft(
        id: PassportId,
        owner: UserId,
        draft: PassportDraft,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner,
            product_information: draft.product_information,
            materials: draft.materials,
            environment_impact: draft.environment_impact,
            manufacturing: draft.manufacturing,
            durability_and_care: draft.durability_and_care,
            end_of_life: draft.end_of_life,
            supply_chain: draft.supply_chain,
            metadata: Metadata {
                created_at,
                last_updated_at: created_at,
                data_owner: draft.data_owner,
            },
            image: draft.image,
        }
    }

    /// Re-check a stored passport against the same invariants as its draft.
    pub fn validate(&self) -> DomainResult<()> {
        let draft = PassportDraft {
            product_information: self.product_information.clone(),
            materials: self.materials.clone(),
            environment_impact: self.environment_impact.clone(),
            manufacturing: self.manufacturing.clone(),
            durability_and_care: self.durability_and_care.clone(),
            end_of_life: self.end_of_life.clone(),
            supply_chain: self.supply_chain.clone(),
            data_owner: self.metadata.data_owner.clone(),
            image: self.image.clone(),
        };
        draft.validate()
    }

    pub fn gtin(&self) -> &str {
        &self.product_information.gtin
    }

    pub fn category(&self) -> &str {
        &self.product_information.category
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
