use std::collections::BTreeMap;

use super::types::{CommerceField, CommerceRecord};

pub const COMMUNITY_REQUIRED: &str = "O ID da comunidade é obrigatório.";
pub const SELLING_UNIT_REQUIRED: &str = "O ID da unidade vendedora é obrigatório.";
pub const BUYING_UNIT_REQUIRED: &str = "O ID da unidade compradora é obrigatório.";
pub const SAME_UNIT: &str = "A unidade vendedora e compradora não podem ser a mesma.";
pub const QUANTITY_NOT_POSITIVE: &str = "A quantidade de energia deve ser maior que zero.";

/// Per-field validation messages. Every operation returns a new set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationErrorSet {
    messages: BTreeMap<CommerceField, String>,
}

impl ValidationErrorSet {
    /// Returns a set with `field` carrying `message`, replacing any earlier message
    pub fn with(&self, field: CommerceField, message: &str) -> Self {
        let mut messages = self.messages.clone();
        messages.insert(field, message.to_string());
        Self { messages }
    }

    pub fn without(&self, field: CommerceField) -> Self {
        let mut messages = self.messages.clone();
        messages.remove(&field);
        Self { messages }
    }

    pub fn get(&self, field: CommerceField) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[cfg(test)]
    pub fn fields(&self) -> Vec<CommerceField> {
        self.messages.keys().copied().collect()
    }
}

/// Recomputes every validation message for the record from scratch
pub fn validate_commerce(record: &CommerceRecord) -> ValidationErrorSet {
    let mut errors = ValidationErrorSet::default();

    if record.community_id <= 0 {
        errors = errors.with(CommerceField::CommunityId, COMMUNITY_REQUIRED);
    }

    if record.selling_unit_id <= 0 {
        errors = errors.with(CommerceField::SellingUnitId, SELLING_UNIT_REQUIRED);
    }

    if record.buying_unit_id <= 0 {
        errors = errors.with(CommerceField::BuyingUnitId, BUYING_UNIT_REQUIRED);
    }

    // Last check wins on the buying unit field
    if record.selling_unit_id == record.buying_unit_id {
        errors = errors.with(CommerceField::BuyingUnitId, SAME_UNIT);
    }

    if record.quantity <= 0.0 {
        errors = errors.with(CommerceField::Quantity, QUANTITY_NOT_POSITIVE);
    }

    errors
}
