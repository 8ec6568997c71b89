// Core types for commerce registration - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::form_validation::ValidationErrorSet;
use crate::utils::serialization::{
    format_quantity, parse_identifier, parse_quantity, serialize_quantity,
};

/// One energy trade between a selling unit and a buying unit of a community.
/// Field names on the wire follow the registry backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CommerceRecord {
    #[serde(rename = "idComunidade")]
    pub community_id: i64,
    #[serde(rename = "unidadeVedendoraId")]
    pub selling_unit_id: i64,
    #[serde(rename = "unidadeCompradoraId")]
    pub buying_unit_id: i64,
    #[serde(rename = "quantidade", serialize_with = "serialize_quantity")]
    pub quantity: f64,
}

impl CommerceRecord {
    pub fn new(community_id: i64, selling_unit_id: i64, buying_unit_id: i64, quantity: f64) -> Self {
        Self {
            community_id,
            selling_unit_id,
            buying_unit_id,
            quantity,
        }
    }

    /// Returns a copy of the record with one field replaced by the parsed raw input
    pub fn with_field(mut self, field: CommerceField, raw: &str) -> Self {
        match field {
            CommerceField::CommunityId => self.community_id = parse_identifier(raw),
            CommerceField::SellingUnitId => self.selling_unit_id = parse_identifier(raw),
            CommerceField::BuyingUnitId => self.buying_unit_id = parse_identifier(raw),
            CommerceField::Quantity => self.quantity = parse_quantity(raw),
        }
        self
    }

    /// Current value of a field as shown in its input
    pub fn display_value(&self, field: CommerceField) -> String {
        match field {
            CommerceField::CommunityId => self.community_id.to_string(),
            CommerceField::SellingUnitId => self.selling_unit_id.to_string(),
            CommerceField::BuyingUnitId => self.buying_unit_id.to_string(),
            CommerceField::Quantity => format_quantity(self.quantity),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum CommerceField {
    CommunityId,
    SellingUnitId,
    BuyingUnitId,
    Quantity,
}

impl CommerceField {
    /// Render order of the form inputs
    pub const ALL: [CommerceField; 4] = [
        CommerceField::CommunityId,
        CommerceField::SellingUnitId,
        CommerceField::BuyingUnitId,
        CommerceField::Quantity,
    ];

    /// JSON key and input `name` attribute
    pub fn wire_name(&self) -> &'static str {
        match self {
            CommerceField::CommunityId => "idComunidade",
            CommerceField::SellingUnitId => "unidadeVedendoraId",
            CommerceField::BuyingUnitId => "unidadeCompradoraId",
            CommerceField::Quantity => "quantidade",
        }
    }

    pub fn input_id(&self) -> &'static str {
        match self {
            CommerceField::CommunityId => "idCom",
            CommerceField::SellingUnitId => "idVendedora",
            CommerceField::BuyingUnitId => "idCompradora",
            CommerceField::Quantity => "idQtd",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CommerceField::CommunityId => "ID Comunidade",
            CommerceField::SellingUnitId => "ID da Unidade Vendedora",
            CommerceField::BuyingUnitId => "ID da Unidade Compradora",
            CommerceField::Quantity => "Quantidade Energia",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            CommerceField::CommunityId => "Digite o ID da sua comunidade",
            CommerceField::SellingUnitId => "Digite o ID da unidade vendedora",
            CommerceField::BuyingUnitId => "Digite o ID da unidade compradora",
            CommerceField::Quantity => "Digite a quantidade que será trocada",
        }
    }
}

/// User-visible result of a submission attempt
#[derive(Clone, Debug, PartialEq)]
pub enum Acknowledgment {
    Registered,
    Rejected(String),
    ServerUnavailable,
}

impl Acknowledgment {
    pub fn message(&self) -> String {
        match self {
            Acknowledgment::Registered => "Comércio cadastrado com sucesso!".to_string(),
            Acknowledgment::Rejected(reason) => {
                format!("Erro ao cadastrar comércio: {}", reason)
            }
            Acknowledgment::ServerUnavailable => {
                "Erro no servidor. Tente novamente mais tarde.".to_string()
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Acknowledgment::Registered)
    }
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum CommerceAction {
    UpdateField(CommerceField, String),
    SetErrors(ValidationErrorSet),
    SubmissionStarted,
    SubmissionFinished,
    Acknowledge(Acknowledgment),
    Reset,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommerceFormState {
    pub record: CommerceRecord,
    pub errors: ValidationErrorSet,
    // Text as typed; fields never edited since the last reset show the record value
    pub raw_inputs: BTreeMap<CommerceField, String>,
    // Requests in flight; submissions are not serialized against each other
    pub pending_submissions: u32,
    pub last_acknowledgment: Option<Acknowledgment>,
}

impl CommerceFormState {
    /// Reduces the state based on an action
    #[cfg(test)]
    pub fn reduce(mut self, action: CommerceAction) -> Self {
        self.reduce_in_place(action);
        self
    }

    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: CommerceAction) {
        match action {
            CommerceAction::UpdateField(field, raw) => {
                self.record = self.record.clone().with_field(field, &raw);
                self.raw_inputs.insert(field, raw);
                self.errors = self.errors.without(field);
            }
            CommerceAction::SetErrors(errors) => {
                self.errors = errors;
            }
            CommerceAction::SubmissionStarted => {
                self.pending_submissions += 1;
                self.last_acknowledgment = None;
            }
            CommerceAction::SubmissionFinished => {
                self.pending_submissions = self.pending_submissions.saturating_sub(1);
            }
            CommerceAction::Acknowledge(ack) => {
                self.last_acknowledgment = Some(ack);
            }
            CommerceAction::Reset => {
                self.record = CommerceRecord::default();
                self.raw_inputs.clear();
                self.errors = ValidationErrorSet::default();
            }
        }
    }

    /// Value bound to a field's input: what the user typed, not the parsed number
    pub fn display_value(&self, field: CommerceField) -> String {
        match self.raw_inputs.get(&field) {
            Some(raw) => raw.clone(),
            None => self.record.display_value(field),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.pending_submissions > 0
    }

    pub fn error_for(&self, field: CommerceField) -> Option<String> {
        self.errors.get(field).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_backend_field_names() {
        let record = CommerceRecord::new(1, 2, 3, 10.0);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"idComunidade":1,"unidadeVedendoraId":2,"unidadeCompradoraId":3,"quantidade":10}"#
        );
    }

    #[test]
    fn test_record_deserializes_integer_quantity() {
        let record: CommerceRecord = serde_json::from_str(
            r#"{"idComunidade":4,"unidadeVedendoraId":5,"unidadeCompradoraId":6,"quantidade":12}"#,
        )
        .unwrap();
        assert_eq!(record, CommerceRecord::new(4, 5, 6, 12.0));
    }

    #[test]
    fn test_new_state_is_zeroed() {
        let state = CommerceFormState::default();
        assert_eq!(state.record, CommerceRecord::new(0, 0, 0, 0.0));
        assert!(state.errors.is_empty());
        assert!(!state.is_submitting());
        assert_eq!(state.last_acknowledgment, None);
    }

    #[test]
    fn test_update_field_overwrites_value_and_clears_its_error() {
        let errors = ValidationErrorSet::default()
            .with(CommerceField::CommunityId, "missing")
            .with(CommerceField::Quantity, "bad");
        let state = CommerceFormState::default()
            .reduce(CommerceAction::SetErrors(errors))
            .reduce(CommerceAction::UpdateField(
                CommerceField::CommunityId,
                "9".to_string(),
            ));

        assert_eq!(state.record.community_id, 9);
        assert_eq!(state.error_for(CommerceField::CommunityId), None);
        // Other fields keep their errors until the next validation pass
        assert_eq!(
            state.error_for(CommerceField::Quantity),
            Some("bad".to_string())
        );
    }

    #[test]
    fn test_update_field_parses_each_field() {
        let state = CommerceFormState::default()
            .reduce(CommerceAction::UpdateField(CommerceField::SellingUnitId, "2".into()))
            .reduce(CommerceAction::UpdateField(CommerceField::BuyingUnitId, "3".into()))
            .reduce(CommerceAction::UpdateField(CommerceField::Quantity, "7.5".into()));

        assert_eq!(state.record, CommerceRecord::new(0, 2, 3, 7.5));

        let state = state.reduce(CommerceAction::UpdateField(
            CommerceField::BuyingUnitId,
            "".into(),
        ));
        assert_eq!(state.record.buying_unit_id, 0);
    }

    #[test]
    fn test_input_keeps_typed_text_while_record_holds_parsed_value() {
        let state = CommerceFormState::default()
            .reduce(CommerceAction::UpdateField(CommerceField::Quantity, "2".into()))
            .reduce(CommerceAction::UpdateField(CommerceField::Quantity, "".into()));
        assert_eq!(state.display_value(CommerceField::Quantity), "");
        assert_eq!(state.record.quantity, 0.0);

        let state = state
            .reduce(CommerceAction::UpdateField(CommerceField::CommunityId, "-".into()))
            .reduce(CommerceAction::UpdateField(CommerceField::SellingUnitId, "2.".into()));
        assert_eq!(state.display_value(CommerceField::CommunityId), "-");
        assert_eq!(state.record.community_id, 0);
        assert_eq!(state.display_value(CommerceField::SellingUnitId), "2.");

        let state = state.reduce(CommerceAction::UpdateField(
            CommerceField::Quantity,
            "-1.5".into(),
        ));
        assert_eq!(state.display_value(CommerceField::Quantity), "-1.5");
        assert_eq!(state.record.quantity, -1.5);
    }

    #[test]
    fn test_untouched_fields_display_record_value() {
        let state = CommerceFormState::default();
        for field in CommerceField::ALL {
            assert_eq!(state.display_value(field), "0");
        }
    }

    #[test]
    fn test_reset_zeroes_record_and_errors() {
        let state = CommerceFormState::default()
            .reduce(CommerceAction::UpdateField(CommerceField::CommunityId, "1".into()))
            .reduce(CommerceAction::SetErrors(
                ValidationErrorSet::default().with(CommerceField::Quantity, "bad"),
            ))
            .reduce(CommerceAction::Reset);

        assert_eq!(state.record, CommerceRecord::default());
        assert!(state.errors.is_empty());
        assert_eq!(state.display_value(CommerceField::CommunityId), "0");
    }

    #[test]
    fn test_pending_submissions_track_overlapping_requests() {
        let state = CommerceFormState::default()
            .reduce(CommerceAction::SubmissionStarted)
            .reduce(CommerceAction::SubmissionStarted)
            .reduce(CommerceAction::SubmissionFinished);
        assert!(state.is_submitting());

        let state = state
            .reduce(CommerceAction::SubmissionFinished)
            .reduce(CommerceAction::SubmissionFinished);
        assert!(!state.is_submitting());
        assert_eq!(state.pending_submissions, 0);
    }

    #[test]
    fn test_acknowledgment_messages() {
        assert_eq!(
            Acknowledgment::Registered.message(),
            "Comércio cadastrado com sucesso!"
        );
        assert_eq!(
            Acknowledgment::Rejected("duplicate entry".into()).message(),
            "Erro ao cadastrar comércio: duplicate entry"
        );
        assert_eq!(
            Acknowledgment::ServerUnavailable.message(),
            "Erro no servidor. Tente novamente mais tarde."
        );
        assert!(Acknowledgment::Registered.is_success());
        assert!(!Acknowledgment::ServerUnavailable.is_success());
    }

    #[test]
    fn test_display_values() {
        let record = CommerceRecord::new(1, 2, 3, 2.5);
        assert_eq!(record.display_value(CommerceField::CommunityId), "1");
        assert_eq!(record.display_value(CommerceField::Quantity), "2.5");
        assert_eq!(
            CommerceRecord::default().display_value(CommerceField::Quantity),
            "0"
        );
    }
}
