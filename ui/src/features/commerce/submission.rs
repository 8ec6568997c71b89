//! Validate-then-POST workflow for the commerce registration form
//!
//! The workflow only talks to the outside world through two seams:
//! [`CommerceSubmitter`] for the network call and [`RegistrationEffects`]
//! for state updates, acknowledgments and navigation. The browser form wires
//! these to a Dioxus signal, `window.alert` and the router.

use tracing::{error, info};

use super::form_validation::validate_commerce;
use super::types::{Acknowledgment, CommerceAction, CommerceRecord};
use crate::services::client::CommerceSubmitter;

/// Side effects the submission workflow needs from its host
pub trait RegistrationEffects {
    /// Apply an action to the form state
    fn dispatch(&self, action: CommerceAction);

    /// Show an acknowledgment to the user
    fn acknowledge(&self, acknowledgment: &Acknowledgment);

    /// Leave the form for the commerce listing
    fn navigate_to_listing(&self);
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionOutcome {
    /// Validation failed, nothing was sent
    Invalid,
    Registered,
    /// The registry answered with a non-2xx status
    Rejected(String),
    /// The request could not complete
    Unreachable,
}

/// Run one submission for a snapshot of the record.
///
/// Errors are recomputed and replaced first; an invalid record never reaches
/// the network. Exactly one request is attempted otherwise.
pub async fn submit_commerce<S, E>(
    record: &CommerceRecord,
    submitter: &S,
    effects: &E,
) -> SubmissionOutcome
where
    S: CommerceSubmitter + ?Sized,
    E: RegistrationEffects + ?Sized,
{
    let errors = validate_commerce(record);
    let valid = errors.is_empty();
    effects.dispatch(CommerceAction::SetErrors(errors));

    if !valid {
        info!("Commerce form has validation errors - not submitting");
        return SubmissionOutcome::Invalid;
    }

    effects.dispatch(CommerceAction::SubmissionStarted);

    let outcome = match submitter.submit(record).await {
        Ok(()) => {
            let ack = Acknowledgment::Registered;
            effects.acknowledge(&ack);
            effects.dispatch(CommerceAction::Acknowledge(ack));
            effects.dispatch(CommerceAction::Reset);
            effects.navigate_to_listing();
            SubmissionOutcome::Registered
        }
        Err(e) => match e.server_message() {
            Some(message) => {
                let message = message.to_string();
                let ack = Acknowledgment::Rejected(message.clone());
                effects.acknowledge(&ack);
                effects.dispatch(CommerceAction::Acknowledge(ack));
                SubmissionOutcome::Rejected(message)
            }
            None => {
                error!("Falha no cadastro de comércio: {}", e);
                let ack = Acknowledgment::ServerUnavailable;
                effects.acknowledge(&ack);
                effects.dispatch(CommerceAction::Acknowledge(ack));
                SubmissionOutcome::Unreachable
            }
        },
    };

    effects.dispatch(CommerceAction::SubmissionFinished);
    outcome
}
