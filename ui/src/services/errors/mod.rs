use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistrationError {
    /// The registry answered with a non-2xx status
    #[error("Registry rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request never completed or its body could not be read
    #[error("Network error: {message}")]
    Transport { message: String },

    #[error("Configuration error: {field} = {value}")]
    Configuration { field: String, value: String },
}

pub type RegistrationResult<T> = Result<T, RegistrationError>;

impl RegistrationError {
    /// Message the registry sent back, if it got that far
    pub fn server_message(&self) -> Option<&str> {
        match self {
            RegistrationError::Rejected { message, .. } => Some(message),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn is_transport(&self) -> bool {
        matches!(self, RegistrationError::Transport { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let rejected = RegistrationError::Rejected {
            status: 409,
            message: "duplicate entry".to_string(),
        };
        assert_eq!(
            rejected.to_string(),
            "Registry rejected request (409): duplicate entry"
        );

        let transport = RegistrationError::Transport {
            message: "connection refused".to_string(),
        };
        assert_eq!(transport.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_server_message() {
        let rejected = RegistrationError::Rejected {
            status: 400,
            message: "bad".to_string(),
        };
        assert_eq!(rejected.server_message(), Some("bad"));
        assert!(!rejected.is_transport());

        let transport = RegistrationError::Transport {
            message: "down".to_string(),
        };
        assert_eq!(transport.server_message(), None);
        assert!(transport.is_transport());
    }
}
