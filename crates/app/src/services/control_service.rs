//! Control service — turns a device on or off on behalf of an HTTP caller.

use tapo_bridge_domain::action::Action;
use tapo_bridge_domain::control::{ControlOutcome, ControlPayload, ControlRequest};
use tapo_bridge_domain::credentials::Credentials;
use tapo_bridge_domain::device::DeviceEntry;
use tapo_bridge_domain::error::{
    BridgeError, ConfigurationError, DeviceError, SessionError, ValidationError,
};
use tapo_bridge_domain::registry::DeviceRegistry;

use crate::ports::{DeviceConnector, DeviceSession};

/// Application service validating control requests and dispatching them to
/// devices through a [`DeviceConnector`].
///
/// The registry and the credentials are fixed at construction and only read
/// afterwards, so a single instance can serve concurrent requests.
pub struct ControlService<C> {
    registry: DeviceRegistry,
    credentials: Option<Credentials>,
    connector: C,
}

impl<C: DeviceConnector> ControlService<C> {
    /// Create a new service.
    ///
    /// `credentials` may be `None`: every control call then fails with
    /// [`ConfigurationError::MissingCredentials`] without reaching a device.
    pub fn new(registry: DeviceRegistry, credentials: Option<Credentials>, connector: C) -> Self {
        Self {
            registry,
            credentials,
            connector,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &DeviceRegistry {
        &self.registry
    }

    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    fn credentials(&self) -> Result<&Credentials, ConfigurationError> {
        self.credentials
            .as_ref()
            .ok_or(ConfigurationError::MissingCredentials)
    }

    /// Handle a raw JSON request body.
    ///
    /// Credentials are checked before the body is even parsed.
    ///
    /// # Errors
    ///
    /// See [`control`](Self::control); additionally returns
    /// [`ValidationError::MissingBody`], [`ValidationError::NotAnObject`] or
    /// [`ValidationError::MalformedBody`].
    pub async fn control_json(&self, body: &[u8]) -> Result<ControlOutcome, BridgeError> {
        self.credentials()?;
        let payload = ControlPayload::from_json(body)?;
        self.control(payload).await
    }

    /// Validate `payload`, resolve the device and apply the action.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::MissingCredentials`] when no credentials are configured
    /// - [`ValidationError::MissingFields`] when a field is absent or empty
    /// - [`ValidationError::UnknownDevice`] when the name is not registered
    /// - [`ValidationError::InvalidAction`] when the action is not `on`/`off`
    /// - [`BridgeError::Device`] when the session fails at any step
    #[tracing::instrument(skip(self, payload))]
    pub async fn control(&self, payload: ControlPayload) -> Result<ControlOutcome, BridgeError> {
        let credentials = self.credentials()?;
        let (device_name, action) = payload.require_fields()?;

        let entry = self
            .registry
            .get(&device_name)
            .ok_or_else(|| ValidationError::UnknownDevice(device_name.clone()))?;
        let action = action.parse::<Action>()?;

        let request = ControlRequest {
            device_name,
            action,
        };
        self.execute(entry, &request, credentials).await
    }

    async fn execute(
        &self,
        entry: &DeviceEntry,
        request: &ControlRequest,
        credentials: &Credentials,
    ) -> Result<ControlOutcome, BridgeError> {
        match self.open_and_apply(entry, request.action, credentials).await {
            Ok(()) => {
                tracing::info!(
                    device = %entry.name,
                    address = %entry.address,
                    family = %entry.family,
                    action = %request.action,
                    "device command applied"
                );
                Ok(ControlOutcome::new(entry, request.action))
            }
            Err(source) => {
                let err = DeviceError {
                    device_name: entry.name.clone(),
                    source,
                };
                tracing::error!(
                    device = %entry.name,
                    address = %entry.address,
                    action = %request.action,
                    error = %err,
                    "device command failed"
                );
                Err(err.into())
            }
        }
    }

    async fn open_and_apply(
        &self,
        entry: &DeviceEntry,
        action: Action,
        credentials: &Credentials,
    ) -> Result<(), SessionError> {
        let session = self.connector.connect(entry, credentials).await?;
        match action {
            Action::On => session.turn_on().await,
            Action::Off => session.turn_off().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct StubConnector {
        calls: Arc<Mutex<Vec<String>>>,
        fail_login: bool,
        fail_command: bool,
    }

    struct StubSession {
        calls: Arc<Mutex<Vec<String>>>,
        fail_command: bool,
    }

    impl StubSession {
        fn record(&self, action: Action) -> Result<(), SessionError> {
            self.calls.lock().unwrap().push(format!("turn_{action}"));
            if self.fail_command {
                return Err(SessionError::command(action, "device rejected command"));
            }
            Ok(())
        }
    }

    impl DeviceSession for StubSession {
        fn turn_on(&self) -> impl Future<Output = Result<(), SessionError>> + Send {
            let result = self.record(Action::On);
            async { result }
        }

        fn turn_off(&self) -> impl Future<Output = Result<(), SessionError>> + Send {
            let result = self.record(Action::Off);
            async { result }
        }
    }

    impl DeviceConnector for StubConnector {
        type Session = StubSession;

        fn connect(
            &self,
            device: &DeviceEntry,
            _credentials: &Credentials,
        ) -> impl Future<Output = Result<StubSession, SessionError>> + Send {
            self.calls
                .lock()
                .unwrap()
                .push(format!("connect {}", device.address));
            let result = if self.fail_login {
                Err(SessionError::login("connection timed out"))
            } else {
                Ok(StubSession {
                    calls: Arc::clone(&self.calls),
                    fail_command: self.fail_command,
                })
            };
            async { result }
        }
    }

    fn registry() -> DeviceRegistry {
        DeviceRegistry::from_rows([
            ("lampe_salon", "192.168.1.22", "L530"),
            ("prise_piece_de_vie", "192.168.1.24", "P110"),
        ])
        .unwrap()
    }

    fn credentials() -> Option<Credentials> {
        Credentials::from_parts(Some("me@example.com".into()), Some("secret".into()))
    }

    fn payload(device_name: &str, action: &str) -> ControlPayload {
        ControlPayload {
            device_name: Some(device_name.to_string()),
            action: Some(action.to_string()),
        }
    }

    fn make_service(
        connector: StubConnector,
    ) -> (ControlService<StubConnector>, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::clone(&connector.calls);
        (ControlService::new(registry(), credentials(), connector), calls)
    }

    #[tokio::test]
    async fn should_turn_device_on_when_request_is_valid() {
        let (service, calls) = make_service(StubConnector::default());

        let outcome = service.control(payload("lampe_salon", "ON")).await.unwrap();

        assert_eq!(outcome.device_name, "lampe_salon");
        assert_eq!(outcome.address.to_string(), "192.168.1.22");
        assert_eq!(outcome.action, Action::On);
        assert_eq!(
            *calls.lock().unwrap(),
            vec!["connect 192.168.1.22".to_string(), "turn_on".to_string()]
        );
    }

    #[tokio::test]
    async fn should_turn_device_off_when_action_is_off() {
        let (service, calls) = make_service(StubConnector::default());

        let outcome = service
            .control(payload("prise_piece_de_vie", "off"))
            .await
            .unwrap();

        assert_eq!(outcome.action, Action::Off);
        assert_eq!(calls.lock().unwrap().last().unwrap(), "turn_off");
    }

    #[tokio::test]
    async fn should_reject_missing_fields_without_adapter_call() {
        let (service, calls) = make_service(StubConnector::default());

        let result = service
            .control(ControlPayload {
                device_name: None,
                action: Some("on".into()),
            })
            .await;

        assert!(matches!(
            result,
            Err(BridgeError::Validation(ValidationError::MissingFields))
        ));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_unknown_device_without_adapter_call() {
        let (service, calls) = make_service(StubConnector::default());

        let result = service.control(payload("unknown_device", "on")).await;

        assert!(matches!(
            result,
            Err(BridgeError::Validation(ValidationError::UnknownDevice(ref name))) if name == "unknown_device"
        ));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_invalid_action_for_known_device() {
        let (service, calls) = make_service(StubConnector::default());

        let result = service.control(payload("lampe_salon", "toggle")).await;

        assert!(matches!(
            result,
            Err(BridgeError::Validation(ValidationError::InvalidAction(_)))
        ));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_fail_without_credentials_before_any_adapter_call() {
        let connector = StubConnector::default();
        let calls = Arc::clone(&connector.calls);
        let service = ControlService::new(registry(), None, connector);

        let result = service.control(payload("lampe_salon", "on")).await;

        assert!(matches!(
            result,
            Err(BridgeError::Configuration(
                ConfigurationError::MissingCredentials
            ))
        ));
        assert!(calls.lock().unwrap().is_empty());
        assert!(!service.has_credentials());
    }

    #[tokio::test]
    async fn should_reject_array_body_before_any_adapter_call() {
        let (service, calls) = make_service(StubConnector::default());

        let result = service.control_json(br#"["lampe_salon","on"]"#).await;

        assert!(matches!(
            result,
            Err(BridgeError::Validation(ValidationError::NotAnObject))
        ));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_check_credentials_before_parsing_body() {
        let service = ControlService::new(registry(), None, StubConnector::default());

        let result = service.control_json(b"").await;

        assert!(matches!(result, Err(BridgeError::Configuration(_))));
    }

    #[tokio::test]
    async fn should_reject_empty_body() {
        let (service, calls) = make_service(StubConnector::default());

        let result = service.control_json(b"").await;

        assert!(matches!(
            result,
            Err(BridgeError::Validation(ValidationError::MissingBody))
        ));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_accept_json_body() {
        let (service, _calls) = make_service(StubConnector::default());

        let outcome = service
            .control_json(br#"{"device_name":"lampe_salon","action":"Off"}"#)
            .await
            .unwrap();

        assert_eq!(
            outcome.message(),
            "lampe_salon (192.168.1.22) set to off successfully."
        );
    }

    #[tokio::test]
    async fn should_wrap_login_failure_with_device_name() {
        let (service, calls) = make_service(StubConnector {
            fail_login: true,
            ..StubConnector::default()
        });

        let err = service
            .control(payload("lampe_salon", "on"))
            .await
            .unwrap_err();

        assert!(matches!(err, BridgeError::Device(_)));
        let text = err.to_string();
        assert!(text.contains("lampe_salon"));
        assert!(text.contains("connection timed out"));
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_wrap_command_failure_with_device_name() {
        let (service, calls) = make_service(StubConnector {
            fail_command: true,
            ..StubConnector::default()
        });

        let err = service
            .control(payload("lampe_salon", "off"))
            .await
            .unwrap_err();

        let text = err.to_string();
        assert!(text.contains("lampe_salon"));
        assert!(text.contains("device rejected command"));
        // single attempt, no retry
        assert_eq!(calls.lock().unwrap().len(), 2);
    }

    #[test]
    fn should_expose_registry() {
        let (service, _calls) = make_service(StubConnector::default());
        assert_eq!(service.registry().len(), 2);
        assert!(service.has_credentials());
    }
}
