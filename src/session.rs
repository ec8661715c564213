//! Interaction Controller: gatekeeps sends and owns the consultation.

use crate::config;
use crate::dispatch::{run_consultation, AnalysisApi, DispatchResult};
use crate::models::Message;
use crate::sanitize::clean_input;
use crate::transcript::Transcript;

/// Authentication boundary. The session needs only a yes/no answer and
/// a way to surface the sign-in affordance; it never waits on it.
pub trait AuthGate {
    fn is_authenticated(&self) -> bool;

    /// Surface the sign-in prompt. Fire-and-forget.
    fn prompt_sign_in(&self);
}

/// Auth gate backed by the environment: signed in when the session
/// token variable is set and non-empty.
pub struct EnvAuthGate;

impl AuthGate for EnvAuthGate {
    fn is_authenticated(&self) -> bool {
        std::env::var(config::SESSION_TOKEN_ENV)
            .map(|v| !v.is_empty())
            .unwrap_or(false)
    }

    fn prompt_sign_in(&self) {
        tracing::info!(
            variable = config::SESSION_TOKEN_ENV,
            "sign-in required before starting a consultation"
        );
    }
}

/// What a single send attempt produced. Exactly one per call; the last
/// three variants are the mutually exclusive network outcomes.
#[derive(Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Not signed in. The sign-in prompt was surfaced; the transcript
    /// and the network were never touched.
    SignInRequired,
    /// Empty input after cleaning, or a send already in flight.
    Ignored,
    /// Structured analysis message appended.
    Analyzed,
    /// Plain fallback reply appended.
    FallbackReply,
    /// Both endpoints failed; carries the notice to surface. The user's
    /// own message stays in the transcript.
    Failed(String),
}

/// One consultation session: transcript, sending state, and auth gate.
pub struct ConsultationSession<A: AnalysisApi, G: AuthGate> {
    api: A,
    auth: G,
    transcript: Transcript,
    sending: bool,
}

impl<A: AnalysisApi, G: AuthGate> ConsultationSession<A, G> {
    pub fn new(api: A, auth: G) -> Self {
        Self {
            api,
            auth,
            transcript: Transcript::new(),
            sending: false,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Whether a send is in flight. Drives the typing indicator.
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Reset to a fresh greeting. Does not abort an in-flight send; the
    /// transcript's generation gate discards its late result instead.
    pub fn new_consultation(&mut self) {
        self.transcript.reset();
    }

    /// Send one symptom description through the two-tier protocol.
    ///
    /// Guards run in order: auth gate first, then the empty-input and
    /// re-entrancy checks. The user's message is appended before the
    /// network call so it stays visible whatever happens next, and the
    /// sending flag is cleared on every path out.
    pub fn send(&mut self, input: &str) -> SendOutcome {
        if !self.auth.is_authenticated() {
            self.auth.prompt_sign_in();
            return SendOutcome::SignInRequired;
        }

        let text = clean_input(input);
        if text.is_empty() || self.sending {
            return SendOutcome::Ignored;
        }

        self.sending = true;
        let generation = self.transcript.generation();
        self.transcript.append(Message::user(text.clone()));

        let outcome = match run_consultation(&self.api, &text) {
            DispatchResult::Analyzed(message) => {
                self.transcript.append_if_current(generation, message);
                SendOutcome::Analyzed
            }
            DispatchResult::PlainReply(message) => {
                self.transcript.append_if_current(generation, message);
                SendOutcome::FallbackReply
            }
            DispatchResult::Unavailable(notice) => SendOutcome::Failed(notice),
        };

        self.sending = false;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::api::types::{AnalysisPayload, AnalysisRequest, ChatReply, ChatRequest};
    use crate::api::ApiError;
    use crate::models::MessageRole;

    struct MockApi {
        analyze_result: fn() -> Result<AnalysisPayload, ApiError>,
        chat_result: fn() -> Result<ChatReply, ApiError>,
        calls: Cell<usize>,
    }

    impl MockApi {
        fn new(
            analyze_result: fn() -> Result<AnalysisPayload, ApiError>,
            chat_result: fn() -> Result<ChatReply, ApiError>,
        ) -> Self {
            Self {
                analyze_result,
                chat_result,
                calls: Cell::new(0),
            }
        }
    }

    impl AnalysisApi for MockApi {
        fn analyze(&self, _request: &AnalysisRequest<'_>) -> Result<AnalysisPayload, ApiError> {
            self.calls.set(self.calls.get() + 1);
            (self.analyze_result)()
        }

        fn chat(&self, _request: &ChatRequest<'_>) -> Result<ChatReply, ApiError> {
            self.calls.set(self.calls.get() + 1);
            (self.chat_result)()
        }
    }

    struct StaticAuthGate {
        signed_in: bool,
        prompted: Cell<bool>,
    }

    impl StaticAuthGate {
        fn signed_in() -> Self {
            Self {
                signed_in: true,
                prompted: Cell::new(false),
            }
        }

        fn signed_out() -> Self {
            Self {
                signed_in: false,
                prompted: Cell::new(false),
            }
        }
    }

    impl AuthGate for StaticAuthGate {
        fn is_authenticated(&self) -> bool {
            self.signed_in
        }

        fn prompt_sign_in(&self) {
            self.prompted.set(true);
        }
    }

    fn structured_payload() -> Result<AnalysisPayload, ApiError> {
        Ok(serde_json::from_str(
            r#"{"understanding": "Got it",
                "likely_conditions": ["Migraine", "Dehydration"]}"#,
        )
        .unwrap())
    }

    fn server_error() -> Result<AnalysisPayload, ApiError> {
        Err(ApiError::Status {
            status: 500,
            body: String::new(),
        })
    }

    fn chat_ok() -> Result<ChatReply, ApiError> {
        Ok(ChatReply {
            response: "Try resting and hydrating.".to_string(),
        })
    }

    fn chat_down() -> Result<ChatReply, ApiError> {
        Err(ApiError::Connection("http://localhost:3000".to_string()))
    }

    #[test]
    fn successful_send_appends_user_then_assistant() {
        let mut session =
            ConsultationSession::new(MockApi::new(structured_payload, chat_ok), StaticAuthGate::signed_in());

        let outcome = session.send("  I have a headache and nausea  ");
        assert_eq!(outcome, SendOutcome::Analyzed);

        let messages = session.transcript().messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, MessageRole::User);
        assert_eq!(messages[1].content, "I have a headache and nausea");
        assert_eq!(messages[2].role, MessageRole::Assistant);
        assert!(messages[2].has_annotations());
        assert!(!session.is_sending());
    }

    #[test]
    fn fallback_reply_is_content_only() {
        let mut session =
            ConsultationSession::new(MockApi::new(server_error, chat_ok), StaticAuthGate::signed_in());

        let outcome = session.send("I have a headache and nausea");
        assert_eq!(outcome, SendOutcome::FallbackReply);

        let reply = session.transcript().messages().last().unwrap();
        assert_eq!(reply.content, "Try resting and hydrating.");
        assert!(!reply.has_annotations());
    }

    #[test]
    fn double_failure_keeps_the_user_message_visible() {
        let mut session =
            ConsultationSession::new(MockApi::new(server_error, chat_down), StaticAuthGate::signed_in());

        let outcome = session.send("I have a headache and nausea");
        assert_eq!(
            outcome,
            SendOutcome::Failed(config::ANALYSIS_ERROR_NOTICE.to_string())
        );

        // Greeting + user message, no assistant reply.
        let messages = session.transcript().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].role, MessageRole::User);
        assert!(!session.is_sending());
    }

    #[test]
    fn unauthenticated_send_touches_nothing() {
        let api = MockApi::new(structured_payload, chat_ok);
        let auth = StaticAuthGate::signed_out();
        let mut session = ConsultationSession::new(api, auth);

        let outcome = session.send("I have a headache");
        assert_eq!(outcome, SendOutcome::SignInRequired);
        assert_eq!(session.transcript().len(), 1);
        assert!(session.auth.prompted.get());
        assert_eq!(session.api.calls.get(), 0);
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut session =
            ConsultationSession::new(MockApi::new(structured_payload, chat_ok), StaticAuthGate::signed_in());

        assert_eq!(session.send("   "), SendOutcome::Ignored);
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.api.calls.get(), 0);
    }

    #[test]
    fn new_consultation_resets_to_greeting() {
        let mut session =
            ConsultationSession::new(MockApi::new(structured_payload, chat_ok), StaticAuthGate::signed_in());

        session.send("I have a headache");
        assert!(session.transcript().len() > 1);

        session.new_consultation();
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript().generation(), 1);
    }

    #[test]
    fn outcomes_are_exclusive_per_send() {
        // One send, one outcome, one appended reply at most.
        for (analyze, chat, expected_len) in [
            (
                structured_payload as fn() -> Result<AnalysisPayload, ApiError>,
                chat_ok as fn() -> Result<ChatReply, ApiError>,
                3usize,
            ),
            (server_error, chat_ok, 3),
            (server_error, chat_down, 2),
        ] {
            let mut session =
                ConsultationSession::new(MockApi::new(analyze, chat), StaticAuthGate::signed_in());
            session.send("I have a headache");
            assert_eq!(session.transcript().len(), expected_len);
        }
    }
}
