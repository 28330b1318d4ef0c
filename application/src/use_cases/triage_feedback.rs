//! Triage Feedback use case.
//!
//! Coordinates a single triage: call the configured classifier once, bound
//! the call with a hard timeout, normalize whatever came back, and stamp
//! the result with the provider name and elapsed time.
//!
//! Failure policy:
//! - A transport, auth, or timeout failure is reported as
//!   [`CoordinatorError::UpstreamUnavailable`]. There is no retry and no
//!   fabricated result.
//! - An answer with an unexpected shape is not a failure; the
//!   [`ResponseNormalizer`] resolves it to safe defaults.

use crate::config::TriageParams;
use crate::ports::classifier::{FeedbackClassifier, ProviderError};
use crate::ports::progress::{NoProgress, TriageProgressNotifier};
use crate::ports::triage_recorder::{NoTriageRecorder, TriageRecord, TriageRecorder};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use triage_domain::util::preview;
use triage_domain::{FeedbackSubmission, ResponseNormalizer, TriagePhase, TriageResult};

/// Errors surfaced to the calling layer.
#[derive(Error, Debug)]
pub enum CoordinatorError {
    #[error("Provider '{provider}' unavailable: {source}")]
    UpstreamUnavailable {
        provider: String,
        #[source]
        source: ProviderError,
    },

    #[error("Triage cancelled")]
    Cancelled,
}

impl CoordinatorError {
    /// Generic message safe to show to end users.
    pub fn user_message(&self) -> &'static str {
        match self {
            CoordinatorError::UpstreamUnavailable { .. } => {
                "Feedback analysis failed, please try again."
            }
            CoordinatorError::Cancelled => "Feedback analysis was cancelled.",
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, CoordinatorError::Cancelled)
    }
}

/// Use case for triaging one feedback submission.
///
/// Holds only immutable startup state, so a single instance can serve any
/// number of concurrent submissions.
pub struct TriageFeedbackUseCase {
    classifier: Arc<dyn FeedbackClassifier>,
    params: TriageParams,
    recorder: Arc<dyn TriageRecorder>,
    progress: Arc<dyn TriageProgressNotifier>,
}

impl Clone for TriageFeedbackUseCase {
    fn clone(&self) -> Self {
        Self {
            classifier: self.classifier.clone(),
            params: self.params.clone(),
            recorder: self.recorder.clone(),
            progress: self.progress.clone(),
        }
    }
}

impl TriageFeedbackUseCase {
    pub fn new(classifier: Arc<dyn FeedbackClassifier>, params: TriageParams) -> Self {
        Self {
            classifier,
            params,
            recorder: Arc::new(NoTriageRecorder),
            progress: Arc::new(NoProgress),
        }
    }

    /// Record every completed triage through the given recorder.
    pub fn with_recorder(mut self, recorder: Arc<dyn TriageRecorder>) -> Self {
        self.recorder = recorder;
        self
    }

    /// Report phase transitions to the given notifier.
    pub fn with_progress(mut self, progress: Arc<dyn TriageProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    pub fn provider_name(&self) -> &str {
        self.classifier.provider_name()
    }

    /// Triage a submission.
    pub async fn execute(
        &self,
        submission: &FeedbackSubmission,
    ) -> Result<TriageResult, CoordinatorError> {
        self.run(submission, None).await
    }

    /// Triage a submission, abandoning the provider call if `cancel` fires.
    ///
    /// The in-flight request future is dropped on cancellation; no partial
    /// result is returned and nothing is recorded.
    pub async fn execute_with_cancel(
        &self,
        submission: &FeedbackSubmission,
        cancel: &CancellationToken,
    ) -> Result<TriageResult, CoordinatorError> {
        self.run(submission, Some(cancel)).await
    }

    async fn run(
        &self,
        submission: &FeedbackSubmission,
        cancel: Option<&CancellationToken>,
    ) -> Result<TriageResult, CoordinatorError> {
        let provider = self.classifier.provider_name().to_string();
        let manual_category = submission.manual_category();

        info!(
            provider = %provider,
            manual_category = ?manual_category.map(|c| c.as_str()),
            "Triaging feedback: {}",
            preview(submission.text(), 80)
        );

        let mut phase = TriagePhase::Idle;
        self.transition(&mut phase, TriagePhase::InFlight, &provider);

        let started = Instant::now();
        let call = tokio::time::timeout(
            self.params.timeout,
            self.classifier.classify(submission.text(), manual_category),
        );

        let outcome = match cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        warn!(provider = %provider, "Triage cancelled while provider call was in flight");
                        self.transition(&mut phase, TriagePhase::Failed, &provider);
                        return Err(CoordinatorError::Cancelled);
                    }
                    outcome = call => outcome,
                }
            }
            None => call.await,
        };

        let raw = match outcome {
            Ok(Ok(raw)) => raw,
            Ok(Err(e)) => {
                return Err(self.fail(&mut phase, provider, e));
            }
            Err(_) => {
                let e = ProviderError::Timeout(self.params.timeout);
                return Err(self.fail(&mut phase, provider, e));
            }
        };

        debug!(
            provider = %provider,
            elapsed_ms = raw.elapsed.as_millis() as u64,
            "Raw provider output: {}",
            preview(&raw.text, 200)
        );

        let seconds = started.elapsed().as_secs_f64();
        let result = ResponseNormalizer::normalize(&raw.text, manual_category)
            .stamped(provider.clone(), seconds);

        self.transition(&mut phase, TriagePhase::Completed, &provider);
        info!(
            provider = %provider,
            category = %result.category,
            urgency = result.urgency_score.value(),
            processing_time = seconds,
            "Feedback triaged"
        );

        self.recorder
            .record(&TriageRecord::new(submission.text(), result.clone()));

        Ok(result)
    }

    fn fail(
        &self,
        phase: &mut TriagePhase,
        provider: String,
        source: ProviderError,
    ) -> CoordinatorError {
        warn!(provider = %provider, kind = ?source.kind(), "Provider call failed: {}", source);
        self.transition(phase, TriagePhase::Failed, &provider);
        CoordinatorError::UpstreamUnavailable { provider, source }
    }

    fn transition(&self, phase: &mut TriagePhase, next: TriagePhase, provider: &str) {
        debug_assert!(phase.can_transition_to(next), "{phase} -> {next}");
        *phase = next;
        self.progress.on_phase_change(next, provider);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::classifier::{ProviderErrorKind, RawOutput};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use triage_domain::{Category, SubmissionValidator, UrgencyScore};

    // ==================== Mocks ====================

    enum Script {
        Reply(&'static str),
        Fail(ProviderError),
        Hang,
    }

    struct ScriptedClassifier {
        script: Script,
        calls: AtomicUsize,
        seen_category: Mutex<Option<Option<Category>>>,
    }

    impl ScriptedClassifier {
        fn new(script: Script) -> Arc<Self> {
            Arc::new(Self {
                script,
                calls: AtomicUsize::new(0),
                seen_category: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl FeedbackClassifier for ScriptedClassifier {
        fn provider_name(&self) -> &str {
            "scripted"
        }

        async fn classify(
            &self,
            _text: &str,
            manual_category: Option<Category>,
        ) -> Result<RawOutput, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.seen_category.lock().unwrap() = Some(manual_category);
            match &self.script {
                Script::Reply(text) => Ok(RawOutput::new(*text, Duration::from_millis(5))),
                Script::Fail(e) => Err(e.clone()),
                Script::Hang => {
                    std::future::pending::<()>().await;
                    unreachable!()
                }
            }
        }
    }

    #[derive(Default)]
    struct CollectingRecorder {
        records: Mutex<Vec<TriageRecord>>,
    }

    impl TriageRecorder for CollectingRecorder {
        fn record(&self, record: &TriageRecord) {
            self.records.lock().unwrap().push(record.clone());
        }
    }

    #[derive(Default)]
    struct PhaseLog {
        phases: Mutex<Vec<TriagePhase>>,
    }

    impl TriageProgressNotifier for PhaseLog {
        fn on_phase_change(&self, phase: TriagePhase, _provider: &str) {
            self.phases.lock().unwrap().push(phase);
        }
    }

    // ==================== Helpers ====================

    fn submission(text: &str, category: Option<&str>) -> FeedbackSubmission {
        SubmissionValidator::default()
            .validate(text, category)
            .unwrap()
    }

    fn use_case(classifier: Arc<ScriptedClassifier>) -> TriageFeedbackUseCase {
        TriageFeedbackUseCase::new(classifier, TriageParams::default())
    }

    // ==================== Success path ====================

    #[tokio::test]
    async fn test_bug_report_example() {
        let classifier =
            ScriptedClassifier::new(Script::Reply(r#"{"category": "Bug Report", "urgency": "High"}"#));
        let result = use_case(classifier)
            .execute(&submission("The app crashes when I try to upload files", None))
            .await
            .unwrap();

        assert_eq!(result.category, Category::BugReport);
        assert_eq!(result.urgency_score, UrgencyScore::HIGH);
        assert_eq!(result.provider_name.as_deref(), Some("scripted"));
        assert!(result.processing_time.is_some_and(|t| t >= 0.0));
    }

    #[tokio::test]
    async fn test_manual_category_wins_and_is_forwarded() {
        let classifier = ScriptedClassifier::new(Script::Reply(
            r#"{"category": "Bug Report", "urgency_score": 2}"#,
        ));
        let result = use_case(classifier.clone())
            .execute(&submission("Please add CSV export to reports", Some("Feature Request")))
            .await
            .unwrap();

        assert_eq!(result.category, Category::FeatureRequest);
        assert_eq!(
            *classifier.seen_category.lock().unwrap(),
            Some(Some(Category::FeatureRequest))
        );
    }

    #[tokio::test]
    async fn test_malformed_output_is_defaulted_not_failed() {
        let classifier = ScriptedClassifier::new(Script::Reply("I am not sure what this is"));
        let result = use_case(classifier)
            .execute(&submission("Something happened yesterday", None))
            .await
            .unwrap();

        assert_eq!(result.category, Category::GeneralInquiry);
        assert_eq!(result.urgency_score, UrgencyScore::MEDIUM);
    }

    #[tokio::test]
    async fn test_completed_triage_is_recorded() {
        let recorder = Arc::new(CollectingRecorder::default());
        let classifier = ScriptedClassifier::new(Script::Reply(
            r#"{"category": "Complaint", "urgency_score": 3}"#,
        ));
        use_case(classifier)
            .with_recorder(recorder.clone())
            .execute(&submission("  Support   never answered me ", None))
            .await
            .unwrap();

        let records = recorder.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].feedback_text, "Support never answered me");
        assert_eq!(records[0].result.category, Category::Complaint);
    }

    #[tokio::test]
    async fn test_phases_idle_inflight_completed() {
        let phases = Arc::new(PhaseLog::default());
        let classifier = ScriptedClassifier::new(Script::Reply("{}"));
        use_case(classifier)
            .with_progress(phases.clone())
            .execute(&submission("Where is the settings page?", None))
            .await
            .unwrap();

        assert_eq!(
            *phases.phases.lock().unwrap(),
            vec![TriagePhase::InFlight, TriagePhase::Completed]
        );
    }

    // ==================== Failure path ====================

    #[tokio::test]
    async fn test_provider_error_maps_to_upstream_unavailable_without_retry() {
        let recorder = Arc::new(CollectingRecorder::default());
        let phases = Arc::new(PhaseLog::default());
        let classifier =
            ScriptedClassifier::new(Script::Fail(ProviderError::RateLimited("429".into())));
        let err = use_case(classifier.clone())
            .with_recorder(recorder.clone())
            .with_progress(phases.clone())
            .execute(&submission("The dashboard will not load", None))
            .await
            .unwrap_err();

        match &err {
            CoordinatorError::UpstreamUnavailable { provider, source } => {
                assert_eq!(provider, "scripted");
                assert_eq!(source.kind(), ProviderErrorKind::RateLimited);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.user_message(), "Feedback analysis failed, please try again.");
        assert_eq!(classifier.calls.load(Ordering::SeqCst), 1);
        assert!(recorder.records.lock().unwrap().is_empty());
        assert_eq!(
            *phases.phases.lock().unwrap(),
            vec![TriagePhase::InFlight, TriagePhase::Failed]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_hanging_provider_times_out_within_bound() {
        let classifier = ScriptedClassifier::new(Script::Hang);
        let params = TriageParams::default().with_timeout(Duration::from_secs(2));
        let use_case = TriageFeedbackUseCase::new(classifier, params);

        let started = tokio::time::Instant::now();
        let err = use_case
            .execute(&submission("The export button does nothing", None))
            .await
            .unwrap_err();

        assert!(started.elapsed() <= Duration::from_secs(3));
        match err {
            CoordinatorError::UpstreamUnavailable { source, .. } => {
                assert_eq!(source, ProviderError::Timeout(Duration::from_secs(2)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_cancellation_abandons_call() {
        let recorder = Arc::new(CollectingRecorder::default());
        let classifier = ScriptedClassifier::new(Script::Hang);
        let use_case = use_case(classifier).with_recorder(recorder.clone());

        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            canceller.cancel();
        });

        let err = use_case
            .execute_with_cancel(&submission("Login page is blank on Safari", None), &token)
            .await
            .unwrap_err();

        assert!(err.is_cancelled());
        assert!(recorder.records.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_already_cancelled_token_short_circuits() {
        let classifier = ScriptedClassifier::new(Script::Reply("{}"));
        let token = CancellationToken::new();
        token.cancel();

        let err = use_case(classifier)
            .execute_with_cancel(&submission("Love the new release, thanks", None), &token)
            .await
            .unwrap_err();
        assert!(err.is_cancelled());
    }
}
