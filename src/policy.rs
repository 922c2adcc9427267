//! Password policy evaluator - strength score, band and rule checklist.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::rules::{PasswordRule, RuleChecklist};

/// Points awarded per satisfied rule of the strength subset.
pub const POINTS_PER_RULE: u8 = 25;

/// Debounce applied by [`evaluate_tx`] before evaluating a keystroke.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("Invalid strength score {0}: must be a multiple of 25 between 0 and 100")]
    OutOfRange(u8),
}

/// Numeric strength score, always a multiple of 25 in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct StrengthScore(u8);

impl TryFrom<u8> for StrengthScore {
    type Error = ScoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 100 || value % POINTS_PER_RULE != 0 {
            return Err(ScoreError::OutOfRange(value));
        }
        Ok(Self(value))
    }
}

impl StrengthScore {
    /// Builds the score from the number of satisfied strength rules.
    ///
    /// # Arguments
    /// * `hits` - Number of strength-subset rules that passed (capped at 4)
    ///
    /// # Returns
    /// `25 * hits`.
    pub fn from_hits(hits: usize) -> Self {
        let hits = hits.min(PasswordRule::STRENGTH_SUBSET.len()) as u8;
        Self(hits * POINTS_PER_RULE)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn band(self) -> StrengthBand {
        StrengthBand::from_score(self.0)
    }
}

/// Qualitative strength band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthBand {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthBand {
    /// Upper bounds are inclusive: 25 is still `Weak`.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=25 => StrengthBand::Weak,
            26..=50 => StrengthBand::Fair,
            51..=75 => StrengthBand::Good,
            _ => StrengthBand::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthBand::Weak => "Weak",
            StrengthBand::Fair => "Fair",
            StrengthBand::Good => "Good",
            StrengthBand::Strong => "Strong",
        }
    }
}

impl std::fmt::Display for StrengthBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of evaluating a candidate password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyResult {
    pub score: StrengthScore,
    pub band: StrengthBand,
    pub rules: RuleChecklist,
}

impl PolicyResult {
    pub fn passed(&self, rule: PasswordRule) -> bool {
        self.rules.passed(rule)
    }

    /// True when every displayed requirement is met.
    pub fn meets_requirements(&self) -> bool {
        self.rules.all_passed()
    }
}

/// Evaluates a candidate password against the policy.
///
/// # Arguments
/// * `password` - The candidate password
///
/// # Returns
/// A `PolicyResult` with the score, its band and the pass/fail state of
/// every displayed rule. Total: the empty password scores 0 with every
/// rule failing.
pub fn evaluate(password: &SecretString) -> PolicyResult {
    let rules = RuleChecklist::evaluate(password);
    let score = StrengthScore::from_hits(rules.strength_hits());
    let band = score.band();

    #[cfg(feature = "tracing")]
    tracing::debug!("password evaluated: score={} band={}", score.value(), band);

    PolicyResult { score, band, rules }
}

/// Debounced evaluation for per-keystroke use.
///
/// Waits [`DEBOUNCE`], then sends the result. If `token` is cancelled first
/// (a newer keystroke superseded this one) nothing is sent.
///
/// # Arguments
/// * `password` - The candidate password
/// * `token` - Cancelled by the caller when a newer keystroke arrives
/// * `tx` - Channel receiving the `PolicyResult`
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PolicyResult>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("password evaluation superseded");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let result = evaluate(password);

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password policy result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_sends_after_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let pwd = SecretString::new("TestPass123!".to_string().into());

        evaluate_tx(&pwd, token, tx).await;

        let result = rx.recv().await.expect("Should receive result");
        assert_eq!(result.score.value(), 100);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_cancelled_sends_nothing() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();
        let pwd = SecretString::new("TestPass123!".to_string().into());

        evaluate_tx(&pwd, token, tx).await;

        // Sender was dropped without sending.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_cancelled_during_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let keystroke = token.clone();
        let pwd = SecretString::new("TestPass123!".to_string().into());

        let handle = tokio::spawn(async move {
            evaluate_tx(&pwd, keystroke, tx).await;
        });

        tokio::task::yield_now().await;
        tokio::time::advance(std::time::Duration::from_millis(100)).await;
        // A newer keystroke supersedes this one mid-debounce.
        token.cancel();

        handle.await.expect("evaluation task");
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_evaluate_tx_closed_receiver_does_not_panic() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let token = CancellationToken::new();
        let pwd = SecretString::new("x".to_string().into());

        evaluate_tx(&pwd, token, tx).await;
    }
}
