//! Validation rules for [`GameConfig`] using `Validation`.
//!
//! Every rule runs; the result carries all violations, not just the
//! first one found.

use super::violations::ConfigViolation;
use super::GameConfig;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

fn ensure(ok: bool, violation: ConfigViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

/// Run every rule against `config`.
pub fn validate(config: &GameConfig) -> Check {
    let playback = &config.playback;

    let checks = vec![
        ensure(playback.min_signal_ms > 0, ConfigViolation::ZeroMinimumSignal),
        ensure(
            playback.min_signal_ms <= playback.base_signal_ms,
            ConfigViolation::MinimumAboveBase {
                min_ms: playback.min_signal_ms,
                base_ms: playback.base_signal_ms,
            },
        ),
        ensure(
            config.rounds.press_ack_ms > 0,
            ConfigViolation::ZeroPressAcknowledgement,
        ),
        ensure(config.history_limit > 0, ConfigViolation::ZeroHistoryLimit),
        ensure(
            !config.best_score_key.trim().is_empty(),
            ConfigViolation::EmptyBestScoreKey,
        ),
    ];

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&GameConfig::default()).is_success());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let mut config = GameConfig::default();
        config.playback.min_signal_ms = 0;
        config.rounds.press_ack_ms = 0;
        config.history_limit = 0;
        config.best_score_key = "  ".to_string();

        match validate(&config) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 4);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::ZeroMinimumSignal)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::ZeroPressAcknowledgement)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::ZeroHistoryLimit)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::EmptyBestScoreKey)));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn minimum_above_base_is_rejected() {
        let mut config = GameConfig::default();
        config.playback.min_signal_ms = 900;

        let result = validate(&config);
        assert!(result.is_failure());
        if let Validation::Failure(errors) = result {
            assert!(errors.iter().any(|e| *e
                == ConfigViolation::MinimumAboveBase {
                    min_ms: 900,
                    base_ms: 700
                }));
        }
    }
}
