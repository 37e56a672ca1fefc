//! Form state as a single reducer.
//!
//! `Phase` replaces separate "button clickable" / "submit succeeded" flags.
//! Each submission carries a sequence number and a resolution is applied only
//! when it belongs to the latest submission, so a slow earlier response can
//! never overwrite a newer one.

use std::rc::Rc;
use yew::functional::Reducible;

use crate::error::CalcError;
use crate::models::SuccessData;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Pending {
        seq: u64,
    },
    Succeeded,
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub phase: Phase,
    /// Last successful result. Kept across later failures.
    pub latest: Option<Rc<SuccessData>>,
    /// Highest sequence number seen so far.
    pub last_seq: u64,
}

pub enum FormAction {
    Submit { seq: u64 },
    Resolve {
        seq: u64,
        outcome: Result<SuccessData, CalcError>,
    },
}

impl FormState {
    /// The Calculate button is enabled unless a request is in flight.
    pub fn is_button_clickable(&self) -> bool {
        !matches!(self.phase, Phase::Pending { .. })
    }

    pub fn is_submit_success(&self) -> bool {
        self.latest.is_some()
    }

    pub fn one_rep_max(&self) -> Option<f64> {
        self.latest.as_ref().map(|r| r.one_rep_max)
    }

    /// Whether a resolution tagged `seq` would be applied.
    pub fn accepts(&self, seq: u64) -> bool {
        matches!(self.phase, Phase::Pending { seq: pending } if pending == seq)
    }

    pub fn apply(&self, action: FormAction) -> Option<FormState> {
        match action {
            FormAction::Submit { seq } => {
                if seq <= self.last_seq {
                    return None;
                }
                Some(FormState {
                    phase: Phase::Pending { seq },
                    latest: self.latest.clone(),
                    last_seq: seq,
                })
            }
            FormAction::Resolve { seq, outcome } => {
                if !self.accepts(seq) {
                    return None;
                }
                Some(match outcome {
                    Ok(data) => FormState {
                        phase: Phase::Succeeded,
                        latest: Some(Rc::new(data)),
                        last_seq: self.last_seq,
                    },
                    Err(e) => FormState {
                        phase: Phase::Failed {
                            message: e.user_message(),
                        },
                        latest: self.latest.clone(),
                        last_seq: self.last_seq,
                    },
                })
            }
        }
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PercentageWeight;

    fn result(max: f64) -> SuccessData {
        SuccessData {
            one_rep_max: max,
            weights: vec![PercentageWeight {
                percentage: 90.0,
                weight: max * 0.9,
            }],
        }
    }

    fn reduce(state: Rc<FormState>, action: FormAction) -> Rc<FormState> {
        state.reduce(action)
    }

    #[test]
    fn initial_state_shows_nothing() {
        let state = FormState::default();
        assert!(state.is_button_clickable());
        assert!(!state.is_submit_success());
        assert_eq!(state.one_rep_max(), None);
    }

    #[test]
    fn button_disabled_only_while_pending() {
        let s = reduce(Rc::default(), FormAction::Submit { seq: 1 });
        assert!(!s.is_button_clickable());

        let s = reduce(
            s,
            FormAction::Resolve {
                seq: 1,
                outcome: Ok(result(100.0)),
            },
        );
        assert!(s.is_button_clickable());
        assert!(s.is_submit_success());
        assert_eq!(s.one_rep_max(), Some(100.0));
    }

    #[test]
    fn failure_reenables_and_keeps_previous_result() {
        let s = reduce(Rc::default(), FormAction::Submit { seq: 1 });
        let s = reduce(
            s,
            FormAction::Resolve {
                seq: 1,
                outcome: Ok(result(100.0)),
            },
        );
        let s = reduce(s, FormAction::Submit { seq: 2 });
        let s = reduce(
            s,
            FormAction::Resolve {
                seq: 2,
                outcome: Err(CalcError::Service {
                    status: 422,
                    message: "weight must be positive".into(),
                }),
            },
        );

        assert!(s.is_button_clickable());
        assert_eq!(
            s.phase,
            Phase::Failed {
                message: "weight must be positive".into()
            }
        );
        assert_eq!(s.one_rep_max(), Some(100.0));
    }

    #[test]
    fn failure_before_any_success_keeps_placeholders() {
        let s = reduce(Rc::default(), FormAction::Submit { seq: 1 });
        let s = reduce(
            s,
            FormAction::Resolve {
                seq: 1,
                outcome: Err(CalcError::Network("offline".into())),
            },
        );
        assert!(!s.is_submit_success());
        assert!(s.is_button_clickable());
    }

    #[test]
    fn stale_response_is_ignored() {
        let s = reduce(Rc::default(), FormAction::Submit { seq: 1 });
        let s = reduce(s, FormAction::Submit { seq: 2 });
        let before = s.clone();

        let s = reduce(
            s,
            FormAction::Resolve {
                seq: 1,
                outcome: Ok(result(80.0)),
            },
        );
        assert!(Rc::ptr_eq(&before, &s));
        assert!(!s.accepts(1));

        let s = reduce(
            s,
            FormAction::Resolve {
                seq: 2,
                outcome: Ok(result(120.0)),
            },
        );
        assert_eq!(s.one_rep_max(), Some(120.0));
    }

    #[test]
    fn duplicate_resolution_is_ignored() {
        let s = reduce(Rc::default(), FormAction::Submit { seq: 1 });
        let s = reduce(
            s,
            FormAction::Resolve {
                seq: 1,
                outcome: Ok(result(100.0)),
            },
        );
        let s = reduce(
            s,
            FormAction::Resolve {
                seq: 1,
                outcome: Ok(result(50.0)),
            },
        );
        assert_eq!(s.one_rep_max(), Some(100.0));
    }

    #[test]
    fn old_sequence_numbers_cannot_resubmit() {
        let s = reduce(Rc::default(), FormAction::Submit { seq: 3 });
        let s = reduce(s, FormAction::Submit { seq: 2 });
        assert_eq!(s.phase, Phase::Pending { seq: 3 });
    }

    #[test]
    fn repeated_submission_shows_same_result() {
        let mut s: Rc<FormState> = Rc::default();
        for seq in 1..=2 {
            s = reduce(s, FormAction::Submit { seq });
            s = reduce(
                s,
                FormAction::Resolve {
                    seq,
                    outcome: Ok(result(100.0)),
                },
            );
            assert_eq!(s.latest.as_deref(), Some(&result(100.0)));
        }
    }
}
