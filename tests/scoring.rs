//! Verification scoring against authored challenges

use vibequest_backend::challenges::{get_contextual_verification, get_verification_for_step, ChallengeContext};
use vibequest_backend::curriculum::{generate_curriculum, step_by_id};
use vibequest_backend::domain::*;
use vibequest_backend::scoring::{score_verification, PASS_THRESHOLD};

#[test]
fn test_react_bug_is_caught_by_naming_the_mutation() {
    let ctx = ChallengeContext::new(None, Selection::default());
    let v = get_contextual_verification(VerificationType::SpotTheBug, &ctx);
    assert_eq!(v.bug_location.as_ref().map(|b| b.line), Some(5));

    let r = score_verification(&v, "The mutation happens with items.push, should copy the array", false);
    assert!(r.passed);
    assert_eq!(r.score, 100);

    let r = score_verification(&v, "I honestly could not see anything wrong", false);
    assert_eq!(r.score, 20);
    assert!(!r.passed);
}

#[test]
fn test_authored_list_bug_on_flutter() {
    let sel = Selection::new(PlayerClass::Architect, Platform::Mobile, Stack::FlutterFirebase);
    let steps = generate_curriculum(sel);
    let ctx = ChallengeContext::new(step_by_id(&steps, "skeleton-1"), sel);
    let v = get_verification_for_step(&ctx).unwrap();
    assert_eq!(v.mode, VerificationMode::SpotTheBug);
    assert_eq!(v.bug_location.as_ref().map(|b| b.line), Some(7));

    let r = score_verification(&v, "Each TodoItem is missing a key, it needs a ValueKey prop", true);
    assert!(r.score >= PASS_THRESHOLD);
    assert_eq!(r.bonus_awarded, None);
}

#[test]
fn test_filter_prediction_is_all_or_nothing() {
    let sel = Selection::default();
    let steps = generate_curriculum(sel);
    let ctx = ChallengeContext::new(step_by_id(&steps, "brain-3"), sel);
    let v = get_verification_for_step(&ctx).unwrap();
    let expected = v.expected_output.clone().unwrap();
    assert_eq!(score_verification(&v, &expected, false).score, 100);
    for other in v.output_options.iter().filter(|o| **o != expected) {
        assert_eq!(score_verification(&v, other, false).score, 0);
    }
}
