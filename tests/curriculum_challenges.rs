//! Curriculum generation and challenge library integration tests

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use vibequest_backend::challenges::*;
use vibequest_backend::curriculum::*;
use vibequest_backend::domain::*;

fn all_selections() -> Vec<Selection> {
    let mut out = Vec::new();
    for c in PlayerClass::ALL {
        for p in Platform::ALL {
            for s in Stack::ALL {
                out.push(Selection::new(c, p, s));
            }
        }
    }
    out
}

#[test]
fn test_unknown_keys_fall_back_to_default_curriculum() {
    let fallback = generate_curriculum_for_keys("nonexistent", "web", "react-node");
    let explicit = generate_curriculum_for_keys("vibe-surfer", "web", "react-node");
    assert_eq!(fallback, explicit);
    assert_eq!(fallback, generate_curriculum(Selection::default()));
}

#[test]
fn test_no_orphan_challenge_keys() {
    for sel in all_selections() {
        let ids: HashSet<String> = generate_curriculum(sel).into_iter().map(|s| s.id).collect();
        for key in step_challenge_ids() {
            assert!(ids.contains(key), "{key} missing from curriculum for {sel:?}");
        }
    }
}

#[test]
fn test_every_authored_step_builds_for_every_triple() {
    for sel in all_selections() {
        let steps = generate_curriculum(sel);
        for key in step_challenge_ids() {
            let ctx = ChallengeContext::new(step_by_id(&steps, key), sel);
            let decision = get_decision_for_step(&ctx).expect("authored decision");
            assert_eq!(decision.step_id, key);
            assert!(!decision.options.is_empty());
            let option_ids: HashSet<&str> = decision.options.iter().map(|o| o.id.as_str()).collect();
            assert_eq!(option_ids.len(), decision.options.len(), "duplicate option ids in {}", decision.id);

            let verification = get_verification_for_step(&ctx).expect("authored verification");
            assert!(verification.xp_reward > 0);
            if verification.mode == VerificationMode::PredictOutput {
                let expected = verification.expected_output.clone().expect("expected output");
                assert!(verification.output_options.contains(&expected));
            }
        }
    }
}

#[test]
fn test_class_shapes_optimal_option() {
    let steps_for = |class| generate_curriculum(Selection::new(class, Platform::Web, Stack::ReactNode));

    let vibe_steps = steps_for(PlayerClass::VibeSurfer);
    let vibe = ChallengeContext::new(
        step_by_id(&vibe_steps, "skeleton-0"),
        Selection::new(PlayerClass::VibeSurfer, Platform::Web, Stack::ReactNode),
    );
    let d = get_decision_for_step(&vibe).unwrap();
    assert!(d.option("ai-generate").unwrap().is_optimal);
    assert!(!d.option("from-scratch").unwrap().is_optimal);

    let arch_steps = steps_for(PlayerClass::Architect);
    let arch = ChallengeContext::new(
        step_by_id(&arch_steps, "skeleton-0"),
        Selection::new(PlayerClass::Architect, Platform::Web, Stack::ReactNode),
    );
    let d = get_decision_for_step(&arch).unwrap();
    assert!(!d.option("ai-generate").unwrap().is_optimal);
    assert!(d.option("from-scratch").unwrap().is_optimal);
}

#[test]
fn test_framework_family_drives_content() {
    let flutter = Selection::new(PlayerClass::CoPilot, Platform::Mobile, Stack::FlutterFirebase);
    let steps = generate_curriculum(flutter);
    let ctx = ChallengeContext::new(step_by_id(&steps, "brain-1"), flutter);
    let d = get_decision_for_step(&ctx).unwrap();
    assert_eq!(d.option("light-state-lib").unwrap().label, "Provider / Riverpod");

    let next = Selection::new(PlayerClass::CoPilot, Platform::Web, Stack::NextjsPrisma);
    let steps = generate_curriculum(next);
    let ctx = ChallengeContext::new(step_by_id(&steps, "brain-1"), next);
    let d = get_decision_for_step(&ctx).unwrap();
    assert_eq!(d.option("light-state-lib").unwrap().label, "Zustand / Jotai");
}

#[test]
fn test_random_decision_stays_within_available_types() {
    let sel = Selection::default();
    let steps = generate_curriculum(sel);
    let testing_step = steps.iter().find(|s| s.step_type == StepType::Testing).unwrap();
    let ctx = ChallengeContext::new(Some(testing_step), sel);
    let mut rng = StdRng::seed_from_u64(11);
    let mut seen = HashSet::new();
    for _ in 0..100 {
        let d = random_decision(&ctx, &mut rng);
        let prefix = d.id.split('-').nth(1).unwrap().to_string();
        seen.insert(prefix);
    }
    let allowed: HashSet<String> = ["scope", "ai", "testing"].iter().map(|s| s.to_string()).collect();
    assert!(seen.is_subset(&allowed), "{seen:?}");
    assert!(seen.contains("testing"));
}
