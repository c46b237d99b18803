//! Humanization through the public API

use std::collections::BTreeSet;

use mcrkit::mcr::humanize::{FILLER_MS, HESITATION_MS};
use mcrkit::mcr::{
    duration, humanize, CancelToken, Command, HumanizationSettings, HumanizeError, Humanizer,
};

use crate::helpers::{fixture_commands, is_subsequence, rng, typed};

fn quiet() -> HumanizationSettings {
    HumanizationSettings {
        delay_variation_pct: 0.0,
        typing_errors_pct: 0.0,
        hesitation_pauses_pct: 0.0,
        preserve_structure: true,
        excluded_keys: BTreeSet::new(),
        remove_mouse_on_upload: false,
    }
}

#[test]
fn quiet_settings_reproduce_fixture() {
    let input = fixture_commands("login.mcr");
    let out = humanize(&input, &quiet(), &mut rng(1), |_| {});
    assert_eq!(out, input);
}

#[test]
fn excluded_key_never_appears() {
    let settings = HumanizationSettings {
        excluded_keys: ["U".to_string()].into_iter().collect(),
        typing_errors_pct: 10.0,
        hesitation_pauses_pct: 50.0,
        preserve_structure: false,
        ..HumanizationSettings::default()
    };
    let input = fixture_commands("login.mcr");

    for seed in 0..20 {
        let out = humanize(&input, &settings, &mut rng(seed), |_| {});
        // Typos never pick U for the remaining letters, so U cannot sneak back in
        assert!(out.iter().filter_map(Command::key).all(|k| k != "U"));
    }
}

#[test]
fn non_keyboard_commands_survive_in_order() {
    let settings = HumanizationSettings {
        typing_errors_pct: 10.0,
        preserve_structure: false,
        ..HumanizationSettings::default()
    };
    let input = fixture_commands("login.mcr");
    let out = humanize(&input, &settings, &mut rng(9), |_| {});

    let mouse_in: Vec<Command> = input.iter().filter(|c| c.is_mouse()).cloned().collect();
    let keys_in: Vec<Command> = input.iter().filter(|c| c.is_keyboard()).cloned().collect();
    assert!(is_subsequence(&mouse_in, &out));
    assert!(is_subsequence(&keys_in, &out));
}

#[test]
fn only_delays_are_added_without_typos() {
    let settings = HumanizationSettings {
        typing_errors_pct: 0.0,
        hesitation_pauses_pct: 50.0,
        preserve_structure: false,
        ..HumanizationSettings::default()
    };
    let input = typed("humanize", 80, 40);
    let out = humanize(&input, &settings, &mut rng(21), |_| {});

    let non_delay_in: Vec<&Command> = input.iter().filter(|c| !c.is_delay()).collect();
    let non_delay_out: Vec<&Command> = out.iter().filter(|c| !c.is_delay()).collect();
    assert_eq!(non_delay_in, non_delay_out);
}

#[test]
fn filler_and_hesitation_stay_in_their_ranges() {
    let settings = HumanizationSettings {
        hesitation_pauses_pct: 50.0,
        preserve_structure: false,
        ..quiet()
    };
    let input = vec![
        Command::key_down("A"),
        Command::key_up("A"),
        Command::key_down("B"),
        Command::key_up("B"),
    ];
    let out = humanize(&input, &settings, &mut rng(4), |_| {});
    for command in out.iter().filter(|c| c.is_delay()) {
        let ms = command.delay_ms();
        assert!(
            FILLER_MS.contains(&ms) || HESITATION_MS.contains(&ms),
            "unexpected delay {}",
            ms
        );
    }
}

#[test]
fn seeded_runs_match_and_seeds_differ() {
    let settings = HumanizationSettings {
        preserve_structure: false,
        ..HumanizationSettings::default()
    };
    let input = fixture_commands("login.mcr");
    let a = humanize(&input, &settings, &mut rng(100), |_| {});
    let b = humanize(&input, &settings, &mut rng(100), |_| {});
    let c = humanize(&input, &settings, &mut rng(101), |_| {});
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn jitter_keeps_total_duration_near_original() {
    let settings = HumanizationSettings {
        delay_variation_pct: 10.0,
        ..quiet()
    };
    let input = vec![Command::delay(1_000); 500];
    let out = humanize(&input, &settings, &mut rng(8), |_| {});
    let total = duration(&out);
    assert!((450_000..=550_000).contains(&total), "total {}", total);
}

#[test]
fn progress_reaches_100_for_large_input() {
    let input = vec![Command::delay(1); 2_500];
    let mut last = 0.0;
    let mut calls = 0;
    humanize(&input, &quiet(), &mut rng(1), |p| {
        last = p;
        calls += 1;
    });
    assert_eq!(calls, 2_500);
    assert!((last - 100.0).abs() < f64::EPSILON);
}

#[test]
fn cancellation_discards_output() {
    let token = CancelToken::new();
    let settings = quiet();
    let input = vec![Command::delay(1); 3_000];
    let mut generator = rng(1);

    let handle = token.clone();
    let result = Humanizer::new(&settings, &mut generator)
        .with_cancel(token)
        .run(&input, |p| {
            if p >= 50.0 {
                handle.cancel();
            }
        });

    assert_eq!(
        result,
        Err(HumanizeError::Cancelled {
            processed: 2_000,
            total: 3_000
        })
    );
}
