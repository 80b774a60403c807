use super::*;
use std::thread;

#[test]
fn step_budget_allows_exactly_n_steps() {
    let mut clock = SliceClock::start(TickBudget::Steps(3));
    let mut done = 0;
    while !clock.exhausted() {
        clock.spend();
        done += 1;
    }
    assert_eq!(done, 3);
}

#[test]
fn zero_budget_still_allows_one_step() {
    let mut clock = SliceClock::start(TickBudget::Steps(0));
    assert!(!clock.exhausted());
    clock.spend();
    assert!(clock.exhausted());
}

#[test]
fn time_budget_expires() {
    let mut clock = SliceClock::start(TickBudget::Millis(5)).with_check_interval(1);
    clock.spend();
    assert!(!clock.exhausted());
    thread::sleep(Duration::from_millis(10));
    clock.spend();
    assert!(clock.exhausted());
    // stays expired
    assert!(clock.exhausted());
}

#[test]
fn budget_durations() {
    assert_eq!(TickBudget::Steps(10).duration(), None);
    assert_eq!(
        TickBudget::Millis(20).duration(),
        Some(Duration::from_millis(20))
    );
}

#[test]
fn time_budget_stops_on_the_first_late_step() {
    let mut clock = SliceClock::start(TickBudget::Millis(5));
    clock.spend();
    thread::sleep(Duration::from_millis(10));
    clock.spend();
    // two steps in, not a multiple of any batch size
    assert!(clock.exhausted());
    assert_eq!(clock.steps(), 2);
}
