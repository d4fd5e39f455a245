use pcap_timing::{Timer, TimerError};
use std::thread;
use std::time::{Duration, Instant};

#[test]
fn test_sleep_is_measured() {
    let mut timer = Timer::new();
    timer.start().unwrap();
    thread::sleep(Duration::from_millis(10));
    timer.stop().unwrap();
    assert!(!timer.is_running());
    let elapsed = timer.elapsed().as_secs_f64();
    // sleep may overshoot, never undershoot
    assert!(elapsed >= 0.010, "elapsed: {}", elapsed);
    assert!(elapsed < 0.5, "elapsed: {}", elapsed);
}

#[test]
fn test_two_intervals_are_summed() {
    let mut timer = Timer::new();
    let outer = Instant::now();

    timer.start().unwrap();
    thread::sleep(Duration::from_millis(5));
    timer.stop().unwrap();
    let first = timer.elapsed();
    assert!(first >= Duration::from_millis(5));

    thread::sleep(Duration::from_millis(20));

    timer.start().unwrap();
    thread::sleep(Duration::from_millis(5));
    timer.stop().unwrap();

    let total = timer.elapsed();
    assert!(total >= first + Duration::from_millis(5));
    // the gap between the two intervals is excluded
    assert!(total <= outer.elapsed() - Duration::from_millis(20));
}

#[test]
fn test_stop_new_timer() {
    let mut timer = Timer::default();
    assert_eq!(timer.stop(), Err(TimerError::NotRunning));
    assert_eq!(timer.elapsed().as_secs_f64(), 0.0);
    assert!(!timer.is_running());
}

#[test]
fn test_scoped_timer() {
    let mut timer = Timer::new();
    let value = timer
        .time(|| {
            thread::sleep(Duration::from_millis(2));
            42
        })
        .unwrap();
    assert_eq!(value, 42);
    assert!(timer.elapsed() >= Duration::from_millis(2));
    assert!(!timer.is_running());
}
