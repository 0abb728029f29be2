//! Tests for independent concurrent minimization runs
//!
//! Every run owns its term set and trace, so runs on different threads must
//! neither interfere with each other nor depend on scheduling.

use quine_logic::{minimize_str, Minimizable, QmConfig};
use std::thread;
use std::time::Duration;

const EXPRESSIONS: [&str; 4] = [
    "xyz + x~yz + x~y + x~y~z",
    "xy + x~y",
    "ab~c + abc + ~abc",
    "pq + ~p~q",
];

#[test]
fn test_concurrent_execution() {
    let handles: Vec<_> = EXPRESSIONS
        .iter()
        .map(|&input| {
            thread::spawn(move || {
                let result = minimize_str(input).expect("Minimization failed");
                result.trace_lines()
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("Thread panicked"))
        .collect();

    // Each trace must match a sequential run of the same input
    for (input, lines) in EXPRESSIONS.iter().zip(results) {
        let sequential = minimize_str(input).unwrap().trace_lines();
        assert_eq!(lines, sequential, "trace differs for {:?}", input);
    }
}

#[test]
fn test_consistent_results() {
    let first = minimize_str("ab~c + abc + ~abc").unwrap();
    let second = minimize_str("ab~c + abc + ~abc").unwrap();

    assert_eq!(first.final_expression(), second.final_expression());
    assert_eq!(first.trace_lines(), second.trace_lines());
}

#[test]
fn test_traces_do_not_accumulate() {
    // A second request starts from a fresh trace
    let _ = minimize_str("xyz + x~yz + x~y + x~y~z").unwrap();
    let result = minimize_str("xy + xy").unwrap();

    assert_eq!(
        result.trace_lines(),
        vec!["xy", "No further reductions found.", "Final Expression: xy"]
    );
}

#[test]
fn test_stress_concurrent() {
    let config = QmConfig {
        trace: false,
        ..Default::default()
    };

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let config = config.clone();
            thread::spawn(move || {
                for j in 0..3 {
                    let input = EXPRESSIONS[(i + j) % EXPRESSIONS.len()];
                    match input.minimize_with_config(&config) {
                        Ok(result) => {
                            assert!(!result.expression().is_empty());
                        }
                        Err(e) => {
                            eprintln!("Thread {}-{} failed: {}", i, j, e);
                            panic!("Minimization failed");
                        }
                    }

                    // Small delay to create more overlap
                    thread::sleep(Duration::from_millis(5));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }
}
