//! End-to-end crossover scenarios checked against manual trailing-average
//! arithmetic.

use crossline_indicators::{
    ComponentSpec, Indicator, IndicatorKind, MovingAverageCrossover, Sma,
};

fn sma_spec(window: usize) -> ComponentSpec {
    ComponentSpec::with_window(IndicatorKind::SimpleMovingAverage, window)
}

/// The inflecting series from the acceptance scenario: rises, dips, rises
/// higher, falls away.
fn inflecting_series() -> Vec<f64> {
    vec![1.0, 2.0, 3.0, 2.0, 1.0, 2.0, 3.0, 4.0, 5.0, 4.0, 3.0, 2.0, 1.0]
}

#[test]
fn sma_window_one_reproduces_the_raw_series() {
    let data = inflecting_series();
    let sma = Sma::new(data.clone(), 1).unwrap();
    assert_eq!(sma.to_vec(), data);
}

#[test]
fn raw_series_against_its_own_three_period_average() {
    // Component "first" is SMA(1), i.e. the raw series; "second" is SMA(3).
    // Trailing means of the second component, partial windows included:
    //   [1, 1.5, 2, 7/3, 2, 5/3, 2, 3, 4, 13/3, 4, 3, 2]
    // The raw series falls through its average at index 3, rises back
    // through it at index 5, and falls through it again at index 9. Indices
    // below max(1, 3) = 3 are forced to zero.
    let cross =
        MovingAverageCrossover::new(inflecting_series(), sma_spec(1), sma_spec(3)).unwrap();
    let expected = [
        0.0, 0.0, 0.0, 2.0, 0.0, 1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0,
    ];
    assert_eq!(cross.to_vec(), expected);
}

#[test]
fn role_swap_inverts_every_event_in_place() {
    let forward =
        MovingAverageCrossover::new(inflecting_series(), sma_spec(1), sma_spec(3)).unwrap();
    let swapped =
        MovingAverageCrossover::new(inflecting_series(), sma_spec(3), sma_spec(1)).unwrap();
    let expected: Vec<f64> = forward
        .to_vec()
        .into_iter()
        .map(|value| match value as i64 {
            1 => 2.0,
            2 => 1.0,
            _ => 0.0,
        })
        .collect();
    assert_eq!(swapped.to_vec(), expected);
}

#[test]
fn suppression_boundary_is_the_longer_window() {
    // With windows 3 and 5 the warm-up region spans indices 0..5, whatever
    // the underlying crossing arithmetic says there.
    let data = vec![
        5.0, 1.0, 5.0, 1.0, 5.0, 1.0, 5.0, 1.0, 5.0, 1.0, 5.0, 1.0,
    ];
    let cross = MovingAverageCrossover::new(data, sma_spec(3), sma_spec(5)).unwrap();
    let signal = cross.to_vec();
    assert!(signal[..5].iter().all(|&value| value == 0.0));
}

#[test]
fn identical_constructions_agree_bit_for_bit() {
    let first =
        MovingAverageCrossover::new(inflecting_series(), sma_spec(2), sma_spec(4)).unwrap();
    let second =
        MovingAverageCrossover::new(inflecting_series(), sma_spec(2), sma_spec(4)).unwrap();
    assert_eq!(first.to_array(), second.to_array());
}
