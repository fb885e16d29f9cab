//! Payback period on nominal (undiscounted) cumulative net flow

/// Fractional number of elapsed years until cumulative net flow is non-negative.
///
/// Interpolates linearly inside the year where the running total crosses
/// zero. Returns `Some(0.0)` when year zero alone is already non-negative and
/// `None` if the running total never recovers.
pub fn calculate_payback(net_flows: &[f64]) -> Option<f64> {
    let mut cumulative = 0.0;

    for (t, &net) in net_flows.iter().enumerate() {
        let prev = cumulative;
        cumulative += net;

        if t == 0 {
            if cumulative >= 0.0 {
                return Some(0.0);
            }
        } else if cumulative >= 0.0 && prev < 0.0 {
            let fraction = -prev / (cumulative - prev);
            return Some((t - 1) as f64 + fraction);
        }
    }

    None
}

/// Running sum of net flows
pub fn cumulative_flows(net_flows: &[f64]) -> Vec<f64> {
    net_flows
        .iter()
        .scan(0.0, |running, &net| {
            *running += net;
            Some(*running)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_immediate_payback() {
        assert_eq!(calculate_payback(&[50.0]), Some(0.0));
        assert_eq!(calculate_payback(&[0.0, -10.0]), Some(0.0));
    }

    #[test]
    fn test_interpolated_payback() {
        let payback = calculate_payback(&[-100.0, 40.0, 40.0, 40.0]).unwrap();
        assert_relative_eq!(payback, 2.5);
    }

    #[test]
    fn test_payback_on_exact_zero() {
        // Cumulative hits exactly zero at t=2 -> fraction of 1.0
        let payback = calculate_payback(&[-100.0, 50.0, 50.0]).unwrap();
        assert_relative_eq!(payback, 2.0);
    }

    #[test]
    fn test_never_recovers() {
        assert_eq!(calculate_payback(&[-100.0, 10.0, 10.0]), None);
        assert_eq!(calculate_payback(&[]), None);
    }

    #[test]
    fn test_first_crossing_wins() {
        // Recovers in year 1, dips again, recovers again
        let payback = calculate_payback(&[-10.0, 20.0, -50.0, 100.0]).unwrap();
        assert_relative_eq!(payback, 0.5);
    }

    #[test]
    fn test_cumulative_flows() {
        let cumulative = cumulative_flows(&[-100.0, 40.0, 40.0, 40.0]);
        assert_eq!(cumulative, vec![-100.0, -60.0, -20.0, 20.0]);
        assert!(cumulative_flows(&[]).is_empty());
    }
}
