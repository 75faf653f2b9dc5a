use crate::errors::HeatingError;

/// Piecewise-linear lookup over sorted breakpoints.
///
/// Queries outside the breakpoint range return the nearest boundary value
/// instead of extrapolating the end slopes.
#[derive(Debug, Clone, PartialEq)]
pub struct ClampedTable {
    breakpoints: Vec<f64>,
    values: Vec<f64>,
}

impl ClampedTable {
    pub fn new(breakpoints: Vec<f64>, values: Vec<f64>) -> Result<Self, HeatingError> {
        if breakpoints.is_empty() {
            return Err(HeatingError::InvalidConfiguration(
                "lookup table needs at least one breakpoint".to_string(),
            ));
        }
        if breakpoints.len() != values.len() {
            return Err(HeatingError::InvalidConfiguration(format!(
                "lookup table has {} breakpoints but {} values",
                breakpoints.len(),
                values.len()
            )));
        }
        if breakpoints.iter().chain(values.iter()).any(|x| !x.is_finite()) {
            return Err(HeatingError::InvalidConfiguration(
                "lookup table contains non-finite entries".to_string(),
            ));
        }
        if breakpoints.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(HeatingError::InvalidConfiguration(
                "lookup table breakpoints must be strictly increasing".to_string(),
            ));
        }

        Ok(ClampedTable {
            breakpoints,
            values,
        })
    }

    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn lookup(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let last = self.breakpoints.len() - 1;
        if x <= self.breakpoints[0] {
            return self.values[0];
        }
        if x >= self.breakpoints[last] {
            return self.values[last];
        }

        // First breakpoint strictly greater than x; always in 1..=last here.
        let upper = self.breakpoints.partition_point(|&b| b <= x);
        let lower = upper - 1;

        let (x0, x1) = (self.breakpoints[lower], self.breakpoints[upper]);
        let (y0, y1) = (self.values[lower], self.values[upper]);
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-12;

    fn table() -> ClampedTable {
        ClampedTable::new(vec![0.0, 1.0, 3.0], vec![10.0, 20.0, 0.0]).unwrap()
    }

    #[test]
    fn test_exact_breakpoints() {
        let table = table();
        assert_relative_eq!(table.lookup(0.0), 10.0, epsilon = EPSILON);
        assert_relative_eq!(table.lookup(1.0), 20.0, epsilon = EPSILON);
        assert_relative_eq!(table.lookup(3.0), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_linear_between_breakpoints() {
        let table = table();
        assert_relative_eq!(table.lookup(0.5), 15.0, epsilon = EPSILON);
        assert_relative_eq!(table.lookup(2.0), 10.0, epsilon = EPSILON);
        assert_relative_eq!(table.lookup(2.5), 5.0, epsilon = EPSILON);
    }

    #[test]
    fn test_clamps_outside_range() {
        let table = table();
        assert_relative_eq!(table.lookup(-100.0), 10.0, epsilon = EPSILON);
        assert_relative_eq!(table.lookup(100.0), 0.0, epsilon = EPSILON);
        assert_relative_eq!(table.lookup(f64::INFINITY), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_single_breakpoint_is_constant() {
        let table = ClampedTable::new(vec![2.0], vec![7.0]).unwrap();
        assert_relative_eq!(table.lookup(-1.0), 7.0, epsilon = EPSILON);
        assert_relative_eq!(table.lookup(5.0), 7.0, epsilon = EPSILON);
    }

    #[test]
    fn test_rejects_malformed_tables() {
        assert!(ClampedTable::new(vec![], vec![]).is_err());
        assert!(ClampedTable::new(vec![0.0, 1.0], vec![1.0]).is_err());
        assert!(ClampedTable::new(vec![0.0, 0.0], vec![1.0, 2.0]).is_err());
        assert!(ClampedTable::new(vec![1.0, 0.0], vec![1.0, 2.0]).is_err());
        assert!(ClampedTable::new(vec![0.0, f64::NAN], vec![1.0, 2.0]).is_err());
    }
}
